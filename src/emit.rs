//! Output formatters for the two extension platforms.
//!
//! Both formatters are pure functions from a [`MessageCatalog`] to a string;
//! neither writes any file or executes its output. JSON escaping is handled by
//! `serde_json`, so quotes, backslashes, and control characters in message
//! text come out as valid JSON. Placeholder tokens like `$1` need no escaping
//! and appear verbatim.

use anyhow::Result;
use indexmap::IndexMap;
use serde::Serialize;

use crate::catalog::MessageCatalog;

/// The output format selected on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Chrome-style `_locales` JSON dictionary.
    Locales,
    /// Safari-style JavaScript object-literal assignment.
    ObjectLiteral,
}

/// One entry of the `_locales` dictionary: `{"message": <text>}`.
#[derive(Debug, Serialize)]
struct LocaleEntry<'a> {
    message: &'a str,
}

/// Format the catalog in the requested output format.
pub fn emit(catalog: &MessageCatalog, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Locales => locales_json(catalog),
        OutputFormat::ObjectLiteral => object_literal(catalog),
    }
}

/// Encode the catalog as a `_locales`-style JSON dictionary, where every key
/// maps to a nested object with a single `message` field.
pub fn locales_json(catalog: &MessageCatalog) -> Result<String> {
    let nested: IndexMap<&str, LocaleEntry<'_>> = catalog
        .iter()
        .map(|(key, text)| (key.as_str(), LocaleEntry { message: text }))
        .collect();

    Ok(serde_json::to_string(&nested)?)
}

/// Encode the catalog as a top-level JavaScript assignment statement,
/// `messages = {...};`, over the flat key-to-text mapping.
pub fn object_literal(catalog: &MessageCatalog) -> Result<String> {
    Ok(format!("messages = {};", serde_json::to_string(catalog.entries())?))
}
