//! Parsing of the whitespace-delimited message table.
//!
//! Each non-blank line of the table holds a message key, a run of whitespace,
//! and the message text. The text may itself contain whitespace and
//! positional placeholders (`$1`, `$2`, ...), which are kept verbatim.

use anyhow::{Result, bail};
use indexmap::IndexMap;

/// All messages for the embedded language, keyed by message identifier.
///
/// Entries keep their insertion order so that formatted output is stable
/// across runs and diffs cleanly. Duplicate keys are allowed in the source
/// table; the last occurrence wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MessageCatalog {
    entries: IndexMap<String, String>,
}

impl MessageCatalog {
    /// Parse a message table block into a catalog.
    ///
    /// Empty and whitespace-only lines are skipped. Every remaining line is
    /// split on its first run of whitespace into key and text; the text keeps
    /// any internal whitespace. A line with a key but no text is a defect in
    /// the embedded table and fails parsing.
    pub fn parse(table: &str) -> Result<Self> {
        let mut entries = IndexMap::new();

        for line in table.lines() {
            let line = line.trim_start();
            if line.is_empty() {
                continue;
            }

            let Some((key, rest)) = line.split_once(char::is_whitespace) else {
                bail!("message table line has a key but no text: {line:?}");
            };
            let text = rest.trim_start();
            if text.is_empty() {
                bail!("message table line has a key but no text: {line:?}");
            }

            entries.insert(key.to_string(), text.to_string());
        }

        Ok(Self { entries })
    }

    /// The flat key-to-text mapping, in insertion order.
    pub fn entries(&self) -> &IndexMap<String, String> {
        &self.entries
    }

    /// Iterate over `(key, text)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &String)> {
        self.entries.iter()
    }

    /// Get a message text by key.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Get the number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
