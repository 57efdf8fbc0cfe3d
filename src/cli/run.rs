use anyhow::{Context, Result};

use super::args::Arguments;
use crate::catalog::MessageCatalog;
use crate::{emit, table};

/// Produce the output selected by the parsed arguments.
///
/// Parses the embedded message table and formats it for the requested
/// platform. The caller is responsible for writing the result to stdout.
pub fn run(args: Arguments) -> Result<String> {
    let catalog =
        MessageCatalog::parse(table::MESSAGES).context("embedded message table is malformed")?;

    emit::emit(&catalog, args.format())
}
