//! CLI argument definitions using clap.
//!
//! The tool takes exactly one output-format flag. The two flags form a
//! required, mutually exclusive group, so clap rejects an invocation with
//! neither or both of them before any output is produced.

use clap::{ArgGroup, Parser};

use crate::emit::OutputFormat;

#[derive(Debug, Parser)]
#[command(author, version, about = "Output English messages.", long_about = None)]
#[command(group(ArgGroup::new("format").required(true).multiple(false)))]
pub struct Arguments {
    /// Output a JSON string suitable for _locales
    #[arg(short, long, group = "format")]
    pub chrome: bool,

    /// Output a JavaScript object definition
    #[arg(short, long, group = "format")]
    pub safari: bool,
}

impl Arguments {
    /// The output format selected by the flags.
    ///
    /// The clap group guarantees exactly one flag is set.
    pub fn format(&self) -> OutputFormat {
        if self.chrome {
            OutputFormat::Locales
        } else {
            OutputFormat::ObjectLiteral
        }
    }
}
