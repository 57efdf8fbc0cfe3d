use std::io::{self, Write};

use anyhow::{Context, Result};

mod args;
mod exit_status;
mod run;

pub use args::Arguments;
pub use exit_status::ExitStatus;

/// Run the CLI: format the embedded message table and print the result.
///
/// Writes the selected output followed by a newline to stdout. Argument
/// errors never reach this function; clap reports them and exits first.
pub fn run_cli(args: Arguments) -> Result<ExitStatus> {
    let output = run::run(args)?;

    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{output}").context("failed to write to stdout")?;

    Ok(ExitStatus::Success)
}
