use std::process::{Command, Output};

use anyhow::Result;
use insta_cmd::get_cargo_bin;


const BIN_NAME: &str = "msggen";

pub fn command() -> Command {
    Command::new(get_cargo_bin(BIN_NAME))
}

/// Run the binary with the given arguments and capture its output.
pub fn run_with(args: &[&str]) -> Result<Output> {
    Ok(command().args(args).output()?)
}

/// Run the binary expecting success, returning stdout as a string.
pub fn run_ok(args: &[&str]) -> Result<String> {
    let output = run_with(args)?;
    assert!(
        output.status.success(),
        "expected success, got {:?}: {}",
        output.status,
        String::from_utf8_lossy(&output.stderr)
    );
    Ok(String::from_utf8(output.stdout)?)
}
