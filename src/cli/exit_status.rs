use std::process::ExitCode;

/// Exit status for the CLI, following common conventions for CLI tools.
///
/// - `Success` (0): Output was produced.
/// - `Error` (2): Internal error (malformed embedded table, stdout failure).
///
/// Argument errors also exit with 2, via clap's own error handling.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    /// Output was produced.
    Success,
    /// Internal error (malformed embedded table, stdout failure).
    Error,
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        match status {
            ExitStatus::Success => ExitCode::from(0),
            ExitStatus::Error => ExitCode::from(2),
        }
    }
}
