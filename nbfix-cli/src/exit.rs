//! Process exit codes

use nbfix_core::NotebookError;
use std::io::Write;

pub const SUCCESS: u8 = 0;
/// Bad or missing arguments
pub const USAGE: u8 = 1;
/// The notebook path does not exist
pub const NOT_FOUND: u8 = 2;
/// The notebook is not valid JSON
pub const PARSE: u8 = 3;
/// Reading or writing the notebook failed
pub const IO: u8 = 4;
/// The configuration file could not be loaded
pub const CONFIG: u8 = 5;
/// Ctrl+C at a prompt, following the shell's 128 + SIGINT convention
pub const INTERRUPTED: u8 = 130;

pub fn for_notebook_error(err: &NotebookError) -> u8 {
    match err {
        NotebookError::NotFound { .. } => NOT_FOUND,
        NotebookError::Parse { .. } | NotebookError::TooDeep { .. } => PARSE,
        NotebookError::Read { .. }
        | NotebookError::Serialize { .. }
        | NotebookError::Write { .. } => IO,
    }
}

/// Print a clap parse error (usage included) to `out` and pick the exit code.
///
/// `--help` and `--version` also come through here and are not failures.
pub fn report_clap_error(err: &clap::Error, out: &mut dyn Write) -> u8 {
    let _ = write!(out, "{}", err.render());
    match err.kind() {
        clap::error::ErrorKind::DisplayHelp | clap::error::ErrorKind::DisplayVersion => SUCCESS,
        _ => USAGE,
    }
}
