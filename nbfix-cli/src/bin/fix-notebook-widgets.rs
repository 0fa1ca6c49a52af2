//! Repair `metadata.widgets` in a Jupyter notebook, in place.
//!
//! Usage:
//!   fix-notebook-widgets `<path>` [--config `<file>`]

use std::process::ExitCode;

fn main() -> ExitCode {
    let code = nbfix_cli::fix::run(std::env::args_os(), &mut std::io::stdout());
    ExitCode::from(code)
}
