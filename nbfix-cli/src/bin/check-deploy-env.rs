//! Check deployment settings before publishing.
//!
//! Usage:
//!   check-deploy-env

use std::process::ExitCode;

fn main() -> ExitCode {
    let code = nbfix_cli::check_env::run(std::env::args_os(), &mut std::io::stdout());
    ExitCode::from(code)
}
