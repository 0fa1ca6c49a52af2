//! `check-deploy-env`
//!
//! Usage:
//!   check-deploy-env
//!
//! Reads `HF_HUB_TOKEN` (or `HF_TOKEN`), `HF_REPO_ID` and `BACKEND_API_URL`, prompts for any
//! that are unset, and prints a summary with the token masked. Nothing is written to disk.
//! The logging filter comes from the defaults or the `NBFIX_CONFIG` file.

use crate::commands::check_env_command;
use crate::terminal::TerminalPrompter;
use crate::{exit, logging};
use nbfix_core::deploy_env::{resolve_deploy_env, ProcessEnv};
use nbfix_core::PromptError;
use std::ffi::OsString;
use std::io::Write;

pub fn run<I, T>(args: I, out: &mut dyn Write) -> u8
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    if let Err(err) = check_env_command().try_get_matches_from(args) {
        return exit::report_clap_error(&err, out);
    }

    let config = match nbfix_config::load_user() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            return exit::CONFIG;
        }
    };
    logging::init(&config.logging.filter);

    let mut prompter = TerminalPrompter::new();
    match resolve_deploy_env(&ProcessEnv, &mut prompter) {
        Ok(settings) => {
            let _ = write!(out, "{}", settings.summary());
            exit::SUCCESS
        }
        Err(PromptError::Interrupted) => {
            eprintln!();
            exit::INTERRUPTED
        }
        Err(err) => {
            eprintln!("Error: {}", err);
            exit::USAGE
        }
    }
}
