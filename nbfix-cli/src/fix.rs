//! `fix-notebook-widgets`
//!
//! Usage:
//!   fix-notebook-widgets `<path>` [--config `<file>`] [--indent `<n>`]
//!
//! Rewrites the notebook at `<path>` in place so every `metadata.widgets` entry is either
//! gone or a mapping with a `state` key. Exit codes are listed in [`crate::exit`].

use crate::commands::fix_command;
use crate::{exit, logging};
use nbfix_config::{ConfigError, Loader, NbfixConfig, CONFIG_ENV};
use nbfix_core::{fix_notebook, NotebookError};
use std::ffi::OsString;
use std::io::Write;
use std::path::PathBuf;

/// Defaults, then `NBFIX_CONFIG`, then `--config`, then `--indent`
fn load_config(matches: &clap::ArgMatches) -> Result<NbfixConfig, ConfigError> {
    let mut loader = Loader::new().with_env_file(CONFIG_ENV);
    if let Some(config_path) = matches.get_one::<PathBuf>("config") {
        loader = loader.with_file(config_path);
    }
    if let Some(&indent) = matches.get_one::<u8>("indent") {
        loader = loader.set_override("output.indent_width", i64::from(indent))?;
    }
    loader.build()
}

/// Parse `args`, fix the notebook, and return the exit code.
///
/// User-facing results (confirmation, usage, file not found) go to `out`; everything
/// else goes to stderr.
pub fn run<I, T>(args: I, out: &mut dyn Write) -> u8
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let matches = match fix_command().try_get_matches_from(args) {
        Ok(matches) => matches,
        Err(err) => return exit::report_clap_error(&err, out),
    };

    let path = matches
        .get_one::<PathBuf>("path")
        .expect("path is a required argument");

    let config = match load_config(&matches) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            return exit::CONFIG;
        }
    };
    logging::init(&config.logging.filter);

    match fix_notebook(path, &config.write_options()) {
        Ok(stats) => {
            tracing::debug!(changed = stats.changed(), "done");
            let _ = writeln!(out, "Fixed widgets in {}", path.display());
            exit::SUCCESS
        }
        Err(err @ NotebookError::NotFound { .. }) => {
            let _ = writeln!(out, "{}", err);
            exit::NOT_FOUND
        }
        Err(err) => {
            eprintln!("Error: {}", err);
            exit::for_notebook_error(&err)
        }
    }
}
