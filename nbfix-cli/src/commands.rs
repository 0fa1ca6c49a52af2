//! clap definitions for both binaries
//!
//! This file is also compiled into `build.rs` (via `#[path]`) to generate shell completions,
//! so it may only depend on clap.

use clap::{value_parser, Arg, Command, ValueHint};
use std::path::PathBuf;

pub const FIX_BIN: &str = "fix-notebook-widgets";
pub const CHECK_ENV_BIN: &str = "check-deploy-env";

pub fn fix_command() -> Command {
    Command::new(FIX_BIN)
        .version(env!("CARGO_PKG_VERSION"))
        .about("Normalize widget metadata in a Jupyter notebook, in place")
        .arg(
            Arg::new("path")
                .help("Path to the notebook file")
                .required(true)
                .index(1)
                .value_parser(value_parser!(PathBuf))
                .value_hint(ValueHint::FilePath),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .help("Configuration file layered over the defaults and NBFIX_CONFIG")
                .value_parser(value_parser!(PathBuf))
                .value_hint(ValueHint::FilePath),
        )
        .arg(
            Arg::new("indent")
                .long("indent")
                .help("Spaces per nesting level in the rewritten file")
                .value_parser(value_parser!(u8)),
        )
}

pub fn check_env_command() -> Command {
    Command::new(CHECK_ENV_BIN)
        .version(env!("CARGO_PKG_VERSION"))
        .about("Check deployment settings, prompting for any that are missing")
}
