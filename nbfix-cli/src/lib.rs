//! Command-line front ends for nbfix
//!
//!     Two binaries live in this crate. `fix-notebook-widgets` repairs the widgets metadata of
//!     one notebook in place; `check-deploy-env` resolves the deployment settings and prints a
//!     masked summary. Each binary is a thin `main` over a `run` function here, which takes
//!     the argument list and a writer for stdout and returns the process exit code. That
//!     keeps the exit-code contract testable without spawning a process.
//!
//!     Everything shell specific (terminal raw mode, the logging subscriber, stdout and
//!     stderr) is confined to this crate. `nbfix-core` stays shell agnostic.
pub mod check_env;
pub mod commands;
pub mod exit;
pub mod fix;
pub mod logging;
pub mod terminal;
