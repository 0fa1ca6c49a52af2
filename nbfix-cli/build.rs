use clap_complete::{generate_to, shells::*};
use std::env;
use std::io::Error;

#[path = "src/commands.rs"]
mod commands;

fn main() -> Result<(), Error> {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=src/commands.rs");

    let outdir = match env::var_os("OUT_DIR") {
        None => return Ok(()),
        Some(outdir) => outdir,
    };

    for (mut cmd, name) in [
        (commands::fix_command(), commands::FIX_BIN),
        (commands::check_env_command(), commands::CHECK_ENV_BIN),
    ] {
        generate_to(Bash, &mut cmd, name, &outdir)?;
        generate_to(Zsh, &mut cmd, name, &outdir)?;
        generate_to(Fish, &mut cmd, name, &outdir)?;
    }

    Ok(())
}
