// src/bin/cli.rs
use grec_harvest::cli;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    cli::run()
}
