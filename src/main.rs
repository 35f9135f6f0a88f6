//! bbdocgen CLI entry point
//!
//! Parses arguments, sets up logging, and runs the page generator. Per-script
//! problems never change the exit status; only an unusable `--config` file
//! exits non-zero.

use anyhow::Result;
use bbdocgen::cli;
use bbdocgen::core::user_friendly_error;
use clap::Parser;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();

    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    let config = cli.build_config();
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();

    match cli.execute() {
        Ok(_) => Ok(()),
        Err(e) => {
            let error_ctx = user_friendly_error(e);
            error_ctx.display();
            std::process::exit(1);
        }
    }
}
