//! Storefront CLI

use std::process;

use crate::config::CliConfig;

mod commands;
mod config;
mod observability;

/// Storefront CLI entry point
#[tokio::main(flavor = "current_thread")]
pub async fn main() {
    let config = CliConfig::load().unwrap_or_else(|error| error.exit());

    if let Err(error) = observability::init_subscriber(&config.logging) {
        #[expect(
            clippy::print_stderr,
            reason = "logging is not initialised, must use eprintln"
        )]
        {
            eprintln!("{error}");
        }

        process::exit(1);
    }

    if let Err(message) = commands::run(config).await {
        #[expect(clippy::print_stderr, reason = "user-facing failure notice")]
        {
            eprintln!("{message}");
        }

        process::exit(1);
    }
}
