//! templ-heroicons entry point
//!
//! Parses arguments, sets up logging and runs the generator. Failures are
//! printed with details and suggestions and exit with status 1.

use anyhow::Result;
use clap::Parser;
use templ_heroicons::cli;
use templ_heroicons::core::error::user_friendly_error;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = cli::Cli::parse();

    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    let config = cli.build_config();
    config.init_logging();

    match cli.execute_with_config(config).await {
        Ok(()) => Ok(()),
        Err(e) => {
            let error_ctx = user_friendly_error(e);
            error_ctx.display();
            std::process::exit(1);
        }
    }
}
