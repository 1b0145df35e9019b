use clap::Parser;
use tracing::{debug, info};

mod cli;
mod commands;
mod console;
mod error;
mod logging;

use cli::Cli;
use error::CliError;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        tracing::error!("CLI error: {:?}", e);
        eprintln!("{e}");
        std::process::exit(e.exit_code());
    }
}

async fn run(cli: Cli) -> Result<(), CliError> {
    let config = cli.load_config()?;
    logging::init_logging(cli.verbose, &config.logging.level)?;

    info!("site-briefing starting");
    debug!("CLI arguments: {:?}", cli);

    cli.run(&config).await
}
