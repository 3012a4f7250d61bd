mod cli;
mod desktop;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::cli::Cli;

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

#[tokio::main]
async fn main() {
    init_tracing();
    let cli = Cli::parse();
    if let Err(err) = cli.run().await {
        // Binary glue: report once, with the full cause chain.
        eprintln!("error: {err:#}");
        std::process::exit(2);
    }
}
