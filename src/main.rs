//! Console binary entry point.

use clap::Parser;
use ozon_cli::catalog::Catalog;
use ozon_cli::cli::Cli;
use ozon_cli::config::OzonConfig;
use ozon_cli::console::StdioPrompt;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let config = OzonConfig::from_env().overlay(cli.into_config());
    let catalog = Catalog::builtin();
    let mut prompts = StdioPrompt;

    if let Err(e) = ozon_cli::session::run(&mut prompts, &catalog, config).await {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
