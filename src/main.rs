mod cli;
mod application;
mod domain;
mod ml;
mod infra;

use anyhow::Result;
use cli::Cli;
use clap::Parser;

fn main() -> Result<()> {
    // stdout carries the menu and results; diagnostics go to stderr
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("weed_remover=info".parse()?),
        )
        .init();

    let cli = Cli::parse();
    cli.run()
}
