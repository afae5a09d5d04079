use anyhow::Result;
use clap::Parser;
use lm_core::config::ReorderConfig;

pub mod cli;
pub mod pipeline;

fn main() -> Result<()> {
    // 1. Parser CLI
    let cli = cli::Cli::parse();

    // 2. Initialiser le logging
    env_logger::Builder::new()
        .filter_level(cli.log_level.parse().unwrap_or(log::LevelFilter::Warn))
        .init();

    // 3. Lancer le pipeline (cellules de 128 px, mapping identité)
    pipeline::run(&cli.input, &cli.output, &ReorderConfig::default())
}
