//! Sibyl CLI - ask business questions, get chart-ready answers

mod cli;
mod commands;
mod output;

use clap::Parser;
use cli::{Cli, Commands};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    if cli.verbose {
        tracing_subscriber::fmt().with_env_filter("debug").init();
    } else {
        tracing_subscriber::fmt().with_env_filter("warn").init();
    }

    let rt = tokio::runtime::Runtime::new()?;

    match cli.command {
        Commands::Ask {
            ref question,
            ref export,
            demo,
        } => rt.block_on(commands::ask::run(
            &cli,
            question,
            export.as_deref(),
            demo,
        )),
        Commands::Chat => rt.block_on(commands::chat::run(&cli)),
        Commands::Suggest => {
            commands::suggest::run();
            Ok(())
        }
    }
}
