use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "sibyl",
    version,
    about = "Ask business questions, get chart-ready answers"
)]
pub struct Cli {
    /// Path to a sibyl.yml configuration file (defaults to environment
    /// variables)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Send one question and print the visualization descriptor
    Ask {
        /// The business question to ask
        question: String,

        /// Write the deliverable as pretty JSON to this path
        #[arg(short, long)]
        export: Option<PathBuf>,

        /// Fall back to a demo visualization when the assistant has no data
        #[arg(long)]
        demo: bool,
    },

    /// Interactive chat session
    Chat,

    /// Show suggested report prompts
    Suggest,
}
