pub mod about;
pub mod check;
pub mod prompt;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "webcheck")]
#[command(about = "All-in-one address lookup, right from the terminal.")]
pub struct CommandLine {
    /// Reduce output chrome (-q drops headers, -qq results only)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub quiet: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Classify an address and render its results view
    #[command(alias = "c")]
    Check { address: String },
    /// Interactive input field with live validation
    #[command(alias = "p")]
    Prompt,
    /// Show the supported checks and license information
    #[command(alias = "a")]
    About,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
