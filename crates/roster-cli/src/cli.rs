use crate::commands::Commands;

use clap::Parser;

#[derive(Parser)]
#[command(name = "roster")]
#[command(about = "Local-first user directory client")]
#[command(version)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// User API base URL (overrides config and ROSTER_API_URL)
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,
}
