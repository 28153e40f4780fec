use clap::{Parser, Subcommand};
use chrono::NaiveDate;

#[derive(Debug, Clone, Parser)]
#[command(name = "warranty-advisor")]
#[command(about = "Extended warranty eligibility, pricing and recording")]
pub struct CliConfig {
    /// Path to TOML configuration file
    #[arg(short, long, default_value = "warranty.toml")]
    pub config: String,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Issue a warranty and print it
    Generate {
        #[arg(long)]
        code: String,
        #[arg(long)]
        client: String,
    },
    /// Show fee and end date without recording anything
    Quote {
        #[arg(long)]
        code: String,
        /// Defaults to today
        #[arg(long)]
        start: Option<NaiveDate>,
    },
    /// Report eligibility and whether a warranty already exists
    Check {
        #[arg(long)]
        code: String,
    },
}
