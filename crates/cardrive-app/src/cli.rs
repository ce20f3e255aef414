use cardrive_types::{FuelFilter, DEFAULT_API_URL};
use clap::Parser;
use std::path::PathBuf;

/// CLI arguments for cardrive
#[derive(Parser, Debug)]
#[command(name = "cardrive")]
#[command(about = "CarDrive - chat with an AI assistant to find your next car")]
#[command(version)]
pub struct Cli {
    /// Base URL of the car search service
    #[arg(long, value_name = "URL", env = "CARDRIVE_API_URL", default_value = DEFAULT_API_URL)]
    pub api_url: String,

    /// Start with a fuel filter applied (electric, hybrid, petrol, diesel)
    #[arg(long, value_name = "FUEL")]
    pub filter: Option<FuelFilter>,

    /// Run a single search, print the transcript and exit
    #[arg(long, value_name = "TEXT")]
    pub query: Option<String>,

    /// Write the transcript as JSONL files into this directory
    #[arg(long, value_name = "DIR", env = "CARDRIVE_LOG_DIR")]
    pub log_dir: Option<PathBuf>,

    /// Write the transcript into ~/.cardrive/logs
    #[arg(long, conflicts_with = "log_dir")]
    pub log: bool,

    /// Enable verbose debug output (shows HTTP requests and responses)
    #[arg(long, short = 'v')]
    pub verbose: bool,
}
