use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "vitae")]
#[command(version)]
#[command(about = "Filter and search CV experience data")]
pub struct Cli {
    /// Experience data: a JSON array or a cv.json document with an `experience` key
    #[arg(long, global = true, default_value = "cv.json")]
    pub data: PathBuf,

    /// JSON config overriding the defaults
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Append analytics events to this JSONL file
    #[arg(long, global = true)]
    pub events: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    pub fn options(&self) -> GlobalOptions {
        GlobalOptions {
            data: self.data.clone(),
            config: self.config.clone(),
            events: self.events.clone(),
        }
    }
}

/// Flags shared by every command
#[derive(Debug, Clone)]
pub struct GlobalOptions {
    pub data: PathBuf,
    pub config: Option<PathBuf>,
    pub events: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List records passing the category and skill filters
    Filter {
        #[command(flatten)]
        filter: FilterArgs,
    },

    /// Fuzzy search within the filtered records
    Search {
        /// Search text (at least two characters)
        query: String,

        #[command(flatten)]
        filter: FilterArgs,
    },

    /// Count records per skill and per category
    Skills,

    /// Load the dataset and report what it contains
    Validate,

    /// Print the version and the effective configuration
    Version,
}

#[derive(Args, Debug, Clone, Default)]
pub struct FilterArgs {
    /// Category tag, or `all`
    #[arg(short, long, default_value = "all")]
    pub category: String,

    /// Skill to filter by (repeatable; records need any one of them)
    #[arg(short, long = "skill")]
    pub skills: Vec<String>,
}
