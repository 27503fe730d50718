use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "spritefetch",
    about = "Batch-download sprites by id, trim transparent borders, and re-pad with fixed margins"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to config file
    #[arg(long, global = true, default_value = "spritefetch.toml")]
    pub config: PathBuf,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize a new spritefetch.toml config file
    Init,

    /// Download and process sprites for the configured id range
    Fetch {
        /// Override the configured start id
        #[arg(long)]
        start: Option<u32>,

        /// Override the configured end id (inclusive)
        #[arg(long)]
        end: Option<u32>,

        /// Show what would be fetched without downloading anything
        #[arg(long)]
        dry_run: bool,
    },

    /// Trim and re-pad local image files with the configured margins
    Process {
        /// Image files to process
        files: Vec<PathBuf>,

        /// Directory for processed images (defaults to the configured output dir)
        #[arg(long)]
        out_dir: Option<PathBuf>,
    },
}
