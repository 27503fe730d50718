use anyhow::Result;
use clap::Parser;
use spritefetch::cli::{Cli, Commands};
use spritefetch::commands;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match &cli.command {
        Commands::Init => commands::init::run(&cli),
        Commands::Fetch {
            start,
            end,
            dry_run,
        } => commands::fetch::run(&cli, *start, *end, *dry_run).await,
        Commands::Process { files, out_dir } => {
            commands::process::run(&cli, files, out_dir.as_deref())
        }
    }
}
