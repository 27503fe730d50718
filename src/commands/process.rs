use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use colored::Colorize;

use crate::cli::Cli;
use crate::config::Config;
use crate::sprite;
use crate::trim;

pub fn run(cli: &Cli, files: &[PathBuf], out_dir: Option<&Path>) -> Result<()> {
    if files.is_empty() {
        bail!("No input files given");
    }

    let config = Config::load(&cli.config)?;
    let dest = out_dir.unwrap_or(&config.output.dir);

    std::fs::create_dir_all(dest)
        .with_context(|| format!("Failed to create {}", dest.display()))?;

    for path in files {
        let img =
            image::open(path).with_context(|| format!("Failed to open {}", path.display()))?;
        let processed = trim::trim_and_pad(&img, &config.margins);

        let file_name = path
            .file_name()
            .with_context(|| format!("Not a file path: {}", path.display()))?;
        let out_path = dest.join(file_name).with_extension("png");

        sprite::save_png(&processed, &out_path)?;
        println!(
            "{} {} -> {}",
            "✓".green(),
            path.display(),
            out_path.display()
        );
    }

    Ok(())
}
