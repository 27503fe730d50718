use std::time::Duration;

use anyhow::{bail, Context, Result};
use colored::Colorize;

use crate::api::SpriteClient;
use crate::cli::Cli;
use crate::config::Config;
use crate::sprite;

pub async fn run(cli: &Cli, start: Option<u32>, end: Option<u32>, dry_run: bool) -> Result<()> {
    let config = Config::load(&cli.config)?;

    let start = start.unwrap_or(config.range.start);
    let end = end.unwrap_or(config.range.end);
    if start == 0 {
        bail!("start id must be at least 1");
    }
    if start > end {
        bail!("start id ({}) is greater than end id ({})", start, end);
    }

    let client = SpriteClient::new(
        &config.fetch.url_template,
        Duration::from_secs(config.fetch.timeout_secs),
    )?;
    let dest = &config.output.dir;

    if dry_run {
        for id in start..=end {
            println!(
                "  {} {} -> {}",
                "·".dimmed(),
                client.sprite_url(id),
                dest.join(format!("{}.png", id)).display()
            );
        }
        println!("\n{} Dry run — nothing downloaded.", "ℹ".blue());
        return Ok(());
    }

    std::fs::create_dir_all(dest)
        .with_context(|| format!("Failed to create {}", dest.display()))?;

    let delay = Duration::from_millis(config.fetch.delay_ms);
    let mut saved = 0u32;
    let mut skipped = 0u32;

    for id in start..=end {
        let Some(bytes) = client.download_sprite(id).await else {
            skipped += 1;
            tokio::time::sleep(delay).await;
            continue;
        };

        // A corrupt body skips this id, same as a failed download.
        let processed = match sprite::process_sprite(&bytes, &config.margins) {
            Ok(img) => img,
            Err(e) => {
                println!("{} [{}] {:#}, skipping", "!".yellow(), id, e);
                skipped += 1;
                tokio::time::sleep(delay).await;
                continue;
            }
        };

        let out_path = dest.join(format!("{}.png", id));
        sprite::save_png(&processed, &out_path)?;
        saved += 1;
        println!("{} [{}] saved to {}", "✓".green(), id, out_path.display());

        tokio::time::sleep(delay).await;
    }

    println!(
        "\n{} Saved {} sprites, skipped {}",
        "✓".green(),
        saved,
        skipped
    );

    Ok(())
}
