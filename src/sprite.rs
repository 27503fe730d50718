use std::io::Cursor;
use std::path::Path;

use anyhow::{Context, Result};
use image::{ImageFormat, RgbaImage};

use crate::config::Margins;
use crate::trim;

/// Decodes downloaded bytes and applies the trim/pad pipeline.
pub fn process_sprite(bytes: &[u8], margins: &Margins) -> Result<RgbaImage> {
    let img = image::load_from_memory(bytes).context("Failed to decode image")?;
    Ok(trim::trim_and_pad(&img, margins))
}

/// Encodes a processed sprite as PNG and writes it to disk, overwriting any
/// existing file at the same path.
pub fn save_png(img: &RgbaImage, path: &Path) -> Result<()> {
    let mut buf = Vec::new();
    img.write_to(&mut Cursor::new(&mut buf), ImageFormat::Png)
        .with_context(|| format!("Failed to encode {}", path.display()))?;

    std::fs::write(path, buf).with_context(|| format!("Failed to write {}", path.display()))?;

    Ok(())
}
