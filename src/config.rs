use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize)]
pub struct Config {
    pub range: RangeConfig,

    #[serde(default, skip_serializing_if = "OutputConfig::is_default")]
    pub output: OutputConfig,

    #[serde(default, skip_serializing_if = "Margins::is_default")]
    pub margins: Margins,

    #[serde(default, skip_serializing_if = "FetchConfig::is_default")]
    pub fetch: FetchConfig,
}

#[derive(Debug, Clone, Copy, Deserialize, Serialize)]
pub struct RangeConfig {
    /// First sprite id to fetch
    pub start: u32,
    /// Last sprite id to fetch (inclusive)
    pub end: u32,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct OutputConfig {
    /// Directory for processed sprites (default: "processed_sprites")
    #[serde(default = "default_output_dir")]
    pub dir: PathBuf,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: default_output_dir(),
        }
    }
}

impl OutputConfig {
    fn is_default(&self) -> bool {
        self.dir == default_output_dir()
    }
}

/// Per-side padding (in pixels) added around the trimmed sprite.
/// The defaults leave a little extra room at the bottom so sprites share a
/// consistent baseline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub struct Margins {
    #[serde(default = "default_margin_side")]
    pub left: u32,
    #[serde(default = "default_margin_side")]
    pub right: u32,
    #[serde(default = "default_margin_top")]
    pub top: u32,
    #[serde(default = "default_margin_bottom")]
    pub bottom: u32,
}

impl Default for Margins {
    fn default() -> Self {
        Self {
            left: default_margin_side(),
            right: default_margin_side(),
            top: default_margin_top(),
            bottom: default_margin_bottom(),
        }
    }
}

impl Margins {
    fn is_default(&self) -> bool {
        *self == Self::default()
    }
}

#[derive(Debug, Deserialize, Serialize)]
pub struct FetchConfig {
    /// URL template with an `{id}` placeholder
    #[serde(default = "default_url_template")]
    pub url_template: String,

    /// Pause between requests, in milliseconds (default: 250)
    #[serde(default = "default_delay_ms")]
    pub delay_ms: u64,

    /// Per-request timeout, in seconds (default: 10)
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            url_template: default_url_template(),
            delay_ms: default_delay_ms(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl FetchConfig {
    fn is_default(&self) -> bool {
        self.url_template == default_url_template()
            && self.delay_ms == default_delay_ms()
            && self.timeout_secs == default_timeout_secs()
    }
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("processed_sprites")
}

fn default_margin_side() -> u32 {
    4
}

fn default_margin_top() -> u32 {
    6
}

fn default_margin_bottom() -> u32 {
    10
}

fn default_url_template() -> String {
    "https://raw.githubusercontent.com/PokeAPI/sprites/master/sprites/pokemon/{id}.png".to_string()
}

fn default_delay_ms() -> u64 {
    250
}

fn default_timeout_secs() -> u64 {
    10
}

impl Config {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse {}", path.display()))?;

        config.validate()?;

        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.range.start == 0 {
            bail!("range.start must be at least 1");
        }
        if self.range.start > self.range.end {
            bail!(
                "range.start ({}) is greater than range.end ({})",
                self.range.start,
                self.range.end
            );
        }
        if !self.fetch.url_template.contains("{id}") {
            bail!("fetch.url_template must contain an {{id}} placeholder");
        }
        Ok(())
    }

    pub fn default_template() -> String {
        r#"# spritefetch configuration

[range]
start = 1              # First sprite id to fetch
end = 12               # Last sprite id (inclusive) — 1025 covers the full dex

# Output settings
# [output]
# dir = "processed_sprites"   # Directory for processed sprites

# Padding (in pixels) added around the trimmed sprite.
# Slightly more bottom margin keeps a consistent baseline.
# [margins]
# left = 4
# right = 4
# top = 6
# bottom = 10

# Fetch settings
# [fetch]
# url_template = "https://raw.githubusercontent.com/PokeAPI/sprites/master/sprites/pokemon/{id}.png"
# For shiny sprites, use:
# url_template = "https://raw.githubusercontent.com/PokeAPI/sprites/master/sprites/pokemon/shiny/{id}.png"
# delay_ms = 250         # Pause between requests
# timeout_secs = 10      # Per-request timeout
"#
        .to_string()
    }
}
