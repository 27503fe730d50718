use std::time::Duration;

use anyhow::{Context, Result};
use colored::Colorize;
use reqwest::{Client, StatusCode};

pub struct SpriteClient {
    client: Client,
    url_template: String,
}

impl SpriteClient {
    pub fn new(url_template: &str, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .gzip(true)
            .timeout(timeout)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            client,
            url_template: url_template.to_string(),
        })
    }

    /// URL for one sprite id, substituted into the configured template.
    pub fn sprite_url(&self, id: u32) -> String {
        self.url_template.replace("{id}", &id.to_string())
    }

    /// Download the raw bytes for one sprite id.
    ///
    /// A non-200 status or a transport error is logged and reported as `None`
    /// so the caller can skip the id and keep going.
    pub async fn download_sprite(&self, id: u32) -> Option<Vec<u8>> {
        let url = self.sprite_url(id);

        let response = match self.client.get(&url).send().await {
            Ok(response) => response,
            Err(e) => {
                println!("{} [{}] Error downloading: {}", "!".yellow(), id, e);
                return None;
            }
        };

        let status = response.status();
        if status != StatusCode::OK {
            println!(
                "{} [{}] HTTP {}, skipping",
                "!".yellow(),
                id,
                status.as_u16()
            );
            return None;
        }

        match response.bytes().await {
            Ok(bytes) => Some(bytes.to_vec()),
            Err(e) => {
                println!("{} [{}] Error reading response: {}", "!".yellow(), id, e);
                None
            }
        }
    }
}
