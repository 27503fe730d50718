use std::io::Cursor;
use std::path::{Path, PathBuf};
use std::time::Duration;

use httpmock::prelude::*;
use image::{ImageFormat, Rgba, RgbaImage};
use spritefetch::api::SpriteClient;
use spritefetch::cli::{Cli, Commands};
use spritefetch::commands;

fn sprite_png(width: u32, height: u32, opaque: &[(u32, u32)]) -> Vec<u8> {
    let mut img = RgbaImage::new(width, height);
    for &(x, y) in opaque {
        img.put_pixel(x, y, Rgba([10, 20, 30, 255]));
    }
    let mut buf = Vec::new();
    img.write_to(&mut Cursor::new(&mut buf), ImageFormat::Png)
        .unwrap();
    buf
}

fn write_config(dir: &Path, server: &MockServer, start: u32, end: u32) -> PathBuf {
    let path = dir.join("spritefetch.toml");
    std::fs::write(
        &path,
        format!(
            r#"
[range]
start = {}
end = {}

[output]
dir = "{}"

[fetch]
url_template = "{}"
delay_ms = 0
"#,
            start,
            end,
            dir.join("out").display(),
            server.url("/sprites/{id}.png"),
        ),
    )
    .unwrap();
    path
}

fn cli(config_path: &Path) -> Cli {
    Cli {
        command: Commands::Fetch {
            start: None,
            end: None,
            dry_run: false,
        },
        config: config_path.to_path_buf(),
    }
}

#[tokio::test]
async fn missing_sprite_is_skipped_and_next_id_attempted() {
    let dir = tempfile::tempdir().unwrap();
    let server = MockServer::start();

    let missing = server.mock(|when, then| {
        when.method(GET).path("/sprites/13.png");
        then.status(404);
    });
    let present = server.mock(|when, then| {
        when.method(GET).path("/sprites/14.png");
        then.status(200).body(sprite_png(10, 10, &[(5, 5)]));
    });

    let config_path = write_config(dir.path(), &server, 13, 14);
    commands::fetch::run(&cli(&config_path), None, None, false)
        .await
        .unwrap();

    missing.assert();
    present.assert();

    let out = dir.path().join("out");
    assert!(!out.join("13.png").exists());
    assert!(out.join("14.png").exists());
}

#[tokio::test]
async fn every_id_in_range_is_attempted_once() {
    let dir = tempfile::tempdir().unwrap();
    let server = MockServer::start();

    let all_missing = server.mock(|when, then| {
        when.method(GET).path_contains("/sprites/");
        then.status(404);
    });

    let config_path = write_config(dir.path(), &server, 1, 5);
    commands::fetch::run(&cli(&config_path), None, None, false)
        .await
        .unwrap();

    all_missing.assert_hits(5);
    let entries: Vec<_> = std::fs::read_dir(dir.path().join("out"))
        .unwrap()
        .collect();
    assert!(entries.is_empty());
}

#[tokio::test]
async fn corrupt_body_does_not_abort_the_run() {
    let dir = tempfile::tempdir().unwrap();
    let server = MockServer::start();

    server.mock(|when, then| {
        when.method(GET).path("/sprites/1.png");
        then.status(200).body("definitely not an image");
    });
    server.mock(|when, then| {
        when.method(GET).path("/sprites/2.png");
        then.status(200).body(sprite_png(10, 10, &[(5, 5)]));
    });

    let config_path = write_config(dir.path(), &server, 1, 2);
    commands::fetch::run(&cli(&config_path), None, None, false)
        .await
        .unwrap();

    let out = dir.path().join("out");
    assert!(!out.join("1.png").exists());
    assert!(out.join("2.png").exists());
}

#[tokio::test]
async fn saved_sprite_is_trimmed_and_padded() {
    let dir = tempfile::tempdir().unwrap();
    let server = MockServer::start();

    server.mock(|when, then| {
        when.method(GET).path("/sprites/1.png");
        then.status(200).body(sprite_png(10, 10, &[(5, 5)]));
    });

    let config_path = write_config(dir.path(), &server, 1, 1);
    commands::fetch::run(&cli(&config_path), None, None, false)
        .await
        .unwrap();

    // Default margins: 4 left + 4 right, 6 top + 10 bottom around a 1x1 crop
    let saved = image::open(dir.path().join("out").join("1.png"))
        .unwrap()
        .to_rgba8();
    assert_eq!(saved.dimensions(), (9, 17));
    assert_eq!(saved.get_pixel(4, 6), &Rgba([10, 20, 30, 255]));
}

#[tokio::test]
async fn range_overrides_from_cli() {
    let dir = tempfile::tempdir().unwrap();
    let server = MockServer::start();

    let only_seven = server.mock(|when, then| {
        when.method(GET).path("/sprites/7.png");
        then.status(200).body(sprite_png(4, 4, &[(1, 1)]));
    });

    let config_path = write_config(dir.path(), &server, 1, 5);
    commands::fetch::run(&cli(&config_path), Some(7), Some(7), false)
        .await
        .unwrap();

    only_seven.assert();
    assert!(dir.path().join("out").join("7.png").exists());
}

#[tokio::test]
async fn dry_run_touches_neither_network_nor_disk() {
    let dir = tempfile::tempdir().unwrap();
    let server = MockServer::start();

    let any = server.mock(|when, then| {
        when.method(GET).path_contains("/sprites/");
        then.status(200).body(sprite_png(4, 4, &[(1, 1)]));
    });

    let config_path = write_config(dir.path(), &server, 1, 3);
    commands::fetch::run(&cli(&config_path), None, None, true)
        .await
        .unwrap();

    any.assert_hits(0);
    assert!(!dir.path().join("out").exists());
}

#[tokio::test]
async fn inverted_override_range_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let server = MockServer::start();

    let config_path = write_config(dir.path(), &server, 1, 5);
    let err = commands::fetch::run(&cli(&config_path), Some(9), Some(2), false)
        .await
        .unwrap_err();
    assert!(err.to_string().contains("greater than"), "error: {}", err);
}

#[test]
fn sprite_url_substitutes_the_id() {
    let client = SpriteClient::new(
        "https://example.com/sprites/pokemon/{id}.png",
        Duration::from_secs(10),
    )
    .unwrap();

    assert_eq!(
        client.sprite_url(25),
        "https://example.com/sprites/pokemon/25.png"
    );
}
