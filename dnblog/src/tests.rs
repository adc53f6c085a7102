//! Tests for the dnblog CLI.

use std::{io::Write, path::Path};

use clap::Parser;
use tempfile::NamedTempFile;

use crate::cli::{Cli, Command, PostArgs, PublishArgs};
use crate::commands::{self, CommandContext};
use crate::config::Config;

const POST: &str = "Hello DNS\n2019-08-30\n\nThis post lives in TXT records.\n";

fn post_file(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Temp file should be created");
    file.write_all(content.as_bytes())
        .expect("Post should be written");
    file
}

fn post_args(path: &Path) -> PostArgs {
    PostArgs {
        path: path.to_path_buf(),
        id: None,
        title: None,
        date: None,
    }
}

fn publish_args(path: &Path) -> PublishArgs {
    PublishArgs {
        post: post_args(path),
        domain: None,
        ttl: None,
        output: None,
    }
}

#[test]
fn test_missing_config_uses_defaults() {
    let config = Config::load(Path::new("does-not-exist.toml")).expect("Defaults should load");
    assert_eq!(config, Config::default());
    assert_eq!(config.zone.domain, "blog.tazj.in");
    assert_eq!(config.zone.ttl, 1200);
    assert_eq!(config.encoder.chunk_size, 200);
}

#[test]
fn test_config_parsing() {
    let config = Config::from_toml(
        r#"
        [zone]
        domain = "posts.example.com"

        [encoder]
        chunkSize = 120
        "#,
    )
    .expect("Config should parse");
    assert_eq!(config.zone.domain, "posts.example.com");
    assert_eq!(config.zone.ttl, 1200, "Unset keys should keep defaults");
    assert_eq!(config.encoder.chunk_size, 120);
}

#[test]
fn test_config_rejects_zero_chunk_size() {
    assert!(Config::from_toml("[encoder]\nchunkSize = 0\n").is_err());
    assert!(Config::from_toml("[zone]\nttl = \"soon\"\n").is_err());
}

#[test]
fn test_cli_parsing() {
    let cli = Cli::try_parse_from([
        "dnblog",
        "--dry-run",
        "publish",
        "post.txt",
        "--id",
        "first",
        "--ttl",
        "60",
    ])
    .expect("CLI should parse");
    assert!(cli.global.dry_run);
    match cli.command {
        Command::Publish(args) => {
            assert_eq!(args.post.id.as_deref(), Some("first"));
            assert_eq!(args.ttl, Some(60));
        }
        Command::Show(_) => panic!("Expected publish command"),
    }
}

#[test]
fn test_render_uses_header_and_derived_id() {
    let file = post_file(POST);
    let config = Config::default();
    let ctx = CommandContext::new(&config, false);

    let rendered = commands::render(&ctx, &publish_args(file.path())).expect("Should render");
    let output = String::from_utf8(rendered).expect("Output should be UTF-8");
    let lines: Vec<&str> = output.lines().collect();

    assert_eq!(lines.len(), 2);
    assert!(lines[0].starts_with("_meta.hello-dns.blog.tazj.in. 1200 IN TXT \""));
    assert!(lines[1].starts_with("_0.hello-dns.blog.tazj.in. 1200 IN TXT \""));
}

#[test]
fn test_render_overrides() {
    let file = post_file("raw text only");
    let config = Config::default();
    let ctx = CommandContext::new(&config, false);

    let mut args = publish_args(file.path());
    args.post.title = Some("Raw".to_string());
    args.post.id = Some("raw-post".to_string());
    args.domain = Some("example.org.".to_string());
    args.ttl = Some(300);

    let rendered = commands::render(&ctx, &args).expect("Should render");
    let output = String::from_utf8(rendered).expect("Output should be UTF-8");
    assert!(output.contains("_meta.raw-post.example.org. 300 IN TXT"));
    assert!(output.contains("_0.raw-post.example.org. 300 IN TXT"));
}

#[test]
fn test_dry_run_renders_nothing() {
    let file = post_file(POST);
    let config = Config::default();
    let ctx = CommandContext::new(&config, true);

    let rendered = commands::render(&ctx, &publish_args(file.path())).expect("Should render");
    assert!(rendered.is_empty());
}

#[test]
fn test_publish_to_output_file() {
    let file = post_file(POST);
    let out = NamedTempFile::new().expect("Temp file should be created");
    let config = Config::default();
    let ctx = CommandContext::new(&config, false);

    let mut args = publish_args(file.path());
    args.output = Some(out.path().to_path_buf());
    commands::publish(&ctx, &args).expect("Should publish");

    let written = std::fs::read_to_string(out.path()).expect("Output should be readable");
    assert_eq!(written.lines().count(), 2);
}

#[test]
fn test_summary() {
    let file = post_file(POST);
    let config = Config::default();
    let ctx = CommandContext::new(&config, false);

    let summary = commands::summary(&ctx, &post_args(file.path())).expect("Should summarise");
    assert_eq!(summary["id"], "hello-dns");
    assert_eq!(summary["meta"]["t"], "Hello DNS");
    assert_eq!(summary["meta"]["d"], "2019-08-30");
    assert_eq!(summary["meta"]["c"], 1);
    assert_eq!(summary["chunks"], 1);
    assert_eq!(summary["chunkSize"], 200);
}

#[test]
fn test_date_flag_overrides_header() {
    let file = post_file(POST);
    let config = Config::default();
    let ctx = CommandContext::new(&config, false);

    let mut args = post_args(file.path());
    args.date = Some("2021-01-01".to_string());
    let post = commands::load_post(&ctx, &args).expect("Should load");
    assert_eq!(post.meta.date.to_iso_date_string(), "2021-01-01");

    args.date = Some("01/01/2021".to_string());
    assert!(commands::load_post(&ctx, &args).is_err());
}

#[test]
fn test_invalid_id_flag() {
    let file = post_file(POST);
    let config = Config::default();
    let ctx = CommandContext::new(&config, false);

    for bad in ["a b", "x.y", ""] {
        let mut args = post_args(file.path());
        args.id = Some(bad.to_string());
        assert!(
            commands::load_post(&ctx, &args).is_err(),
            "ID '{bad}' should be rejected"
        );
    }
}

#[test]
fn test_overlong_title_cannot_become_id() {
    let title = "x".repeat(64);
    let file = post_file(&format!("{title}\n2019-08-30\n\nBody\n"));
    let config = Config::default();
    let ctx = CommandContext::new(&config, false);

    assert!(commands::load_post(&ctx, &post_args(file.path())).is_err());

    let mut args = post_args(file.path());
    args.id = Some("short-id".to_string());
    let post = commands::load_post(&ctx, &args).expect("Explicit ID should be used");
    assert_eq!(post.id, "short-id");
}

#[test]
fn test_invalid_post_file() {
    let file = post_file("no header here");
    let config = Config::default();
    let ctx = CommandContext::new(&config, false);

    assert!(commands::load_post(&ctx, &post_args(file.path())).is_err());
}
