//! CLI argument parsing for dnblog.
//!
//! This module defines the command-line interface using clap.

#![forbid(unsafe_code)]

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use securefmt::Debug;

/// Main CLI structure.
#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Publish blog posts as DNS TXT records"
)]
pub struct Cli {
    /// Global arguments shared across all commands.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// The subcommand to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Global arguments available to all commands.
#[derive(Args, Debug)]
pub struct GlobalArgs {
    /// Path to the configuration file.
    #[arg(short, long, global = true, default_value = "config.toml")]
    pub config: PathBuf,

    /// Dry run mode - build the records but don't write them.
    #[arg(long, global = true)]
    pub dry_run: bool,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Encode a post and write its TXT records as zone file lines.
    Publish(PublishArgs),

    /// Encode a post and print its metadata without writing records.
    Show(PostArgs),
}

/// Arguments describing the post to encode.
#[derive(Args, Debug, Clone)]
pub struct PostArgs {
    /// Post file: title line, date line, empty line, then the text.
    /// With `--title`, the whole file is the text.
    pub path: PathBuf,

    /// Post ID (derived from the title if unset).
    #[arg(long)]
    pub id: Option<String>,

    /// Title of the blog post.
    #[arg(short, long)]
    pub title: Option<String>,

    /// Date the post was written on (YYYY-MM-DD, defaults to today).
    #[arg(short, long)]
    pub date: Option<String>,
}

/// Arguments for the publish command.
#[derive(Args, Debug)]
pub struct PublishArgs {
    #[command(flatten)]
    pub post: PostArgs,

    /// Domain to publish under (overrides `zone.domain` in config).
    #[arg(long)]
    pub domain: Option<String>,

    /// Record TTL in seconds (overrides `zone.ttl` in config).
    #[arg(long)]
    pub ttl: Option<u32>,

    /// Write records to this file instead of stdout.
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}
