//! Command handlers for the dnblog CLI.
//!
//! This module contains the implementation of each CLI command,
//! keeping the main module focused on argument parsing and setup.

#![forbid(unsafe_code)]

use std::io::{self, Write};

use color_eyre::eyre::{Result, WrapErr};
use dnblog_lib::{
    derive_id, publish_post, validate_id, Post, PostDate, PostSource, ZoneFilePublisher,
};
use tracing::info;

use crate::{
    cli::{PostArgs, PublishArgs},
    config::Config,
};

/// Context for CLI operations.
pub struct CommandContext<'a> {
    /// Configuration loaded from config.toml.
    pub config: &'a Config,
    /// Whether to build records without writing them.
    pub dry_run: bool,
}

impl<'a> CommandContext<'a> {
    /// Creates a new command context.
    pub const fn new(config: &'a Config, dry_run: bool) -> Self {
        Self { config, dry_run }
    }
}

/// Reads the post file and encodes it.
///
/// Flags take precedence over the file header; when `--title` is given the
/// whole file is treated as post text.
pub fn load_post(ctx: &CommandContext<'_>, args: &PostArgs) -> Result<Post> {
    let content = std::fs::read_to_string(&args.path)
        .wrap_err_with(|| format!("Failed to read post: {}", args.path.display()))?;

    let source = match &args.title {
        Some(title) => PostSource::raw(title, &content),
        None => PostSource::parse(&content)?,
    };

    let date = match &args.date {
        Some(date) => date.parse::<PostDate>()?,
        None => source.date.unwrap_or_else(PostDate::today),
    };

    let id = match &args.id {
        Some(id) => {
            validate_id(id)?;
            id.clone()
        }
        None => derive_id(&source.title)?,
    };

    Ok(Post::assemble(
        &id,
        &source.title,
        &source.text,
        date,
        &ctx.config.encode_options(),
    )?)
}

/// Encodes a post and renders its records as zone file lines.
///
/// Returns the rendered output, which is empty on a dry run.
pub fn render(ctx: &CommandContext<'_>, args: &PublishArgs) -> Result<Vec<u8>> {
    let post = load_post(ctx, &args.post)?;

    let mut options = ctx.config.record_options();
    if let Some(domain) = &args.domain {
        options.domain.clone_from(domain);
    }
    if let Some(ttl) = args.ttl {
        options.ttl = ttl;
    }

    let mut publisher = ZoneFilePublisher::new(Vec::new());
    let names = publish_post(&post, &options, &mut publisher, ctx.dry_run)?;
    info!("Post {} has {} records", post.id, names.len());

    Ok(publisher.into_inner())
}

/// Publishes a post's records to stdout or the output file.
pub fn publish(ctx: &CommandContext<'_>, args: &PublishArgs) -> Result<()> {
    let rendered = render(ctx, args)?;

    if ctx.dry_run {
        return Ok(());
    }

    match &args.output {
        Some(path) => std::fs::write(path, &rendered)
            .wrap_err_with(|| format!("Failed to write records: {}", path.display()))?,
        None => io::stdout().write_all(&rendered)?,
    }

    info!("Successfully wrote entries");
    Ok(())
}

/// Builds the summary printed by `show`.
pub fn summary(ctx: &CommandContext<'_>, args: &PostArgs) -> Result<serde_json::Value> {
    let post = load_post(ctx, args)?;
    Ok(serde_json::json!({
        "id": post.id,
        "meta": post.meta,
        "chunks": post.chunks.len(),
        "chunkSize": post.chunk_size,
    }))
}

/// Prints a post's metadata and encoding summary.
pub fn show(ctx: &CommandContext<'_>, args: &PostArgs) -> Result<()> {
    let summary = summary(ctx, args)?;
    println!("{}", serde_json::to_string_pretty(&summary)?);
    Ok(())
}
