//! TXT records for a post, and handing them to a publisher.
//!
//! A post becomes one metadata record plus one record per chunk:
//!
//! ```text
//! _meta.{id}.{domain}.  TXT  base64(json(metadata))
//! _0.{id}.{domain}.     TXT  chunk 0
//! _1.{id}.{domain}.     TXT  chunk 1
//! ```
//!
//! Actually talking to a DNS provider is left to implementations of
//! [`Publisher`]; the bundled [`ZoneFilePublisher`] renders master-file lines.

#![forbid(unsafe_code)]

use std::io::Write;

use securefmt::Debug;
use tracing::{debug, info};

use crate::{
    error::DnblogError,
    helpers::{encode_json, DEFAULT_DOMAIN, DEFAULT_TTL, MAX_TXT_VALUE_LEN, META_RECORD_LABEL},
    post::Post,
};

/// A single TXT record, value stored as one character-string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TxtRecord {
    pub name: String,
    pub value: String,
    pub ttl: u32,
}

/// Where and how long records are published for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordOptions {
    /// Zone suffix appended to every record name.
    pub domain: String,
    /// Record TTL in seconds.
    pub ttl: u32,
}

impl Default for RecordOptions {
    fn default() -> Self {
        Self {
            domain: DEFAULT_DOMAIN.to_string(),
            ttl: DEFAULT_TTL,
        }
    }
}

/// `_meta.{id}.{domain}.`
#[must_use]
pub fn meta_record_name(id: &str, domain: &str) -> String {
    format!("{META_RECORD_LABEL}.{id}.{}.", domain.trim_end_matches('.'))
}

/// `_{index}.{id}.{domain}.`
#[must_use]
pub fn chunk_record_name(index: usize, id: &str, domain: &str) -> String {
    format!("_{index}.{id}.{}.", domain.trim_end_matches('.'))
}

impl Post {
    /// Build the full record set: the metadata record first, then every
    /// chunk in index order.
    ///
    /// # Errors
    /// This function will return an error if the metadata cannot be serialised
    /// or its encoded value does not fit a TXT character-string
    pub fn records(&self, options: &RecordOptions) -> Result<Vec<TxtRecord>, DnblogError> {
        let value = encode_json(&self.meta)?;
        if value.len() >= MAX_TXT_VALUE_LEN {
            return Err(DnblogError::MetadataTooLarge {
                len: value.len(),
                limit: MAX_TXT_VALUE_LEN,
            });
        }

        let meta = TxtRecord {
            name: meta_record_name(&self.id, &options.domain),
            value,
            ttl: options.ttl,
        };

        let chunks = self.chunks.iter().enumerate().map(|(index, chunk)| TxtRecord {
            name: chunk_record_name(index, &self.id, &options.domain),
            value: chunk.clone(),
            ttl: options.ttl,
        });

        Ok(std::iter::once(meta).chain(chunks).collect())
    }
}

/// Receives a post's complete record set.
///
/// Implementations own the transport: authentication, zone naming and
/// retries are their concern. Failures are reported as
/// [`DnblogError::Transport`].
pub trait Publisher {
    /// Publishes every record, returning how many were written.
    ///
    /// # Errors
    /// Returns an error if the records cannot be handed over
    fn publish(&mut self, records: &[TxtRecord]) -> Result<usize, DnblogError>;
}

/// Writes records as master-file lines: `NAME TTL IN TXT "VALUE"`.
///
/// The record set is rendered to memory first so that a failed run never
/// leaves half a post in the output.
pub struct ZoneFilePublisher<W> {
    writer: W,
}

impl<W: Write> ZoneFilePublisher<W> {
    pub const fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }

    /// Renders one record as a master-file line (without newline).
    #[must_use]
    pub fn render(record: &TxtRecord) -> String {
        let escaped = record.value.replace('\\', "\\\\").replace('"', "\\\"");
        format!("{} {} IN TXT \"{escaped}\"", record.name, record.ttl)
    }
}

impl<W: Write> Publisher for ZoneFilePublisher<W> {
    fn publish(&mut self, records: &[TxtRecord]) -> Result<usize, DnblogError> {
        let rendered = records.iter().fold(String::new(), |mut acc, record| {
            acc.push_str(&Self::render(record));
            acc.push('\n');
            acc
        });

        self.writer
            .write_all(rendered.as_bytes())
            .and_then(|()| self.writer.flush())
            .map_err(|e| DnblogError::Transport(e.to_string()))?;

        Ok(records.len())
    }
}

/// Builds the records for `post` and hands them to `publisher`.
///
/// With `dry_run` set, the records are built and logged but the publisher is
/// never called. Returns the names of the records (that would be) written.
///
/// # Errors
/// This function will return an error if the records cannot be built or published
pub fn publish_post<P: Publisher + ?Sized>(
    post: &Post,
    options: &RecordOptions,
    publisher: &mut P,
    dry_run: bool,
) -> Result<Vec<String>, DnblogError> {
    let records = post.records(options)?;
    for record in &records {
        debug!("Record: {record:?}");
    }

    if dry_run {
        info!(
            "Dry run enabled, not writing {} records for post {}",
            records.len(),
            post.id
        );
    } else {
        info!("Writing {} records for post {}", records.len(), post.id);
        let written = publisher.publish(&records)?;
        info!("Successfully wrote {written} records");
    }

    Ok(records.into_iter().map(|record| record.name).collect())
}
