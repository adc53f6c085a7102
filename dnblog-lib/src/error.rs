//! Error types for dnblog operations.
//!
//! Every failure inside the library is fatal for the current post: there is
//! no partial or degraded output.

#![forbid(unsafe_code)]

use thiserror::Error;

/// Errors that can occur while encoding or publishing a post.
#[derive(Error, Debug)]
pub enum DnblogError {
    /// The text could not be split or encoded.
    #[error("encoding error: {0}")]
    Encoding(String),

    /// Encoder parameters that cannot drive the retry loop.
    #[error("invalid encode options: {0}")]
    InvalidOptions(String),

    /// An encoded metadata value that does not fit a TXT character-string.
    #[error("metadata record is {len} characters, must be below {limit}")]
    MetadataTooLarge {
        /// Length of the encoded metadata value.
        len: usize,
        /// The TXT value limit.
        limit: usize,
    },

    /// Shrinking the chunk size never produced values that fit a TXT string.
    #[error(
        "chunks still exceed the TXT value limit at chunk size {last} (started at {initial})"
    )]
    Convergence {
        /// The chunk size the encoder started from.
        initial: usize,
        /// The smallest chunk size that was attempted.
        last: usize,
    },

    /// The publisher failed to hand the records over.
    #[error("failed to publish records: {0}")]
    Transport(String),

    /// A date that is not in `YYYY-MM-DD` form.
    #[error("invalid post date '{input}': {reason}")]
    InvalidDate {
        /// The rejected input.
        input: String,
        /// The reason parsing failed.
        reason: String,
    },

    /// A post that is missing required parts.
    #[error("invalid post: {0}")]
    InvalidPost(String),

    /// Configuration file error.
    #[error("configuration error: {0}")]
    Config(String),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialisation error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
