//! Splitting post text into TXT-sized, base64-encoded chunks.
//!
//! Text is cut on Unicode scalar values, never inside a codepoint, and each
//! slice is base64-encoded (standard alphabet, no padding). A batch is only
//! usable when every encoded chunk stays below the TXT value limit; when it
//! does not, [`encode_with_retry`] shrinks the chunk size and starts over.

#![forbid(unsafe_code)]

use securefmt::Debug;
use tracing::{debug, warn};

use crate::{
    error::DnblogError,
    helpers::{encode_text, CHUNK_SIZE_STEP, DEFAULT_CHUNK_SIZE, MAX_TXT_VALUE_LEN},
};

/// Parameters for a single encoding run.
///
/// These are passed explicitly to every call so that concurrent posts never
/// observe each other's shrunken chunk size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EncodeOptions {
    /// Chunk size to start from, in characters.
    pub chunk_size: usize,
    /// Amount the chunk size shrinks by after an oversized batch.
    pub step: usize,
    /// Encoded values must be strictly shorter than this.
    pub max_value_len: usize,
}

impl Default for EncodeOptions {
    fn default() -> Self {
        Self {
            chunk_size: DEFAULT_CHUNK_SIZE,
            step: CHUNK_SIZE_STEP,
            max_value_len: MAX_TXT_VALUE_LEN,
        }
    }
}

impl EncodeOptions {
    /// Default options starting from the given chunk size.
    #[must_use]
    pub fn with_chunk_size(chunk_size: usize) -> Self {
        Self {
            chunk_size,
            ..Self::default()
        }
    }

    /// Checks that the options can drive the retry loop.
    ///
    /// # Errors
    /// Returns an error if the chunk size or step is zero
    pub fn validate(&self) -> Result<(), DnblogError> {
        if self.chunk_size == 0 {
            return Err(DnblogError::InvalidOptions(
                "chunk size must be positive".into(),
            ));
        }
        if self.step == 0 {
            return Err(DnblogError::InvalidOptions(
                "chunk size step must be positive".into(),
            ));
        }
        Ok(())
    }
}

/// A slice of the post text, before encoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chunk {
    pub index: usize,
    #[sensitive]
    pub text: String,
}

/// An encoded chunk and whether it is too long for a TXT value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedChunk {
    pub index: usize,
    pub text: String,
    pub oversized: bool,
}

/// The result of encoding all chunks at one chunk size.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedBatch {
    /// Encoded chunks in index order.
    pub chunks: Vec<String>,
    /// Set if any chunk reached the value limit; the whole batch is then unusable.
    pub oversized: bool,
}

/// An accepted batch together with the chunk size that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Encoded {
    pub chunks: Vec<String>,
    pub chunk_size: usize,
    /// Number of batches encoded, including the accepted one.
    pub attempts: usize,
}

/// Split text into consecutive slices of `chunk_size` characters.
/// The last slice holds the remainder; empty text yields no chunks.
///
/// # Errors
/// Returns an error if `chunk_size` is zero
pub fn split_chars(text: &str, chunk_size: usize) -> Result<Vec<Chunk>, DnblogError> {
    if chunk_size == 0 {
        return Err(DnblogError::InvalidOptions(
            "chunk size must be positive".into(),
        ));
    }

    let chars: Vec<char> = text.chars().collect();
    Ok(chars
        .chunks(chunk_size)
        .enumerate()
        .map(|(index, slice)| Chunk {
            index,
            text: slice.iter().collect(),
        })
        .collect())
}

/// Encode a single chunk and check whether it is too large.
#[must_use]
pub fn encode_chunk(chunk: &Chunk, max_value_len: usize) -> EncodedChunk {
    let text = encode_text(&chunk.text);
    let oversized = text.len() >= max_value_len;

    EncodedChunk {
        index: chunk.index,
        text,
        oversized,
    }
}

/// Encode the whole text at one chunk size.
///
/// The chunks are returned even when the batch is oversized; deciding
/// whether to retry is up to the caller.
///
/// # Errors
/// Returns an error if `chunk_size` is zero
pub fn encode(
    text: &str,
    chunk_size: usize,
    max_value_len: usize,
) -> Result<EncodedBatch, DnblogError> {
    let encoded: Vec<EncodedChunk> = split_chars(text, chunk_size)?
        .iter()
        .map(|chunk| encode_chunk(chunk, max_value_len))
        .collect();

    for chunk in encoded.iter().filter(|chunk| chunk.oversized) {
        debug!(
            "Chunk {} encodes to {} characters at chunk size {chunk_size}",
            chunk.index,
            chunk.text.len()
        );
    }

    let oversized = encoded.iter().any(|chunk| chunk.oversized);
    Ok(EncodedBatch {
        chunks: encoded.into_iter().map(|chunk| chunk.text).collect(),
        oversized,
    })
}

/// Encode the text, shrinking the chunk size by `options.step` until no
/// chunk is oversized. Each attempt re-encodes from scratch.
///
/// # Errors
/// Returns an error if the options are invalid, or
/// [`DnblogError::Convergence`] if the chunk size would have to drop to zero
pub fn encode_with_retry(text: &str, options: &EncodeOptions) -> Result<Encoded, DnblogError> {
    options.validate()?;

    let mut chunk_size = options.chunk_size;
    let mut attempts = 0;

    loop {
        attempts += 1;
        let batch = encode(text, chunk_size, options.max_value_len)?;

        if !batch.oversized {
            debug!(
                "Encoded {} chunks at chunk size {chunk_size} after {attempts} attempt(s)",
                batch.chunks.len()
            );
            return Ok(Encoded {
                chunks: batch.chunks,
                chunk_size,
                attempts,
            });
        }

        warn!("Too large at chunk size {chunk_size}");
        if chunk_size <= options.step {
            return Err(DnblogError::Convergence {
                initial: options.chunk_size,
                last: chunk_size,
            });
        }
        chunk_size -= options.step;
    }
}
