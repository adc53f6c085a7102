// This is extremely safe, it says so right here!
#![forbid(unsafe_code)]

use securefmt::Debug;
use serde_derive::Serialize;
use tracing::info;

use crate::{
    date::PostDate,
    encoder::{encode_with_retry, EncodeOptions},
    error::DnblogError,
};

/// Summary of a post, published as the `_meta` record.
///
/// Serialises with short keys to keep the record small:
/// `{"c":3,"t":"Title","d":"2026-10-16"}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Metadata {
    #[serde(rename = "c")]
    pub chunks: usize,
    #[serde(rename = "t")]
    pub title: String,
    #[serde(rename = "d")]
    pub date: PostDate,
}

/// A fully encoded post, ready to be turned into TXT records.
///
/// `chunks[i]` is the chunk with index `i`; readers reassemble the post by
/// decoding the chunks in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Post {
    pub id: String,
    pub meta: Metadata,
    pub chunks: Vec<String>,
    /// The chunk size the encoder settled on.
    pub chunk_size: usize,
}

impl Post {
    /// Encode `text` into chunks and wrap them with the post's metadata.
    ///
    /// # Errors
    /// This function will return an error if the text cannot be encoded within the TXT value limit
    pub fn assemble(
        id: &str,
        title: &str,
        text: &str,
        date: PostDate,
        options: &EncodeOptions,
    ) -> Result<Self, DnblogError> {
        let encoded = encode_with_retry(text, options)?;

        info!(
            "Assembled post {id}: {} chunks at chunk size {}",
            encoded.chunks.len(),
            encoded.chunk_size
        );

        Ok(Self {
            id: id.to_string(),
            meta: Metadata {
                chunks: encoded.chunks.len(),
                title: title.to_string(),
                date,
            },
            chunks: encoded.chunks,
            chunk_size: encoded.chunk_size,
        })
    }
}
