//! dnblog library - blog posts stored in DNS TXT records
//!
//! # Overview
//!
//! A post's text is cut into chunks of a fixed number of characters and each
//! chunk is base64-encoded. A single TXT character-string holds at most 255
//! octets, so whenever any encoded chunk would reach that limit the chunk
//! size shrinks by 5 and the whole text is encoded again. Alongside the
//! chunks, a metadata record carries the chunk count, title and date.
//!
//! # Modules
//!
//! - [`encoder`]: Splitting and encoding text, with the shrink-and-retry loop
//! - [`post`]: Assembling chunks and metadata into a [`Post`]
//! - [`record`]: TXT record names and values, and the [`Publisher`] seam
//! - [`date`]: The `YYYY-MM-DD` post date
//! - [`source`]: Reading post files
//! - [`error`]: Error types
//!
//! # Example
//!
//! ```
//! use dnblog_lib::{EncodeOptions, Post, PostDate, RecordOptions};
//!
//! let date: PostDate = "2019-08-30".parse()?;
//! let post = Post::assemble("hello", "Hello", "Hello, world!", date, &EncodeOptions::default())?;
//! let records = post.records(&RecordOptions::default())?;
//!
//! assert_eq!(records[0].name, "_meta.hello.blog.tazj.in.");
//! assert_eq!(records[1].name, "_0.hello.blog.tazj.in.");
//! # Ok::<(), dnblog_lib::DnblogError>(())
//! ```

#![forbid(unsafe_code)]

pub mod date;
pub mod encoder;
pub mod error;
pub mod helpers;
pub mod post;
pub mod record;
pub mod source;

#[cfg(test)]
mod proptests;

// Re-export commonly used types at the crate root
pub use date::PostDate;
pub use encoder::{encode, encode_with_retry, EncodeOptions, Encoded, EncodedBatch};
pub use error::DnblogError;
pub use helpers::{DEFAULT_CHUNK_SIZE, DEFAULT_DOMAIN, DEFAULT_TTL, MAX_TXT_VALUE_LEN};
pub use post::{Metadata, Post};
pub use record::{publish_post, Publisher, RecordOptions, TxtRecord, ZoneFilePublisher};
pub use source::{derive_id, validate_id, PostSource};
