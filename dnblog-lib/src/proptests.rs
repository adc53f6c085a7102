//! Property-based tests for the encoder and post assembler.
//!
//! - Every accepted chunk fits a TXT value
//! - Decoding the chunks in order gives back the original text
//! - The metadata chunk count always matches the chunk list
//! - Assembly is deterministic

use base64::prelude::*;
use proptest::prelude::*;

use crate::date::PostDate;
use crate::encoder::{encode, encode_with_retry, EncodeOptions};
use crate::helpers::{CHUNK_SIZE_STEP, MAX_TXT_VALUE_LEN};
use crate::post::Post;

fn reassemble(chunks: &[String]) -> String {
    let bytes: Vec<u8> = chunks
        .iter()
        .flat_map(|chunk| {
            BASE64_STANDARD_NO_PAD
                .decode(chunk)
                .expect("Chunk should be valid base64")
        })
        .collect();
    String::from_utf8(bytes).expect("Reassembled text should be UTF-8")
}

fn date() -> PostDate {
    "2024-02-29".parse().expect("Should parse date")
}

proptest! {
    #[test]
    fn accepted_chunks_fit_txt_value(text in "\\PC{0,1500}") {
        let encoded =
            encode_with_retry(&text, &EncodeOptions::default()).expect("Should encode");
        for chunk in &encoded.chunks {
            prop_assert!(chunk.len() < MAX_TXT_VALUE_LEN);
        }
    }

    #[test]
    fn chunks_reassemble_to_original(text in "\\PC{0,1500}") {
        let encoded =
            encode_with_retry(&text, &EncodeOptions::default()).expect("Should encode");
        prop_assert_eq!(reassemble(&encoded.chunks), text);
    }

    #[test]
    fn raw_batches_reassemble_at_any_size(text in "\\PC{0,400}", size in 1usize..300) {
        let batch = encode(&text, size, MAX_TXT_VALUE_LEN).expect("Should encode");
        prop_assert_eq!(reassemble(&batch.chunks), text);
    }

    #[test]
    fn accepted_size_is_largest_fitting_step(text in "\\PC{1,600}") {
        let options = EncodeOptions::default();
        let encoded = encode_with_retry(&text, &options).expect("Should encode");

        prop_assert_eq!((options.chunk_size - encoded.chunk_size) % CHUNK_SIZE_STEP, 0);
        prop_assert_eq!(
            encoded.attempts,
            (options.chunk_size - encoded.chunk_size) / CHUNK_SIZE_STEP + 1
        );
        if encoded.chunk_size < options.chunk_size {
            let larger = encode(&text, encoded.chunk_size + CHUNK_SIZE_STEP, options.max_value_len)
                .expect("Should encode");
            prop_assert!(larger.oversized);
        }
    }

    #[test]
    fn chunk_count_matches_metadata(text in "\\PC{0,1000}") {
        let post = Post::assemble("p", "P", &text, date(), &EncodeOptions::default())
            .expect("Should assemble");
        prop_assert_eq!(post.meta.chunks, post.chunks.len());
    }

    #[test]
    fn assembly_is_deterministic(text in "\\PC{0,800}", size in 20usize..=200) {
        let options = EncodeOptions::with_chunk_size(size);
        let a = Post::assemble("p", "P", &text, date(), &options).expect("Should assemble");
        let b = Post::assemble("p", "P", &text, date(), &options).expect("Should assemble");
        prop_assert_eq!(a, b);
    }
}
