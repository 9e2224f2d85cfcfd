//! Error types for container inspection

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while inspecting a GLB container
///
/// Every variant is fatal for the inspection call that produced it; no partial
/// scene graph is ever returned alongside one of these.
#[derive(Error, Debug)]
pub enum InspectError {
    #[error("Failed to open {path}: {source}")]
    Open {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Not a GLB file: invalid signature {}", escape_tag(.found))]
    InvalidSignature { found: [u8; 4] },

    #[error("Truncated header: expected 12 bytes, found {available}")]
    TruncatedHeader { available: usize },

    #[error(
        "Truncated chunk at byte offset {offset}: needed {needed} bytes, only {available} remain"
    )]
    TruncatedChunk {
        offset: u64,
        needed: u64,
        available: u64,
    },

    #[error("Invalid chunk type {} at byte offset {offset}", escape_tag(.tag))]
    InvalidChunkType { offset: u64, tag: [u8; 4] },

    #[error("Malformed JSON chunk at byte offset {offset}: {source}")]
    MalformedDocument {
        offset: u64,
        source: serde_json::Error,
    },

    #[error("Chunk at byte offset {offset} declares {length} bytes, exceeds maximum {max} bytes")]
    ChunkTooLarge { offset: u64, length: u32, max: u32 },

    #[error(
        "Chunk at byte offset {offset} ends at byte {end}, past the declared file length {declared}"
    )]
    ExceedsDeclaredLength { offset: u64, end: u64, declared: u32 },
}

/// Render four raw tag bytes for diagnostics, escaping anything non-printable.
pub(crate) fn escape_tag(tag: &[u8; 4]) -> String {
    let escaped: String = tag
        .iter()
        .flat_map(|b| std::ascii::escape_default(*b))
        .map(char::from)
        .collect();
    format!("\"{escaped}\"")
}
