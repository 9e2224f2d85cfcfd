//! Chunk sequence decoding
//!
//! After the preamble a GLB container holds zero or more chunks, each laid out
//! as `[u32 LE payload length][4-byte type tag][payload]`. [`ChunkWalker`]
//! yields them lazily, one pull at a time, from any [`Read`] source.

use crate::error::InspectError;
use crate::header::{read_up_to, HEADER_SIZE};
use byteorder::{ByteOrder, LittleEndian};
use log::{debug, trace};
use serde::{Serialize, Serializer};
use std::fmt;
use std::io::Read;
use std::iter::FusedIterator;

/// Size of the length + type prefix in front of every chunk payload
pub const CHUNK_HEADER_SIZE: usize = 8;

/// Four-byte chunk type identifier, guaranteed to be valid UTF-8
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChunkTag([u8; 4]);

impl ChunkTag {
    /// Structured-metadata chunk holding the glTF JSON document
    pub const JSON: ChunkTag = ChunkTag(*b"JSON");
    /// Binary buffer chunk
    pub const BIN: ChunkTag = ChunkTag(*b"BIN\0");

    /// Validate raw tag bytes as text
    pub fn new(bytes: [u8; 4]) -> Option<Self> {
        std::str::from_utf8(&bytes).ok().map(|_| Self(bytes))
    }

    pub fn as_bytes(&self) -> &[u8; 4] {
        &self.0
    }

    /// The tag as text, including any trailing NUL padding
    pub fn as_str(&self) -> &str {
        std::str::from_utf8(&self.0).unwrap_or_default()
    }
}

impl fmt::Display for ChunkTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str().trim_end_matches('\0'))
    }
}

impl fmt::Debug for ChunkTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ChunkTag({:?})", self.as_str())
    }
}

impl Serialize for ChunkTag {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// One decoded chunk
#[derive(Debug, Clone)]
pub struct Chunk {
    /// Byte offset of the chunk's length prefix within the source
    pub offset: u64,
    /// Payload length in bytes, excluding the 8-byte prefix
    pub length: u32,
    pub tag: ChunkTag,
    pub payload: Vec<u8>,
}

impl Chunk {
    /// Payload-free summary of this chunk
    pub fn info(&self) -> ChunkInfo {
        ChunkInfo {
            offset: self.offset,
            length: self.length,
            tag: self.tag,
        }
    }
}

/// Position, size and type of a chunk, without its payload
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ChunkInfo {
    pub offset: u64,
    pub length: u32,
    pub tag: ChunkTag,
}

/// Optional sanity bounds applied while walking
#[derive(Debug, Clone, Copy, Default)]
pub struct ChunkLimits {
    /// Reject chunks declaring a payload longer than this
    pub max_chunk_length: Option<u32>,
    /// Reject chunks that would end past this total file length
    pub declared_length: Option<u32>,
}

/// Lazy, forward-only producer of [`Chunk`]s
///
/// The walker assumes the source is positioned right after the 12-byte
/// preamble. It yields `Some(Ok(chunk))` per chunk, `None` once the source is
/// exhausted on a chunk boundary, and a single `Some(Err(_))` when a chunk is
/// malformed. After an error or the end of the sequence it only yields `None`.
pub struct ChunkWalker<R> {
    reader: R,
    offset: u64,
    limits: ChunkLimits,
    finished: bool,
}

impl<R: Read> ChunkWalker<R> {
    /// Create a walker over a source positioned after the preamble
    pub fn new(reader: R) -> Self {
        Self::with_limits(reader, ChunkLimits::default())
    }

    pub fn with_limits(reader: R, limits: ChunkLimits) -> Self {
        Self {
            reader,
            offset: HEADER_SIZE as u64,
            limits,
            finished: false,
        }
    }

    /// Absolute byte offset of the next chunk
    pub fn offset(&self) -> u64 {
        self.offset
    }

    /// Bytes consumed by successfully yielded chunks, prefixes included
    pub fn bytes_consumed(&self) -> u64 {
        self.offset - HEADER_SIZE as u64
    }

    fn read_chunk(&mut self) -> Result<Option<Chunk>, InspectError> {
        let start = self.offset;

        let mut prefix = [0u8; CHUNK_HEADER_SIZE];
        let available = read_up_to(&mut self.reader, &mut prefix)?;
        if available == 0 {
            trace!("End of chunk sequence at byte offset {}", start);
            return Ok(None);
        }
        if available < CHUNK_HEADER_SIZE {
            return Err(InspectError::TruncatedChunk {
                offset: start,
                needed: CHUNK_HEADER_SIZE as u64,
                available: available as u64,
            });
        }

        let length = LittleEndian::read_u32(&prefix[0..4]);
        let mut raw_tag = [0u8; 4];
        raw_tag.copy_from_slice(&prefix[4..8]);

        trace!(
            "Chunk prefix at byte offset {}: length={}, tag={:?}",
            start,
            length,
            raw_tag
        );

        let tag = ChunkTag::new(raw_tag).ok_or(InspectError::InvalidChunkType {
            offset: start,
            tag: raw_tag,
        })?;

        if let Some(max) = self.limits.max_chunk_length {
            if length > max {
                return Err(InspectError::ChunkTooLarge {
                    offset: start,
                    length,
                    max,
                });
            }
        }

        let end = start + CHUNK_HEADER_SIZE as u64 + u64::from(length);
        if let Some(declared) = self.limits.declared_length {
            if end > u64::from(declared) {
                return Err(InspectError::ExceedsDeclaredLength {
                    offset: start,
                    end,
                    declared,
                });
            }
        }

        // Grow the buffer as bytes arrive instead of trusting the declared size
        let mut payload = Vec::new();
        let read = self
            .reader
            .by_ref()
            .take(u64::from(length))
            .read_to_end(&mut payload)?;
        if read < length as usize {
            return Err(InspectError::TruncatedChunk {
                offset: start,
                needed: u64::from(length),
                available: read as u64,
            });
        }

        self.offset = end;
        debug!("Read {} chunk: {} bytes at offset {}", tag, length, start);

        Ok(Some(Chunk {
            offset: start,
            length,
            tag,
            payload,
        }))
    }
}

impl<R: Read> Iterator for ChunkWalker<R> {
    type Item = Result<Chunk, InspectError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        match self.read_chunk() {
            Ok(Some(chunk)) => Some(Ok(chunk)),
            Ok(None) => {
                self.finished = true;
                None
            }
            Err(e) => {
                self.finished = true;
                Some(Err(e))
            }
        }
    }
}

impl<R: Read> FusedIterator for ChunkWalker<R> {}
