//! GLB container header
//!
//! Every GLB file starts with a fixed 12-byte preamble: the `glTF` signature,
//! the container version and the declared total file length, both as
//! little-endian `u32`.

use crate::error::InspectError;
use byteorder::{ByteOrder, LittleEndian};
use log::debug;
use serde::Serialize;
use std::io::{ErrorKind, Read};

/// Signature every GLB container starts with
pub const GLB_MAGIC: [u8; 4] = *b"glTF";

/// Size of the container preamble in bytes
pub const HEADER_SIZE: usize = 12;

/// Validated container preamble
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ContainerHeader {
    /// Container version (2 for current files, not checked)
    pub version: u32,
    /// Total file length declared by the writer, not checked against the source
    pub length: u32,
}

/// Read and validate the 12-byte preamble from the start of `reader`.
///
/// On success exactly [`HEADER_SIZE`] bytes have been consumed.
pub fn read_header<R: Read>(reader: &mut R) -> Result<ContainerHeader, InspectError> {
    let mut buf = [0u8; HEADER_SIZE];
    let available = read_up_to(reader, &mut buf)?;
    if available < HEADER_SIZE {
        return Err(InspectError::TruncatedHeader { available });
    }

    let mut found = [0u8; 4];
    found.copy_from_slice(&buf[0..4]);
    if found != GLB_MAGIC {
        return Err(InspectError::InvalidSignature { found });
    }

    let header = ContainerHeader {
        version: LittleEndian::read_u32(&buf[4..8]),
        length: LittleEndian::read_u32(&buf[8..12]),
    };

    debug!(
        "GLB header: version={}, declared length={}",
        header.version, header.length
    );

    Ok(header)
}

/// Fill as much of `buf` as the reader can supply, returning the byte count.
///
/// Unlike `read_exact`, a short source is not an error here; callers decide
/// what a partial read means.
pub(crate) fn read_up_to<R: Read>(reader: &mut R, buf: &mut [u8]) -> std::io::Result<usize> {
    let mut filled = 0;
    while filled < buf.len() {
        match reader.read(&mut buf[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    }
    Ok(filled)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn preamble(magic: &[u8; 4], version: u32, length: u32) -> Vec<u8> {
        let mut bytes = magic.to_vec();
        bytes.extend_from_slice(&version.to_le_bytes());
        bytes.extend_from_slice(&length.to_le_bytes());
        bytes
    }

    #[test]
    fn test_valid_header() {
        let mut bytes = preamble(b"glTF", 2, 1024);
        bytes.extend_from_slice(b"trailing");
        let mut cursor = Cursor::new(bytes);

        let header = read_header(&mut cursor).unwrap();
        assert_eq!(header.version, 2);
        assert_eq!(header.length, 1024);
        assert_eq!(cursor.position(), HEADER_SIZE as u64);
    }

    #[test]
    fn test_version_and_length_unvalidated() {
        // Length smaller than the header itself and an unknown version still pass
        let mut cursor = Cursor::new(preamble(b"glTF", 99, 3));
        let header = read_header(&mut cursor).unwrap();
        assert_eq!(header.version, 99);
        assert_eq!(header.length, 3);
    }

    #[test]
    fn test_invalid_signature() {
        for magic in [b"GLTF", b"gltf", b"JSON", b"\0\0\0\0"] {
            let mut cursor = Cursor::new(preamble(magic, 2, 12));
            match read_header(&mut cursor) {
                Err(InspectError::InvalidSignature { found }) => assert_eq!(&found, magic),
                other => panic!("expected InvalidSignature, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_truncated_header() {
        let bytes = preamble(b"glTF", 2, 12);
        for len in 0..HEADER_SIZE {
            let mut cursor = Cursor::new(&bytes[..len]);
            match read_header(&mut cursor) {
                Err(InspectError::TruncatedHeader { available }) => assert_eq!(available, len),
                other => panic!("expected TruncatedHeader for {len} bytes, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_read_up_to_short_source() {
        let mut cursor = Cursor::new(vec![1u8, 2, 3]);
        let mut buf = [0u8; 8];
        assert_eq!(read_up_to(&mut cursor, &mut buf).unwrap(), 3);
        assert_eq!(&buf[..3], &[1, 2, 3]);
    }
}
