//! Inspection entry points
//!
//! These tie the header, chunk walker and projector together for one source.
//! Each call is independent: the source is opened, read once front to back,
//! and dropped before returning.

use crate::chunk::{ChunkInfo, ChunkWalker};
use crate::error::InspectError;
use crate::header::{read_header, ContainerHeader};
use crate::scene::{project, SceneGraph};
use crate::settings::Settings;
use log::{debug, info};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// Result of inspecting one container
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Inspection {
    pub header: ContainerHeader,
    /// Whether a JSON chunk was present. When false, `scene` is empty.
    pub metadata_found: bool,
    pub scene: SceneGraph,
}

/// Inspect a container read from `reader`, which must be at the start of the file.
pub fn inspect_reader<R: Read>(
    mut reader: R,
    settings: &Settings,
) -> Result<Inspection, InspectError> {
    let header = read_header(&mut reader)?;
    let mut walker = ChunkWalker::with_limits(&mut reader, settings.chunk_limits(&header));

    let projected = project(&mut walker)?;
    debug!("Scene projection consumed {} chunk bytes", walker.bytes_consumed());

    Ok(Inspection {
        header,
        metadata_found: projected.is_some(),
        scene: projected.unwrap_or_default(),
    })
}

/// Inspect the container stored at `path`.
pub fn inspect_path(path: &Path, settings: &Settings) -> Result<Inspection, InspectError> {
    info!("Inspecting {:?}", path);
    inspect_reader(open(path)?, settings)
}

/// Walk every chunk of a container, returning the header and chunk summaries.
///
/// Unlike [`inspect_reader`], this reads the whole sequence, so a malformed
/// chunk anywhere in the file is reported.
pub fn list_chunks_reader<R: Read>(
    mut reader: R,
    settings: &Settings,
) -> Result<(ContainerHeader, Vec<ChunkInfo>), InspectError> {
    let header = read_header(&mut reader)?;
    let walker = ChunkWalker::with_limits(&mut reader, settings.chunk_limits(&header));

    let chunks = walker
        .map(|chunk| chunk.map(|c| c.info()))
        .collect::<Result<Vec<_>, _>>()?;

    debug!("Listed {} chunks", chunks.len());
    Ok((header, chunks))
}

/// Walk every chunk of the container stored at `path`.
pub fn list_chunks(
    path: &Path,
    settings: &Settings,
) -> Result<(ContainerHeader, Vec<ChunkInfo>), InspectError> {
    info!("Listing chunks of {:?}", path);
    list_chunks_reader(open(path)?, settings)
}

fn open(path: &Path) -> Result<BufReader<File>, InspectError> {
    let file = File::open(path).map_err(|source| InspectError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(BufReader::new(file))
}
