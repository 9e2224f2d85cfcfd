//! GLB container inspection
//!
//! This crate reads the binary glTF (GLB) container format far enough to report
//! the scene structure it describes: the named nodes and the meshes they
//! reference. Geometry, materials and animation data are never decoded.
//!
//! ```no_run
//! use glbscope::{inspect_path, Settings};
//! use std::path::Path;
//!
//! let inspection = inspect_path(Path::new("model.glb"), &Settings::default())?;
//! for (i, node) in inspection.scene.nodes.iter().enumerate() {
//!     println!("{i}: {} -> {:?}", node.name, node.mesh);
//! }
//! # Ok::<(), glbscope::InspectError>(())
//! ```

pub mod chunk;
pub mod cli;
pub mod error;
pub mod header;
pub mod inspect;
pub mod report;
pub mod scene;
pub mod settings;

// Re-export commonly used types
pub use chunk::{Chunk, ChunkInfo, ChunkLimits, ChunkTag, ChunkWalker};
pub use error::InspectError;
pub use header::{read_header, ContainerHeader, GLB_MAGIC, HEADER_SIZE};
pub use inspect::{inspect_path, inspect_reader, list_chunks, list_chunks_reader, Inspection};
pub use report::{render, render_chunk_listing, ReportFormat};
pub use scene::{project, project_document, MeshSummary, NodeSummary, SceneGraph, UNNAMED};
pub use settings::{Settings, SettingsError};
