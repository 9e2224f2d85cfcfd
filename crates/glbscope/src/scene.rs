//! Scene graph projection from the JSON chunk
//!
//! Only the `nodes` and `meshes` arrays of the glTF document are looked at.
//! Field extraction is lenient: a missing field and a field of the wrong type
//! are treated the same and fall back to the default.

use crate::chunk::{ChunkTag, ChunkWalker};
use crate::error::InspectError;
use log::debug;
use serde::Serialize;
use serde_json::{Number, Value};
use std::io::Read;

/// Name reported for nodes and meshes without a usable `name` field
pub const UNNAMED: &str = "unnamed";

/// A node entry. Its index is its position in [`SceneGraph::nodes`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NodeSummary {
    pub name: String,
    /// Mesh reference exactly as written in the document, never bounds-checked
    pub mesh: Option<Number>,
}

/// A mesh entry. Its index is its position in [`SceneGraph::meshes`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MeshSummary {
    pub name: String,
}

/// Nodes and meshes in document order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SceneGraph {
    pub nodes: Vec<NodeSummary>,
    pub meshes: Vec<MeshSummary>,
}

impl SceneGraph {
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty() && self.meshes.is_empty()
    }
}

/// Pull chunks until the first JSON chunk and project it.
///
/// Returns `Ok(None)` when the sequence ends without a JSON chunk. Chunks after
/// the JSON chunk are left unread in the source.
pub fn project<R: Read>(walker: &mut ChunkWalker<R>) -> Result<Option<SceneGraph>, InspectError> {
    for chunk in walker.by_ref() {
        let chunk = chunk?;
        if chunk.tag != ChunkTag::JSON {
            debug!("Skipping {} chunk at offset {}", chunk.tag, chunk.offset);
            continue;
        }

        let document: Value = serde_json::from_slice(&chunk.payload).map_err(|source| {
            InspectError::MalformedDocument {
                offset: chunk.offset,
                source,
            }
        })?;

        return Ok(Some(project_document(&document)));
    }

    debug!("No JSON chunk found in container");
    Ok(None)
}

/// Project the `nodes` and `meshes` arrays of an already parsed document.
pub fn project_document(document: &Value) -> SceneGraph {
    let nodes = entries(document, "nodes")
        .iter()
        .map(|node| NodeSummary {
            name: name_of(node),
            mesh: mesh_of(node),
        })
        .collect::<Vec<_>>();

    let meshes = entries(document, "meshes")
        .iter()
        .map(|mesh| MeshSummary {
            name: name_of(mesh),
        })
        .collect::<Vec<_>>();

    debug!(
        "Projected {} nodes and {} meshes",
        nodes.len(),
        meshes.len()
    );

    SceneGraph { nodes, meshes }
}

/// Elements of a top-level array, or nothing if the key is absent or not an array
fn entries<'a>(document: &'a Value, key: &str) -> &'a [Value] {
    match document.get(key) {
        Some(Value::Array(items)) => items.as_slice(),
        _ => &[],
    }
}

fn name_of(entry: &Value) -> String {
    match entry.get("name") {
        Some(Value::String(name)) => name.clone(),
        _ => UNNAMED.to_string(),
    }
}

fn mesh_of(entry: &Value) -> Option<Number> {
    match entry.get("mesh") {
        Some(Value::Number(n)) => Some(n.clone()),
        _ => None,
    }
}
