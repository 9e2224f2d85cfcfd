//! Human-readable and JSON rendering of inspection results

use crate::chunk::ChunkInfo;
use crate::header::ContainerHeader;
use crate::inspect::Inspection;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use serde_json::Number;
use std::fmt::Write;

/// Output format for reports
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    /// Indented plain text
    #[default]
    Text,
    /// A single JSON object
    Json,
}

#[derive(Serialize)]
struct SceneReport<'a> {
    #[serde(flatten)]
    header: &'a ContainerHeader,
    metadata_found: bool,
    nodes: Vec<NodeEntry<'a>>,
    meshes: Vec<MeshEntry<'a>>,
}

#[derive(Serialize)]
struct NodeEntry<'a> {
    index: usize,
    name: &'a str,
    mesh: Option<&'a Number>,
}

#[derive(Serialize)]
struct MeshEntry<'a> {
    index: usize,
    name: &'a str,
}

#[derive(Serialize)]
struct ChunkReport<'a> {
    #[serde(flatten)]
    header: &'a ContainerHeader,
    chunks: &'a [ChunkInfo],
}

/// Render an inspection in the requested format
pub fn render(inspection: &Inspection, format: ReportFormat) -> Result<String, serde_json::Error> {
    match format {
        ReportFormat::Text => Ok(render_text(inspection)),
        ReportFormat::Json => render_json(inspection),
    }
}

/// Render a chunk listing in the requested format
pub fn render_chunk_listing(
    header: &ContainerHeader,
    chunks: &[ChunkInfo],
    format: ReportFormat,
) -> Result<String, serde_json::Error> {
    match format {
        ReportFormat::Text => Ok(render_chunks_text(header, chunks)),
        ReportFormat::Json => serde_json::to_string_pretty(&ChunkReport { header, chunks }),
    }
}

pub fn render_text(inspection: &Inspection) -> String {
    let mut out = String::new();
    header_line(&mut out, &inspection.header);

    if !inspection.metadata_found {
        out.push_str("No JSON chunk found\n");
    }

    let scene = &inspection.scene;
    if scene.nodes.is_empty() {
        out.push_str("Nodes: none\n");
    } else {
        out.push_str("Nodes:\n");
        for (i, node) in scene.nodes.iter().enumerate() {
            let mesh = node
                .mesh
                .as_ref()
                .map_or_else(|| "none".to_string(), Number::to_string);
            writeln!(out, "  {}: {} (Mesh: {})", i, node.name, mesh).ok();
        }
    }

    if scene.meshes.is_empty() {
        out.push_str("Meshes: none\n");
    } else {
        out.push_str("Meshes:\n");
        for (i, mesh) in scene.meshes.iter().enumerate() {
            writeln!(out, "  {}: {}", i, mesh.name).ok();
        }
    }

    out
}

pub fn render_json(inspection: &Inspection) -> Result<String, serde_json::Error> {
    let report = SceneReport {
        header: &inspection.header,
        metadata_found: inspection.metadata_found,
        nodes: inspection
            .scene
            .nodes
            .iter()
            .enumerate()
            .map(|(index, node)| NodeEntry {
                index,
                name: &node.name,
                mesh: node.mesh.as_ref(),
            })
            .collect(),
        meshes: inspection
            .scene
            .meshes
            .iter()
            .enumerate()
            .map(|(index, mesh)| MeshEntry {
                index,
                name: &mesh.name,
            })
            .collect(),
    };
    serde_json::to_string_pretty(&report)
}

fn render_chunks_text(header: &ContainerHeader, chunks: &[ChunkInfo]) -> String {
    let mut out = String::new();
    header_line(&mut out, header);

    if chunks.is_empty() {
        out.push_str("Chunks: none\n");
        return out;
    }

    out.push_str("Chunks:\n");
    for (i, chunk) in chunks.iter().enumerate() {
        writeln!(
            out,
            "  [{}] {:<4}  {} bytes @ {}",
            i,
            chunk.tag,
            chunk.length,
            chunk.offset
        )
        .ok();
    }
    out
}

fn header_line(out: &mut String, header: &ContainerHeader) {
    writeln!(
        out,
        "GLB version {}, declared length {} bytes",
        header.version, header.length
    )
    .ok();
}
