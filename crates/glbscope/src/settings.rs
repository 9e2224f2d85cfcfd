//! Inspection settings
//!
//! Settings come from an explicit TOML file passed on the command line, with
//! command-line flags layered on top. There is no implicit settings location.
//!
//! ```toml
//! format = "json"
//! max_chunk_length = 67108864
//! enforce_declared_length = true
//! ```

use crate::chunk::ChunkLimits;
use crate::header::ContainerHeader;
use crate::report::ReportFormat;
use log::info;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Knobs for a single inspection
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Reject chunks declaring more payload bytes than this
    pub max_chunk_length: Option<u32>,
    /// Reject chunks extending past the header's declared file length
    pub enforce_declared_length: bool,
    /// Report output format
    pub format: ReportFormat,
}

impl Settings {
    /// Load settings from a TOML file
    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        let contents = std::fs::read_to_string(path).map_err(|e| SettingsError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        let settings: Settings =
            toml::from_str(&contents).map_err(|e| SettingsError::ParseToml {
                path: path.to_path_buf(),
                source: e,
            })?;
        info!("Loaded settings from {:?}", path);
        Ok(settings)
    }

    /// Walker bounds for a container with the given header
    pub fn chunk_limits(&self, header: &ContainerHeader) -> ChunkLimits {
        ChunkLimits {
            max_chunk_length: self.max_chunk_length,
            declared_length: self.enforce_declared_length.then_some(header.length),
        }
    }
}

/// Errors that can occur while loading settings
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Failed to parse TOML at {path}: {source}")]
    ParseToml {
        path: PathBuf,
        source: toml::de::Error,
    },
}
