//! Command-line interface for the `glbscope` binary

use crate::report::ReportFormat;
use crate::settings::{Settings, SettingsError};
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "glbscope", author, version)]
#[command(about = "Inspect the node and mesh structure of GLB files", long_about = None)]
pub struct Args {
    /// GLB file to inspect
    pub file: PathBuf,

    /// Output format (overrides the settings file)
    #[arg(short, long, value_enum)]
    pub format: Option<ReportFormat>,

    /// List every chunk in the file instead of the scene graph
    #[arg(long)]
    pub chunks: bool,

    /// TOML settings file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Reject chunks whose payload exceeds this many bytes
    #[arg(long, value_name = "BYTES")]
    pub max_chunk_bytes: Option<u32>,

    /// Reject chunks extending past the length declared in the header
    #[arg(long)]
    pub strict_length: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    pub fn parse_args() -> Self {
        Args::parse()
    }

    /// Settings from the config file, if any, with command-line overrides applied
    pub fn settings(&self) -> Result<Settings, SettingsError> {
        let mut settings = match &self.config {
            Some(path) => Settings::load(path)?,
            None => Settings::default(),
        };

        if let Some(format) = self.format {
            settings.format = format;
        }
        if let Some(max) = self.max_chunk_bytes {
            settings.max_chunk_length = Some(max);
        }
        if self.strict_length {
            settings.enforce_declared_length = true;
        }

        Ok(settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimal_args() {
        let args = Args::try_parse_from(["glbscope", "model.glb"]).unwrap();
        assert_eq!(args.file, PathBuf::from("model.glb"));
        assert!(!args.chunks);
        assert_eq!(args.settings().unwrap(), Settings::default());
    }

    #[test]
    fn test_overrides() {
        let args = Args::try_parse_from([
            "glbscope",
            "model.glb",
            "--format",
            "json",
            "--max-chunk-bytes",
            "4096",
            "--strict-length",
            "--chunks",
        ])
        .unwrap();

        assert!(args.chunks);
        let settings = args.settings().unwrap();
        assert_eq!(settings.format, ReportFormat::Json);
        assert_eq!(settings.max_chunk_length, Some(4096));
        assert!(settings.enforce_declared_length);
    }

    #[test]
    fn test_flags_override_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let config = dir.path().join("glbscope.toml");
        std::fs::write(&config, "format = \"json\"\nmax_chunk_length = 10\n").unwrap();

        let config_arg = config.to_string_lossy().into_owned();
        let args =
            Args::try_parse_from(["glbscope", "model.glb", "--config", config_arg.as_str()]).unwrap();
        let settings = args.settings().unwrap();
        assert_eq!(settings.format, ReportFormat::Json);
        assert_eq!(settings.max_chunk_length, Some(10));

        let args = Args::try_parse_from([
            "glbscope",
            "model.glb",
            "-c",
            config_arg.as_str(),
            "-f",
            "text",
        ])
        .unwrap();
        assert_eq!(args.settings().unwrap().format, ReportFormat::Text);
    }

    #[test]
    fn test_missing_path_is_rejected() {
        assert!(Args::try_parse_from(["glbscope"]).is_err());
    }
}
