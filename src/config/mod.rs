//! Settings for the chunker and the ingestion pipeline around it

mod chunking;

#[cfg(test)]
mod tests;

pub use chunking::{
    ChunkingConfig, DEFAULT_MAX_CHUNK_SIZE, DEFAULT_MIN_CHUNK_LENGTH, DEFAULT_OVERLAP,
    DEFAULT_TERMINATORS, OverlapBoundary, TerminatorSet,
};

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Chunks per embedding request
pub const DEFAULT_BATCH_SIZE: usize = 100;

/// Top-level settings, one TOML table per section
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub chunking: ChunkingConfig,
    pub ingest: IngestConfig,
    pub logging: LoggingConfig,
}

/// Which files are picked up and how chunks are grouped for embedding
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IngestConfig {
    /// File extensions (without dot) loaded when walking a directory
    pub extensions: Vec<String>,
    /// Chunks per embedding batch
    pub batch_size: usize,
    /// Follow symlinks while walking
    pub follow_links: bool,
}

impl Default for IngestConfig {
    fn default() -> Self {
        Self {
            extensions: vec!["txt".to_string(), "md".to_string()],
            batch_size: DEFAULT_BATCH_SIZE,
            follow_links: false,
        }
    }
}

impl IngestConfig {
    /// Case-insensitive extension check
    pub fn accepts_extension(&self, ext: &str) -> bool {
        self.extensions.iter().any(|e| e.eq_ignore_ascii_case(ext))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive used when `RUST_LOG` is unset
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

impl Settings {
    /// Load settings from a TOML file. Values are not validated here, so
    /// command-line overrides can still be applied before `validate`.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let settings = Self::from_toml(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
        Ok(settings)
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize settings")
    }

    pub fn validate(&self) -> Result<()> {
        self.chunking
            .validate()
            .context("Invalid [chunking] settings")?;
        if self.ingest.batch_size == 0 {
            bail!("Invalid [ingest] settings: batch_size must be positive");
        }
        if self.ingest.extensions.is_empty() {
            bail!("Invalid [ingest] settings: at least one extension is required");
        }
        Ok(())
    }
}
