use super::{Batcher, ChunkRecord, Document};
use crate::config::ChunkingConfig;
use anyhow::{Context, Result};
use chrono::Utc;
use serde::{Deserialize, Serialize};

/// Everything one `chunk` run produced, as written by `--format json`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChunkReport {
    pub version: String,
    pub generated_at: String,
    pub generator: String,
    pub config: ChunkingConfig,
    pub documents: Vec<DocumentSummary>,
    pub stats: ReportStats,
    pub chunks: Vec<ChunkRecord>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentSummary {
    pub path: String,
    pub size_bytes: u64,
    pub sha256: String,
    pub chunk_count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportStats {
    pub document_count: usize,
    pub chunk_count: usize,
    pub batch_count: usize,
    pub total_chars: usize,
    /// Single words longer than the budget, emitted whole
    pub oversized_chunks: usize,
}

impl ChunkReport {
    pub fn new(
        config: &ChunkingConfig,
        documents: &[Document],
        chunks: Vec<ChunkRecord>,
        batcher: &Batcher,
    ) -> Self {
        let documents: Vec<DocumentSummary> = documents
            .iter()
            .enumerate()
            .map(|(position, doc)| DocumentSummary {
                path: doc.path.clone(),
                size_bytes: doc.size_bytes,
                sha256: doc.sha256.clone(),
                chunk_count: chunks.iter().filter(|c| c.document == position).count(),
            })
            .collect();

        let stats = ReportStats {
            document_count: documents.len(),
            chunk_count: chunks.len(),
            batch_count: batcher.batch_count(chunks.len()),
            total_chars: chunks.iter().map(|c| c.char_count).sum(),
            oversized_chunks: chunks
                .iter()
                .filter(|c| c.char_count > config.max_chunk_size)
                .count(),
        };

        Self {
            version: "1.0.0".to_string(),
            generated_at: Utc::now().to_rfc3339(),
            generator: format!("multichunk v{}", env!("CARGO_PKG_VERSION")),
            config: config.clone(),
            documents,
            stats,
            chunks,
        }
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("Failed to serialize chunk report")
    }
}
