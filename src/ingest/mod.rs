//! Ingestion around the chunker: loading documents, turning chunks into
//! records, and grouping records into embedding batches

mod batcher;
mod loader;
mod record;
mod report;


pub use batcher::{Batcher, EmbeddingBatch};
pub use loader::{Document, collect_documents, load_text_file};
pub use record::{ChunkRecord, chunk_documents};
pub use report::{ChunkReport, DocumentSummary, ReportStats};

use sha2::{Digest, Sha256};

/// Hex-encoded SHA-256 digest
pub fn sha256_hex(bytes: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(bytes);
    hex::encode(hasher.finalize())
}
