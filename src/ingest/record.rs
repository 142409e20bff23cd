use super::{Document, sha256_hex};
use crate::chunker::Chunker;
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

/// A chunk ready for an embedder or vector store
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChunkRecord {
    pub id: Uuid,
    /// Position of the source document among those chunked together
    pub document: usize,
    /// Path of the document the chunk was cut from
    pub source: String,
    /// Position within its document, from 0
    pub index: usize,
    pub text: String,
    pub char_count: usize,
    pub sha256: String,
}

impl ChunkRecord {
    pub fn new(document: usize, source: impl Into<String>, index: usize, text: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            document,
            source: source.into(),
            index,
            char_count: text.chars().count(),
            sha256: sha256_hex(text.as_bytes()),
            text,
        }
    }
}

/// Chunk every document in order; indices restart for each document
pub fn chunk_documents(chunker: &Chunker, documents: &[Document]) -> Vec<ChunkRecord> {
    let mut records = Vec::new();

    for (position, document) in documents.iter().enumerate() {
        let chunks = chunker.chunk(&document.content);
        let before = records.len();

        records.extend(chunks.into_iter().enumerate().map(|(index, text)| {
            ChunkRecord::new(position, document.path.as_str(), index, text)
        }));

        info!(
            path = %document.path,
            chunks = records.len() - before,
            "Chunked document"
        );
    }

    records
}
