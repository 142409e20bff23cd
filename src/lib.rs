// Public API exports
pub mod chunker;
pub mod config;
pub mod ingest;

// Re-export main types for convenience
pub use chunker::{
    Chunker, ChunkingError, Granularity, Normalizer, ParagraphSplitter, SentenceSplitter,
    WordSplitter, chunk_text, filter_chunks, overlap_tail,
};

pub use config::{ChunkingConfig, IngestConfig, OverlapBoundary, Settings, TerminatorSet};

pub use ingest::{
    Batcher, ChunkRecord, ChunkReport, Document, EmbeddingBatch, chunk_documents,
    collect_documents, load_text_file,
};
