mod assembler;
mod error;
mod filter;
mod normalize;
mod overlap;
mod splitter;


pub use error::ChunkingError;
pub use filter::filter_chunks;
pub use normalize::Normalizer;
pub use overlap::overlap_tail;
pub use splitter::{Granularity, ParagraphSplitter, SentenceSplitter, WordSplitter};

use crate::config::ChunkingConfig;
use assembler::Assembler;
use tracing::debug;

/// Value-configured chunking engine.
///
/// Holds only the validated config and compiled patterns, so one instance can
/// be shared across threads and reused for any number of documents.
#[derive(Debug, Clone)]
pub struct Chunker {
    config: ChunkingConfig,
    normalizer: Normalizer,
    paragraphs: ParagraphSplitter,
    sentences: SentenceSplitter,
}

impl Chunker {
    /// Validate `config` and compile the splitter patterns
    pub fn new(config: ChunkingConfig) -> Result<Self, ChunkingError> {
        config.validate()?;

        Ok(Self {
            normalizer: Normalizer::new()?,
            paragraphs: ParagraphSplitter::new()?,
            sentences: SentenceSplitter::new(&config.terminators)?,
            config,
        })
    }

    pub fn config(&self) -> &ChunkingConfig {
        &self.config
    }

    /// Normalize, split into paragraphs, pack, and filter
    pub fn chunk(&self, raw_text: &str) -> Vec<String> {
        let normalized = self.normalizer.normalize(raw_text);
        if normalized.is_empty() {
            return Vec::new();
        }

        let paragraphs = self.paragraphs.split(&normalized);
        let paragraph_count = paragraphs.len();

        let assembled = Assembler::new(&self.config, &self.sentences).assemble(paragraphs);
        let assembled_count = assembled.len();

        let chunks = filter_chunks(assembled, self.config.min_chunk_length);

        debug!(
            input_chars = normalized.chars().count(),
            paragraphs = paragraph_count,
            assembled = assembled_count,
            kept = chunks.len(),
            "Chunked text"
        );

        chunks
    }
}

/// Chunk `raw_text` with the given budget and overlap, defaults elsewhere
pub fn chunk_text(
    raw_text: &str,
    max_chunk_size: usize,
    overlap: usize,
) -> Result<Vec<String>, ChunkingError> {
    let chunker = Chunker::new(ChunkingConfig::new(max_chunk_size, overlap))?;
    Ok(chunker.chunk(raw_text))
}
