//! Chunking engine configuration

use crate::chunker::ChunkingError;
use serde::{Deserialize, Serialize};

/// Default maximum chunk size in characters
pub const DEFAULT_MAX_CHUNK_SIZE: usize = 200;

/// Default overlap carried between adjacent chunks, in characters
pub const DEFAULT_OVERLAP: usize = 20;

/// Chunks whose trimmed length falls below this are dropped
pub const DEFAULT_MIN_CHUNK_LENGTH: usize = 10;

/// Sentence terminators recognized out of the box: Latin, Arabic question
/// mark, Devanagari danda/double danda and the Arabic-script full stop.
pub const DEFAULT_TERMINATORS: &[&str] = &[".", "!", "?", "؟", "।", "॥", "۔"];

/// How the overlap slice taken from the previous chunk is cut
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OverlapBoundary {
    /// Exactly the last `overlap` characters, wherever they fall
    Char,
    /// Never split an extended grapheme cluster
    #[default]
    Grapheme,
    /// Grapheme-safe, and a partial leading word is dropped
    Word,
}

/// Literal sentence terminators, each matched when followed by whitespace
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TerminatorSet(Vec<String>);

impl TerminatorSet {
    pub fn new<I, S>(terminators: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(terminators.into_iter().map(Into::into).collect())
    }

    /// Add another script's terminator
    pub fn with(mut self, terminator: impl Into<String>) -> Self {
        self.0.push(terminator.into());
        self
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.iter().all(|t| t.is_empty())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl Default for TerminatorSet {
    fn default() -> Self {
        Self::new(DEFAULT_TERMINATORS.iter().copied())
    }
}

/// Chunking configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChunkingConfig {
    /// Upper bound on chunk length in characters
    pub max_chunk_size: usize,
    /// Characters copied from the end of one chunk into the next
    pub overlap: usize,
    /// Minimum trimmed length of an emitted chunk
    pub min_chunk_length: usize,
    /// Where the overlap slice may start
    pub overlap_boundary: OverlapBoundary,
    /// Sentence terminators
    pub terminators: TerminatorSet,
}

impl Default for ChunkingConfig {
    fn default() -> Self {
        Self {
            max_chunk_size: DEFAULT_MAX_CHUNK_SIZE,
            overlap: DEFAULT_OVERLAP,
            min_chunk_length: DEFAULT_MIN_CHUNK_LENGTH,
            overlap_boundary: OverlapBoundary::default(),
            terminators: TerminatorSet::default(),
        }
    }
}

impl ChunkingConfig {
    /// Config with the given budget and overlap, defaults elsewhere
    pub fn new(max_chunk_size: usize, overlap: usize) -> Self {
        Self {
            max_chunk_size,
            overlap,
            ..Self::default()
        }
    }

    pub fn min_chunk_length(mut self, min_chunk_length: usize) -> Self {
        self.min_chunk_length = min_chunk_length;
        self
    }

    pub fn overlap_boundary(mut self, boundary: OverlapBoundary) -> Self {
        self.overlap_boundary = boundary;
        self
    }

    pub fn terminators(mut self, terminators: TerminatorSet) -> Self {
        self.terminators = terminators;
        self
    }

    /// Reject configurations the engine cannot honor
    pub fn validate(&self) -> Result<(), ChunkingError> {
        if self.max_chunk_size == 0 {
            return Err(ChunkingError::InvalidMaxChunkSize);
        }
        if self.overlap >= self.max_chunk_size {
            return Err(ChunkingError::OverlapTooLarge {
                overlap: self.overlap,
                max_chunk_size: self.max_chunk_size,
            });
        }
        if self.min_chunk_length == 0 {
            return Err(ChunkingError::InvalidMinChunkLength);
        }
        if self.terminators.is_empty() {
            return Err(ChunkingError::EmptyTerminatorSet);
        }
        Ok(())
    }
}
