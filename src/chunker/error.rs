use thiserror::Error;

#[derive(Error, Debug)]
pub enum ChunkingError {
    #[error("max_chunk_size must be positive")]
    InvalidMaxChunkSize,

    #[error("overlap ({overlap}) must be smaller than max_chunk_size ({max_chunk_size})")]
    OverlapTooLarge { overlap: usize, max_chunk_size: usize },

    #[error("min_chunk_length must be positive")]
    InvalidMinChunkLength,

    #[error("Sentence terminator set is empty")]
    EmptyTerminatorSet,

    #[error("Invalid sentence terminator pattern: {0}")]
    Pattern(#[from] regex::Error),
}
