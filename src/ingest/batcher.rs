// batcher.rs - groups chunk records into embedding requests

use super::ChunkRecord;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One embedding request: texts plus the ids to store their vectors under
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmbeddingBatch {
    pub index: usize,
    pub ids: Vec<Uuid>,
    pub texts: Vec<String>,
}

pub struct Batcher {
    pub batch_size: usize,
}

impl Batcher {
    /// A zero batch size is treated as one record per batch
    pub fn new(batch_size: usize) -> Self {
        Self {
            batch_size: batch_size.max(1),
        }
    }

    pub fn split<'a>(&self, records: &'a [ChunkRecord]) -> Vec<&'a [ChunkRecord]> {
        records.chunks(self.batch_size).collect()
    }

    pub fn batches(&self, records: &[ChunkRecord]) -> Vec<EmbeddingBatch> {
        self.split(records)
            .into_iter()
            .enumerate()
            .map(|(index, group)| EmbeddingBatch {
                index,
                ids: group.iter().map(|r| r.id).collect(),
                texts: group.iter().map(|r| r.text.clone()).collect(),
            })
            .collect()
    }

    pub fn batch_count(&self, record_count: usize) -> usize {
        record_count.div_ceil(self.batch_size)
    }
}
