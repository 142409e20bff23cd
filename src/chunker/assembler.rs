use super::overlap::overlap_tail;
use super::splitter::{Granularity, SentenceSplitter, WordSplitter};
use crate::config::ChunkingConfig;
use tracing::{debug, warn};

/// Greedy packer shared by every level of the fallback cascade.
///
/// Each unit takes one of three paths:
/// - oversized: flush, then decompose with the next finer splitter
/// - would overflow: flush, then reopen the buffer seeded with overlap
/// - fits: append after the level's separator
pub(crate) struct Assembler<'a> {
    config: &'a ChunkingConfig,
    sentences: &'a SentenceSplitter,
    words: WordSplitter,
}

impl<'a> Assembler<'a> {
    pub fn new(config: &'a ChunkingConfig, sentences: &'a SentenceSplitter) -> Self {
        Self {
            config,
            sentences,
            words: WordSplitter,
        }
    }

    /// Pack paragraphs into chunks, recursing into finer units on demand
    pub fn assemble(&self, paragraphs: Vec<String>) -> Vec<String> {
        let mut out = Vec::new();
        self.pack(paragraphs, Granularity::Paragraph, &mut out);
        out
    }

    fn pack(&self, units: Vec<String>, level: Granularity, out: &mut Vec<String>) {
        let max = self.config.max_chunk_size;
        let separator = level.separator();
        let separator_len = char_len(separator);
        let mut buffer = Buffer::default();

        for unit in units {
            let unit_len = char_len(&unit);

            if unit_len > max {
                buffer.flush_into(out);
                self.decompose(unit, unit_len, level, out);
                continue;
            }

            if buffer.is_empty() {
                buffer.push(&unit, unit_len);
            } else if buffer.len + separator_len + unit_len > max {
                buffer.flush_into(out);
                if let Some(seed) = self.overlap_seed(out.last(), unit_len) {
                    buffer.push(seed, char_len(seed));
                    buffer.push(" ", 1);
                }
                buffer.push(&unit, unit_len);
            } else {
                buffer.push(separator, separator_len);
                buffer.push(&unit, unit_len);
            }
        }

        buffer.flush_into(out);
    }

    /// Split an oversized unit with the first finer splitter that finds a
    /// boundary. A unit no splitter can divide is emitted on its own.
    fn decompose(&self, unit: String, unit_len: usize, level: Granularity, out: &mut Vec<String>) {
        let mut next = level.finer();

        while let Some(finer) = next {
            if let Some(parts) = self.split(finer, &unit) {
                debug!(
                    ?level,
                    ?finer,
                    unit_len,
                    parts = parts.len(),
                    "Decomposing oversized unit"
                );
                self.pack(parts, finer, out);
                return;
            }
            next = finer.finer();
        }

        warn!(
            unit_len,
            max_chunk_size = self.config.max_chunk_size,
            "Unit has no inner boundary, emitting oversized chunk"
        );
        out.push(unit);
    }

    fn split(&self, level: Granularity, text: &str) -> Option<Vec<String>> {
        match level {
            // paragraphs only come from the top of the cascade
            Granularity::Paragraph => None,
            Granularity::Sentence => self.sentences.split(text),
            Granularity::Word => self.words.split(text),
        }
    }

    /// Overlap carried into a buffer reopened for a unit of `unit_len`.
    /// Clamped so that seed, joining space and unit stay within budget.
    fn overlap_seed<'o>(&self, previous: Option<&'o String>, unit_len: usize) -> Option<&'o str> {
        if self.config.overlap == 0 {
            return None;
        }
        let previous = previous?;
        let room = self.config.max_chunk_size.saturating_sub(unit_len + 1);
        let budget = self.config.overlap.min(room);
        overlap_tail(previous, budget, self.config.overlap_boundary)
    }
}

/// Accumulation buffer with a running character count
#[derive(Default)]
struct Buffer {
    text: String,
    len: usize,
}

impl Buffer {
    fn is_empty(&self) -> bool {
        self.len == 0
    }

    fn push(&mut self, text: &str, len: usize) {
        self.text.push_str(text);
        self.len += len;
    }

    fn flush_into(&mut self, out: &mut Vec<String>) {
        let chunk = self.text.trim();
        if !chunk.is_empty() {
            out.push(chunk.to_string());
        }
        self.text.clear();
        self.len = 0;
    }
}

fn char_len(text: &str) -> usize {
    text.chars().count()
}
