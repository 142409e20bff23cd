use super::ChunkingError;
use crate::config::TerminatorSet;
use regex::Regex;

/// Level of the fallback cascade a unit was produced at
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Granularity {
    Paragraph,
    Sentence,
    Word,
}

impl Granularity {
    /// Text placed between two units packed into the same chunk.
    /// Sentence units lost their terminator when split, so it is re-appended.
    pub fn separator(self) -> &'static str {
        match self {
            Granularity::Paragraph => "\n\n",
            Granularity::Sentence => ". ",
            Granularity::Word => " ",
        }
    }

    /// Next finer level, `None` below words
    pub fn finer(self) -> Option<Granularity> {
        match self {
            Granularity::Paragraph => Some(Granularity::Sentence),
            Granularity::Sentence => Some(Granularity::Word),
            Granularity::Word => None,
        }
    }
}

/// Splits normalized text on blank lines
#[derive(Debug, Clone)]
pub struct ParagraphSplitter {
    blank_line: Regex,
}

impl ParagraphSplitter {
    pub fn new() -> Result<Self, ChunkingError> {
        Ok(Self {
            blank_line: Regex::new(r"\n\s*\n")?,
        })
    }

    pub fn split(&self, text: &str) -> Vec<String> {
        collect_units(self.blank_line.split(text))
    }
}

/// Splits a paragraph on terminator-plus-whitespace, consuming the terminator
#[derive(Debug, Clone)]
pub struct SentenceSplitter {
    boundary: Regex,
}

impl SentenceSplitter {
    pub fn new(terminators: &TerminatorSet) -> Result<Self, ChunkingError> {
        Ok(Self {
            boundary: terminator_pattern(terminators)?,
        })
    }

    /// `None` when the paragraph holds fewer than two sentences
    pub fn split(&self, paragraph: &str) -> Option<Vec<String>> {
        at_least_two(collect_units(self.boundary.split(paragraph)))
    }
}

/// Whitespace tokenizer, the last level of the cascade
#[derive(Debug, Clone, Copy, Default)]
pub struct WordSplitter;

impl WordSplitter {
    /// `None` when the text is a single word
    pub fn split(&self, text: &str) -> Option<Vec<String>> {
        at_least_two(text.split_whitespace().map(str::to_string).collect())
    }
}

/// Compile the terminator set into `(?:t1|t2|...)\s+`. Longer terminators
/// come first so that e.g. "..." wins over ".".
fn terminator_pattern(terminators: &TerminatorSet) -> Result<Regex, ChunkingError> {
    let mut alternatives: Vec<&str> = terminators.iter().filter(|t| !t.is_empty()).collect();
    if alternatives.is_empty() {
        return Err(ChunkingError::EmptyTerminatorSet);
    }
    alternatives.sort_by(|a, b| {
        b.chars()
            .count()
            .cmp(&a.chars().count())
            .then_with(|| a.cmp(b))
    });
    alternatives.dedup();

    let pattern = alternatives
        .into_iter()
        .map(regex::escape)
        .collect::<Vec<_>>()
        .join("|");

    Ok(Regex::new(&format!(r"(?:{})\s+", pattern))?)
}

fn collect_units<'a>(parts: impl Iterator<Item = &'a str>) -> Vec<String> {
    parts
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(str::to_string)
        .collect()
}

fn at_least_two(units: Vec<String>) -> Option<Vec<String>> {
    if units.len() > 1 { Some(units) } else { None }
}
