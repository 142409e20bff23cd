use super::ChunkingError;
use regex::Regex;

/// Canonicalizes whitespace so that paragraph breaks are always blank lines
#[derive(Debug, Clone)]
pub struct Normalizer {
    /// Three or more whitespace characters of any kind
    whitespace_run: Regex,
    /// Windows and classic Mac line endings
    carriage_return: Regex,
    /// Four or more newlines
    newline_run: Regex,
    /// Two or more plain spaces
    space_run: Regex,
}

impl Normalizer {
    pub fn new() -> Result<Self, ChunkingError> {
        Ok(Self {
            whitespace_run: Regex::new(r"\s{3,}")?,
            carriage_return: Regex::new(r"\r\n?")?,
            newline_run: Regex::new(r"\n{4,}")?,
            space_run: Regex::new(r" {2,}")?,
        })
    }

    /// Normalize raw text. Total: any input, including an empty string,
    /// yields a (possibly empty) trimmed string.
    pub fn normalize(&self, text: &str) -> String {
        if text.is_empty() {
            return String::new();
        }

        let text = self.whitespace_run.replace_all(text, "\n\n");
        let text = self.carriage_return.replace_all(&text, "\n");
        let text = self.newline_run.replace_all(&text, "\n\n\n");
        let text = self.space_run.replace_all(&text, " ");

        text.trim().to_string()
    }
}
