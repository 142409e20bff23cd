use super::sha256_hex;
use crate::config::IngestConfig;
use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::{debug, info, warn};
use walkdir::{DirEntry, WalkDir};

/// Directories never descended into while walking
const IGNORED_DIRS: &[&str] = &[
    ".git",
    ".svn",
    ".hg",
    "target",
    "node_modules",
    "build",
    "dist",
    "__pycache__",
    "venv",
    ".venv",
];

/// Raw text handed to the chunker, plus where it came from
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    /// Source path, joined onto the walked root when collected from a directory
    pub path: String,
    pub content: String,
    /// Size of the source bytes
    pub size_bytes: u64,
    /// SHA-256 of the source bytes, hex encoded
    pub sha256: String,
}

impl Document {
    /// In-memory document, hashed over its UTF-8 bytes
    pub fn from_text(path: impl Into<String>, content: impl Into<String>) -> Self {
        let content = content.into();
        Self {
            path: path.into(),
            size_bytes: content.len() as u64,
            sha256: sha256_hex(content.as_bytes()),
            content,
        }
    }
}

/// Load one text file. Invalid UTF-8 is decoded lossily rather than rejected.
pub fn load_text_file(path: &Path) -> Result<Document> {
    let bytes =
        fs::read(path).with_context(|| format!("Failed to read file: {}", path.display()))?;

    let size_bytes = bytes.len() as u64;
    let sha256 = sha256_hex(&bytes);

    let content = match String::from_utf8(bytes) {
        Ok(text) => text,
        Err(err) => {
            warn!(path = %path.display(), "File is not valid UTF-8, decoding lossily");
            String::from_utf8_lossy(err.as_bytes()).into_owned()
        }
    };

    debug!(
        path = %path.display(),
        chars = content.chars().count(),
        "Loaded file"
    );

    Ok(Document {
        path: path.display().to_string(),
        content,
        size_bytes,
        sha256,
    })
}

/// Load `root` if it is a file, otherwise walk it and load every file whose
/// extension the config accepts. Unreadable files are logged and skipped.
pub fn collect_documents(root: &Path, config: &IngestConfig) -> Result<Vec<Document>> {
    if root.is_file() {
        return Ok(vec![load_text_file(root)?]);
    }
    if !root.is_dir() {
        bail!("Path does not exist: {}", root.display());
    }

    let mut documents = Vec::new();
    let mut skipped = 0usize;

    let walker = WalkDir::new(root)
        .follow_links(config.follow_links)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|entry| entry.depth() == 0 || !is_ignored_dir(entry));

    for entry in walker {
        let entry = entry.context("Failed to read directory entry")?;
        if !entry.file_type().is_file() {
            continue;
        }

        let path = entry.path();
        let accepted = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| config.accepts_extension(ext));
        if !accepted {
            continue;
        }

        match load_text_file(path) {
            Ok(document) => documents.push(document),
            Err(err) => {
                warn!(path = %path.display(), error = %err, "Skipping unreadable file");
                skipped += 1;
            }
        }
    }

    info!(
        root = %root.display(),
        documents = documents.len(),
        skipped,
        "Collected documents"
    );

    Ok(documents)
}

fn is_ignored_dir(entry: &DirEntry) -> bool {
    entry.file_type().is_dir()
        && entry
            .file_name()
            .to_str()
            .is_some_and(|name| IGNORED_DIRS.contains(&name))
}
