//! Content-tree conventions shared by the scanner and the synthesizer.
//!
//! Both components classify directory entries the same way:
//!
//! - **Sub-directory**: any non-hidden directory.
//! - **Content file**: a file with a markdown extension (`.md` or
//!   `.markdown`, case-insensitive), except the reserved landing page.
//! - **Landing page**: `index.md`, auto-generated and never listed as an
//!   ordinary article.
//!
//! Everything else (dotfiles, `config.toml`, stray assets) is invisible to
//! the tree walk.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Reserved landing-page file name, one per directory.
pub const INDEX_FILE: &str = "index.md";

/// Extensions recognized as articles (compared lowercased).
pub const CONTENT_EXTENSIONS: &[&str] = &["md", "markdown"];

/// The one failure mode of the tree walk: a directory or file that could
/// not be read or written. Always carries the offending path so the log
/// line is actionable.
#[derive(Error, Debug)]
#[error("cannot access {path}: {source}")]
pub struct AccessError {
    pub path: PathBuf,
    #[source]
    pub source: io::Error,
}

impl AccessError {
    pub fn new(path: &Path, source: io::Error) -> Self {
        Self {
            path: path.to_path_buf(),
            source,
        }
    }
}

/// Immediate children of one directory, classified and name-sorted.
///
/// Sorting makes nav/sidebar order deterministic across filesystems;
/// sub-directories always list before content files at the same level.
#[derive(Debug, Default)]
pub struct Children {
    pub directories: Vec<PathBuf>,
    pub files: Vec<PathBuf>,
}

/// List and classify the immediate children of `dir`.
pub fn classify_children(dir: &Path) -> Result<Children, AccessError> {
    let mut children = Children::default();

    let entries = fs::read_dir(dir).map_err(|e| AccessError::new(dir, e))?;
    for entry in entries {
        let entry = entry.map_err(|e| AccessError::new(dir, e))?;
        let path = entry.path();
        if entry.file_name().to_string_lossy().starts_with('.') {
            continue;
        }
        if path.is_dir() {
            children.directories.push(path);
        } else if is_content_file(&path) {
            children.files.push(path);
        }
    }

    children.directories.sort();
    children.files.sort();
    Ok(children)
}

/// Whether `path` counts as an article: markdown extension, not the
/// reserved landing page.
pub fn is_content_file(path: &Path) -> bool {
    if !path.is_file() {
        return false;
    }
    if path.file_name().is_some_and(|n| n == INDEX_FILE) {
        return false;
    }
    let ext = path
        .extension()
        .map(|e| e.to_string_lossy().to_lowercase())
        .unwrap_or_default();
    CONTENT_EXTENSIONS.contains(&ext.as_str())
}

/// Last path component as a display string.
pub fn entry_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// File name stripped of its extension, used for article labels and links.
pub fn file_stem(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default()
}
