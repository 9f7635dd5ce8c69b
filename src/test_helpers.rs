//! Shared test utilities for the docnav test suite.
//!
//! Provides programmatic fixture trees plus lookup and extraction helpers
//! for the derived [`ThemeConfig`]. Lookups panic with the available keys
//! on a miss so a failing test says what was actually there.

use std::fs;
use std::path::Path;
use tempfile::TempDir;

use crate::types::{SidebarItem, SidebarSection, ThemeConfig};

// =========================================================================
// Fixture trees
// =========================================================================

/// Build the canonical fixture tree in a temp directory:
///
/// ```text
/// <root>/
/// ├── Frontend/
/// │   ├── basics.md
/// │   ├── React/
/// │   │   └── hooks.md
/// │   └── Vue/
/// │       ├── pinia.md
/// │       └── router.md
/// ├── Backend/
/// │   └── sql.md
/// └── Notes/            (empty)
/// ```
pub fn demo_tree() -> TempDir {
    let tmp = TempDir::new().unwrap();
    write_article(tmp.path(), "Frontend/basics.md");
    write_article(tmp.path(), "Frontend/React/hooks.md");
    write_article(tmp.path(), "Frontend/Vue/pinia.md");
    write_article(tmp.path(), "Frontend/Vue/router.md");
    write_article(tmp.path(), "Backend/sql.md");
    fs::create_dir_all(tmp.path().join("Notes")).unwrap();
    tmp
}

/// Create an article at a root-relative path, creating parent directories.
pub fn write_article(root: &Path, rel: &str) {
    let path = root.join(rel);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    let stem = path.file_stem().unwrap().to_string_lossy().into_owned();
    fs::write(&path, format!("# {stem}\n\nplaceholder body\n")).unwrap();
}

/// Read every generated landing page under `root`, keyed by relative path.
pub fn read_all_landing_pages(root: &Path) -> Vec<(String, String)> {
    let mut pages = Vec::new();
    collect_landing_pages(root, root, &mut pages);
    pages.sort();
    pages
}

fn collect_landing_pages(dir: &Path, root: &Path, pages: &mut Vec<(String, String)>) {
    let index = dir.join(crate::content::INDEX_FILE);
    if index.is_file() {
        let rel = index.strip_prefix(root).unwrap().to_string_lossy().into_owned();
        pages.push((rel, fs::read_to_string(&index).unwrap()));
    }
    for entry in fs::read_dir(dir).unwrap() {
        let path = entry.unwrap().path();
        if path.is_dir() {
            collect_landing_pages(&path, root, pages);
        }
    }
}

// =========================================================================
// Theme lookups — panic with a clear message on miss
// =========================================================================

/// The single sidebar section registered under a URL path. Panics if the
/// path is unregistered.
pub fn section<'a>(theme: &'a ThemeConfig, path: &str) -> &'a SidebarSection {
    let sections = theme.sidebar.get(path).unwrap_or_else(|| {
        let keys: Vec<&str> = theme.sidebar.keys().map(|k| k.as_str()).collect();
        panic!("sidebar path '{path}' not registered. Available: {keys:?}")
    });
    assert_eq!(sections.len(), 1, "expected one section under '{path}'");
    &sections[0]
}

/// Display texts of sidebar items, groups and leaves alike, in order.
pub fn item_texts(items: &[SidebarItem]) -> Vec<&str> {
    items.iter().map(|item| item.text()).collect()
}
