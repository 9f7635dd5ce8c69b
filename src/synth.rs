//! Landing-page synthesis.
//!
//! Ensures every directory in the content tree has an up-to-date generated
//! `index.md`. Pages are rewritten unconditionally on every run: the
//! content is a pure function of the directory name and its immediate
//! children, so repeated runs are byte-identical (idempotent) as long as
//! the tree does not change.
//!
//! ## Page Template
//!
//! ```text
//! # 📜 JavaScript                     ← decorative label + directory name
//!
//! Welcome to the **JavaScript** section...
//!
//! ## 🗂 Sub-sections                  ← only when sub-directories exist
//! - [💚 Vue](./Vue/)
//!
//! ## 📝 Articles                      ← only when content files exist
//! - [📄 closures](./closures)
//!
//! > 🚧 Nothing here yet...            ← only when neither exists
//!
//! ---
//! Spotted a problem? [Get in touch](...)
//! ```
//!
//! Plain string concatenation, no template engine. Each directory is
//! written independently: a failure is logged with its path and the walk
//! continues.

use crate::config::SiteConfig;
use crate::content::{AccessError, INDEX_FILE, classify_children, entry_name, file_stem};
use std::fs;
use std::path::Path;
use tracing::{debug, warn};
use walkdir::WalkDir;

/// Summary of one synthesis pass, consumed by the CLI output layer.
#[derive(Debug, Default)]
pub struct IndexReport {
    /// Root-relative paths (root itself is `.`) of refreshed directories.
    pub written: Vec<String>,
    /// Directories skipped because of a read or write error.
    pub failed: usize,
}

/// Rewrite the landing page of every directory under `root`.
///
/// A missing root is a no-op, not an error: documentation content is
/// optional. Per-directory failures are logged and counted, never fatal.
pub fn synthesize(root: &Path, config: &SiteConfig) -> IndexReport {
    let mut report = IndexReport::default();
    if !root.is_dir() {
        debug!(path = %root.display(), "content root missing, nothing to synthesize");
        return report;
    }

    let walker = WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| e.depth() == 0 || !e.file_name().to_string_lossy().starts_with('.'));

    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                warn!("cannot walk content tree: {err}");
                report.failed += 1;
                continue;
            }
        };
        if !entry.file_type().is_dir() {
            continue;
        }
        match write_landing_page(entry.path(), config) {
            Ok(()) => {
                let rel = entry
                    .path()
                    .strip_prefix(root)
                    .unwrap_or(entry.path())
                    .to_string_lossy()
                    .into_owned();
                report
                    .written
                    .push(if rel.is_empty() { ".".to_string() } else { rel });
            }
            Err(err) => {
                warn!("{err}; landing page not refreshed");
                report.failed += 1;
            }
        }
    }

    report
}

/// Build and write one directory's landing page from its current children.
fn write_landing_page(dir: &Path, config: &SiteConfig) -> Result<(), AccessError> {
    let children = classify_children(dir)?;
    let sections: Vec<String> = children.directories.iter().map(|d| entry_name(d)).collect();
    let articles: Vec<String> = children.files.iter().map(|f| file_stem(f)).collect();

    let page = render_landing_page(&entry_name(dir), &sections, &articles, config);
    let path = dir.join(INDEX_FILE);
    fs::write(&path, page).map_err(|e| AccessError::new(&path, e))
}

/// Pure template: landing-page markdown for a directory with the given
/// sub-section names and article stems.
pub fn render_landing_page(
    name: &str,
    sections: &[String],
    articles: &[String],
    config: &SiteConfig,
) -> String {
    let mut page = String::new();

    page.push_str(&format!("# {} {}\n\n", crate::labels::title_label(name), name));
    page.push_str(&format!(
        "Welcome to the **{name}** section. Pick a page below to get started.\n"
    ));

    if !sections.is_empty() {
        page.push_str("\n## 🗂 Sub-sections\n\n");
        for section in sections {
            page.push_str(&format!(
                "- [{} {}](./{}/)\n",
                crate::labels::section_label(section),
                section,
                section
            ));
        }
    }

    if !articles.is_empty() {
        page.push_str("\n## 📝 Articles\n\n");
        for (idx, article) in articles.iter().enumerate() {
            page.push_str(&format!(
                "- [{} {}](./{})\n",
                crate::labels::article_marker(idx),
                article,
                article
            ));
        }
    }

    if sections.is_empty() && articles.is_empty() {
        page.push_str("\n> 🚧 Nothing here yet. Check back soon!\n\n");
        page.push_str(&format!("![Coming soon]({})\n", config.coming_soon_image));
    }

    page.push_str(&format!(
        "\n---\n\nSpotted a problem? [Get in touch]({}).\n",
        config.help_url
    ));

    page
}
