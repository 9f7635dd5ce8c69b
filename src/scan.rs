//! Navigation and sidebar derivation.
//!
//! Walks a content root and derives the theme configuration the site
//! renderer consumes: a top-level navigation list plus per-section sidebar
//! trees keyed by URL path prefix.
//!
//! ## Directory Structure
//!
//! ```text
//! docs/                            # Content root (URL prefix /docs)
//! ├── config.toml                  # Site configuration (optional)
//! ├── index.md                     # Generated landing page
//! ├── Frontend/                    # Category (top-level directory)
//! │   ├── index.md
//! │   ├── basics.md                # Article
//! │   └── Vue/                     # Sub-section → nav dropdown item
//! │       ├── index.md
//! │       ├── pinia.md
//! │       └── router.md
//! └── Backend/                     # Category without sub-directories
//!     ├── index.md
//!     └── sql.md                   # → direct nav link
//! ```
//!
//! ## Derived Navigation
//!
//! - A category with no sub-directories becomes a direct link to
//!   `/docs/Category/`.
//! - A category with sub-directories becomes a dropdown whose items link to
//!   each immediate sub-directory.
//!
//! ## Derived Sidebars
//!
//! Each category gets a whole-category sidebar under `/docs/Category/`, and
//! each of its immediate sub-directories additionally gets its own sidebar
//! under `/docs/Category/Sub/`. The renderer picks whichever key is the
//! longest prefix of the current page URL.
//!
//! ## Failure Semantics
//!
//! The scan never fails the build. A missing root yields the fallback nav
//! and an empty sidebar map; a read error below a category logs the path
//! and prunes that subtree; a read error at the top level logs and falls
//! back entirely.

use crate::config::SiteConfig;
use crate::content::{self, INDEX_FILE, classify_children, entry_name, file_stem};
use crate::types::{NavEntry, NavLink, SidebarItem, SidebarSection, ThemeConfig};
use std::collections::BTreeMap;
use std::path::Path;
use tracing::{debug, warn};

/// Derive the complete theme configuration for a content root.
///
/// Infallible by contract: every filesystem error is logged and degraded to
/// a safe default rather than surfaced.
pub fn scan(root: &Path, config: &SiteConfig) -> ThemeConfig {
    if !root.is_dir() {
        debug!(path = %root.display(), "content root missing, using fallback navigation");
        return fallback_theme(config);
    }
    let prefix = config.resolved_prefix(root);
    match scan_root(root, &prefix) {
        Ok(theme) => theme,
        Err(err) => {
            warn!("{err}; using fallback navigation");
            fallback_theme(config)
        }
    }
}

/// The two-entry navigation served when no content can be scanned.
pub fn fallback_nav(config: &SiteConfig) -> Vec<NavEntry> {
    vec![
        NavEntry::link("Home", "/"),
        NavEntry::link("Help", config.help_url.clone()),
    ]
}

fn fallback_theme(config: &SiteConfig) -> ThemeConfig {
    ThemeConfig {
        nav: fallback_nav(config),
        sidebar: BTreeMap::new(),
    }
}

/// Top-level scan: one nav entry and one whole-category sidebar per
/// category, plus independent sidebars for immediate sub-sections.
fn scan_root(root: &Path, prefix: &str) -> Result<ThemeConfig, content::AccessError> {
    let mut nav = Vec::new();
    let mut sidebar = BTreeMap::new();

    for category in classify_children(root)?.directories {
        let name = entry_name(&category);
        let base = format!("{prefix}/{name}/");
        let subdirs = classify_children(&category)?.directories;

        if subdirs.is_empty() {
            nav.push(NavEntry::link(name.clone(), base.clone()));
        } else {
            let items = subdirs
                .iter()
                .map(|sub| {
                    let sub_name = entry_name(sub);
                    NavLink::new(sub_name.clone(), format!("{base}{sub_name}/"))
                })
                .collect();
            nav.push(NavEntry::Dropdown {
                text: name.clone(),
                items,
            });
        }

        // Whole-category sidebar, registered unconditionally.
        let items = scan_section(&category, &base);
        debug!(section = %base, items = items.len(), "registered sidebar section");
        sidebar.insert(
            base.clone(),
            vec![SidebarSection {
                text: name.clone(),
                items,
            }],
        );

        // Per-subsection sidebars: only when the subtree contributes
        // something or the sub-section already has a landing page.
        for sub in &subdirs {
            let sub_name = entry_name(sub);
            let sub_base = format!("{base}{sub_name}/");
            let sub_items = scan_section(sub, &sub_base);
            if !sub_items.is_empty() || sub.join(INDEX_FILE).is_file() {
                sidebar.insert(
                    sub_base,
                    vec![SidebarSection {
                        text: sub_name,
                        items: sub_items,
                    }],
                );
            }
        }
    }

    Ok(ThemeConfig { nav, sidebar })
}

/// Recursive per-directory scan shared by the category and sub-section
/// sidebars. Sub-directories come first, then content files; a
/// sub-directory with no qualifying descendants and no landing page is
/// omitted entirely.
fn scan_section(dir: &Path, base: &str) -> Vec<SidebarItem> {
    let children = match classify_children(dir) {
        Ok(children) => children,
        Err(err) => {
            warn!("{err}; skipping subtree");
            return Vec::new();
        }
    };

    let mut items = Vec::new();

    for sub in &children.directories {
        let name = entry_name(sub);
        let sub_base = format!("{base}{name}/");
        let nested = scan_section(sub, &sub_base);
        if !nested.is_empty() {
            items.push(SidebarItem::Group {
                text: name,
                collapsed: false,
                items: nested,
            });
        } else if sub.join(INDEX_FILE).is_file() {
            items.push(SidebarItem::link(name, sub_base));
        }
        // Neither descendants nor a landing page: omitted.
    }

    for file in &children.files {
        let stem = file_stem(file);
        items.push(SidebarItem::link(stem.clone(), format!("{base}{stem}")));
    }

    items
}
