//! # docnav
//!
//! Navigation and landing-page generator for markdown documentation sites.
//! Your filesystem is the data source: top-level directories become nav
//! categories, nested directories become sidebar groups, and markdown files
//! become article links.
//!
//! # Architecture: Two Passes Over One Tree
//!
//! A site build invokes docnav twice, once when the generator assembles its
//! configuration and once when the build finishes. Each invocation runs the
//! same two passes in order:
//!
//! ```text
//! 1. Index   content/  →  index.md per directory   (landing pages)
//! 2. Scan    content/  →  theme.json               (nav + sidebar config)
//! ```
//!
//! Index runs first so the scanner can rely on every directory owning a
//! landing page. Both passes fully recompute from the filesystem, keep no
//! state between runs, and are idempotent: regenerating a landing page does
//! not change the set of directories or articles, so a second invocation
//! reproduces the first byte for byte.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`scan`] | Walks the content tree and derives nav entries and per-prefix sidebar sections |
//! | [`synth`] | Rewrites every directory's `index.md` from a fixed string template |
//! | [`content`] | Shared entry classification: content extensions, the reserved landing page, name sorting |
//! | [`labels`] | Decorative label table with or-default accessors and the article marker cycle |
//! | [`config`] | `config.toml` loading, validation, stock config printer |
//! | [`types`] | Serialized theme-configuration types (`NavEntry`, `SidebarSection`) |
//! | [`output`] | CLI output formatting — pure `format_*` functions plus `print_*` wrappers |
//!
//! # Design Decisions
//!
//! ## Degrade, Never Abort
//!
//! Navigation is decoration, not data. Every filesystem error in either
//! pass is logged with the offending path and shrinks the output (a pruned
//! subtree, a fallback nav, a stale landing page) instead of failing the
//! site build. The only loud failures are config errors, which are operator
//! typos rather than transient filesystem conditions.
//!
//! ## Deterministic Ordering
//!
//! Directory entries are name-sorted everywhere, so nav and sidebar order
//! is identical across filesystems and platforms. Within a level,
//! sub-directories always list before articles.
//!
//! ## No State, No Cache
//!
//! Both passes are pure functions of the current filesystem snapshot.
//! There is nothing to invalidate and re-running is always safe.

pub mod config;
pub mod content;
pub mod labels;
pub mod output;
pub mod scan;
pub mod synth;
pub mod types;

#[cfg(test)]
pub(crate) mod test_helpers;
