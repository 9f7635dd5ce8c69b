//! CLI output formatting.
//!
//! Follows an information-first display: entities are shown by what they
//! are (category, section, article), with counts and URL paths as context.
//! Each stage has a `format_*` function returning lines (pure, testable)
//! and a `print_*` wrapper that writes them to stdout.
//!
//! ## Index
//!
//! ```text
//! Landing pages
//! 001 .
//! 002 Backend
//! 003 Frontend
//! Refreshed 3 landing pages
//! ```
//!
//! ## Scan
//!
//! ```text
//! Navigation
//! 001 Backend → /docs/Backend/
//! 002 Frontend (2 sections)
//!     Vue → /docs/Frontend/Vue/
//!
//! Sidebar
//!     /docs/Backend/ (1 item)
//! ```

use crate::synth::IndexReport;
use crate::types::{NavEntry, SidebarItem, ThemeConfig};

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Return indentation string: 4 spaces per depth level.
fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

/// Count all items in a sidebar subtree, leaves and groups alike.
fn count_items(items: &[SidebarItem]) -> usize {
    items
        .iter()
        .map(|item| match item {
            SidebarItem::Link(_) => 1,
            SidebarItem::Group { items, .. } => 1 + count_items(items),
        })
        .sum()
}

/// Lines summarizing an index-synthesis pass.
pub fn format_index_output(report: &IndexReport) -> Vec<String> {
    let mut lines = vec!["Landing pages".to_string()];
    for (pos, dir) in report.written.iter().enumerate() {
        lines.push(format!("{} {}", format_index(pos + 1), dir));
    }
    let mut summary = format!("Refreshed {} landing pages", report.written.len());
    if report.failed > 0 {
        summary.push_str(&format!(" ({} failed)", report.failed));
    }
    lines.push(summary);
    lines
}

/// Lines summarizing a derived theme configuration.
pub fn format_scan_output(theme: &ThemeConfig) -> Vec<String> {
    let mut lines = vec!["Navigation".to_string()];

    for (pos, entry) in theme.nav.iter().enumerate() {
        match entry {
            NavEntry::Link(link) => {
                lines.push(format!(
                    "{} {} → {}",
                    format_index(pos + 1),
                    link.text,
                    link.link
                ));
            }
            NavEntry::Dropdown { text, items } => {
                lines.push(format!(
                    "{} {} ({} sections)",
                    format_index(pos + 1),
                    text,
                    items.len()
                ));
                for item in items {
                    lines.push(format!("{}{} → {}", indent(1), item.text, item.link));
                }
            }
        }
    }

    lines.push(String::new());
    lines.push("Sidebar".to_string());
    for (path, sections) in &theme.sidebar {
        let total: usize = sections.iter().map(|s| count_items(&s.items)).sum();
        let noun = if total == 1 { "item" } else { "items" };
        lines.push(format!("{}{} ({} {})", indent(1), path, total, noun));
    }

    lines
}

pub fn print_index_output(report: &IndexReport) {
    for line in format_index_output(report) {
        println!("{line}");
    }
}

pub fn print_scan_output(theme: &ThemeConfig) {
    for line in format_scan_output(theme) {
        println!("{line}");
    }
}
