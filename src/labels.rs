//! Decorative labels for generated landing pages.
//!
//! Directory names are looked up verbatim in a fixed table; unmatched names
//! fall back to a default. Two call sites use the same table with different
//! defaults: page titles and the sub-section list. Article bullets cycle a
//! small fixed marker set instead of a lookup.

/// Fallback label for page titles.
pub const DEFAULT_TITLE_LABEL: &str = "📚";

/// Fallback label for sub-section list entries.
pub const DEFAULT_SECTION_LABEL: &str = "📁";

/// Markers cycled through the articles list, in order.
pub const ARTICLE_MARKERS: &[&str] = &["📄", "✏️", "📖"];

/// Label table keyed by exact directory name.
const LABELS: &[(&str, &str)] = &[
    ("JavaScript", "📜"),
    ("TypeScript", "🔷"),
    ("Vue", "💚"),
    ("React", "⚛️"),
    ("Node", "🟢"),
    ("CSS", "🎨"),
    ("HTML", "🏷️"),
    ("Git", "🔀"),
    ("Linux", "🐧"),
    ("Docker", "🐳"),
    ("Database", "🗄️"),
    ("Network", "🌐"),
    ("Algorithms", "🧮"),
    ("Testing", "🧪"),
    ("Tooling", "🔧"),
];

/// Exact-name lookup, no fallback.
pub fn lookup(name: &str) -> Option<&'static str> {
    LABELS
        .iter()
        .find(|(key, _)| *key == name)
        .map(|(_, label)| *label)
}

/// Label used in a landing-page title line.
pub fn title_label(name: &str) -> &'static str {
    lookup(name).unwrap_or(DEFAULT_TITLE_LABEL)
}

/// Label used for an entry in the sub-sections list.
pub fn section_label(name: &str) -> &'static str {
    lookup(name).unwrap_or(DEFAULT_SECTION_LABEL)
}

/// Marker for the `index`-th article bullet (wraps around).
pub fn article_marker(index: usize) -> &'static str {
    ARTICLE_MARKERS[index % ARTICLE_MARKERS.len()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_name_gets_mapped_label() {
        assert_eq!(lookup("JavaScript"), Some("📜"));
        assert_eq!(title_label("JavaScript"), "📜");
        assert_eq!(section_label("Vue"), "💚");
    }

    #[test]
    fn unknown_name_gets_defaults() {
        assert_eq!(lookup("Cooking"), None);
        assert_eq!(title_label("Cooking"), DEFAULT_TITLE_LABEL);
        assert_eq!(section_label("Cooking"), DEFAULT_SECTION_LABEL);
    }

    #[test]
    fn title_and_section_defaults_are_independent() {
        assert_ne!(DEFAULT_TITLE_LABEL, DEFAULT_SECTION_LABEL);
    }

    #[test]
    fn lookup_is_case_sensitive() {
        assert_eq!(lookup("javascript"), None);
    }

    #[test]
    fn article_markers_cycle() {
        assert_eq!(article_marker(0), ARTICLE_MARKERS[0]);
        assert_eq!(article_marker(1), ARTICLE_MARKERS[1]);
        assert_eq!(article_marker(ARTICLE_MARKERS.len()), ARTICLE_MARKERS[0]);
        assert_eq!(article_marker(ARTICLE_MARKERS.len() * 7 + 2), ARTICLE_MARKERS[2]);
    }
}
