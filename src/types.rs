//! Serialized theme-configuration types.
//!
//! These types mirror the shape the hosting site theme expects in its
//! configuration object, so field names follow the theme's JSON contract
//! (`text`, `link`, `items`, `collapsed`) rather than internal naming.
//! [`ThemeConfig`] is what `docnav scan` writes to disk and what the site
//! build reads back.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A plain `{text, link}` pair, used both as a direct nav entry and as a
/// sidebar leaf.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NavLink {
    pub text: String,
    pub link: String,
}

impl NavLink {
    pub fn new(text: impl Into<String>, link: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            link: link.into(),
        }
    }
}

/// One entry in the site's top navigation bar.
///
/// A category with no sub-directories serializes as a direct link; one with
/// sub-directories serializes as a dropdown over them. The two shapes are
/// distinguished structurally (`link` vs `items`), matching the theme.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NavEntry {
    Link(NavLink),
    Dropdown { text: String, items: Vec<NavLink> },
}

impl NavEntry {
    pub fn link(text: impl Into<String>, link: impl Into<String>) -> Self {
        NavEntry::Link(NavLink::new(text, link))
    }

    /// Display text regardless of shape.
    pub fn text(&self) -> &str {
        match self {
            NavEntry::Link(l) => &l.text,
            NavEntry::Dropdown { text, .. } => text,
        }
    }
}

/// One item inside a sidebar section: a leaf link for a content file, or a
/// nested group for a sub-directory that contributed something.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SidebarItem {
    Link(NavLink),
    Group {
        text: String,
        collapsed: bool,
        items: Vec<SidebarItem>,
    },
}

impl SidebarItem {
    pub fn link(text: impl Into<String>, link: impl Into<String>) -> Self {
        SidebarItem::Link(NavLink::new(text, link))
    }

    pub fn text(&self) -> &str {
        match self {
            SidebarItem::Link(l) => &l.text,
            SidebarItem::Group { text, .. } => text,
        }
    }
}

/// The sidebar shown for pages under one URL path prefix.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SidebarSection {
    pub text: String,
    pub items: Vec<SidebarItem>,
}

/// Complete theme configuration: top navigation plus the per-prefix sidebar
/// mapping. `BTreeMap` keeps the serialized key order stable across runs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThemeConfig {
    pub nav: Vec<NavEntry>,
    pub sidebar: BTreeMap<String, Vec<SidebarSection>>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn direct_nav_entry_serializes_flat() {
        let entry = NavEntry::link("Frontend", "/docs/Frontend/");
        let value = serde_json::to_value(&entry).unwrap();
        assert_eq!(value, json!({"text": "Frontend", "link": "/docs/Frontend/"}));
    }

    #[test]
    fn dropdown_nav_entry_serializes_with_items() {
        let entry = NavEntry::Dropdown {
            text: "Frontend".to_string(),
            items: vec![NavLink::new("Vue", "/docs/Frontend/Vue/")],
        };
        let value = serde_json::to_value(&entry).unwrap();
        assert_eq!(
            value,
            json!({
                "text": "Frontend",
                "items": [{"text": "Vue", "link": "/docs/Frontend/Vue/"}]
            })
        );
    }

    #[test]
    fn sidebar_group_includes_collapsed_flag() {
        let item = SidebarItem::Group {
            text: "Vue".to_string(),
            collapsed: false,
            items: vec![SidebarItem::link("pinia", "/docs/Frontend/Vue/pinia")],
        };
        let value = serde_json::to_value(&item).unwrap();
        assert_eq!(
            value,
            json!({
                "text": "Vue",
                "collapsed": false,
                "items": [{"text": "pinia", "link": "/docs/Frontend/Vue/pinia"}]
            })
        );
    }

    #[test]
    fn theme_config_roundtrips() {
        let mut sidebar = BTreeMap::new();
        sidebar.insert(
            "/docs/Frontend/".to_string(),
            vec![SidebarSection {
                text: "Frontend".to_string(),
                items: vec![SidebarItem::link("basics", "/docs/Frontend/basics")],
            }],
        );
        let config = ThemeConfig {
            nav: vec![NavEntry::link("Frontend", "/docs/Frontend/")],
            sidebar,
        };

        let json = serde_json::to_string(&config).unwrap();
        let back: ThemeConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }
}
