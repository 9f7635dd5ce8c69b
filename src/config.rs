//! Site configuration.
//!
//! An optional `config.toml` in the content root adjusts the few knobs
//! docnav has. Config files are sparse: every key is optional and unknown
//! keys are rejected to catch typos early.
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! # URL prefix for generated links. Defaults to "/<content dir name>",
//! # e.g. scanning docs/mds yields links under /mds/.
//! route_prefix = "/docs"
//!
//! # Help/contact link used in the landing-page footer and the fallback nav.
//! help_url = "https://github.com/docnav/docnav/issues"
//!
//! # Image shown on landing pages of empty directories.
//! coming_soon_image = "/assets/coming-soon.svg"
//! ```

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Configuration loaded from `config.toml` in the content root.
///
/// All fields have defaults; user files only specify overrides.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// URL prefix for all generated links. When absent, derived from the
    /// content root's directory name.
    pub route_prefix: Option<String>,
    /// Help/contact link: landing-page footer and the fallback nav entry.
    pub help_url: String,
    /// Image referenced by the coming-soon placeholder block.
    pub coming_soon_image: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            route_prefix: None,
            help_url: default_help_url(),
            coming_soon_image: default_coming_soon_image(),
        }
    }
}

fn default_help_url() -> String {
    "https://github.com/docnav/docnav/issues".to_string()
}

fn default_coming_soon_image() -> String {
    "/assets/coming-soon.svg".to_string()
}

impl SiteConfig {
    /// Validate config values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(prefix) = &self.route_prefix {
            if !prefix.starts_with('/') {
                return Err(ConfigError::Validation(
                    "route_prefix must start with '/'".into(),
                ));
            }
        }
        if self.help_url.is_empty() {
            return Err(ConfigError::Validation("help_url must not be empty".into()));
        }
        if self.coming_soon_image.is_empty() {
            return Err(ConfigError::Validation(
                "coming_soon_image must not be empty".into(),
            ));
        }
        Ok(())
    }

    /// The URL prefix links are rooted under, without a trailing slash.
    ///
    /// `route_prefix = "/"` (serve at site root) resolves to the empty
    /// string so joined links come out as `/Category/` rather than
    /// `//Category/`.
    pub fn resolved_prefix(&self, root: &Path) -> String {
        let raw = match &self.route_prefix {
            Some(prefix) => prefix.clone(),
            None => format!(
                "/{}",
                root.file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_default()
            ),
        };
        raw.trim_end_matches('/').to_string()
    }
}

/// Load `config.toml` from the content root, falling back to defaults when
/// the file (or the root itself) does not exist.
pub fn load_config(root: &Path) -> Result<SiteConfig, ConfigError> {
    let path = root.join("config.toml");
    if !path.is_file() {
        return Ok(SiteConfig::default());
    }
    let raw = fs::read_to_string(&path)?;
    let config: SiteConfig = toml::from_str(&raw)?;
    config.validate()?;
    Ok(config)
}

/// Returns a fully-commented stock `config.toml`.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# docnav configuration
# ====================
# All settings are optional. Remove or comment out any you don't need.
# Values shown below are the defaults. Unknown keys will cause an error.
#
# Place this file in the content root, next to your category directories:
#   docs/
#   ├── config.toml
#   ├── Frontend/
#   └── Backend/

# URL prefix for all generated links. When omitted, docnav derives it from
# the content directory name: scanning docs/mds yields links under /mds/.
# Use "/" to link from the site root.
#route_prefix = "/docs"

# Help/contact link shown in the landing-page footer and used as the second
# entry of the fallback navigation.
help_url = "https://github.com/docnav/docnav/issues"

# Image referenced on the landing page of a directory with no content yet.
coming_soon_image = "/assets/coming-soon.svg"
"##
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn defaults_when_no_config_file() {
        let tmp = TempDir::new().unwrap();
        let config = load_config(tmp.path()).unwrap();
        assert!(config.route_prefix.is_none());
        assert_eq!(config.help_url, default_help_url());
    }

    #[test]
    fn defaults_when_root_missing() {
        let tmp = TempDir::new().unwrap();
        let config = load_config(&tmp.path().join("absent")).unwrap();
        assert!(config.route_prefix.is_none());
    }

    #[test]
    fn sparse_override() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("config.toml"), r#"route_prefix = "/kb""#).unwrap();

        let config = load_config(tmp.path()).unwrap();
        assert_eq!(config.route_prefix.as_deref(), Some("/kb"));
        // Unspecified keys keep their defaults
        assert_eq!(config.help_url, default_help_url());
    }

    #[test]
    fn unknown_key_rejected() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("config.toml"), r#"route_prefx = "/kb""#).unwrap();

        assert!(matches!(load_config(tmp.path()), Err(ConfigError::Toml(_))));
    }

    #[test]
    fn relative_prefix_rejected() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("config.toml"), r#"route_prefix = "kb""#).unwrap();

        assert!(matches!(
            load_config(tmp.path()),
            Err(ConfigError::Validation(_))
        ));
    }

    #[test]
    fn empty_help_url_rejected() {
        let config = SiteConfig {
            help_url: String::new(),
            ..SiteConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn prefix_derived_from_root_name() {
        let config = SiteConfig::default();
        assert_eq!(config.resolved_prefix(Path::new("docs/mds")), "/mds");
    }

    #[test]
    fn prefix_override_wins() {
        let config = SiteConfig {
            route_prefix: Some("/kb".into()),
            ..SiteConfig::default()
        };
        assert_eq!(config.resolved_prefix(Path::new("docs/mds")), "/kb");
    }

    #[test]
    fn root_prefix_resolves_empty() {
        let config = SiteConfig {
            route_prefix: Some("/".into()),
            ..SiteConfig::default()
        };
        assert_eq!(config.resolved_prefix(Path::new("docs")), "");
    }

    #[test]
    fn trailing_slash_trimmed() {
        let config = SiteConfig {
            route_prefix: Some("/kb/".into()),
            ..SiteConfig::default()
        };
        assert_eq!(config.resolved_prefix(Path::new("docs")), "/kb");
    }
}
