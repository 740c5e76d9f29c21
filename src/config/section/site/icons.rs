//! `[site.icons]` label-to-icon lookup table.
//!
//! Maps a display label (usually a social link label) to an identifier in
//! the lucide icon set. The defaults cover the common profile links, so a
//! typical config never needs this section.
//!
//! # Example
//!
//! ```toml
//! [site.icons]
//! Mastodon = "lucide:message-circle"
//! GitHub = "lucide:github"
//! ```

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::config::section::site::Link;
use crate::config::{ConfigDiagnostics, FieldPath};

/// Icon lookup table keyed by display label.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IconsConfig {
    map: FxHashMap<String, String>,
}

impl Default for IconsConfig {
    fn default() -> Self {
        let map = [
            ("Website", "lucide:globe"),
            ("GitHub", "lucide:github"),
            ("LinkedIn", "lucide:linkedin"),
            ("Twitter", "lucide:twitter"),
            ("Email", "lucide:mail"),
            ("RSS", "lucide:rss"),
        ]
        .into_iter()
        .map(|(label, icon)| (label.to_string(), icon.to_string()))
        .collect();

        Self { map }
    }
}

impl IconsConfig {
    const FIELD: FieldPath = FieldPath::new("site.icons");

    /// Look up the icon identifier for a display label.
    pub fn icon_for(&self, label: &str) -> Option<&str> {
        self.map.get(label).map(String::as_str)
    }

    pub fn contains(&self, label: &str) -> bool {
        self.map.contains_key(label)
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Iterate over (label, icon identifier) pairs. Unordered.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.map.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Validate the table against the configured social links.
    ///
    /// # Checks
    /// - every entry must map to a non-empty icon identifier (error)
    /// - every social label should have an icon entry (warning)
    pub fn validate(&self, social: &[Link], diag: &mut ConfigDiagnostics) {
        for (label, icon) in &self.map {
            if icon.trim().is_empty() {
                diag.error_with_hint(
                    Self::FIELD,
                    format!("entry '{label}' maps to an empty icon identifier"),
                    "use a lucide name, e.g. \"lucide:github\"",
                );
            }
        }

        for link in social {
            if !self.map.contains_key(&link.label) {
                diag.warn(
                    Self::FIELD,
                    format!(
                        "no icon for social link '{}', a fallback will be rendered",
                        link.label
                    ),
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;

    #[test]
    fn test_default_table_covers_common_labels() {
        let icons = IconsConfig::default();
        assert_eq!(icons.len(), 6);
        for label in ["Website", "GitHub", "LinkedIn", "Twitter", "Email", "RSS"] {
            assert!(icons.contains(label), "missing default icon for {label}");
        }
        assert_eq!(icons.icon_for("GitHub"), Some("lucide:github"));
        assert_eq!(icons.icon_for("Email"), Some("lucide:mail"));
        assert_eq!(icons.icon_for("Mastodon"), None);
    }

    #[test]
    fn test_every_default_identifier_is_non_empty() {
        let icons = IconsConfig::default();
        for (label, icon) in icons.iter() {
            assert!(!icon.is_empty(), "empty identifier for {label}");
        }
    }

    #[test]
    fn test_custom_table_replaces_defaults() {
        let config = test_parse_config("[site.icons]\nGitHub = \"lucide:github\"");
        assert_eq!(config.site.icons.len(), 1);
        assert_eq!(config.site.icons.icon_for("GitHub"), Some("lucide:github"));
        assert!(!config.site.icons.contains("Twitter"));
    }

    #[test]
    fn test_validate_empty_identifier() {
        let config = test_parse_config("[site.icons]\nGitHub = \"\"");
        let mut diag = ConfigDiagnostics::new();
        config.site.icons.validate(&[], &mut diag);
        assert!(diag.has_errors());
    }

    #[test]
    fn test_validate_warns_on_uncovered_social_label() {
        let icons = IconsConfig::default();
        let social = vec![
            Link::new("https://github.com/alice", "GitHub"),
            Link::new("https://mastodon.social/@alice", "Mastodon"),
        ];

        let mut diag = ConfigDiagnostics::new();
        icons.validate(&social, &mut diag);

        assert!(!diag.has_errors());
        assert_eq!(diag.warnings().len(), 1);
        assert!(diag.warnings()[0].1.contains("Mastodon"));
    }

    #[test]
    fn test_validate_covers_original_social_set() {
        let icons = IconsConfig::default();
        let social = vec![
            Link::new("https://github.com/alice", "GitHub"),
            Link::new("https://twitter.com/alice", "Twitter"),
            Link::new("mailto:alice@example.com", "Email"),
            Link::new("/rss.xml", "RSS"),
        ];

        let mut diag = ConfigDiagnostics::new();
        icons.validate(&social, &mut diag);

        assert!(!diag.has_errors());
        assert!(!diag.has_warnings());
    }
}
