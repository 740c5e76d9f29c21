//! `[site.info]` configuration.
//!
//! Basic site information: title, description, canonical URL, author,
//! locale, pagination counters. These values are handed to the rendering
//! layer for page templates, navigation chrome, and feed metadata.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::config::{ConfigDiagnostics, FieldPath};

/// Field paths used in diagnostics.
pub struct SiteInfoFields {
    pub url: FieldPath,
    pub posts_per_page: FieldPath,
}

/// Site metadata consumed by templates and feed generation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteInfoConfig {
    /// Site title.
    pub title: String,

    /// Site description, used in meta tags and feed metadata.
    pub description: String,

    /// Canonical site URL (e.g., "https://blog.example.com").
    pub url: Option<String>,

    /// Author name.
    pub author: String,

    /// Locale identifier (e.g., "en-US").
    pub locale: String,

    /// Number of posts featured on the front page.
    pub featured_posts: u32,

    /// Page size for post list pagination.
    pub posts_per_page: u32,

    /// Google Analytics measurement ID.
    pub analytics: Option<String>,

    /// Custom fields passed through to templates untouched.
    #[serde(default)]
    pub extra: FxHashMap<String, toml::Value>,
}

impl Default for SiteInfoConfig {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            url: None,
            author: String::new(),
            locale: "en-US".into(),
            featured_posts: 2,
            posts_per_page: 3,
            analytics: None,
            extra: FxHashMap::default(),
        }
    }
}

impl SiteInfoConfig {
    pub const FIELDS: SiteInfoFields = SiteInfoFields {
        url: FieldPath::new("site.info.url"),
        posts_per_page: FieldPath::new("site.info.posts_per_page"),
    };

    /// Validate site metadata.
    ///
    /// # Checks
    /// - If `feed_enabled`, `url` must be set
    /// - `url` must be a valid URL with scheme (e.g., `https://example.com`)
    /// - `posts_per_page` must be positive
    pub fn validate(&self, feed_enabled: bool, diag: &mut ConfigDiagnostics) {
        // Feed requires url
        if feed_enabled && self.url.is_none() {
            diag.error_with_hint(
                Self::FIELDS.url,
                format!(
                    "site.feed.enable is enabled but {} is not configured",
                    Self::FIELDS.url.as_str()
                ),
                format!(
                    "set {}, e.g.: \"https://example.com\"",
                    Self::FIELDS.url.as_str()
                ),
            );
        }

        // URL format check using url crate for strict validation
        if let Some(url_str) = &self.url {
            match url::Url::parse(url_str) {
                Ok(parsed) => {
                    // Must be http or https
                    if !matches!(parsed.scheme(), "http" | "https") {
                        diag.error_with_hint(
                            Self::FIELDS.url,
                            format!(
                                "scheme '{}' not supported, must be http or https",
                                parsed.scheme()
                            ),
                            "use format like https://example.com",
                        );
                    }
                    // Must have a valid host
                    if parsed.host_str().is_none() {
                        diag.error_with_hint(
                            Self::FIELDS.url,
                            "URL must have a valid host",
                            "use format like https://example.com",
                        );
                    }
                }
                Err(e) => {
                    diag.error_with_hint(
                        Self::FIELDS.url,
                        format!("invalid URL: {}", e),
                        "use format like https://example.com",
                    );
                }
            }
        }

        if self.posts_per_page == 0 {
            diag.error_with_hint(
                Self::FIELDS.posts_per_page,
                "page size must be at least 1",
                "remove the field to use the default of 3",
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;

    #[test]
    fn test_defaults() {
        let config = test_parse_config("");
        let info = &config.site.info;
        assert_eq!(info.title, "Test");
        assert_eq!(info.locale, "en-US");
        assert!(info.url.is_none());
        assert!(info.analytics.is_none());
        assert_eq!(info.featured_posts, 2);
        assert_eq!(info.posts_per_page, 3);
        assert!(info.extra.is_empty());
    }

    #[test]
    fn test_full_info_section() {
        let config = test_parse_config(
            r#"url = "https://blog.example.com"
author = "Alice"
locale = "en-GB"
featured_posts = 4
posts_per_page = 10
analytics = "G-XXXXXXX"

[site.info.extra]
footer = "all rights reserved"
"#,
        );
        let info = &config.site.info;
        assert_eq!(info.url.as_deref(), Some("https://blog.example.com"));
        assert_eq!(info.author, "Alice");
        assert_eq!(info.locale, "en-GB");
        assert_eq!(info.featured_posts, 4);
        assert_eq!(info.posts_per_page, 10);
        assert_eq!(info.analytics.as_deref(), Some("G-XXXXXXX"));
        assert_eq!(
            info.extra.get("footer").and_then(|v| v.as_str()),
            Some("all rights reserved")
        );
    }

    #[test]
    fn test_validate_ok() {
        let config = test_parse_config("url = \"https://blog.example.com\"");
        let mut diag = ConfigDiagnostics::new();
        config.site.info.validate(true, &mut diag);
        assert!(!diag.has_errors());
    }

    #[test]
    fn test_validate_feed_requires_url() {
        let config = test_parse_config("");
        let mut diag = ConfigDiagnostics::new();
        config.site.info.validate(true, &mut diag);
        assert_eq!(diag.errors().len(), 1);
        assert!(diag.errors()[0].message.contains("site.info.url"));
    }

    #[test]
    fn test_validate_rejects_bad_scheme() {
        let config = test_parse_config("url = \"ftp://blog.example.com\"");
        let mut diag = ConfigDiagnostics::new();
        config.site.info.validate(false, &mut diag);
        assert!(diag.has_errors());
    }

    #[test]
    fn test_validate_rejects_invalid_url() {
        let config = test_parse_config("url = \"not a url\"");
        let mut diag = ConfigDiagnostics::new();
        config.site.info.validate(false, &mut diag);
        assert!(diag.has_errors());
    }

    #[test]
    fn test_validate_rejects_zero_page_size() {
        let config = test_parse_config("posts_per_page = 0");
        let mut diag = ConfigDiagnostics::new();
        config.site.info.validate(false, &mut diag);
        assert_eq!(diag.errors().len(), 1);
        assert_eq!(
            diag.errors()[0].field,
            SiteInfoConfig::FIELDS.posts_per_page
        );
    }
}
