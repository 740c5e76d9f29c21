//! Navigation and social link entries.
//!
//! Both `[[site.nav]]` and `[[site.social]]` are ordered lists of
//! href/label pairs; list order is display order.
//!
//! # Example
//!
//! ```toml
//! [[site.nav]]
//! href = "/blog"
//! label = "blog"
//!
//! [[site.social]]
//! href = "https://github.com/alice"
//! label = "GitHub"
//!
//! [[site.social]]
//! href = "mailto:alice@example.com"
//! label = "Email"
//! ```

use serde::{Deserialize, Serialize};

use crate::config::util::is_external_link;
use crate::config::{ConfigDiagnostics, FieldPath};

/// A single href/label pair rendered in navigation or social UI.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    /// Link target: site-relative path, absolute URL, or `mailto:` URI.
    pub href: String,
    /// Display name.
    pub label: String,
}

impl Link {
    pub fn new(href: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            href: href.into(),
            label: label.into(),
        }
    }

    /// True if the target leaves the site (has a URI scheme).
    pub fn is_external(&self) -> bool {
        is_external_link(&self.href)
    }

    /// Validate one entry.
    ///
    /// # Checks
    /// - `href` and `label` must be non-empty
    /// - external `http(s)` hrefs must parse as full URLs
    /// - everything else must be a site-relative path starting with `/`
    pub fn validate(&self, field: FieldPath, diag: &mut ConfigDiagnostics) {
        if self.label.trim().is_empty() {
            diag.error(
                field,
                format!("entry with href '{}' has an empty label", self.href),
            );
        }

        if self.href.trim().is_empty() {
            diag.error(
                field,
                format!("entry '{}' has an empty href", self.label),
            );
            return;
        }

        if is_external_link(&self.href) {
            self.validate_external(field, diag);
        } else if !self.href.starts_with('/') {
            diag.error_with_hint(
                field,
                format!("href '{}' is neither site-relative nor a full URI", self.href),
                "start with '/' for site pages, or use a full URL / mailto: address",
            );
        }
    }

    /// Strict URL check for http(s) targets. Other schemes (`mailto:`,
    /// `xmpp:`, ...) are passed through untouched.
    fn validate_external(&self, field: FieldPath, diag: &mut ConfigDiagnostics) {
        if !self.href.starts_with("http:") && !self.href.starts_with("https:") {
            return;
        }

        match url::Url::parse(&self.href) {
            Ok(parsed) => {
                if parsed.host_str().is_none() {
                    diag.error_with_hint(
                        field,
                        format!("URL '{}' must have a valid host", self.href),
                        "use format like https://example.com/profile",
                    );
                }
            }
            Err(e) => {
                diag.error_with_hint(
                    field,
                    format!("invalid URL '{}': {}", self.href, e),
                    "use format like https://example.com/profile",
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;

    const FIELD: FieldPath = FieldPath::new("site.social");

    #[test]
    fn test_parse_nav_and_social() {
        let config = test_parse_config(
            r#"[[site.nav]]
href = "/blog"
label = "blog"

[[site.nav]]
href = "/tags"
label = "tags"

[[site.social]]
href = "https://github.com/alice"
label = "GitHub"
"#,
        );
        assert_eq!(config.site.nav.len(), 2);
        assert_eq!(config.site.nav[0], Link::new("/blog", "blog"));
        assert_eq!(config.site.nav[1].label, "tags");
        assert_eq!(config.site.social[0].href, "https://github.com/alice");
    }

    #[test]
    fn test_order_is_preserved() {
        let config = test_parse_config(
            r#"[[site.social]]
href = "https://github.com/alice"
label = "GitHub"

[[site.social]]
href = "mailto:alice@example.com"
label = "Email"

[[site.social]]
href = "/rss.xml"
label = "RSS"
"#,
        );
        let labels: Vec<_> = config.site.social.iter().map(|l| l.label.as_str()).collect();
        assert_eq!(labels, ["GitHub", "Email", "RSS"]);
    }

    #[test]
    fn test_is_external() {
        assert!(Link::new("https://example.com", "site").is_external());
        assert!(Link::new("mailto:a@b.c", "Email").is_external());
        assert!(!Link::new("/rss.xml", "RSS").is_external());
        assert!(!Link::new("/blog", "blog").is_external());
    }

    #[test]
    fn test_validate_accepts_well_formed_entries() {
        let mut diag = ConfigDiagnostics::new();
        Link::new("/blog", "blog").validate(FIELD, &mut diag);
        Link::new("https://github.com/alice", "GitHub").validate(FIELD, &mut diag);
        Link::new("mailto:alice@example.com", "Email").validate(FIELD, &mut diag);
        assert!(!diag.has_errors());
    }

    #[test]
    fn test_validate_empty_href() {
        let mut diag = ConfigDiagnostics::new();
        Link::new("", "GitHub").validate(FIELD, &mut diag);
        assert_eq!(diag.errors().len(), 1);
        assert!(diag.errors()[0].message.contains("empty href"));
    }

    #[test]
    fn test_validate_empty_label() {
        let mut diag = ConfigDiagnostics::new();
        Link::new("/blog", "  ").validate(FIELD, &mut diag);
        assert_eq!(diag.errors().len(), 1);
        assert!(diag.errors()[0].message.contains("empty label"));
    }

    #[test]
    fn test_validate_relative_without_slash() {
        let mut diag = ConfigDiagnostics::new();
        Link::new("blog", "blog").validate(FIELD, &mut diag);
        assert_eq!(diag.errors().len(), 1);
        assert!(diag.errors()[0].hint.is_some());
    }

    #[test]
    fn test_validate_malformed_http_url() {
        let mut diag = ConfigDiagnostics::new();
        Link::new("https://", "broken").validate(FIELD, &mut diag);
        assert!(diag.has_errors());
    }

    #[test]
    fn test_validate_non_http_scheme_passes() {
        let mut diag = ConfigDiagnostics::new();
        Link::new("xmpp:alice@example.com", "XMPP").validate(FIELD, &mut diag);
        assert!(!diag.has_errors());
    }
}
