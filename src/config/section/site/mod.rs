//! `[site]` section configuration.
//!
//! Everything the rendering layer needs to describe the site as a whole:
//! metadata, navigation, social links, the icon table, and feed metadata.
//!
//! # Example
//!
//! ```toml
//! [site.info]
//! title = "My Blog"
//! description = "A personal blog"
//! author = "Alice"
//! url = "https://myblog.com"
//!
//! [[site.nav]]
//! href = "/blog"
//! label = "blog"
//!
//! [[site.social]]
//! href = "https://github.com/alice"
//! label = "GitHub"
//!
//! [site.icons]
//! GitHub = "lucide:github"
//!
//! [site.feed]
//! enable = true
//! path = "rss.xml"
//! ```

mod feed;
mod icons;
mod info;
mod links;

pub use feed::{FeedConfig, FeedFormat};
pub use icons::IconsConfig;
pub use info::SiteInfoConfig;
pub use links::Link;

use serde::{Deserialize, Serialize};

use crate::config::{ConfigDiagnostics, FieldPath};

/// Field paths used in diagnostics.
pub struct SiteSectionFields {
    pub nav: FieldPath,
    pub social: FieldPath,
}

/// Site section configuration containing metadata, links, icons, and feed.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteSectionConfig {
    /// Site metadata (title, author, description, etc.)
    pub info: SiteInfoConfig,

    /// Top-level navigation entries, in display order.
    pub nav: Vec<Link>,

    /// Social/profile links, in display order.
    pub social: Vec<Link>,

    /// Label-to-icon lookup table.
    pub icons: IconsConfig,

    /// Feed metadata (RSS/Atom).
    pub feed: FeedConfig,
}

impl SiteSectionConfig {
    pub const FIELDS: SiteSectionFields = SiteSectionFields {
        nav: FieldPath::new("site.nav"),
        social: FieldPath::new("site.social"),
    };

    /// Validate the whole section.
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        self.info.validate(self.feed.enable, diag);

        for link in &self.nav {
            link.validate(Self::FIELDS.nav, diag);
        }
        for link in &self.social {
            link.validate(Self::FIELDS.social, diag);
        }

        self.icons.validate(&self.social, diag);
    }
}
