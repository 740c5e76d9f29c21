//! Configuration section definitions.
//!
//! Each module corresponds to a section in `vellum.toml`:
//!
//! | Module | TOML Section | Purpose                                 |
//! |--------|--------------|-----------------------------------------|
//! | `site` | `[site]`     | Site info, links, icon table, feed      |

pub mod site;

pub use site::{FeedConfig, FeedFormat, IconsConfig, Link, SiteInfoConfig, SiteSectionConfig};
