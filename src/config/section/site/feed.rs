//! Feed (RSS/Atom) metadata.
//!
//! Only the metadata lives here; the external generator decides how the
//! feed file is actually produced.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Feed output format.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum FeedFormat {
    /// RSS 2.0 format (default).
    #[default]
    Rss,
    /// Atom 1.0 format.
    Atom,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FeedConfig {
    /// Enable feed generation by the consuming site generator.
    pub enable: bool,
    /// Site-relative output path for the feed file.
    pub path: PathBuf,
    /// Feed format: rss | atom.
    pub format: FeedFormat,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            enable: false,
            path: "rss.xml".into(),
            format: FeedFormat::Rss,
        }
    }
}
