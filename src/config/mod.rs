//! Site configuration management for `vellum.toml`.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/       # Configuration section definitions
//! │   └── site       # [site] and sub-sections
//! ├── types/         # Utility types
//! │   ├── error      # ConfigError, ConfigDiagnostics, FieldPath
//! │   └── handle     # Global config handle
//! └── mod.rs         # SiteConfig (this file)
//! ```
//!
//! # Sections
//!
//! | Section         | Purpose                                       |
//! |-----------------|-----------------------------------------------|
//! | `[site.info]`   | Site metadata (title, author, url, extra)     |
//! | `[[site.nav]]`  | Navigation entries (href/label, ordered)      |
//! | `[[site.social]]`| Social links (href/label, ordered)           |
//! | `[site.icons]`  | Label-to-icon lookup table                    |
//! | `[site.feed]`   | Feed metadata (enable, path, format)          |

pub mod section;
pub mod types;
mod util;

use util::find_config_file;

// Re-export from section/
pub use section::{FeedConfig, FeedFormat, IconsConfig, Link, SiteInfoConfig, SiteSectionConfig};

// Re-export from types/
pub use types::{ConfigDiagnostics, ConfigError, FieldPath, cfg, init_config, reload_config};

use crate::log;
use anyhow::{Result, bail};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

/// Default config file name, searched for upward from the current directory.
pub const DEFAULT_CONFIG_NAME: &str = "vellum.toml";

// ============================================================================
// root configuration
// ============================================================================

/// Root configuration structure representing vellum.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Absolute path to the config file (internal use only)
    #[serde(skip)]
    pub config_path: PathBuf,

    /// Site root directory - parent of config file (internal use only)
    #[serde(skip)]
    pub root: PathBuf,

    /// Site configuration (info, nav, social, icons, feed)
    #[serde(default)]
    pub site: SiteSectionConfig,
}

impl SiteConfig {
    /// Load configuration by searching upward from the current directory.
    ///
    /// The site root is determined by the config file's parent directory.
    pub fn load() -> Result<Self> {
        let Some(path) = find_config_file(Path::new(DEFAULT_CONFIG_NAME)) else {
            bail!(ConfigError::NotFound(PathBuf::from(DEFAULT_CONFIG_NAME)));
        };
        Self::load_file(&path)
    }

    /// Load configuration from an explicit file path.
    ///
    /// Expands a leading tilde, so `~/blog/vellum.toml` works from any
    /// embedding application.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let expanded = shellexpand::tilde(&path.as_ref().to_string_lossy()).into_owned();
        let path = PathBuf::from(expanded);

        if !path.exists() {
            bail!(ConfigError::NotFound(path));
        }
        Self::load_file(&path)
    }

    /// Shared load pipeline: parse, finalize paths, validate.
    fn load_file(path: &Path) -> Result<Self> {
        let mut config = Self::from_path(path)?;
        config.finalize(path);
        config.validate()?;
        Ok(config)
    }

    /// Parse configuration from TOML string
    pub fn from_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        Ok(config)
    }

    /// Load configuration from file path with unknown field detection.
    fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (config, ignored) = Self::parse_with_ignored(&content)?;

        if !ignored.is_empty() {
            Self::print_unknown_fields_warning(&ignored, path);
        }

        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>)> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })?;
        Ok((config, ignored))
    }

    /// Print warning about unknown fields.
    fn print_unknown_fields_warning(fields: &[String], path: &Path) {
        // Show only filename (vellum.toml) since it's always at site root
        let display_path = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_else(|| path.to_string_lossy());
        log!("warning"; "unknown fields in {}:", display_path);
        log!("warning"; "ignoring:");
        for field in fields {
            eprintln!("- {}", field);
        }
    }

    /// Record absolute config path and site root after parsing.
    fn finalize(&mut self, path: &Path) {
        self.config_path = crate::utils::path::normalize_path(path);
        self.root = self
            .config_path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_default();
    }

    /// Get the site root directory path
    pub fn get_root(&self) -> &Path {
        &self.root
    }

    /// Join a path with the site root directory.
    ///
    /// Shorthand for `config.get_root().join(path)`.
    pub fn root_join(&self, path: impl AsRef<Path>) -> PathBuf {
        self.root.join(path)
    }

    // ========================================================================
    // validation
    // ========================================================================

    /// Validate configuration.
    ///
    /// Collects all validation errors and returns them at once. Warnings
    /// (e.g. a social label without an icon) are printed, not fatal.
    pub fn validate(&self) -> Result<()> {
        let mut diag = ConfigDiagnostics::new();

        self.site.validate(&mut diag);

        diag.print_warnings();

        diag.into_result()
            .map_err(|e| ConfigError::Diagnostics(e).into())
    }
}

// ============================================================================
// Test Helpers (available to all modules via `use crate::config::test_*`)
// ============================================================================

/// Parse config with minimal required `[site.info]` fields.
/// Panics if there are unknown fields (to catch config typos in tests).
#[cfg(test)]
pub fn test_parse_config(extra: &str) -> SiteConfig {
    let config = format!("[site.info]\ntitle = \"Test\"\ndescription = \"Test\"\n{extra}");
    let (parsed, ignored) = SiteConfig::parse_with_ignored(&config).unwrap();
    assert!(
        ignored.is_empty(),
        "test config has unknown fields: {:?}",
        ignored
    );
    parsed
}

// ============================================================================
// tests
// ============================================================================
