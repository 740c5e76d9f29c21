//! Site configuration for the Vellum blog engine.
//!
//! This crate owns the `vellum.toml` schema: site metadata, navigation
//! links, social links, the label-to-icon lookup table, and feed metadata.
//! It loads the file, validates it, and publishes an immutable snapshot
//! that the rendering layer reads through [`cfg`].
//!
//! ```no_run
//! use vellum_config::{SiteConfig, cfg, init_config};
//!
//! let config = init_config(SiteConfig::load()?);
//! println!("building {}", config.site.info.title);
//!
//! // Anywhere else in the process:
//! let title = &cfg().site.info.title;
//! # anyhow::Ok(())
//! ```

pub mod config;
pub mod logger;
mod utils;

pub use config::{
    ConfigDiagnostics, ConfigError, FeedConfig, FeedFormat, FieldPath, IconsConfig, Link,
    SiteConfig, SiteInfoConfig, SiteSectionConfig, cfg, init_config, reload_config,
};
pub use logger::set_verbose;
