//! Global config with atomic reload support.
//!
//! Uses `arc-swap` for lock-free reads and atomic config replacement.
//! Consumers only ever see immutable snapshots: `reload_config` publishes
//! a whole new `Arc<SiteConfig>`, it never mutates a published one.

use crate::config::{ConfigError, SiteConfig};
use anyhow::{Result, bail};
use arc_swap::ArcSwap;
use std::sync::{Arc, LazyLock};

/// Global config storage.
static CONFIG: LazyLock<ArcSwap<SiteConfig>> =
    LazyLock::new(|| ArcSwap::from_pointee(SiteConfig::default()));

/// Global hash of the current config file content.
static CONFIG_HASH: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(0);

/// Get the current config snapshot.
#[inline]
pub fn cfg() -> Arc<SiteConfig> {
    CONFIG.load_full()
}

/// Install a loaded config as the process-wide snapshot.
///
/// Records the file's content hash so a later [`reload_config`] can skip
/// no-op reloads.
pub fn init_config(config: SiteConfig) -> Arc<SiteConfig> {
    use std::fs;

    if config.config_path.exists()
        && let Ok(content) = fs::read_to_string(&config.config_path)
    {
        let hash = crate::utils::hash::compute(content.as_bytes());
        CONFIG_HASH.store(hash, std::sync::atomic::Ordering::Relaxed);
    }

    let arc = Arc::new(config);
    CONFIG.store(Arc::clone(&arc));
    arc
}

/// Reload config from disk if content changed.
///
/// Returns `Ok(true)` if config was updated, `Ok(false)` if unchanged.
pub fn reload_config() -> Result<bool> {
    use std::fs;

    let current = cfg();
    if current.config_path.as_os_str().is_empty() {
        bail!(ConfigError::NotFound(current.config_path.clone()));
    }

    let content = fs::read_to_string(&current.config_path)
        .map_err(|err| ConfigError::Io(current.config_path.clone(), err))?;
    let new_hash = crate::utils::hash::compute(content.as_bytes());

    let old_hash = CONFIG_HASH.load(std::sync::atomic::Ordering::Relaxed);
    if new_hash == old_hash {
        crate::debug!("reload"; "{} unchanged, skipping", current.config_path.display());
        return Ok(false);
    }

    let new_config = SiteConfig::load_from(&current.config_path)?;
    CONFIG.store(Arc::new(new_config));
    CONFIG_HASH.store(new_hash, std::sync::atomic::Ordering::Relaxed);
    crate::log!("reload"; "configuration reloaded from {}", current.config_path.display());

    Ok(true)
}
