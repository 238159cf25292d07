//! Process-wide config handle.
//!
//! The record is loaded once per invocation and never replaced, so a
//! set-once cell is all the synchronization it needs.

use crate::config::{ConfigError, SiteConfig};
use std::sync::{Arc, OnceLock};

static CONFIG: OnceLock<Arc<SiteConfig>> = OnceLock::new();

/// The loaded config.
///
/// Returns `None` before `init_config` has run.
#[inline]
pub fn cfg() -> Option<Arc<SiteConfig>> {
    CONFIG.get().cloned()
}

/// Install the config for this process.
///
/// Fails if a config was already installed.
pub fn init_config(config: SiteConfig) -> Result<Arc<SiteConfig>, ConfigError> {
    let arc = Arc::new(config);
    CONFIG
        .set(Arc::clone(&arc))
        .map_err(|_| ConfigError::Validation("config already initialized".into()))?;
    Ok(arc)
}
