//! `[article]` configuration.
//!
//! Articles are saved at the same path they are served from, so only the
//! public URL pattern is configured and the save pattern is derived from it.

use crate::config::ConfigDiagnostics;
use macros::Config;
use serde::{Deserialize, Serialize};

/// Placeholder replaced with the article slug.
pub const SLUG_PLACEHOLDER: &str = "{slug}";

/// Article URL and output path settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Config)]
#[serde(default)]
#[config(section = "article")]
pub struct ArticleConfig {
    /// Public URL pattern; must contain `{slug}`. Also used as the save path.
    #[config(default = "{slug}.html")]
    pub url: String,
}

impl Default for ArticleConfig {
    fn default() -> Self {
        Self {
            url: "{slug}.html".into(),
        }
    }
}

impl ArticleConfig {
    /// Save path pattern. Always the URL pattern.
    #[inline]
    pub fn save_as(&self) -> &str {
        &self.url
    }

    /// Public URL of the article with `slug`.
    pub fn url_for(&self, slug: &str) -> String {
        self.url.replace(SLUG_PLACEHOLDER, slug)
    }

    /// Output path of the article with `slug`, relative to the output dir.
    pub fn save_path_for(&self, slug: &str) -> String {
        self.save_as().replace(SLUG_PLACEHOLDER, slug)
    }

    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.url.trim().is_empty() {
            diag.error_with_hint(
                Self::FIELDS.url,
                "article URL pattern is empty",
                "e.g. \"post/{slug}.html\"",
            );
        } else if !self.url.contains(SLUG_PLACEHOLDER) {
            diag.error_with_hint(
                Self::FIELDS.url,
                format!("pattern '{}' has no `{SLUG_PLACEHOLDER}` placeholder", self.url),
                "every article would be written to the same file; e.g. \"post/{slug}.html\"",
            );
        }
        if self.url.starts_with('/') {
            diag.warn(
                Self::FIELDS.url,
                "leading '/' makes the save path absolute; it is kept as written",
            );
        }
    }
}
