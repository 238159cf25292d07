//! `[content]` configuration.

use crate::config::ConfigDiagnostics;
use macros::Config;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Location of source content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Config)]
#[serde(default)]
#[config(section = "content")]
pub struct ContentConfig {
    /// Content directory, relative to the site root.
    #[config(default = "content")]
    pub path: PathBuf,
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            path: "content".into(),
        }
    }
}

impl ContentConfig {
    /// Resolve the content directory against `root`, expanding `~`.
    pub fn resolve(&self, root: &Path) -> PathBuf {
        let raw = self.path.to_string_lossy();
        let expanded = PathBuf::from(shellexpand::tilde(&raw).into_owned());
        if expanded.is_absolute() {
            expanded
        } else {
            root.join(expanded)
        }
    }

    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.path.as_os_str().is_empty() {
            diag.error_with_hint(
                Self::FIELDS.path,
                "content path is empty",
                "set it to the directory holding your articles, e.g. \"content\"",
            );
        }
    }
}
