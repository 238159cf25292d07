//! `[plugins]` and `[pandoc]` configuration.
//!
//! Plugins are loaded by the generator in the order listed here. The pandoc
//! reader plugin forwards `[pandoc] args` to the converter unchanged.

use crate::config::ConfigDiagnostics;
use macros::Config;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

/// The plugin that reads `[pandoc] args`.
pub const PANDOC_READER: &str = "pelican.plugins.pandoc_reader";

/// Generator plugins to load.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Config)]
#[serde(default)]
#[config(section = "plugins")]
pub struct PluginsConfig {
    /// Plugin identifiers, e.g. "pelican.plugins.pandoc_reader".
    pub enabled: Vec<String>,
}

impl PluginsConfig {
    pub fn is_enabled(&self, id: &str) -> bool {
        self.enabled.iter().any(|p| p == id)
    }

    /// Identifiers must be non-empty and unique; order is kept as written.
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        let mut seen = FxHashSet::default();
        for id in &self.enabled {
            if id.trim().is_empty() {
                diag.error(Self::FIELDS.enabled, "empty plugin identifier");
            } else if !seen.insert(id.as_str()) {
                diag.error_with_hint(
                    Self::FIELDS.enabled,
                    format!("plugin '{id}' is listed more than once"),
                    "remove the duplicate entry",
                );
            }
        }
    }
}

/// Arguments for the external document converter.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Config)]
#[serde(default)]
#[config(section = "pandoc")]
pub struct PandocConfig {
    /// Command-line arguments passed to pandoc, in order.
    pub args: Vec<String>,
}

impl PandocConfig {
    /// `plugins` only produces a warning: without the pandoc reader the
    /// arguments are never used.
    pub fn validate(&self, plugins: &PluginsConfig, diag: &mut ConfigDiagnostics) {
        if !self.args.is_empty() && !plugins.is_enabled(PANDOC_READER) {
            diag.warn(
                Self::FIELDS.args,
                format!("pandoc arguments are set but '{PANDOC_READER}' is not enabled"),
            );
        }

        for (i, arg) in self.args.iter().enumerate() {
            if arg.is_empty() {
                diag.error(Self::FIELDS.args, format!("argument {} is empty", i + 1));
            } else if !arg.starts_with('-') {
                diag.warn(
                    Self::FIELDS.args,
                    format!("argument '{arg}' is not an option; pandoc will treat it as an input file"),
                );
            }
        }
    }
}
