//! `[pagination]` configuration.

use crate::config::ConfigDiagnostics;
use macros::Config;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Config)]
#[serde(default)]
#[config(section = "pagination")]
pub struct PaginationConfig {
    /// Items per listing page.
    #[config(default = "10")]
    pub size: u32,
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self { size: 10 }
    }
}

impl PaginationConfig {
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.size == 0 {
            diag.error_with_hint(
                Self::FIELDS.size,
                "pagination size must be greater than zero",
                "e.g. size = 10",
            );
        }
    }
}
