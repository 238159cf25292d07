//! Type-safe config field path.

use owo_colors::OwoColorize;
use std::fmt;

/// Dotted TOML key of a config field, e.g. `site.timezone`.
///
/// Generated per section by `#[derive(Config)]`:
///
/// ```ignore
/// diag.error(PaginationConfig::FIELDS.size, "must be greater than zero");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldPath(pub &'static str);

impl FieldPath {
    #[inline]
    pub const fn new(path: &'static str) -> Self {
        Self(path)
    }

    #[inline]
    pub const fn as_str(&self) -> &'static str {
        self.0
    }

    /// Last key of the path (`timezone` for `site.timezone`).
    pub fn key(&self) -> &'static str {
        self.0.rsplit_once('.').map_or(self.0, |(_, key)| key)
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", format_args!("`{}`", self.0).bright_blue())
    }
}

impl AsRef<str> for FieldPath {
    fn as_ref(&self) -> &str {
        self.0
    }
}
