//! `[site]` configuration.
//!
//! Identity of the site: who writes it, what it is called, where it lives,
//! and the locale articles are dated and written in.

use crate::config::ConfigDiagnostics;
use macros::Config;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

/// Language tag or POSIX locale spelling (`en`, `EN`, `pt-BR`, `en_US`, `zh-Hans`).
static LANGUAGE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z]{2,3}(?:[-_][A-Za-z0-9]{2,8})*$").expect("valid regex")
});

/// Any zone in the tz database, including links and legacy names (`CET`, `Japan`, `Zulu`).
fn is_valid_timezone(tz: &str) -> bool {
    tz.eq_ignore_ascii_case("utc") || tz.parse::<chrono_tz::Tz>().is_ok()
}

/// Site metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Config)]
#[serde(default)]
#[config(section = "site")]
pub struct SiteInfoConfig {
    /// Display name of the site owner.
    pub author: String,

    /// Site title.
    pub name: String,

    /// Base URL for link generation. Empty while developing.
    pub url: String,

    /// IANA timezone identifier.
    #[config(default = "UTC")]
    pub timezone: String,

    /// Default content language.
    #[config(default = "en")]
    pub language: String,

    /// Emit document-relative URLs (useful when developing).
    pub relative_urls: bool,
}

impl Default for SiteInfoConfig {
    fn default() -> Self {
        Self {
            author: String::new(),
            name: String::new(),
            url: String::new(),
            timezone: "UTC".into(),
            language: "en".into(),
            relative_urls: false,
        }
    }
}

impl SiteInfoConfig {
    /// Base URL with any trailing slash removed, or `None` when unset.
    pub fn base_url(&self) -> Option<&str> {
        let url = self.url.trim_end_matches('/');
        (!url.is_empty()).then_some(url)
    }

    /// Validate site metadata.
    ///
    /// An empty `url` is allowed; a non-empty one must be an absolute
    /// http(s) URL with a host.
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.name.trim().is_empty() {
            diag.warn(Self::FIELDS.name, "site name is empty");
        }

        if !self.url.is_empty() {
            match url::Url::parse(&self.url) {
                Ok(parsed) => {
                    if !matches!(parsed.scheme(), "http" | "https") {
                        diag.error_with_hint(
                            Self::FIELDS.url,
                            format!(
                                "scheme '{}' not supported, must be http or https",
                                parsed.scheme()
                            ),
                            "use format like https://example.com",
                        );
                    }
                    if parsed.host_str().is_none() {
                        diag.error_with_hint(
                            Self::FIELDS.url,
                            "URL must have a valid host",
                            "use format like https://example.com",
                        );
                    }
                }
                Err(e) => {
                    diag.error_with_hint(
                        Self::FIELDS.url,
                        format!("invalid URL: {e}"),
                        "use format like https://example.com, or leave empty",
                    );
                }
            }
        }

        if !is_valid_timezone(&self.timezone) {
            diag.error_with_hint(
                Self::FIELDS.timezone,
                format!("unknown timezone '{}'", self.timezone),
                "use a tz database name like \"Europe/Amsterdam\" or \"UTC\"",
            );
        }

        // handed to the generator verbatim
        if !LANGUAGE_RE.is_match(&self.language) {
            diag.warn(
                Self::FIELDS.language,
                format!("'{}' does not look like a language code", self.language),
            );
        }
    }
}
