//! `[feed]` configuration.
//!
//! Every feed is off unless its key holds an output path template:
//!
//! ```toml
//! [feed]
//! all_atom = "feeds/all.atom.xml"
//! category_atom = "feeds/{slug}.atom.xml"
//! translation_atom = "feeds/all-{lang}.atom.xml"
//! author_atom = "feeds/{slug}.atom.xml"
//! author_rss = "feeds/{slug}.rss.xml"
//! ```
//!
//! Feeds are usually left disabled while developing.

use crate::config::{ConfigDiagnostics, FieldPath};
use macros::Config;
use serde::{Deserialize, Serialize};

use super::article::SLUG_PLACEHOLDER;

/// Placeholder replaced with a language code in translation feeds.
pub const LANG_PLACEHOLDER: &str = "{lang}";

/// Feed output paths. `None` disables the feed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Config)]
#[serde(default)]
#[config(section = "feed")]
pub struct FeedConfig {
    /// Atom feed with every article.
    pub all_atom: Option<String>,
    /// Per-category Atom feed; must contain `{slug}`.
    pub category_atom: Option<String>,
    /// Per-language Atom feed; must contain `{lang}`.
    pub translation_atom: Option<String>,
    /// Per-author Atom feed; must contain `{slug}`.
    pub author_atom: Option<String>,
    /// Per-author RSS feed; must contain `{slug}`.
    pub author_rss: Option<String>,
}

impl FeedConfig {
    /// Enabled feeds as `(key, template)` pairs, in declaration order.
    pub fn enabled(&self) -> Vec<(&'static str, &str)> {
        self.entries()
            .into_iter()
            .filter_map(|(field, value)| value.map(|v| (field.key(), v)))
            .collect()
    }

    pub fn any_enabled(&self) -> bool {
        self.entries().iter().any(|(_, value)| value.is_some())
    }

    pub fn all_feed(&self) -> Option<&str> {
        self.all_atom.as_deref()
    }

    pub fn category_feed(&self, slug: &str) -> Option<String> {
        fill(self.category_atom.as_deref(), SLUG_PLACEHOLDER, slug)
    }

    pub fn translation_feed(&self, lang: &str) -> Option<String> {
        fill(self.translation_atom.as_deref(), LANG_PLACEHOLDER, lang)
    }

    /// Atom and RSS paths for the author with `slug`.
    pub fn author_feed(&self, slug: &str) -> (Option<String>, Option<String>) {
        (
            fill(self.author_atom.as_deref(), SLUG_PLACEHOLDER, slug),
            fill(self.author_rss.as_deref(), SLUG_PLACEHOLDER, slug),
        )
    }

    /// Validate feed templates.
    ///
    /// `has_site_url` only produces a hint: feeds built without a base URL
    /// carry relative links, which most readers reject.
    pub fn validate(&self, has_site_url: bool, diag: &mut ConfigDiagnostics) {
        let fields = &Self::FIELDS;
        let placeholders = [
            (fields.all_atom, self.all_atom.as_deref(), None),
            (
                fields.category_atom,
                self.category_atom.as_deref(),
                Some(SLUG_PLACEHOLDER),
            ),
            (
                fields.translation_atom,
                self.translation_atom.as_deref(),
                Some(LANG_PLACEHOLDER),
            ),
            (
                fields.author_atom,
                self.author_atom.as_deref(),
                Some(SLUG_PLACEHOLDER),
            ),
            (
                fields.author_rss,
                self.author_rss.as_deref(),
                Some(SLUG_PLACEHOLDER),
            ),
        ];

        for (field, value, placeholder) in placeholders {
            let Some(template) = value else { continue };
            if template.trim().is_empty() {
                diag.error_with_hint(
                    field,
                    "feed path is empty",
                    format!("remove {field} to disable this feed"),
                );
            } else if let Some(placeholder) = placeholder
                && !template.contains(placeholder)
            {
                diag.error(
                    field,
                    format!("feed path '{template}' has no `{placeholder}` placeholder"),
                );
            }
        }

        if self.any_enabled() && !has_site_url {
            diag.hint(
                FieldPath::new("site.url"),
                "feeds are enabled but the site URL is empty; feed links will be relative",
            );
        }
    }

    fn entries(&self) -> [(FieldPath, Option<&str>); 5] {
        let fields = &Self::FIELDS;
        [
            (fields.all_atom, self.all_atom.as_deref()),
            (fields.category_atom, self.category_atom.as_deref()),
            (fields.translation_atom, self.translation_atom.as_deref()),
            (fields.author_atom, self.author_atom.as_deref()),
            (fields.author_rss, self.author_rss.as_deref()),
        ]
    }
}

fn fill(template: Option<&str>, placeholder: &str, value: &str) -> Option<String> {
    template.map(|t| t.replace(placeholder, value))
}
