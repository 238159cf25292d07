//! `[links]` configuration: blogroll and social profiles.
//!
//! Entries are rendered verbatim in the order they are written. Both the
//! pair form and the table form are accepted:
//!
//! ```toml
//! [links]
//! blogroll = [["Pelican", "https://getpelican.com/"]]
//! social = [{ label = "GitHub", url = "https://github.com/ErwinJanssen/" }]
//! ```

use crate::config::{ConfigDiagnostics, FieldPath};
use macros::Config;
use serde::{Deserialize, Serialize};

/// A `(label, url)` pair shown in a sidebar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "LinkEntry")]
pub struct Link {
    pub label: String,
    pub url: String,
}

impl Link {
    pub fn new(label: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            url: url.into(),
        }
    }
}

/// Accepted spellings of a link in TOML.
#[derive(Deserialize)]
#[serde(untagged)]
enum LinkEntry {
    Pair(String, String),
    Table { label: String, url: String },
}

impl From<LinkEntry> for Link {
    fn from(entry: LinkEntry) -> Self {
        match entry {
            LinkEntry::Pair(label, url) | LinkEntry::Table { label, url } => Self::new(label, url),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Config)]
#[serde(default)]
#[config(section = "links")]
pub struct LinksConfig {
    /// Blogroll links.
    pub blogroll: Vec<Link>,
    /// Social profile links.
    pub social: Vec<Link>,
}

impl LinksConfig {
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        validate_list(Self::FIELDS.blogroll, &self.blogroll, diag);
        validate_list(Self::FIELDS.social, &self.social, diag);
    }
}

fn validate_list(field: FieldPath, links: &[Link], diag: &mut ConfigDiagnostics) {
    for (i, link) in links.iter().enumerate() {
        if link.label.trim().is_empty() {
            diag.error(field, format!("entry {} has an empty label", i + 1));
        }
        if link.url.trim().is_empty() {
            diag.error_with_hint(
                field,
                format!("entry {} ('{}') has an empty URL", i + 1, link.label),
                "use \"#\" for a placeholder link",
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;

    #[test]
    fn test_defaults() {
        let config = test_parse_config("");
        assert!(config.links.blogroll.is_empty());
        assert!(config.links.social.is_empty());
    }

    #[test]
    fn test_pair_and_table_forms() {
        let config = test_parse_config(
            r##"[links]
blogroll = [
    ["Pelican", "https://getpelican.com/"],
    { label = "Placeholder", url = "#" },
]
"##,
        );
        assert_eq!(
            config.links.blogroll,
            [
                Link::new("Pelican", "https://getpelican.com/"),
                Link::new("Placeholder", "#"),
            ]
        );
    }

    #[test]
    fn test_order_and_duplicates_kept() {
        let config = test_parse_config(
            r#"[links]
social = [
    ["Mastodon", "https://mastodon.social/@a"],
    ["GitHub", "https://github.com/a/"],
    ["Mastodon", "https://mastodon.social/@a"],
]
"#,
        );
        let labels: Vec<_> = config.links.social.iter().map(|l| l.label.as_str()).collect();
        assert_eq!(labels, ["Mastodon", "GitHub", "Mastodon"]);

        let mut diag = ConfigDiagnostics::new();
        config.links.validate(&mut diag);
        assert!(diag.is_empty());
    }

    #[test]
    fn test_serialize_as_tables() {
        let links = LinksConfig {
            blogroll: vec![Link::new("Python.org", "https://www.python.org/")],
            social: vec![Link::new("GitHub", "https://github.com/ErwinJanssen/")],
        };
        let toml = toml::to_string(&links).unwrap();
        assert!(toml.contains("label = \"Python.org\""));
        let back: LinksConfig = toml::from_str(&toml).unwrap();
        assert_eq!(back, links);
    }

    #[test]
    fn test_empty_entries_rejected() {
        let links = LinksConfig {
            blogroll: vec![Link::new("", "#")],
            social: vec![Link::new("GitHub", " ")],
        };
        let mut diag = ConfigDiagnostics::new();
        links.validate(&mut diag);
        assert_eq!(diag.error_fields(), ["links.blogroll", "links.social"]);
    }
}
