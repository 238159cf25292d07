//! Site configuration management for `site.toml`.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/       # One module per TOML table
//! ├── types/         # ConfigError, diagnostics, field paths, global handle
//! ├── util.rs        # Config discovery
//! └── mod.rs         # SiteConfig (this file)
//! ```
//!
//! # Sections
//!
//! | Section        | Purpose                                        |
//! |----------------|------------------------------------------------|
//! | `[site]`       | Author, site name, base URL, timezone, language|
//! | `[content]`    | Source content directory                       |
//! | `[article]`    | Article URL pattern (also the save pattern)    |
//! | `[feed]`       | Feed output paths, all disabled by default     |
//! | `[pagination]` | Items per listing page                         |
//! | `[links]`      | Blogroll and social links, in author order     |
//! | `[plugins]`    | Generator plugins to load                      |
//! | `[pandoc]`     | Arguments for the pandoc reader plugin         |

pub mod section;
pub mod types;
mod util;

pub use util::find_config_file;

pub use section::{
    ArticleConfig, ContentConfig, FeedConfig, LinksConfig, PaginationConfig,
    PandocConfig, PluginsConfig, SiteInfoConfig,
};

pub use types::{ConfigDiagnostics, ConfigError, FieldPath, cfg, init_config};

use crate::cli::{Cli, Commands};
use crate::{debug, log};
use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

// ============================================================================
// root configuration
// ============================================================================

/// Root configuration structure representing site.toml
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Absolute path to the config file (internal use only)
    #[serde(skip)]
    pub config_path: PathBuf,

    /// Project root directory - parent of config file (internal use only)
    #[serde(skip)]
    pub root: PathBuf,

    #[serde(default)]
    pub site: SiteInfoConfig,

    #[serde(default)]
    pub content: ContentConfig,

    #[serde(default)]
    pub article: ArticleConfig,

    #[serde(default)]
    pub feed: FeedConfig,

    #[serde(default)]
    pub pagination: PaginationConfig,

    #[serde(default)]
    pub links: LinksConfig,

    #[serde(default)]
    pub plugins: PluginsConfig,

    #[serde(default)]
    pub pandoc: PandocConfig,
}

impl SiteConfig {
    /// Load configuration for the given CLI invocation.
    ///
    /// `init` gets a default config rooted at the target directory. Every
    /// other command searches upward from cwd for the config file, then
    /// parses and validates it.
    pub fn load(cli: &Cli) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current working directory")?;
        Self::load_in(&cwd, cli)
    }

    /// [`SiteConfig::load`] with an explicit working directory.
    fn load_in(cwd: &Path, cli: &Cli) -> Result<Self> {
        if let Commands::Init { name, .. } = &cli.command {
            let root = match name {
                Some(name) => cwd.join(name),
                None => cwd.to_path_buf(),
            };
            return Ok(Self {
                config_path: root.join(&cli.config),
                root,
                ..Self::default()
            });
        }

        let Some(config_path) = find_config_file(cwd, &cli.config) else {
            bail!(ConfigError::NotFound(cli.config.clone()));
        };

        Self::load_from(&config_path, cli.strict)
    }

    /// Load and validate the config file at `path`.
    pub fn load_from(path: &Path, strict: bool) -> Result<Self> {
        debug!("config"; "loading {}", path.display());

        let mut config = Self::from_path(path, strict)?;
        config.config_path = path.to_path_buf();
        config.root = path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_default();

        config.validate()?;
        Ok(config)
    }

    /// Parse configuration from TOML string
    pub fn from_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).map_err(ConfigError::Toml)?;
        Ok(config)
    }

    /// Read and parse `path`, reporting keys the record does not know.
    fn from_path(path: &Path, strict: bool) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (config, ignored) = Self::parse_with_ignored(&content)?;

        if !ignored.is_empty() {
            Self::print_unknown_fields_warning(&ignored, path);
            if strict {
                bail!("Aborted due to unknown config fields (--strict)");
            }
        }

        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    pub(crate) fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>)> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })
        .map_err(ConfigError::Toml)?;
        Ok((config, ignored))
    }

    fn print_unknown_fields_warning(fields: &[String], path: &Path) {
        let display_path = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_else(|| path.to_string_lossy());
        log!("warning"; "unknown fields in {}, ignoring:", display_path);
        for field in fields {
            eprintln!("- {}", field);
        }
    }

    /// Content directory resolved against the site root.
    pub fn content_dir(&self) -> PathBuf {
        self.content.resolve(&self.root)
    }

    /// Read one setting by dotted key, e.g. `site.author` or `links.social`.
    ///
    /// `article` also carries the derived `save_as` pattern. Returns `None`
    /// for unknown keys.
    pub fn get(&self, key: &str) -> Option<serde_json::Value> {
        let mut value = serde_json::to_value(self).ok()?;
        if let Some(article) = value.get_mut("article").and_then(|v| v.as_object_mut()) {
            article.insert("save_as".into(), self.article.save_as().into());
        }
        if key.is_empty() {
            return Some(value);
        }
        for part in key.split('.') {
            value = match value {
                serde_json::Value::Object(mut map) => map.remove(part)?,
                serde_json::Value::Array(mut items) => {
                    let index: usize = part.parse().ok()?;
                    if index >= items.len() {
                        return None;
                    }
                    items.swap_remove(index)
                }
                _ => return None,
            };
        }
        Some(value)
    }

    // ========================================================================
    // validation
    // ========================================================================

    /// Validate the whole record.
    ///
    /// Collects all validation errors and returns them at once.
    pub fn validate(&self) -> Result<()> {
        let diag = self.diagnose();
        diag.print_hints_and_warnings();
        diag.into_result()
            .map_err(|e| ConfigError::Diagnostics(e).into())
    }

    /// Run every section check without printing anything.
    pub fn diagnose(&self) -> ConfigDiagnostics {
        let mut diag = ConfigDiagnostics::new();

        self.site.validate(&mut diag);
        self.content.validate(&mut diag);
        self.article.validate(&mut diag);
        self.feed.validate(self.site.base_url().is_some(), &mut diag);
        self.pagination.validate(&mut diag);
        self.links.validate(&mut diag);
        self.plugins.validate(&mut diag);
        self.pandoc.validate(&self.plugins, &mut diag);

        diag
    }
}

// ============================================================================
// Test Helpers (available to all modules via `use crate::config::test_*`)
// ============================================================================

/// Parse config with minimal `[site]` fields.
/// Panics if there are unknown fields (to catch config typos in tests).
#[cfg(test)]
pub fn test_parse_config(extra: &str) -> SiteConfig {
    let config = format!("[site]\nauthor = \"Test\"\nname = \"Test\"\n{extra}");
    let (parsed, ignored) = SiteConfig::parse_with_ignored(&config).unwrap();
    assert!(
        ignored.is_empty(),
        "test config has unknown fields: {:?}",
        ignored
    );
    parsed
}

/// The site's own `site.toml`.
#[cfg(test)]
pub const SHIPPED_CONFIG: &str = include_str!("../../site.toml");

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::section::links::Link;

    fn shipped() -> SiteConfig {
        let (config, ignored) = SiteConfig::parse_with_ignored(SHIPPED_CONFIG).unwrap();
        assert!(ignored.is_empty(), "unknown fields: {ignored:?}");
        config
    }

    #[test]
    fn test_from_str_invalid_toml() {
        let result = SiteConfig::from_str("[site\nname = \"My Blog\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_site_config_default() {
        let config = SiteConfig::default();
        assert_eq!(config.config_path, PathBuf::new());
        assert_eq!(config.root, PathBuf::new());
        assert_eq!(config.site.language, "en");
        assert_eq!(config.pagination.size, 10);
        assert!(!config.feed.any_enabled());
    }

    #[test]
    fn test_unknown_fields_detected() {
        let content = "[site]\nname = \"Test\"\n[unknown_section]\nfield = \"value\"";
        let (config, ignored) = SiteConfig::parse_with_ignored(content).unwrap();
        assert_eq!(config.site.name, "Test");
        assert!(ignored.iter().any(|f| f.contains("unknown_section")));
    }

    #[test]
    fn test_no_unknown_fields() {
        let (_, ignored) = SiteConfig::parse_with_ignored("[site]\nname = \"Test\"").unwrap();
        assert!(ignored.is_empty());
    }

    #[test]
    fn test_shipped_config_values() {
        let config = shipped();
        assert_eq!(config.site.author, "Erwin Janssen");
        assert_eq!(config.site.name, "Erwin Janssen");
        assert_eq!(config.site.url, "");
        assert_eq!(config.content.path, PathBuf::from("content"));
        assert_eq!(config.site.timezone, "Europe/Amsterdam");
        assert_eq!(config.site.language, "en");
        assert_eq!(config.article.url, "post/{slug}.html");
        assert!(!config.site.relative_urls);
    }

    #[test]
    fn test_shipped_save_as_mirrors_url() {
        let config = shipped();
        assert_eq!(config.article.url, config.article.save_as());
        assert_eq!(
            config.get("article.save_as"),
            config.get("article.url")
        );
    }

    #[test]
    fn test_get_article_includes_save_as() {
        let article = shipped().get("article").unwrap();
        assert_eq!(
            article,
            serde_json::json!({
                "url": "post/{slug}.html",
                "save_as": "post/{slug}.html",
            })
        );
        assert_eq!(
            shipped().get("").unwrap()["article"]["save_as"],
            "post/{slug}.html"
        );
    }

    #[test]
    fn test_shipped_pagination() {
        assert_eq!(shipped().pagination.size, 10);
    }

    #[test]
    fn test_shipped_social_links() {
        let social = shipped().links.social;
        assert_eq!(
            social,
            [
                Link::new("GitHub", "https://github.com/ErwinJanssen/"),
                Link::new("Mastodon", "https://mastodon.social/@erwinjanssen"),
                Link::new("LinkedIn", "https://www.linkedin.com/in/ejjanssen/"),
            ]
        );
    }

    #[test]
    fn test_shipped_blogroll_order() {
        let labels: Vec<_> = shipped()
            .links
            .blogroll
            .into_iter()
            .map(|l| l.label)
            .collect();
        assert_eq!(
            labels,
            [
                "Pelican",
                "Python.org",
                "Jinja2",
                "You can modify those links in your config file",
            ]
        );
    }

    #[test]
    fn test_shipped_feeds_disabled() {
        let config = shipped();
        assert_eq!(config.feed, FeedConfig::default());
        assert!(config.feed.all_atom.is_none());
        assert!(config.feed.category_atom.is_none());
        assert!(config.feed.translation_atom.is_none());
        assert!(config.feed.author_atom.is_none());
        assert!(config.feed.author_rss.is_none());
    }

    #[test]
    fn test_shipped_plugins_and_pandoc() {
        let config = shipped();
        assert_eq!(config.plugins.enabled, ["pelican.plugins.pandoc_reader"]);
        assert_eq!(config.pandoc.args, ["--base-header-level=2"]);
    }

    #[test]
    fn test_shipped_config_is_valid() {
        let diag = shipped().diagnose();
        assert!(diag.is_empty(), "{diag}");
    }

    #[test]
    fn test_load_is_idempotent() {
        assert_eq!(shipped(), shipped());
        assert_eq!(
            SiteConfig::from_str(SHIPPED_CONFIG).unwrap(),
            SiteConfig::from_str(SHIPPED_CONFIG).unwrap()
        );

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("site.toml");
        fs::write(&path, SHIPPED_CONFIG).unwrap();
        let first = SiteConfig::load_from(&path, true).unwrap();
        let second = SiteConfig::load_from(&path, true).unwrap();
        assert_eq!(first, second);
        assert_eq!(first.config_path, second.config_path);
        assert_eq!(first.root, second.root);
        assert_eq!(first.get(""), second.get(""));
    }

    #[test]
    fn test_get_dotted_keys() {
        let config = shipped();
        assert_eq!(
            config.get("site.author"),
            Some(serde_json::json!("Erwin Janssen"))
        );
        assert_eq!(config.get("pagination.size"), Some(serde_json::json!(10)));
        assert_eq!(
            config.get("links.social.2.label"),
            Some(serde_json::json!("LinkedIn"))
        );
        assert_eq!(config.get("feed.all_atom"), Some(serde_json::Value::Null));
        assert_eq!(config.get("site.nope"), None);
        assert_eq!(config.get("links.social.9"), None);
        assert_eq!(config.get("config_path"), None);
    }

    #[test]
    fn test_validate_collects_all_errors() {
        let config = test_parse_config(
            "[article]\nurl = \"post.html\"\n[pagination]\nsize = 0\n[plugins]\nenabled = [\"a\", \"a\"]",
        );
        let diag = config.diagnose();
        assert_eq!(
            diag.error_fields(),
            ["article.url", "pagination.size", "plugins.enabled"]
        );
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("site.toml");
        fs::write(&path, SHIPPED_CONFIG).unwrap();

        let config = SiteConfig::load_from(&path, true).unwrap();
        assert_eq!(config.config_path, path);
        assert_eq!(config.root, dir.path());
        assert_eq!(config.content_dir(), dir.path().join("content"));
        assert_eq!(config.site.name, "Erwin Janssen");
    }

    #[test]
    fn test_load_from_strict_rejects_unknown() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("site.toml");
        fs::write(&path, "[site]\nname = \"x\"\nsitename = \"typo\"").unwrap();

        assert!(SiteConfig::load_from(&path, true).is_err());
        let config = SiteConfig::load_from(&path, false).unwrap();
        assert_eq!(config.site.name, "x");
    }

    #[test]
    fn test_load_missing_config_is_not_found() {
        use clap::Parser;

        let dir = tempfile::tempdir().unwrap();
        let cli = Cli::try_parse_from(["sitecfg", "check", "-C", "no-such-sitecfg-config.toml"])
            .unwrap();
        let err = SiteConfig::load_in(dir.path(), &cli).unwrap_err();

        assert!(matches!(
            err.downcast_ref::<ConfigError>(),
            Some(ConfigError::NotFound(path)) if path == Path::new("no-such-sitecfg-config.toml")
        ));
        let message = err.to_string();
        assert!(!message.contains("validation"), "{message}");
        assert!(message.contains("sitecfg init"), "{message}");
    }

    #[test]
    fn test_load_init_is_rooted_at_name() {
        use clap::Parser;

        let dir = tempfile::tempdir().unwrap();
        let cli = Cli::try_parse_from(["sitecfg", "init", "blog"]).unwrap();
        let config = SiteConfig::load_in(dir.path(), &cli).unwrap();
        assert_eq!(config.root, dir.path().join("blog"));
        assert_eq!(config.config_path, dir.path().join("blog/site.toml"));
    }

    #[test]
    fn test_load_from_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = SiteConfig::load_from(&dir.path().join("site.toml"), false).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ConfigError>(),
            Some(ConfigError::Io(..))
        ));
    }
}
