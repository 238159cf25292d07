//! `sitecfg check`: report on a loaded configuration.

use crate::config::SiteConfig;
use crate::log;
use anyhow::Result;

/// Print a short summary of a config that passed validation.
pub fn check_site(config: &SiteConfig) -> Result<()> {
    for line in summary(config) {
        log!("check"; "{}", line);
    }
    Ok(())
}

fn summary(config: &SiteConfig) -> Vec<String> {
    let feeds = config.feed.enabled();
    let feeds = if feeds.is_empty() {
        "disabled".to_string()
    } else {
        feeds
            .iter()
            .map(|(key, _)| *key)
            .collect::<Vec<_>>()
            .join(", ")
    };
    let diag = config.diagnose();

    vec![
        format!("{} is valid", config.config_path.display()),
        format!("site: {} by {}", config.site.name, config.site.author),
        format!("content: {}", config.content_dir().display()),
        format!(
            "articles: {} (saved as {})",
            config.article.url,
            config.article.save_as()
        ),
        format!("feeds: {feeds}"),
        format!(
            "links: {} blogroll, {} social",
            config.links.blogroll.len(),
            config.links.social.len()
        ),
        format!("plugins: {}", config.plugins.enabled.join(", ")),
        format!(
            "notes: {} warnings, {} hints",
            diag.warnings().len(),
            diag.hints().len()
        ),
    ]
}
