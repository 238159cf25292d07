//! `sitecfg article`: resolve an article's public URL and save path.

use crate::config::SiteConfig;
use crate::utils::slug::{is_slug, slugify};
use crate::{debug, log};
use anyhow::{Result, bail};

/// Where an article ends up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleLocation {
    pub slug: String,
    pub url: String,
    pub save_as: String,
}

/// Resolve `title` (or a verbatim slug) against the article patterns.
///
/// The URL is absolute when `site.url` is set and `relative_urls` is off.
pub fn locate(config: &SiteConfig, title: &str, verbatim: bool) -> Result<ArticleLocation> {
    let slug = if verbatim {
        title.to_string()
    } else {
        slugify(title)
    };
    if slug.is_empty() {
        bail!("'{title}' produces an empty slug");
    }
    if verbatim && !is_slug(&slug) {
        debug!("article"; "'{}' is not in canonical slug form", slug);
    }

    let path = config.article.url_for(&slug);
    let url = match config.site.base_url() {
        Some(base) if !config.site.relative_urls => {
            format!("{base}/{}", path.trim_start_matches('/'))
        }
        _ => path,
    };

    Ok(ArticleLocation {
        save_as: config.article.save_path_for(&slug),
        slug,
        url,
    })
}

pub fn show_article(config: &SiteConfig, title: &str, verbatim: bool) -> Result<()> {
    let location = locate(config, title, verbatim)?;
    log!("article"; "slug: {}", location.slug);
    log!("article"; "url: {}", location.url);
    log!("article"; "save as: {}", location.save_as);
    Ok(())
}
