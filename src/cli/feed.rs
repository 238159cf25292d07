//! `sitecfg feed`: resolve feed output paths.

use crate::config::SiteConfig;
use crate::log;
use crate::utils::slug::slugify;

/// Which per-item feeds to resolve besides the all-content feed.
#[derive(Debug, Clone, Copy, Default)]
pub struct FeedQuery<'a> {
    pub category: Option<&'a str>,
    pub author: Option<&'a str>,
    pub lang: Option<&'a str>,
}

/// Enabled feed paths as `(key, path)`, in `[feed]` declaration order.
///
/// Category and author names are slugified; the language is used as written.
pub fn feed_paths(config: &SiteConfig, query: FeedQuery<'_>) -> Vec<(&'static str, String)> {
    let feed = &config.feed;
    let mut paths = Vec::new();

    if let Some(all) = feed.all_feed() {
        paths.push(("all_atom", all.to_string()));
    }
    if let Some(path) = query.category.and_then(|name| feed.category_feed(&slugify(name))) {
        paths.push(("category_atom", path));
    }
    if let Some(path) = query.lang.and_then(|lang| feed.translation_feed(lang)) {
        paths.push(("translation_atom", path));
    }
    if let Some(name) = query.author {
        let (atom, rss) = feed.author_feed(&slugify(name));
        paths.extend(atom.map(|path| ("author_atom", path)));
        paths.extend(rss.map(|path| ("author_rss", path)));
    }
    paths
}

pub fn show_feeds(config: &SiteConfig, query: FeedQuery<'_>) {
    let paths = feed_paths(config, query);
    if paths.is_empty() {
        log!("feed"; "no matching feeds are enabled");
    }
    for (key, path) in paths {
        log!("feed"; "{}: {}", key, path);
    }
}
