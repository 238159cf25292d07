//! `sitecfg init`: write a commented `site.toml`.

use anyhow::{Context, Result, bail};
use std::{fs, path::Path};

use crate::config::{
    ArticleConfig, ContentConfig, FeedConfig, LinksConfig, PaginationConfig, PandocConfig,
    PluginsConfig, SiteConfig, SiteInfoConfig,
};
use crate::log;

/// Generate site.toml content with comments
pub fn generate_config_template() -> String {
    let sections = [
        SiteInfoConfig::template_with_header(),
        ContentConfig::template_with_header(),
        ArticleConfig::template_with_header(),
        FeedConfig::template_with_header(),
        PaginationConfig::template_with_header(),
        LinksConfig::template_with_header(),
        PluginsConfig::template_with_header(),
        PandocConfig::template_with_header(),
    ];

    let mut out = format!(
        "# sitecfg configuration file (v{})\n\n",
        env!("CARGO_PKG_VERSION")
    );
    out.push_str(&sections.join("\n"));
    out
}

/// Create `site.toml` and the content directory under the config's root.
///
/// If `dry_run` is true, only prints the template to stdout.
pub fn new_site(config: &SiteConfig, dry_run: bool) -> Result<()> {
    if dry_run {
        let template = generate_config_template();
        return super::show::emit(&mut std::io::stdout().lock(), template.trim_end());
    }

    write_config(&config.config_path)?;

    let content_dir = config.content_dir();
    fs::create_dir_all(&content_dir)
        .with_context(|| format!("Failed to create '{}'", content_dir.display()))?;

    log!("init"; "wrote {}", config.config_path.display());
    Ok(())
}

/// Write the template to `path`, refusing to overwrite an existing file.
pub fn write_config(path: &Path) -> Result<()> {
    if path.exists() {
        bail!("'{}' already exists", path.display());
    }
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create '{}'", parent.display()))?;
    }
    fs::write(path, generate_config_template())
        .with_context(|| format!("Failed to write config file '{}'", path.display()))?;
    Ok(())
}
