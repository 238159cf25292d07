//! `sitecfg show` and `sitecfg get`: print the loaded record.

use crate::config::SiteConfig;
use anyhow::{Context, Result, bail};
use std::io::{self, Write};

/// Output format for `show`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Toml,
    Json,
    PrettyJson,
}

impl Format {
    pub const fn from_flags(json: bool, pretty: bool) -> Self {
        match (json, pretty) {
            (false, _) => Self::Toml,
            (true, false) => Self::Json,
            (true, true) => Self::PrettyJson,
        }
    }
}

pub fn show_config(config: &SiteConfig, format: Format) -> Result<()> {
    let rendered = render(config, format)?;
    emit(&mut io::stdout().lock(), rendered.trim_end())
}

pub fn get_value(config: &SiteConfig, key: &str) -> Result<()> {
    let Some(value) = config.get(key) else {
        bail!("unknown config key '{key}'");
    };
    emit(&mut io::stdout().lock(), &render_value(&value)?)
}

/// Write `text` plus a newline. A reader that hung up (`sitecfg show | head`)
/// ends the output early without an error.
pub(super) fn emit(out: &mut impl Write, text: &str) -> Result<()> {
    match writeln!(out, "{text}").and_then(|()| out.flush()) {
        Err(err) if err.kind() == io::ErrorKind::BrokenPipe => Ok(()),
        result => Ok(result?),
    }
}

fn render(config: &SiteConfig, format: Format) -> Result<String> {
    Ok(match format {
        Format::Toml => toml::to_string(config).context("Failed to serialize config as TOML")?,
        Format::Json => serde_json::to_string(config)?,
        Format::PrettyJson => serde_json::to_string_pretty(config)?,
    })
}

/// Strings print bare so `sitecfg get site.author` is shell-friendly.
fn render_value(value: &serde_json::Value) -> Result<String> {
    Ok(match value {
        serde_json::Value::String(s) => s.clone(),
        serde_json::Value::Null => String::new(),
        other => serde_json::to_string(other)?,
    })
}
