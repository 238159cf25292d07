//! sitecfg - typed site configuration for a static blog.

mod cli;
mod config;
mod logger;
mod utils;

use anyhow::Result;
use clap::{ColorChoice, Parser};
use cli::{Cli, Commands, feed::FeedQuery, show::Format};
use config::{SiteConfig, cfg, init_config};

fn main() {
    if let Err(err) = run() {
        log!("error"; "{:#}", err);
        if let Some(config) = cfg() {
            debug!("config"; "while using {}", config.config_path.display());
        }
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }
    logger::set_verbose(cli.verbose);

    let config = init_config(SiteConfig::load(&cli)?)?;

    match &cli.command {
        Commands::Init { dry, .. } => cli::init::new_site(&config, *dry),
        Commands::Check => cli::check::check_site(&config),
        Commands::Show { json, pretty } => {
            cli::show::show_config(&config, Format::from_flags(*json, *pretty))
        }
        Commands::Get { key } => cli::show::get_value(&config, key),
        Commands::Article { title, slug } => cli::article::show_article(&config, title, *slug),
        Commands::Feed {
            category,
            author,
            lang,
        } => {
            let query = FeedQuery {
                category: category.as_deref(),
                author: author.as_deref(),
                lang: lang.as_deref(),
            };
            cli::feed::show_feeds(&config, query);
            Ok(())
        }
    }
}
