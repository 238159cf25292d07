//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand};
use std::path::PathBuf;

/// Load, check and inspect a static blog's site configuration
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Config file path (default: site.toml, searched upward from cwd)
    #[arg(short = 'C', long, global = true, default_value = "site.toml", value_hint = clap::ValueHint::FilePath)]
    pub config: PathBuf,

    /// Enable verbose output for debugging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Treat unknown config keys as errors
    #[arg(long, global = true)]
    pub strict: bool,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Write a commented site.toml template
    #[command(visible_alias = "i")]
    Init {
        /// Site directory name/path (relative to current directory)
        #[arg(value_hint = clap::ValueHint::DirPath)]
        name: Option<PathBuf>,

        /// Print the template instead of writing it
        #[arg(short, long)]
        dry: bool,
    },

    /// Load and validate the configuration
    #[command(visible_alias = "c")]
    Check,

    /// Print the loaded configuration
    #[command(visible_alias = "s")]
    Show {
        /// Output JSON instead of TOML
        #[arg(short, long)]
        json: bool,

        /// Pretty-print JSON output
        #[arg(short, long, requires = "json")]
        pretty: bool,
    },

    /// Print a single setting by dotted key (e.g. site.author, links.social)
    #[command(visible_alias = "g")]
    Get {
        /// Dotted key
        key: String,
    },

    /// Show where an article is published and saved
    #[command(visible_alias = "a")]
    Article {
        /// Article title (or slug with --slug)
        title: String,

        /// Use TITLE verbatim as the slug
        #[arg(short, long)]
        slug: bool,
    },

    /// Show the output paths of the enabled feeds
    #[command(visible_alias = "f")]
    Feed {
        /// Category name for the per-category feed
        #[arg(long)]
        category: Option<String>,

        /// Author name for the per-author feeds
        #[arg(long)]
        author: Option<String>,

        /// Language code for the translation feed
        #[arg(long)]
        lang: Option<String>,
    },
}
