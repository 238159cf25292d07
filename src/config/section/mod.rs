//! Configuration section definitions.
//!
//! Each module corresponds to a table in `site.toml`:
//!
//! | Module       | TOML Section            | Purpose                           |
//! |--------------|-------------------------|-----------------------------------|
//! | `site`       | `[site]`                | Author, name, URL, locale         |
//! | `content`    | `[content]`             | Source content location           |
//! | `article`    | `[article]`             | Article URL / save pattern        |
//! | `feed`       | `[feed]`                | Feed output paths                 |
//! | `pagination` | `[pagination]`          | Items per listing page            |
//! | `links`      | `[links]`               | Blogroll and social links         |
//! | `plugins`    | `[plugins]`, `[pandoc]` | Generator plugins, pandoc args    |

pub mod article;
mod content;
pub mod feed;
pub mod links;
mod pagination;
mod plugins;
mod site;

pub use article::ArticleConfig;
pub use content::ContentConfig;
pub use feed::FeedConfig;
pub use links::LinksConfig;
pub use pagination::PaginationConfig;
pub use plugins::{PandocConfig, PluginsConfig};
pub use site::SiteInfoConfig;
