//! Command-line interface module.

mod args;
pub mod article;
pub mod check;
pub mod feed;
pub mod init;
pub mod show;

pub use args::{Cli, Commands};
