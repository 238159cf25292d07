//! Configuration utility types.
//!
//! | Module   | Purpose                                 |
//! |----------|-----------------------------------------|
//! | `error`  | Error and diagnostics types             |
//! | `field`  | Dotted field paths for diagnostics      |
//! | `handle` | Process-wide set-once config handle     |

mod error;
mod field;
pub mod handle;

pub use error::{ConfigDiagnostics, ConfigError};
pub use field::FieldPath;
pub use handle::{cfg, init_config};
