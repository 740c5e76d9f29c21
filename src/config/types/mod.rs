//! Configuration utility types.
//!
//! | Module   | Purpose                                      |
//! |----------|----------------------------------------------|
//! | `error`  | Configuration errors and field diagnostics   |
//! | `handle` | Global configuration handle (thread-safe)    |

mod error;
pub mod handle;

pub use error::{ConfigDiagnostics, ConfigError, FieldPath};
pub use handle::{cfg, init_config, reload_config};
