//! Parsing and validation of `bzlq.toml` configuration files.
//!
//! The file says how to invoke Bazel and how strictly to decode its output.
//! Every section is optional.

#![warn(missing_docs)]

pub mod error;
pub mod loader;
pub mod types;

pub use error::ConfigError;
pub use loader::{find_config, load_config, load_config_file, load_config_from_str, CONFIG_FILE_NAME};
pub use types::*;
