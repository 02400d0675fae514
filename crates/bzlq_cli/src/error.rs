//! Errors surfaced by the `bzlq` commands.

use std::path::PathBuf;

use bzlq_config::ConfigError;
use bzlq_decode::DecodeError;

use crate::runner::RunnerError;

/// Any failure of a `bzlq` command.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// The configuration could not be loaded.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Bazel could not be run or failed.
    #[error(transparent)]
    Runner(#[from] RunnerError),

    /// The protobuf output could not be decoded.
    #[error("failed to decode Bazel output: {0}")]
    Decode(#[from] DecodeError),

    /// A captured input file could not be read.
    #[error("failed to read {path}: {source}")]
    Input {
        /// The file that could not be read.
        path: PathBuf,
        /// The underlying error.
        source: std::io::Error,
    },

    /// Neither a query expression nor `--input` was given.
    #[error("a query expression or --input is required")]
    MissingExpression,

    /// The report could not be written.
    #[error("failed to write report: {0}")]
    Output(#[from] std::io::Error),

    /// The decoded model could not be serialized.
    #[error("failed to serialize report: {0}")]
    Json(#[from] serde_json::Error),
}
