//! Shared helpers for the `query`, `aquery` and `cquery` commands:
//! workspace and configuration resolution, and obtaining the raw bytes.

use std::path::{Path, PathBuf};

use bzlq_config::BzlqConfig;

use crate::error::CliError;
use crate::runner::{Invocation, QueryCommand};
use crate::{GlobalArgs, InputArgs};

/// Returns the absolute workspace directory, defaulting to the current one.
pub fn workspace_dir(source: &InputArgs) -> Result<PathBuf, CliError> {
    let cwd = std::env::current_dir().map_err(|source| CliError::Input {
        path: PathBuf::from("."),
        source,
    })?;
    Ok(match &source.workspace {
        Some(dir) => cwd.join(dir),
        None => cwd,
    })
}

/// Loads the configuration named by `--config`, else the nearest `bzlq.toml`
/// at or above `workspace`, else the defaults.
pub fn resolve_config(global: &GlobalArgs, workspace: &Path) -> Result<BzlqConfig, CliError> {
    if let Some(path) = &global.config {
        return Ok(bzlq_config::load_config_file(Path::new(path))?);
    }
    match bzlq_config::find_config(workspace) {
        Some(path) => {
            tracing::debug!(path = %path.display(), "using configuration");
            Ok(bzlq_config::load_config_file(&path)?)
        }
        None => {
            tracing::debug!(workspace = %workspace.display(), "no configuration found, using defaults");
            Ok(BzlqConfig::default())
        }
    }
}

/// Returns the protobuf bytes to decode: the `--input` file when given,
/// otherwise the output of running Bazel in `workspace`.
pub fn read_input(
    source: &InputArgs,
    config: &BzlqConfig,
    workspace: &Path,
    command: QueryCommand,
    streamed: bool,
) -> Result<Vec<u8>, CliError> {
    if let Some(path) = &source.input {
        tracing::debug!(path = %path.display(), "reading captured output");
        return std::fs::read(path).map_err(|source| CliError::Input {
            path: path.clone(),
            source,
        });
    }
    let expr = source.expr.as_deref().ok_or(CliError::MissingExpression)?;
    let invocation = Invocation {
        bazel: &config.bazel,
        command,
        expr,
        streamed,
    };
    Ok(invocation.run(workspace)?)
}
