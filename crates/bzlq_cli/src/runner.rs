//! Runs Bazel and captures its protobuf output.

use std::path::Path;
use std::process::{Command, ExitStatus};

use bzlq_config::BazelConfig;

/// Errors from running Bazel.
#[derive(Debug, thiserror::Error)]
pub enum RunnerError {
    /// The executable could not be started.
    #[error("failed to run {binary}: {source}")]
    Spawn {
        /// The executable that was run.
        binary: String,
        /// The underlying error.
        source: std::io::Error,
    },

    /// Bazel exited unsuccessfully.
    #[error("`{command}` failed ({status}): {stderr}")]
    Failed {
        /// The command line that was run.
        command: String,
        /// Bazel's exit status.
        status: ExitStatus,
        /// Bazel's standard error, trimmed.
        stderr: String,
    },
}

/// The Bazel command producing protobuf output.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QueryCommand {
    /// `bazel query`.
    Query,
    /// `bazel cquery`.
    Cquery,
    /// `bazel aquery`.
    Aquery,
}

impl QueryCommand {
    /// Returns the Bazel command name.
    pub fn as_str(self) -> &'static str {
        match self {
            QueryCommand::Query => "query",
            QueryCommand::Cquery => "cquery",
            QueryCommand::Aquery => "aquery",
        }
    }
}

/// A single Bazel invocation.
pub struct Invocation<'a> {
    /// How to invoke Bazel.
    pub bazel: &'a BazelConfig,
    /// Which query command to run.
    pub command: QueryCommand,
    /// The query expression.
    pub expr: &'a str,
    /// Whether to request length-delimited output.
    pub streamed: bool,
}

impl Invocation<'_> {
    /// Returns the arguments after the executable:
    /// `<startup_flags> <command> --output=<format> <flags> <expr>`.
    pub fn args(&self) -> Vec<String> {
        let output = if self.streamed {
            "--output=streamed_proto"
        } else {
            "--output=proto"
        };
        let mut args = self.bazel.startup_flags.clone();
        args.push(self.command.as_str().to_string());
        args.push(output.to_string());
        args.extend(self.bazel.flags.iter().cloned());
        args.push(self.expr.to_string());
        args
    }

    /// Runs Bazel in `workspace` and returns its standard output.
    pub fn run(&self, workspace: &Path) -> Result<Vec<u8>, RunnerError> {
        let args = self.args();
        let command_line = format!("{} {}", self.bazel.binary, args.join(" "));
        tracing::debug!(workspace = %workspace.display(), command = %command_line, "running bazel");

        let output = Command::new(&self.bazel.binary)
            .args(&args)
            .current_dir(workspace)
            .output()
            .map_err(|source| RunnerError::Spawn {
                binary: self.bazel.binary.clone(),
                source,
            })?;

        if !output.status.success() {
            return Err(RunnerError::Failed {
                command: command_line,
                status: output.status,
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        tracing::debug!(bytes = output.stdout.len(), "captured bazel output");
        Ok(output.stdout)
    }
}
