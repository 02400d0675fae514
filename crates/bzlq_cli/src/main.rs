//! bzlq: decodes Bazel's protobuf query output into readable summaries.
//!
//! `bzlq query`, `bzlq aquery` and `bzlq cquery` either run Bazel in a
//! workspace or read a previously captured `--output=proto` file, decode it
//! with `bzlq_decode`, and print a summary or the full model as JSON.

#![warn(missing_docs)]

mod aquery;
mod cquery;
mod error;
mod pipeline;
mod query;
mod report;
mod runner;

use std::io::IsTerminal;
use std::path::PathBuf;
use std::process;

use clap::{Args, Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

/// Typed views of `bazel query` and `bazel aquery` output.
#[derive(Parser, Debug)]
#[command(name = "bzlq", version, about = "Decode Bazel protobuf query output")]
pub struct Cli {
    /// Suppress all output except errors.
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Enable verbose (debug-level) logging.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Control colored log output.
    #[arg(long, global = true, value_enum, default_value_t = ColorChoice::Auto)]
    pub color: ColorChoice,

    /// Path to a `bzlq.toml` file to use instead of the discovered one.
    #[arg(long, global = true)]
    pub config: Option<String>,

    /// The subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Decode the targets of `bazel query --output=proto`.
    Query(QueryArgs),
    /// Decode the action graph of `bazel aquery --output=proto`.
    Aquery(AqueryArgs),
    /// Decode `bazel cquery --output=proto` (not supported yet).
    Cquery(CqueryArgs),
}

/// Where the protobuf bytes come from.
#[derive(Args, Debug)]
pub struct InputArgs {
    /// Query expression passed to Bazel.
    #[arg(required_unless_present = "input")]
    pub expr: Option<String>,

    /// Workspace directory to run Bazel in (default: current directory).
    #[arg(short, long, conflicts_with = "input")]
    pub workspace: Option<PathBuf>,

    /// Read previously captured output instead of running Bazel.
    #[arg(short, long)]
    pub input: Option<PathBuf>,
}

/// Arguments for the `bzlq query` subcommand.
#[derive(Parser, Debug)]
pub struct QueryArgs {
    /// Input selection.
    #[command(flatten)]
    pub source: InputArgs,

    /// Use length-delimited `--output=streamed_proto` framing.
    #[arg(long)]
    pub streamed: bool,

    /// Output format.
    #[arg(short, long, value_enum, default_value_t = ReportFormat::Summary)]
    pub format: ReportFormat,
}

/// Arguments for the `bzlq aquery` subcommand.
#[derive(Parser, Debug)]
pub struct AqueryArgs {
    /// Input selection.
    #[command(flatten)]
    pub source: InputArgs,

    /// Output format.
    #[arg(short, long, value_enum, default_value_t = ReportFormat::Summary)]
    pub format: ReportFormat,
}

/// Arguments for the `bzlq cquery` subcommand.
#[derive(Parser, Debug)]
pub struct CqueryArgs {
    /// Input selection.
    #[command(flatten)]
    pub source: InputArgs,

    /// Output format.
    #[arg(short, long, value_enum, default_value_t = ReportFormat::Summary)]
    pub format: ReportFormat,
}

/// Controls whether colored output is produced.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ColorChoice {
    /// Color when stderr is a terminal.
    Auto,
    /// Always produce colored output.
    Always,
    /// Never produce colored output.
    Never,
}

/// Report output format.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    /// Counts per target kind or per mnemonic.
    Summary,
    /// The decoded model as JSON.
    Json,
}

/// Global settings derived from CLI flags.
pub struct GlobalArgs {
    /// Whether to suppress non-error output.
    pub quiet: bool,
    /// Whether to print debug information.
    pub verbose: bool,
    /// Whether to use colored output.
    pub color: bool,
    /// Optional path to a `bzlq.toml` file.
    pub config: Option<String>,
}

impl GlobalArgs {
    /// The default log filter for these flags; `RUST_LOG` takes precedence.
    fn log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else if self.verbose {
            "debug"
        } else {
            "warn"
        }
    }
}

fn init_tracing(global: &GlobalArgs) {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(global.log_level())),
        )
        .with_ansi(global.color)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();

    let color = match cli.color {
        ColorChoice::Auto => std::io::stderr().is_terminal(),
        ColorChoice::Always => true,
        ColorChoice::Never => false,
    };

    let global = GlobalArgs {
        quiet: cli.quiet,
        verbose: cli.verbose,
        color,
        config: cli.config,
    };
    init_tracing(&global);

    let result = match cli.command {
        Command::Query(ref args) => query::run(args, &global),
        Command::Aquery(ref args) => aquery::run(args, &global),
        Command::Cquery(ref args) => cquery::run(args, &global),
    };

    match result {
        Ok(code) => process::exit(code),
        Err(e) => {
            eprintln!("error: {e}");
            process::exit(1);
        }
    }
}
