//! `bzlq query`: decodes the targets of `bazel query --output=proto`.

use bzlq_decode::{parse_query_stream_with, parse_query_with};

use crate::error::CliError;
use crate::pipeline::{read_input, resolve_config, workspace_dir};
use crate::report::write_targets;
use crate::runner::QueryCommand;
use crate::{GlobalArgs, QueryArgs};

/// Runs the `bzlq query` command.
pub fn run(args: &QueryArgs, global: &GlobalArgs) -> Result<i32, CliError> {
    let workspace = workspace_dir(&args.source)?;
    let config = resolve_config(global, &workspace)?;
    let options = config.decode.to_options();

    let bytes = read_input(&args.source, &config, &workspace, QueryCommand::Query, args.streamed)?;
    let targets = if args.streamed {
        parse_query_stream_with(&bytes, &options)?
    } else {
        parse_query_with(&bytes, &options)?
    };

    if !global.quiet {
        eprintln!("    Decoded {} targets", targets.len());
    }
    write_targets(&mut std::io::stdout().lock(), &targets, args.format)?;
    Ok(0)
}
