//! `bzlq aquery`: decodes the action graph of `bazel aquery --output=proto`.

use bzlq_decode::decode_action_graph_with;

use crate::error::CliError;
use crate::pipeline::{read_input, resolve_config, workspace_dir};
use crate::report::write_action_graph;
use crate::runner::QueryCommand;
use crate::{AqueryArgs, GlobalArgs};

/// Runs the `bzlq aquery` command.
pub fn run(args: &AqueryArgs, global: &GlobalArgs) -> Result<i32, CliError> {
    let workspace = workspace_dir(&args.source)?;
    let config = resolve_config(global, &workspace)?;
    let options = config.decode.to_options();

    let bytes = read_input(&args.source, &config, &workspace, QueryCommand::Aquery, false)?;
    let graph = decode_action_graph_with(&bytes, &options)?;

    if !global.quiet {
        eprintln!(
            "    Decoded {} actions over {} artifacts",
            graph.actions.len(),
            graph.artifacts.len()
        );
    }
    write_action_graph(&mut std::io::stdout().lock(), &graph, args.format)?;
    Ok(0)
}
