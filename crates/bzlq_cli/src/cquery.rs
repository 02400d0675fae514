//! `bzlq cquery`: reports that configured-target output cannot be decoded.

use bzlq_decode::parse_cquery;

use crate::error::CliError;
use crate::pipeline::{read_input, resolve_config, workspace_dir};
use crate::report::write_targets;
use crate::runner::QueryCommand;
use crate::{CqueryArgs, GlobalArgs};

/// Runs the `bzlq cquery` command.
pub fn run(args: &CqueryArgs, global: &GlobalArgs) -> Result<i32, CliError> {
    let workspace = workspace_dir(&args.source)?;
    let config = resolve_config(global, &workspace)?;

    let bytes = read_input(&args.source, &config, &workspace, QueryCommand::Cquery, false)?;
    let targets = parse_cquery(&bytes)?;
    write_targets(&mut std::io::stdout().lock(), &targets, args.format)?;
    Ok(0)
}
