//! Rendering of decoded targets and action graphs.

use std::collections::BTreeMap;
use std::io::Write;

use bzlq_model::{ActionGraph, Target, TargetKind};

use crate::error::CliError;
use crate::ReportFormat;

/// Writes `targets` as a per-kind summary or as JSON.
pub fn write_targets(
    out: &mut impl Write,
    targets: &[Target],
    format: ReportFormat,
) -> Result<(), CliError> {
    match format {
        ReportFormat::Summary => {
            let mut counts: BTreeMap<TargetKind, usize> = BTreeMap::new();
            for target in targets {
                *counts.entry(target.kind()).or_insert(0) += 1;
            }
            for (kind, count) in &counts {
                writeln!(out, "{:<20} {count}", kind.as_str())?;
            }
            writeln!(out, "{} targets", targets.len())?;
        }
        ReportFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, targets)?;
            writeln!(out)?;
        }
    }
    Ok(())
}

/// Writes `graph` as a per-mnemonic summary or as JSON.
pub fn write_action_graph(
    out: &mut impl Write,
    graph: &ActionGraph,
    format: ReportFormat,
) -> Result<(), CliError> {
    match format {
        ReportFormat::Summary => {
            for (mnemonic, count) in graph.mnemonic_counts() {
                writeln!(out, "{mnemonic:<20} {count}")?;
            }
            writeln!(
                out,
                "{} actions, {} artifacts, {} dep-sets",
                graph.actions.len(),
                graph.artifacts.len(),
                graph.dep_sets.len()
            )?;
            writeln!(out, "fingerprint {}", graph.fingerprint)?;
        }
        ReportFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, graph)?;
            writeln!(out)?;
        }
    }
    Ok(())
}
