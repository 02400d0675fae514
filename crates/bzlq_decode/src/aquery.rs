//! `aquery` decoding: the full path → artifact → dep-set → action pipeline.

use bzlq_common::ContentHash;
use bzlq_model::{Action, ActionGraph};
use bzlq_proto::analysis::ActionGraphContainer;
use prost::Message;

use crate::action::{ActionContext, ActionTables};
use crate::artifact::build_artifact_table;
use crate::depset::build_dep_set_graph;
use crate::error::DecodeResult;
use crate::options::DecodeOptions;
use crate::path::PathResolver;

/// Decodes `bazel aquery --output=proto` into its actions, in wire order.
pub fn parse_aquery(bytes: &[u8]) -> DecodeResult<Vec<Action>> {
    parse_aquery_with(bytes, &DecodeOptions::default())
}

/// [`parse_aquery`] with explicit options.
pub fn parse_aquery_with(bytes: &[u8], options: &DecodeOptions) -> DecodeResult<Vec<Action>> {
    decode_action_graph_with(bytes, options).map(ActionGraph::into_actions)
}

/// Decodes `bazel aquery --output=proto` into the full [`ActionGraph`],
/// keeping the artifact and dep-set tables alongside the actions.
pub fn decode_action_graph(bytes: &[u8]) -> DecodeResult<ActionGraph> {
    decode_action_graph_with(bytes, &DecodeOptions::default())
}

/// [`decode_action_graph`] with explicit options.
pub fn decode_action_graph_with(bytes: &[u8], options: &DecodeOptions) -> DecodeResult<ActionGraph> {
    let container = ActionGraphContainer::decode(bytes)?;
    decode_container(&container, ContentHash::from_bytes(bytes), options)
}

/// Decodes an already parsed container. `fingerprint` identifies the buffer
/// it came from.
pub fn decode_container(
    container: &ActionGraphContainer,
    fingerprint: ContentHash,
    options: &DecodeOptions,
) -> DecodeResult<ActionGraph> {
    let mut paths = PathResolver::new(&container.path_fragments)?;
    let artifacts = build_artifact_table(&container.artifacts, &mut paths)?;
    tracing::debug!(
        path_fragments = paths.len(),
        artifacts = artifacts.len(),
        "resolved artifact paths"
    );

    let dep_sets = build_dep_set_graph(&container.dep_set_of_files, &artifacts)?;
    tracing::debug!(dep_sets = dep_sets.len(), "built dep-set graph");

    let tables = ActionTables::build(container)?;
    let context = ActionContext {
        tables: &tables,
        artifacts: &artifacts,
        dep_sets: &dep_sets,
        options,
    };
    let actions = container
        .actions
        .iter()
        .enumerate()
        .map(|(index, action)| context.decode(index, action))
        .collect::<DecodeResult<Vec<_>>>()?;
    tracing::debug!(actions = actions.len(), %fingerprint, "decoded action graph");

    Ok(ActionGraph {
        fingerprint,
        artifacts,
        dep_sets,
        actions,
    })
}
