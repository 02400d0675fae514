//! Artifact table construction.

use std::sync::Arc;

use bzlq_model::{Artifact, ArtifactId, WireTable};
use bzlq_proto::analysis;

use crate::error::{DecodeError, DecodeResult, EntityKind};
use crate::path::PathResolver;

/// Builds the artifact table, resolving each artifact's path.
///
/// Every artifact is allocated once; later references clone the [`Arc`].
pub fn build_artifact_table(
    artifacts: &[analysis::Artifact],
    paths: &mut PathResolver<'_>,
) -> DecodeResult<WireTable<ArtifactId, Arc<Artifact>>> {
    let mut table = WireTable::with_capacity(artifacts.len());
    for raw in artifacts {
        let path = paths.resolve(raw.path_fragment_id, || format!("artifact {}", raw.id))?;
        let artifact = Artifact {
            path: path.to_string(),
            is_tree_artifact: raw.is_tree_artifact,
        };
        table
            .insert(raw.id, Arc::new(artifact))
            .map_err(|dup| DecodeError::DuplicateId {
                entity: EntityKind::Artifact,
                id: dup.0,
            })?;
    }
    Ok(table)
}
