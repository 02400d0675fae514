//! Dep-set graph construction.
//!
//! `aquery` emits dep-sets in dependency order: every nested dep-set is
//! defined before any dep-set that names it. Building in one pass therefore
//! needs no recursion, and a reference to a not-yet-built dep-set is either a
//! forward reference or a dangling one.

use std::sync::Arc;

use bzlq_model::{Artifact, ArtifactId, DepSetId, DepSetOfFiles, WireTable};
use bzlq_proto::analysis;

use crate::error::{DecodeError, DecodeResult, EntityKind, ReferenceFault};

/// Builds every dep-set in wire order, sharing each node among its parents.
pub fn build_dep_set_graph(
    dep_sets: &[analysis::DepSetOfFiles],
    artifacts: &WireTable<ArtifactId, Arc<Artifact>>,
) -> DecodeResult<WireTable<DepSetId, Arc<DepSetOfFiles>>> {
    let mut table: WireTable<DepSetId, Arc<DepSetOfFiles>> = WireTable::with_capacity(dep_sets.len());
    for (index, raw) in dep_sets.iter().enumerate() {
        let transitive = raw
            .transitive_dep_set_ids
            .iter()
            .map(|&id| match table.get(id) {
                Some(dep_set) => Ok(Arc::clone(dep_set)),
                None => Err(DecodeError::MalformedReference {
                    entity: EntityKind::DepSet,
                    id,
                    referrer: format!("dep-set {}", raw.id),
                    fault: classify(&dep_sets[index..], id),
                }),
            })
            .collect::<DecodeResult<Vec<_>>>()?;
        let direct = raw
            .direct_artifact_ids
            .iter()
            .map(|&id| {
                artifacts
                    .get(id)
                    .map(Arc::clone)
                    .ok_or_else(|| DecodeError::MalformedReference {
                        entity: EntityKind::Artifact,
                        id,
                        referrer: format!("dep-set {}", raw.id),
                        fault: ReferenceFault::Undefined,
                    })
            })
            .collect::<DecodeResult<Vec<_>>>()?;

        table
            .insert(raw.id, Arc::new(DepSetOfFiles::new(transitive, direct)))
            .map_err(|dup| DecodeError::DuplicateId {
                entity: EntityKind::DepSet,
                id: dup.0,
            })?;
    }
    Ok(table)
}

/// A missing ID that the rest of the stream (the referrer included) defines
/// is a forward reference.
fn classify(rest: &[analysis::DepSetOfFiles], id: u32) -> ReferenceFault {
    if rest.iter().any(|d| d.id == id) {
        ReferenceFault::Forward
    } else {
        ReferenceFault::Undefined
    }
}
