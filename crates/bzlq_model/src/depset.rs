//! The dep-set DAG.
//!
//! A [`DepSetOfFiles`] is an immutable node holding shared references to its
//! nested dep-sets and to its direct artifacts. Decoding builds each wire
//! dep-set exactly once, so two actions naming the same dep-set hold the same
//! allocation.

use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;

use bzlq_common::{ContentHash, ContentHasher};
use serde::ser::{SerializeSeq, Serializer};
use serde::Serialize;

use crate::artifact::Artifact;

/// A node of the dep-set DAG.
///
/// Dropping and `Debug` formatting stay shallow, so chains of any depth are
/// safe to release and print.
#[derive(Serialize)]
pub struct DepSetOfFiles {
    /// Structural hash of the node: equal for equal sub-DAGs, even across
    /// independent decodes.
    pub fingerprint: ContentHash,
    /// Nested dep-sets, in wire order.
    #[serde(serialize_with = "serialize_refs")]
    pub transitive: Vec<Arc<DepSetOfFiles>>,
    /// Direct member artifacts, in wire order.
    pub direct: Vec<Arc<Artifact>>,
}

impl DepSetOfFiles {
    /// Creates a node and computes its fingerprint from its children.
    pub fn new(transitive: Vec<Arc<DepSetOfFiles>>, direct: Vec<Arc<Artifact>>) -> Self {
        let mut hasher = ContentHasher::new();
        hasher.update(&(transitive.len() as u64).to_le_bytes());
        for child in &transitive {
            hasher.update_hash(&child.fingerprint);
        }
        for artifact in &direct {
            hasher
                .update(artifact.path.as_bytes())
                .update(&[u8::from(artifact.is_tree_artifact)]);
        }
        Self {
            fingerprint: hasher.finish(),
            transitive,
            direct,
        }
    }

    /// Returns the de-duplicated artifacts reachable from this node, in
    /// post-order (nested dep-sets before direct members).
    pub fn artifacts(&self) -> Vec<Arc<Artifact>> {
        expand(std::iter::once(self))
    }
}

impl Drop for DepSetOfFiles {
    fn drop(&mut self) {
        // Take over the children of every node this drop releases last, so the
        // nested drops see empty `transitive` lists.
        let mut pending = std::mem::take(&mut self.transitive);
        while let Some(child) = pending.pop() {
            if let Some(mut inner) = Arc::into_inner(child) {
                pending.append(&mut inner.transitive);
            }
        }
    }
}

impl fmt::Debug for DepSetOfFiles {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let transitive: Vec<String> = self
            .transitive
            .iter()
            .map(|child| child.fingerprint.to_string())
            .collect();
        f.debug_struct("DepSetOfFiles")
            .field("fingerprint", &self.fingerprint)
            .field("transitive", &transitive)
            .field("direct", &self.direct)
            .finish()
    }
}

/// Flattens several dep-sets into their de-duplicated artifact list.
///
/// Traversal is an iterative post-order walk; every node is visited once no
/// matter how many parents share it, and each artifact appears once at its
/// first position.
pub fn expand<'a, I>(roots: I) -> Vec<Arc<Artifact>>
where
    I: IntoIterator<Item = &'a DepSetOfFiles>,
{
    let mut visited: HashSet<*const DepSetOfFiles> = HashSet::new();
    let mut seen: HashSet<*const Artifact> = HashSet::new();
    let mut out = Vec::new();
    let mut stack: Vec<(&'a DepSetOfFiles, usize)> = Vec::new();

    for root in roots {
        if !visited.insert(root as *const DepSetOfFiles) {
            continue;
        }
        stack.push((root, 0));
        while let Some(top) = stack.last_mut() {
            let node = top.0;
            if let Some(child) = node.transitive.get(top.1) {
                top.1 += 1;
                if visited.insert(Arc::as_ptr(child)) {
                    stack.push((child.as_ref(), 0));
                }
            } else {
                for artifact in &node.direct {
                    if seen.insert(Arc::as_ptr(artifact)) {
                        out.push(Arc::clone(artifact));
                    }
                }
                stack.pop();
            }
        }
    }
    out
}

/// Serializes shared dep-set references as their fingerprints.
///
/// Nested dep-sets are shared, so serializing them inline would repeat a
/// sub-DAG once per parent.
pub fn serialize_refs<S: Serializer>(
    refs: &[Arc<DepSetOfFiles>],
    serializer: S,
) -> Result<S::Ok, S::Error> {
    let mut seq = serializer.serialize_seq(Some(refs.len()))?;
    for dep_set in refs {
        seq.serialize_element(&dep_set.fingerprint.to_string())?;
    }
    seq.end()
}

/// [`serialize_refs`] for fields that may be absent.
pub fn serialize_optional_refs<S: Serializer>(
    refs: &Option<Vec<Arc<DepSetOfFiles>>>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    match refs {
        Some(refs) => serialize_refs(refs, serializer),
        None => serializer.serialize_none(),
    }
}
