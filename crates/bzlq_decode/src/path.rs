//! Path-fragment resolution.
//!
//! `aquery` interns paths as a forest of fragments: each fragment holds one
//! segment and the ID of its parent, with `0` marking a root. A full path is
//! the root-to-leaf join of the labels with `/`.

use bzlq_model::{ArenaId, PathFragmentId, WireTable};
use bzlq_proto::analysis::PathFragment;

use crate::error::{DecodeError, DecodeResult, EntityKind, ReferenceFault};

/// Parent ID that marks a root fragment.
const ROOT_PARENT: u32 = 0;

/// Resolves fragment IDs to full paths, memoizing every path it builds.
///
/// Fragments may reference parents defined later in the stream, so the whole
/// table is indexed before the first lookup. Walks are iterative, so chain
/// depth is bounded only by memory.
pub struct PathResolver<'a> {
    fragments: WireTable<PathFragmentId, &'a PathFragment>,
    resolved: Vec<Option<String>>,
}

impl<'a> PathResolver<'a> {
    /// Indexes `fragments`, rejecting duplicate IDs.
    pub fn new(fragments: &'a [PathFragment]) -> DecodeResult<Self> {
        let mut table = WireTable::with_capacity(fragments.len());
        for fragment in fragments {
            table
                .insert(fragment.id, fragment)
                .map_err(|dup| DecodeError::DuplicateId {
                    entity: EntityKind::PathFragment,
                    id: dup.0,
                })?;
        }
        Ok(Self {
            resolved: vec![None; table.len()],
            fragments: table,
        })
    }

    /// Returns the number of indexed fragments.
    pub fn len(&self) -> usize {
        self.fragments.len()
    }

    /// Returns `true` if no fragments were indexed.
    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }

    /// Resolves `wire_id` to its full path.
    ///
    /// `referrer` names the record asking, for error messages.
    pub fn resolve(
        &mut self,
        wire_id: u32,
        referrer: impl FnOnce() -> String,
    ) -> DecodeResult<&str> {
        let start = self.slot(wire_id, referrer)?;
        if self.resolved[start.as_raw() as usize].is_none() {
            self.fill(start)?;
        }
        Ok(self.resolved[start.as_raw() as usize]
            .as_deref()
            .unwrap_or_default())
    }

    fn slot(&self, wire_id: u32, referrer: impl FnOnce() -> String) -> DecodeResult<PathFragmentId> {
        self.fragments
            .id_of(wire_id)
            .ok_or_else(|| DecodeError::MalformedReference {
                entity: EntityKind::PathFragment,
                id: wire_id,
                referrer: referrer(),
                fault: ReferenceFault::Undefined,
            })
    }

    /// Walks up from `start` until a root or an already resolved ancestor,
    /// then builds the paths of the walked chain top-down.
    fn fill(&mut self, start: PathFragmentId) -> DecodeResult<()> {
        let mut chain = vec![start];
        let mut prefix: Option<String> = None;
        let mut current = start;
        loop {
            let fragment = self.fragments.arena()[current];
            if fragment.parent_id == ROOT_PARENT {
                break;
            }
            let parent = self.slot(fragment.parent_id, || format!("path fragment {}", fragment.id))?;
            if let Some(path) = &self.resolved[parent.as_raw() as usize] {
                prefix = Some(path.clone());
                break;
            }
            // A chain longer than the table must revisit a fragment.
            if chain.len() >= self.fragments.len() {
                return Err(DecodeError::ReferenceCycle {
                    entity: EntityKind::PathFragment,
                    id: self.fragments.arena()[start].id,
                });
            }
            chain.push(parent);
            current = parent;
        }

        for slot in chain.into_iter().rev() {
            let label = &self.fragments.arena()[slot].label;
            let path = match prefix.take() {
                Some(mut parent) => {
                    parent.push('/');
                    parent.push_str(label);
                    parent
                }
                None => label.clone(),
            };
            self.resolved[slot.as_raw() as usize] = Some(path.clone());
            prefix = Some(path);
        }
        Ok(())
    }
}
