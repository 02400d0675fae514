//! Build artifacts referenced by dep-sets and actions.

use serde::Serialize;

/// A file (or tree of files) produced or consumed by an action.
///
/// Artifacts are owned by the decoder's artifact table and shared by
/// reference with every dep-set and action that mentions them.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Artifact {
    /// Exec path, resolved from the interned path-fragment table.
    pub path: String,
    /// Whether this is a tree artifact (a directory with opaque contents).
    pub is_tree_artifact: bool,
}

impl Artifact {
    /// Creates a file artifact.
    pub fn file(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            is_tree_artifact: false,
        }
    }

    /// Creates a tree artifact.
    pub fn tree(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            is_tree_artifact: true,
        }
    }

    /// Returns `true` if the artifact lives under `bazel-out/`.
    pub fn is_generated(&self) -> bool {
        self.path.starts_with("bazel-out/")
    }
}
