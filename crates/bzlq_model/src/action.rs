//! Actions of the `aquery` action graph.

use std::collections::BTreeMap;
use std::sync::Arc;

use bzlq_common::{ContentHash, Label};
use serde::Serialize;

use crate::arena::WireTable;
use crate::artifact::Artifact;
use crate::depset::{self, DepSetOfFiles};
use crate::ids::{ArtifactId, DepSetId};

/// The target that owns an action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActionTarget {
    /// Target label.
    pub label: Label,
    /// Rule class name, resolved from the rule-class table.
    pub rule_class: String,
}

/// An aspect applied to the owning target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AspectDescriptor {
    /// Aspect name, e.g. `//tools:lint.bzl%lint_aspect`.
    pub name: String,
    /// Aspect parameters.
    pub parameters: BTreeMap<String, String>,
}

/// A build configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Configuration {
    /// Output directory mnemonic, e.g. `k8-fastbuild`.
    pub mnemonic: String,
    /// Target platform name.
    pub platform_name: String,
    /// Configuration checksum.
    pub checksum: String,
    /// Whether this is an exec (tool) configuration.
    pub is_tool: bool,
}

/// A parameter file written for an action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParamFile {
    /// Exec path of the file.
    pub exec_path: String,
    /// Arguments written into it.
    pub arguments: Vec<String>,
}

/// A fully resolved build action.
///
/// Every reference the wire expresses as an ID is a shared pointer here.
#[derive(Debug, Clone, Serialize)]
pub struct Action {
    /// Owning target.
    pub target: Arc<ActionTarget>,
    /// Aspects that created the action.
    pub aspect_descriptors: Vec<Arc<AspectDescriptor>>,
    /// Action cache key.
    pub action_key: String,
    /// Mnemonic, e.g. `CppCompile`.
    pub mnemonic: String,
    /// Configuration the action runs in.
    pub configuration: Arc<Configuration>,
    /// Command line.
    pub arguments: Vec<String>,
    /// Environment of the command.
    pub environment_variables: BTreeMap<String, String>,
    /// Input dep-sets.
    #[serde(serialize_with = "depset::serialize_refs")]
    pub input_dep_sets: Vec<Arc<DepSetOfFiles>>,
    /// Scheduling-only dep-sets; `None` when the producer's schema predates
    /// the field.
    #[serde(serialize_with = "depset::serialize_optional_refs")]
    pub scheduling_dep_dep_sets: Option<Vec<Arc<DepSetOfFiles>>>,
    /// Output artifacts.
    pub outputs: Vec<Arc<Artifact>>,
    /// Whether the action discovers inputs during execution.
    pub discovers_inputs: bool,
    /// Execution requirements.
    pub execution_info: BTreeMap<String, String>,
    /// Parameter files.
    pub param_files: Vec<ParamFile>,
    /// Primary output.
    pub primary_output: Arc<Artifact>,
    /// Execution platform label.
    pub execution_platform: String,
    /// Template of a template-expansion action.
    pub template_content: String,
    /// Substitutions of a template-expansion action.
    pub substitutions: BTreeMap<String, String>,
    /// Contents of a file-write action.
    pub file_contents: String,
    /// Target of an unresolved-symlink action.
    pub unresolved_symlink_target: String,
    /// Whether a written file is executable.
    pub is_executable: bool,
}

impl Action {
    /// Returns the de-duplicated input artifacts, in post-order.
    pub fn inputs(&self) -> Vec<Arc<Artifact>> {
        depset::expand(self.input_dep_sets.iter().map(|d| d.as_ref()))
    }
}

/// The decoded action graph of one `aquery` invocation.
#[derive(Debug, Serialize)]
pub struct ActionGraph {
    /// Hash of the raw buffer this graph was decoded from.
    pub fingerprint: ContentHash,
    /// Artifact table, keyed by wire ID.
    #[serde(skip)]
    pub artifacts: WireTable<ArtifactId, Arc<Artifact>>,
    /// Dep-set table, keyed by wire ID, in wire order.
    pub dep_sets: WireTable<DepSetId, Arc<DepSetOfFiles>>,
    /// Actions in wire order.
    pub actions: Vec<Action>,
}

impl ActionGraph {
    /// Returns the dep-set defined as `wire_id`.
    pub fn dep_set(&self, wire_id: u32) -> Option<&Arc<DepSetOfFiles>> {
        self.dep_sets.get(wire_id)
    }

    /// Returns the artifact defined as `wire_id`.
    pub fn artifact(&self, wire_id: u32) -> Option<&Arc<Artifact>> {
        self.artifacts.get(wire_id)
    }

    /// Returns the actions that produce `path` as an output.
    pub fn producers_of<'a>(&'a self, path: &'a str) -> impl Iterator<Item = &'a Action> + 'a {
        self.actions
            .iter()
            .filter(move |a| a.outputs.iter().any(|o| o.path == path))
    }

    /// Returns the number of actions per mnemonic.
    pub fn mnemonic_counts(&self) -> BTreeMap<&str, usize> {
        let mut counts = BTreeMap::new();
        for action in &self.actions {
            *counts.entry(action.mnemonic.as_str()).or_insert(0) += 1;
        }
        counts
    }

    /// Consumes the graph, returning its actions in wire order.
    pub fn into_actions(self) -> Vec<Action> {
        self.actions
    }
}
