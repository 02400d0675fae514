//! Messages of `analysis_v2.proto` (package `analysis`), the `aquery` and
//! `cquery` schema.
//!
//! This is a proto3 schema. Entities reference one another by `uint32` IDs,
//! where `0` means "no reference" (used for root path fragments).

use crate::blaze_query;

/// Container for the action graph of an `aquery` invocation.
///
/// Entity tables are emitted before the entities that reference them, and
/// dep-sets are emitted in dependency order.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ActionGraphContainer {
    /// Artifact table.
    #[prost(message, repeated, tag = "1")]
    pub artifacts: Vec<Artifact>,
    /// Actions in output order.
    #[prost(message, repeated, tag = "2")]
    pub actions: Vec<Action>,
    /// Owning targets of actions.
    #[prost(message, repeated, tag = "3")]
    pub targets: Vec<Target>,
    /// Dep-set table, in dependency order.
    #[prost(message, repeated, tag = "4")]
    pub dep_set_of_files: Vec<DepSetOfFiles>,
    /// Build configurations.
    #[prost(message, repeated, tag = "5")]
    pub configuration: Vec<Configuration>,
    /// Aspect descriptors.
    #[prost(message, repeated, tag = "6")]
    pub aspect_descriptors: Vec<AspectDescriptor>,
    /// Rule class names.
    #[prost(message, repeated, tag = "7")]
    pub rule_classes: Vec<RuleClass>,
    /// Interned path segments.
    #[prost(message, repeated, tag = "8")]
    pub path_fragments: Vec<PathFragment>,
}

/// A file produced or consumed by an action.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Artifact {
    /// Artifact ID.
    #[prost(uint32, tag = "1")]
    pub id: u32,
    /// Leaf path fragment of the artifact's exec path.
    #[prost(uint32, tag = "2")]
    pub path_fragment_id: u32,
    /// Whether the artifact is a directory whose contents are opaque.
    #[prost(bool, tag = "3")]
    pub is_tree_artifact: bool,
}

/// A single build action.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Action {
    /// Owning target.
    #[prost(uint32, tag = "1")]
    pub target_id: u32,
    /// Aspects that created the action, outermost first.
    #[prost(uint32, repeated, tag = "2")]
    pub aspect_descriptor_ids: Vec<u32>,
    /// Key identifying the action in the action cache.
    #[prost(string, tag = "3")]
    pub action_key: String,
    /// Action mnemonic, e.g. `CppCompile`.
    #[prost(string, tag = "4")]
    pub mnemonic: String,
    /// Configuration the action was created in.
    #[prost(uint32, tag = "5")]
    pub configuration_id: u32,
    /// Command line.
    #[prost(string, repeated, tag = "6")]
    pub arguments: Vec<String>,
    /// Environment of the command.
    #[prost(message, repeated, tag = "7")]
    pub environment_variables: Vec<KeyValuePair>,
    /// Input dep-sets.
    #[prost(uint32, repeated, tag = "8")]
    pub input_dep_set_ids: Vec<u32>,
    /// Output artifacts.
    #[prost(uint32, repeated, tag = "9")]
    pub output_ids: Vec<u32>,
    /// Whether the action discovers further inputs while executing.
    #[prost(bool, tag = "10")]
    pub discovers_inputs: bool,
    /// Execution requirements.
    #[prost(message, repeated, tag = "11")]
    pub execution_info: Vec<KeyValuePair>,
    /// Parameter files written for the action.
    #[prost(message, repeated, tag = "12")]
    pub param_files: Vec<ParamFile>,
    /// Primary output artifact.
    #[prost(uint32, tag = "13")]
    pub primary_output_id: u32,
    /// Label of the execution platform.
    #[prost(string, tag = "14")]
    pub execution_platform: String,
    /// Template of a template-expansion action.
    #[prost(string, tag = "15")]
    pub template_content: String,
    /// Substitutions of a template-expansion action.
    #[prost(message, repeated, tag = "16")]
    pub substitutions: Vec<KeyValuePair>,
    /// Contents of a file-write action.
    #[prost(string, tag = "17")]
    pub file_contents: String,
    /// Target of an unresolved-symlink action.
    #[prost(string, tag = "18")]
    pub unresolved_symlink_target: String,
    /// Whether a written file is executable.
    #[prost(bool, tag = "19")]
    pub is_executable: bool,
    /// Dep-sets that must be built before the action runs but are not inputs.
    #[prost(uint32, repeated, tag = "20")]
    pub scheduling_dep_dep_set_ids: Vec<u32>,
}

/// Owning target of an action.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Target {
    /// Target ID.
    #[prost(uint32, tag = "1")]
    pub id: u32,
    /// Target label.
    #[prost(string, tag = "2")]
    pub label: String,
    /// Rule class of the target.
    #[prost(uint32, tag = "3")]
    pub rule_class_id: u32,
}

/// A rule class name.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct RuleClass {
    /// Rule class ID.
    #[prost(uint32, tag = "1")]
    pub id: u32,
    /// Rule class name, e.g. `cc_library`.
    #[prost(string, tag = "2")]
    pub name: String,
}

/// An aspect applied to a target.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct AspectDescriptor {
    /// Aspect descriptor ID.
    #[prost(uint32, tag = "1")]
    pub id: u32,
    /// Aspect name.
    #[prost(string, tag = "2")]
    pub name: String,
    /// Aspect parameters.
    #[prost(message, repeated, tag = "3")]
    pub parameters: Vec<KeyValuePair>,
}

/// A set of artifacts: direct members plus nested dep-sets.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct DepSetOfFiles {
    /// Dep-set ID.
    #[prost(uint32, tag = "1")]
    pub id: u32,
    /// Nested dep-sets; each appears earlier in the container.
    #[prost(uint32, repeated, tag = "2")]
    pub transitive_dep_set_ids: Vec<u32>,
    /// Direct artifact members.
    #[prost(uint32, repeated, tag = "3")]
    pub direct_artifact_ids: Vec<u32>,
}

/// A build configuration.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Configuration {
    /// Configuration ID.
    #[prost(uint32, tag = "1")]
    pub id: u32,
    /// Output directory mnemonic, e.g. `k8-fastbuild`.
    #[prost(string, tag = "2")]
    pub mnemonic: String,
    /// Target platform name.
    #[prost(string, tag = "3")]
    pub platform_name: String,
    /// Configuration checksum.
    #[prost(string, tag = "4")]
    pub checksum: String,
    /// Whether this is an exec (tool) configuration.
    #[prost(bool, tag = "5")]
    pub is_tool: bool,
}

/// A string key/value pair.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct KeyValuePair {
    /// Key.
    #[prost(string, tag = "1")]
    pub key: String,
    /// Value.
    #[prost(string, tag = "2")]
    pub value: String,
}

/// A parameter file written for an action.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ParamFile {
    /// Exec path of the file.
    #[prost(string, tag = "1")]
    pub exec_path: String,
    /// Arguments written into the file.
    #[prost(string, repeated, tag = "2")]
    pub arguments: Vec<String>,
}

/// One interned path segment; `parent_id == 0` marks a root segment.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct PathFragment {
    /// Fragment ID.
    #[prost(uint32, tag = "1")]
    pub id: u32,
    /// Path segment.
    #[prost(string, tag = "2")]
    pub label: String,
    /// Parent fragment, or `0` for a root.
    #[prost(uint32, tag = "3")]
    pub parent_id: u32,
}

/// A target paired with its configuration, as emitted by `cquery`.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ConfiguredTarget {
    /// The target.
    #[prost(message, optional, tag = "1")]
    pub target: Option<blaze_query::Target>,
    /// Inline configuration, superseded by `configuration_id`.
    #[prost(message, optional, tag = "2")]
    pub configuration: Option<Configuration>,
    /// Configuration ID into [`CqueryResult::configurations`].
    #[prost(uint32, tag = "3")]
    pub configuration_id: u32,
}

/// The output of `bazel cquery --output=proto`.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CqueryResult {
    /// Configured targets.
    #[prost(message, repeated, tag = "1")]
    pub results: Vec<ConfiguredTarget>,
    /// Configurations referenced by `results`.
    #[prost(message, repeated, tag = "2")]
    pub configurations: Vec<Configuration>,
}
