//! The typed domain model produced by decoding Bazel query output.
//!
//! This crate defines [`Target`] (the five `bazel query` target kinds with
//! their [`Attribute`] values) and [`Action`] (a fully resolved `aquery`
//! action whose dep-sets and artifacts are shared [`Arc`](std::sync::Arc)
//! nodes), plus the [`Arena`]/[`WireTable`] storage used to build them.

#![warn(missing_docs)]

pub mod action;
pub mod arena;
pub mod artifact;
pub mod depset;
pub mod ids;
pub mod target;
pub mod value;

pub use action::{Action, ActionGraph, ActionTarget, AspectDescriptor, Configuration, ParamFile};
pub use arena::{Arena, ArenaId, DuplicateWireId, WireTable};
pub use artifact::Artifact;
pub use depset::DepSetOfFiles;
pub use ids::{
    ActionTargetId, ArtifactId, AspectDescriptorId, ConfigurationId, DepSetId, PathFragmentId,
    RuleClassId,
};
pub use target::{
    ConfiguredRuleInput, EnvironmentGroup, GeneratedFile, PackageGroup, Rule, SourceFile, Target,
    TargetKind,
};
pub use value::{
    Attribute, Discriminator, FilesetEntry, License, Selector, SelectorEntry, SelectorList,
    SymlinkBehavior, Tristate, Value,
};
