//! Targets returned by `bazel query`.

use bzlq_common::Label;
use serde::Serialize;

use crate::value::{Attribute, License};

/// A query target: one of the five kinds Bazel reports.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Target {
    /// A rule instance.
    Rule(Rule),
    /// An input file.
    SourceFile(SourceFile),
    /// A file produced by a rule.
    GeneratedFile(GeneratedFile),
    /// A package group.
    PackageGroup(PackageGroup),
    /// An environment group.
    EnvironmentGroup(EnvironmentGroup),
}

/// The kind of a [`Target`], without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TargetKind {
    /// [`Target::Rule`].
    Rule,
    /// [`Target::SourceFile`].
    SourceFile,
    /// [`Target::GeneratedFile`].
    GeneratedFile,
    /// [`Target::PackageGroup`].
    PackageGroup,
    /// [`Target::EnvironmentGroup`].
    EnvironmentGroup,
}

impl TargetKind {
    /// Returns the `build.proto` spelling, e.g. `SOURCE_FILE`.
    pub fn as_str(self) -> &'static str {
        match self {
            TargetKind::Rule => "RULE",
            TargetKind::SourceFile => "SOURCE_FILE",
            TargetKind::GeneratedFile => "GENERATED_FILE",
            TargetKind::PackageGroup => "PACKAGE_GROUP",
            TargetKind::EnvironmentGroup => "ENVIRONMENT_GROUP",
        }
    }
}

impl Target {
    /// Returns the target's label.
    pub fn name(&self) -> &Label {
        match self {
            Target::Rule(r) => &r.name,
            Target::SourceFile(f) => &f.name,
            Target::GeneratedFile(f) => &f.name,
            Target::PackageGroup(g) => &g.name,
            Target::EnvironmentGroup(g) => &g.name,
        }
    }

    /// Returns the target's kind.
    pub fn kind(&self) -> TargetKind {
        match self {
            Target::Rule(_) => TargetKind::Rule,
            Target::SourceFile(_) => TargetKind::SourceFile,
            Target::GeneratedFile(_) => TargetKind::GeneratedFile,
            Target::PackageGroup(_) => TargetKind::PackageGroup,
            Target::EnvironmentGroup(_) => TargetKind::EnvironmentGroup,
        }
    }

    /// Returns the rule payload, if this is a rule.
    pub fn as_rule(&self) -> Option<&Rule> {
        match self {
            Target::Rule(r) => Some(r),
            _ => None,
        }
    }
}

/// A configured input of a rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConfiguredRuleInput {
    /// Input label.
    pub label: Option<Label>,
    /// Checksum of the input's configuration.
    pub configuration_checksum: Option<String>,
    /// Short ID of the input's configuration.
    pub configuration_id: Option<u32>,
}

/// A rule instance, e.g. `cc_library(name = "foo")`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Rule {
    /// Label of the rule.
    pub name: Label,
    /// Rule class, e.g. `cc_library`.
    pub rule_class: String,
    /// `<path>:<line>:<column>` of the instantiation.
    pub location: Option<String>,
    /// Decoded attributes, in wire order.
    pub attributes: Vec<Attribute>,
    /// Labels of the rule's inputs.
    pub rule_inputs: Vec<Label>,
    /// Configured inputs, reported by `cquery`.
    pub configured_rule_inputs: Vec<ConfiguredRuleInput>,
    /// Labels of the rule's outputs.
    pub rule_outputs: Vec<Label>,
    /// Features inherited from the package.
    pub default_settings: Vec<String>,
    /// Hash of the Starlark rule definition.
    pub skylark_environment_hash_code: Option<String>,
    /// Call stack at instantiation, outermost frame first.
    pub instantiation_stack: Vec<String>,
    /// Call stack of the rule class definition.
    pub definition_stack: Vec<String>,
}

impl Rule {
    /// Looks up an attribute by name.
    pub fn attribute(&self, name: &str) -> Option<&Attribute> {
        self.attributes.iter().find(|a| a.name == name)
    }
}

/// A file that is an input to the build.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SourceFile {
    /// Label of the file.
    pub name: Label,
    /// `<path>:<line>:<column>` of the file.
    pub location: Option<String>,
    /// `.bzl` files loaded by a BUILD file.
    pub subincludes: Vec<Label>,
    /// Package groups in the file's visibility.
    pub package_groups: Vec<Label>,
    /// Labels in the file's visibility.
    pub visibility_labels: Vec<Label>,
    /// Package-level features of a BUILD file.
    pub features: Vec<String>,
    /// License of the file, when declared.
    pub license: Option<License>,
    /// Whether a BUILD file's package has errors.
    pub package_contains_errors: Option<bool>,
}

/// A file produced by a rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GeneratedFile {
    /// Label of the file.
    pub name: Label,
    /// Label of the generating rule.
    pub generating_rule: Label,
    /// `<path>:<line>:<column>` of the file.
    pub location: Option<String>,
}

/// A package group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PackageGroup {
    /// Label of the group.
    pub name: Label,
    /// Package specifications, e.g. `//foo/...`.
    pub contained_packages: Vec<String>,
    /// Labels of included groups.
    pub included_package_groups: Vec<Label>,
}

/// An environment group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EnvironmentGroup {
    /// Label of the group.
    pub name: Label,
    /// Member environments.
    pub environments: Vec<Label>,
    /// Environments rules support by default.
    pub defaults: Vec<Label>,
}
