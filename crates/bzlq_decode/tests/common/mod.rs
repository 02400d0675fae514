//! Builders for wire messages used across the integration tests.

#![allow(dead_code)]

use bzlq_model::Discriminator;
use bzlq_proto::analysis::{
    Action, ActionGraphContainer, Artifact, AspectDescriptor, Configuration, DepSetOfFiles,
    KeyValuePair, PathFragment, RuleClass, Target as ActionTarget,
};
use bzlq_proto::blaze_query::{self as raw, target::Discriminator as WireKind};
use prost::Message;

/// Incrementally builds an `ActionGraphContainer`.
#[derive(Default)]
pub struct GraphBuilder {
    pub container: ActionGraphContainer,
}

impl GraphBuilder {
    /// A graph with one rule class, one target (ID 1) and one
    /// configuration (ID 1).
    pub fn new() -> Self {
        let mut builder = Self::default();
        builder.container.rule_classes.push(RuleClass {
            id: 1,
            name: "cc_library".to_string(),
        });
        builder.container.targets.push(ActionTarget {
            id: 1,
            label: "//pkg:lib".to_string(),
            rule_class_id: 1,
        });
        builder.container.configuration.push(Configuration {
            id: 1,
            mnemonic: "k8-fastbuild".to_string(),
            platform_name: "k8".to_string(),
            checksum: "abc123".to_string(),
            is_tool: false,
        });
        builder
    }

    pub fn fragment(mut self, id: u32, label: &str, parent_id: u32) -> Self {
        self.container.path_fragments.push(PathFragment {
            id,
            label: label.to_string(),
            parent_id,
        });
        self
    }

    /// Adds a root fragment with the same ID and an artifact on it.
    pub fn file(self, id: u32, name: &str) -> Self {
        self.fragment(id, name, 0).artifact(id, id)
    }

    pub fn artifact(mut self, id: u32, path_fragment_id: u32) -> Self {
        self.container.artifacts.push(Artifact {
            id,
            path_fragment_id,
            is_tree_artifact: false,
        });
        self
    }

    pub fn dep_set(mut self, id: u32, transitive: &[u32], direct: &[u32]) -> Self {
        self.container.dep_set_of_files.push(DepSetOfFiles {
            id,
            transitive_dep_set_ids: transitive.to_vec(),
            direct_artifact_ids: direct.to_vec(),
        });
        self
    }

    pub fn aspect(mut self, id: u32, name: &str) -> Self {
        self.container.aspect_descriptors.push(AspectDescriptor {
            id,
            name: name.to_string(),
            parameters: vec![],
        });
        self
    }

    pub fn action(mut self, action: Action) -> Self {
        self.container.actions.push(action);
        self
    }

    pub fn encode(&self) -> Vec<u8> {
        self.container.encode_to_vec()
    }
}

/// An action of target 1 in configuration 1.
pub fn action(mnemonic: &str, inputs: &[u32], outputs: &[u32]) -> Action {
    Action {
        target_id: 1,
        configuration_id: 1,
        mnemonic: mnemonic.to_string(),
        action_key: format!("key-{mnemonic}"),
        arguments: vec!["/usr/bin/tool".to_string()],
        input_dep_set_ids: inputs.to_vec(),
        output_ids: outputs.to_vec(),
        primary_output_id: outputs.first().copied().unwrap_or_default(),
        ..Default::default()
    }
}

pub fn pair(key: &str, value: &str) -> KeyValuePair {
    KeyValuePair {
        key: key.to_string(),
        value: value.to_string(),
    }
}

pub fn rule_target(name: &str, rule_class: &str, attributes: Vec<raw::Attribute>) -> raw::Target {
    raw::Target {
        r#type: WireKind::Rule as i32,
        rule: Some(raw::Rule {
            name: name.to_string(),
            rule_class: rule_class.to_string(),
            attribute: attributes,
            ..Default::default()
        }),
        ..Default::default()
    }
}

pub fn source_file(name: &str) -> raw::Target {
    raw::Target {
        r#type: WireKind::SourceFile as i32,
        source_file: Some(raw::SourceFile {
            name: name.to_string(),
            ..Default::default()
        }),
        ..Default::default()
    }
}

pub fn attribute(name: &str, d: Discriminator) -> raw::Attribute {
    raw::Attribute {
        name: name.to_string(),
        r#type: d.to_wire(),
        ..Default::default()
    }
}

pub fn label_list(name: &str, labels: &[&str]) -> raw::Attribute {
    raw::Attribute {
        string_list_value: labels.iter().map(|l| l.to_string()).collect(),
        explicitly_specified: Some(true),
        ..attribute(name, Discriminator::LabelList)
    }
}

pub fn query_result(targets: Vec<raw::Target>) -> Vec<u8> {
    raw::QueryResult { target: targets }.encode_to_vec()
}
