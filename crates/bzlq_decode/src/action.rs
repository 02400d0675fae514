//! `aquery` lookup tables and per-action assembly.

use std::collections::BTreeMap;
use std::sync::Arc;

use bzlq_common::Label;
use bzlq_model::{
    Action, ActionTarget, ActionTargetId, ArenaId, Artifact, ArtifactId, AspectDescriptor,
    AspectDescriptorId, Configuration, ConfigurationId, DepSetId, DepSetOfFiles, ParamFile,
    RuleClassId, WireTable,
};
use bzlq_proto::analysis;

use crate::error::{DecodeError, DecodeResult, EntityKind, ReferenceFault};
use crate::options::{AquerySchema, DecodeOptions};

/// Looks up `id` in `table`, failing with a [`DecodeError::MalformedReference`]
/// that names `referrer`.
pub(crate) fn lookup<'t, I: ArenaId, T>(
    table: &'t WireTable<I, T>,
    entity: EntityKind,
    id: u32,
    referrer: impl FnOnce() -> String,
) -> DecodeResult<&'t T> {
    table.get(id).ok_or_else(|| DecodeError::MalformedReference {
        entity,
        id,
        referrer: referrer(),
        fault: ReferenceFault::Undefined,
    })
}

fn insert<I: ArenaId, T>(
    table: &mut WireTable<I, T>,
    entity: EntityKind,
    id: u32,
    item: T,
) -> DecodeResult<()> {
    table
        .insert(id, item)
        .map(|_| ())
        .map_err(|dup| DecodeError::DuplicateId { entity, id: dup.0 })
}

/// Collects key/value pairs into a map, rejecting repeated keys.
fn key_values(pairs: &[analysis::KeyValuePair], context: impl Fn() -> String) -> DecodeResult<BTreeMap<String, String>> {
    let mut map = BTreeMap::new();
    for pair in pairs {
        if map.insert(pair.key.clone(), pair.value.clone()).is_some() {
            return Err(DecodeError::DuplicateKey {
                context: context(),
                key: pair.key.clone(),
            });
        }
    }
    Ok(map)
}

/// The small `aquery` tables actions point into.
pub(crate) struct ActionTables {
    pub targets: WireTable<ActionTargetId, Arc<ActionTarget>>,
    pub configurations: WireTable<ConfigurationId, Arc<Configuration>>,
    pub aspects: WireTable<AspectDescriptorId, Arc<AspectDescriptor>>,
}

impl ActionTables {
    /// Builds the target, configuration and aspect tables. Target rule
    /// classes resolve through the rule-class table.
    pub fn build(container: &analysis::ActionGraphContainer) -> DecodeResult<Self> {
        let mut rule_classes: WireTable<RuleClassId, &str> =
            WireTable::with_capacity(container.rule_classes.len());
        for class in &container.rule_classes {
            insert(&mut rule_classes, EntityKind::RuleClass, class.id, class.name.as_str())?;
        }

        let mut targets = WireTable::with_capacity(container.targets.len());
        for target in &container.targets {
            let rule_class = lookup(&rule_classes, EntityKind::RuleClass, target.rule_class_id, || {
                format!("target {} rule_class_id", target.id)
            })?;
            let decoded = ActionTarget {
                label: Label::new(target.label.as_str()),
                rule_class: rule_class.to_string(),
            };
            insert(&mut targets, EntityKind::Target, target.id, Arc::new(decoded))?;
        }

        let mut configurations = WireTable::with_capacity(container.configuration.len());
        for config in &container.configuration {
            let decoded = Configuration {
                mnemonic: config.mnemonic.clone(),
                platform_name: config.platform_name.clone(),
                checksum: config.checksum.clone(),
                is_tool: config.is_tool,
            };
            insert(&mut configurations, EntityKind::Configuration, config.id, Arc::new(decoded))?;
        }

        let mut aspects = WireTable::with_capacity(container.aspect_descriptors.len());
        for aspect in &container.aspect_descriptors {
            let decoded = AspectDescriptor {
                name: aspect.name.clone(),
                parameters: key_values(&aspect.parameters, || {
                    format!("aspect descriptor {} parameters", aspect.id)
                })?,
            };
            insert(&mut aspects, EntityKind::AspectDescriptor, aspect.id, Arc::new(decoded))?;
        }

        tracing::debug!(
            rule_classes = rule_classes.len(),
            targets = targets.len(),
            configurations = configurations.len(),
            aspects = aspects.len(),
            "built action lookup tables"
        );
        Ok(Self {
            targets,
            configurations,
            aspects,
        })
    }
}

/// Everything an action can reference.
pub(crate) struct ActionContext<'a> {
    pub tables: &'a ActionTables,
    pub artifacts: &'a WireTable<ArtifactId, Arc<Artifact>>,
    pub dep_sets: &'a WireTable<DepSetId, Arc<DepSetOfFiles>>,
    pub options: &'a DecodeOptions,
}

impl ActionContext<'_> {
    /// Assembles the action at wire position `index`.
    pub fn decode(&self, index: usize, action: &analysis::Action) -> DecodeResult<Action> {
        let referrer = |field: &str| format!("action #{index} ({}) {field}", action.mnemonic);

        let target = lookup(&self.tables.targets, EntityKind::Target, action.target_id, || {
            referrer("target_id")
        })?;
        let configuration = lookup(
            &self.tables.configurations,
            EntityKind::Configuration,
            action.configuration_id,
            || referrer("configuration_id"),
        )?;
        let aspect_descriptors = action
            .aspect_descriptor_ids
            .iter()
            .map(|&id| {
                lookup(&self.tables.aspects, EntityKind::AspectDescriptor, id, || {
                    referrer("aspect_descriptor_ids")
                })
                .map(Arc::clone)
            })
            .collect::<DecodeResult<Vec<_>>>()?;
        let input_dep_sets = self.dep_sets(&action.input_dep_set_ids, || referrer("input_dep_set_ids"))?;
        let scheduling_dep_dep_sets = match self.options.aquery_schema {
            AquerySchema::Current => Some(self.dep_sets(&action.scheduling_dep_dep_set_ids, || {
                referrer("scheduling_dep_dep_set_ids")
            })?),
            AquerySchema::PreSchedulingDeps => None,
        };
        let outputs = action
            .output_ids
            .iter()
            .map(|&id| self.artifact(id, || referrer("output_ids")))
            .collect::<DecodeResult<Vec<_>>>()?;
        let primary_output = self.artifact(action.primary_output_id, || referrer("primary_output_id"))?;

        Ok(Action {
            target: Arc::clone(target),
            aspect_descriptors,
            action_key: action.action_key.clone(),
            mnemonic: action.mnemonic.clone(),
            configuration: Arc::clone(configuration),
            arguments: action.arguments.clone(),
            environment_variables: key_values(&action.environment_variables, || {
                referrer("environment_variables")
            })?,
            input_dep_sets,
            scheduling_dep_dep_sets,
            outputs,
            discovers_inputs: action.discovers_inputs,
            execution_info: key_values(&action.execution_info, || referrer("execution_info"))?,
            param_files: action
                .param_files
                .iter()
                .map(|p| ParamFile {
                    exec_path: p.exec_path.clone(),
                    arguments: p.arguments.clone(),
                })
                .collect(),
            primary_output,
            execution_platform: action.execution_platform.clone(),
            template_content: action.template_content.clone(),
            substitutions: key_values(&action.substitutions, || referrer("substitutions"))?,
            file_contents: action.file_contents.clone(),
            unresolved_symlink_target: action.unresolved_symlink_target.clone(),
            is_executable: action.is_executable,
        })
    }

    fn artifact(&self, id: u32, referrer: impl FnOnce() -> String) -> DecodeResult<Arc<Artifact>> {
        lookup(self.artifacts, EntityKind::Artifact, id, referrer).map(Arc::clone)
    }

    fn dep_sets(
        &self,
        ids: &[u32],
        referrer: impl Fn() -> String,
    ) -> DecodeResult<Vec<Arc<DepSetOfFiles>>> {
        ids.iter()
            .map(|&id| lookup(self.dep_sets, EntityKind::DepSet, id, &referrer).map(Arc::clone))
            .collect()
    }
}
