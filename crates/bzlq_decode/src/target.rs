//! Query target decoding.

use bzlq_common::Label;
use bzlq_model::{
    ConfiguredRuleInput, EnvironmentGroup, GeneratedFile, PackageGroup, Rule, SourceFile, Target,
};
use bzlq_proto::blaze_query::{self as raw, target::Discriminator as WireKind};

use crate::error::{DecodeError, DecodeResult};
use crate::options::{DecodeOptions, UnsupportedAttributes};
use crate::value::{decode_attribute, decode_license};

/// Decodes one wire target into its domain variant.
///
/// The payload named by the discriminator must be present; other payloads
/// are ignored.
pub fn decode_target(target: &raw::Target, options: &DecodeOptions) -> DecodeResult<Target> {
    let kind = WireKind::try_from(target.r#type).map_err(|_| DecodeError::UnsupportedVariant {
        what: "target type",
        value: target.r#type.to_string(),
        context: context(target),
    })?;
    let missing = |field| DecodeError::MissingPayload {
        context: context(target),
        field,
    };
    let decoded = match kind {
        WireKind::Rule => {
            Target::Rule(decode_rule(target.rule.as_ref().ok_or_else(|| missing("rule"))?, options)?)
        }
        WireKind::SourceFile => Target::SourceFile(decode_source_file(
            target.source_file.as_ref().ok_or_else(|| missing("source_file"))?,
        )),
        WireKind::GeneratedFile => Target::GeneratedFile(decode_generated_file(
            target
                .generated_file
                .as_ref()
                .ok_or_else(|| missing("generated_file"))?,
        )),
        WireKind::PackageGroup => Target::PackageGroup(decode_package_group(
            target
                .package_group
                .as_ref()
                .ok_or_else(|| missing("package_group"))?,
        )),
        WireKind::EnvironmentGroup => Target::EnvironmentGroup(decode_environment_group(
            target
                .environment_group
                .as_ref()
                .ok_or_else(|| missing("environment_group"))?,
        )),
    };
    tracing::trace!(label = %decoded.name(), kind = decoded.kind().as_str(), "decoded target");
    Ok(decoded)
}

/// Names a wire target by whichever payload it carries.
fn context(target: &raw::Target) -> String {
    let name = target
        .rule
        .as_ref()
        .map(|r| r.name.as_str())
        .or(target.source_file.as_ref().map(|f| f.name.as_str()))
        .or(target.generated_file.as_ref().map(|f| f.name.as_str()))
        .or(target.package_group.as_ref().map(|g| g.name.as_str()))
        .or(target.environment_group.as_ref().map(|g| g.name.as_str()));
    match name {
        Some(name) => format!("target {name}"),
        None => format!("target of type {}", target.r#type),
    }
}

fn labels(raw: &[String]) -> Vec<Label> {
    raw.iter().map(|s| Label::new(s.as_str())).collect()
}

fn decode_rule(rule: &raw::Rule, options: &DecodeOptions) -> DecodeResult<Rule> {
    let mut attributes = Vec::with_capacity(rule.attribute.len());
    for attribute in &rule.attribute {
        match decode_attribute(attribute, &rule.name, options) {
            Ok(decoded) => attributes.push(decoded),
            Err(err)
                if err.is_unsupported_attribute()
                    && options.unsupported_attributes == UnsupportedAttributes::Skip =>
            {
                tracing::warn!(rule = %rule.name, attribute = %attribute.name, "skipping attribute: {err}");
            }
            Err(err) => return Err(err),
        }
    }

    Ok(Rule {
        name: Label::new(rule.name.as_str()),
        rule_class: rule.rule_class.clone(),
        location: rule.location.clone(),
        attributes,
        rule_inputs: labels(&rule.rule_input),
        configured_rule_inputs: rule
            .configured_rule_input
            .iter()
            .map(|input| ConfiguredRuleInput {
                label: input.label.as_deref().map(Label::new),
                configuration_checksum: input.configuration_checksum.clone(),
                configuration_id: input.configuration_id,
            })
            .collect(),
        rule_outputs: labels(&rule.rule_output),
        default_settings: rule.default_setting.clone(),
        skylark_environment_hash_code: rule.skylark_environment_hash_code.clone(),
        instantiation_stack: rule.instantiation_stack.clone(),
        definition_stack: rule.definition_stack.clone(),
    })
}

fn decode_source_file(file: &raw::SourceFile) -> SourceFile {
    SourceFile {
        name: Label::new(file.name.as_str()),
        location: file.location.clone(),
        subincludes: labels(&file.subinclude),
        package_groups: labels(&file.package_group),
        visibility_labels: labels(&file.visibility_label),
        features: file.feature.clone(),
        license: file.license.as_ref().map(decode_license),
        package_contains_errors: file.package_contains_errors,
    }
}

fn decode_generated_file(file: &raw::GeneratedFile) -> GeneratedFile {
    GeneratedFile {
        name: Label::new(file.name.as_str()),
        generating_rule: Label::new(file.generating_rule.as_str()),
        location: file.location.clone(),
    }
}

fn decode_package_group(group: &raw::PackageGroup) -> PackageGroup {
    PackageGroup {
        name: Label::new(group.name.as_str()),
        contained_packages: group.contained_package.clone(),
        included_package_groups: labels(&group.included_package_group),
    }
}

fn decode_environment_group(group: &raw::EnvironmentGroup) -> EnvironmentGroup {
    EnvironmentGroup {
        name: Label::new(group.name.as_str()),
        environments: labels(&group.environment),
        defaults: labels(&group.default),
    }
}
