//! Attribute value decoding.
//!
//! The attribute's `type` discriminator alone decides which wire field is
//! read. Populated fields the discriminator does not name are either rejected
//! (strict shapes) or ignored, never used as a fallback.

use std::collections::btree_map::Entry;
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use bzlq_common::{Label, Output};
use bzlq_model::{
    Attribute, Discriminator, FilesetEntry, License, Selector, SelectorEntry, SelectorList,
    SymlinkBehavior, Tristate, Value,
};
use bzlq_proto::blaze_query as raw;

use crate::error::{DecodeError, DecodeResult};
use crate::options::DecodeOptions;
use crate::payload::{Field, HasPayload, Payload};

/// Names an attribute in error messages.
#[derive(Debug, Clone, Copy)]
pub struct ValueContext<'a> {
    /// Label of the rule that owns the attribute.
    pub target: &'a str,
    /// Attribute name.
    pub attribute: &'a str,
}

impl fmt::Display for ValueContext<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "attribute '{}' of {}", self.attribute, self.target)
    }
}

/// Decodes one raw attribute of the rule `target`.
pub fn decode_attribute(
    attribute: &raw::Attribute,
    target: &str,
    options: &DecodeOptions,
) -> DecodeResult<Attribute> {
    let ctx = ValueContext {
        target,
        attribute: &attribute.name,
    };
    let discriminator = discriminator(attribute.r#type, "type", ctx)?;
    let value = decode_value(attribute.payload(), discriminator, ctx, options)?;
    Ok(Attribute {
        name: attribute.name.clone(),
        explicitly_specified: attribute.explicitly_specified,
        nodep: attribute.nodep,
        source_aspect_name: attribute.source_aspect_name.clone(),
        value,
    })
}

fn discriminator(wire: i32, field: &'static str, ctx: ValueContext<'_>) -> DecodeResult<Discriminator> {
    let discriminator = Discriminator::from_wire(wire).ok_or_else(|| DecodeError::InvalidEnum {
        field,
        value: wire,
        context: ctx.to_string(),
    })?;
    if !discriminator.is_supported() {
        return Err(DecodeError::UnsupportedVariant {
            what: DecodeError::ATTRIBUTE_TYPE,
            value: discriminator.to_string(),
            context: ctx.to_string(),
        });
    }
    Ok(discriminator)
}

/// Fields a discriminator may populate.
fn allowed_fields(discriminator: Discriminator) -> &'static [Field] {
    match discriminator {
        Discriminator::Integer => &[Field::Int],
        Discriminator::String | Discriminator::Label | Discriminator::Output => &[Field::String],
        Discriminator::StringList
        | Discriminator::LabelList
        | Discriminator::OutputList
        | Discriminator::DistributionSet => &[Field::StringList],
        Discriminator::License => &[Field::License],
        Discriminator::StringDict => &[Field::StringDict],
        Discriminator::FilesetEntryList => &[Field::FilesetList],
        Discriminator::LabelListDict => &[Field::LabelListDict],
        Discriminator::StringListDict => &[Field::StringListDict],
        Discriminator::Boolean => &[Field::Boolean, Field::Int, Field::String],
        Discriminator::Tristate => &[Field::Tristate, Field::Int, Field::String],
        Discriminator::IntegerList => &[Field::IntList],
        Discriminator::LabelDictUnary => &[Field::LabelDictUnary],
        Discriminator::SelectorList => &[Field::SelectorList],
        Discriminator::LabelKeyedStringDict => &[Field::LabelKeyedStringDict],
        Discriminator::Unknown | Discriminator::DeprecatedStringDictUnary => &[],
    }
}

fn check_shape(
    payload: &Payload<'_>,
    discriminator: Discriminator,
    ctx: ValueContext<'_>,
) -> DecodeResult<()> {
    let allowed = allowed_fields(discriminator);
    match payload.populated().into_iter().find(|f| !allowed.contains(f)) {
        Some(field) => Err(DecodeError::ShapeMismatch {
            context: ctx.to_string(),
            expected: discriminator,
            actual: field.as_str(),
        }),
        None => Ok(()),
    }
}

/// Decodes `payload` as a value of type `discriminator`.
///
/// Bazel omits the value field when an attribute's value is null, so absent
/// scalars decode to [`Value::zero`]. LICENSE and SELECTOR_LIST have no such
/// reading and fail with [`DecodeError::MissingPayload`].
pub(crate) fn decode_value(
    payload: Payload<'_>,
    discriminator: Discriminator,
    ctx: ValueContext<'_>,
    options: &DecodeOptions,
) -> DecodeResult<Value> {
    if options.strict_shapes {
        check_shape(&payload, discriminator, ctx)?;
    }
    let string = || payload.string_value.unwrap_or_default();
    let value = match discriminator {
        Discriminator::Integer => Value::Integer(payload.int_value.unwrap_or_default()),
        Discriminator::String => Value::String(string().to_string()),
        Discriminator::Label => Value::Label(Label::new(string())),
        Discriminator::Output => Value::Output(Output::new(string())),
        Discriminator::StringList => Value::StringList(payload.string_list_value.to_vec()),
        Discriminator::LabelList => Value::LabelList(labels(payload.string_list_value)),
        Discriminator::OutputList => Value::OutputList(
            payload
                .string_list_value
                .iter()
                .map(|s| Output::new(s.as_str()))
                .collect(),
        ),
        Discriminator::DistributionSet => Value::DistributionSet(
            payload.string_list_value.iter().cloned().collect::<BTreeSet<_>>(),
        ),
        Discriminator::License => {
            let license = payload.license.ok_or_else(|| DecodeError::MissingPayload {
                context: ctx.to_string(),
                field: "license",
            })?;
            Value::License(decode_license(license))
        }
        Discriminator::StringDict => Value::StringDict(unique_map(
            payload
                .string_dict_value
                .iter()
                .map(|e| (e.key.clone(), e.value.clone())),
            ctx,
        )?),
        Discriminator::FilesetEntryList => Value::FilesetEntryList(
            payload
                .fileset_list_value
                .iter()
                .map(|e| decode_fileset_entry(e, ctx))
                .collect::<DecodeResult<_>>()?,
        ),
        Discriminator::LabelListDict => Value::LabelListDict(unique_map(
            payload
                .label_list_dict_value
                .iter()
                .map(|e| (e.key.clone(), labels(&e.value))),
            ctx,
        )?),
        Discriminator::StringListDict => Value::StringListDict(unique_map(
            payload
                .string_list_dict_value
                .iter()
                .map(|e| (e.key.clone(), e.value.clone())),
            ctx,
        )?),
        Discriminator::Boolean => Value::Boolean(
            payload
                .boolean_value
                .or_else(|| payload.int_value.map(|v| v != 0))
                .unwrap_or_default(),
        ),
        Discriminator::Tristate => {
            let invalid = |field, value| DecodeError::InvalidEnum {
                field,
                value,
                context: ctx.to_string(),
            };
            let tristate = match (payload.tristate_value, payload.int_value) {
                (Some(wire), _) => {
                    Tristate::from_wire(wire).ok_or_else(|| invalid("tristate_value", wire))?
                }
                (None, Some(mirror)) => {
                    Tristate::from_int_mirror(mirror).ok_or_else(|| invalid("int_value", mirror))?
                }
                (None, None) => Tristate::Auto,
            };
            Value::Tristate(tristate)
        }
        Discriminator::IntegerList => Value::IntegerList(payload.int_list_value.to_vec()),
        Discriminator::LabelDictUnary => Value::LabelDictUnary(unique_map(
            payload
                .label_dict_unary_value
                .iter()
                .map(|e| (e.key.clone(), Label::new(e.value.as_str()))),
            ctx,
        )?),
        Discriminator::LabelKeyedStringDict => Value::LabelKeyedStringDict(unique_map(
            payload
                .label_keyed_string_dict_value
                .iter()
                .map(|e| (Label::new(e.key.as_str()), e.value.clone())),
            ctx,
        )?),
        Discriminator::SelectorList => {
            let list = payload.selector_list.ok_or_else(|| DecodeError::MissingPayload {
                context: ctx.to_string(),
                field: "selector_list",
            })?;
            Value::SelectorList(decode_selector_list(list, ctx, options)?)
        }
        Discriminator::Unknown | Discriminator::DeprecatedStringDictUnary => {
            return Err(DecodeError::UnsupportedVariant {
                what: DecodeError::ATTRIBUTE_TYPE,
                value: discriminator.to_string(),
                context: ctx.to_string(),
            });
        }
    };
    Ok(value)
}

fn labels(raw: &[String]) -> Vec<Label> {
    raw.iter().map(|s| Label::new(s.as_str())).collect()
}

/// Collects `entries` into a map, rejecting repeated keys.
fn unique_map<K, V>(
    entries: impl IntoIterator<Item = (K, V)>,
    ctx: ValueContext<'_>,
) -> DecodeResult<BTreeMap<K, V>>
where
    K: Ord + fmt::Display,
{
    let mut map = BTreeMap::new();
    for (key, value) in entries {
        match map.entry(key) {
            Entry::Occupied(slot) => {
                return Err(DecodeError::DuplicateKey {
                    context: ctx.to_string(),
                    key: slot.key().to_string(),
                });
            }
            Entry::Vacant(slot) => {
                slot.insert(value);
            }
        }
    }
    Ok(map)
}

/// Converts a wire license.
pub(crate) fn decode_license(license: &raw::License) -> License {
    License {
        types: license.license_type.clone(),
        exceptions: license.exception.clone(),
    }
}

fn decode_fileset_entry(entry: &raw::FilesetEntry, ctx: ValueContext<'_>) -> DecodeResult<FilesetEntry> {
    let symlink_behavior = entry
        .symlink_behavior
        .map(|wire| {
            SymlinkBehavior::from_wire(wire).ok_or_else(|| DecodeError::InvalidEnum {
                field: "symlink_behavior",
                value: wire,
                context: ctx.to_string(),
            })
        })
        .transpose()?;
    Ok(FilesetEntry {
        source: Label::new(entry.source.as_str()),
        destination_directory: entry.destination_directory.clone(),
        files_present: entry.files_present,
        files: labels(&entry.file),
        excludes: entry.exclude.clone(),
        symlink_behavior,
        strip_prefix: entry.strip_prefix.clone(),
    })
}

fn decode_selector_list(
    list: &raw::attribute::SelectorList,
    ctx: ValueContext<'_>,
    options: &DecodeOptions,
) -> DecodeResult<SelectorList> {
    let unsupported = |value: &str| DecodeError::UnsupportedVariant {
        what: "selector list",
        value: value.to_string(),
        context: ctx.to_string(),
    };
    let wire = list.r#type.ok_or_else(|| unsupported("without an element type"))?;
    let element_type = discriminator(wire, "selector_list.type", ctx)?;
    if element_type == Discriminator::SelectorList {
        return Err(unsupported("nested in a selector list"));
    }
    if list.elements.is_empty() {
        return Err(unsupported("with no selectors"));
    }

    let elements = list
        .elements
        .iter()
        .map(|selector| decode_selector(selector, element_type, ctx, options))
        .collect::<DecodeResult<Vec<_>>>()?;
    Ok(SelectorList {
        element_type,
        elements,
    })
}

fn decode_selector(
    selector: &raw::attribute::Selector,
    element_type: Discriminator,
    ctx: ValueContext<'_>,
    options: &DecodeOptions,
) -> DecodeResult<Selector> {
    if selector.entries.is_empty() {
        return Err(DecodeError::UnsupportedVariant {
            what: "selector",
            value: "with no entries".to_string(),
            context: ctx.to_string(),
        });
    }
    let entries = selector
        .entries
        .iter()
        .map(|entry| {
            let payload = entry.payload();
            // A branch written as `None` carries no payload at all.
            let value = match Value::zero(element_type) {
                Some(zero) if entry.is_default_value == Some(true) && payload.populated().is_empty() => {
                    zero
                }
                _ => decode_value(payload, element_type, ctx, options)?,
            };
            Ok(SelectorEntry {
                condition_label: entry.label.clone(),
                is_default_value: entry.is_default_value,
                value,
            })
        })
        .collect::<DecodeResult<Vec<_>>>()?;
    Ok(Selector {
        entries,
        has_default_value: selector.has_default_value,
        no_match_error: selector.no_match_error.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use bzlq_proto::blaze_query::attribute::{
        Selector as RawSelector, SelectorEntry as RawSelectorEntry, SelectorList as RawSelectorList,
    };

    fn attr(name: &str, d: Discriminator) -> raw::Attribute {
        raw::Attribute {
            name: name.to_string(),
            r#type: d.to_wire(),
            ..Default::default()
        }
    }

    fn decode(attribute: &raw::Attribute) -> DecodeResult<Attribute> {
        decode_attribute(attribute, "//pkg:rule", &DecodeOptions::default())
    }

    fn lax() -> DecodeOptions {
        DecodeOptions {
            strict_shapes: false,
            ..DecodeOptions::default()
        }
    }

    #[test]
    fn label_list() {
        let mut raw = attr("deps", Discriminator::LabelList);
        raw.string_list_value = vec!["//a:b".to_string(), "//c:d".to_string()];
        raw.explicitly_specified = Some(true);
        let decoded = decode(&raw).unwrap();
        assert_eq!(decoded.discriminator(), Discriminator::LabelList);
        assert_eq!(
            decoded.value,
            Value::LabelList(vec![Label::new("//a:b"), Label::new("//c:d")])
        );
        assert_eq!(decoded.explicitly_specified, Some(true));
    }

    #[test]
    fn integer_and_string() {
        let mut raw = attr("timeout", Discriminator::Integer);
        raw.int_value = Some(300);
        assert_eq!(decode(&raw).unwrap().value, Value::Integer(300));

        let mut raw = attr("name", Discriminator::String);
        raw.string_value = Some("lib".to_string());
        assert_eq!(decode(&raw).unwrap().value, Value::String("lib".to_string()));
    }

    #[test]
    fn output_is_not_a_label() {
        let mut raw = attr("out", Discriminator::Output);
        raw.string_value = Some("gen.h".to_string());
        assert_eq!(decode(&raw).unwrap().value, Value::Output(Output::new("gen.h")));
    }

    #[test]
    fn absent_label_is_zero() {
        let raw = attr("linkstamp", Discriminator::Label);
        let decoded = decode(&raw).unwrap();
        assert_eq!(decoded.value, Value::Label(Label::new("")));
    }

    #[test]
    fn boolean_tolerates_mirrors() {
        let mut raw = attr("testonly", Discriminator::Boolean);
        raw.boolean_value = Some(true);
        raw.int_value = Some(1);
        raw.string_value = Some("true".to_string());
        assert_eq!(decode(&raw).unwrap().value, Value::Boolean(true));
    }

    #[test]
    fn boolean_from_int_mirror() {
        let mut raw = attr("linkstatic", Discriminator::Boolean);
        raw.int_value = Some(1);
        assert_eq!(decode(&raw).unwrap().value, Value::Boolean(true));
    }

    #[test]
    fn tristate_values() {
        for (wire, expected) in [(0, Tristate::No), (1, Tristate::Yes), (2, Tristate::Auto)] {
            let mut raw = attr("stamp", Discriminator::Tristate);
            raw.tristate_value = Some(wire);
            assert_eq!(decode(&raw).unwrap().value, Value::Tristate(expected));
        }
    }

    #[test]
    fn tristate_from_int_mirror() {
        for (mirror, expected) in [(-1, Tristate::Auto), (0, Tristate::No), (1, Tristate::Yes)] {
            let mut raw = attr("stamp", Discriminator::Tristate);
            raw.int_value = Some(mirror);
            assert_eq!(decode(&raw).unwrap().value, Value::Tristate(expected));
        }
    }

    #[test]
    fn tristate_value_wins_over_mirror() {
        let mut raw = attr("stamp", Discriminator::Tristate);
        raw.tristate_value = Some(2);
        raw.int_value = Some(-1);
        assert_eq!(decode(&raw).unwrap().value, Value::Tristate(Tristate::Auto));
    }

    #[test]
    fn tristate_mirror_out_of_range() {
        let mut raw = attr("stamp", Discriminator::Tristate);
        raw.int_value = Some(2);
        assert!(matches!(
            decode(&raw).unwrap_err(),
            DecodeError::InvalidEnum {
                field: "int_value",
                value: 2,
                ..
            }
        ));
    }

    #[test]
    fn tristate_out_of_range() {
        let mut raw = attr("stamp", Discriminator::Tristate);
        raw.tristate_value = Some(7);
        assert!(matches!(
            decode(&raw).unwrap_err(),
            DecodeError::InvalidEnum { value: 7, .. }
        ));
    }

    #[test]
    fn distribution_set_is_a_set() {
        let mut raw = attr("distribs", Discriminator::DistributionSet);
        raw.string_list_value = vec!["web".to_string(), "client".to_string(), "web".to_string()];
        let Value::DistributionSet(set) = decode(&raw).unwrap().value else {
            panic!("expected a distribution set");
        };
        assert_eq!(set.into_iter().collect::<Vec<_>>(), vec!["client", "web"]);
    }

    #[test]
    fn license() {
        let mut raw = attr("licenses", Discriminator::License);
        raw.license = Some(raw::License {
            license_type: vec!["notice".to_string()],
            exception: vec![],
        });
        assert_eq!(
            decode(&raw).unwrap().value,
            Value::License(License {
                types: vec!["notice".to_string()],
                exceptions: vec![],
            })
        );
    }

    #[test]
    fn license_requires_payload() {
        let raw = attr("licenses", Discriminator::License);
        assert!(matches!(
            decode(&raw).unwrap_err(),
            DecodeError::MissingPayload {
                field: "license",
                ..
            }
        ));
    }

    #[test]
    fn string_dict_duplicate_key() {
        let mut raw = attr("env", Discriminator::StringDict);
        raw.string_dict_value = vec![
            raw::StringDictEntry {
                key: "A".to_string(),
                value: "1".to_string(),
            },
            raw::StringDictEntry {
                key: "A".to_string(),
                value: "2".to_string(),
            },
        ];
        match decode(&raw).unwrap_err() {
            DecodeError::DuplicateKey { key, context } => {
                assert_eq!(key, "A");
                assert_eq!(context, "attribute 'env' of //pkg:rule");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn label_keyed_string_dict() {
        let mut raw = attr("data_map", Discriminator::LabelKeyedStringDict);
        raw.label_keyed_string_dict_value = vec![raw::LabelKeyedStringDictEntry {
            key: "//a:b".to_string(),
            value: "x".to_string(),
        }];
        let Value::LabelKeyedStringDict(map) = decode(&raw).unwrap().value else {
            panic!("expected a label-keyed dict");
        };
        assert_eq!(map.get(&Label::new("//a:b")).map(String::as_str), Some("x"));
    }

    #[test]
    fn label_keyed_string_dict_duplicate_key() {
        let mut raw = attr("data_map", Discriminator::LabelKeyedStringDict);
        raw.label_keyed_string_dict_value = vec![
            raw::LabelKeyedStringDictEntry {
                key: "//a:b".to_string(),
                value: "x".to_string(),
            },
            raw::LabelKeyedStringDictEntry {
                key: "//a:b".to_string(),
                value: "y".to_string(),
            },
        ];
        match decode(&raw).unwrap_err() {
            DecodeError::DuplicateKey { key, context } => {
                assert_eq!(key, "//a:b");
                assert_eq!(context, "attribute 'data_map' of //pkg:rule");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn fileset_files_present_distinct_from_absent() {
        let entry = |files_present| raw::FilesetEntry {
            source: "//a:files".to_string(),
            destination_directory: "out".to_string(),
            files_present,
            strip_prefix: Some(String::new()),
            ..Default::default()
        };
        let mut present = attr("entries", Discriminator::FilesetEntryList);
        present.fileset_list_value = vec![entry(Some(true))];
        let mut absent = attr("entries", Discriminator::FilesetEntryList);
        absent.fileset_list_value = vec![entry(None)];

        let present = decode(&present).unwrap().value;
        let absent = decode(&absent).unwrap().value;
        assert_ne!(present, absent);
        let Value::FilesetEntryList(entries) = present else {
            panic!("expected fileset entries");
        };
        assert_eq!(entries[0].files_present, Some(true));
        assert!(entries[0].files.is_empty());
        assert_eq!(entries[0].strip_prefix.as_deref(), Some(""));
    }

    #[test]
    fn fileset_invalid_symlink_behavior() {
        let mut raw = attr("entries", Discriminator::FilesetEntryList);
        raw.fileset_list_value = vec![raw::FilesetEntry {
            source: "//a:files".to_string(),
            symlink_behavior: Some(9),
            ..Default::default()
        }];
        assert!(matches!(
            decode(&raw).unwrap_err(),
            DecodeError::InvalidEnum {
                field: "symlink_behavior",
                value: 9,
                ..
            }
        ));
    }

    #[test]
    fn unsupported_types_fail_explicitly() {
        for d in [Discriminator::Unknown, Discriminator::DeprecatedStringDictUnary] {
            let err = decode(&attr("weird", d)).unwrap_err();
            assert!(err.is_unsupported_attribute(), "{d}: {err}");
        }
    }

    #[test]
    fn unknown_wire_type_is_invalid_enum() {
        let mut raw = attr("x", Discriminator::String);
        raw.r#type = 99;
        assert!(matches!(
            decode(&raw).unwrap_err(),
            DecodeError::InvalidEnum {
                field: "type",
                value: 99,
                ..
            }
        ));
    }

    #[test]
    fn shape_mismatch_is_reported() {
        let mut raw = attr("srcs", Discriminator::LabelList);
        raw.int_value = Some(3);
        match decode(&raw).unwrap_err() {
            DecodeError::ShapeMismatch {
                context,
                expected,
                actual,
            } => {
                assert_eq!(context, "attribute 'srcs' of //pkg:rule");
                assert_eq!(expected, Discriminator::LabelList);
                assert_eq!(actual, "int_value");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn lax_shapes_read_only_the_named_field() {
        let mut raw = attr("srcs", Discriminator::LabelList);
        raw.string_list_value = vec!["//a:b".to_string()];
        raw.string_value = Some("//ignored:x".to_string());
        let decoded = decode_attribute(&raw, "//pkg:rule", &lax()).unwrap();
        assert_eq!(decoded.value, Value::LabelList(vec![Label::new("//a:b")]));
    }

    fn entry(label: &str, values: &[&str]) -> RawSelectorEntry {
        RawSelectorEntry {
            label: Some(label.to_string()),
            string_list_value: values.iter().map(|v| v.to_string()).collect(),
            ..Default::default()
        }
    }

    fn selector_attr(element_type: Option<Discriminator>, elements: Vec<RawSelector>) -> raw::Attribute {
        let mut raw = attr("deps", Discriminator::SelectorList);
        raw.selector_list = Some(RawSelectorList {
            r#type: element_type.map(Discriminator::to_wire),
            elements,
        });
        raw
    }

    #[test]
    fn selector_list_decodes_entries_with_element_type() {
        let raw = selector_attr(
            Some(Discriminator::LabelList),
            vec![RawSelector {
                entries: vec![
                    entry("//cfg:linux", &["//a:linux"]),
                    RawSelectorEntry {
                        label: Some(SelectorEntry::DEFAULT_CONDITION.to_string()),
                        is_default_value: Some(true),
                        ..Default::default()
                    },
                ],
                has_default_value: Some(true),
                no_match_error: None,
            }],
        );
        let Value::SelectorList(list) = decode(&raw).unwrap().value else {
            panic!("expected a selector list");
        };
        assert_eq!(list.element_type, Discriminator::LabelList);
        assert_eq!(list.elements.len(), 1);
        let selector = &list.elements[0];
        assert_eq!(
            selector.entries[0].value,
            Value::LabelList(vec![Label::new("//a:linux")])
        );
        assert_eq!(selector.default_entry().map(|e| &e.value), Some(&Value::LabelList(vec![])));
    }

    #[test]
    fn default_license_branch_without_payload_is_zero() {
        let raw = selector_attr(
            Some(Discriminator::License),
            vec![RawSelector {
                entries: vec![RawSelectorEntry {
                    label: Some(SelectorEntry::DEFAULT_CONDITION.to_string()),
                    is_default_value: Some(true),
                    ..Default::default()
                }],
                has_default_value: Some(true),
                no_match_error: None,
            }],
        );
        let Value::SelectorList(list) = decode(&raw).unwrap().value else {
            panic!("expected a selector list");
        };
        assert_eq!(
            list.elements[0].entries[0].value,
            Value::License(License::default())
        );
    }

    #[test]
    fn non_default_license_branch_requires_payload() {
        let raw = selector_attr(
            Some(Discriminator::License),
            vec![RawSelector {
                entries: vec![RawSelectorEntry {
                    label: Some("//cfg:x".to_string()),
                    ..Default::default()
                }],
                ..Default::default()
            }],
        );
        assert!(matches!(
            decode(&raw).unwrap_err(),
            DecodeError::MissingPayload {
                field: "license",
                ..
            }
        ));
    }

    #[test]
    fn nested_selector_list_rejected() {
        let raw = selector_attr(
            Some(Discriminator::SelectorList),
            vec![RawSelector {
                entries: vec![entry("//cfg:x", &[])],
                ..Default::default()
            }],
        );
        assert!(matches!(
            decode(&raw).unwrap_err(),
            DecodeError::UnsupportedVariant {
                what: "selector list",
                ..
            }
        ));
    }

    #[test]
    fn selector_list_without_type_rejected() {
        let raw = selector_attr(
            None,
            vec![RawSelector {
                entries: vec![entry("//cfg:x", &[])],
                ..Default::default()
            }],
        );
        assert!(matches!(
            decode(&raw).unwrap_err(),
            DecodeError::UnsupportedVariant { .. }
        ));
    }

    #[test]
    fn empty_selector_list_and_selector_rejected() {
        let raw = selector_attr(Some(Discriminator::LabelList), vec![]);
        assert!(matches!(
            decode(&raw).unwrap_err(),
            DecodeError::UnsupportedVariant {
                what: "selector list",
                ..
            }
        ));
        let raw = selector_attr(Some(Discriminator::LabelList), vec![RawSelector::default()]);
        assert!(matches!(
            decode(&raw).unwrap_err(),
            DecodeError::UnsupportedVariant {
                what: "selector",
                ..
            }
        ));
    }

    #[test]
    fn selector_list_requires_payload() {
        let raw = attr("deps", Discriminator::SelectorList);
        assert!(matches!(
            decode(&raw).unwrap_err(),
            DecodeError::MissingPayload {
                field: "selector_list",
                ..
            }
        ));
    }

    #[test]
    fn selector_entry_shape_checked_against_element_type() {
        let raw = selector_attr(
            Some(Discriminator::Boolean),
            vec![RawSelector {
                entries: vec![entry("//cfg:x", &["oops"])],
                ..Default::default()
            }],
        );
        assert!(matches!(
            decode(&raw).unwrap_err(),
            DecodeError::ShapeMismatch {
                expected: Discriminator::Boolean,
                actual: "string_list_value",
                ..
            }
        ));
    }
}
