//! End-to-end `query` and `cquery` decoding.

mod common;

use std::collections::{BTreeMap, BTreeSet};

use bzlq_common::{Label, Output};
use bzlq_decode::{
    parse_cquery, parse_query, parse_query_stream, parse_query_with, DecodeError, DecodeOptions,
    UnsupportedAttributes,
};
use bzlq_model::{
    Discriminator, FilesetEntry, License, Selector, SelectorEntry, SelectorList, SymlinkBehavior,
    Target, TargetKind, Tristate, Value,
};
use bzlq_proto::analysis::{ConfiguredTarget, CqueryResult};
use bzlq_proto::blaze_query::{
    self as raw,
    attribute::{
        Selector as RawSelector, SelectorEntry as RawSelectorEntry, SelectorList as RawSelectorList,
    },
};
use bzlq_proto::encode_delimited;
use common::{attribute, label_list, query_result, rule_target, source_file};
use prost::Message;

#[test]
fn source_file_then_rule_in_order() {
    let bytes = query_result(vec![
        source_file("//pkg:a.cc"),
        rule_target("//pkg:lib", "cc_library", vec![label_list("srcs", &["//pkg:a.cc"])]),
    ]);
    let targets = parse_query(&bytes).unwrap();
    let kinds: Vec<TargetKind> = targets.iter().map(Target::kind).collect();
    assert_eq!(kinds, vec![TargetKind::SourceFile, TargetKind::Rule]);
    assert_eq!(targets[0].name().as_str(), "//pkg:a.cc");
    assert_eq!(targets[1].name().as_str(), "//pkg:lib");
}

#[test]
fn label_list_attribute() {
    let bytes = query_result(vec![rule_target(
        "//app:bin",
        "cc_binary",
        vec![label_list("deps", &["//a:b", "//c:d"])],
    )]);
    let targets = parse_query(&bytes).unwrap();
    let rule = targets[0].as_rule().unwrap();
    let deps = rule.attribute("deps").unwrap();
    assert_eq!(deps.discriminator(), Discriminator::LabelList);
    assert_eq!(
        deps.value,
        Value::LabelList(vec![Label::new("//a:b"), Label::new("//c:d")])
    );
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

/// One populated wire attribute per supported type, with its decoded value.
fn typed_attributes() -> Vec<(raw::Attribute, Value)> {
    vec![
        (
            raw::Attribute {
                int_value: Some(300),
                ..attribute("timeout", Discriminator::Integer)
            },
            Value::Integer(300),
        ),
        (
            raw::Attribute {
                string_value: Some("bin".to_string()),
                ..attribute("name", Discriminator::String)
            },
            Value::String("bin".to_string()),
        ),
        (
            raw::Attribute {
                string_value: Some("//tools:stamp".to_string()),
                ..attribute("linkstamp", Discriminator::Label)
            },
            Value::Label(Label::new("//tools:stamp")),
        ),
        (
            raw::Attribute {
                string_value: Some("gen.h".to_string()),
                ..attribute("out", Discriminator::Output)
            },
            Value::Output(Output::new("gen.h")),
        ),
        (
            raw::Attribute {
                string_list_value: strings(&["-O2"]),
                ..attribute("copts", Discriminator::StringList)
            },
            Value::StringList(strings(&["-O2"])),
        ),
        (
            label_list("deps", &["//a:b"]),
            Value::LabelList(vec![Label::new("//a:b")]),
        ),
        (
            raw::Attribute {
                string_list_value: strings(&["a.o", "b.o"]),
                ..attribute("outs", Discriminator::OutputList)
            },
            Value::OutputList(vec![Output::new("a.o"), Output::new("b.o")]),
        ),
        (
            raw::Attribute {
                string_list_value: strings(&["web", "client"]),
                ..attribute("distribs", Discriminator::DistributionSet)
            },
            Value::DistributionSet(BTreeSet::from(["client".to_string(), "web".to_string()])),
        ),
        (
            raw::Attribute {
                license: Some(raw::License {
                    license_type: strings(&["notice"]),
                    exception: strings(&["//exc:x"]),
                }),
                ..attribute("licenses", Discriminator::License)
            },
            Value::License(License {
                types: strings(&["notice"]),
                exceptions: strings(&["//exc:x"]),
            }),
        ),
        (
            raw::Attribute {
                string_dict_value: vec![raw::StringDictEntry {
                    key: "PATH".to_string(),
                    value: "/bin".to_string(),
                }],
                ..attribute("env", Discriminator::StringDict)
            },
            Value::StringDict(BTreeMap::from([("PATH".to_string(), "/bin".to_string())])),
        ),
        (
            raw::Attribute {
                fileset_list_value: vec![raw::FilesetEntry {
                    source: "//a:files".to_string(),
                    destination_directory: "out".to_string(),
                    files_present: Some(true),
                    file: strings(&["//a:files/x"]),
                    exclude: strings(&["tmp"]),
                    symlink_behavior: Some(1),
                    strip_prefix: None,
                }],
                ..attribute("entries", Discriminator::FilesetEntryList)
            },
            Value::FilesetEntryList(vec![FilesetEntry {
                source: Label::new("//a:files"),
                destination_directory: "out".to_string(),
                files_present: Some(true),
                files: vec![Label::new("//a:files/x")],
                excludes: strings(&["tmp"]),
                symlink_behavior: Some(SymlinkBehavior::Copy),
                strip_prefix: None,
            }]),
        ),
        (
            raw::Attribute {
                label_list_dict_value: vec![raw::LabelListDictEntry {
                    key: "linux".to_string(),
                    value: strings(&["//a:linux", "//a:posix"]),
                }],
                ..attribute("platform_deps", Discriminator::LabelListDict)
            },
            Value::LabelListDict(BTreeMap::from([(
                "linux".to_string(),
                vec![Label::new("//a:linux"), Label::new("//a:posix")],
            )])),
        ),
        (
            raw::Attribute {
                string_list_dict_value: vec![raw::StringListDictEntry {
                    key: "opt".to_string(),
                    value: strings(&["-O3", "-g0"]),
                }],
                ..attribute("mode_flags", Discriminator::StringListDict)
            },
            Value::StringListDict(BTreeMap::from([(
                "opt".to_string(),
                strings(&["-O3", "-g0"]),
            )])),
        ),
        (
            raw::Attribute {
                boolean_value: Some(true),
                int_value: Some(1),
                ..attribute("testonly", Discriminator::Boolean)
            },
            Value::Boolean(true),
        ),
        (
            raw::Attribute {
                tristate_value: Some(1),
                int_value: Some(1),
                ..attribute("stamp", Discriminator::Tristate)
            },
            Value::Tristate(Tristate::Yes),
        ),
        (
            raw::Attribute {
                int_list_value: vec![1, 2, 3],
                ..attribute("shard_ids", Discriminator::IntegerList)
            },
            Value::IntegerList(vec![1, 2, 3]),
        ),
        (
            raw::Attribute {
                label_dict_unary_value: vec![raw::LabelDictUnaryEntry {
                    key: "tool".to_string(),
                    value: "//tools:cc".to_string(),
                }],
                ..attribute("toolmap", Discriminator::LabelDictUnary)
            },
            Value::LabelDictUnary(BTreeMap::from([(
                "tool".to_string(),
                Label::new("//tools:cc"),
            )])),
        ),
        (
            raw::Attribute {
                selector_list: Some(RawSelectorList {
                    r#type: Some(Discriminator::StringList.to_wire()),
                    elements: vec![RawSelector {
                        entries: vec![RawSelectorEntry {
                            label: Some("//cfg:linux".to_string()),
                            string_list_value: strings(&["-pthread"]),
                            ..Default::default()
                        }],
                        has_default_value: Some(false),
                        no_match_error: None,
                    }],
                }),
                ..attribute("linkopts", Discriminator::SelectorList)
            },
            Value::SelectorList(SelectorList {
                element_type: Discriminator::StringList,
                elements: vec![Selector {
                    entries: vec![SelectorEntry {
                        condition_label: Some("//cfg:linux".to_string()),
                        is_default_value: None,
                        value: Value::StringList(strings(&["-pthread"])),
                    }],
                    has_default_value: Some(false),
                    no_match_error: None,
                }],
            }),
        ),
        (
            raw::Attribute {
                label_keyed_string_dict_value: vec![raw::LabelKeyedStringDictEntry {
                    key: "//a:b".to_string(),
                    value: "x".to_string(),
                }],
                ..attribute("data_map", Discriminator::LabelKeyedStringDict)
            },
            Value::LabelKeyedStringDict(BTreeMap::from([(Label::new("//a:b"), "x".to_string())])),
        ),
    ]
}

#[test]
fn every_attribute_decodes_to_its_declared_type() {
    let cases = typed_attributes();
    let supported = Discriminator::ALL.iter().filter(|d| d.is_supported()).count();
    assert_eq!(cases.len(), supported);

    let attributes: Vec<raw::Attribute> = cases.iter().map(|(raw, _)| raw.clone()).collect();
    let raw = rule_target("//app:bin", "cc_binary", attributes);
    let targets = parse_query(&query_result(vec![raw])).unwrap();
    let rule = targets[0].as_rule().unwrap();
    assert_eq!(rule.attributes.len(), cases.len());
    for (decoded, (raw, expected)) in rule.attributes.iter().zip(&cases) {
        assert_eq!(decoded.name, raw.name);
        assert_eq!(decoded.discriminator().to_wire(), raw.r#type, "{}", decoded.name);
        assert_eq!(&decoded.value, expected, "{}", decoded.name);
    }
}

#[test]
fn labels_of_a_rule() {
    let bytes = query_result(vec![rule_target(
        "//app:bin",
        "cc_binary",
        vec![label_list("deps", &["//a:b"]), label_list("data", &["//c:d"])],
    )]);
    let targets = parse_query(&bytes).unwrap();
    let rule = targets[0].as_rule().unwrap();
    let labels: Vec<&str> = rule
        .attributes
        .iter()
        .flat_map(|a| a.value.labels())
        .map(Label::as_str)
        .collect();
    assert_eq!(labels, vec!["//a:b", "//c:d"]);
}

#[test]
fn unsupported_attribute_skip_option() {
    let raw = rule_target(
        "//ext:thing",
        "my_rule",
        vec![
            attribute("mystery", Discriminator::Unknown),
            label_list("deps", &["//a:b"]),
        ],
    );
    let bytes = query_result(vec![raw]);
    assert!(parse_query(&bytes).unwrap_err().is_unsupported_attribute());

    let skip = DecodeOptions {
        unsupported_attributes: UnsupportedAttributes::Skip,
        ..DecodeOptions::default()
    };
    let targets = parse_query_with(&bytes, &skip).unwrap();
    let names: Vec<&str> = targets[0]
        .as_rule()
        .unwrap()
        .attributes
        .iter()
        .map(|a| a.name.as_str())
        .collect();
    assert_eq!(names, vec!["deps"]);
}

#[test]
fn streamed_targets() {
    let targets = vec![
        source_file("//pkg:BUILD"),
        rule_target("//pkg:lib", "cc_library", vec![]),
        source_file("//pkg:a.cc"),
    ];
    let bytes = encode_delimited(&targets);
    let decoded = parse_query_stream(&bytes).unwrap();
    let names: Vec<&str> = decoded.iter().map(|t| t.name().as_str()).collect();
    assert_eq!(names, vec!["//pkg:BUILD", "//pkg:lib", "//pkg:a.cc"]);
}

#[test]
fn truncated_stream_is_a_wire_error() {
    let mut bytes = encode_delimited(&[source_file("//pkg:a.cc")]);
    bytes.pop();
    assert!(matches!(
        parse_query_stream(&bytes).unwrap_err(),
        DecodeError::Wire(_)
    ));
}

#[test]
fn empty_query_result() {
    assert!(parse_query(&[]).unwrap().is_empty());
}

#[test]
fn query_serializes_to_json() {
    let bytes = query_result(vec![rule_target(
        "//pkg:lib",
        "cc_library",
        vec![label_list("srcs", &["//pkg:a.cc"])],
    )]);
    let targets = parse_query(&bytes).unwrap();
    let json = serde_json::to_value(&targets).unwrap();
    assert_eq!(json[0]["kind"], "rule");
    assert_eq!(json[0]["name"], "//pkg:lib");
    assert_eq!(json[0]["attributes"][0]["type"], "LABEL_LIST");
}

#[test]
fn cquery_is_explicitly_unsupported() {
    let result = CqueryResult {
        results: vec![ConfiguredTarget {
            target: Some(source_file("//pkg:a.cc")),
            ..Default::default()
        }],
        configurations: vec![],
    };
    let err = parse_cquery(&result.encode_to_vec()).unwrap_err();
    assert!(matches!(err, DecodeError::UnsupportedTopLevel { message: "cquery" }));

    let empty = parse_cquery(&[]).unwrap_err();
    assert!(matches!(empty, DecodeError::UnsupportedTopLevel { .. }));
}
