//! Rule attribute values.
//!
//! Bazel encodes every attribute in a single message whose `type` field says
//! which of its value fields is meaningful. Here that becomes the closed
//! [`Value`] enum: the discriminator of an [`Attribute`] is derived from its
//! value, so the two can never disagree.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use bzlq_common::{Label, Output};
use serde::Serialize;

/// Attribute type tags, with their `build.proto` wire numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Discriminator {
    /// A 32-bit integer.
    Integer,
    /// A string.
    String,
    /// A label.
    Label,
    /// A declared output name.
    Output,
    /// A list of strings.
    StringList,
    /// A list of labels.
    LabelList,
    /// A list of output names.
    OutputList,
    /// An unordered set of distribution names.
    DistributionSet,
    /// A license declaration.
    License,
    /// A string-to-string dictionary.
    StringDict,
    /// A list of fileset entries.
    FilesetEntryList,
    /// A string-to-label-list dictionary.
    LabelListDict,
    /// A string-to-string-list dictionary.
    StringListDict,
    /// A boolean.
    Boolean,
    /// A yes/no/auto value.
    Tristate,
    /// A list of integers.
    IntegerList,
    /// A build-extension type without a payload.
    Unknown,
    /// A string-to-label dictionary.
    LabelDictUnary,
    /// A concatenation of `select()` expressions.
    SelectorList,
    /// A label-to-string dictionary.
    LabelKeyedStringDict,
    /// A removed string-to-string type without a payload.
    DeprecatedStringDictUnary,
}

impl Discriminator {
    /// Every discriminator, in wire-number order.
    pub const ALL: [Discriminator; 21] = [
        Discriminator::Integer,
        Discriminator::String,
        Discriminator::Label,
        Discriminator::Output,
        Discriminator::StringList,
        Discriminator::LabelList,
        Discriminator::OutputList,
        Discriminator::DistributionSet,
        Discriminator::License,
        Discriminator::StringDict,
        Discriminator::FilesetEntryList,
        Discriminator::LabelListDict,
        Discriminator::StringListDict,
        Discriminator::Boolean,
        Discriminator::Tristate,
        Discriminator::IntegerList,
        Discriminator::DeprecatedStringDictUnary,
        Discriminator::Unknown,
        Discriminator::LabelDictUnary,
        Discriminator::SelectorList,
        Discriminator::LabelKeyedStringDict,
    ];

    /// Maps a wire number to a discriminator.
    pub fn from_wire(value: i32) -> Option<Self> {
        let index = usize::try_from(value).ok()?.checked_sub(1)?;
        Self::ALL.get(index).copied()
    }

    /// Returns the wire number.
    pub fn to_wire(self) -> i32 {
        match self {
            Discriminator::Integer => 1,
            Discriminator::String => 2,
            Discriminator::Label => 3,
            Discriminator::Output => 4,
            Discriminator::StringList => 5,
            Discriminator::LabelList => 6,
            Discriminator::OutputList => 7,
            Discriminator::DistributionSet => 8,
            Discriminator::License => 9,
            Discriminator::StringDict => 10,
            Discriminator::FilesetEntryList => 11,
            Discriminator::LabelListDict => 12,
            Discriminator::StringListDict => 13,
            Discriminator::Boolean => 14,
            Discriminator::Tristate => 15,
            Discriminator::IntegerList => 16,
            Discriminator::DeprecatedStringDictUnary => 17,
            Discriminator::Unknown => 18,
            Discriminator::LabelDictUnary => 19,
            Discriminator::SelectorList => 20,
            Discriminator::LabelKeyedStringDict => 21,
        }
    }

    /// Returns the `build.proto` spelling, e.g. `LABEL_LIST`.
    pub fn as_str(self) -> &'static str {
        match self {
            Discriminator::Integer => "INTEGER",
            Discriminator::String => "STRING",
            Discriminator::Label => "LABEL",
            Discriminator::Output => "OUTPUT",
            Discriminator::StringList => "STRING_LIST",
            Discriminator::LabelList => "LABEL_LIST",
            Discriminator::OutputList => "OUTPUT_LIST",
            Discriminator::DistributionSet => "DISTRIBUTION_SET",
            Discriminator::License => "LICENSE",
            Discriminator::StringDict => "STRING_DICT",
            Discriminator::FilesetEntryList => "FILESET_ENTRY_LIST",
            Discriminator::LabelListDict => "LABEL_LIST_DICT",
            Discriminator::StringListDict => "STRING_LIST_DICT",
            Discriminator::Boolean => "BOOLEAN",
            Discriminator::Tristate => "TRISTATE",
            Discriminator::IntegerList => "INTEGER_LIST",
            Discriminator::Unknown => "UNKNOWN",
            Discriminator::LabelDictUnary => "LABEL_DICT_UNARY",
            Discriminator::SelectorList => "SELECTOR_LIST",
            Discriminator::LabelKeyedStringDict => "LABEL_KEYED_STRING_DICT",
            Discriminator::DeprecatedStringDictUnary => "DEPRECATED_STRING_DICT_UNARY",
        }
    }

    /// Returns `false` for tags that carry no decodable payload.
    pub fn is_supported(self) -> bool {
        !matches!(
            self,
            Discriminator::Unknown | Discriminator::DeprecatedStringDictUnary
        )
    }
}

impl fmt::Display for Discriminator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Value of a tristate attribute such as `stamp`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Tristate {
    /// Explicitly disabled.
    No,
    /// Explicitly enabled.
    Yes,
    /// Left to the rule.
    Auto,
}

impl Tristate {
    /// Maps a wire number (0, 1, 2) to a tristate.
    pub fn from_wire(value: i32) -> Option<Self> {
        match value {
            0 => Some(Tristate::No),
            1 => Some(Tristate::Yes),
            2 => Some(Tristate::Auto),
            _ => None,
        }
    }

    /// Maps the `int_value` mirror Bazel writes next to a tristate
    /// (-1 = auto, 0 = no, 1 = yes).
    pub fn from_int_mirror(value: i32) -> Option<Self> {
        match value {
            -1 => Some(Tristate::Auto),
            0 => Some(Tristate::No),
            1 => Some(Tristate::Yes),
            _ => None,
        }
    }
}

/// A license declaration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct License {
    /// License types, e.g. `notice`.
    pub types: Vec<String>,
    /// License exception labels.
    pub exceptions: Vec<String>,
}

/// How a fileset treats symlinked sources.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SymlinkBehavior {
    /// Copy the link.
    Copy,
    /// Copy what the link points to.
    Dereference,
}

impl SymlinkBehavior {
    /// Maps a wire number (1, 2) to a behavior.
    pub fn from_wire(value: i32) -> Option<Self> {
        match value {
            1 => Some(SymlinkBehavior::Copy),
            2 => Some(SymlinkBehavior::Dereference),
            _ => None,
        }
    }
}

/// One entry of a `Fileset` rule.
///
/// `files_present`, `symlink_behavior` and `strip_prefix` keep "absent"
/// distinct from "present but empty".
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilesetEntry {
    /// Label of the source target.
    pub source: Label,
    /// Destination directory within the fileset.
    pub destination_directory: String,
    /// Whether `files =` was specified at all.
    pub files_present: Option<bool>,
    /// File labels to include.
    pub files: Vec<Label>,
    /// Relative paths to exclude.
    pub excludes: Vec<String>,
    /// Symlink handling, when given.
    pub symlink_behavior: Option<SymlinkBehavior>,
    /// Prefix to strip from file paths, when given.
    pub strip_prefix: Option<String>,
}

/// A concatenation of `select()` expressions, e.g. `select(a) + select(b)`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SelectorList {
    /// Type every selector evaluates to; never [`Discriminator::SelectorList`].
    pub element_type: Discriminator,
    /// The selectors, never empty.
    pub elements: Vec<Selector>,
}

/// A single `select()` expression.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Selector {
    /// Condition entries, never empty.
    pub entries: Vec<SelectorEntry>,
    /// Whether the selector has a default condition.
    pub has_default_value: Option<bool>,
    /// Error reported when no condition matches.
    pub no_match_error: Option<String>,
}

impl Selector {
    /// Returns the entry for `//conditions:default`, if present.
    pub fn default_entry(&self) -> Option<&SelectorEntry> {
        self.entries
            .iter()
            .find(|e| e.condition_label.as_deref() == Some(SelectorEntry::DEFAULT_CONDITION))
    }
}

/// One `condition: value` pair of a selector.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SelectorEntry {
    /// `config_setting` label, or [`SelectorEntry::DEFAULT_CONDITION`].
    pub condition_label: Option<String>,
    /// True when the value was written as `None` and is the type's default.
    pub is_default_value: Option<bool>,
    /// The value, of the enclosing list's element type.
    pub value: Value,
}

impl SelectorEntry {
    /// The pseudo-label of the fallback branch.
    pub const DEFAULT_CONDITION: &'static str = "//conditions:default";
}

/// A decoded attribute value.
///
/// The variant always corresponds to the attribute's [`Discriminator`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", content = "value", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Value {
    /// `INTEGER`.
    Integer(i32),
    /// `STRING`.
    String(String),
    /// `LABEL`.
    Label(Label),
    /// `OUTPUT`.
    Output(Output),
    /// `STRING_LIST`.
    StringList(Vec<String>),
    /// `LABEL_LIST`.
    LabelList(Vec<Label>),
    /// `OUTPUT_LIST`.
    OutputList(Vec<Output>),
    /// `DISTRIBUTION_SET`.
    DistributionSet(BTreeSet<String>),
    /// `LICENSE`.
    License(License),
    /// `STRING_DICT`.
    StringDict(BTreeMap<String, String>),
    /// `FILESET_ENTRY_LIST`.
    FilesetEntryList(Vec<FilesetEntry>),
    /// `LABEL_LIST_DICT`.
    LabelListDict(BTreeMap<String, Vec<Label>>),
    /// `STRING_LIST_DICT`.
    StringListDict(BTreeMap<String, Vec<String>>),
    /// `BOOLEAN`.
    Boolean(bool),
    /// `TRISTATE`.
    Tristate(Tristate),
    /// `INTEGER_LIST`.
    IntegerList(Vec<i32>),
    /// `LABEL_DICT_UNARY`.
    LabelDictUnary(BTreeMap<String, Label>),
    /// `SELECTOR_LIST`.
    SelectorList(SelectorList),
    /// `LABEL_KEYED_STRING_DICT`.
    LabelKeyedStringDict(BTreeMap<Label, String>),
}

impl Value {
    /// Returns the discriminator naming this value's shape.
    pub fn discriminator(&self) -> Discriminator {
        match self {
            Value::Integer(_) => Discriminator::Integer,
            Value::String(_) => Discriminator::String,
            Value::Label(_) => Discriminator::Label,
            Value::Output(_) => Discriminator::Output,
            Value::StringList(_) => Discriminator::StringList,
            Value::LabelList(_) => Discriminator::LabelList,
            Value::OutputList(_) => Discriminator::OutputList,
            Value::DistributionSet(_) => Discriminator::DistributionSet,
            Value::License(_) => Discriminator::License,
            Value::StringDict(_) => Discriminator::StringDict,
            Value::FilesetEntryList(_) => Discriminator::FilesetEntryList,
            Value::LabelListDict(_) => Discriminator::LabelListDict,
            Value::StringListDict(_) => Discriminator::StringListDict,
            Value::Boolean(_) => Discriminator::Boolean,
            Value::Tristate(_) => Discriminator::Tristate,
            Value::IntegerList(_) => Discriminator::IntegerList,
            Value::LabelDictUnary(_) => Discriminator::LabelDictUnary,
            Value::SelectorList(_) => Discriminator::SelectorList,
            Value::LabelKeyedStringDict(_) => Discriminator::LabelKeyedStringDict,
        }
    }

    /// Returns the zero value of a discriminator, as Bazel uses for selector
    /// branches written as `None`.
    ///
    /// Types without a payload, and `SELECTOR_LIST`, have no zero value.
    pub fn zero(discriminator: Discriminator) -> Option<Value> {
        let value = match discriminator {
            Discriminator::Integer => Value::Integer(0),
            Discriminator::String => Value::String(String::new()),
            Discriminator::Label => Value::Label(Label::new("")),
            Discriminator::Output => Value::Output(Output::new("")),
            Discriminator::StringList => Value::StringList(Vec::new()),
            Discriminator::LabelList => Value::LabelList(Vec::new()),
            Discriminator::OutputList => Value::OutputList(Vec::new()),
            Discriminator::DistributionSet => Value::DistributionSet(BTreeSet::new()),
            Discriminator::License => Value::License(License::default()),
            Discriminator::StringDict => Value::StringDict(BTreeMap::new()),
            Discriminator::FilesetEntryList => Value::FilesetEntryList(Vec::new()),
            Discriminator::LabelListDict => Value::LabelListDict(BTreeMap::new()),
            Discriminator::StringListDict => Value::StringListDict(BTreeMap::new()),
            Discriminator::Boolean => Value::Boolean(false),
            Discriminator::Tristate => Value::Tristate(Tristate::Auto),
            Discriminator::IntegerList => Value::IntegerList(Vec::new()),
            Discriminator::LabelDictUnary => Value::LabelDictUnary(BTreeMap::new()),
            Discriminator::LabelKeyedStringDict => Value::LabelKeyedStringDict(BTreeMap::new()),
            Discriminator::SelectorList
            | Discriminator::Unknown
            | Discriminator::DeprecatedStringDictUnary => return None,
        };
        Some(value)
    }

    /// Returns every label the value mentions, including inside selectors
    /// and fileset entries.
    pub fn labels(&self) -> Vec<&Label> {
        let mut out = Vec::new();
        self.collect_labels(&mut out);
        out
    }

    fn collect_labels<'a>(&'a self, out: &mut Vec<&'a Label>) {
        match self {
            Value::Label(l) => out.push(l),
            Value::LabelList(ls) => out.extend(ls),
            Value::LabelListDict(d) => out.extend(d.values().flatten()),
            Value::LabelDictUnary(d) => out.extend(d.values()),
            Value::LabelKeyedStringDict(d) => out.extend(d.keys()),
            Value::FilesetEntryList(entries) => {
                for entry in entries {
                    out.push(&entry.source);
                    out.extend(&entry.files);
                }
            }
            Value::SelectorList(list) => {
                for selector in &list.elements {
                    for entry in &selector.entries {
                        entry.value.collect_labels(out);
                    }
                }
            }
            _ => {}
        }
    }
}

/// A decoded rule attribute.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Attribute {
    /// Attribute name.
    pub name: String,
    /// Whether the attribute was set explicitly.
    pub explicitly_specified: Option<bool>,
    /// Whether a string value is a non-dependency label.
    pub nodep: Option<bool>,
    /// Aspect the attribute comes from, if reported.
    pub source_aspect_name: Option<String>,
    /// The value; its variant is the attribute's type.
    #[serde(flatten)]
    pub value: Value,
}

impl Attribute {
    /// Returns the attribute's type.
    pub fn discriminator(&self) -> Discriminator {
        self.value.discriminator()
    }
}
