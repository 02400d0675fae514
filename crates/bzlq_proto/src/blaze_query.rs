//! Messages of `build.proto` (package `blaze_query`), the `bazel query` schema.
//!
//! This is a proto2 schema: `optional` scalars decode to `Option<T>` so that
//! "absent" and "present but empty" stay distinguishable.

/// License information attached to a rule or source file.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct License {
    /// License type names (e.g. `notice`).
    #[prost(string, repeated, tag = "1")]
    pub license_type: Vec<String>,
    /// License exception labels.
    #[prost(string, repeated, tag = "2")]
    pub exception: Vec<String>,
}

/// One `key: value` pair of a string dictionary.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct StringDictEntry {
    /// Dictionary key.
    #[prost(string, required, tag = "1")]
    pub key: String,
    /// Dictionary value.
    #[prost(string, required, tag = "2")]
    pub value: String,
}

/// One `key: label` pair of a `label_dict_unary` attribute.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct LabelDictUnaryEntry {
    /// Dictionary key.
    #[prost(string, required, tag = "1")]
    pub key: String,
    /// Label value.
    #[prost(string, required, tag = "2")]
    pub value: String,
}

/// One `key: [label, ...]` pair of a `label_list_dict` attribute.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct LabelListDictEntry {
    /// Dictionary key.
    #[prost(string, required, tag = "1")]
    pub key: String,
    /// Label values.
    #[prost(string, repeated, tag = "2")]
    pub value: Vec<String>,
}

/// One `label: string` pair of a `label_keyed_string_dict` attribute.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct LabelKeyedStringDictEntry {
    /// Label key.
    #[prost(string, required, tag = "1")]
    pub key: String,
    /// String value.
    #[prost(string, required, tag = "2")]
    pub value: String,
}

/// One `key: [string, ...]` pair of a `string_list_dict` attribute.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct StringListDictEntry {
    /// Dictionary key.
    #[prost(string, required, tag = "1")]
    pub key: String,
    /// String values.
    #[prost(string, repeated, tag = "2")]
    pub value: Vec<String>,
}

/// An entry of a `Fileset` rule's `entries` attribute.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct FilesetEntry {
    /// Label of the source target files are copied from.
    #[prost(string, required, tag = "1")]
    pub source: String,
    /// Relative destination directory inside the fileset.
    #[prost(string, required, tag = "2")]
    pub destination_directory: String,
    /// Whether `files =` was given; `files = []` and no `files` differ.
    #[prost(bool, optional, tag = "7")]
    pub files_present: Option<bool>,
    /// File labels to include.
    #[prost(string, repeated, tag = "3")]
    pub file: Vec<String>,
    /// Relative paths to exclude.
    #[prost(string, repeated, tag = "4")]
    pub exclude: Vec<String>,
    /// What to do when a source file is a symlink.
    #[prost(enumeration = "fileset_entry::SymlinkBehavior", optional, tag = "5")]
    pub symlink_behavior: Option<i32>,
    /// Prefix to strip; empty and absent differ.
    #[prost(string, optional, tag = "6")]
    pub strip_prefix: Option<String>,
}

/// Nested types of [`FilesetEntry`].
pub mod fileset_entry {
    /// Symlink handling for fileset sources.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
    #[repr(i32)]
    pub enum SymlinkBehavior {
        /// Copy the symlink itself.
        Copy = 1,
        /// Copy the symlink's target.
        Dereference = 2,
    }
}

/// A rule attribute: a type discriminator plus the matching value field.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Attribute {
    /// Attribute name.
    #[prost(string, required, tag = "1")]
    pub name: String,
    /// Whether the attribute was set explicitly in the BUILD file.
    #[prost(bool, optional, tag = "13")]
    pub explicitly_specified: Option<bool>,
    /// Whether a string value is a label that is not a dependency.
    #[prost(bool, optional, tag = "20")]
    pub nodep: Option<bool>,
    /// Aspect the attribute comes from; empty when it does not come from one.
    #[prost(string, optional, tag = "23")]
    pub source_aspect_name: Option<String>,
    /// Which value field is meaningful.
    #[prost(enumeration = "attribute::Discriminator", required, tag = "2")]
    pub r#type: i32,
    /// INTEGER payload (also mirrored for BOOLEAN and TRISTATE).
    #[prost(int32, optional, tag = "3")]
    pub int_value: Option<i32>,
    /// STRING, LABEL and OUTPUT payload.
    #[prost(string, optional, tag = "5")]
    pub string_value: Option<String>,
    /// BOOLEAN payload.
    #[prost(bool, optional, tag = "14")]
    pub boolean_value: Option<bool>,
    /// TRISTATE payload.
    #[prost(enumeration = "attribute::Tristate", optional, tag = "15")]
    pub tristate_value: Option<i32>,
    /// STRING_LIST, LABEL_LIST, OUTPUT_LIST and DISTRIBUTION_SET payload.
    #[prost(string, repeated, tag = "6")]
    pub string_list_value: Vec<String>,
    /// LICENSE payload.
    #[prost(message, optional, tag = "4")]
    pub license: Option<License>,
    /// STRING_DICT payload.
    #[prost(message, repeated, tag = "7")]
    pub string_dict_value: Vec<StringDictEntry>,
    /// FILESET_ENTRY_LIST payload.
    #[prost(message, repeated, tag = "8")]
    pub fileset_list_value: Vec<FilesetEntry>,
    /// LABEL_LIST_DICT payload.
    #[prost(message, repeated, tag = "9")]
    pub label_list_dict_value: Vec<LabelListDictEntry>,
    /// STRING_LIST_DICT payload.
    #[prost(message, repeated, tag = "10")]
    pub string_list_dict_value: Vec<StringListDictEntry>,
    /// INTEGER_LIST payload.
    #[prost(int32, repeated, packed = "false", tag = "17")]
    pub int_list_value: Vec<i32>,
    /// LABEL_DICT_UNARY payload.
    #[prost(message, repeated, tag = "19")]
    pub label_dict_unary_value: Vec<LabelDictUnaryEntry>,
    /// LABEL_KEYED_STRING_DICT payload.
    #[prost(message, repeated, tag = "22")]
    pub label_keyed_string_dict_value: Vec<LabelKeyedStringDictEntry>,
    /// SELECTOR_LIST payload.
    #[prost(message, optional, tag = "21")]
    pub selector_list: Option<attribute::SelectorList>,
}

/// Nested types of [`Attribute`].
pub mod attribute {
    /// Attribute value type tags.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
    #[repr(i32)]
    pub enum Discriminator {
        /// `int_value`.
        Integer = 1,
        /// `string_value`.
        String = 2,
        /// `string_value`.
        Label = 3,
        /// `string_value`.
        Output = 4,
        /// `string_list_value`.
        StringList = 5,
        /// `string_list_value`.
        LabelList = 6,
        /// `string_list_value`.
        OutputList = 7,
        /// `string_list_value`, order is unimportant.
        DistributionSet = 8,
        /// `license`.
        License = 9,
        /// `string_dict_value`.
        StringDict = 10,
        /// `fileset_list_value`.
        FilesetEntryList = 11,
        /// `label_list_dict_value`.
        LabelListDict = 12,
        /// `string_list_dict_value`.
        StringListDict = 13,
        /// `boolean_value`, mirrored in `int_value` and `string_value`.
        Boolean = 14,
        /// `tristate_value`, mirrored in `int_value` and `string_value`.
        Tristate = 15,
        /// `int_list_value`.
        IntegerList = 16,
        /// Build-extension type with no payload.
        Unknown = 18,
        /// `label_dict_unary_value`.
        LabelDictUnary = 19,
        /// `selector_list`.
        SelectorList = 20,
        /// `label_keyed_string_dict_value`.
        LabelKeyedStringDict = 21,
        /// Removed from Bazel; no payload field remains.
        DeprecatedStringDictUnary = 17,
    }

    /// Values of a tristate attribute.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
    #[repr(i32)]
    pub enum Tristate {
        /// Explicitly off.
        No = 0,
        /// Explicitly on.
        Yes = 1,
        /// Decided by the rule.
        Auto = 2,
    }

    /// One `condition: value` pair of a `select()`.
    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct SelectorEntry {
        /// `config_setting` label, or `//conditions:default`.
        #[prost(string, optional, tag = "1")]
        pub label: Option<String>,
        /// True when the value was given as `None` and is the type's default.
        #[prost(bool, optional, tag = "16")]
        pub is_default_value: Option<bool>,
        /// See [`super::Attribute::int_value`].
        #[prost(int32, optional, tag = "2")]
        pub int_value: Option<i32>,
        /// See [`super::Attribute::string_value`].
        #[prost(string, optional, tag = "3")]
        pub string_value: Option<String>,
        /// See [`super::Attribute::boolean_value`].
        #[prost(bool, optional, tag = "4")]
        pub boolean_value: Option<bool>,
        /// See [`super::Attribute::tristate_value`].
        #[prost(enumeration = "Tristate", optional, tag = "5")]
        pub tristate_value: Option<i32>,
        /// See [`super::Attribute::string_list_value`].
        #[prost(string, repeated, tag = "6")]
        pub string_list_value: Vec<String>,
        /// See [`super::Attribute::license`].
        #[prost(message, optional, tag = "7")]
        pub license: Option<super::License>,
        /// See [`super::Attribute::string_dict_value`].
        #[prost(message, repeated, tag = "8")]
        pub string_dict_value: Vec<super::StringDictEntry>,
        /// See [`super::Attribute::fileset_list_value`].
        #[prost(message, repeated, tag = "9")]
        pub fileset_list_value: Vec<super::FilesetEntry>,
        /// See [`super::Attribute::label_list_dict_value`].
        #[prost(message, repeated, tag = "10")]
        pub label_list_dict_value: Vec<super::LabelListDictEntry>,
        /// See [`super::Attribute::string_list_dict_value`].
        #[prost(message, repeated, tag = "11")]
        pub string_list_dict_value: Vec<super::StringListDictEntry>,
        /// See [`super::Attribute::int_list_value`].
        #[prost(int32, repeated, packed = "false", tag = "13")]
        pub int_list_value: Vec<i32>,
        /// See [`super::Attribute::label_dict_unary_value`].
        #[prost(message, repeated, tag = "15")]
        pub label_dict_unary_value: Vec<super::LabelDictUnaryEntry>,
        /// See [`super::Attribute::label_keyed_string_dict_value`].
        #[prost(message, repeated, tag = "14")]
        pub label_keyed_string_dict_value: Vec<super::LabelKeyedStringDictEntry>,
    }

    /// One `select()` expression.
    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct Selector {
        /// Condition entries; never empty.
        #[prost(message, repeated, tag = "1")]
        pub entries: Vec<SelectorEntry>,
        /// Whether any entry is a default value.
        #[prost(bool, optional, tag = "2")]
        pub has_default_value: Option<bool>,
        /// Error message when no condition matches.
        #[prost(string, optional, tag = "3")]
        pub no_match_error: Option<String>,
    }

    /// A `select() + select() + ...` concatenation.
    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct SelectorList {
        /// Element type of every selector; never SELECTOR_LIST.
        #[prost(enumeration = "Discriminator", optional, tag = "1")]
        pub r#type: Option<i32>,
        /// The concatenated selectors; never empty.
        #[prost(message, repeated, tag = "2")]
        pub elements: Vec<Selector>,
    }
}

/// A configured input of a rule, as emitted by `cquery`.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ConfiguredRuleInput {
    /// Input label.
    #[prost(string, optional, tag = "1")]
    pub label: Option<String>,
    /// Checksum of the input's configuration.
    #[prost(string, optional, tag = "2")]
    pub configuration_checksum: Option<String>,
    /// Short ID of the input's configuration.
    #[prost(uint32, optional, tag = "3")]
    pub configuration_id: Option<u32>,
}

/// A rule instance (e.g. `cc_library foo`).
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Rule {
    /// Absolute label of the rule.
    #[prost(string, required, tag = "1")]
    pub name: String,
    /// Rule class, e.g. `java_library`.
    #[prost(string, required, tag = "2")]
    pub rule_class: String,
    /// `<path>:<line>:<column>` where the rule was instantiated.
    #[prost(string, optional, tag = "3")]
    pub location: Option<String>,
    /// All attributes of the rule.
    #[prost(message, repeated, tag = "4")]
    pub attribute: Vec<Attribute>,
    /// Labels of the rule's inputs.
    #[prost(string, repeated, tag = "5")]
    pub rule_input: Vec<String>,
    /// Configured inputs of the rule.
    #[prost(message, repeated, tag = "15")]
    pub configured_rule_input: Vec<ConfiguredRuleInput>,
    /// Labels of the rule's outputs.
    #[prost(string, repeated, tag = "6")]
    pub rule_output: Vec<String>,
    /// Features inherited from the package declaration.
    #[prost(string, repeated, tag = "7")]
    pub default_setting: Vec<String>,
    /// Hash of the Starlark rule definition.
    #[prost(string, optional, tag = "12")]
    pub skylark_environment_hash_code: Option<String>,
    /// Starlark call stack at instantiation, outermost frame first.
    #[prost(string, repeated, tag = "13")]
    pub instantiation_stack: Vec<String>,
    /// Starlark call stack of the rule class definition.
    #[prost(string, repeated, tag = "14")]
    pub definition_stack: Vec<String>,
}

/// A package group.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct PackageGroup {
    /// Label of the group.
    #[prost(string, required, tag = "1")]
    pub name: String,
    /// Package specifications as written in the BUILD file.
    #[prost(string, repeated, tag = "2")]
    pub contained_package: Vec<String>,
    /// Labels of included package groups.
    #[prost(string, repeated, tag = "3")]
    pub included_package_group: Vec<String>,
}

/// An environment group.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct EnvironmentGroup {
    /// Label of the group.
    #[prost(string, required, tag = "1")]
    pub name: String,
    /// Member environment labels.
    #[prost(string, repeated, tag = "2")]
    pub environment: Vec<String>,
    /// Environments rules support when not otherwise specified.
    #[prost(string, repeated, tag = "3")]
    pub default: Vec<String>,
}

/// A file that is an input to the build.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct SourceFile {
    /// Label of the file.
    #[prost(string, required, tag = "1")]
    pub name: String,
    /// `<path>:<line>:<column>` of the file.
    #[prost(string, optional, tag = "2")]
    pub location: Option<String>,
    /// `.bzl` files transitively loaded by a BUILD file.
    #[prost(string, repeated, tag = "3")]
    pub subinclude: Vec<String>,
    /// Package groups named in the file's visibility.
    #[prost(string, repeated, tag = "4")]
    pub package_group: Vec<String>,
    /// Labels named in the file's visibility.
    #[prost(string, repeated, tag = "5")]
    pub visibility_label: Vec<String>,
    /// Package-level features, for BUILD files.
    #[prost(string, repeated, tag = "6")]
    pub feature: Vec<String>,
    /// License of the file.
    #[prost(message, optional, tag = "8")]
    pub license: Option<License>,
    /// Whether the package has errors, for BUILD files.
    #[prost(bool, optional, tag = "9")]
    pub package_contains_errors: Option<bool>,
}

/// A file produced by a rule.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct GeneratedFile {
    /// Label of the file.
    #[prost(string, required, tag = "1")]
    pub name: String,
    /// Label of the generating rule.
    #[prost(string, required, tag = "2")]
    pub generating_rule: String,
    /// `<path>:<line>:<column>` of the file.
    #[prost(string, optional, tag = "3")]
    pub location: Option<String>,
}

/// A query result target; `type` says which payload is set.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Target {
    /// Which payload is meaningful.
    #[prost(enumeration = "target::Discriminator", required, tag = "1")]
    pub r#type: i32,
    /// RULE payload.
    #[prost(message, optional, tag = "2")]
    pub rule: Option<Rule>,
    /// SOURCE_FILE payload.
    #[prost(message, optional, tag = "3")]
    pub source_file: Option<SourceFile>,
    /// GENERATED_FILE payload.
    #[prost(message, optional, tag = "4")]
    pub generated_file: Option<GeneratedFile>,
    /// PACKAGE_GROUP payload.
    #[prost(message, optional, tag = "5")]
    pub package_group: Option<PackageGroup>,
    /// ENVIRONMENT_GROUP payload.
    #[prost(message, optional, tag = "7")]
    pub environment_group: Option<EnvironmentGroup>,
}

/// Nested types of [`Target`].
pub mod target {
    /// Target kinds.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
    #[repr(i32)]
    pub enum Discriminator {
        /// A rule instance.
        Rule = 1,
        /// An input file.
        SourceFile = 2,
        /// A rule output file.
        GeneratedFile = 3,
        /// A package group.
        PackageGroup = 4,
        /// An environment group.
        EnvironmentGroup = 5,
    }
}

/// The output of `bazel query --output=proto`.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct QueryResult {
    /// All targets in query order.
    #[prost(message, repeated, tag = "1")]
    pub target: Vec<Target>,
}
