//! A borrowed view over the value fields shared by `Attribute` and
//! `Attribute.SelectorEntry`.
//!
//! The two messages carry the same value fields under different tags; the
//! value decoder works on [`Payload`] so it is written once.

use bzlq_proto::blaze_query::{
    self as raw, FilesetEntry, LabelDictUnaryEntry, LabelKeyedStringDictEntry, LabelListDictEntry,
    StringDictEntry, StringListDictEntry,
};

/// Borrowed value fields of one attribute or selector entry.
#[derive(Debug, Clone, Copy)]
pub struct Payload<'a> {
    pub int_value: Option<i32>,
    pub string_value: Option<&'a str>,
    pub boolean_value: Option<bool>,
    pub tristate_value: Option<i32>,
    pub string_list_value: &'a [String],
    pub license: Option<&'a raw::License>,
    pub string_dict_value: &'a [StringDictEntry],
    pub fileset_list_value: &'a [FilesetEntry],
    pub label_list_dict_value: &'a [LabelListDictEntry],
    pub string_list_dict_value: &'a [StringListDictEntry],
    pub int_list_value: &'a [i32],
    pub label_dict_unary_value: &'a [LabelDictUnaryEntry],
    pub label_keyed_string_dict_value: &'a [LabelKeyedStringDictEntry],
    pub selector_list: Option<&'a raw::attribute::SelectorList>,
}

/// A value field, named as on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Int,
    String,
    Boolean,
    Tristate,
    StringList,
    License,
    StringDict,
    FilesetList,
    LabelListDict,
    StringListDict,
    IntList,
    LabelDictUnary,
    LabelKeyedStringDict,
    SelectorList,
}

impl Field {
    pub fn as_str(self) -> &'static str {
        match self {
            Field::Int => "int_value",
            Field::String => "string_value",
            Field::Boolean => "boolean_value",
            Field::Tristate => "tristate_value",
            Field::StringList => "string_list_value",
            Field::License => "license",
            Field::StringDict => "string_dict_value",
            Field::FilesetList => "fileset_list_value",
            Field::LabelListDict => "label_list_dict_value",
            Field::StringListDict => "string_list_dict_value",
            Field::IntList => "int_list_value",
            Field::LabelDictUnary => "label_dict_unary_value",
            Field::LabelKeyedStringDict => "label_keyed_string_dict_value",
            Field::SelectorList => "selector_list",
        }
    }
}

impl Payload<'_> {
    /// Returns every populated field. A repeated field counts as populated
    /// only when non-empty.
    pub fn populated(&self) -> Vec<Field> {
        let checks = [
            (Field::Int, self.int_value.is_some()),
            (Field::String, self.string_value.is_some()),
            (Field::Boolean, self.boolean_value.is_some()),
            (Field::Tristate, self.tristate_value.is_some()),
            (Field::StringList, !self.string_list_value.is_empty()),
            (Field::License, self.license.is_some()),
            (Field::StringDict, !self.string_dict_value.is_empty()),
            (Field::FilesetList, !self.fileset_list_value.is_empty()),
            (Field::LabelListDict, !self.label_list_dict_value.is_empty()),
            (Field::StringListDict, !self.string_list_dict_value.is_empty()),
            (Field::IntList, !self.int_list_value.is_empty()),
            (Field::LabelDictUnary, !self.label_dict_unary_value.is_empty()),
            (
                Field::LabelKeyedStringDict,
                !self.label_keyed_string_dict_value.is_empty(),
            ),
            (Field::SelectorList, self.selector_list.is_some()),
        ];
        checks
            .into_iter()
            .filter_map(|(field, set)| set.then_some(field))
            .collect()
    }
}

/// Messages that carry attribute value fields.
pub trait HasPayload {
    /// Borrows the value fields.
    fn payload(&self) -> Payload<'_>;
}

impl HasPayload for raw::Attribute {
    fn payload(&self) -> Payload<'_> {
        Payload {
            int_value: self.int_value,
            string_value: self.string_value.as_deref(),
            boolean_value: self.boolean_value,
            tristate_value: self.tristate_value,
            string_list_value: &self.string_list_value,
            license: self.license.as_ref(),
            string_dict_value: &self.string_dict_value,
            fileset_list_value: &self.fileset_list_value,
            label_list_dict_value: &self.label_list_dict_value,
            string_list_dict_value: &self.string_list_dict_value,
            int_list_value: &self.int_list_value,
            label_dict_unary_value: &self.label_dict_unary_value,
            label_keyed_string_dict_value: &self.label_keyed_string_dict_value,
            selector_list: self.selector_list.as_ref(),
        }
    }
}

impl HasPayload for raw::attribute::SelectorEntry {
    fn payload(&self) -> Payload<'_> {
        Payload {
            int_value: self.int_value,
            string_value: self.string_value.as_deref(),
            boolean_value: self.boolean_value,
            tristate_value: self.tristate_value,
            string_list_value: &self.string_list_value,
            license: self.license.as_ref(),
            string_dict_value: &self.string_dict_value,
            fileset_list_value: &self.fileset_list_value,
            label_list_dict_value: &self.label_list_dict_value,
            string_list_dict_value: &self.string_list_dict_value,
            int_list_value: &self.int_list_value,
            label_dict_unary_value: &self.label_dict_unary_value,
            label_keyed_string_dict_value: &self.label_keyed_string_dict_value,
            selector_list: None,
        }
    }
}
