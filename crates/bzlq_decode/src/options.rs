//! Knobs that change how strictly a buffer is decoded.

use serde::Deserialize;

/// What to do with an attribute whose type has no decodable payload.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum UnsupportedAttributes {
    /// Fail the whole decode.
    #[default]
    Fail,
    /// Drop the attribute from its rule and log a warning.
    Skip,
}

/// Which revision of `analysis_v2.proto` produced an `aquery` buffer.
///
/// proto3 cannot tell an empty repeated field from an absent one, so whether
/// `scheduling_dep_dep_set_ids` exists at all has to be stated by the caller.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AquerySchema {
    /// The field exists; actions always get `Some(..)`, possibly empty.
    #[default]
    Current,
    /// The producer predates the field; actions get `None`.
    PreSchedulingDeps,
}

/// Decoding options. [`Default`] is the strictest setting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecodeOptions {
    /// Reject attributes that populate a value field their type does not use.
    pub strict_shapes: bool,
    /// Handling of `UNKNOWN` and `DEPRECATED_STRING_DICT_UNARY` attributes.
    pub unsupported_attributes: UnsupportedAttributes,
    /// Schema revision of `aquery` input.
    pub aquery_schema: AquerySchema,
}

impl Default for DecodeOptions {
    fn default() -> Self {
        Self {
            strict_shapes: true,
            unsupported_attributes: UnsupportedAttributes::Fail,
            aquery_schema: AquerySchema::Current,
        }
    }
}
