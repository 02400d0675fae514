//! Error types for decoding.
//!
//! Every error is fatal to the decode call that raised it: downstream graph
//! consumers assume completeness, so there is no partial result.

use std::fmt;

use bzlq_model::Discriminator;

/// The result type of every decoding operation.
pub type DecodeResult<T> = Result<T, DecodeError>;

/// The kind of entity an ID refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    /// An interned path segment.
    PathFragment,
    /// An artifact.
    Artifact,
    /// A dep-set.
    DepSet,
    /// A configuration.
    Configuration,
    /// An aspect descriptor.
    AspectDescriptor,
    /// An action's owning target.
    Target,
    /// A rule class.
    RuleClass,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            EntityKind::PathFragment => "path fragment",
            EntityKind::Artifact => "artifact",
            EntityKind::DepSet => "dep-set",
            EntityKind::Configuration => "configuration",
            EntityKind::AspectDescriptor => "aspect descriptor",
            EntityKind::Target => "target",
            EntityKind::RuleClass => "rule class",
        })
    }
}

/// Why a reference could not be resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReferenceFault {
    /// The ID is defined nowhere in the input.
    Undefined,
    /// The ID is defined, but only after the record that needs it.
    Forward,
}

impl fmt::Display for ReferenceFault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ReferenceFault::Undefined => "never defined",
            ReferenceFault::Forward => "only defined later (forward reference)",
        })
    }
}

/// Errors that can occur while decoding query output.
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    /// The buffer is not a valid protobuf message of the expected type.
    #[error("malformed protobuf: {0}")]
    Wire(#[from] prost::DecodeError),

    /// An ID reference could not be resolved.
    #[error("{referrer} references {entity} {id}, which is {fault}")]
    MalformedReference {
        /// Kind of the referenced entity.
        entity: EntityKind,
        /// The unresolved wire ID.
        id: u32,
        /// The record and field holding the reference.
        referrer: String,
        /// Whether the ID is missing or merely out of order.
        fault: ReferenceFault,
    },

    /// Parent links loop back on themselves.
    #[error("{entity} {id} is part of a reference cycle")]
    ReferenceCycle {
        /// Kind of the entity.
        entity: EntityKind,
        /// A wire ID on the cycle.
        id: u32,
    },

    /// The same wire ID is defined twice.
    #[error("{entity} {id} is defined more than once")]
    DuplicateId {
        /// Kind of the entity.
        entity: EntityKind,
        /// The repeated wire ID.
        id: u32,
    },

    /// A discriminator value the schema defines but this decoder rejects.
    #[error("unsupported {what} {value} in {context}")]
    UnsupportedVariant {
        /// What kind of discriminator was rejected, e.g.
        /// [`DecodeError::ATTRIBUTE_TYPE`].
        what: &'static str,
        /// The rejected value.
        value: String,
        /// Where it was found.
        context: String,
    },

    /// An attribute carries a field that does not belong to its type.
    #[error("{context} is declared {expected} but carries {actual}")]
    ShapeMismatch {
        /// The attribute, and the target it belongs to.
        context: String,
        /// The declared type.
        expected: Discriminator,
        /// The populated field that contradicts it.
        actual: &'static str,
    },

    /// A sub-message required by a discriminator is absent or empty.
    #[error("{context} has no {field}")]
    MissingPayload {
        /// The record missing its payload.
        context: String,
        /// The expected field.
        field: &'static str,
    },

    /// An enum field holds a number outside its declared values.
    #[error("invalid {field} value {value} in {context}")]
    InvalidEnum {
        /// The enum field.
        field: &'static str,
        /// The wire number.
        value: i32,
        /// Where it was found.
        context: String,
    },

    /// A mapping contains the same key twice.
    #[error("duplicate key '{key}' in {context}")]
    DuplicateKey {
        /// The mapping.
        context: String,
        /// The repeated key.
        key: String,
    },

    /// The top-level message kind is not supported.
    #[error("{message} decoding is not implemented")]
    UnsupportedTopLevel {
        /// The unsupported message kind.
        message: &'static str,
    },
}

impl DecodeError {
    /// The `what` of an unsupported attribute type.
    pub const ATTRIBUTE_TYPE: &'static str = "attribute type";

    /// Returns `true` for errors raised by an unsupported attribute type,
    /// which callers may opt to skip.
    pub fn is_unsupported_attribute(&self) -> bool {
        matches!(
            self,
            DecodeError::UnsupportedVariant { what, .. } if *what == Self::ATTRIBUTE_TYPE
        )
    }
}
