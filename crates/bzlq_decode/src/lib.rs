//! Decoder for Bazel's `--output=proto` query formats.
//!
//! Turns the flat, ID-referenced wire messages of `bazel query` and
//! `bazel aquery` into the typed model of [`bzlq_model`]: ID references are
//! resolved into shared pointers, interned paths are rebuilt, and each rule
//! attribute becomes a [`Value`](bzlq_model::Value) whose variant is its
//! declared type. Any malformed or unsupported record fails the whole call.
//!
//! ```no_run
//! let bytes = std::fs::read("aquery.pb")?;
//! for action in bzlq_decode::parse_aquery(&bytes)? {
//!     println!("{} {}", action.mnemonic, action.primary_output.path);
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![warn(missing_docs)]

mod action;
pub mod aquery;
pub mod artifact;
pub mod depset;
pub mod error;
pub mod options;
pub(crate) mod payload;
pub mod path;
pub mod query;
pub mod target;
pub mod value;

pub use aquery::{
    decode_action_graph, decode_action_graph_with, decode_container, parse_aquery,
    parse_aquery_with,
};
pub use artifact::build_artifact_table;
pub use depset::build_dep_set_graph;
pub use error::{DecodeError, DecodeResult, EntityKind, ReferenceFault};
pub use options::{AquerySchema, DecodeOptions, UnsupportedAttributes};
pub use path::PathResolver;
pub use query::{
    decode_targets, parse_cquery, parse_query, parse_query_stream, parse_query_stream_with,
    parse_query_with,
};
pub use target::decode_target;
pub use value::{decode_attribute, ValueContext};
