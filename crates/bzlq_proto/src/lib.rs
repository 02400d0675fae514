//! Wire schema for Bazel's `--output=proto` formats.
//!
//! The message types mirror `src/main/protobuf/build.proto` (package
//! `blaze_query`) and `src/main/protobuf/analysis_v2.proto` (package
//! `analysis`) field-for-field, so a buffer captured from `bazel query`,
//! `bazel cquery` or `bazel aquery` decodes directly with [`prost::Message`].
//! Nothing here interprets the data; see `bzlq_decode` for that.

#![warn(missing_docs)]

pub mod analysis;
pub mod blaze_query;
pub mod framing;

pub use framing::{decode_delimited, encode_delimited};
pub use prost::{DecodeError, Message};
