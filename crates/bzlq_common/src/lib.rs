//! Shared foundational types used across the bzlq workspace.
//!
//! This crate provides structural content hashing and the label newtypes that
//! Bazel's query protocol uses to name targets and outputs.

#![warn(missing_docs)]

pub mod hash;
pub mod label;

pub use hash::{ContentHash, ContentHasher};
pub use label::{Label, Output};
