//! Configuration types deserialized from `bzlq.toml`.

use bzlq_decode::{AquerySchema, DecodeOptions, UnsupportedAttributes};
use serde::Deserialize;

/// The top-level configuration parsed from `bzlq.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BzlqConfig {
    /// How to invoke Bazel.
    #[serde(default)]
    pub bazel: BazelConfig,
    /// How to decode its output.
    #[serde(default)]
    pub decode: DecodeSettings,
}

/// The `[bazel]` section.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BazelConfig {
    /// Executable to run, looked up on `PATH` unless it contains a slash.
    pub binary: String,
    /// Startup options placed before the command, e.g. `--output_base=...`.
    pub startup_flags: Vec<String>,
    /// Command options placed after the command, e.g. `--keep_going`.
    pub flags: Vec<String>,
}

impl Default for BazelConfig {
    fn default() -> Self {
        Self {
            binary: "bazel".to_string(),
            startup_flags: Vec::new(),
            flags: Vec::new(),
        }
    }
}

/// The `[decode]` section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DecodeSettings {
    /// Reject attributes whose populated fields contradict their type.
    pub strict_shapes: bool,
    /// `"fail"` or `"skip"`.
    pub unsupported_attributes: UnsupportedAttributes,
    /// `"current"` or `"pre-scheduling-deps"`.
    pub aquery_schema: AquerySchema,
}

impl Default for DecodeSettings {
    fn default() -> Self {
        let options = DecodeOptions::default();
        Self {
            strict_shapes: options.strict_shapes,
            unsupported_attributes: options.unsupported_attributes,
            aquery_schema: options.aquery_schema,
        }
    }
}

impl DecodeSettings {
    /// Converts the section into decoder options.
    pub fn to_options(&self) -> DecodeOptions {
        DecodeOptions {
            strict_shapes: self.strict_shapes,
            unsupported_attributes: self.unsupported_attributes,
            aquery_schema: self.aquery_schema,
        }
    }
}
