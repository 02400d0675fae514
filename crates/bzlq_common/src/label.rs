//! Label and output-name newtypes.
//!
//! Bazel transmits labels as plain strings; wrapping them keeps a label from
//! being confused with an arbitrary string attribute or with an output name.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A Bazel label such as `//pkg/sub:target` or `@repo//pkg:target`.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Label(String);

impl Label {
    /// Wraps a label string without validating it.
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Returns the label text as transmitted.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the repository name for `@repo//...` labels.
    ///
    /// Canonical `@@repo` names are returned without their sigils. Labels in
    /// the main repository return `None`.
    pub fn repository(&self) -> Option<&str> {
        let rest = self.0.strip_prefix('@')?;
        let rest = rest.trim_start_matches('@');
        Some(rest.split_once("//").map_or(rest, |(repo, _)| repo))
    }

    /// Returns the package path between `//` and `:`.
    ///
    /// Relative labels (`:name`) have an empty package.
    pub fn package(&self) -> &str {
        let Some((_, after)) = self.0.split_once("//") else {
            return "";
        };
        after.split_once(':').map_or(after, |(pkg, _)| pkg)
    }

    /// Returns the target name.
    ///
    /// `//foo/bar` is shorthand for `//foo/bar:bar`, so a label without a
    /// colon is named after the last package segment.
    pub fn name(&self) -> &str {
        if let Some((_, name)) = self.0.rsplit_once(':') {
            return name;
        }
        let package = self.package();
        package.rsplit('/').next().unwrap_or(package)
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Debug for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Label({:?})", self.0)
    }
}

impl From<&str> for Label {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for Label {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// The name of a declared rule output (an `attr.output` value).
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Output(String);

impl Output {
    /// Wraps an output name.
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Returns the output name as transmitted.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Output {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Debug for Output {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Output({:?})", self.0)
    }
}

impl From<&str> for Output {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn main_repo_label_parts() {
        let l = Label::new("//foo/bar:baz");
        assert_eq!(l.repository(), None);
        assert_eq!(l.package(), "foo/bar");
        assert_eq!(l.name(), "baz");
    }

    #[test]
    fn external_repo_label_parts() {
        let l = Label::new("@rules_cc//cc:defs.bzl");
        assert_eq!(l.repository(), Some("rules_cc"));
        assert_eq!(l.package(), "cc");
        assert_eq!(l.name(), "defs.bzl");
    }

    #[test]
    fn canonical_repo_sigils_stripped() {
        let l = Label::new("@@bazel_tools//tools/cpp:toolchain");
        assert_eq!(l.repository(), Some("bazel_tools"));
    }

    #[test]
    fn shorthand_label_named_after_package() {
        let l = Label::new("//foo/bar");
        assert_eq!(l.package(), "foo/bar");
        assert_eq!(l.name(), "bar");
    }

    #[test]
    fn relative_label_has_empty_package() {
        let l = Label::new(":local");
        assert_eq!(l.package(), "");
        assert_eq!(l.name(), "local");
    }

    #[test]
    fn root_package_label() {
        let l = Label::new("//:all");
        assert_eq!(l.package(), "");
        assert_eq!(l.name(), "all");
    }

    #[test]
    fn labels_serialize_as_plain_strings() {
        let json = serde_json::to_string(&Label::new("//a:b")).unwrap();
        assert_eq!(json, "\"//a:b\"");
        let out = serde_json::to_string(&Output::new("out.txt")).unwrap();
        assert_eq!(out, "\"out.txt\"");
    }

    #[test]
    fn debug_distinguishes_label_from_output() {
        assert_eq!(format!("{:?}", Label::new("//a:b")), "Label(\"//a:b\")");
        assert_eq!(format!("{:?}", Output::new("x")), "Output(\"x\")");
    }
}
