//! Department Value Objects
//!
//! Business identifier, materialized path and depth of a department node.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::{is_blank, ValidationError};

/// Human-assigned department code (alias).
///
/// # Invariants
/// - Non-empty
/// - ASCII Latin letters only (`A-Z`, `a-z`)
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct DepartmentIdentifier(String);

impl DepartmentIdentifier {
    /// Create a validated business identifier
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();

        if is_blank(&value) {
            return Err(ValidationError::new("identifier", "cannot be blank"));
        }
        if !value.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(ValidationError::new(
                "identifier",
                "must contain only Latin letters",
            ));
        }

        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Case-insensitive comparison, used for whole-tree uniqueness checks
    pub fn matches(&self, other: &DepartmentIdentifier) -> bool {
        self.0.eq_ignore_ascii_case(&other.0)
    }
}

impl fmt::Display for DepartmentIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for DepartmentIdentifier {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for DepartmentIdentifier {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<DepartmentIdentifier> for String {
    fn from(identifier: DepartmentIdentifier) -> Self {
        identifier.0
    }
}

/// Materialized path of a department in the tree.
///
/// The primitive only guarantees the path is not blank; its structure is
/// owned by [`crate::domain::services::DepartmentHierarchy`].
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct DepartmentPath(String);

impl DepartmentPath {
    /// Create a validated path
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        if is_blank(&value) {
            return Err(ValidationError::new("path", "cannot be blank"));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Append a segment below this path
    pub fn join(&self, separator: char, segment: &str) -> Self {
        Self(format!("{}{}{}", self.0, separator, segment))
    }

    /// Split the path back into its segments
    pub fn segments(&self, separator: char) -> impl Iterator<Item = &str> {
        self.0.split(separator)
    }

    /// True if `other` lies strictly below this path
    pub fn is_ancestor_of(&self, other: &DepartmentPath, separator: char) -> bool {
        other
            .0
            .strip_prefix(self.0.as_str())
            .map(|rest| rest.starts_with(separator))
            .unwrap_or(false)
    }
}

impl fmt::Display for DepartmentPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for DepartmentPath {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for DepartmentPath {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<DepartmentPath> for String {
    fn from(path: DepartmentPath) -> Self {
        path.0
    }
}

/// Depth of a department in the tree; the root has depth 1.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "i16", into = "i16")]
pub struct DepartmentDepth(i16);

impl DepartmentDepth {
    /// Depth of a root department
    pub const ROOT: Self = Self(1);

    /// Create a validated depth
    pub fn new(value: i16) -> Result<Self, ValidationError> {
        if value < 1 {
            return Err(ValidationError::new(
                "depth",
                format!("must be a positive number, got {}", value),
            ));
        }
        Ok(Self(value))
    }

    pub fn value(&self) -> i16 {
        self.0
    }

    pub fn is_root(&self) -> bool {
        self.0 == 1
    }

    /// Depth of a direct child, `None` on overflow
    pub fn next(&self) -> Option<Self> {
        self.0.checked_add(1).map(Self)
    }
}

impl fmt::Display for DepartmentDepth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<i16> for DepartmentDepth {
    type Error = ValidationError;

    fn try_from(value: i16) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<DepartmentDepth> for i16 {
    fn from(depth: DepartmentDepth) -> Self {
        depth.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_identifier_latin_only() {
        assert_eq!(DepartmentIdentifier::new("ENG").unwrap().as_str(), "ENG");
        assert!(DepartmentIdentifier::new("Eng").is_ok());
        assert!(DepartmentIdentifier::new("ENG1").is_err());
        assert!(DepartmentIdentifier::new("EN G").is_err());
        assert!(DepartmentIdentifier::new("ОТД").is_err());
        assert!(DepartmentIdentifier::new("eng-ops").is_err());
    }

    #[test]
    fn test_identifier_blank_fails() {
        let err = DepartmentIdentifier::new("  ").unwrap_err();
        assert_eq!(err.field(), "identifier");
        assert!(DepartmentIdentifier::new("").is_err());
    }

    #[test]
    fn test_identifier_matches_ignores_case() {
        let a = DepartmentIdentifier::new("Eng").unwrap();
        let b = DepartmentIdentifier::new("ENG").unwrap();
        assert!(a.matches(&b));
        assert_ne!(a, b);
    }

    #[test]
    fn test_path_not_blank() {
        assert!(DepartmentPath::new("root/eng").is_ok());
        assert!(DepartmentPath::new("").is_err());
        assert!(DepartmentPath::new(" \t").is_err());
    }

    #[test]
    fn test_path_join_and_segments() {
        let root = DepartmentPath::new("root").unwrap();
        let eng = root.join('/', "eng");
        assert_eq!(eng.as_str(), "root/eng");
        assert_eq!(eng.segments('/').collect::<Vec<_>>(), vec!["root", "eng"]);
    }

    #[test]
    fn test_path_ancestry() {
        let root = DepartmentPath::new("root").unwrap();
        let eng = DepartmentPath::new("root/eng").unwrap();
        let sibling = DepartmentPath::new("rootless").unwrap();

        assert!(root.is_ancestor_of(&eng, '/'));
        assert!(!eng.is_ancestor_of(&root, '/'));
        assert!(!root.is_ancestor_of(&root, '/'));
        assert!(!root.is_ancestor_of(&sibling, '/'));
    }

    #[test]
    fn test_depth() {
        assert_eq!(DepartmentDepth::new(1).unwrap(), DepartmentDepth::ROOT);
        assert!(DepartmentDepth::new(0).is_err());
        assert!(DepartmentDepth::new(-1).is_err());
        assert_eq!(DepartmentDepth::ROOT.next().unwrap().value(), 2);
        assert!(DepartmentDepth::new(i16::MAX).unwrap().next().is_none());
    }

    #[test]
    fn test_depth_deserialize_validates() {
        assert!(serde_json::from_str::<DepartmentDepth>("0").is_err());
        assert_eq!(serde_json::from_str::<DepartmentDepth>("3").unwrap().value(), 3);
    }

    proptest! {
        #[test]
        fn prop_latin_identifier_is_accepted(s in "[A-Za-z]{1,64}") {
            let identifier = DepartmentIdentifier::new(s.clone()).unwrap();
            prop_assert_eq!(identifier.as_str(), s.as_str());
        }

        #[test]
        fn prop_identifier_with_non_latin_is_rejected(
            prefix in "[A-Za-z]{0,8}",
            bad in "[0-9 _\\-ЖЯЁé]",
            suffix in "[A-Za-z]{0,8}",
        ) {
            let candidate = format!("{}{}{}", prefix, bad, suffix);
            prop_assert!(DepartmentIdentifier::new(candidate).is_err());
        }

        #[test]
        fn prop_depth_accepts_positive_only(value in any::<i16>()) {
            prop_assert_eq!(DepartmentDepth::new(value).is_ok(), value >= 1);
        }
    }
}
