//! The set of reference tests that are deliberately left without a counterpart.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use crate::diagnostics::{AuditError, AuditResult};

/// Reference tests known to have no meaningful counterpart in the comparison suite.
pub const DEFAULT_IGNORED: &[&str] = &[
    "test_member_entry_is_hashable_based_on_str_out",
    "test_convert_with_empty_set",
    "test_convert_with_simple_set",
    "test_convert_with_mixed_set",
    "test_convert_with_empty_tuple",
    "test_convert_with_simple_tuple",
    "test_convert_with_mixed_tuple",
];

/// Reference test names reported as ignored regardless of coverage.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IgnoreSet {
    names: HashSet<String>,
}

impl IgnoreSet {
    /// An ignore set holding nothing.
    pub fn empty() -> Self {
        Self::default()
    }

    /// The built-in list, [`DEFAULT_IGNORED`].
    pub fn builtin() -> Self {
        DEFAULT_IGNORED.iter().copied().collect()
    }

    /// Loads a YAML sequence of test names, e.g.
    ///
    /// ```yaml
    /// - test_convert_with_empty_set
    /// - test_convert_with_mixed_tuple
    /// ```
    ///
    /// An empty file is an empty set.
    pub fn from_file<P: AsRef<Path>>(path: P) -> AuditResult<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| AuditError::ReadIgnoreList {
            path: path.to_path_buf(),
            source,
        })?;
        if content.trim().is_empty() {
            return Ok(Self::empty());
        }
        let names: Vec<String> =
            serde_yaml::from_str(&content).map_err(|source| AuditError::ParseIgnoreList {
                path: path.to_path_buf(),
                source,
            })?;
        Ok(names.into_iter().collect())
    }

    pub fn contains(&self, test: &str) -> bool {
        self.names.contains(test)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for IgnoreSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            names: iter.into_iter().map(Into::into).collect(),
        }
    }
}
