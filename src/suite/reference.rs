use std::path::Path;

use lazy_static::lazy_static;
use regex::Regex;

use crate::diagnostics::AuditResult;

use super::{read_candidates, ListingOrder};

lazy_static! {
    /// `def test_name(` at the start of a line, optionally indented or `async`.
    static ref DECLARATION: Regex =
        Regex::new(r"(?m)^[ \t]*(?:async[ \t]+)?def[ \t]+(test_[a-z_]+)\(")
            .expect("reference declaration pattern is valid");
}

/// A file of the reference suite and the test names declared in it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReferenceFile {
    pub name: String,
    /// Test names in declaration order.
    pub tests: Vec<String>,
}

/// Scans the reference suite for `test_*` files and their test functions.
#[derive(Debug, Clone)]
pub struct ReferenceScanner {
    prefix: String,
    order: ListingOrder,
}

impl Default for ReferenceScanner {
    fn default() -> Self {
        Self {
            prefix: "test_".to_string(),
            order: ListingOrder::default(),
        }
    }
}

impl ReferenceScanner {
    /// Only files whose name starts with `prefix` are scanned.
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    pub fn with_order(mut self, order: ListingOrder) -> Self {
        self.order = order;
        self
    }

    /// Reads every candidate file in `dir`.
    ///
    /// A candidate without declarations still yields an entry with no tests.
    pub fn scan<P: AsRef<Path>>(&self, dir: P) -> AuditResult<Vec<ReferenceFile>> {
        let files = read_candidates(dir.as_ref(), self.order, |name| {
            name.starts_with(self.prefix.as_str())
        })?;
        Ok(files
            .into_iter()
            .map(|file| ReferenceFile {
                tests: Self::extract(&file.source),
                name: file.name,
            })
            .collect())
    }

    /// Extracts the declared test names from one file's source text.
    pub fn extract(source: &str) -> Vec<String> {
        DECLARATION
            .captures_iter(source)
            .map(|caps| caps[1].to_string())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn extracts_declarations_in_source_order() {
        let source = "\
class TestThing:
    def test_beta(self):
        pass

    async def test_alpha(self):
        pass

def test_top_level():
    pass
";
        assert_eq!(
            ReferenceScanner::extract(source),
            ["test_beta", "test_alpha", "test_top_level"]
        );
    }

    #[test]
    fn ignores_malformed_declarations() {
        let source = "\
test_missing_keyword(self):
    # def test_commented_out(self):
    def helper_function(self):
    def test_Upper(self):
    def test_digits_2(self):
    def test_no_paren
";
        assert!(ReferenceScanner::extract(source).is_empty());
    }

    #[test]
    fn scan_uses_the_prefix_convention() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("test_models.py"), "def test_x(self): ...\n").unwrap();
        fs::write(dir.path().join("conftest.py"), "def test_fixture(self): ...\n").unwrap();
        fs::write(dir.path().join("test_empty.py"), "import os\n").unwrap();

        let files = ReferenceScanner::default()
            .with_order(ListingOrder::Sorted)
            .scan(dir.path())
            .unwrap();

        assert_eq!(
            files,
            [
                ReferenceFile {
                    name: "test_empty.py".to_string(),
                    tests: vec![],
                },
                ReferenceFile {
                    name: "test_models.py".to_string(),
                    tests: vec!["test_x".to_string()],
                },
            ]
        );
    }

    #[test]
    fn custom_prefix() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("spec_models.py"), "def test_x(self): ...\n").unwrap();
        fs::write(dir.path().join("test_models.py"), "def test_y(self): ...\n").unwrap();

        let files = ReferenceScanner::default()
            .with_prefix("spec_")
            .scan(dir.path())
            .unwrap();

        assert_eq!(files.len(), 1);
        assert_eq!(files[0].tests, ["test_x"]);
    }
}
