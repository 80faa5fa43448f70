use std::path::Path;

use lazy_static::lazy_static;
use regex::Regex;

use crate::diagnostics::AuditResult;

use super::{read_candidates, ListingOrder};

lazy_static! {
    /// A `test('label', () => {` block whose first line is a `// test_name` comment.
    static ref COVERING_TEST: Regex =
        Regex::new(r"test\('([\w\s]+)', \(\) => \{\r?\n\s+// (test_[a-z_]+)\b")
            .expect("comparison test pattern is valid");
}

/// A comparison test that names the reference test it mirrors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoveringTest {
    /// The free-text label given to `test(...)`.
    pub label: String,
    /// The reference test name from the leading comment.
    pub covers: String,
}

impl CoveringTest {
    pub fn new(label: impl Into<String>, covers: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            covers: covers.into(),
        }
    }
}

/// A file of the comparison suite and its cross-referencing tests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComparisonFile {
    pub name: String,
    pub tests: Vec<CoveringTest>,
}

/// Scans the comparison suite for `*.test.*` files.
#[derive(Debug, Clone)]
pub struct ComparisonScanner {
    infix: String,
    order: ListingOrder,
}

impl Default for ComparisonScanner {
    fn default() -> Self {
        Self {
            infix: ".test.".to_string(),
            order: ListingOrder::default(),
        }
    }
}

impl ComparisonScanner {
    /// Only files whose name contains `infix` are scanned.
    pub fn with_infix(mut self, infix: impl Into<String>) -> Self {
        self.infix = infix.into();
        self
    }

    pub fn with_order(mut self, order: ListingOrder) -> Self {
        self.order = order;
        self
    }

    pub fn scan<P: AsRef<Path>>(&self, dir: P) -> AuditResult<Vec<ComparisonFile>> {
        let files = read_candidates(dir.as_ref(), self.order, |name| {
            name.contains(self.infix.as_str())
        })?;
        Ok(files
            .into_iter()
            .map(|file| ComparisonFile {
                tests: Self::extract(&file.source),
                name: file.name,
            })
            .collect())
    }

    /// Extracts `(label, reference name)` pairs from one file's source text.
    pub fn extract(source: &str) -> Vec<CoveringTest> {
        COVERING_TEST
            .captures_iter(source)
            .map(|caps| CoveringTest::new(&caps[1], &caps[2]))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn extracts_label_and_reference() {
        let source = "\
describe('parser', () => {
  test('parses an empty set', () => {
    // test_convert_with_empty_set
    expect(parse('set()')).toEqual([]);
  });

  test('parses tuples', () => {
\t\t// test_convert_with_simple_tuple
  });
});
";
        assert_eq!(
            ComparisonScanner::extract(source),
            [
                CoveringTest::new("parses an empty set", "test_convert_with_empty_set"),
                CoveringTest::new("parses tuples", "test_convert_with_simple_tuple"),
            ]
        );
    }

    #[test]
    fn tolerates_crlf_line_endings() {
        let source = "test('windows', () => {\r\n    // test_crlf\r\n});\r\n";
        assert_eq!(
            ComparisonScanner::extract(source),
            [CoveringTest::new("windows", "test_crlf")]
        );
    }

    #[test]
    fn requires_the_comment_on_the_first_line() {
        let source = "\
test('no reference', () => {
  expect(1).toBe(1);
  // test_too_late
});
test('reference too long', () => {
  // test_alpha_v2
});
test(\"double quotes\", () => {
  // test_quoted
});
";
        assert!(ComparisonScanner::extract(source).is_empty());
    }

    #[test]
    fn scan_uses_the_infix_convention() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("models.test.ts"),
            "test('x', () => {\n  // test_x\n});\n",
        )
        .unwrap();
        fs::write(dir.path().join("models.ts"), "export {};\n").unwrap();

        let files = ComparisonScanner::default().scan(dir.path()).unwrap();

        assert_eq!(
            files,
            [ComparisonFile {
                name: "models.test.ts".to_string(),
                tests: vec![CoveringTest::new("x", "test_x")],
            }]
        );
    }

    #[test]
    fn directory_without_candidates_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("README.md"), "test('x', () => {\n  // test_x\n").unwrap();

        assert!(ComparisonScanner::default().scan(dir.path()).unwrap().is_empty());
    }
}
