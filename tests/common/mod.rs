//! Temporary on-disk suites for integration tests.

use std::fs;
use std::path::Path;

use tempfile::TempDir;

/// A reference suite and a comparison suite in two temporary directories.
pub struct Suites {
    pub reference: TempDir,
    pub comparison: TempDir,
}

impl Suites {
    pub fn new() -> Self {
        Self {
            reference: tempfile::tempdir().unwrap(),
            comparison: tempfile::tempdir().unwrap(),
        }
    }

    pub fn reference_file(self, name: &str, contents: &str) -> Self {
        write(self.reference.path(), name, contents);
        self
    }

    pub fn comparison_file(self, name: &str, contents: &str) -> Self {
        write(self.comparison.path(), name, contents);
        self
    }
}

fn write(dir: &Path, name: &str, contents: &str) {
    fs::write(dir.join(name), contents).unwrap();
}

/// Python source declaring one test method per name.
pub fn python_tests(names: &[&str]) -> String {
    let mut source = String::from("class TestSuite:\n");
    for name in names {
        source.push_str(&format!("    def {}(self):\n        pass\n\n", name));
    }
    source
}

/// TypeScript source with one `test(label)` block per `(label, reference)` pair.
pub fn typescript_tests(tests: &[(&str, &str)]) -> String {
    let mut source = String::new();
    for (label, reference) in tests {
        source.push_str(&format!(
            "test('{}', () => {{\n  // {}\n  expect(true).toBe(true);\n}});\n\n",
            label, reference
        ));
    }
    source
}
