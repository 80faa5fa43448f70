//! Cross-referencing of the two suites and the colored coverage report.
//!
//! Evaluation and rendering are separate steps: [`Reporter::evaluate`] turns the
//! scanned suites into [`FileReport`]s, and [`render`] writes them to any
//! `termcolor::WriteColor`.

use std::collections::HashMap;
use std::io;

use termcolor::{Color, WriteColor};

use crate::ignore::IgnoreSet;
use crate::suite::{ComparisonFile, ReferenceFile};

pub mod render;

/// Coverage status of one test or of a whole reference file.
///
/// Variants are ordered by severity, so a file's status is the maximum of its
/// tests' statuses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Status {
    Covered,
    Ignored,
    Uncovered,
}

impl Status {
    pub fn color(self) -> Color {
        match self {
            Status::Covered => Color::Green,
            Status::Ignored => Color::Yellow,
            Status::Uncovered => Color::Red,
        }
    }

    /// Combines a file's status with one more test. Never de-escalates.
    pub fn escalate(self, other: Status) -> Status {
        self.max(other)
    }
}

/// What the audit concluded for one reference test.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Ignored,
    Covered { file: String, label: String },
    Uncovered,
}

impl Outcome {
    pub fn status(&self) -> Status {
        match self {
            Outcome::Ignored => Status::Ignored,
            Outcome::Covered { .. } => Status::Covered,
            Outcome::Uncovered => Status::Uncovered,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestLine {
    pub test: String,
    pub outcome: Outcome,
}

/// The evaluated report section for one reference file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileReport {
    pub file: String,
    pub status: Status,
    pub tests: Vec<TestLine>,
}

/// Totals for a whole run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    pub files: usize,
    pub covered: usize,
    pub ignored: usize,
    pub uncovered: usize,
}

impl Summary {
    pub fn from_reports(reports: &[FileReport]) -> Self {
        let mut summary = Summary {
            files: reports.len(),
            ..Summary::default()
        };
        for line in reports.iter().flat_map(|r| &r.tests) {
            match line.outcome.status() {
                Status::Covered => summary.covered += 1,
                Status::Ignored => summary.ignored += 1,
                Status::Uncovered => summary.uncovered += 1,
            }
        }
        summary
    }

    /// The most severe status seen, `Covered` for an empty run.
    pub fn status(&self) -> Status {
        if self.uncovered > 0 {
            Status::Uncovered
        } else if self.ignored > 0 {
            Status::Ignored
        } else {
            Status::Covered
        }
    }
}

/// Where a reference test is covered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Coverage<'a> {
    pub file: &'a str,
    pub label: &'a str,
}

/// Lookup from reference test name to the first comparison test naming it.
///
/// "First" follows comparison file order, then test order within a file.
#[derive(Debug, Default)]
pub struct CoverageIndex<'a> {
    by_test: HashMap<&'a str, Coverage<'a>>,
}

impl<'a> CoverageIndex<'a> {
    pub fn build(files: &'a [ComparisonFile]) -> Self {
        let mut by_test = HashMap::new();
        for file in files {
            for test in &file.tests {
                by_test.entry(test.covers.as_str()).or_insert(Coverage {
                    file: file.name.as_str(),
                    label: test.label.as_str(),
                });
            }
        }
        Self { by_test }
    }

    pub fn lookup(&self, test: &str) -> Option<Coverage<'a>> {
        self.by_test.get(test).copied()
    }
}

/// Decides the outcome of every reference test.
#[derive(Debug, Clone)]
pub struct Reporter {
    ignored: IgnoreSet,
}

impl Reporter {
    pub fn new(ignored: IgnoreSet) -> Self {
        Self { ignored }
    }

    pub fn evaluate(
        &self,
        reference: &[ReferenceFile],
        comparison: &[ComparisonFile],
    ) -> Vec<FileReport> {
        let index = CoverageIndex::build(comparison);
        reference
            .iter()
            .map(|file| self.evaluate_file(file, &index))
            .collect()
    }

    fn evaluate_file(&self, file: &ReferenceFile, index: &CoverageIndex<'_>) -> FileReport {
        let mut status = Status::Covered;
        let mut tests = Vec::with_capacity(file.tests.len());
        for test in &file.tests {
            let outcome = self.outcome_of(test, index);
            status = status.escalate(outcome.status());
            tests.push(TestLine {
                test: test.clone(),
                outcome,
            });
        }
        FileReport {
            file: file.name.clone(),
            status,
            tests,
        }
    }

    fn outcome_of(&self, test: &str, index: &CoverageIndex<'_>) -> Outcome {
        if self.ignored.contains(test) {
            return Outcome::Ignored;
        }
        match index.lookup(test) {
            Some(found) => Outcome::Covered {
                file: found.file.to_string(),
                label: found.label.to_string(),
            },
            None => Outcome::Uncovered,
        }
    }

    /// Evaluates both suites and writes the full report to `out`.
    pub fn report<W: WriteColor>(
        &self,
        out: &mut W,
        reference: &[ReferenceFile],
        comparison: &[ComparisonFile],
    ) -> io::Result<Summary> {
        let reports = self.evaluate(reference, comparison);
        for report in &reports {
            render::write_file_report(out, report)?;
        }
        Ok(Summary::from_reports(&reports))
    }
}
