//! Crosscheck error handling.
//!
//! Every fatal condition of an audit run is a variant of [`AuditError`]. The
//! enum derives `miette::Diagnostic`, so the CLI renders it as a report with a
//! stable code and, where one exists, an actionable help line.

use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

/// Result alias used throughout the crate.
pub type AuditResult<T> = Result<T, AuditError>;

#[derive(Debug, Error, Diagnostic)]
pub enum AuditError {
    #[error("Failed to list suite directory '{}'", .path.display())]
    #[diagnostic(
        code(crosscheck::fs::list),
        help("check that the directory exists and is readable")
    )]
    ListDir {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    #[error("Failed to read test file '{}'", .path.display())]
    #[diagnostic(code(crosscheck::fs::read))]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read ignore list '{}'", .path.display())]
    #[diagnostic(code(crosscheck::ignore::read))]
    ReadIgnoreList {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Ignore list '{}' is not a sequence of test names", .path.display())]
    #[diagnostic(
        code(crosscheck::ignore::parse),
        help("write one entry per line, e.g. `- test_convert_with_empty_set`")
    )]
    ParseIgnoreList {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("Failed to write the coverage report")]
    #[diagnostic(code(crosscheck::output))]
    Write(#[from] std::io::Error),
}
