//! Scanning of the two test suites.
//!
//! Both scanners follow the same flow:
//! 1. List the suite directory (one level, regular files only)
//! 2. Keep the files whose name follows the suite's naming convention
//! 3. Read each file and pull test names out with a regular expression
//!
//! Extraction is a text heuristic, not a parser. Declarations written in an
//! unusual layout are missed rather than reported as errors.

use std::path::{Path, PathBuf};

use walkdir::{DirEntry, WalkDir};

use crate::diagnostics::{AuditError, AuditResult};

mod comparison;
mod reference;

pub use comparison::{ComparisonFile, ComparisonScanner, CoveringTest};
pub use reference::{ReferenceFile, ReferenceScanner};

/// Order in which suite files are visited.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ListingOrder {
    /// Whatever the filesystem returns. Not stable across platforms.
    #[default]
    Filesystem,
    /// Sorted by file name.
    Sorted,
}

/// A suite file that passed the naming filter, with its contents.
#[derive(Debug)]
pub(crate) struct CandidateFile {
    pub name: String,
    pub source: String,
}

/// Lists `dir` and reads every regular file whose name satisfies `is_candidate`.
///
/// Entries are filtered by name before anything else is looked at, so a broken
/// link or special file with a non-candidate name never fails the listing.
pub(crate) fn read_candidates<F>(
    dir: &Path,
    order: ListingOrder,
    is_candidate: F,
) -> AuditResult<Vec<CandidateFile>>
where
    F: Fn(&str) -> bool,
{
    let mut walker = WalkDir::new(dir).min_depth(1).max_depth(1);
    if order == ListingOrder::Sorted {
        walker = walker.sort_by_file_name();
    }

    let mut candidates = Vec::new();
    for entry in walker {
        let entry = entry.map_err(|source| AuditError::ListDir {
            path: dir.to_path_buf(),
            source,
        })?;
        let name = entry.file_name().to_string_lossy().into_owned();
        if !is_candidate(&name) {
            continue;
        }
        if !is_regular_file(&entry)? {
            continue;
        }
        let source = read_source(entry.path())?;
        candidates.push(CandidateFile { name, source });
    }
    Ok(candidates)
}

/// Regular files, and symlinks that resolve to one.
fn is_regular_file(entry: &DirEntry) -> AuditResult<bool> {
    let file_type = entry.file_type();
    if !file_type.is_symlink() {
        return Ok(file_type.is_file());
    }
    let metadata = std::fs::metadata(entry.path()).map_err(|source| AuditError::ReadFile {
        path: entry.path().to_path_buf(),
        source,
    })?;
    Ok(metadata.is_file())
}

fn read_source(path: &Path) -> AuditResult<String> {
    std::fs::read_to_string(path).map_err(|source| AuditError::ReadFile {
        path: PathBuf::from(path),
        source,
    })
}
