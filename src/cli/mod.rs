//! The crosscheck command-line interface.
//!
//! Scans both suites, prints the coverage report and maps the outcome to an
//! exit status.

use std::process;

use clap::Parser;

use crate::cli::args::CrosscheckArgs;
use crate::cli::output::{note, print_error};
use crate::ignore::IgnoreSet;
use crate::report::{render, Reporter, Summary};
use crate::suite::{ComparisonScanner, ReferenceScanner};
use crate::AuditResult;

pub mod args;
pub mod output;

/// The main entry point for the CLI.
pub fn run() {
    let args = CrosscheckArgs::parse();

    match execute(&args) {
        Ok(summary) if args.strict && summary.uncovered > 0 => process::exit(1),
        Ok(_) => {}
        Err(e) => {
            print_error(e);
            process::exit(1);
        }
    }
}

/// Runs one audit with already parsed arguments.
pub fn execute(args: &CrosscheckArgs) -> AuditResult<Summary> {
    let order = args.listing_order();

    let ignored = match &args.ignore_file {
        Some(path) => IgnoreSet::from_file(path)?,
        None => IgnoreSet::builtin(),
    };
    note(
        args.verbose,
        args.color,
        &format!("{} ignored test names", ignored.len()),
    );

    let reference = ReferenceScanner::default()
        .with_prefix(args.reference_prefix.as_str())
        .with_order(order)
        .scan(&args.reference_dir)?;
    note(
        args.verbose,
        args.color,
        &format!(
            "{} reference files in {}",
            reference.len(),
            args.reference_dir.display()
        ),
    );

    let comparison = ComparisonScanner::default()
        .with_infix(args.comparison_infix.as_str())
        .with_order(order)
        .scan(&args.comparison_dir)?;
    note(
        args.verbose,
        args.color,
        &format!(
            "{} comparison files in {}",
            comparison.len(),
            args.comparison_dir.display()
        ),
    );

    let mut stdout = output::stdout(args.color);
    let summary = Reporter::new(ignored).report(&mut stdout, &reference, &comparison)?;
    if args.summary {
        render::write_summary(&mut stdout, &summary)?;
    }
    Ok(summary)
}
