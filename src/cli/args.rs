//! Command-line arguments for the crosscheck CLI.
//!
//! Both suite directories fall back to environment variables, so the tool can
//! run with no flags at all in a configured shell.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::suite::ListingOrder;

#[derive(Debug, Parser)]
#[command(
    name = "crosscheck",
    version,
    about = "Reports reference-suite tests that have no counterpart in a comparison suite."
)]
pub struct CrosscheckArgs {
    /// Directory of the reference suite.
    #[arg(long, env = "PYTHON_TESTS_PATH", value_name = "DIR")]
    pub reference_dir: PathBuf,

    /// Directory of the comparison suite.
    #[arg(long, env = "JAVASCRIPT_TESTS_PATH", value_name = "DIR")]
    pub comparison_dir: PathBuf,

    /// YAML list of test names to report as ignored, replacing the built-in list.
    #[arg(long, value_name = "FILE")]
    pub ignore_file: Option<PathBuf>,

    /// Reference files are those whose name starts with this prefix.
    #[arg(long, default_value = "test_", value_name = "PREFIX")]
    pub reference_prefix: String,

    /// Comparison files are those whose name contains this marker.
    #[arg(long, default_value = ".test.", value_name = "INFIX")]
    pub comparison_infix: String,

    /// Visit suite files in name order instead of filesystem order.
    #[arg(long)]
    pub sorted: bool,

    #[arg(long, value_enum, default_value_t = ColorMode::Auto)]
    pub color: ColorMode,

    /// Print totals after the report.
    #[arg(long)]
    pub summary: bool,

    /// Exit with status 1 if any test is uncovered.
    #[arg(long)]
    pub strict: bool,

    /// Print progress notes to stderr.
    #[arg(short, long)]
    pub verbose: bool,
}

impl CrosscheckArgs {
    pub fn listing_order(&self) -> ListingOrder {
        if self.sorted {
            ListingOrder::Sorted
        } else {
            ListingOrder::Filesystem
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColorMode {
    /// Color when stdout is a terminal.
    Auto,
    Always,
    Never,
}
