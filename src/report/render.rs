//! Text layout of the coverage report.
//!
//! ```text
//! test_models.py
//!  |  test_alpha
//!  |  |  models.test.ts:'parses alpha'
//!  |  test_beta
//! ```

use std::io::{self, Write};

use termcolor::{ColorSpec, WriteColor};

use super::{FileReport, Outcome, Status, Summary};

/// Writes one file section: the header in the file's status color, then each
/// test in its own color.
pub fn write_file_report<W: WriteColor>(out: &mut W, report: &FileReport) -> io::Result<()> {
    write_line(out, report.status, &report.file)?;
    for line in &report.tests {
        let status = line.outcome.status();
        write_line(out, status, &format!(" |  {}", line.test))?;
        if let Outcome::Covered { file, label } = &line.outcome {
            write_line(out, status, &format!(" |  |  {}:'{}'", file, label))?;
        }
    }
    Ok(())
}

pub fn write_summary<W: WriteColor>(out: &mut W, summary: &Summary) -> io::Result<()> {
    let text = format!(
        "{} files, {} covered, {} ignored, {} uncovered",
        summary.files, summary.covered, summary.ignored, summary.uncovered
    );
    write_line(out, summary.status(), &text)
}

fn write_line<W: WriteColor>(out: &mut W, status: Status, text: &str) -> io::Result<()> {
    out.set_color(ColorSpec::new().set_fg(Some(status.color())))?;
    write!(out, "{}", text)?;
    out.reset()?;
    writeln!(out)
}
