//! Terminal handles and stderr notes for the CLI.

use std::io::Write;

use miette::Report;
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

use crate::cli::args::ColorMode;
use crate::AuditError;

/// Resolves `--color` against whether the stream is a terminal.
pub fn color_choice(mode: ColorMode, stream: atty::Stream) -> ColorChoice {
    match mode {
        ColorMode::Always => ColorChoice::AlwaysAnsi,
        ColorMode::Never => ColorChoice::Never,
        ColorMode::Auto if atty::is(stream) => ColorChoice::Auto,
        ColorMode::Auto => ColorChoice::Never,
    }
}

pub fn stdout(mode: ColorMode) -> StandardStream {
    StandardStream::stdout(color_choice(mode, atty::Stream::Stdout))
}

/// Writes a dimmed progress note to stderr when verbose output is on.
pub fn note(verbose: bool, mode: ColorMode, message: &str) {
    if !verbose {
        return;
    }
    let mut stderr = StandardStream::stderr(color_choice(mode, atty::Stream::Stderr));
    let _ = stderr.set_color(ColorSpec::new().set_fg(Some(Color::Cyan)).set_dimmed(true));
    let _ = write!(stderr, "crosscheck: {}", message);
    let _ = stderr.reset();
    let _ = writeln!(stderr);
}

/// Prints a fatal error as a miette report on stderr.
pub fn print_error(error: AuditError) {
    let report = Report::new(error);
    eprintln!("{report:?}");
}
