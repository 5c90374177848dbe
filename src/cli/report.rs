//! Progress and summary output.
//!
//! Kept out of `core` so the scanner can be used as a library without
//! printing side effects. Every printer has a `_to` variant that takes a
//! writer for testing.

use std::{
    io::{self, Write},
    path::Path,
};

use colored::Colorize;

use super::run::RunSummary;
use crate::core::{ScanEvent, ScanFailure};

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Print a progress line to stdout. Failures go through [`print_failure`].
pub fn print_progress(event: ScanEvent<'_>) {
    print_progress_to(event, &mut io::stdout().lock());
}

pub fn print_progress_to<W: Write>(event: ScanEvent<'_>, writer: &mut W) {
    let (label, path) = match event {
        ScanEvent::SkippedDir(path) => ("Skipping dir:", path),
        ScanEvent::SkippedFile(path) => ("Skipping file:", path),
        ScanEvent::Reading(path) => ("Reading file:", path),
        ScanEvent::Failed(_) => return,
    };
    let _ = writeln!(writer, "{} {}", label.dimmed(), path.display());
}

/// Print a scan failure as a warning to stderr.
pub fn print_failure(failure: &ScanFailure) {
    print_failure_to(failure, &mut io::stderr().lock());
}

pub fn print_failure_to<W: Write>(failure: &ScanFailure, writer: &mut W) {
    let _ = writeln!(writer, "{} {}", "warning:".bold().yellow(), failure);
}

pub fn print_finished_walking(root: &Path) {
    println!("Finished walking {}", root.display());
}

/// Print the variable listing and the success line.
pub fn print_summary(summary: &RunSummary) {
    print_summary_to(summary, &mut io::stdout().lock());
}

pub fn print_summary_to<W: Write>(summary: &RunSummary, writer: &mut W) {
    let variables = &summary.scan.variables;

    if !variables.is_empty() {
        let _ = writeln!(
            writer,
            "{}",
            format!(
                "Found {} variable {}:",
                variables.len(),
                plural(variables.len(), "reference", "references")
            )
            .bold()
        );
        for name in variables {
            let _ = writeln!(writer, "  {}", name.cyan());
        }
    }

    let files = summary.scan.files_scanned;
    let _ = writeln!(
        writer,
        "{} {}",
        SUCCESS_MARK.green(),
        format!(
            "Created {} with {} {} from {} scanned {}",
            summary.output.display(),
            variables.len(),
            plural(variables.len(), "entry", "entries"),
            files,
            plural(files, "file", "files")
        )
        .green()
    );
}

/// Warn on stderr that the template was built from partial results.
pub fn print_incomplete_warning(summary: &RunSummary) {
    print_incomplete_warning_to(summary, &mut io::stderr().lock());
}

pub fn print_incomplete_warning_to<W: Write>(summary: &RunSummary, writer: &mut W) {
    let count = summary.scan.failures.len();
    if count == 0 {
        return;
    }
    let _ = writeln!(
        writer,
        "{} {} path(s) could not be scanned, {} may be incomplete",
        "warning:".bold().yellow(),
        count,
        summary.output.display()
    );
}

fn plural<'a>(count: usize, one: &'a str, many: &'a str) -> &'a str {
    if count == 1 { one } else { many }
}
