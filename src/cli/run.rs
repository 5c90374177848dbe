//! One scan-and-write pass.
//!
//! Walks the project root, prints progress unless `--quiet` is set, and
//! writes the template.

use std::{num::NonZeroUsize, path::PathBuf};

use anyhow::{Result, bail};

use super::{args::Arguments, report};
use crate::core::{ScanEvent, ScanResult, scan_tree, write_template};

/// Outcome of a successful run.
#[derive(Debug)]
pub struct RunSummary {
    pub output: PathBuf,
    pub scan: ScanResult,
}

/// # Returns
/// - `Ok(RunSummary)` once the template is written, even if some paths
///   could not be scanned (see [`ScanResult::failures`])
/// - `Err` if the root is not a directory or the template cannot be written
pub fn run(args: &Arguments) -> Result<RunSummary> {
    if !args.root.is_dir() {
        bail!("Project root is not a directory: {}", args.root.display());
    }

    let output = args.output_path();
    let excludes = args.exclusion_set();
    let quiet = args.quiet;

    let scan = scan_tree(
        &args.root,
        &excludes,
        args.jobs.map(NonZeroUsize::get),
        |event| match event {
            ScanEvent::Failed(failure) => report::print_failure(failure),
            _ if quiet => {}
            event => report::print_progress(event),
        },
    )?;

    if !quiet {
        report::print_finished_walking(&args.root);
    }

    write_template(&output, &scan.variables)?;

    Ok(RunSummary { output, scan })
}
