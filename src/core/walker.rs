//! Concurrent directory walk.
//!
//! The tree is walked on one thread while every file that survives the
//! exclusion check is handed to a bounded rayon pool as its own task. All
//! tasks report into a shared [`Collector`] and the scope joins on every
//! one of them before the result is returned.

use std::{fs, io, path::Path};

use anyhow::{Context, Result};
use rayon::{Scope, ThreadPoolBuilder};
use walkdir::{DirEntry, WalkDir};

use super::{
    collector::{Collector, FailureKind, ScanFailure, ScanResult},
    extract::extract_names,
};
use crate::config::ExclusionSet;

/// Progress notifications emitted while scanning.
///
/// `Reading` and `Failed` are emitted from worker threads, so the callback
/// must be `Sync`.
#[derive(Debug, Clone, Copy)]
pub enum ScanEvent<'a> {
    SkippedDir(&'a Path),
    SkippedFile(&'a Path),
    Reading(&'a Path),
    Failed(&'a ScanFailure),
}

/// Walk `root` and extract variable names from every non-excluded file.
///
/// `jobs` bounds the number of files read at once; `None` uses one worker
/// per CPU. Traversal and read failures never abort the scan, they are
/// reported through `on_event` and collected in [`ScanResult::failures`].
/// Only failing to start the worker pool is an error.
pub fn scan_tree<F>(
    root: &Path,
    excludes: &ExclusionSet,
    jobs: Option<usize>,
    on_event: F,
) -> Result<ScanResult>
where
    F: Fn(ScanEvent<'_>) + Sync,
{
    let mut builder = ThreadPoolBuilder::new().thread_name(|i| format!("envy-scan-{i}"));
    if let Some(jobs) = jobs {
        builder = builder.num_threads(jobs);
    }
    let pool = builder
        .build()
        .context("Failed to start scan worker pool")?;

    let collector = Collector::new();
    pool.scope(|scope| walk(scope, root, excludes, &collector, &on_event));

    Ok(collector.into_result())
}

fn walk<'s, F>(
    scope: &Scope<'s>,
    root: &Path,
    excludes: &ExclusionSet,
    collector: &'s Collector,
    on_event: &'s F,
) where
    F: Fn(ScanEvent<'_>) + Sync,
{
    let mut entries = WalkDir::new(root).into_iter();

    while let Some(entry) = entries.next() {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                let path = err.path().unwrap_or(root).to_path_buf();
                let failure = ScanFailure::new(path, FailureKind::Traversal, &err);
                report_failure(failure, collector, on_event);
                continue;
            }
        };

        let is_dir = entry.file_type().is_dir();

        // The root itself is always walked, whatever its name.
        if entry.depth() > 0 && is_excluded(&entry, excludes) {
            collector.record_skip();
            if is_dir {
                on_event(ScanEvent::SkippedDir(entry.path()));
                entries.skip_current_dir();
            } else {
                on_event(ScanEvent::SkippedFile(entry.path()));
            }
            continue;
        }

        match classify(&entry) {
            Target::Regular => {
                let path = entry.into_path();
                scope.spawn(move |_| scan_file(&path, collector, on_event));
            }
            Target::Directory => {}
            Target::Special => {
                collector.record_skip();
                on_event(ScanEvent::SkippedFile(entry.path()));
            }
            Target::Broken(err) => {
                let failure = ScanFailure::new(entry.path(), FailureKind::Read, err);
                report_failure(failure, collector, on_event);
            }
        }
    }
}

fn is_excluded(entry: &DirEntry, excludes: &ExclusionSet) -> bool {
    excludes.contains(entry.file_name()) || excludes.contains_path(entry.path())
}

/// What a walked entry resolves to.
enum Target {
    Regular,
    Directory,
    /// FIFOs, sockets and devices. Opening a FIFO blocks until a writer
    /// shows up, so these are never read.
    Special,
    /// A symlink whose target cannot be resolved.
    Broken(io::Error),
}

/// Links are not followed, so a link to a directory is neither walked nor
/// read. A link to a regular file is read.
fn classify(entry: &DirEntry) -> Target {
    let file_type = entry.file_type();
    if file_type.is_file() {
        return Target::Regular;
    }
    if file_type.is_dir() {
        return Target::Directory;
    }
    if !entry.path_is_symlink() {
        return Target::Special;
    }

    match fs::metadata(entry.path()) {
        Ok(meta) if meta.is_file() => Target::Regular,
        Ok(meta) if meta.is_dir() => Target::Directory,
        Ok(_) => Target::Special,
        Err(err) => Target::Broken(err),
    }
}

fn scan_file<F>(path: &Path, collector: &Collector, on_event: &F)
where
    F: Fn(ScanEvent<'_>),
{
    on_event(ScanEvent::Reading(path));

    match fs::read(path) {
        Ok(bytes) => {
            let names = extract_names(&String::from_utf8_lossy(&bytes));
            collector.append(names);
        }
        Err(err) => {
            let failure = ScanFailure::new(path, FailureKind::Read, err);
            report_failure(failure, collector, on_event);
        }
    }
}

fn report_failure<F>(failure: ScanFailure, collector: &Collector, on_event: &F)
where
    F: Fn(ScanEvent<'_>),
{
    on_event(ScanEvent::Failed(&failure));
    collector.record_failure(failure);
}
