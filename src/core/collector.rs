use std::{
    fmt,
    path::PathBuf,
    sync::{
        Mutex, PoisonError,
        atomic::{AtomicUsize, Ordering},
    },
};

/// Which step of a scan failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// The walk could not visit an entry.
    Traversal,
    /// A dispatched file could not be read.
    Read,
}

/// A failed step, recorded instead of aborting the run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanFailure {
    pub path: PathBuf,
    pub kind: FailureKind,
    pub error: String,
}

impl ScanFailure {
    pub fn new(path: impl Into<PathBuf>, kind: FailureKind, error: impl fmt::Display) -> Self {
        Self {
            path: path.into(),
            kind,
            error: error.to_string(),
        }
    }
}

impl fmt::Display for ScanFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            FailureKind::Traversal => {
                write!(f, "cannot access {}: {}", self.path.display(), self.error)
            }
            FailureKind::Read => write!(f, "cannot read {}: {}", self.path.display(), self.error),
        }
    }
}

/// Aggregate outcome of one scan.
#[derive(Debug, Default)]
pub struct ScanResult {
    /// Every name found, duplicates included. Order between files depends
    /// on task completion; order within a file is preserved.
    pub variables: Vec<String>,
    pub files_scanned: usize,
    pub skipped_count: usize,
    pub failures: Vec<ScanFailure>,
}

impl ScanResult {
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Aggregation context shared by every scan task of a run.
///
/// Each lock is held only for a single push or extend, never across I/O.
#[derive(Debug, Default)]
pub struct Collector {
    variables: Mutex<Vec<String>>,
    failures: Mutex<Vec<ScanFailure>>,
    files_scanned: AtomicUsize,
    skipped: AtomicUsize,
}

impl Collector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one file's names as a single batch so no other task can
    /// interleave with them.
    pub fn append(&self, names: Vec<String>) {
        self.files_scanned.fetch_add(1, Ordering::Relaxed);
        if names.is_empty() {
            return;
        }
        self.variables
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .extend(names);
    }

    pub fn record_failure(&self, failure: ScanFailure) {
        self.failures
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(failure);
    }

    pub fn record_skip(&self) {
        self.skipped.fetch_add(1, Ordering::Relaxed);
    }

    pub fn into_result(self) -> ScanResult {
        ScanResult {
            variables: self
                .variables
                .into_inner()
                .unwrap_or_else(PoisonError::into_inner),
            files_scanned: self.files_scanned.into_inner(),
            skipped_count: self.skipped.into_inner(),
            failures: self
                .failures
                .into_inner()
                .unwrap_or_else(PoisonError::into_inner),
        }
    }
}
