use std::process::ExitCode;

use crate::core::ScanResult;

/// Process exit status.
///
/// - `Success` (0): every file was read and the template was written
/// - `Failure` (1): the template was written, but some paths could not be scanned
/// - `Error` (2): the run failed and no usable template exists
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    Success,
    Failure,
    Error,
}

impl ExitStatus {
    pub fn for_scan(result: &ScanResult) -> Self {
        if result.is_complete() {
            ExitStatus::Success
        } else {
            ExitStatus::Failure
        }
    }
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        match status {
            ExitStatus::Success => ExitCode::from(0),
            ExitStatus::Failure => ExitCode::from(1),
            ExitStatus::Error => ExitCode::from(2),
        }
    }
}
