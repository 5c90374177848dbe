//! Scanning engine.
//!
//! - `extract`: Pull variable names out of source text
//! - `collector`: Shared aggregation context for concurrent scan tasks
//! - `walker`: Directory walk and bounded concurrent dispatch
//! - `writer`: Write the collected names as a `.env.example` template

mod collector;
mod extract;
mod walker;
mod writer;

pub use collector::{Collector, FailureKind, ScanFailure, ScanResult};
pub use extract::{extract_line, extract_names};
pub use walker::{ScanEvent, scan_tree};
pub use writer::{render_template, write_template};
