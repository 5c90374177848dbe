//! CLI argument definitions using clap.
//!
//! Running `envy` with no arguments scans the current directory and writes
//! `./.env.example`.

use std::{num::NonZeroUsize, path::PathBuf};

use clap::Parser;

use crate::config::{ExclusionSet, OUTPUT_FILE_NAME};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    /// Project root to scan
    #[arg(default_value = ".")]
    pub root: PathBuf,

    /// Output file [default: <ROOT>/.env.example]
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Extra file or directory name to skip (exact name match, repeatable)
    #[arg(short, long = "exclude", value_name = "NAME")]
    pub excludes: Vec<String>,

    /// Maximum number of files read in parallel [default: number of CPUs]
    #[arg(short, long, value_name = "N")]
    pub jobs: Option<NonZeroUsize>,

    /// Only print warnings and errors
    #[arg(short, long)]
    pub quiet: bool,
}

impl Arguments {
    pub fn output_path(&self) -> PathBuf {
        self.output
            .clone()
            .unwrap_or_else(|| self.root.join(OUTPUT_FILE_NAME))
    }

    /// Default exclusions, the `--exclude` names, and the output file
    /// itself (by path) so a previous run's template is never scanned.
    pub fn exclusion_set(&self) -> ExclusionSet {
        ExclusionSet::default()
            .with(self.excludes.iter().cloned())
            .with_path(&self.output_path())
    }
}
