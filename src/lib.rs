//! Envy - generate a `.env.example` template from `process.env` references
//!
//! Envy walks a project tree, reads every file that is not excluded by
//! name, collects each `process.env.NAME` reference, and writes one `NAME=`
//! line per reference to a template file.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (arguments, progress output, exit status)
//! - `config`: Built-in constants and the exclusion set
//! - `core`: Extraction, concurrent walk, and template writer

pub mod cli;
pub mod config;
pub mod core;
