//! keydiff - key-based reconciliation of delimited data files
//!
//! Rows of two delimiter-separated files are matched by a composite key
//! rather than by position. The first file is indexed in memory, the second
//! is streamed against it, and every key is reported as mismatched, present
//! only in one file, or present only in the other.

pub mod config;
pub mod diff;
pub mod error;
pub mod model;
pub mod output;
pub mod parser;

pub use config::Config;
pub use diff::{compare, Finding, ReconcileStats};
pub use error::ReconError;
