//! Configuration types for output writing.
//!
//! This module provides:
//! - `FileExistsPolicy`: Policy for handling existing output files
//! - `RecordOrder`: Order in which collection entries are emitted
//! - `OutputConfig`: Caller-filled options for a complete output setup

mod options;
mod spec;

pub use options::OutputConfig;
pub use spec::{FileExistsPolicy, RecordOrder};
