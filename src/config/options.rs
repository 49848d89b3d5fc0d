//! Output options filled in by the caller.

use super::{FileExistsPolicy, RecordOrder};
use crate::format::OutputFormat;
use crate::io::{OutputTarget, target_for};

/// Where and how results are written.
///
/// Every field is optional; an empty configuration writes plaintext to stdout
/// in sorted order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OutputConfig {
    /// Output file name. `None` or "-" writes to stdout.
    pub output_file: Option<String>,
    /// Directory the output file is placed in
    pub output_directory: Option<String>,
    /// Append to an existing file instead of truncating it
    pub append: bool,
    /// Write JSON lines instead of plaintext
    pub json: bool,
    pub order: RecordOrder,
}

impl OutputConfig {
    /// Create a new empty output configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the output file.
    pub fn with_output_file(mut self, file: impl Into<String>) -> Self {
        self.output_file = Some(file.into());
        self
    }

    /// Set the output directory.
    pub fn with_output_directory(mut self, dir: impl Into<String>) -> Self {
        self.output_directory = Some(dir.into());
        self
    }

    /// Enable append mode.
    pub fn with_append(mut self) -> Self {
        self.append = true;
        self
    }

    /// Enable JSON output.
    pub fn with_json(mut self) -> Self {
        self.json = true;
        self
    }

    /// Set the record order.
    pub fn with_order(mut self, order: RecordOrder) -> Self {
        self.order = order;
        self
    }

    pub fn format(&self) -> OutputFormat {
        OutputFormat::from_json_flag(self.json)
    }

    pub fn file_exists_policy(&self) -> FileExistsPolicy {
        FileExistsPolicy::from_append_flag(self.append)
    }

    /// Check if writing to stdout.
    pub fn is_stdout(&self) -> bool {
        matches!(self.output_file.as_deref(), None | Some("") | Some("-"))
    }

    /// Build the output target this configuration points at.
    pub fn target(&self) -> Box<dyn OutputTarget> {
        target_for(
            self.output_file.as_deref().unwrap_or(""),
            self.output_directory.as_deref().unwrap_or(""),
        )
    }
}
