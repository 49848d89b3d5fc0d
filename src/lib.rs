//! # hostout
//!
//! Output writer for discovered host records.
//!
//! ## Overview
//!
//! hostout provides:
//! - **Two encodings**: comma separated plaintext and newline-delimited JSON
//! - **Any sink**: every write operation takes a `std::io::Write`
//! - **Destination files**: `create_destination` creates the output directory and
//!   opens the file for truncation or appending
//! - **Deterministic output**: records are emitted in key order by default
//! - **Options**: `OutputConfig` bundles destination, append flag, format and order
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use std::collections::HashMap;
//!
//! use hostout::{HostResult, OutputWriter, create_destination};
//!
//! fn main() -> Result<(), hostout::OutputError> {
//!     let mut results = HashMap::new();
//!     results.insert(
//!         "a.example.com".to_string(),
//!         HostResult::new("a.example.com", "93.184.216.34", "crtsh"),
//!     );
//!
//!     let mut file = create_destination("hosts.txt", "out", false)?;
//!     OutputWriter::new(false).write_host_address_source(&results, &mut file)?;
//!     Ok(())
//! }
//! ```
//!
//! ## Output formats
//!
//! | operation                   | plaintext           | json                                |
//! |-----------------------------|---------------------|-------------------------------------|
//! | `write_host_address_source` | `host,ip,source`    | `{"host":..,"ip":..,"source":..}`   |
//! | `write_host_source`         | `host`              | `{"host":..,"source":..}`           |
//! | `write_host_only`           | `host`              | `{"host":..,"source":..}`           |
//! | `write_host_list`           | `host`              | `host` (format is ignored)          |
//!
//! Plaintext fields are not escaped: a comma inside a field is written as-is.
//!
//! ## Features
//!
//! - `json` - JSON lines output (enabled by default)
//! - `miette` - Pretty error reporting with miette
//!
//! ## Failure semantics
//!
//! Every operation returns the first error it hits. Output is buffered; when a
//! write fails, the bytes buffered so far are flushed on a best-effort basis, so a
//! sink may hold partial output after an error. Callers needing all-or-nothing
//! files should write to a temporary path and rename on success.

// Core modules
pub mod builder;
pub mod config;
pub mod error;
pub mod format;
pub mod io;
pub mod record;
pub mod writer;

// Re-exports for convenience
pub use builder::OutputWriterBuilder;
pub use config::{FileExistsPolicy, OutputConfig, RecordOrder};
pub use error::{OutputError, Stage};
pub use format::{FormatError, OutputFormat};
pub use io::{
    FileOutput, InMemorySink, OutputTarget, StdoutOutput, create_destination, destination_path,
    target_for,
};
pub use record::{HasHost, HostEntry, HostResult};
pub use writer::OutputWriter;

/// Build a writer from an `OutputConfig` and open the target it points at.
///
/// Returns the writer together with the opened stream; the caller owns the
/// stream and closes it by dropping it.
pub fn open_from_config(
    config: &OutputConfig,
) -> Result<(OutputWriter, Box<dyn std::io::Write + Send>), OutputError> {
    let writer = OutputWriterBuilder::from_config(config).build();
    let stream = config.target().open(config.file_exists_policy())?;
    Ok((writer, stream))
}

// Miette re-exports
#[cfg(feature = "miette")]
pub use error::OutputDiagnostic;
