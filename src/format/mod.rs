//! Line encodings for host records.
//!
//! This module provides:
//! - `OutputFormat`: The two encodings a writer can be configured with
//! - `FormatError`: Errors that can occur while encoding a record
//! - Per-format line encoders in `plaintext` and `json`
//!
//! Every encoder appends exactly one newline-terminated line to the supplied
//! buffer. Nothing is written to a sink here; the writer decides when the
//! buffered line reaches the output stream.

use thiserror::Error;

#[cfg(feature = "json")]
mod json;
mod plaintext;

use crate::record::{HostEntry, HostResult};

/// Represents the encodings a writer can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum OutputFormat {
    /// Comma separated, one record per line
    #[default]
    Plaintext,
    /// One JSON object per line
    Json,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Plaintext => write!(f, "plaintext"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

impl OutputFormat {
    /// Pick the format matching the boolean JSON switch callers usually carry.
    pub fn from_json_flag(json: bool) -> Self {
        if json {
            OutputFormat::Json
        } else {
            OutputFormat::Plaintext
        }
    }

    /// Encode a record carrying host, address and source.
    pub fn encode_host_result(
        &self,
        record: &HostResult,
        buf: &mut Vec<u8>,
    ) -> Result<(), FormatError> {
        match self {
            OutputFormat::Plaintext => {
                plaintext::encode_host_ip_source(record, buf);
                Ok(())
            }
            #[cfg(feature = "json")]
            OutputFormat::Json => json::encode_host_result(record, buf),
            #[cfg(not(feature = "json"))]
            OutputFormat::Json => Err(FormatError::NotEnabled(*self)),
        }
    }

    /// Encode a record carrying host and source.
    ///
    /// The plaintext form keeps only the host.
    pub fn encode_host_entry(
        &self,
        record: &HostEntry,
        buf: &mut Vec<u8>,
    ) -> Result<(), FormatError> {
        match self {
            OutputFormat::Plaintext => {
                plaintext::encode_host(&record.host, buf);
                Ok(())
            }
            #[cfg(feature = "json")]
            OutputFormat::Json => json::encode_host_entry(record, buf),
            #[cfg(not(feature = "json"))]
            OutputFormat::Json => Err(FormatError::NotEnabled(*self)),
        }
    }
}

/// Encode a bare host line. Used by the export path, which has no format choice.
pub fn encode_host_line(host: &str, buf: &mut Vec<u8>) {
    plaintext::encode_host(host, buf);
}

/// Errors that can occur during format operations.
#[derive(Debug, Error)]
pub enum FormatError {
    /// Format feature not enabled
    #[error("Format '{0}' is not enabled. Enable the corresponding feature.")]
    NotEnabled(OutputFormat),

    /// Serialization error
    #[error("Serde error: {0}")]
    Serde(Box<dyn std::error::Error + Send + Sync>),
}
