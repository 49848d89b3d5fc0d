//! Error types for hostout output operations.
//!
//! This module provides:
//! - `Stage`: Indicates where in an output pass an error occurred
//! - `OutputError`: The error returned by every fallible operation
//!
//! Format-level errors (`FormatError`) live in `crate::format` and are wrapped
//! by `OutputError` when they reach the caller.

use std::fmt;
use std::io;

use thiserror::Error;

use crate::format::FormatError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// Creating the output directory
    CreateDirectory,
    /// Opening the destination file
    Open,
    /// Encoding a record into its line representation
    Encode,
    /// Writing an encoded record to the sink
    Write,
    /// Flushing buffered records to the sink
    Flush,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stage::CreateDirectory => write!(f, "CreateDirectory"),
            Stage::Open => write!(f, "Open"),
            Stage::Encode => write!(f, "Encode"),
            Stage::Write => write!(f, "Write"),
            Stage::Flush => write!(f, "Flush"),
        }
    }
}

#[derive(Debug, Error)]
pub enum OutputError {
    /// A caller-supplied argument was rejected before any I/O happened
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// An I/O operation failed
    #[error("[{stage}] {target}: {source}")]
    Io {
        /// Stage where the error occurred
        stage: Stage,
        /// Identifier of the destination (file path, "-" for stdout, "sink" for streams)
        target: String,
        /// The underlying OS error
        #[source]
        source: io::Error,
    },

    /// The requested format cannot be used
    #[error(transparent)]
    Format(#[from] FormatError),
}

impl OutputError {
    /// Wrap an I/O error with the stage and target it came from.
    pub fn io(stage: Stage, target: impl Into<String>, source: io::Error) -> Self {
        OutputError::Io {
            stage,
            target: target.into(),
            source,
        }
    }

    /// The stage of an I/O error, if this is one.
    pub fn stage(&self) -> Option<Stage> {
        match self {
            OutputError::Io { stage, .. } => Some(*stage),
            _ => None,
        }
    }

    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, OutputError::InvalidArgument(_))
    }

    pub fn is_io(&self) -> bool {
        matches!(self, OutputError::Io { .. })
    }
}

#[cfg(feature = "miette")]
mod miette_impl;

#[cfg(feature = "miette")]
pub use miette_impl::*;
