//! Miette integration for pretty error reporting.

use miette::{Diagnostic, Severity};
use thiserror::Error;

use super::{OutputError, Stage};

/// A diagnostic wrapper for output errors compatible with miette.
#[derive(Debug, Error, Diagnostic)]
#[error("{message}")]
pub struct OutputDiagnostic {
    /// The error message
    pub message: String,

    #[source]
    /// The underlying error source
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,

    #[help]
    /// Help text for the user
    pub help: Option<String>,

    #[diagnostic(severity)]
    /// Severity level
    pub severity: Severity,
}

fn help_for(stage: Stage) -> &'static str {
    match stage {
        Stage::CreateDirectory => "Check that the output directory path is writable",
        Stage::Open => "Check the output file path and its permissions",
        Stage::Encode => "A record could not be encoded in the selected format",
        Stage::Write | Stage::Flush => "The output stream was closed or is out of space",
    }
}

impl From<OutputError> for OutputDiagnostic {
    fn from(e: OutputError) -> Self {
        match e {
            OutputError::InvalidArgument(msg) => OutputDiagnostic {
                message: format!("invalid argument: {msg}"),
                source: None,
                help: Some("Check the output file name and configuration values".into()),
                severity: Severity::Error,
            },
            OutputError::Io {
                stage,
                target,
                source,
            } => OutputDiagnostic {
                message: format!("[{stage}] on '{target}'"),
                source: Some(Box::new(source)),
                help: Some(help_for(stage).into()),
                severity: Severity::Error,
            },
            OutputError::Format(fe) => OutputDiagnostic {
                message: fe.to_string(),
                source: Some(Box::new(fe)),
                help: Some("Enable the matching cargo feature".into()),
                severity: Severity::Error,
            },
        }
    }
}

impl From<OutputError> for miette::Report {
    fn from(e: OutputError) -> Self {
        miette::Report::new(OutputDiagnostic::from(e))
    }
}
