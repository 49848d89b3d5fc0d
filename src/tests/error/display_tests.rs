//! Error display and conversion tests.

use std::error::Error;
use std::io;

use crate::error::{OutputError, Stage};
use crate::format::{FormatError, OutputFormat};

#[test]
fn stage_display_names() {
    assert_eq!(Stage::CreateDirectory.to_string(), "CreateDirectory");
    assert_eq!(Stage::Open.to_string(), "Open");
    assert_eq!(Stage::Encode.to_string(), "Encode");
    assert_eq!(Stage::Write.to_string(), "Write");
    assert_eq!(Stage::Flush.to_string(), "Flush");
}

#[test]
fn io_error_keeps_source() {
    let err = OutputError::io(
        Stage::Open,
        "out/hosts.txt",
        io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
    );

    assert_eq!(err.to_string(), "[Open] out/hosts.txt: denied");
    assert_eq!(err.stage(), Some(Stage::Open));
    let source = err.source().expect("io error has a source");
    assert_eq!(source.to_string(), "denied");
}

#[test]
fn invalid_argument_has_no_stage() {
    let err = OutputError::InvalidArgument("empty filename".into());

    assert!(err.is_invalid_argument());
    assert!(!err.is_io());
    assert_eq!(err.stage(), None);
    assert_eq!(err.to_string(), "Invalid argument: empty filename");
}

#[test]
fn format_error_converts_transparently() {
    let err: OutputError = FormatError::NotEnabled(OutputFormat::Json).into();

    assert_eq!(
        err.to_string(),
        "Format 'json' is not enabled. Enable the corresponding feature."
    );
}

#[cfg(feature = "miette")]
#[test]
fn miette_diagnostic_carries_stage_and_help() {
    use crate::error::OutputDiagnostic;

    let diag = OutputDiagnostic::from(OutputError::io(
        Stage::CreateDirectory,
        "out",
        io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
    ));

    assert_eq!(diag.message, "[CreateDirectory] on 'out'");
    assert!(diag.help.is_some());
    assert!(diag.source.is_some());
}
