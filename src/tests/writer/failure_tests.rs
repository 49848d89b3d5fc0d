//! Sink failures surface as errors without panicking or hanging.

use crate::error::{OutputError, Stage};
use crate::tests::support::{FailingSink, UnflushableSink, host_results, many_results};
use crate::OutputWriter;

#[test]
fn failure_on_final_flush_is_reported() {
    let mut sink = FailingSink::new(0);

    let err = OutputWriter::new(false)
        .write_host_address_source(&host_results(), &mut sink)
        .expect_err("a closed sink must fail");

    assert!(err.is_io());
    assert_eq!(err.stage(), Some(Stage::Flush));
    assert!(sink.accepted.is_empty());
}

#[test]
fn failure_mid_pass_stops_and_keeps_partial_output() {
    let limit = 1000;
    let mut sink = FailingSink::new(limit);

    let err = OutputWriter::new(false)
        .write_host_address_source(&many_results(2000), &mut sink)
        .expect_err("writes past the limit must fail");

    match err {
        OutputError::Io { stage, source, .. } => {
            assert_eq!(stage, Stage::Write);
            assert_eq!(source.kind(), std::io::ErrorKind::BrokenPipe);
        }
        other => panic!("expected an I/O error, got {other:?}"),
    }
    assert_eq!(sink.accepted.len(), limit);
    assert!(sink.accepted.starts_with(b"host-00000.example.com,192.0.2.1,crtsh\n"));
}

#[test]
fn every_operation_reports_sink_failure() {
    let writer = OutputWriter::new(false);
    let results = many_results(500);

    assert!(writer.write_host_address_source(&results, &mut FailingSink::new(10)).is_err());
    assert!(writer.write_host_only(&results, &mut FailingSink::new(10)).is_err());
    assert!(writer.write_host_list(&results, &mut FailingSink::new(10)).is_err());
}

#[test]
fn inner_flush_failure_is_reported_after_all_bytes_arrive() {
    let mut sink = UnflushableSink::default();

    let err = OutputWriter::new(false)
        .write_host_list(&host_results(), &mut sink)
        .unwrap_err();

    assert_eq!(err.stage(), Some(Stage::Flush));
    assert_eq!(sink.accepted, b"a.example.com\nb.example.com\nc.example.com\n");
}

#[test]
fn io_error_display_names_stage_and_target() {
    let err = OutputWriter::new(false)
        .write_host_address_source(&host_results(), &mut FailingSink::new(0))
        .unwrap_err();

    assert_eq!(err.to_string(), "[Flush] sink: sink closed");
}
