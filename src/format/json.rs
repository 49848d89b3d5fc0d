//! JSON-lines encoding using serde_json.

use serde::Serialize;

use super::FormatError;
use crate::record::{HostEntry, HostResult};

/// Borrowed view of a `HostResult` with the wire field names.
#[derive(Serialize)]
struct JsonHostResult<'a> {
    host: &'a str,
    ip: &'a str,
    source: &'a str,
}

pub(super) fn encode_host_result(record: &HostResult, buf: &mut Vec<u8>) -> Result<(), FormatError> {
    let line = JsonHostResult {
        host: &record.host,
        ip: &record.ip,
        source: &record.source,
    };
    encode_line(&line, buf)
}

pub(super) fn encode_host_entry(record: &HostEntry, buf: &mut Vec<u8>) -> Result<(), FormatError> {
    encode_line(record, buf)
}

fn encode_line<T: Serialize>(value: &T, buf: &mut Vec<u8>) -> Result<(), FormatError> {
    serde_json::to_writer(&mut *buf, value).map_err(|e| FormatError::Serde(Box::new(e)))?;
    buf.push(b'\n');
    Ok(())
}
