//! Plaintext line encoding.
//!
//! Fields are joined with a bare comma. Embedded commas are written as-is;
//! consumers that need unambiguous fields should use the JSON format.

use crate::record::HostResult;

pub(super) fn encode_host_ip_source(record: &HostResult, buf: &mut Vec<u8>) {
    buf.reserve(record.host.len() + record.ip.len() + record.source.len() + 3);
    buf.extend_from_slice(record.host.as_bytes());
    buf.push(b',');
    buf.extend_from_slice(record.ip.as_bytes());
    buf.push(b',');
    buf.extend_from_slice(record.source.as_bytes());
    buf.push(b'\n');
}

pub(super) fn encode_host(host: &str, buf: &mut Vec<u8>) {
    buf.extend_from_slice(host.as_bytes());
    buf.push(b'\n');
}
