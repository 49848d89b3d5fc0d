//! Output writer for host result collections.

use std::io::{self, BufWriter, Write};

use tracing::debug;

use crate::config::RecordOrder;
use crate::error::{OutputError, Stage};
use crate::format::{FormatError, OutputFormat, encode_host_line};
use crate::record::{HasHost, HostEntry, HostResult};

/// Target identifier used in errors raised while writing to a caller stream.
const SINK_ID: &str = "sink";

/// Writes host result collections to a stream, one record per line.
///
/// The writer holds no state besides its format and record order, both fixed
/// at construction. It never closes the sink it is handed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct OutputWriter {
    format: OutputFormat,
    order: RecordOrder,
}

impl OutputWriter {
    /// Create a writer producing JSON lines when `json` is set, plaintext otherwise.
    pub fn new(json: bool) -> Self {
        Self::with_format(OutputFormat::from_json_flag(json))
    }

    /// Create a writer for the given format, emitting records in sorted order.
    pub fn with_format(format: OutputFormat) -> Self {
        Self {
            format,
            order: RecordOrder::default(),
        }
    }

    pub(crate) fn from_parts(format: OutputFormat, order: RecordOrder) -> Self {
        Self { format, order }
    }

    pub fn format(&self) -> OutputFormat {
        self.format
    }

    pub fn order(&self) -> RecordOrder {
        self.order
    }

    pub fn is_json(&self) -> bool {
        self.format == OutputFormat::Json
    }

    /// Write host, address and source of every record.
    ///
    /// Plaintext lines are `host,ip,source`; JSON lines carry the `host`, `ip`
    /// and `source` keys.
    pub fn write_host_address_source<'a, K, I, W>(
        &self,
        results: I,
        sink: &mut W,
    ) -> Result<(), OutputError>
    where
        K: Ord + 'a,
        I: IntoIterator<Item = (&'a K, &'a HostResult)>,
        W: Write + ?Sized,
    {
        let format = self.format;
        self.write_lines(results, sink, |record, line| {
            format.encode_host_result(record, line)
        })
    }

    /// Write records that carry no address.
    ///
    /// Plaintext lines hold only the host; JSON lines carry `host` and `source`.
    pub fn write_host_source<'a, K, I, W>(&self, results: I, sink: &mut W) -> Result<(), OutputError>
    where
        K: Ord + 'a,
        I: IntoIterator<Item = (&'a K, &'a HostEntry)>,
        W: Write + ?Sized,
    {
        let format = self.format;
        self.write_lines(results, sink, |record, line| {
            format.encode_host_entry(record, line)
        })
    }

    /// Write address-bearing records as if they had no address.
    ///
    /// Produces exactly what [`write_host_source`](Self::write_host_source)
    /// would for the same hosts and sources.
    pub fn write_host_only<'a, K, I, W>(&self, results: I, sink: &mut W) -> Result<(), OutputError>
    where
        K: Ord + 'a,
        I: IntoIterator<Item = (&'a K, &'a HostResult)>,
        W: Write + ?Sized,
    {
        let entries: Vec<(&K, HostEntry)> = results
            .into_iter()
            .map(|(key, result)| (key, HostEntry::from(result)))
            .collect();

        self.write_host_source(entries.iter().map(|(key, entry)| (*key, entry)), sink)
    }

    /// Write a bare host list, one host per line.
    ///
    /// The configured format is ignored; this output is always plaintext.
    pub fn write_host_list<'a, K, R, I, W>(&self, results: I, sink: &mut W) -> Result<(), OutputError>
    where
        K: Ord + 'a,
        R: HasHost + 'a,
        I: IntoIterator<Item = (&'a K, &'a R)>,
        W: Write + ?Sized,
    {
        self.write_lines(results, sink, |record, line| {
            encode_host_line(record.host(), line);
            Ok(())
        })
    }

    /// Encode every record into a scratch line and push it through a buffered
    /// writer. On failure the bytes already buffered are flushed before the
    /// error is returned.
    fn write_lines<'a, K, R, I, W, F>(
        &self,
        results: I,
        sink: &mut W,
        mut encode: F,
    ) -> Result<(), OutputError>
    where
        K: Ord + 'a,
        R: 'a,
        I: IntoIterator<Item = (&'a K, &'a R)>,
        W: Write + ?Sized,
        F: FnMut(&R, &mut Vec<u8>) -> Result<(), FormatError>,
    {
        let mut records: Vec<(&K, &R)> = results.into_iter().collect();
        if self.order == RecordOrder::Sorted {
            records.sort_by(|a, b| a.0.cmp(b.0));
        }

        let mut out = BufWriter::new(sink);
        let mut line = Vec::with_capacity(128);

        for &(_, record) in &records {
            line.clear();
            if let Err(e) = encode(record, &mut line) {
                let _ = out.flush();
                return Err(encode_error(e));
            }
            if let Err(e) = out.write_all(&line) {
                let _ = out.flush();
                return Err(OutputError::io(Stage::Write, SINK_ID, e));
            }
        }

        out.flush()
            .map_err(|e| OutputError::io(Stage::Flush, SINK_ID, e))?;

        debug!(records = records.len(), format = %self.format, "wrote host records");
        Ok(())
    }
}

fn encode_error(e: FormatError) -> OutputError {
    match e {
        FormatError::Serde(source) => OutputError::io(
            Stage::Encode,
            SINK_ID,
            io::Error::new(io::ErrorKind::InvalidData, source),
        ),
        not_enabled @ FormatError::NotEnabled(_) => OutputError::Format(not_enabled),
    }
}
