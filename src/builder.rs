//! Builder for creating OutputWriter instances.

use crate::config::{OutputConfig, RecordOrder};
use crate::format::OutputFormat;
use crate::writer::OutputWriter;

#[derive(Debug, Clone, Default)]
pub struct OutputWriterBuilder {
    format: OutputFormat,
    order: RecordOrder,
}

impl OutputWriterBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from the format and order of an `OutputConfig`.
    pub fn from_config(config: &OutputConfig) -> Self {
        Self {
            format: config.format(),
            order: config.order,
        }
    }

    pub fn json(mut self, json: bool) -> Self {
        self.format = OutputFormat::from_json_flag(json);
        self
    }

    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    pub fn with_order(mut self, order: RecordOrder) -> Self {
        self.order = order;
        self
    }

    pub fn build(self) -> OutputWriter {
        OutputWriter::from_parts(self.format, self.order)
    }
}
