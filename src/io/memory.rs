//! In-memory output sink.

use std::io::{self, Write};
use std::sync::{Arc, Mutex, MutexGuard};

use super::OutputTarget;
use crate::error::OutputError;

/// In-memory output sink, shared between clones.
///
/// Handy for tests and for callers that post-process the rendered output
/// (e.g. uploading a host list) instead of writing it to disk.
#[derive(Debug, Clone)]
pub struct InMemorySink {
    id: String,
    buf: Arc<Mutex<Vec<u8>>>,
}

impl InMemorySink {
    /// Create a new empty in-memory sink.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            buf: Arc::new(Mutex::new(Vec::new())),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Vec<u8>> {
        // A poisoned buffer is still a valid byte vector.
        self.buf.lock().unwrap_or_else(|p| p.into_inner())
    }

    /// Get the contents of the sink as bytes.
    pub fn contents(&self) -> Vec<u8> {
        self.lock().clone()
    }

    /// Get the contents of the sink as a string.
    pub fn contents_string(&self) -> String {
        String::from_utf8_lossy(&self.contents()).into_owned()
    }

    /// Clear the sink contents.
    pub fn clear(&self) {
        self.lock().clear();
    }
}

impl OutputTarget for InMemorySink {
    fn id(&self) -> &str {
        &self.id
    }

    fn open_overwrite(&self) -> Result<Box<dyn Write + Send>, OutputError> {
        self.clear();
        Ok(Box::new(InMemoryWriteHandle {
            sink: self.clone(),
        }))
    }

    fn open_append(&self) -> Result<Box<dyn Write + Send>, OutputError> {
        Ok(Box::new(InMemoryWriteHandle {
            sink: self.clone(),
        }))
    }
}

/// Write handle for in-memory sink.
#[derive(Debug)]
struct InMemoryWriteHandle {
    sink: InMemorySink,
}

impl Write for InMemoryWriteHandle {
    fn write(&mut self, data: &[u8]) -> io::Result<usize> {
        self.sink.lock().extend_from_slice(data);
        Ok(data.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
