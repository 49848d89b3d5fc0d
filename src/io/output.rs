//! Output target trait definition.

use std::fmt::Debug;
use std::io::Write;

use crate::config::FileExistsPolicy;
use crate::error::OutputError;

/// Trait for synchronous output targets.
///
/// Implementors provide a way to open a writable stream to various destinations
/// such as files, stdout, or in-memory buffers. The returned stream is owned by
/// the caller and closed when dropped.
pub trait OutputTarget: Send + Sync + Debug {
    /// Returns a unique identifier for this output target.
    ///
    /// This is used for error messages and logging.
    /// Convention: "-" for stdout, file path for files.
    fn id(&self) -> &str;

    /// Open the target for writing, truncating any existing content.
    fn open_overwrite(&self) -> Result<Box<dyn Write + Send>, OutputError>;

    /// Open the target for appending to existing content.
    fn open_append(&self) -> Result<Box<dyn Write + Send>, OutputError>;

    /// Open the target according to `policy`.
    fn open(&self, policy: FileExistsPolicy) -> Result<Box<dyn Write + Send>, OutputError> {
        match policy {
            FileExistsPolicy::Overwrite => self.open_overwrite(),
            FileExistsPolicy::Append => self.open_append(),
        }
    }
}
