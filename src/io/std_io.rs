//! Output targets for files and stdout.

use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;

use super::OutputTarget;
use super::destination::{create_destination, destination_path};
use crate::error::OutputError;

/// Output target for writing to stdout.
#[derive(Debug, Clone)]
pub struct StdoutOutput {
    id: String,
}

impl StdoutOutput {
    /// Create a new stdout output target.
    pub fn new() -> Self {
        Self { id: "-".into() }
    }
}

impl Default for StdoutOutput {
    fn default() -> Self {
        Self::new()
    }
}

impl OutputTarget for StdoutOutput {
    fn id(&self) -> &str {
        &self.id
    }

    fn open_overwrite(&self) -> Result<Box<dyn Write + Send>, OutputError> {
        Ok(Box::new(io::stdout()))
    }

    fn open_append(&self) -> Result<Box<dyn Write + Send>, OutputError> {
        Ok(Box::new(io::stdout()))
    }
}

/// Output target for writing to a file, optionally inside an output directory.
///
/// Opening goes through [`create_destination`], so a missing directory is
/// created on first open and its errors keep their stage.
#[derive(Debug, Clone)]
pub struct FileOutput {
    id: String,
    filename: String,
    directory: String,
}

impl FileOutput {
    /// Create a new file output target.
    pub fn new(filename: impl Into<String>, directory: impl Into<String>) -> Self {
        let filename = filename.into();
        let directory = directory.into();
        let id = destination_path(&filename, &directory)
            .to_string_lossy()
            .into_owned();
        Self {
            id,
            filename,
            directory,
        }
    }

    /// Get the resolved file path.
    pub fn path(&self) -> PathBuf {
        destination_path(&self.filename, &self.directory)
    }

    /// Create the file, appending to it when `append` is set.
    pub fn create(&self, append: bool) -> Result<File, OutputError> {
        create_destination(&self.filename, &self.directory, append)
    }
}

impl OutputTarget for FileOutput {
    fn id(&self) -> &str {
        &self.id
    }

    fn open_overwrite(&self) -> Result<Box<dyn Write + Send>, OutputError> {
        Ok(Box::new(self.create(false)?))
    }

    fn open_append(&self) -> Result<Box<dyn Write + Send>, OutputError> {
        Ok(Box::new(self.create(true)?))
    }
}

/// Pick the output target for a file argument.
///
/// An empty filename or "-" means stdout.
pub fn target_for(filename: &str, directory: &str) -> Box<dyn OutputTarget> {
    if filename.is_empty() || filename == "-" {
        Box::new(StdoutOutput::new())
    } else {
        Box::new(FileOutput::new(filename, directory))
    }
}
