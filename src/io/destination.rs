//! Creation of output files on disk.

use std::fs::{DirBuilder, File, OpenOptions};
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{OutputError, Stage};

#[cfg(unix)]
const DIR_MODE: u32 = 0o755;
#[cfg(unix)]
const FILE_MODE: u32 = 0o644;

/// Resolve the path an output file lands on.
///
/// `directory/filename` when a directory is given, otherwise `filename` unchanged.
pub fn destination_path(filename: &str, directory: &str) -> PathBuf {
    if directory.is_empty() {
        PathBuf::from(filename)
    } else {
        Path::new(directory).join(filename)
    }
}

/// Create (or open for appending) the output file `directory/filename`.
///
/// A missing `directory` is created together with its ancestors. With
/// `append` the file is opened for appending and created if absent; without
/// it any existing content is truncated. The caller owns the returned handle.
pub fn create_destination(
    filename: &str,
    directory: &str,
    append: bool,
) -> Result<File, OutputError> {
    if filename.is_empty() {
        return Err(OutputError::InvalidArgument("empty filename".into()));
    }

    if !directory.is_empty() && !Path::new(directory).exists() {
        dir_builder()
            .create(directory)
            .map_err(|e| OutputError::io(Stage::CreateDirectory, directory, e))?;
        debug!(directory, "created output directory");
    }

    let path = destination_path(filename, directory);
    let file = file_options(append)
        .open(&path)
        .map_err(|e| OutputError::io(Stage::Open, path.to_string_lossy(), e))?;

    debug!(path = %path.display(), append, "opened output file");
    Ok(file)
}

fn dir_builder() -> DirBuilder {
    let mut builder = DirBuilder::new();
    builder.recursive(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::DirBuilderExt;
        builder.mode(DIR_MODE);
    }
    builder
}

fn file_options(append: bool) -> OpenOptions {
    let mut options = OpenOptions::new();
    options.create(true);
    if append {
        options.append(true);
    } else {
        options.write(true).truncate(true);
    }
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(FILE_MODE);
    }
    options
}
