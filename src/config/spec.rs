//! Output policies.

/// Policy for handling existing output files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FileExistsPolicy {
    /// Truncate existing files
    #[default]
    Overwrite,
    /// Append to existing files
    Append,
}

impl FileExistsPolicy {
    /// Map the usual boolean append switch onto a policy.
    pub fn from_append_flag(append: bool) -> Self {
        if append {
            FileExistsPolicy::Append
        } else {
            FileExistsPolicy::Overwrite
        }
    }
}

/// Order in which records of a collection are emitted.
///
/// Result collections are usually hash maps, whose iteration order changes
/// from run to run. `Sorted` emits records by ascending key instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RecordOrder {
    #[default]
    Sorted,
    /// Whatever order the collection iterates in
    Unordered,
}
