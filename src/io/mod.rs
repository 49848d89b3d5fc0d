//! I/O abstractions for output destinations.
//!
//! This module provides:
//! - `create_destination`: Creates the output file (and its directory)
//! - `OutputTarget`: Trait for output destinations
//! - Standard implementations for files and stdout
//! - An in-memory sink for tests and in-process consumers

mod destination;
mod memory;
mod output;
mod std_io;

pub use destination::{create_destination, destination_path};
pub use memory::InMemorySink;
pub use output::OutputTarget;
pub use std_io::{FileOutput, StdoutOutput, target_for};
