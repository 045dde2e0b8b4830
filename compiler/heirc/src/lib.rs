//! Driver library for the `heir` binary.
//!
//! Split from the binary so integration tests can run the pipeline
//! without spawning a process.

pub mod dump;
pub mod error;
pub mod pipeline;
pub mod preprocess;

pub use error::DriverError;
pub use pipeline::{expand_file, expand_source, ExpandOptions, Expansion};
