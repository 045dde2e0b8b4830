//! Driver errors.

use std::io;
use std::path::PathBuf;
use std::process::ExitStatus;

use heir_diagnostic::Diagnostic;

/// Anything that stops a run before output is written.
///
/// Scanning and generation problems arrive pre-rendered as a
/// [`Diagnostic`] so the driver prints them with a source location like
/// any queued error.
#[derive(Debug, thiserror::Error)]
pub enum DriverError {
    #[error("cannot read `{}`: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot write `{}`: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot run the C preprocessor: {0}")]
    Spawn(#[source] io::Error),

    #[error("C preprocessor exited with {status}\n{stderr}")]
    Preprocessor { status: ExitStatus, stderr: String },

    #[error("C preprocessor produced non-UTF-8 output")]
    NonUtf8Output,

    #[error("{0}")]
    Fatal(Diagnostic),
}
