//! Core diagnostic types.

use std::fmt;

use crate::Location;

/// Severity level for diagnostics.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Severity {
    Error,
    Warning,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

/// A diagnostic message with a source location.
///
/// Carries its own `source` name rather than borrowing one from the emitter:
/// a single run lexes several buffers (the preprocessed file, the raw file,
/// and struct bodies re-lexed during code generation), each under its own
/// display name.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct Diagnostic {
    /// Severity level.
    pub severity: Severity,
    /// Display name of the buffer the location refers to.
    pub source: String,
    /// Where the problem was found.
    pub loc: Location,
    /// Human-readable message.
    pub message: String,
}

impl Diagnostic {
    /// Create a new error diagnostic.
    pub fn error(source: impl Into<String>, loc: Location, message: impl Into<String>) -> Self {
        Diagnostic {
            severity: Severity::Error,
            source: source.into(),
            loc,
            message: message.into(),
        }
    }

    /// Create a new warning diagnostic.
    pub fn warning(source: impl Into<String>, loc: Location, message: impl Into<String>) -> Self {
        Diagnostic {
            severity: Severity::Warning,
            source: source.into(),
            loc,
            message: message.into(),
        }
    }

    /// Returns `true` for error-severity diagnostics.
    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}: {}: {}",
            self.source, self.loc, self.severity, self.message
        )
    }
}
