//! Code generation errors.

use heir_diagnostic::{Diagnostic, Location};
use heir_lexer::LexError;
use std::fmt;

/// Fatal error while generating output.
///
/// Struct bodies are re-lexed during generation under descriptive
/// pseudo-names, so each variant carries the name of the buffer the
/// location refers to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RewriteError {
    Lex { source: String, err: LexError },
    /// A struct member that does not open with a type name.
    ExpectedType { source: String, loc: Location },
    /// A struct member with no identifier to take as its name.
    InvalidMember { source: String, loc: Location },
}

impl RewriteError {
    pub fn into_diagnostic(self) -> Diagnostic {
        match self {
            RewriteError::Lex { source, err } => err.into_diagnostic(&source),
            RewriteError::ExpectedType { source, loc } => {
                Diagnostic::error(source, loc, "expected a type")
            }
            RewriteError::InvalidMember { source, loc } => {
                Diagnostic::error(source, loc, "not a valid member declaration")
            }
        }
    }
}

impl fmt::Display for RewriteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RewriteError::Lex { source, err } => write!(f, "{source}: {err}"),
            RewriteError::ExpectedType { source, loc } => {
                write!(f, "{source}:{loc}: expected a type")
            }
            RewriteError::InvalidMember { source, loc } => {
                write!(f, "{source}:{loc}: not a valid member declaration")
            }
        }
    }
}

impl std::error::Error for RewriteError {}
