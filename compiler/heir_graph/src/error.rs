//! Declaration scanning errors.

use heir_diagnostic::{Diagnostic, Location};
use heir_lexer::LexError;
use std::fmt;

/// Fatal error while scanning declarations.
///
/// Unknown parent references are not represented here; those are pushed
/// to the diagnostic queue so scanning can continue past them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseError {
    Lex(LexError),
    /// A struct body whose closing brace never arrived.
    UnclosedBlock { loc: Location },
    /// A parent reference that opened with `(` but never closed.
    ExpectedCloseParen { loc: Location },
    /// A definition with no terminating semicolon before EOF.
    ExpectedSemicolon { loc: Location },
}

impl ParseError {
    pub fn into_diagnostic(self, source: &str) -> Diagnostic {
        match self {
            ParseError::Lex(err) => err.into_diagnostic(source),
            ParseError::UnclosedBlock { loc }
            | ParseError::ExpectedCloseParen { loc }
            | ParseError::ExpectedSemicolon { loc } => {
                Diagnostic::error(source, loc, self.to_string())
            }
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::Lex(err) => err.fmt(f),
            ParseError::UnclosedBlock { .. } => write!(f, "unclosed struct body"),
            ParseError::ExpectedCloseParen { .. } => {
                write!(f, "expected `)` to close the parent reference")
            }
            ParseError::ExpectedSemicolon { .. } => {
                write!(f, "expected `;` after the struct declaration")
            }
        }
    }
}

impl std::error::Error for ParseError {}

impl From<LexError> for ParseError {
    fn from(err: LexError) -> Self {
        ParseError::Lex(err)
    }
}
