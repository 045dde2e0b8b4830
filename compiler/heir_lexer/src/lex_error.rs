//! Scanner errors.

use heir_diagnostic::{Diagnostic, Location};
use std::fmt;

/// Reason scanning could not continue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LexErrorKind {
    /// A `"` literal with no closing quote before EOF.
    UnterminatedString,
    /// A `'` literal with no closing quote where one was required.
    UnterminatedChar,
    /// A byte that starts no token.
    UnknownToken(u8),
}

/// A fatal scanning error at a known position.
///
/// Unlike declaration-level problems these are never recoverable; the
/// scanner cannot resynchronize after a malformed literal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LexError {
    pub loc: Location,
    pub kind: LexErrorKind,
}

impl LexError {
    pub fn new(loc: Location, kind: LexErrorKind) -> Self {
        LexError { loc, kind }
    }

    /// Convert into a diagnostic attributed to `source`.
    pub fn into_diagnostic(self, source: &str) -> Diagnostic {
        Diagnostic::error(source, self.loc, self.to_string())
    }
}

impl fmt::Display for LexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            LexErrorKind::UnterminatedString => write!(f, "unterminated string literal"),
            LexErrorKind::UnterminatedChar => write!(f, "unterminated character literal"),
            LexErrorKind::UnknownToken(b) => {
                if b.is_ascii_graphic() {
                    write!(f, "unknown token `{}`", b as char)
                } else {
                    write!(f, "unknown token (byte 0x{b:02x})")
                }
            }
        }
    }
}

impl std::error::Error for LexError {}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn display_forms() {
        let loc = Location::new(2, 4);
        assert_eq!(
            LexError::new(loc, LexErrorKind::UnterminatedString).to_string(),
            "unterminated string literal"
        );
        assert_eq!(
            LexError::new(loc, LexErrorKind::UnknownToken(b'$')).to_string(),
            "unknown token `$`"
        );
        assert_eq!(
            LexError::new(loc, LexErrorKind::UnknownToken(0x07)).to_string(),
            "unknown token (byte 0x07)"
        );
    }

    #[test]
    fn diagnostic_carries_location() {
        let err = LexError::new(Location::new(0, 3), LexErrorKind::UnterminatedChar);
        let diag = err.into_diagnostic("lit.c");
        assert!(diag.is_error());
        assert_eq!(diag.to_string(), "lit.c:1:4: error: unterminated character literal");
    }
}
