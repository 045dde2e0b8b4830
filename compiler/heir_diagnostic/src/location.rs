//! Line/column source locations.

use std::fmt;

/// A line/column position in a source buffer.
///
/// Both fields are 0-based; rendering adds 1 to each so diagnostics follow
/// the conventional `file:line:col` form editors understand. The lexer
/// advances a `Location` as bytes are consumed: a newline resets `col` to 0
/// and increments `line`.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct Location {
    pub line: u32,
    pub col: u32,
}

impl Location {
    /// Create a new location.
    #[inline]
    pub const fn new(line: u32, col: u32) -> Self {
        Location { line, col }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line + 1, self.col + 1)
    }
}
