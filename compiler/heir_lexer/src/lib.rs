//! Token-level lexer for C-like source text.
//!
//! The lexer is span-based: every [`Token`] references the source buffer it
//! was scanned from, and concatenating the gaps between token spans with the
//! spans themselves reconstructs the input byte-for-byte. That property is
//! what lets the rewriter splice generated code into otherwise untouched
//! source text.
//!
//! Scanning is deliberately lenient: numeric literals are tokenized without
//! validating well-formedness, comments and preprocessor directives become
//! opaque single tokens, and an unterminated block comment simply spans to
//! the end of input. Only unterminated string/char literals and unknown
//! leading bytes are hard errors.

mod cursor;
mod lex_error;
mod lexer;
mod source_buffer;
mod token;

pub use cursor::Cursor;
pub use lex_error::{LexError, LexErrorKind};
pub use lexer::Lexer;
pub use source_buffer::SourceBuffer;
pub use token::{Token, TokenKind};
