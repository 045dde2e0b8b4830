//! The token scanner.
//!
//! Scans one token at a time with single-token lookahead. Every token
//! records the byte span it was cut from, so callers can splice rewritten
//! text back into the original buffer without re-rendering anything.

use heir_diagnostic::{Location, Span};

use crate::cursor::Cursor;
use crate::lex_error::{LexError, LexErrorKind};
use crate::source_buffer::SourceBuffer;
use crate::token::{classify_name, Token, TokenKind};

/// Streaming tokenizer over a [`SourceBuffer`].
///
/// `name` is the display name used in diagnostics. It does not have to be
/// a real path; struct bodies re-lexed later in the pipeline get
/// descriptive pseudo-names instead.
pub struct Lexer<'a> {
    name: String,
    cursor: Cursor<'a>,
    loc: Location,
    peeked: Option<Token<'a>>,
}

impl<'a> Lexer<'a> {
    pub fn new(name: impl Into<String>, buffer: &'a SourceBuffer) -> Self {
        Lexer {
            name: name.into(),
            cursor: buffer.cursor(),
            loc: Location::default(),
            peeked: None,
        }
    }

    /// Display name of the buffer being scanned.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Position just past the last consumed byte.
    ///
    /// With a token buffered by [`peek`](Self::peek) this is the position
    /// after that token, which is what EOF diagnostics want.
    pub fn loc(&self) -> Location {
        self.loc
    }

    /// Source text of an arbitrary byte range.
    pub fn slice(&self, span: Span) -> &'a str {
        self.cursor.slice(span.start, span.end)
    }

    /// Look at the next token without consuming it.
    pub fn peek(&mut self) -> Result<Option<Token<'a>>, LexError> {
        if self.peeked.is_none() {
            self.peeked = self.scan()?;
        }
        Ok(self.peeked)
    }

    /// Consume and return the next token, or `None` at EOF.
    pub fn next_token(&mut self) -> Result<Option<Token<'a>>, LexError> {
        match self.peeked.take() {
            Some(token) => Ok(Some(token)),
            None => self.scan(),
        }
    }

    fn scan(&mut self) -> Result<Option<Token<'a>>, LexError> {
        self.skip_whitespace();
        if self.cursor.is_eof() {
            return Ok(None);
        }

        let start = self.cursor.pos();
        let loc = self.loc;
        let b = self.cursor.current();

        let kind = match b {
            b'A'..=b'Z' | b'a'..=b'z' | b'_' => {
                self.cursor.advance();
                self.cursor
                    .eat_while(|b| b.is_ascii_alphanumeric() || b == b'_');
                TokenKind::Name
            }
            b'0'..=b'9' => {
                self.scan_number();
                TokenKind::Literal
            }
            b'(' | b')' | b'{' | b'}' | b'[' | b']' => {
                self.cursor.advance();
                TokenKind::Paren
            }
            b';' | b',' | b':' | b'?' => {
                self.cursor.advance();
                TokenKind::Separator
            }
            b'.' => {
                if self.cursor.peek() == b'.' && self.cursor.peek2() == b'.' {
                    self.cursor.advance_n(3);
                } else {
                    self.cursor.advance();
                }
                TokenKind::MemberAccess
            }
            b'-' if self.cursor.peek() == b'>' => {
                self.cursor.advance_n(2);
                TokenKind::MemberAccess
            }
            b'/' if self.cursor.peek() == b'/' => {
                self.scan_line_token();
                TokenKind::Comment
            }
            b'/' if self.cursor.peek() == b'*' => {
                self.scan_block_comment();
                TokenKind::Comment
            }
            b'=' | b'+' | b'-' | b'*' | b'/' | b'!' | b'^' | b'>' | b'<' => {
                self.cursor.advance();
                if self.cursor.current() == b'=' {
                    self.cursor.advance();
                }
                TokenKind::Operator
            }
            b'&' | b'|' => {
                // Doubled (`&&`, `||`) or compound-assign (`&=`, `|=`).
                self.cursor.advance();
                let next = self.cursor.current();
                if next == b || next == b'=' {
                    self.cursor.advance();
                }
                TokenKind::Operator
            }
            b'\'' => {
                self.scan_char(loc)?;
                TokenKind::Literal
            }
            b'"' => {
                self.scan_string(loc)?;
                TokenKind::Literal
            }
            b'#' => {
                self.scan_line_token();
                TokenKind::Directive
            }
            _ => return Err(LexError::new(loc, LexErrorKind::UnknownToken(b))),
        };

        let text = self.cursor.slice_from(start);
        self.bump_loc(text);
        let kind = if kind == TokenKind::Name {
            classify_name(text)
        } else {
            kind
        };
        Ok(Some(Token::new(
            loc,
            text,
            Span::new(start, self.cursor.pos()),
            kind,
        )))
    }

    fn skip_whitespace(&mut self) {
        loop {
            match self.cursor.current() {
                b'\n' => {
                    self.cursor.advance();
                    self.loc.line += 1;
                    self.loc.col = 0;
                }
                b' ' | b'\t' | b'\r' | b'\x0b' | b'\x0c' => {
                    self.cursor.advance();
                    self.loc.col += 1;
                }
                _ => break,
            }
        }
    }

    /// Advance the line/column position over consumed token text.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "token text is shorter than the u32-sized source"
    )]
    fn bump_loc(&mut self, text: &str) {
        let bytes = text.as_bytes();
        match memchr::memrchr(b'\n', bytes) {
            Some(last) => {
                self.loc.line += memchr::memchr_iter(b'\n', bytes).count() as u32;
                self.loc.col = (bytes.len() - last - 1) as u32;
            }
            None => self.loc.col += bytes.len() as u32,
        }
    }

    /// Numeric literal. The grammar is deliberately loose: the input has
    /// already survived a real C compiler's preprocessor, so this only
    /// has to find where the literal ends, not validate it.
    fn scan_number(&mut self) {
        let first = self.cursor.current();
        self.cursor.advance();
        if first == b'0' {
            match self.cursor.current() {
                b'x' | b'X' => {
                    self.cursor.advance();
                    self.cursor
                        .eat_while(|b| b.is_ascii_hexdigit() || b == b'\'');
                }
                b'b' | b'B' => {
                    self.cursor.advance();
                    self.cursor
                        .eat_while(|b| b == b'0' || b == b'1' || b == b'\'');
                }
                _ => {
                    // A leading zero means octal; `0.5` therefore lexes as
                    // three tokens. Harmless for declaration scanning.
                    self.cursor
                        .eat_while(|b| (b'0'..=b'7').contains(&b) || b == b'\'');
                }
            }
        } else {
            self.cursor
                .eat_while(|b| b.is_ascii_digit() || b == b'\'' || b == b'.');
        }
        // Width/signedness/float suffixes, any order, any case.
        self.cursor
            .eat_while(|b| matches!(b, b'l' | b'L' | b'u' | b'U' | b'f' | b'F'));
    }

    /// Line comment or preprocessor directive. A backslash immediately
    /// before the newline continues the token onto the next line; the
    /// final unescaped newline is not part of the token.
    fn scan_line_token(&mut self) {
        loop {
            self.cursor.eat_until_newline_or_eof();
            if self.cursor.is_eof() {
                break;
            }
            if self.cursor.prev() == b'\\' {
                self.cursor.advance();
                continue;
            }
            break;
        }
    }

    /// Block comment. An unterminated comment silently extends to EOF,
    /// matching what most C compilers accept with a warning.
    fn scan_block_comment(&mut self) {
        self.cursor.advance_n(2);
        loop {
            self.cursor.eat_until(b'*');
            if self.cursor.is_eof() {
                break;
            }
            self.cursor.advance();
            if self.cursor.current() == b'/' {
                self.cursor.advance();
                break;
            }
        }
    }

    /// Character literal: exactly one possibly-escaped character between
    /// the quotes. Anything else is fatal, the scanner cannot guess where
    /// the literal was meant to end.
    fn scan_char(&mut self, loc: Location) -> Result<(), LexError> {
        self.cursor.advance();
        if self.cursor.current() == b'\\' {
            self.cursor.advance();
        }
        if self.cursor.is_eof() {
            return Err(LexError::new(loc, LexErrorKind::UnterminatedChar));
        }
        self.cursor.advance();
        if self.cursor.current() != b'\'' {
            return Err(LexError::new(loc, LexErrorKind::UnterminatedChar));
        }
        self.cursor.advance();
        Ok(())
    }

    fn scan_string(&mut self, loc: Location) -> Result<(), LexError> {
        self.cursor.advance();
        loop {
            match self.cursor.skip_to_string_delim() {
                0 => return Err(LexError::new(loc, LexErrorKind::UnterminatedString)),
                b'\\' => {
                    self.cursor.advance();
                    if self.cursor.is_eof() {
                        return Err(LexError::new(loc, LexErrorKind::UnterminatedString));
                    }
                    self.cursor.advance();
                }
                _ => {
                    self.cursor.advance();
                    break;
                }
            }
        }
        Ok(())
    }
}
