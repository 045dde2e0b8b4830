//! Token type produced by the scanner.

use heir_diagnostic::{Location, Span};

/// Broad syntactic class of a token.
///
/// The classes are only as fine-grained as declaration scanning needs.
/// All punctuation that never matters structurally is lumped into
/// `Separator` and `Operator`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// Identifier that is not a recognized keyword.
    Name,
    /// `#...` preprocessor line, including continuations.
    Directive,
    /// Line or block comment, kept verbatim.
    Comment,
    /// The `typedef` keyword.
    Typedef,
    /// The `struct` keyword.
    Struct,
    /// The `enum` keyword.
    Enum,
    /// A single bracketing character: `(` `)` `{` `}` `[` `]`.
    Paren,
    /// `;` `,` `:` `?`
    Separator,
    /// Arithmetic, logical and assignment operators.
    Operator,
    /// `.`, `...` or `->`.
    MemberAccess,
    /// Numeric, character or string literal, plus `true`/`false`.
    Literal,
}

/// A lexed token borrowing its text from the source buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    /// Position of the first byte, for diagnostics.
    pub loc: Location,
    /// Verbatim source text.
    pub text: &'a str,
    /// Byte range within the source buffer.
    pub span: Span,
    pub kind: TokenKind,
}

impl<'a> Token<'a> {
    pub fn new(loc: Location, text: &'a str, span: Span, kind: TokenKind) -> Self {
        Token {
            loc,
            text,
            span,
            kind,
        }
    }

    /// True for a `Paren` token with exactly this character.
    #[inline]
    pub fn is_paren(&self, c: char) -> bool {
        self.kind == TokenKind::Paren && self.text.starts_with(c)
    }

    /// True for a `Separator` token with exactly this character.
    #[inline]
    pub fn is_sep(&self, c: char) -> bool {
        self.kind == TokenKind::Separator && self.text.starts_with(c)
    }
}

/// Reclassify an identifier after scanning.
///
/// Keywords that matter to declaration scanning get their own kind and
/// the boolean literals fold into `Literal`. Everything else stays a
/// plain `Name`.
pub(crate) fn classify_name(text: &str) -> TokenKind {
    match text {
        "typedef" => TokenKind::Typedef,
        "struct" => TokenKind::Struct,
        "enum" => TokenKind::Enum,
        "true" | "false" => TokenKind::Literal,
        _ => TokenKind::Name,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn keywords_reclassify() {
        assert_eq!(classify_name("typedef"), TokenKind::Typedef);
        assert_eq!(classify_name("struct"), TokenKind::Struct);
        assert_eq!(classify_name("enum"), TokenKind::Enum);
        assert_eq!(classify_name("true"), TokenKind::Literal);
        assert_eq!(classify_name("false"), TokenKind::Literal);
        assert_eq!(classify_name("structure"), TokenKind::Name);
        assert_eq!(classify_name("Typedef"), TokenKind::Name);
    }

    #[test]
    fn paren_and_sep_predicates() {
        let open = Token::new(
            Location::default(),
            "{",
            Span::new(0, 1),
            TokenKind::Paren,
        );
        assert!(open.is_paren('{'));
        assert!(!open.is_paren('}'));
        assert!(!open.is_sep('{'));

        let semi = Token::new(
            Location::default(),
            ";",
            Span::new(0, 1),
            TokenKind::Separator,
        );
        assert!(semi.is_sep(';'));
        assert!(!semi.is_paren(';'));
    }
}
