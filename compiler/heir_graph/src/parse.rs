//! Token-level recognition of a single struct declaration.
//!
//! Shared by both passes. The scanner here is deliberately lenient:
//! anything that stops looking like a definition (a forward declaration,
//! a variable of struct type, a function pointer declarator) makes it
//! bail with `None` and hand control back to the outer token loop.
//! Decision points peek before consuming, so a bail never swallows a
//! brace or semicolon the outer loop's depth tracking depends on.

use heir_diagnostic::{Location, Span};
use heir_lexer::{Lexer, Token, TokenKind};

use crate::error::ParseError;

/// Parent written between a struct's name and its body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct ParentRef<'a> {
    pub name: &'a str,
    /// True for `(struct X)`, which matches tags; a bare `(X)` matches
    /// typedef aliases instead.
    pub by_tag: bool,
    pub loc: Location,
}

/// A successfully recognized definition, before table insertion.
#[derive(Debug, Clone, Copy)]
pub(crate) struct RawDecl<'a> {
    pub tag: Option<Token<'a>>,
    pub parent: Option<ParentRef<'a>>,
    /// Member text between the braces.
    pub body: &'a str,
    /// Span of the closing `}`.
    pub close: Span,
    /// Typedef alias after the body, when scanning a typedef.
    pub alias: Option<Token<'a>>,
}

/// Recognize `[tag] [(parent)] { body } [alias]` after a consumed
/// `struct` keyword. Returns `Ok(None)` when the tokens turn out not to
/// be a definition.
pub(crate) fn parse_struct_decl<'a>(
    lexer: &mut Lexer<'a>,
    is_typedef: bool,
) -> Result<Option<RawDecl<'a>>, ParseError> {
    let mut tag = None;
    if let Some(tok) = lexer.peek()? {
        if tok.kind == TokenKind::Name {
            lexer.next_token()?;
            tag = Some(tok);
        }
    }

    let mut parent = None;
    if peek_is_paren(lexer, '(')? {
        lexer.next_token()?;
        parent = parse_parent_ref(lexer)?;
        if parent.is_none() {
            // Not a parent reference after all, e.g. a function pointer
            // declarator. The consumed `(` carries no structure the
            // outer loop tracks.
            return Ok(None);
        }
    }

    if !peek_is_paren(lexer, '{')? {
        // Forward declaration or a variable of an already-defined type.
        return Ok(None);
    }
    let open = match lexer.next_token()? {
        Some(tok) => tok,
        None => return Err(ParseError::UnclosedBlock { loc: lexer.loc() }),
    };

    let close = scan_body(lexer)?;
    let body = lexer.slice(Span::new(open.span.end, close.span.start));

    let mut alias = None;
    if is_typedef {
        if let Some(tok) = lexer.peek()? {
            if tok.kind == TokenKind::Name {
                lexer.next_token()?;
                alias = Some(tok);
            }
        }
    }

    Ok(Some(RawDecl {
        tag,
        parent,
        body,
        close: close.span,
        alias,
    }))
}

/// After a consumed `(`: `[struct] Name )`. Returns `None` when the next
/// tokens cannot be a parent reference. A reference that matched
/// `[struct] Name` but lacks the `)` is a hard error; at that point no
/// other reading of the source remains.
fn parse_parent_ref<'a>(lexer: &mut Lexer<'a>) -> Result<Option<ParentRef<'a>>, ParseError> {
    let mut by_tag = false;
    if let Some(tok) = lexer.peek()? {
        if tok.kind == TokenKind::Struct {
            lexer.next_token()?;
            by_tag = true;
        }
    }

    let name = match lexer.peek()? {
        Some(tok) if tok.kind == TokenKind::Name => {
            lexer.next_token()?;
            tok
        }
        _ if by_tag => return Err(ParseError::ExpectedCloseParen { loc: lexer.loc() }),
        _ => return Ok(None),
    };

    if !peek_is_paren(lexer, ')')? {
        return Err(ParseError::ExpectedCloseParen { loc: lexer.loc() });
    }
    lexer.next_token()?;

    Ok(Some(ParentRef {
        name: name.text,
        by_tag,
        loc: name.loc,
    }))
}

/// Consume a brace-balanced body after its `{`, returning the closing
/// brace token.
fn scan_body<'a>(lexer: &mut Lexer<'a>) -> Result<Token<'a>, ParseError> {
    let mut depth = 1u32;
    loop {
        let Some(tok) = lexer.next_token()? else {
            return Err(ParseError::UnclosedBlock { loc: lexer.loc() });
        };
        if tok.is_paren('{') {
            depth += 1;
        } else if tok.is_paren('}') {
            depth -= 1;
            if depth == 0 {
                return Ok(tok);
            }
        }
    }
}

fn peek_is_paren(lexer: &mut Lexer<'_>, c: char) -> Result<bool, ParseError> {
    Ok(lexer.peek()?.is_some_and(|tok| tok.is_paren(c)))
}
