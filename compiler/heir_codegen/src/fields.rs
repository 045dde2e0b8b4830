//! Member name extraction from struct body text.

use heir_lexer::{Lexer, SourceBuffer, TokenKind};

use crate::error::RewriteError;

/// Names of the members declared directly in `body`.
///
/// The body is re-lexed under a pseudo-name built from the defining
/// struct, so diagnostics still point somewhere a person can find. The
/// extraction is declarator-shaped rather than a real C parse: a member
/// is everything up to a top-level `;` and its name is the last
/// identifier in it, which holds for scalars, pointers, arrays and
/// nested braces alike.
pub(crate) fn member_names(body: &str, owner: &str) -> Result<Vec<String>, RewriteError> {
    let source = format!("{owner} struct body");
    let buf = SourceBuffer::new(body);
    let mut lexer = Lexer::new(&source, &buf);

    let mut names = Vec::new();
    let mut depth = 0u32;
    let mut last_name: Option<String> = None;
    let mut member_start = None;

    loop {
        let tok = match lexer.next_token() {
            Ok(Some(tok)) => tok,
            Ok(None) => break,
            Err(err) => return Err(RewriteError::Lex { source, err }),
        };
        let at_member_start = member_start.is_none();
        match tok.kind {
            // Comments and stray directives carry no declarator.
            TokenKind::Comment | TokenKind::Directive => continue,
            TokenKind::Paren if tok.is_paren('{') => depth += 1,
            TokenKind::Paren if tok.is_paren('}') => depth = depth.saturating_sub(1),
            TokenKind::Separator if depth == 0 && tok.is_sep(';') => {
                match last_name.take() {
                    Some(name) => names.push(name),
                    // Stray semicolons separate nothing; anything else
                    // without an identifier has no usable member name.
                    None => {
                        if let Some(loc) = member_start {
                            return Err(RewriteError::InvalidMember { source, loc });
                        }
                    }
                }
                member_start = None;
                continue;
            }
            TokenKind::Name => {
                if depth == 0 {
                    last_name = Some(tok.text.to_owned());
                }
            }
            // Keyword-led types such as `struct Node` or `enum Color`.
            TokenKind::Struct | TokenKind::Enum => {}
            _ if at_member_start && depth == 0 => {
                return Err(RewriteError::ExpectedType {
                    source,
                    loc: tok.loc,
                });
            }
            _ => {}
        }
        if depth == 0 && member_start.is_none() {
            member_start = Some(tok.loc);
        }
    }
    Ok(names)
}
