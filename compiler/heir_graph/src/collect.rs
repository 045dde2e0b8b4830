//! First pass: gather plain struct definitions.

use heir_diagnostic::{Diagnostic, DiagnosticQueue};
use heir_lexer::{Lexer, TokenKind};

use crate::def::Definition;
use crate::error::ParseError;
use crate::parse::parse_struct_decl;
use crate::table::DefTable;

/// Scan preprocessor-expanded text and append every named struct
/// definition to the table.
///
/// Runs over expanded text so parents defined in `#include`d headers are
/// collected too. Definitions are recognized at any brace depth, so a
/// struct declared inside a function body still enters the table; the
/// depth counter only backs the final unclosed-block check. Declarations
/// carrying a parent reference are left for
/// [`resolve_inherits`](crate::resolve_inherits), which scans the raw
/// file and records splice spans the expanded text cannot provide.
pub fn collect_definitions<'a>(
    lexer: &mut Lexer<'a>,
    table: &mut DefTable<'a>,
    queue: &mut DiagnosticQueue,
) -> Result<(), ParseError> {
    let mut depth = 0u32;
    while let Some(tok) = lexer.next_token()? {
        match tok.kind {
            TokenKind::Paren if tok.is_paren('{') => depth += 1,
            TokenKind::Paren if tok.is_paren('}') => depth = depth.saturating_sub(1),
            TokenKind::Typedef => {
                let follows_struct = lexer
                    .peek()?
                    .is_some_and(|next| next.kind == TokenKind::Struct);
                if !follows_struct {
                    continue;
                }
                lexer.next_token()?;
                let Some(decl) = parse_struct_decl(lexer, true)? else {
                    continue;
                };
                if decl.parent.is_some() {
                    continue;
                }
                let Some(alias) = decl.alias else {
                    queue.push(Diagnostic::warning(
                        lexer.name(),
                        tok.loc,
                        "typedef struct without an alias name",
                    ));
                    continue;
                };
                table.push(Definition {
                    tag: decl.tag.map(|t| t.text),
                    alias: Some(alias.text),
                    body: decl.body,
                    parent: None,
                    children: Vec::new(),
                    splice: None,
                });
            }
            TokenKind::Struct => {
                let Some(decl) = parse_struct_decl(lexer, false)? else {
                    continue;
                };
                // Anonymous definitions can never be named as a parent.
                if decl.parent.is_none() && decl.tag.is_some() {
                    table.push(Definition {
                        tag: decl.tag.map(|t| t.text),
                        alias: None,
                        body: decl.body,
                        parent: None,
                        children: Vec::new(),
                        splice: None,
                    });
                }
            }
            _ => {}
        }
    }
    if depth != 0 {
        return Err(ParseError::UnclosedBlock { loc: lexer.loc() });
    }
    Ok(())
}
