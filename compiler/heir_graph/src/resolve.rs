//! Second pass: resolve parent references in the raw file.

use heir_diagnostic::{Diagnostic, DiagnosticQueue};
use heir_lexer::{Lexer, Token, TokenKind};

use crate::def::{Definition, Splice};
use crate::error::ParseError;
use crate::parse::{parse_struct_decl, RawDecl};
use crate::table::DefTable;

/// Scan the raw (unexpanded) file and link every declaration carrying a
/// parent reference to its parent in the table.
///
/// Parented declarations are resolved at any brace depth, matching the
/// collector. Children are appended in source order, so a child's id is
/// always greater than its parent's. A reference to a name the first pass never
/// collected is reported to the queue and the declaration is dropped;
/// scanning continues so one bad reference does not hide the rest.
pub fn resolve_inherits<'a>(
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
                if let Some(decl) = parse_struct_decl(lexer, true)? {
                    link_decl(lexer, table, queue, tok, decl, true)?;
                }
            }
            TokenKind::Struct => {
                if let Some(decl) = parse_struct_decl(lexer, false)? {
                    link_decl(lexer, table, queue, tok, decl, false)?;
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

fn link_decl<'a>(
    lexer: &mut Lexer<'a>,
    table: &mut DefTable<'a>,
    queue: &mut DiagnosticQueue,
    keyword: Token<'a>,
    decl: RawDecl<'a>,
    is_typedef: bool,
) -> Result<(), ParseError> {
    let Some(parent_ref) = decl.parent else {
        return Ok(());
    };

    let Some(pid) = table.find_parent(parent_ref.name, parent_ref.by_tag) else {
        let what = if parent_ref.by_tag { "struct" } else { "type" };
        queue.push(Diagnostic::error(
            lexer.name(),
            parent_ref.loc,
            format!("cannot inherit from unknown {what} `{}`", parent_ref.name),
        ));
        return Ok(());
    };

    if is_typedef && decl.alias.is_none() {
        queue.push(Diagnostic::warning(
            lexer.name(),
            keyword.loc,
            "typedef struct without an alias name",
        ));
        return Ok(());
    }

    // Generated text stops where the original tail resumes: at the alias
    // for a typedef, otherwise right after the closing brace.
    let body_end = match decl.alias {
        Some(alias) => alias.span.start,
        None => decl.close.end,
    };
    let after = scan_to_semicolon(lexer)?;

    let id = table.push(Definition {
        tag: decl.tag.map(|t| t.text),
        alias: decl.alias.map(|t| t.text),
        body: decl.body,
        parent: Some(pid),
        children: Vec::new(),
        splice: Some(Splice {
            start: keyword.span.start,
            body_end,
            after,
            is_typedef,
        }),
    });

    if table[id].is_nameless() {
        // Still flattened in place, but unnameable: no cast arm, no
        // assertions, and nothing can inherit from it later.
        queue.push(Diagnostic::warning(
            lexer.name(),
            keyword.loc,
            "inheriting struct has neither tag nor alias",
        ));
    } else {
        table[pid].children.push(id);
    }
    Ok(())
}

/// Consume up to and including the declaration's `;`, returning the byte
/// position just past it.
fn scan_to_semicolon(lexer: &mut Lexer<'_>) -> Result<u32, ParseError> {
    loop {
        let Some(tok) = lexer.next_token()? else {
            return Err(ParseError::ExpectedSemicolon { loc: lexer.loc() });
        };
        if tok.is_sep(';') {
            return Ok(tok.span.end);
        }
    }
}

#[cfg(test)]
mod tests;
