//! Splicing generated declarations back into the raw file.

use heir_diagnostic::{Diagnostic, DiagnosticQueue, Location};
use heir_graph::{DefId, DefTable, Definition, Splice};

use crate::asserts::layout_asserts;
use crate::casts::{cast_macros, CAST_MARKER};
use crate::error::RewriteError;

/// Produce the rewritten file from the raw text and the resolved table.
///
/// Text outside the recorded splices is copied verbatim, so formatting,
/// comments and directives all survive. Each inheriting declaration is
/// replaced by its flattened form followed by its layout assertions, and
/// the first [`CAST_MARKER`] occurrence becomes the cast macro block.
/// `name` is the display name used for diagnostics about the file as a
/// whole.
#[allow(
    clippy::cast_possible_truncation,
    reason = "splice offsets index a u32-sized source"
)]
pub fn rewrite(
    name: &str,
    raw: &str,
    table: &DefTable<'_>,
    queue: &mut DiagnosticQueue,
) -> Result<String, RewriteError> {
    let mut out = String::with_capacity(raw.len() + raw.len() / 4);
    let mut pos = 0usize;
    for (id, def) in table.iter() {
        let Some(splice) = def.splice else { continue };
        debug_assert!(splice.start as usize >= pos, "splices out of order");
        out.push_str(&raw[pos..splice.start as usize]);
        push_replacement(&mut out, raw, table, id, def, splice)?;
        pos = splice.after as usize;
    }
    out.push_str(&raw[pos..]);

    let casts = cast_macros(table);
    match memchr::memmem::find(out.as_bytes(), CAST_MARKER.as_bytes()) {
        Some(idx) => out.replace_range(idx..idx + CAST_MARKER.len(), &casts),
        None if !casts.is_empty() => queue.push(Diagnostic::warning(
            name,
            Location::default(),
            format!("no {CAST_MARKER} marker found; cast macros were not emitted"),
        )),
        None => {}
    }
    Ok(out)
}

/// The flattened declaration plus its assertions, replacing
/// `raw[splice.start..splice.after]`.
#[allow(
    clippy::cast_possible_truncation,
    reason = "splice offsets index a u32-sized source"
)]
fn push_replacement(
    out: &mut String,
    raw: &str,
    table: &DefTable<'_>,
    id: DefId,
    def: &Definition<'_>,
    splice: Splice,
) -> Result<(), RewriteError> {
    if splice.is_typedef {
        out.push_str("typedef ");
    }
    out.push_str("struct");
    if let Some(tag) = def.tag {
        out.push(' ');
        out.push_str(tag);
    }
    out.push_str(" {");

    // Ancestor members root-first, then the definition's own.
    let mut chain = Vec::new();
    let mut cursor = Some(id);
    while let Some(link) = cursor {
        chain.push(link);
        cursor = table[link].parent;
    }
    chain.reverse();
    for link in chain {
        out.push_str(table[link].body);
    }

    out.push('}');
    if splice.is_typedef {
        out.push(' ');
    }
    out.push_str(&raw[splice.body_end as usize..splice.after as usize]);

    let asserts = layout_asserts(table, id)?;
    if !asserts.is_empty() {
        out.push('\n');
        out.push_str(&asserts);
    }
    Ok(())
}
