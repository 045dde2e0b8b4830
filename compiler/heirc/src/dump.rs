//! Hierarchy tree rendering for `--dump`.

use heir_graph::{DefId, DefTable};

/// Render every root definition and its descendants, two spaces per
/// level. Nameless definitions never appear in a parent's child list, so
/// the tree only shows types that generated code can name.
pub fn render_tree(table: &DefTable<'_>) -> String {
    let mut out = String::new();
    for (id, def) in table.iter() {
        if def.parent.is_none() {
            render_node(table, id, 0, &mut out);
        }
    }
    out
}

fn render_node(table: &DefTable<'_>, id: DefId, depth: usize, out: &mut String) {
    let def = &table[id];
    out.push_str(&"  ".repeat(depth));
    out.push_str(&def.display_name());
    out.push('\n');
    for &child in &def.children {
        render_node(table, child, depth + 1, out);
    }
}
