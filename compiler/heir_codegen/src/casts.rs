//! `_Generic` cast macro generation.

use heir_graph::{DefId, DefTable};

/// Marker the rewriter replaces with the generated cast macros. Only the
/// first occurrence in the file is expanded.
pub const CAST_MARKER: &str = "HEIR_CASTS_HERE";

/// Cast macros for every definition that has descendants.
///
/// Each named ancestor gets a value macro and a pointer macro per name
/// spelling, so both `HEIR_AS_struct_Base(x)` and `HEIR_AS_base_t(x)`
/// exist when the struct carries both a tag and an alias. The `_Generic`
/// arms list the ancestor itself and then its descendants in depth-first
/// source order; each descendant appears under a single spelling because
/// `_Generic` rejects duplicate association types.
pub(crate) fn cast_macros(table: &DefTable<'_>) -> String {
    let mut out = String::new();
    for (id, def) in table.iter() {
        if def.children.is_empty() {
            continue;
        }
        let descendants: Vec<String> = {
            let mut ids = Vec::new();
            push_descendants(table, id, &mut ids);
            ids.iter()
                .filter_map(|&d| table[d].type_name())
                .collect()
        };
        if descendants.is_empty() {
            continue;
        }
        if let Some(tag) = def.tag {
            push_macro_pair(&mut out, &format!("struct_{tag}"), &format!("struct {tag}"), &descendants);
        }
        if let Some(alias) = def.alias {
            push_macro_pair(&mut out, alias, alias, &descendants);
        }
    }
    out
}

fn push_descendants(table: &DefTable<'_>, id: DefId, out: &mut Vec<DefId>) {
    for &child in &table[id].children {
        out.push(child);
        push_descendants(table, child, out);
    }
}

/// One value-cast and one pointer-cast `#define` for a given spelling of
/// the ancestor type.
fn push_macro_pair(out: &mut String, suffix: &str, self_ty: &str, descendants: &[String]) {
    out.push_str(&format!("#define HEIR_AS_{suffix}(T) _Generic((T), {self_ty}: (T)"));
    for desc in descendants {
        out.push_str(&format!(", {desc}: *({self_ty}*)&(T)"));
    }
    out.push_str(")\n");

    out.push_str(&format!("#define HEIR_AS_{suffix}S(T) _Generic((T), {self_ty}*: (T)"));
    for desc in descendants {
        out.push_str(&format!(", {desc}*: ({self_ty}*)(T)"));
    }
    out.push_str(")\n");
}
