//! Layout assertion generation.

use heir_graph::{DefId, DefTable};

use crate::error::RewriteError;
use crate::fields::member_names;

/// `_Static_assert` lines for one inheriting definition.
///
/// Every inherited member is checked against the direct parent only; the
/// parent's own assertions already chain the rest of the way to the
/// root, so offsets are pinned across the whole ancestry without
/// quadratic output. Ancestors are walked root-first so the lines read
/// in member order. Nameless definitions produce nothing, there is no
/// type name to spell inside `offsetof`.
pub(crate) fn layout_asserts(table: &DefTable<'_>, id: DefId) -> Result<String, RewriteError> {
    let def = &table[id];
    let (Some(self_ty), Some(parent)) = (def.type_name(), def.parent) else {
        return Ok(String::new());
    };
    let Some(parent_ty) = table[parent].type_name() else {
        return Ok(String::new());
    };

    let mut chain = Vec::new();
    let mut cursor = Some(parent);
    while let Some(ancestor) = cursor {
        chain.push(ancestor);
        cursor = table[ancestor].parent;
    }
    chain.reverse();

    let mut out = String::new();
    for ancestor in chain {
        let owner = table[ancestor].display_name();
        for member in member_names(table[ancestor].body, &owner)? {
            out.push_str(&format!(
                "_Static_assert(offsetof({self_ty}, {member}) == offsetof({parent_ty}, {member}), \"Offsets don't match\");\n"
            ));
        }
    }
    Ok(out)
}
