//! Append-only definition table.

use std::ops::{Index, IndexMut};

use crate::def::{DefId, Definition};

/// All definitions collected so far, indexed by [`DefId`].
///
/// Append-only: ids are stable for the lifetime of a run and follow
/// source order across both passes.
#[derive(Debug, Default)]
pub struct DefTable<'a> {
    defs: Vec<Definition<'a>>,
}

impl<'a> DefTable<'a> {
    pub fn new() -> Self {
        DefTable::default()
    }

    /// Append a definition and return its id.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "a u32-sized source cannot hold u32::MAX declarations"
    )]
    pub fn push(&mut self, def: Definition<'a>) -> DefId {
        let id = DefId(self.defs.len() as u32);
        self.defs.push(def);
        id
    }

    pub fn len(&self) -> usize {
        self.defs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.defs.is_empty()
    }

    /// Definitions paired with their ids, in id (source) order.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "indices stay below the u32 id space"
    )]
    pub fn iter(&self) -> impl Iterator<Item = (DefId, &Definition<'a>)> {
        self.defs
            .iter()
            .enumerate()
            .map(|(i, def)| (DefId(i as u32), def))
    }

    /// Find the definition a parent reference names.
    ///
    /// `struct X` references match tags only; bare references match
    /// either name, so `(A)` still reaches a plain `struct A` that never
    /// got a typedef. The first match in id order wins, so a parent
    /// shadowed by a later duplicate resolves to the earlier one.
    pub fn find_parent(&self, name: &str, by_tag: bool) -> Option<DefId> {
        self.iter()
            .find(|(_, def)| {
                if by_tag {
                    def.tag == Some(name)
                } else {
                    def.alias == Some(name) || def.tag == Some(name)
                }
            })
            .map(|(id, _)| id)
    }
}

impl<'a> Index<DefId> for DefTable<'a> {
    type Output = Definition<'a>;

    fn index(&self, id: DefId) -> &Self::Output {
        &self.defs[id.0 as usize]
    }
}

impl<'a> IndexMut<DefId> for DefTable<'a> {
    fn index_mut(&mut self, id: DefId) -> &mut Self::Output {
        &mut self.defs[id.0 as usize]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn named(tag: Option<&'static str>, alias: Option<&'static str>) -> Definition<'static> {
        Definition {
            tag,
            alias,
            body: "",
            parent: None,
            children: Vec::new(),
            splice: None,
        }
    }

    #[test]
    fn push_assigns_sequential_ids() {
        let mut table = DefTable::new();
        assert_eq!(table.push(named(Some("A"), None)), DefId(0));
        assert_eq!(table.push(named(None, Some("b_t"))), DefId(1));
        assert_eq!(table.len(), 2);
        assert_eq!(table[DefId(0)].tag, Some("A"));
    }

    #[test]
    fn parent_lookup_respects_reference_form() {
        let mut table = DefTable::new();
        table.push(named(Some("A"), Some("a_t")));
        table.push(named(None, Some("A")));

        // `struct A` only matches the tag, even though an alias `A` exists.
        assert_eq!(table.find_parent("A", true), Some(DefId(0)));
        // A bare `A` takes the first definition carrying that name.
        assert_eq!(table.find_parent("A", false), Some(DefId(0)));
        assert_eq!(table.find_parent("a_t", false), Some(DefId(0)));
        assert_eq!(table.find_parent("a_t", true), None);
        assert_eq!(table.find_parent("missing", false), None);
    }

    #[test]
    fn bare_lookup_reaches_untypedefed_tags() {
        let mut table = DefTable::new();
        table.push(named(Some("Base"), None));
        assert_eq!(table.find_parent("Base", false), Some(DefId(0)));
    }

    #[test]
    fn first_match_wins() {
        let mut table = DefTable::new();
        table.push(named(Some("Dup"), None));
        table.push(named(Some("Dup"), None));
        assert_eq!(table.find_parent("Dup", true), Some(DefId(0)));
    }
}
