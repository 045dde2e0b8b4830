//! A single collected struct definition.

/// Index of a definition in its [`DefTable`](crate::DefTable).
///
/// Ids are assigned in source order, so a resolved parent always has a
/// smaller id than any of its children.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DefId(pub u32);

/// Byte spans the rewriter needs to replace a declaration in the raw file.
///
/// `start..after` is the whole declaration including the trailing
/// semicolon. `body_end` marks where generated text stops and the original
/// tail (the typedef alias or the declarator list) resumes verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Splice {
    pub start: u32,
    pub body_end: u32,
    pub after: u32,
    /// Whether the replacement opens with `typedef`.
    pub is_typedef: bool,
}

/// A struct definition, with its inheritance links once resolved.
///
/// Borrows all of its text from the source buffer it was scanned from.
/// Definitions found in the first pass have no [`Splice`]; their spans
/// point into preprocessed text the rewriter never touches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Definition<'a> {
    /// Struct tag, the name after the `struct` keyword.
    pub tag: Option<&'a str>,
    /// Typedef alias, the name after the closing brace.
    pub alias: Option<&'a str>,
    /// Member text between the braces, braces excluded.
    pub body: &'a str,
    pub parent: Option<DefId>,
    /// Direct children in source order. Nameless children are linked
    /// through their `parent` field only; they cannot appear in a
    /// `_Generic` arm so the cast generator must not see them.
    pub children: Vec<DefId>,
    pub splice: Option<Splice>,
}

impl<'a> Definition<'a> {
    /// True when the definition has neither tag nor alias.
    pub fn is_nameless(&self) -> bool {
        self.tag.is_none() && self.alias.is_none()
    }

    /// The C type name, spelled the way generated code refers to it.
    /// Prefers the tag form; `None` for nameless definitions.
    pub fn type_name(&self) -> Option<String> {
        match (self.tag, self.alias) {
            (Some(tag), _) => Some(format!("struct {tag}")),
            (None, Some(alias)) => Some(alias.to_owned()),
            (None, None) => None,
        }
    }

    /// Human-readable name for diagnostics and the dump view.
    pub fn display_name(&self) -> String {
        self.type_name()
            .unwrap_or_else(|| "<anonymous struct>".to_owned())
    }
}
