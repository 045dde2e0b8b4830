use heir_diagnostic::DiagnosticQueue;
use heir_lexer::{Lexer, SourceBuffer};
use pretty_assertions::assert_eq;

use crate::{collect_definitions, resolve_inherits, DefId, DefTable, ParseError};

/// Run both passes over the same text, as if the file included nothing.
fn resolve(src: &str) -> (DefTable<'static>, DiagnosticQueue) {
    let buf = Box::leak(Box::new(SourceBuffer::new(src)));
    let mut table = DefTable::new();
    let mut queue = DiagnosticQueue::new();
    let mut first = Lexer::new("test.c", buf);
    collect_definitions(&mut first, &mut table, &mut queue).expect("collect failed");
    let mut second = Lexer::new("test.c", buf);
    resolve_inherits(&mut second, &mut table, &mut queue).expect("resolve failed");
    (table, queue)
}

#[test]
fn links_child_to_parent_by_alias() {
    let (table, queue) = resolve(
        "typedef struct { int x; } base_t;\n\
         typedef struct (base_t) { int y; } child_t;\n",
    );
    assert!(queue.is_empty());
    assert_eq!(table.len(), 2);
    let child = &table[DefId(1)];
    assert_eq!(child.alias, Some("child_t"));
    assert_eq!(child.parent, Some(DefId(0)));
    assert_eq!(table[DefId(0)].children, vec![DefId(1)]);
}

#[test]
fn links_child_to_parent_by_tag() {
    let (table, queue) = resolve(
        "struct Base { int x; };\n\
         struct Child(struct Base) { int y; };\n",
    );
    assert!(queue.is_empty());
    assert_eq!(table[DefId(1)].parent, Some(DefId(0)));
}

#[test]
fn bare_reference_reaches_plain_struct_tags() {
    let (table, queue) = resolve(
        "struct Base { int x; };\n\
         struct Child(Base) { int y; };\n",
    );
    assert!(queue.is_empty());
    assert_eq!(table[DefId(1)].parent, Some(DefId(0)));
    assert_eq!(table[DefId(0)].children, vec![DefId(1)]);
}

#[test]
fn tag_reference_ignores_aliases() {
    let (table, queue) = resolve(
        "typedef struct { int x; } Base;\n\
         struct Child(struct Base) { int y; };\n",
    );
    // `struct Base` insists on a tag; the typedef alias does not count.
    assert_eq!(table.len(), 1);
    assert_eq!(queue.error_count(), 1);
    let diag = queue.iter().next().expect("diagnostic");
    assert_eq!(
        diag.to_string(),
        "test.c:2:21: error: cannot inherit from unknown struct `Base`"
    );
}

#[test]
fn unknown_parent_reports_and_continues() {
    let (table, queue) = resolve(
        "typedef struct { int x; } base_t;\n\
         typedef struct (missing_t) { int y; } lost_t;\n\
         typedef struct (base_t) { int z; } found_t;\n",
    );
    assert_eq!(queue.error_count(), 1);
    // The bad declaration is dropped, the good one still resolves.
    assert_eq!(table.len(), 2);
    assert_eq!(table[DefId(1)].alias, Some("found_t"));
    assert_eq!(table[DefId(1)].parent, Some(DefId(0)));
}

#[test]
fn children_follow_source_order() {
    let (table, queue) = resolve(
        "struct A { int a; };\n\
         struct B(struct A) { int b; };\n\
         struct C(struct B) { int c; };\n\
         struct D(struct A) { int d; };\n",
    );
    assert!(queue.is_empty());
    assert_eq!(table[DefId(0)].children, vec![DefId(1), DefId(3)]);
    assert_eq!(table[DefId(1)].children, vec![DefId(2)]);
    // Ids follow source order, so every parent precedes its children.
    for (id, def) in table.iter() {
        if let Some(parent) = def.parent {
            assert!(parent.0 < id.0);
        }
    }
}

#[test]
fn splice_spans_cover_the_declaration() {
    let reordered = "struct Base { int x; };\nstruct Child(struct Base) { int y; } kid;\n";
    let (table, queue) = resolve(reordered);
    assert!(queue.is_empty());

    let splice = table[DefId(1)].splice.expect("splice recorded");
    let decl_start = reordered.find("struct Child").expect("decl") as u32;
    let close = reordered.rfind('}').expect("close brace") as u32 + 1;
    let semi = reordered.rfind(';').expect("semicolon") as u32 + 1;
    assert_eq!(splice.start, decl_start);
    assert_eq!(splice.body_end, close);
    assert_eq!(splice.after, semi);
    assert!(!splice.is_typedef);
    // The original tail between body_end and after is kept verbatim.
    assert_eq!(&reordered[splice.body_end as usize..splice.after as usize], " kid;");
}

#[test]
fn typedef_splice_stops_at_the_alias() {
    let src = "typedef struct Base { int x; } Base;\n\
               typedef struct Child(struct Base) { int y; } Child;\n";
    let (table, queue) = resolve(src);
    assert!(queue.is_empty());

    let splice = table[DefId(1)].splice.expect("splice recorded");
    assert!(splice.is_typedef);
    let start = src.find("typedef struct Child").expect("decl") as u32;
    assert_eq!(splice.start, start);
    assert_eq!(
        &src[splice.body_end as usize..splice.after as usize],
        "Child;"
    );
}

#[test]
fn first_pass_definitions_have_no_splice() {
    let (table, _) = resolve("struct Base { int x; };");
    assert_eq!(table[DefId(0)].splice, None);
}

#[test]
fn nameless_child_is_linked_but_not_listed() {
    let (table, queue) = resolve(
        "struct Base { int x; };\n\
         struct (struct Base) { int y; } orphan_var;\n",
    );
    assert_eq!(queue.warning_count(), 1);
    assert!(!queue.has_errors());
    assert_eq!(table.len(), 2);
    assert_eq!(table[DefId(1)].parent, Some(DefId(0)));
    assert!(table[DefId(1)].is_nameless());
    assert_eq!(table[DefId(0)].children, vec![]);
    // The splice is still recorded so the body gets flattened.
    assert!(table[DefId(1)].splice.is_some());
}

#[test]
fn parented_typedef_without_alias_warns() {
    let (table, queue) = resolve(
        "struct Base { int x; };\n\
         typedef struct (struct Base) { int y; };\n",
    );
    assert_eq!(table.len(), 1);
    assert_eq!(queue.warning_count(), 1);
}

#[test]
fn missing_close_paren_is_fatal() {
    // Both passes hit this; the first pass sees it first in practice.
    let buf = SourceBuffer::new("struct Child(struct Base { int y; };");
    let mut table = DefTable::new();
    let mut queue = DiagnosticQueue::new();
    let mut lexer = Lexer::new("test.c", &buf);
    let err = collect_definitions(&mut lexer, &mut table, &mut queue)
        .expect_err("expected a close paren error");
    assert!(matches!(err, ParseError::ExpectedCloseParen { .. }));
}

#[test]
fn missing_semicolon_is_fatal() {
    let buf = SourceBuffer::new("struct Base { int x; };\nstruct Child(struct Base) { int y; }");
    let mut table = DefTable::new();
    let mut queue = DiagnosticQueue::new();
    let mut first = Lexer::new("test.c", &buf);
    collect_definitions(&mut first, &mut table, &mut queue).expect("collect failed");
    let mut second = Lexer::new("test.c", &buf);
    let err = resolve_inherits(&mut second, &mut table, &mut queue)
        .expect_err("expected a semicolon error");
    assert!(matches!(err, ParseError::ExpectedSemicolon { .. }));
}
