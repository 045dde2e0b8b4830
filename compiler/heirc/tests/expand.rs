use std::path::Path;

use heirc::{expand_file, expand_source, DriverError, ExpandOptions};
use pretty_assertions::assert_eq;

#[test]
fn resolves_parents_from_the_expanded_view() {
    // The parent only exists in the preprocessed text, as if it came
    // from the include; the raw file keeps its directive untouched.
    let raw = "#include \"base.h\"\n\nstruct Child(struct Base) { int y; };\n";
    let expanded = "struct Base { int x; };\n\nstruct Child(struct Base) { int y; };\n";
    let exp =
        expand_source(expanded, raw, "child.c", ExpandOptions::default()).expect("pipeline failed");
    assert!(!exp.queue.has_errors());
    assert_eq!(
        exp.output,
        "#include \"base.h\"\n\n\
         struct Child { int x;  int y; };\n\
         _Static_assert(offsetof(struct Child, x) == offsetof(struct Base, x), \"Offsets don't match\");\n\
         \n"
    );
}

#[test]
fn expand_file_without_preprocessing() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("in.c");
    std::fs::write(
        &path,
        "struct Base { int x; };\nstruct Child(struct Base) { int y; };\n",
    )
    .expect("write input");

    let exp = expand_file(&path, ExpandOptions { raw: true, dump: false }).expect("pipeline failed");
    assert!(!exp.queue.has_errors());
    assert!(exp.output.contains("struct Child { int x;  int y; };"));
}

#[test]
fn dump_renders_the_hierarchy() {
    let src = "struct A { int a; };\nstruct B(struct A) { int b; };\n";
    let exp = expand_source(
        src,
        src,
        "tree.c",
        ExpandOptions { raw: true, dump: true },
    )
    .expect("pipeline failed");
    assert_eq!(exp.tree.as_deref(), Some("struct A\n  struct B\n"));
}

#[test]
fn unknown_parents_fill_the_queue() {
    let src = "struct Child(struct Missing) { int y; };\n";
    let exp = expand_source(src, src, "bad.c", ExpandOptions::default()).expect("pipeline failed");
    assert!(exp.queue.has_errors());
    assert_eq!(exp.queue.error_count(), 1);
    // The broken declaration is left alone in the output.
    assert_eq!(exp.output, src);
}

#[test]
fn missing_input_reports_a_read_error() {
    let err = expand_file(
        Path::new("/nonexistent/heir-input.c"),
        ExpandOptions { raw: true, dump: false },
    )
    .expect_err("expected a read error");
    assert!(matches!(err, DriverError::Read { .. }));
}
