use super::*;
use pretty_assertions::assert_eq;

#[test]
fn sentinel_follows_content() {
    let buf = SourceBuffer::new("abc");
    assert_eq!(buf.len(), 3);
    assert_eq!(buf.as_bytes(), b"abc");
    let cursor = buf.cursor();
    assert_eq!(cursor.source_len(), 3);
}

#[test]
fn empty_source() {
    let buf = SourceBuffer::new("");
    assert!(buf.is_empty());
    assert!(buf.cursor().is_eof());
}

#[test]
fn allocation_is_cache_line_rounded() {
    // 63 content bytes + sentinel fit exactly in one cache line.
    let buf = SourceBuffer::new(&"x".repeat(63));
    assert_eq!(buf.len(), 63);
    // One more content byte forces a second line; peek past the end stays 0.
    let buf = SourceBuffer::new(&"x".repeat(64));
    let mut cursor = buf.cursor();
    cursor.advance_n(64);
    assert!(cursor.is_eof());
    assert_eq!(cursor.peek(), 0);
    assert_eq!(cursor.peek2(), 0);
}

#[test]
fn cursor_starts_at_zero() {
    let buf = SourceBuffer::new("hi");
    let cursor = buf.cursor();
    assert_eq!(cursor.pos(), 0);
    assert_eq!(cursor.current(), b'h');
}
