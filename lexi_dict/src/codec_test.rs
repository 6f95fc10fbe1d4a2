// Tests for the line codec
// - split on the first tab only
// - backslash <-> newline escaping, including the lossy case
// - lines without a tab are malformed

use super::*;
use lexi_core::trie::Trie;

#[test]
fn test_decode_splits_on_first_tab_only() {
    let (target, meaning) = decode_line("tab\ta key\tthat indents").unwrap();
    assert_eq!(target, "tab");
    assert_eq!(meaning, "a key\tthat indents");
}

#[test]
fn test_decode_unescapes_newlines() {
    let (target, meaning) = decode_line("apple\ta round fruit\\red or green").unwrap();
    assert_eq!(target, "apple");
    assert_eq!(meaning, "a round fruit\nred or green");
}

#[test]
fn test_decode_empty_meaning() {
    assert_eq!(decode_line("word\t").unwrap(), ("word", String::new()));
}

#[test]
fn test_decode_rejects_line_without_tab() {
    assert_eq!(decode_line("apple a round fruit"), Err(MalformedLine));
    assert_eq!(decode_line(""), Err(MalformedLine));
}

#[test]
fn test_encode_escapes_newlines() {
    let mut trie = Trie::new();
    trie.insert("apple", "a round fruit").unwrap();
    trie.insert("apple", "red or green").unwrap();
    let line = encode_entry(trie.lookup("apple").unwrap());
    assert_eq!(line, "apple\ta round fruit\\red or green\n");
}

#[test]
fn test_literal_backslash_reads_back_as_newline() {
    let mut trie = Trie::new();
    trie.insert("path", "c:\\temp").unwrap();
    let line = encode_entry(trie.lookup("path").unwrap());
    let (_, meaning) = decode_line(line.trim_end_matches('\n')).unwrap();
    assert_eq!(meaning, "c:\ntemp");
}
