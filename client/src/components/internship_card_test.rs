use super::*;

#[test]
fn excerpt_keeps_short_text() {
    assert_eq!(excerpt("  Build APIs.  ", 140), "Build APIs.");
}

#[test]
fn excerpt_cuts_long_text_with_ellipsis() {
    assert_eq!(excerpt("abcdef ghij", 7), "abcdef…");
}

#[test]
fn excerpt_counts_characters_not_bytes() {
    assert_eq!(excerpt("éééé", 4), "éééé");
    assert_eq!(excerpt("ééééé", 4), "éééé…");
}
