#![expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]

use super::*;

#[test]
fn keywords_round_trip_through_text() {
    for text in [
        "namespace", "name", "component", "type", "archetype", "event", "command", "enum", "buffer",
    ] {
        let keyword = Keyword::from_symbol(text).unwrap();
        assert_eq!(keyword.to_string(), text);
    }
}

#[test]
fn unknown_symbols_are_not_keywords() {
    assert_eq!(Keyword::from_symbol("entity"), None);
    assert_eq!(Keyword::from_symbol("Component"), None);
    assert_eq!(Keyword::from_symbol("lod"), None);
}
