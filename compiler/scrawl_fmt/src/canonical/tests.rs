#![expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]

use pretty_assertions::assert_eq;
use proptest::prelude::*;
use scrawl_ir::{Token, TokenKind};
use scrawl_lexer::tokenize;

use super::*;

fn format(source: &str) -> String {
    canonicalise(&tokenize(source).unwrap(), BeautifyFlags::NORMAL)
}

fn kinds(tokens: &[Token]) -> Vec<TokenKind> {
    tokens.iter().map(|token| token.kind.clone()).collect()
}

/// Format, then check that the output re-tokenizes to the same tokens.
fn check_reverse(source: &str, expected: &str) {
    let tokens = tokenize(source).unwrap();
    let formatted = canonicalise(&tokens, BeautifyFlags::NORMAL);
    assert_eq!(formatted, expected);
    assert_eq!(kinds(&tokenize(&formatted).unwrap()), kinds(&tokens));
}

#[test]
fn collapses_whitespace() {
    check_reverse("    hello    Goodbye", "hello Goodbye");
    check_reverse("    hello    Goodbye    -2313", "hello Goodbye -2313");
    check_reverse("    hello    Goodbye    -2313 \t'hi'", "hello Goodbye -2313 'hi'");
}

#[test]
fn normalises_scopes_and_numbers() {
    check_reverse("\nSomething 3212\n  other 03\n", "Something 3212\n  other 3\n");
}

#[test]
fn full_declaration() {
    let source = "\
namespace Some.Namespace
component   Health [bits '12']

  value  int
  max int
archetype Avatar
  lod 0
    Health
";
    check_reverse(
        source,
        "\
namespace Some . Namespace
component Health [ bits '12' ]
  value int
  max int
archetype Avatar
  lod 0
    Health
",
    );
}

#[test]
fn strings_with_single_quotes_use_double_quotes() {
    check_reverse(r#"say "it's""#, r#"say "it's""#);
    check_reverse(r#"say "plain""#, "say 'plain'");
}

#[test]
fn comments_end_their_line() {
    check_reverse("a # trailing\nb", "a # trailing\nb");
    check_reverse("# only\na", "# only\na");
    check_reverse("a\n  #\n  b\n", "a\n#\n  b\n");
}

#[test]
fn comment_lines_stay_on_their_own_line() {
    check_reverse("a\n# note\nb\n", "a\n# note\nb\n");
    check_reverse(
        "component A\n  x int\n# note\n  y int\n",
        "component A\n  x int\n  # note\n  y int\n",
    );
    check_reverse("a\n      # deep\n  b\n", "a\n# deep\n  b\n");
}

#[test]
fn scope_at_start_of_input() {
    check_reverse("\n  a\n", "\n  a\n");
    check_reverse("\n  a\n    b\n", "\n  a\n    b\n");
    let tokens = tokenize("# c\n  a\n").unwrap();
    assert_eq!(canonicalise(&tokens, BeautifyFlags::NORMAL), "# c\n  a\n");
    assert_eq!(canonicalise(&tokens, BeautifyFlags::DISCARD_COMMENTS), "\n  a\n");
}

#[test]
fn discard_comments() {
    let tokens = tokenize("# header\na # trailing\n  b\n").unwrap();
    let stripped = canonicalise(&tokens, BeautifyFlags::DISCARD_COMMENTS);
    assert_eq!(stripped, "a\n  b\n");
    assert!(tokenize(&stripped)
        .unwrap()
        .iter()
        .all(|token| !token.kind.is_comment()));
}

#[test]
fn discarding_comments_matches_removing_them() {
    let with = tokenize("a # c\n  b\n# d\nc\n").unwrap();
    let without = tokenize("a\n  b\n\nc\n").unwrap();
    assert_eq!(
        canonicalise(&with, BeautifyFlags::DISCARD_COMMENTS),
        canonicalise(&without, BeautifyFlags::NORMAL)
    );
}

#[test]
fn empty_input() {
    assert_eq!(format(""), "");
    assert_eq!(format("\n\n"), "");
}

#[test]
fn hash_ignores_layout_and_comments() {
    let a = tokenize("component A\n  x int\n").unwrap();
    let b = tokenize("# note\ncomponent    A\n\n  x int # why\n").unwrap();
    let c = tokenize("component A\n  y int\n").unwrap();
    assert_eq!(content_hash(&a), content_hash(&b));
    assert_ne!(content_hash(&a), content_hash(&c));
}

#[test]
fn hash_of_empty_input_is_offset_basis() {
    assert_eq!(content_hash(&[]), 0x811c_9dc5);
}

fn atom() -> impl Strategy<Value = String> {
    prop_oneof![
        "[a-zA-Z][a-zA-Z0-9-]{0,6}",
        (-5000i64..5000).prop_map(|n| n.to_string()),
        "[a-z ]{0,6}".prop_map(|s| format!("'{s}'")),
        "[a-z']{0,6}".prop_map(|s| format!("\"{s}\"")),
        Just(".".to_owned()),
        Just("[".to_owned()),
        Just("]".to_owned()),
    ]
}

fn line() -> impl Strategy<Value = (usize, Vec<String>, Option<String>)> {
    (
        0usize..4,
        prop::collection::vec(atom(), 0..5),
        prop::option::of("[a-z ]{0,8}"),
    )
}

proptest! {
    #[test]
    fn canonical_form_is_idempotent(lines in prop::collection::vec(line(), 0..12)) {
        let mut level = 0;
        let mut source = String::new();
        for (wanted, atoms, comment) in &lines {
            if atoms.is_empty() {
                // Comment-only lines may sit at any indentation.
                if let Some(comment) = comment {
                    source.push_str(&" ".repeat(*wanted));
                    source.push('#');
                    source.push_str(comment);
                }
                source.push('\n');
                continue;
            }
            // Each code line at most one level deeper than the last one; the
            // first line is not preceded by a newline, so it can't open a scope.
            level = if source.is_empty() { 0 } else { (*wanted).min(level + 1) };
            source.push_str(&"  ".repeat(level));
            source.push_str(&atoms.join(" "));
            if let Some(comment) = comment {
                source.push_str(" #");
                source.push_str(comment);
            }
            source.push('\n');
        }

        let tokens = tokenize(&source).unwrap();
        let once = canonicalise(&tokens, BeautifyFlags::NORMAL);
        let retokenized = tokenize(&once).unwrap();
        prop_assert_eq!(kinds(&retokenized), kinds(&tokens));
        let twice = canonicalise(&retokenized, BeautifyFlags::NORMAL);
        prop_assert_eq!(once, twice);
    }
}
