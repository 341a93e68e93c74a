#![expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]

use pretty_assertions::assert_eq;
use proptest::prelude::*;
use scrawl_ir::{Position, TokenKind};

use crate::{tokenize, LexError, LexErrorKind, Tokenizer};

fn kinds(source: &str) -> Vec<TokenKind> {
    tokenize(source)
        .unwrap()
        .into_iter()
        .map(|token| token.kind)
        .collect()
}

fn sym(text: &str) -> TokenKind {
    TokenKind::Symbol(text.to_owned())
}

fn error(source: &str) -> LexError {
    tokenize(source).unwrap_err()
}

use TokenKind::{EndMetaData, EndScope, LineDelimiter, StartMetaData, StartScope};

#[test]
fn simple_symbol() {
    assert_eq!(kinds("          someSymbol"), vec![sym("someSymbol")]);
}

#[test]
fn simple_string() {
    assert_eq!(
        kinds("          'this is a test' "),
        vec![TokenKind::String("this is a test".to_owned())]
    );
}

#[test]
fn double_quoted_string_may_contain_single_quote() {
    assert_eq!(
        kinds(r#""it's""#),
        vec![TokenKind::String("it's".to_owned())]
    );
}

#[test]
fn indentation_produces_scopes() {
    let source = "
namespace TheSpace
  component Something

    hello int32 [world 4]

    type , Another
";
    assert_eq!(
        kinds(source),
        vec![
            sym("namespace"),
            sym("TheSpace"),
            StartScope,
            sym("component"),
            sym("Something"),
            StartScope,
            sym("hello"),
            sym("int32"),
            StartMetaData,
            sym("world"),
            TokenKind::Number(4),
            EndMetaData,
            LineDelimiter,
            sym("type"),
            sym("Another"),
            LineDelimiter,
            EndScope,
            EndScope,
        ]
    );
}

#[test]
fn dedent_emits_delimiter_then_end_scope() {
    assert_eq!(
        kinds("component A\n  x int\nevent B"),
        vec![
            sym("component"),
            sym("A"),
            StartScope,
            sym("x"),
            sym("int"),
            LineDelimiter,
            EndScope,
            sym("event"),
            sym("B"),
        ]
    );
}

#[test]
fn dedent_by_two_levels() {
    assert_eq!(
        kinds("a\n  b\n    c\nd"),
        vec![
            sym("a"),
            StartScope,
            sym("b"),
            StartScope,
            sym("c"),
            LineDelimiter,
            EndScope,
            EndScope,
            sym("d"),
        ]
    );
}

#[test]
fn end_of_input_closes_open_scopes() {
    assert_eq!(
        kinds("a\n  b"),
        vec![sym("a"), StartScope, sym("b"), LineDelimiter, EndScope]
    );
}

#[test]
fn trailing_newline_ends_the_last_line() {
    assert_eq!(kinds("x y\n"), vec![sym("x"), sym("y"), LineDelimiter]);
    assert_eq!(kinds("x y"), vec![sym("x"), sym("y")]);
}

#[test]
fn no_delimiter_at_start_of_input() {
    assert_eq!(kinds("\n\n  \nx"), vec![sym("x")]);
}

#[test]
fn blank_lines_are_skipped() {
    assert_eq!(
        kinds("a\n\n   \n  b\n"),
        vec![sym("a"), StartScope, sym("b"), LineDelimiter, EndScope]
    );
}

#[test]
fn numbers() {
    assert_eq!(
        kinds("0 42 -2313 03"),
        vec![
            TokenKind::Number(0),
            TokenKind::Number(42),
            TokenKind::Number(-2313),
            TokenKind::Number(3),
        ]
    );
    assert_eq!(
        kinds("-9223372036854775808"),
        vec![TokenKind::Number(i64::MIN)]
    );
}

#[test]
fn bare_minus_is_rejected() {
    let err = error("a - b");
    assert_eq!(err.kind, LexErrorKind::MissingDigits);
    assert_eq!(err.position, Position::new(1, 3));
}

#[test]
fn number_overflow_is_rejected() {
    let err = error("99999999999999999999");
    assert_eq!(
        err.kind,
        LexErrorKind::NumberOutOfRange {
            text: "99999999999999999999".to_owned()
        }
    );
}

#[test]
fn symbols_may_contain_digits_and_dashes() {
    assert_eq!(kinds("a-b2 c"), vec![sym("a-b2"), sym("c")]);
}

#[test]
fn operators_and_meta() {
    assert_eq!(
        kinds("Some.Name [a 'b', c 'd']"),
        vec![
            sym("Some"),
            TokenKind::Operator('.'),
            sym("Name"),
            StartMetaData,
            sym("a"),
            TokenKind::String("b".to_owned()),
            sym("c"),
            TokenKind::String("d".to_owned()),
            EndMetaData,
        ]
    );
}

#[test]
fn comments_are_trimmed_and_transparent() {
    assert_eq!(
        kinds("# header  \nx int # trailing\ny"),
        vec![
            TokenKind::Comment("header".to_owned()),
            sym("x"),
            sym("int"),
            TokenKind::Comment("trailing".to_owned()),
            LineDelimiter,
            sym("y"),
        ]
    );
}

#[test]
fn comment_line_defers_the_delimiter() {
    assert_eq!(
        kinds("a\n  b\n  # note\n  c\n"),
        vec![
            sym("a"),
            StartScope,
            sym("b"),
            TokenKind::Comment("note".to_owned()),
            LineDelimiter,
            sym("c"),
            LineDelimiter,
            EndScope,
        ]
    );
}

#[test]
fn comment_lines_do_not_change_indentation() {
    let plain = kinds("component A\n  x int\n  y int\n");
    for source in [
        "component A\n  x int\n# note\n  y int\n",
        "component A\n  x int\n    # note\n  y int\n",
        "component A\n  x int\n       # note\n  y int\n",
    ] {
        let without_comments: Vec<_> = kinds(source)
            .into_iter()
            .filter(|kind| !kind.is_comment())
            .collect();
        assert_eq!(without_comments, plain, "{source:?}");
    }
}

#[test]
fn comment_line_before_a_deeper_line() {
    assert_eq!(
        kinds("a\n# note\n  b\n"),
        vec![
            sym("a"),
            TokenKind::Comment("note".to_owned()),
            StartScope,
            sym("b"),
            LineDelimiter,
            EndScope,
        ]
    );
}

#[test]
fn tab_before_a_comment_is_still_rejected() {
    let err = error("a\n\t# note\nb");
    assert_eq!(err.kind, LexErrorKind::IllegalIndentation { found: '\t' });
}

#[test]
fn odd_indentation_is_rejected() {
    let err = error("a\n   b");
    assert_eq!(err.kind, LexErrorKind::OddIndentation { spaces: 3 });
    assert_eq!(err.to_string(), "must have double spaces as indentation, found 3 spaces at [2:1]");
}

#[test]
fn too_much_indentation_is_rejected() {
    let err = error("a\n    b");
    assert_eq!(
        err.kind,
        LexErrorKind::TooMuchIndentation {
            allowed: 1,
            found: 2
        }
    );
}

#[test]
fn tab_indentation_is_rejected() {
    let err = error("a\n\tb");
    assert_eq!(err.kind, LexErrorKind::IllegalIndentation { found: '\t' });
    assert_eq!(err.position, Position::new(2, 1));
}

#[test]
fn tabs_inside_a_line_are_separators() {
    assert_eq!(kinds("a\tb"), vec![sym("a"), sym("b")]);
}

#[test]
fn unterminated_string_reports_its_start() {
    let err = error("name 'abc");
    assert_eq!(err.kind, LexErrorKind::UnterminatedString);
    assert_eq!(err.position, Position::new(1, 6));
}

#[test]
fn unknown_rune() {
    let err = error("a ; b");
    assert_eq!(err.kind, LexErrorKind::UnknownRune { found: ';' });
    assert_eq!(err.position, Position::new(1, 3));
}

#[test]
fn interior_nul_is_not_end_of_input() {
    let err = error("a\0b");
    assert_eq!(err.kind, LexErrorKind::UnknownRune { found: '\0' });
}

#[test]
fn trailing_nul_is_not_end_of_input() {
    let err = error("abc\0");
    assert_eq!(err.kind, LexErrorKind::UnknownRune { found: '\0' });
    assert_eq!(err.position, Position::new(1, 4));
}

#[test]
fn positions() {
    let tokens = tokenize("ab\n  cd 'x'").unwrap();
    let positions: Vec<_> = tokens.iter().map(|t| t.position).collect();
    assert_eq!(
        positions,
        vec![
            Position::new(1, 1),
            Position::new(2, 3),
            Position::new(2, 3),
            Position::new(2, 6),
            Position::new(2, 9),
            Position::new(2, 9),
        ]
    );
}

#[test]
fn line_delimiter_points_at_newline() {
    let tokens = tokenize("ab\ncd").unwrap();
    assert_eq!(tokens[1].kind, LineDelimiter);
    assert_eq!(tokens[1].position, Position::new(1, 3));
}

#[test]
fn read_next_streams_until_none() {
    let mut tokenizer = Tokenizer::new("a");
    assert_eq!(tokenizer.read_next().unwrap().map(|t| t.kind), Some(sym("a")));
    assert_eq!(tokenizer.read_next().unwrap(), None);
    assert_eq!(tokenizer.read_next().unwrap(), None);
}

#[test]
fn scopes_are_balanced() {
    let source = "a\n  b\n    c\n      d\n  e\n    f\n";
    let tokens = kinds(source);
    let starts = tokens.iter().filter(|k| **k == StartScope).count();
    let ends = tokens.iter().filter(|k| **k == EndScope).count();
    assert_eq!(starts, ends);
}

proptest! {
    #[test]
    fn carriage_returns_are_ignored(
        lines in prop::collection::vec(("[a-z]{1,6}", 0usize..3), 1..8)
    ) {
        // Keep indentation legal: each line at most one level deeper.
        let mut level = 0;
        let mut source = String::new();
        for (word, wanted) in &lines {
            level = if source.is_empty() { 0 } else { (*wanted).min(level + 1) };
            source.push_str(&"  ".repeat(level));
            source.push_str(word);
            source.push('\n');
        }
        let crlf = source.replace('\n', "\r\n");
        prop_assert_eq!(tokenize(&source).unwrap(), tokenize(&crlf).unwrap());
    }
}
