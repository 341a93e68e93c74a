use super::*;

#[test]
fn start_is_top_left() {
    assert_eq!(Position::START, Position::new(1, 1));
    assert_eq!(Position::default(), Position::START);
}

#[test]
fn display_uses_brackets() {
    assert_eq!(Position::new(12, 4).to_string(), "[12:4]");
}

#[test]
fn newline_resets_column() {
    let pos = Position::new(3, 9).advanced_by('\n');
    assert_eq!(pos, Position::new(4, 1));
}

#[test]
fn other_characters_advance_column() {
    let pos = Position::START.advanced_by('a').advanced_by('é');
    assert_eq!(pos, Position::new(1, 3));
}

#[test]
fn ordering_is_line_major() {
    assert!(Position::new(1, 80) < Position::new(2, 1));
    assert!(Position::new(2, 1) < Position::new(2, 2));
}
