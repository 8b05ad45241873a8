mod common;

use common::{align, carets, state_with_carets};

// Selections sharing a line observe each other's edits mid-invocation; the
// second caret is evaluated against the line as the first caret's edit left
// it. These tests pin that behavior rather than guard against it.

#[test]
fn second_caret_sees_the_line_split_by_the_first() {
    let mut state = state_with_carets("f(a|b|");
    align(&mut state);
    // After the first caret's split, the second caret sits on the fresh
    // "  b" line whose prefix has no paren, so it defers to a plain newline
    // that copies the two-space indent.
    assert_eq!(state.buffer().contents(), "f(a\n  b\n  ");
    assert_eq!(carets(&state), vec![6, 10]);
    assert_eq!(state.selections().len(), 2);
}

#[test]
fn same_line_carets_inside_nested_parens() {
    let mut state = state_with_carets("f(g(a|, b|");
    align(&mut state);
    // First caret aligns under the inner opener; the second, now on the new
    // line, no longer sees any opener on its own line and defers.
    assert_eq!(state.buffer().contents(), "f(g(a\n    , b\n    ");
    assert_eq!(carets(&state), vec![10, 18]);
}
