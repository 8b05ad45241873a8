mod common;

use common::{align, carets, state_with_carets};
use core_text::Region;

#[test]
fn caret_after_unmatched_paren_breaks_and_aligns() {
    let mut state = state_with_carets("call(arg1, arg2|");
    let result = align(&mut state);
    assert!(result.dirty);
    // Second line carries exactly five spaces: the column under the char
    // after '('.
    assert_eq!(state.buffer().contents(), "call(arg1, arg2\n     ");
    assert_eq!(carets(&state), vec![21]);
    assert_eq!(state.buffer().line_count(), 2);
}

#[test]
fn matched_inner_pair_aligns_to_outer_opener() {
    let mut state = state_with_carets("foo(bar(baz), qux|");
    align(&mut state);
    assert_eq!(state.buffer().contents(), "foo(bar(baz), qux\n    ");
    assert_eq!(carets(&state), vec![22]);
}

#[test]
fn trailing_whitespace_is_consumed() {
    let mut state = state_with_carets("foo(bar,   |");
    align(&mut state);
    assert_eq!(state.buffer().contents(), "foo(bar,\n    ");
    assert_eq!(carets(&state), vec![13]);
}

#[test]
fn whitespace_on_both_sides_of_caret_is_consumed() {
    let mut state = state_with_carets("foo(a,  |  b");
    align(&mut state);
    assert_eq!(state.buffer().contents(), "foo(a,\n    b");
    assert_eq!(carets(&state), vec![11]);
}

#[test]
fn selection_text_is_replaced() {
    let mut state = state_with_carets("call(a, xyz");
    state
        .selections_mut()
        .replace_all(vec![Region::new(8, 11)]);
    align(&mut state);
    assert_eq!(state.buffer().contents(), "call(a,\n     ");
    assert_eq!(carets(&state), vec![13]);
}

#[test]
fn balanced_line_defers_to_plain_newline() {
    let mut state = state_with_carets("foo(bar)|");
    align(&mut state);
    assert_eq!(state.buffer().contents(), "foo(bar)\n");
    assert_eq!(carets(&state), vec![9]);
}

#[test]
fn empty_buffer_defers_to_plain_newline() {
    let mut state = state_with_carets("|");
    align(&mut state);
    assert_eq!(state.buffer().contents(), "\n");
    assert_eq!(carets(&state), vec![1]);
}

#[test]
fn empty_selection_set_is_a_no_op() {
    let mut state = state_with_carets("call(arg");
    let result = align(&mut state);
    assert!(!result.dirty);
    assert_eq!(state.buffer().contents(), "call(arg");
    assert!(!state.dirty);
}

#[test]
fn prefix_stops_at_caret_not_line_end() {
    // The closer right of the caret is invisible to the scan.
    let mut state = state_with_carets("call(a|)");
    align(&mut state);
    assert_eq!(state.buffer().contents(), "call(a\n     )");
    assert_eq!(carets(&state), vec![12]);
}
