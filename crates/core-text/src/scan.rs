//! Line-scanning helpers for paren-aligned indentation.
//!
//! These operate purely on a line prefix string or a `Buffer` + point and are
//! free of editor state; higher-level command logic composes them.
//!
//! Contract:
//! - Only `(` and `)` participate in matching; string literals, comments,
//!   brackets, and braces are invisible to the scan (known limitation).
//! - Offsets and columns are character counts, not rendered widths; tabs and
//!   wide characters before the cursor skew the visual result (known
//!   limitation).

use crate::{Buffer, Region};

/// Character index one past the last opening parenthesis in `prefix` that has
/// no matching closing parenthesis later in the prefix, scanning right to
/// left. Returns `None` when every `(` is matched or the prefix has none.
///
/// The right-to-left counter makes the *rightmost* unmatched opener win, i.e.
/// the innermost enclosing paren relative to the cursor.
pub fn last_unmatched_open_paren(prefix: &str) -> Option<usize> {
    let mut closers = 0usize;
    let mut idx = prefix.chars().count();
    for ch in prefix.chars().rev() {
        idx -= 1;
        match ch {
            ')' => closers += 1,
            '(' => {
                if closers > 0 {
                    closers -= 1;
                } else {
                    // Column beneath the character after the opener.
                    return Some(idx + 1);
                }
            }
            _ => {}
        }
    }
    None
}

/// Maximal contiguous region of ASCII space characters around `point`: scan
/// left while the preceding character is a space, then take the buffer's
/// forward space run from the leftmost such position. Expanding from any
/// point inside or adjacent to one contiguous run yields the same region.
pub fn expand_to_spaces(buf: &Buffer, point: usize) -> Region {
    let mut left = point.min(buf.len_chars());
    while left > 0 && buf.char_at(left - 1) == Some(' ') {
        left -= 1;
    }
    buf.find_space_run(left)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn locates_single_unmatched_opener() {
        assert_eq!(last_unmatched_open_paren("foo(bar, baz"), Some(4));
    }

    #[test]
    fn matched_inner_pair_is_skipped() {
        // The second '(' is matched by ')'; the first is the target.
        assert_eq!(last_unmatched_open_paren("foo(bar(baz), qux"), Some(4));
    }

    #[test]
    fn rightmost_unmatched_opener_wins() {
        assert_eq!(last_unmatched_open_paren("f(g(h"), Some(4));
        assert_eq!(last_unmatched_open_paren("a(b)(c"), Some(5));
    }

    #[test]
    fn balanced_prefix_has_no_target() {
        assert_eq!(last_unmatched_open_paren("foo(bar)"), None);
        assert_eq!(last_unmatched_open_paren("no parens at all"), None);
    }

    #[test]
    fn empty_prefix_has_no_target() {
        assert_eq!(last_unmatched_open_paren(""), None);
    }

    #[test]
    fn close_before_open_still_counts() {
        // A stray closer left of the opener consumes it under right-to-left
        // counting only when it appears to the opener's right.
        assert_eq!(last_unmatched_open_paren(")f("), Some(3));
    }

    #[test]
    fn expansion_is_point_independent_within_a_run() {
        let buf = Buffer::from_str("t", "a    b").unwrap();
        for point in 1..=5 {
            assert_eq!(expand_to_spaces(&buf, point), Region::new(1, 5));
        }
    }

    #[test]
    fn expansion_without_adjacent_spaces_is_empty() {
        let buf = Buffer::from_str("t", "ab").unwrap();
        assert_eq!(expand_to_spaces(&buf, 1), Region::caret(1));
    }

    #[test]
    fn expansion_stops_at_line_boundaries() {
        let buf = Buffer::from_str("t", "a \n b").unwrap();
        // Point at start of line 1: the newline blocks the leftward scan, the
        // forward run picks up the single leading space.
        assert_eq!(expand_to_spaces(&buf, 3), Region::new(3, 4));
    }

    #[test]
    fn expansion_at_end_of_buffer() {
        let buf = Buffer::from_str("t", "x   ").unwrap();
        assert_eq!(expand_to_spaces(&buf, 4), Region::new(1, 4));
    }
}
