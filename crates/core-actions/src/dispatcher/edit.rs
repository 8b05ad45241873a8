//! Generic newline insertion across the selection set.
//!
//! The plain-newline counterpart to the align transform: every selection is
//! replaced by a line break, optionally followed by a copy of the current
//! line's leading whitespace (`[newline] auto_indent`, on by default). Used
//! both as a standalone command and as the fallback the indent transform
//! delegates balanced-prefix selections to.

use core_config::Config;
use core_state::{EditToken, EditorState};
use core_text::Buffer;

use super::DispatchResult;

pub(crate) fn handle_insert_newline(
    state: &mut EditorState,
    token: &mut EditToken,
    config: &Config,
) -> DispatchResult {
    if state.selections().is_empty() {
        return DispatchResult::clean();
    }

    for i in 0..state.selections().len() {
        let Some(selection) = state.selections().get(i) else {
            break;
        };

        state.erase(token, selection);
        let at = selection.start;
        let mut text = String::from("\n");
        if config.auto_indent() {
            text.push_str(&leading_indent(state.buffer(), at));
        }
        // The caret rides to the end of the inserted text via after-bias
        // selection adjustment.
        state.insert(token, at, &text);
    }

    tracing::trace!(
        target: "actions.dispatch",
        op = "insert_newline",
        selections = state.selections().len(),
        auto_indent = config.auto_indent(),
        "edit"
    );
    DispatchResult::dirty()
}

/// Leading run of spaces and tabs on the line containing `point`, truncated
/// at `point` so a caret inside the indentation never copies more columns
/// than it sits at.
fn leading_indent(buf: &Buffer, point: usize) -> String {
    let start = buf.line_start(point);
    let mut indent = String::new();
    let mut pos = start;
    while pos < point {
        match buf.char_at(pos) {
            Some(c @ (' ' | '\t')) => indent.push(c),
            _ => break,
        }
        pos += 1;
    }
    indent
}
