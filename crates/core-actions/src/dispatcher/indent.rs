//! Align-to-open-paren transform.
//!
//! For each selection: read the line prefix up to the cursor, locate the last
//! unmatched opening parenthesis, replace the selection and the whitespace
//! around it with a newline plus that many leading spaces. Selections whose
//! prefix is balanced (or paren-free) are deferred to the generic newline
//! command so they still pick up auto-indent behavior.
//!
//! Invariants:
//! * The live selection count is unchanged by a full invocation; it only
//!   drops transiently between the marker subtract and the final re-add.
//! * All edits (the deferred newline inserts included) go through the one
//!   token the dispatcher opened, so the invocation undoes atomically.
//!
//! Known limitation (inherited semantics, not a bug-fix target): selections
//! sharing a line see each other's edits mid-loop. The loop re-reads the live
//! set by index so offsets stay consistent, but the recorded handled carets
//! are plain values and are not re-anchored by later iterations.

use core_config::Config;
use core_state::{EditToken, EditorState};
use core_text::{Region, scan};

use super::DispatchResult;
use super::edit;

/// Marker key under which handled carets ride out the deferred newline edits.
const HANDLED_CARETS_KEY: &str = "align_to_open_paren.handled";

pub(crate) fn handle_align_to_open_paren(
    state: &mut EditorState,
    token: &mut EditToken,
    config: &Config,
) -> DispatchResult {
    if state.selections().is_empty() {
        return DispatchResult::clean();
    }

    let mut handled: Vec<Region> = Vec::new();
    let mut deferred = false;

    for i in 0..state.selections().len() {
        let Some(selection) = state.selections().get(i) else {
            break;
        };

        let line_start = state.buffer().line_start(selection.start);
        let prefix = state.buffer().slice(Region::new(line_start, selection.end));
        let target_column = scan::last_unmatched_open_paren(&prefix);

        // Replace the selected text (caret-equivalent when empty), then eat
        // the whitespace run around the collapse point.
        state.erase(token, selection);
        let whitespace = scan::expand_to_spaces(state.buffer(), selection.start);
        state.erase(token, whitespace);

        match target_column {
            Some(column) => {
                let text = format!("\n{}", " ".repeat(column));
                let inserted = state.insert(token, whitespace.start, &text);
                handled.push(Region::caret(whitespace.start + inserted));
            }
            None => deferred = true,
        }
    }

    tracing::trace!(
        target: "actions.dispatch",
        op = "align_to_open_paren",
        handled = handled.len(),
        deferred,
        "transform"
    );

    if deferred {
        // The newline inserts below shift buffer offsets, so the carets we
        // just placed cannot be re-added by value afterwards; they would be
        // out of sync. Park them as marker regions (re-anchored on every
        // edit), drop them from the live set so the fallback does not give
        // them an extra newline, then restore the re-anchored positions.
        state.add_marker_regions(HANDLED_CARETS_KEY, handled.clone());
        for caret in handled.iter().rev() {
            state.selections_mut().subtract(*caret);
        }

        edit::handle_insert_newline(state, token, config);

        let restored = state.take_marker_regions(HANDLED_CARETS_KEY);
        state.selections_mut().add_all(restored);
    }

    DispatchResult::dirty()
}
