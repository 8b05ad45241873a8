//! Dispatcher applying `Action` to mutable editor state.
//!
//! Decomposed into focused sub-modules:
//! * `indent` - align-to-open-paren transform (the flagship command)
//! * `edit`   - generic newline insertion (+ auto-indent fallback)
//!
//! Every text-mutating action runs inside exactly one edit token, so a whole
//! invocation (however many selections it touched, including any fallback
//! newline edits the indent transform delegates) commits as a single undo
//! step. Undo/redo bypass the token path since they restore snapshots rather
//! than produce new ones.

use crate::Action;
use core_config::Config;
use core_state::EditorState;

mod edit;
mod indent;

/// Result of dispatching a single `Action`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DispatchResult {
    pub dirty: bool,
}

impl DispatchResult {
    pub fn dirty() -> Self {
        Self { dirty: true }
    }
    pub fn clean() -> Self {
        Self { dirty: false }
    }
}

/// Apply an action to editor state. Returns `DispatchResult` describing
/// whether the buffer or selections changed (`dirty`).
pub fn dispatch(action: Action, state: &mut EditorState, config: &Config) -> DispatchResult {
    match action {
        Action::AlignToOpenParen => {
            let mut token = state.begin_edit();
            let result = indent::handle_align_to_open_paren(state, &mut token, config);
            state.commit_edit(token);
            result
        }
        Action::InsertNewline => {
            let mut token = state.begin_edit();
            let result = edit::handle_insert_newline(state, &mut token, config);
            state.commit_edit(token);
            result
        }
        Action::Undo => {
            if state.undo() {
                DispatchResult::dirty()
            } else {
                DispatchResult::clean()
            }
        }
        Action::Redo => {
            if state.redo() {
                DispatchResult::dirty()
            } else {
                DispatchResult::clean()
            }
        }
    }
}
