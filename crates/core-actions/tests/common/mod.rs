#![allow(dead_code)] // Shared across integration test binaries; each uses a subset of helpers.

use core_actions::{Action, DispatchResult, dispatch};
use core_config::Config;
use core_state::EditorState;
use core_text::{Buffer, Region};

/// Build editor state from text where each `|` marks a caret; the markers are
/// stripped from the buffer content.
pub fn state_with_carets(marked: &str) -> EditorState {
    let mut content = String::new();
    let mut carets = Vec::new();
    let mut offset = 0usize;
    for ch in marked.chars() {
        if ch == '|' {
            carets.push(Region::caret(offset));
        } else {
            content.push(ch);
            offset += 1;
        }
    }
    let mut state = EditorState::new(Buffer::from_str("test", &content).expect("buffer"));
    state.selections_mut().replace_all(carets);
    state
}

pub fn carets(state: &EditorState) -> Vec<usize> {
    state.selections().iter().map(|r| r.start).collect()
}

pub fn align(state: &mut EditorState) -> DispatchResult {
    dispatch(Action::AlignToOpenParen, state, &Config::default())
}

pub fn newline(state: &mut EditorState) -> DispatchResult {
    dispatch(Action::InsertNewline, state, &Config::default())
}

pub fn newline_with(state: &mut EditorState, config: &Config) -> DispatchResult {
    dispatch(Action::InsertNewline, state, config)
}

pub fn config_without_auto_indent() -> Config {
    let mut config = Config::default();
    config.file.newline.auto_indent = false;
    config
}
