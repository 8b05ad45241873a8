//! User-invokable editing actions and their name registry.
//!
//! The embedder binds keys or menu entries to command *names*; the registry
//! resolves a name to an [`Action`] and the dispatcher applies it to editor
//! state inside one edit transaction (one undo step per invocation).

pub mod dispatcher;
pub use dispatcher::{DispatchResult, dispatch};

/// A user-invokable editing command. Actions take no arguments; everything
/// they need comes from the live selection set and the buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Break the line at each caret, indenting to the column beneath the
    /// nearest unmatched opening parenthesis; selections without one fall
    /// back to plain newline insertion.
    AlignToOpenParen,
    /// Insert a newline (plus optional auto-indent) at every selection.
    InsertNewline,
    Undo,
    Redo,
}

/// Resolve an externally bound command name to its action. Returns `None`
/// for unknown names; higher layers surface that to the user.
pub fn action_for_command(name: &str) -> Option<Action> {
    match name {
        "align_to_open_paren" => Some(Action::AlignToOpenParen),
        "insert_newline" => Some(Action::InsertNewline),
        "undo" => Some(Action::Undo),
        "redo" => Some(Action::Redo),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_known_command_names() {
        assert_eq!(
            action_for_command("align_to_open_paren"),
            Some(Action::AlignToOpenParen)
        );
        assert_eq!(action_for_command("insert_newline"), Some(Action::InsertNewline));
        assert_eq!(action_for_command("undo"), Some(Action::Undo));
        assert_eq!(action_for_command("redo"), Some(Action::Redo));
    }

    #[test]
    fn unknown_names_resolve_to_none() {
        assert_eq!(action_for_command("indent_harder"), None);
        assert_eq!(action_for_command(""), None);
    }
}
