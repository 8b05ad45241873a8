use core_text::Buffer;
use tracing::trace;

use crate::SelectionSet;

/// Maximum number of snapshots retained in undo history.
pub const UNDO_HISTORY_MAX: usize = 200;

/// A full-state snapshot for undo/redo (coarse clone for simplicity; rope
/// clones are cheap). Marker regions are intentionally excluded: they live
/// only inside a single command invocation and never survive to an undo
/// boundary.
#[derive(Clone)]
pub struct EditSnapshot {
    pub buffer: Buffer,
    pub selections: SelectionSet,
}

pub struct UndoEngine {
    undo_stack: Vec<EditSnapshot>,
    redo_stack: Vec<EditSnapshot>,
}

impl Default for UndoEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl UndoEngine {
    pub fn new() -> Self {
        Self {
            undo_stack: Vec::new(),
            redo_stack: Vec::new(),
        }
    }

    pub fn undo_depth(&self) -> usize {
        self.undo_stack.len()
    }
    pub fn redo_depth(&self) -> usize {
        self.redo_stack.len()
    }

    /// Push the pre-edit snapshot of a committed transaction. One committed
    /// transaction equals one undo step regardless of how many individual
    /// inserts/erases it performed.
    pub fn push_snapshot(&mut self, snap: EditSnapshot) {
        self.undo_stack.push(snap);
        trace!(target: "state.undo", undo_depth = self.undo_stack.len(), redo_depth = self.redo_stack.len(), "push_snapshot");
        if self.undo_stack.len() > UNDO_HISTORY_MAX {
            let _ = self.undo_stack.remove(0);
            trace!(target: "state.undo", "undo_stack_trimmed");
        }
        self.redo_stack.clear();
    }

    pub fn undo(&mut self, buffer: &mut Buffer, selections: &mut SelectionSet) -> bool {
        if let Some(last) = self.undo_stack.pop() {
            trace!(target: "state.undo", undo_depth = self.undo_stack.len(), redo_depth = self.redo_stack.len(), "undo_pop");
            self.redo_stack.push(EditSnapshot {
                buffer: buffer.clone(),
                selections: selections.clone(),
            });
            *buffer = last.buffer;
            *selections = last.selections;
            true
        } else {
            false
        }
    }

    pub fn redo(&mut self, buffer: &mut Buffer, selections: &mut SelectionSet) -> bool {
        if let Some(next) = self.redo_stack.pop() {
            trace!(target: "state.undo", undo_depth = self.undo_stack.len(), redo_depth = self.redo_stack.len(), "redo_pop");
            self.undo_stack.push(EditSnapshot {
                buffer: buffer.clone(),
                selections: selections.clone(),
            });
            *buffer = next.buffer;
            *selections = next.selections;
            true
        } else {
            false
        }
    }
}
