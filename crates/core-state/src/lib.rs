//! Editor state: buffer, ordered selection set, named marker regions, and the
//! scoped edit-token transaction that keeps all of them anchored across
//! buffer mutations.
//!
//! Anchoring rules:
//! - Every `insert`/`erase` routed through an [`EditToken`] immediately
//!   remaps the live selection set and every marker region, so code that
//!   iterates selections while editing observes up-to-date offsets.
//! - Selections remap with [`Bias::After`]: an insertion exactly at a caret
//!   pushes the caret past the inserted text (typing semantics).
//! - Markers remap with [`Bias::Before`]: an insertion exactly at a marker
//!   leaves it anchored where it was. This is what lets a command park caret
//!   positions in the marker store, perform unrelated edits elsewhere, and
//!   read back positions that account for every shift.
//!
//! Transaction semantics:
//! - `begin_edit` captures a snapshot; `commit_edit` pushes it as ONE undo
//!   step iff the token performed at least one effective edit. A command
//!   invocation therefore undoes atomically however many selections it
//!   touched.
//! - Empty inserts and empty (post-clamp) erases are no-ops and do not count
//!   as edits, keeping undo history free of vacuous steps.
//!
//! Telemetry: edit application and undo/redo emit trace events under the
//! `state.edit` / `state.undo` targets.

use std::collections::HashMap;

use core_text::{Buffer, Region};
use tracing::trace;

pub mod undo;
use undo::{EditSnapshot, UndoEngine};
pub use undo::UNDO_HISTORY_MAX;

/// Anchoring rule applied when an offset coincides exactly with an insertion
/// point. Offsets strictly left of an edit never move; offsets strictly right
/// always shift by the edit's length delta.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bias {
    /// Stay before text inserted at the offset (marker anchoring).
    Before,
    /// Move past text inserted at the offset (caret push semantics).
    After,
}

fn map_offset_insert(pos: usize, at: usize, inserted: usize, bias: Bias) -> usize {
    let shifts = match bias {
        Bias::After => pos >= at,
        Bias::Before => pos > at,
    };
    if shifts { pos + inserted } else { pos }
}

fn map_offset_erase(pos: usize, start: usize, end: usize) -> usize {
    if pos <= start {
        pos
    } else if pos >= end {
        pos - (end - start)
    } else {
        // Inside the erased span: collapse onto its start.
        start
    }
}

fn map_region_insert(r: Region, at: usize, inserted: usize, bias: Bias) -> Region {
    Region::new(
        map_offset_insert(r.start, at, inserted, bias),
        map_offset_insert(r.end, at, inserted, bias),
    )
}

fn map_region_erase(r: Region, start: usize, end: usize) -> Region {
    Region::new(
        map_offset_erase(r.start, start, end),
        map_offset_erase(r.end, start, end),
    )
}

/// Ordered set of selection regions, kept sorted by `(start, end)`.
///
/// Commands iterate by index and re-read each slot so that adjustments from
/// their own edits are observed. The set never merges overlapping regions;
/// callers that add overlapping selections get exactly what they added.
#[derive(Debug, Clone, Default)]
pub struct SelectionSet {
    regions: Vec<Region>,
}

impl SelectionSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.regions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }

    pub fn get(&self, idx: usize) -> Option<Region> {
        self.regions.get(idx).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Region> {
        self.regions.iter()
    }

    /// Add a region, re-establishing positional order.
    pub fn add(&mut self, region: Region) {
        self.regions.push(region);
        self.sort();
    }

    pub fn add_all(&mut self, regions: impl IntoIterator<Item = Region>) {
        self.regions.extend(regions);
        self.sort();
    }

    /// Remove every region exactly equal to `region`. Commands only ever
    /// subtract carets they recorded themselves; partial overlap is not
    /// interpreted.
    pub fn subtract(&mut self, region: Region) {
        self.regions.retain(|r| *r != region);
    }

    /// Replace the whole set.
    pub fn replace_all(&mut self, regions: Vec<Region>) {
        self.regions = regions;
        self.sort();
    }

    fn sort(&mut self) {
        self.regions.sort_by_key(|r| (r.start, r.end));
    }

    fn adjust_insert(&mut self, at: usize, inserted: usize) {
        for r in &mut self.regions {
            *r = map_region_insert(*r, at, inserted, Bias::After);
        }
    }

    fn adjust_erase(&mut self, start: usize, end: usize) {
        for r in &mut self.regions {
            *r = map_region_erase(*r, start, end);
        }
    }
}

/// Named region lists re-anchored automatically as the buffer mutates around
/// them. `add_regions` replaces any existing list under the key; a key is
/// consumed by [`EditorState::take_marker_regions`].
#[derive(Debug, Clone, Default)]
pub struct MarkerStore {
    sets: HashMap<String, Vec<Region>>,
}

impl MarkerStore {
    pub fn add_regions(&mut self, key: &str, regions: Vec<Region>) {
        self.sets.insert(key.to_string(), regions);
    }

    pub fn regions(&self, key: &str) -> Vec<Region> {
        self.sets.get(key).cloned().unwrap_or_default()
    }

    pub fn erase_regions(&mut self, key: &str) {
        self.sets.remove(key);
    }

    fn adjust_insert(&mut self, at: usize, inserted: usize) {
        for regions in self.sets.values_mut() {
            for r in regions {
                *r = map_region_insert(*r, at, inserted, Bias::Before);
            }
        }
    }

    fn adjust_erase(&mut self, start: usize, end: usize) {
        for regions in self.sets.values_mut() {
            for r in regions {
                *r = map_region_erase(*r, start, end);
            }
        }
    }
}

/// Scoped edit transaction handle. Constructed by [`EditorState::begin_edit`]
/// and consumed by [`EditorState::commit_edit`]; every mutation in between
/// must pass through it.
pub struct EditToken {
    snapshot: EditSnapshot,
    edits: u32,
}

/// Core editor state: one buffer plus the live selection set, marker store,
/// and undo engine.
pub struct EditorState {
    buffer: Buffer,
    selections: SelectionSet,
    markers: MarkerStore,
    pub dirty: bool,
    undo: UndoEngine,
}

impl EditorState {
    pub fn new(buffer: Buffer) -> Self {
        Self {
            buffer,
            selections: SelectionSet::new(),
            markers: MarkerStore::default(),
            dirty: false,
            undo: UndoEngine::new(),
        }
    }

    pub fn buffer(&self) -> &Buffer {
        &self.buffer
    }

    pub fn selections(&self) -> &SelectionSet {
        &self.selections
    }

    pub fn selections_mut(&mut self) -> &mut SelectionSet {
        &mut self.selections
    }

    /// Begin a scoped edit transaction. The returned token captures the
    /// pre-edit snapshot that `commit_edit` turns into a single undo step.
    pub fn begin_edit(&mut self) -> EditToken {
        EditToken {
            snapshot: EditSnapshot {
                buffer: self.buffer.clone(),
                selections: self.selections.clone(),
            },
            edits: 0,
        }
    }

    /// Commit the transaction: push exactly one undo snapshot iff the token
    /// performed at least one effective edit.
    pub fn commit_edit(&mut self, token: EditToken) {
        if token.edits == 0 {
            return;
        }
        self.undo.push_snapshot(token.snapshot);
        self.dirty = true;
    }

    /// Insert `text` at `at` (clamped), re-anchoring selections (after bias)
    /// and markers (before bias). Returns the number of characters inserted.
    pub fn insert(&mut self, token: &mut EditToken, at: usize, text: &str) -> usize {
        if text.is_empty() {
            return 0;
        }
        let at = at.min(self.buffer.len_chars());
        let inserted = self.buffer.insert(at, text);
        self.selections.adjust_insert(at, inserted);
        self.markers.adjust_insert(at, inserted);
        token.edits += 1;
        trace!(target: "state.edit", op = "insert", at, chars = inserted, "edit");
        inserted
    }

    /// Erase the characters covered by `region` (clamped), re-anchoring
    /// selections and markers. Empty post-clamp regions are a no-op.
    pub fn erase(&mut self, token: &mut EditToken, region: Region) {
        let len = self.buffer.len_chars();
        let start = region.start.min(len);
        let end = region.end.min(len);
        if start == end {
            return;
        }
        self.buffer.erase(Region::new(start, end));
        self.selections.adjust_erase(start, end);
        self.markers.adjust_erase(start, end);
        token.edits += 1;
        trace!(target: "state.edit", op = "erase", start, end, "edit");
    }

    /// Park `regions` under `key` in the marker store, replacing any existing
    /// list. Subsequent edits re-anchor them with before bias.
    pub fn add_marker_regions(&mut self, key: &str, regions: Vec<Region>) {
        self.markers.add_regions(key, regions);
    }

    /// Read the regions under `key` without consuming them.
    pub fn marker_regions(&self, key: &str) -> Vec<Region> {
        self.markers.regions(key)
    }

    /// Consume `key`: return its re-anchored regions and clear the entry.
    pub fn take_marker_regions(&mut self, key: &str) -> Vec<Region> {
        let regions = self.markers.regions(key);
        self.markers.erase_regions(key);
        regions
    }

    pub fn undo_depth(&self) -> usize {
        self.undo.undo_depth()
    }

    pub fn redo_depth(&self) -> usize {
        self.undo.redo_depth()
    }

    pub fn undo(&mut self) -> bool {
        let applied = self.undo.undo(&mut self.buffer, &mut self.selections);
        if applied {
            self.dirty = true;
        }
        applied
    }

    pub fn redo(&mut self) -> bool {
        let applied = self.undo.redo(&mut self.buffer, &mut self.selections);
        if applied {
            self.dirty = true;
        }
        applied
    }
}
