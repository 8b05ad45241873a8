//! Rope-based text buffer abstraction.
//!
//! Phase 1 scope: character-offset addressing only. Every public accessor
//! clamps out-of-range offsets instead of panicking so callers can treat
//! buffer reads as total operations. Mutation primitives (`insert`/`erase`)
//! are raw; higher layers (core-state) wrap them in an edit transaction that
//! also re-anchors selections and markers.

use anyhow::Result;
use ropey::Rope;

pub mod scan;

/// A text buffer backed by a `ropey::Rope`, addressed by character offset.
#[derive(Clone)]
pub struct Buffer {
    rope: Rope,
    pub name: String,
}

/// A pair of character offsets into a buffer, normalized so `start <= end`.
/// A caret is a region with `start == end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Region {
    pub start: usize,
    pub end: usize,
}

impl Region {
    /// Construct a region normalizing ordering so that `start <= end`.
    pub fn new(mut a: usize, mut b: usize) -> Self {
        if a > b {
            std::mem::swap(&mut a, &mut b);
        }
        Self { start: a, end: b }
    }

    /// An empty region (caret) at `pos`.
    pub fn caret(pos: usize) -> Self {
        Self { start: pos, end: pos }
    }

    /// Returns true if the region is empty (start == end).
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Number of characters covered.
    pub fn len(&self) -> usize {
        self.end - self.start
    }
}

impl Buffer {
    /// Construct a buffer from an in-memory string slice.
    pub fn from_str(name: impl Into<String>, content: &str) -> Result<Self> {
        Ok(Self {
            rope: Rope::from_str(content),
            name: name.into(),
        })
    }

    /// Total number of characters in the buffer.
    pub fn len_chars(&self) -> usize {
        self.rope.len_chars()
    }

    /// Total number of lines in the buffer.
    pub fn line_count(&self) -> usize {
        self.rope.len_lines()
    }

    /// The full buffer contents as an owned `String`.
    pub fn contents(&self) -> String {
        self.rope.to_string()
    }

    /// Character at `pos`, or `None` past the end of the buffer.
    pub fn char_at(&self, pos: usize) -> Option<char> {
        if pos < self.rope.len_chars() {
            Some(self.rope.char(pos))
        } else {
            None
        }
    }

    /// The text covered by `region`, clamped to the buffer length.
    pub fn slice(&self, region: Region) -> String {
        let len = self.rope.len_chars();
        let start = region.start.min(len);
        let end = region.end.min(len);
        self.rope.slice(start..end).to_string()
    }

    /// Character offset of the start of the line containing `pos`.
    pub fn line_start(&self, pos: usize) -> usize {
        let pos = pos.min(self.rope.len_chars());
        let line = self.rope.char_to_line(pos);
        self.rope.line_to_char(line)
    }

    /// Forward match of a run of ASCII space characters starting at `from`.
    /// The run may be empty; it never extends past a non-space character.
    pub fn find_space_run(&self, from: usize) -> Region {
        let len = self.rope.len_chars();
        let start = from.min(len);
        let mut end = start;
        while end < len && self.rope.char(end) == ' ' {
            end += 1;
        }
        Region::new(start, end)
    }

    /// Insert `text` at character offset `at` (clamped). Returns the number of
    /// characters inserted. Raw primitive; callers that track selections or
    /// markers must go through the core-state edit transaction instead.
    pub fn insert(&mut self, at: usize, text: &str) -> usize {
        let at = at.min(self.rope.len_chars());
        self.rope.insert(at, text);
        text.chars().count()
    }

    /// Erase the characters covered by `region` (clamped). Raw primitive, see
    /// [`Buffer::insert`].
    pub fn erase(&mut self, region: Region) {
        let len = self.rope.len_chars();
        let start = region.start.min(len);
        let end = region.end.min(len);
        if start < end {
            self.rope.remove(start..end);
        }
    }
}
