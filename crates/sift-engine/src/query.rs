#![forbid(unsafe_code)]

//! The editable query line.
//!
//! A [`QueryBuffer`] owns the raw query text and a cursor. Editing is
//! grapheme-aware: one Backspace removes one user-perceived character
//! even when it spans several scalars. The cursor is a byte offset,
//! always on a grapheme boundary.
//!
//! Mutators report whether they changed the text, which is what the
//! session uses to decide whether a refilter is due. Cursor motion never
//! counts as a change.
//!
//! Paste payloads are sanitized rather than rejected: the payload is cut
//! at the first newline and remaining control characters are dropped,
//! then whatever is left lands at the cursor.

use unicode_segmentation::UnicodeSegmentation;

/// Owned query text plus a cursor on a grapheme boundary.
///
/// # Example
///
/// ```
/// use sift_engine::query::QueryBuffer;
///
/// let mut query = QueryBuffer::new("fir");
/// query.insert('e');
/// assert_eq!(query.text(), "fire");
/// assert!(query.delete_before());
/// assert_eq!(query.text(), "fir");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryBuffer {
    text: String,
    cursor: usize,
}

impl QueryBuffer {
    /// Buffer holding `text` with the cursor after it.
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let cursor = text.len();
        Self { text, cursor }
    }

    /// The raw query text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Cursor position as a byte offset into [`text`](Self::text).
    #[must_use]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Byte offset of the grapheme boundary before the cursor.
    fn prev_boundary(&self) -> Option<usize> {
        self.text[..self.cursor]
            .grapheme_indices(true)
            .last()
            .map(|(start, _)| start)
    }

    /// Byte offset of the grapheme boundary after the cursor.
    fn next_boundary(&self) -> Option<usize> {
        self.text[self.cursor..]
            .graphemes(true)
            .next()
            .map(|grapheme| self.cursor + grapheme.len())
    }

    /// Inserts a printable character at the cursor. Control characters
    /// are dropped and leave the buffer untouched.
    pub fn insert(&mut self, c: char) -> bool {
        if c.is_control() {
            return false;
        }
        self.text.insert(self.cursor, c);
        self.cursor += c.len_utf8();
        true
    }

    /// Inserts a paste payload at the cursor.
    ///
    /// The payload is truncated at its first newline; any other control
    /// characters are dropped. Returns whether any text landed.
    pub fn paste(&mut self, payload: &str) -> bool {
        let line = payload.split('\n').next().unwrap_or("");
        let clean: String = line.chars().filter(|c| !c.is_control()).collect();
        if clean.is_empty() {
            return false;
        }
        self.text.insert_str(self.cursor, &clean);
        self.cursor += clean.len();
        true
    }

    /// Deletes the grapheme before the cursor.
    pub fn delete_before(&mut self) -> bool {
        let Some(start) = self.prev_boundary() else {
            return false;
        };
        self.text.replace_range(start..self.cursor, "");
        self.cursor = start;
        true
    }

    /// Deletes the grapheme at the cursor.
    pub fn delete_at(&mut self) -> bool {
        let Some(end) = self.next_boundary() else {
            return false;
        };
        self.text.replace_range(self.cursor..end, "");
        true
    }

    /// Moves the cursor one grapheme left. False at the start.
    pub fn move_left(&mut self) -> bool {
        let Some(start) = self.prev_boundary() else {
            return false;
        };
        self.cursor = start;
        true
    }

    /// Moves the cursor one grapheme right. False at the end.
    pub fn move_right(&mut self) -> bool {
        let Some(end) = self.next_boundary() else {
            return false;
        };
        self.cursor = end;
        true
    }
}
