#![forbid(unsafe_code)]

//! Input events consumed by a selection session.
//!
//! The engine is platform-agnostic: whatever reads the keyboard (a display
//! server, a terminal backend, a test script) normalizes its input into
//! [`InputEvent`] values and feeds them to the session one at a time.
//!
//! Key events carry the unshifted character plus a [`Modifiers`] set, so a
//! binding like Shift+`/` arrives as `Char('/')` with [`Modifiers::SHIFT`]
//! rather than as `'?'`.

use bitflags::bitflags;

bitflags! {
    /// Modifier keys held during a key press.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Modifiers: u8 {
        const SHIFT = 1 << 0;
        const CTRL = 1 << 1;
        const ALT = 1 << 2;
    }
}

/// Physical key identity, independent of modifier state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum KeyCode {
    /// A character-producing key, carrying the character the input layer
    /// resolved for it (shift already applied where the layer does so).
    Char(char),
    Enter,
    Escape,
    Backspace,
    Delete,
    Tab,
    Insert,
    Up,
    Down,
    Left,
    Right,
    Home,
    End,
    PageUp,
    PageDown,
}

/// A key press with its modifier state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct KeyEvent {
    pub code: KeyCode,
    pub modifiers: Modifiers,
}

impl KeyEvent {
    /// Key press with no modifiers held.
    #[must_use]
    pub fn new(code: KeyCode) -> Self {
        Self {
            code,
            modifiers: Modifiers::empty(),
        }
    }

    /// Plain character key, shorthand for tests and scripted input.
    #[must_use]
    pub fn char(c: char) -> Self {
        Self::new(KeyCode::Char(c))
    }

    /// Key press with Shift held.
    #[must_use]
    pub fn shift(code: KeyCode) -> Self {
        Self {
            code,
            modifiers: Modifiers::SHIFT,
        }
    }

    /// Key press with Ctrl held.
    #[must_use]
    pub fn ctrl(code: KeyCode) -> Self {
        Self {
            code,
            modifiers: Modifiers::CTRL,
        }
    }

    /// Key press with Alt held.
    #[must_use]
    pub fn alt(code: KeyCode) -> Self {
        Self {
            code,
            modifiers: Modifiers::ALT,
        }
    }
}

/// One external input delivered to the session loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    /// A key press.
    Key(KeyEvent),
    /// Completion of an earlier selection fetch. The payload is inserted
    /// into the query at the cursor; see the session's paste rules for
    /// newline and control-character handling.
    Paste(String),
    /// Out-of-band dismissal: a re-pressed global accelerator, or the
    /// input source shutting down.
    Cancel,
    /// The display was damaged; the session marks itself for redraw
    /// without touching any other state.
    Redraw,
}

/// External text selection a paste request targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Selection {
    /// The explicit clipboard.
    Clipboard,
    /// The implicit primary selection (most recently highlighted text).
    Primary,
}
