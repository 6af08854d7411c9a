#![forbid(unsafe_code)]

//! Terminal results of a selection session.

/// Terminal result of a session.
///
/// `Selected` and `DeleteEntry` carry the candidate's stable original
/// index, not its position in the filtered list, so the caller can act on
/// its own data without re-deriving the mapping.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Outcome {
    /// A candidate was accepted. `alternate` is set when Shift was held at
    /// accept time, for callers with a secondary action.
    Selected { index: usize, alternate: bool },
    /// The session was dismissed without a result.
    Cancelled,
    /// Accept fired with no highlighted candidate; carries the raw query
    /// text as the user's free-form input.
    CustomInput(String),
    /// Hand over to the next candidate list.
    NextList,
    /// The user asked to remove this entry from the underlying data.
    DeleteEntry(usize),
    /// Jump straight to list `n`, bypassing the current filter and
    /// selection.
    QuickJump(usize),
}

impl Outcome {
    /// Original index carried by the outcome, if any.
    #[must_use]
    pub fn index(&self) -> Option<usize> {
        match self {
            Self::Selected { index, .. } | Self::DeleteEntry(index) => Some(*index),
            _ => None,
        }
    }
}

/// Everything a finished session hands back.
///
/// The final query text is returned on every path, including cancellation,
/// so a caller can seed the next session's default text with it.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SessionResult {
    pub outcome: Outcome,
    pub query: String,
}
