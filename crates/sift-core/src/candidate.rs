#![forbid(unsafe_code)]

//! Candidate storage for selection sessions.
//!
//! A [`Candidates`] list is assembled by the caller before a session starts
//! and stays immutable while sessions borrow it. Each entry keeps the
//! position it was inserted at as its stable original index; outcomes refer
//! to that index, never to a position in the filtered list.

/// Owned, ordered candidate list with stable 0-based indices.
///
/// # Example
///
/// ```
/// use sift_core::Candidates;
///
/// let candidates: Candidates = ["Firefox", "Terminal", "Files"]
///     .into_iter()
///     .collect();
/// assert_eq!(candidates.len(), 3);
/// assert_eq!(candidates.text(2), Some("Files"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Candidates {
    items: Vec<String>,
}

impl Candidates {
    /// Empty candidate list.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one candidate. Its original index is the list length at the
    /// time of the call.
    pub fn push(&mut self, text: impl Into<String>) {
        self.items.push(text.into());
    }

    /// Number of candidates.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the list has no candidates. An empty list is a valid
    /// session input; its filtered list is always empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Primary text of the candidate at `index`.
    #[must_use]
    pub fn text(&self, index: usize) -> Option<&str> {
        self.items.get(index).map(String::as_str)
    }

    /// Borrowed view of the candidate at `index`.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<CandidateRef<'_>> {
        self.items
            .get(index)
            .map(|text| CandidateRef { index, text })
    }

    /// Iterate candidates in original order.
    pub fn iter(&self) -> impl Iterator<Item = CandidateRef<'_>> {
        self.items
            .iter()
            .enumerate()
            .map(|(index, text)| CandidateRef { index, text })
    }
}

impl From<Vec<String>> for Candidates {
    fn from(items: Vec<String>) -> Self {
        Self { items }
    }
}

impl<S: Into<String>> FromIterator<S> for Candidates {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().map(Into::into).collect(),
        }
    }
}

/// Borrowed view of one candidate: its original index plus primary text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CandidateRef<'a> {
    /// Stable 0-based original index.
    pub index: usize,
    /// Primary text, the field matched and ranked by default.
    pub text: &'a str,
}
