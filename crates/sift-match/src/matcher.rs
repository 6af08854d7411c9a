#![forbid(unsafe_code)]

//! Pluggable match capability.
//!
//! A [`Matcher`] decides, per candidate, whether the current query tokens
//! match. The engine owns one matcher for the whole session and never
//! learns where candidate text comes from; multi-field matching reads
//! extra fields through a caller-supplied [`FieldSource`].
//!
//! Semantics shared by the built-in matchers:
//!
//! - AND across tokens: every token must land somewhere.
//! - Case- and diacritic-insensitive via [`fold_key`].
//! - An empty token list matches every candidate.
//! - The first token that matches nowhere ends the scan.
//!
//! # Failure Modes
//!
//! | Error | Meaning |
//! |-------|---------|
//! | [`MatchError::UnknownCandidate`] | candidate index outside the backing store |
//! | [`MatchError::Field`] | a field slot could not be resolved |
//!
//! Matcher errors signal caller or configuration defects; the engine
//! treats them as fatal for the session rather than masking them as
//! non-matches.

use sift_core::CandidateRef;

use crate::token::{Token, fold_key};

/// Errors surfaced by match capabilities.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchError {
    /// A candidate index fell outside the backing store.
    UnknownCandidate(usize),
    /// A field slot could not be resolved for a candidate.
    Field {
        candidate: usize,
        slot: usize,
        reason: String,
    },
}

impl std::fmt::Display for MatchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownCandidate(index) => {
                write!(f, "unknown candidate index {index}")
            }
            Self::Field {
                candidate,
                slot,
                reason,
            } => {
                write!(f, "field {slot} of candidate {candidate} unavailable: {reason}")
            }
        }
    }
}

impl std::error::Error for MatchError {}

/// Decides whether the current tokens match a candidate.
///
/// Implementations may keep per-session scratch state, hence `&mut self`.
pub trait Matcher {
    /// `Ok(true)` when every token matches the candidate.
    fn is_match(
        &mut self,
        tokens: &[Token],
        candidate: CandidateRef<'_>,
    ) -> Result<bool, MatchError>;
}

impl<M: Matcher + ?Sized> Matcher for &mut M {
    fn is_match(
        &mut self,
        tokens: &[Token],
        candidate: CandidateRef<'_>,
    ) -> Result<bool, MatchError> {
        (**self).is_match(tokens, candidate)
    }
}

/// Single-field matcher over the candidate's primary text.
///
/// # Example
///
/// ```
/// use sift_core::CandidateRef;
/// use sift_match::matcher::{Matcher, TokenMatcher};
/// use sift_match::token::tokenize;
///
/// let mut matcher = TokenMatcher::new();
/// let tokens = tokenize("fire");
/// let candidate = CandidateRef { index: 0, text: "Firefox" };
/// assert!(matcher.is_match(&tokens, candidate).unwrap());
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct TokenMatcher;

impl TokenMatcher {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Matcher for TokenMatcher {
    fn is_match(
        &mut self,
        tokens: &[Token],
        candidate: CandidateRef<'_>,
    ) -> Result<bool, MatchError> {
        if tokens.is_empty() {
            return Ok(true);
        }
        let key = fold_key(candidate.text);
        Ok(tokens.iter().all(|token| key.contains(token.key())))
    }
}

/// Resolves the text fields a candidate exposes beyond its primary text.
///
/// Slots are zero-based and fixed for the lifetime of a session. A slot
/// may be empty for a given candidate (`Ok(None)`); an `Err` is a defect
/// and ends the session.
pub trait FieldSource {
    /// Number of field slots every candidate exposes.
    fn slots(&self) -> usize;

    /// Text of `slot` for `candidate`, or `None` when the slot is empty.
    fn field(&self, candidate: usize, slot: usize) -> Result<Option<&str>, MatchError>;
}

/// Multi-field matcher: per token, at least one field slot must contain
/// it; tokens still combine with AND.
///
/// Fields come solely from the [`FieldSource`]. The candidate's primary
/// text is not consulted, so a source that wants it searchable exposes it
/// as one of its slots.
#[derive(Debug, Clone)]
pub struct MultiFieldMatcher<S> {
    source: S,
    keys: Vec<String>,
}

impl<S: FieldSource> MultiFieldMatcher<S> {
    #[must_use]
    pub fn new(source: S) -> Self {
        Self {
            source,
            keys: Vec::new(),
        }
    }

    /// The wrapped field source.
    #[must_use]
    pub fn source(&self) -> &S {
        &self.source
    }
}

impl<S: FieldSource> Matcher for MultiFieldMatcher<S> {
    fn is_match(
        &mut self,
        tokens: &[Token],
        candidate: CandidateRef<'_>,
    ) -> Result<bool, MatchError> {
        if tokens.is_empty() {
            return Ok(true);
        }
        self.keys.clear();
        for slot in 0..self.source.slots() {
            if let Some(text) = self.source.field(candidate.index, slot)? {
                self.keys.push(fold_key(text));
            }
        }
        for token in tokens {
            if !self.keys.iter().any(|key| key.contains(token.key())) {
                return Ok(false);
            }
        }
        Ok(true)
    }
}
