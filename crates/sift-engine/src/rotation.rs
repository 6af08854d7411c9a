#![forbid(unsafe_code)]

//! Running sessions over a ring of candidate lists.
//!
//! A [`ListRotation`] owns several candidate lists (say windows, then
//! runnable commands) and runs one [`Session`] at a time over the active
//! list. A session ending in [`Outcome::NextList`] advances to the next
//! list in the ring; [`Outcome::QuickJump`] picks a list directly. The
//! query text carries across the hand-over so the user keeps what they
//! typed; the selection starts back at the top of the new list. Any
//! other outcome ends the rotation and is returned together with the
//! index of the list that produced it.
//!
//! One matcher serves every list, so this fits matchers that work off
//! candidate text. A matcher wired to a per-list backing store needs one
//! rotation per store.

use sift_core::{Candidates, ConfigError, Layout, Outcome, SessionOptions, SessionResult};
use sift_match::Matcher;

use crate::session::{EventSource, Session, SessionError, ViewState};

/// A ring of candidate lists plus the index of the active one.
#[derive(Debug, Clone)]
pub struct ListRotation {
    lists: Vec<Candidates>,
    active: usize,
}

/// Terminal result of a rotation: the outcome and which list it came
/// from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RotationResult {
    /// Index of the list the final session ran over.
    pub list: usize,
    pub result: SessionResult,
}

impl ListRotation {
    /// Rotation starting at the first list.
    pub fn new(lists: Vec<Candidates>) -> Result<Self, ConfigError> {
        if lists.is_empty() {
            return Err(ConfigError::EmptyRotation);
        }
        Ok(Self { lists, active: 0 })
    }

    /// Rotation starting at list `active`, wrapped into range.
    pub fn starting_at(lists: Vec<Candidates>, active: usize) -> Result<Self, ConfigError> {
        let mut rotation = Self::new(lists)?;
        rotation.active = active % rotation.lists.len();
        Ok(rotation)
    }

    /// Index of the active list.
    #[must_use]
    pub fn active(&self) -> usize {
        self.active
    }

    #[must_use]
    pub fn lists(&self) -> &[Candidates] {
        &self.lists
    }

    /// Runs sessions until one ends in something other than a hand-over.
    ///
    /// `options.initial_selected` applies to the first session only;
    /// every list reached by hand-over starts with the selection on its
    /// first entry. Quick jumps past the end of the ring wrap around.
    pub fn run<M, E>(
        mut self,
        mut matcher: M,
        layout: Layout,
        options: SessionOptions,
        events: &mut E,
        mut present: impl FnMut(&ViewState<'_>),
    ) -> Result<RotationResult, SessionError>
    where
        M: Matcher,
        E: EventSource,
    {
        let mut query = options.initial_query.clone();
        let mut initial_selected = options.initial_selected;
        loop {
            let round = SessionOptions {
                initial_query: query,
                initial_selected,
                sort_by_distance: options.sort_by_distance,
                auto_accept: options.auto_accept,
            };
            let session = Session::new(&self.lists[self.active], &mut matcher, layout, round)?;
            let result = session.run(events, &mut present)?;
            query = result.query.clone();
            initial_selected = None;
            match result.outcome {
                Outcome::NextList => {
                    self.active = (self.active + 1) % self.lists.len();
                    tracing::debug!(list = self.active, "rotated to next list");
                }
                Outcome::QuickJump(target) => {
                    self.active = target % self.lists.len();
                    tracing::debug!(list = self.active, "jumped to list");
                }
                _ => {
                    return Ok(RotationResult {
                        list: self.active,
                        result,
                    });
                }
            }
        }
    }
}
