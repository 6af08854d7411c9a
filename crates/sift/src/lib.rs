#![forbid(unsafe_code)]

//! Sift: interactive, incremental fuzzy-filtering selection sessions.
//!
//! Give a session a candidate list and feed it key events; it narrows
//! the list on every keystroke, ranks and paginates the matches, and
//! resolves into one terminal [`Outcome`]: a selection, a cancellation,
//! free-form input, a hand-over to another list, an entry deletion, or a
//! quick jump. Rendering, input decoding, and acting on the result stay
//! with the caller.
//!
//! This crate is the facade: it re-exports the workspace so one
//! dependency brings the whole engine.
//!
//! - `sift-core`: events, candidates, outcomes, configuration.
//! - `sift-match`: tokenizer, matcher capability, edit-distance ranker.
//! - `sift-engine`: the session state machine, pager, and rotation.
//!
//! # Example
//!
//! ```
//! use sift::prelude::*;
//!
//! let candidates: Candidates =
//!     vec!["Firefox".to_string(), "Terminal".to_string(), "Files".to_string()].into();
//! let mut session = Session::new(
//!     &candidates,
//!     TokenMatcher::new(),
//!     Layout::default(),
//!     SessionOptions::default(),
//! )?;
//!
//! session.step(InputEvent::Key(KeyEvent::char('f')))?;
//! session.step(InputEvent::Key(KeyEvent::char('i')))?;
//! let step = session.step(InputEvent::Key(KeyEvent::new(KeyCode::Enter)))?;
//!
//! let Step::Done(result) = step else { unreachable!() };
//! assert_eq!(result.outcome, Outcome::Selected { index: 0, alternate: false });
//! # Ok::<(), SessionError>(())
//! ```

pub use sift_core::{
    CandidateRef, Candidates, ConfigError, EffectiveLayout, InputEvent, KeyCode, KeyEvent, Layout,
    Modifiers, Outcome, Selection, SessionOptions, SessionResult,
};
pub use sift_engine::{
    EventSource, ListRotation, PageIndicator, QueryBuffer, RotationResult, Session, SessionError,
    Step, ViewState, page_offset, refilter,
};
pub use sift_match::{
    DistanceTable, FieldSource, MatchError, Matcher, MultiFieldMatcher, Token, TokenList,
    TokenMatcher, fold_key, tokenize,
};

/// The names most callers want in scope.
pub mod prelude {
    pub use sift_core::{
        Candidates, InputEvent, KeyCode, KeyEvent, Layout, Modifiers, Outcome, Selection,
        SessionOptions, SessionResult,
    };
    pub use sift_engine::{
        EventSource, ListRotation, Session, SessionError, Step, ViewState,
    };
    pub use sift_match::{Matcher, MultiFieldMatcher, TokenMatcher};
}
