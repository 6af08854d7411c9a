#![forbid(unsafe_code)]

//! The sift selection engine: incremental filtering driven by keys.
//!
//! The engine narrows a candidate list as the query is edited, keeps the
//! selection and page stable while the list changes shape underneath it,
//! and resolves each session into one terminal [`Outcome`]. Pipeline per
//! query change: tokenize, match per candidate, optionally rank by edit
//! distance, clamp the selection, repage.
//!
//! Module map:
//!
//! - [`query`]: the editable query line with a grapheme-aware cursor.
//! - [`filter`]: the refilter pass producing ordered original indices.
//! - [`pager`]: anti-jitter page offsets and the page indicator.
//! - [`session`]: the keyboard state machine and blocking run loop.
//! - [`rotation`]: sessions over a ring of candidate lists.
//!
//! See [`session::Session`] for the key bindings and a worked example.
//!
//! [`Outcome`]: sift_core::Outcome

pub mod filter;
pub mod pager;
pub mod query;
pub mod rotation;
pub mod session;

pub use filter::refilter;
pub use pager::{PageIndicator, page_offset};
pub use query::QueryBuffer;
pub use rotation::{ListRotation, RotationResult};
pub use session::{EventSource, Session, SessionError, Step, ViewState};
