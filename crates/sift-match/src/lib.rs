#![forbid(unsafe_code)]

//! Matching primitives for the sift selection engine.
//!
//! Three pieces, composed by the engine on every query change:
//!
//! - [`token`]: split the query into fold-key tokens ([`tokenize`],
//!   [`fold_key`]).
//! - [`matcher`]: decide per candidate whether the tokens match
//!   ([`Matcher`], with [`TokenMatcher`] for plain text and
//!   [`MultiFieldMatcher`] for candidates with several searchable
//!   fields).
//! - [`rank`]: score surviving candidates by edit distance from the
//!   query ([`DistanceTable`]).
//!
//! # Example
//!
//! ```
//! use sift_core::CandidateRef;
//! use sift_match::{DistanceTable, Matcher, TokenMatcher, tokenize};
//!
//! let tokens = tokenize("fi");
//! let mut matcher = TokenMatcher::new();
//! assert!(matcher
//!     .is_match(&tokens, CandidateRef { index: 0, text: "Firefox" })
//!     .unwrap());
//!
//! let mut table = DistanceTable::new();
//! assert!(table.distance("fx", "files") < table.distance("fx", "firefox"));
//! ```

pub mod matcher;
pub mod rank;
pub mod token;

pub use matcher::{FieldSource, MatchError, Matcher, MultiFieldMatcher, TokenMatcher};
pub use rank::DistanceTable;
pub use token::{Token, TokenList, fold_key, tokenize};
