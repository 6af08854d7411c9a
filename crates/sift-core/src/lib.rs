#![forbid(unsafe_code)]

//! Shared vocabulary for the sift selection engine.
//!
//! This crate defines the types every other sift crate speaks: input
//! events ([`InputEvent`]), candidate lists ([`Candidates`]), terminal
//! session results ([`Outcome`], [`SessionResult`]), and configuration
//! ([`Layout`], [`SessionOptions`]). It carries no matching or session
//! logic of its own.

pub mod candidate;
pub mod config;
pub mod event;
pub mod outcome;

pub use candidate::{CandidateRef, Candidates};
pub use config::{ConfigError, EffectiveLayout, Layout, SessionOptions};
pub use event::{InputEvent, KeyCode, KeyEvent, Modifiers, Selection};
pub use outcome::{Outcome, SessionResult};
