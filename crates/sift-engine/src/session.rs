#![forbid(unsafe_code)]

//! One interactive selection session.
//!
//! A [`Session`] owns the query, the filtered list, the selection, and
//! the page offset for one run over a borrowed candidate set. Input
//! events go in through [`Session::step`]; each step settles the session
//! (refilter if the query changed, clamp the selection, recompute the
//! page offset) and reports whether the session is still pending, wants
//! an external selection fetched, or is done.
//!
//! [`Session::run`] wraps `step` in the blocking loop most callers want:
//! draw, wait for one event, dispatch, repeat. Filtering is synchronous
//! inside the loop, so worst-case input latency is one full matcher pass
//! over the candidate set.
//!
//! # Key bindings
//!
//! | Key | Effect |
//! |-----|--------|
//! | printable | insert at the cursor and refilter |
//! | Enter | accept the highlighted candidate (Shift marks the alternate action); with no match, return the query as custom input |
//! | Escape | cancel |
//! | Up, Shift+Tab, Ctrl+P | selection up, wrapping |
//! | Down, Ctrl+N | selection down, wrapping |
//! | Tab | single match: accept it; empty list right after a Tab: next list; otherwise down |
//! | PageUp, PageDown | move by one page |
//! | Ctrl+PageUp, Ctrl+PageDown | move by one column of rows |
//! | Home, End | first and last match |
//! | Left, Right | move the query cursor |
//! | Backspace, Delete | delete before and at the cursor |
//! | Shift+Delete | ask the caller to delete the highlighted entry |
//! | Shift+/ | hand over to the next candidate list |
//! | Alt+1 to Alt+9 | jump straight to that list |
//! | Ctrl+V, Insert | fetch the clipboard, or the primary selection with Shift |
//!
//! # Example
//!
//! ```
//! use sift_core::{Candidates, InputEvent, KeyCode, KeyEvent, Layout, Outcome, SessionOptions};
//! use sift_engine::session::{EventSource, Session};
//! use sift_match::TokenMatcher;
//!
//! struct Script(std::vec::IntoIter<InputEvent>);
//!
//! impl EventSource for Script {
//!     fn next_event(&mut self) -> Option<InputEvent> {
//!         self.0.next()
//!     }
//! }
//!
//! let candidates: Candidates =
//!     vec!["Firefox".to_string(), "Terminal".to_string(), "Files".to_string()].into();
//! let session = Session::new(
//!     &candidates,
//!     TokenMatcher::new(),
//!     Layout::default(),
//!     SessionOptions::default(),
//! )?;
//! let mut events = Script(
//!     vec![
//!         InputEvent::Key(KeyEvent::char('f')),
//!         InputEvent::Key(KeyEvent::char('i')),
//!         InputEvent::Key(KeyEvent::new(KeyCode::Enter)),
//!     ]
//!     .into_iter(),
//! );
//! let result = session.run(&mut events, |_| {})?;
//! assert_eq!(result.outcome, Outcome::Selected { index: 0, alternate: false });
//! assert_eq!(result.query, "fi");
//! # Ok::<(), sift_engine::session::SessionError>(())
//! ```

use sift_core::{
    CandidateRef, Candidates, ConfigError, EffectiveLayout, InputEvent, KeyCode, KeyEvent, Layout,
    Modifiers, Outcome, Selection, SessionOptions, SessionResult,
};
use sift_match::{DistanceTable, MatchError, Matcher};

use crate::filter::refilter;
use crate::pager::{self, PageIndicator};
use crate::query::QueryBuffer;

/// Errors a session can raise.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    /// The session was configured with an unusable layout or rotation.
    Config(ConfigError),
    /// The matcher failed; fatal for the session.
    Match(MatchError),
}

impl std::fmt::Display for SessionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Config(err) => write!(f, "invalid session configuration: {err}"),
            Self::Match(err) => write!(f, "matcher failed: {err}"),
        }
    }
}

impl std::error::Error for SessionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Config(err) => Some(err),
            Self::Match(err) => Some(err),
        }
    }
}

impl From<ConfigError> for SessionError {
    fn from(err: ConfigError) -> Self {
        Self::Config(err)
    }
}

impl From<MatchError> for SessionError {
    fn from(err: MatchError) -> Self {
        Self::Match(err)
    }
}

/// What one processed event left behind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// The session wants the next event.
    Pending,
    /// The session wants the given selection fetched; deliver the text
    /// as a later [`InputEvent::Paste`].
    FetchSelection(Selection),
    /// The session reached a terminal outcome.
    Done(SessionResult),
}

/// Blocking source of input events for [`Session::run`].
///
/// `None` from [`next_event`](Self::next_event) means the input channel
/// closed; the session treats that as cancellation.
pub trait EventSource {
    fn next_event(&mut self) -> Option<InputEvent>;

    /// Called when the session wants an external selection. The default
    /// ignores the request; sources backed by a display server issue the
    /// conversion and deliver the payload as a paste event.
    fn request_selection(&mut self, selection: Selection) {
        let _ = selection;
    }
}

/// Read-only snapshot handed to the renderer.
#[derive(Debug, Clone, Copy)]
pub struct ViewState<'a> {
    /// Raw query text.
    pub query: &'a str,
    /// Cursor byte offset into `query`.
    pub cursor: usize,
    /// Filtered list as original indices, in display order.
    pub filtered: &'a [usize],
    /// Selection as a position in `filtered`; zero when it is empty.
    pub selected: usize,
    /// First visible position in `filtered`.
    pub page_offset: usize,
    /// Grid the session paginates with.
    pub layout: EffectiveLayout,
    /// Scroll-arrow and page-label state.
    pub indicator: PageIndicator,
    candidates: &'a Candidates,
}

impl<'a> ViewState<'a> {
    /// Rows on the current page, in display order.
    pub fn visible(&self) -> impl Iterator<Item = CandidateRef<'a>> + '_ {
        let end = (self.page_offset + self.layout.capacity).min(self.filtered.len());
        self.filtered[self.page_offset..end]
            .iter()
            .filter_map(|&index| self.candidates.get(index))
    }

    /// Original index of the highlighted candidate, if any.
    #[must_use]
    pub fn highlighted(&self) -> Option<usize> {
        self.filtered.get(self.selected).copied()
    }

    /// Number of candidates currently matching.
    #[must_use]
    pub fn match_count(&self) -> usize {
        self.filtered.len()
    }
}

/// The interactive selection state machine.
///
/// Borrows the candidate set for its whole lifetime and owns everything
/// else: query, filtered list, selection, page offset, and the matcher.
/// See the [module docs](self) for the key bindings and an example.
#[derive(Debug)]
pub struct Session<'a, M> {
    candidates: &'a Candidates,
    matcher: M,
    layout: EffectiveLayout,
    sort_by_distance: bool,
    auto_accept: bool,
    query: QueryBuffer,
    filtered: Vec<usize>,
    selected: usize,
    page_offset: usize,
    pending_initial: Option<usize>,
    last_key: Option<KeyEvent>,
    dirty: bool,
    needs_redraw: bool,
    resolved: Option<Outcome>,
    table: DistanceTable,
}

impl<'a, M: Matcher> Session<'a, M> {
    /// Opens a session over `candidates` and runs the initial refilter.
    ///
    /// An empty candidate set is valid; the filtered list just stays
    /// empty. An out-of-range `initial_selected` is ignored. With
    /// `auto_accept` set and exactly one candidate surviving the initial
    /// query, the session is already resolved when this returns.
    pub fn new(
        candidates: &'a Candidates,
        matcher: M,
        layout: Layout,
        options: SessionOptions,
    ) -> Result<Self, SessionError> {
        layout.validate()?;
        let SessionOptions {
            initial_query,
            initial_selected,
            sort_by_distance,
            auto_accept,
        } = options;
        let mut session = Self {
            candidates,
            matcher,
            layout: layout.effective(candidates.len()),
            sort_by_distance,
            auto_accept,
            query: QueryBuffer::new(initial_query),
            filtered: Vec::new(),
            selected: 0,
            page_offset: 0,
            pending_initial: initial_selected.filter(|&index| index < candidates.len()),
            last_key: None,
            dirty: true,
            needs_redraw: true,
            resolved: None,
            table: DistanceTable::new(),
        };
        session.settle()?;
        Ok(session)
    }

    /// Feeds one event through the state machine.
    ///
    /// A session that has already resolved returns [`Step::Done`] again
    /// without looking at the event.
    pub fn step(&mut self, event: InputEvent) -> Result<Step, SessionError> {
        let _span = tracing::trace_span!("session_step", event = ?event).entered();
        if let Some(outcome) = self.resolved.clone() {
            return Ok(Step::Done(self.result(outcome)));
        }
        let mut fetch = None;
        match event {
            InputEvent::Cancel => self.resolve(Outcome::Cancelled),
            InputEvent::Redraw => self.needs_redraw = true,
            InputEvent::Paste(payload) => {
                if self.query.paste(&payload) {
                    self.dirty = true;
                }
            }
            InputEvent::Key(key) => fetch = self.on_key(key),
        }
        self.settle()?;
        if let Some(outcome) = self.resolved.clone() {
            return Ok(Step::Done(self.result(outcome)));
        }
        if let Some(selection) = fetch {
            return Ok(Step::FetchSelection(selection));
        }
        Ok(Step::Pending)
    }

    /// Drives the session to its end: draw, block for one event,
    /// dispatch, repeat.
    ///
    /// `present` runs whenever the view is damaged, starting with the
    /// initial state. A closed event source cancels the session.
    pub fn run<E: EventSource>(
        mut self,
        events: &mut E,
        mut present: impl FnMut(&ViewState<'_>),
    ) -> Result<SessionResult, SessionError> {
        loop {
            if let Some(outcome) = self.resolved.clone() {
                return Ok(self.result(outcome));
            }
            if self.take_redraw() {
                present(&self.view());
            }
            let Some(event) = events.next_event() else {
                self.resolve(Outcome::Cancelled);
                continue;
            };
            match self.step(event)? {
                Step::Pending | Step::Done(_) => {}
                Step::FetchSelection(selection) => events.request_selection(selection),
            }
        }
    }

    /// Current snapshot for the renderer.
    #[must_use]
    pub fn view(&self) -> ViewState<'_> {
        ViewState {
            query: self.query.text(),
            cursor: self.query.cursor(),
            filtered: &self.filtered,
            selected: self.selected,
            page_offset: self.page_offset,
            layout: self.layout,
            indicator: PageIndicator::new(
                self.filtered.len(),
                self.selected,
                self.layout.capacity,
            ),
            candidates: self.candidates,
        }
    }

    /// Whether a terminal outcome has been reached.
    #[must_use]
    pub fn is_resolved(&self) -> bool {
        self.resolved.is_some()
    }

    /// Returns and clears the redraw flag, for callers that drive
    /// [`step`](Self::step) themselves and draw only on damage.
    pub fn take_redraw(&mut self) -> bool {
        std::mem::take(&mut self.needs_redraw)
    }

    /// The raw query text as currently edited.
    #[must_use]
    pub fn query(&self) -> &str {
        self.query.text()
    }

    /// The filtered list as original indices.
    #[must_use]
    pub fn filtered(&self) -> &[usize] {
        &self.filtered
    }

    /// Selection as a position in the filtered list.
    #[must_use]
    pub fn selected(&self) -> usize {
        self.selected
    }

    fn result(&self, outcome: Outcome) -> SessionResult {
        SessionResult {
            outcome,
            query: self.query.text().to_string(),
        }
    }

    fn resolve(&mut self, outcome: Outcome) {
        tracing::debug!(?outcome, "session resolved");
        self.resolved = Some(outcome);
    }

    /// Brings derived state back in line after an event: refilter when
    /// the query changed, clamp the selection, map a pending initial
    /// selection, fire auto-accept, recompute the page offset.
    fn settle(&mut self) -> Result<(), MatchError> {
        if self.dirty {
            self.filtered = refilter(
                self.candidates,
                self.query.text(),
                &mut self.matcher,
                self.sort_by_distance,
                &mut self.table,
            )?;
            self.dirty = false;
            self.needs_redraw = true;
            self.selected = self.selected.min(self.filtered.len().saturating_sub(1));
            let initial = self
                .pending_initial
                .and_then(|original| self.filtered.iter().position(|&index| index == original));
            if let Some(position) = initial {
                self.selected = position;
                self.pending_initial = None;
            }
            if self.auto_accept && self.filtered.len() == 1 && self.resolved.is_none() {
                self.resolve(Outcome::Selected {
                    index: self.filtered[0],
                    alternate: false,
                });
            }
        }
        self.page_offset = pager::page_offset(self.page_offset, self.selected, self.layout.capacity);
        Ok(())
    }

    fn on_key(&mut self, key: KeyEvent) -> Option<Selection> {
        let previous = self.last_key.replace(key);
        let mods = key.modifiers;
        let shift = mods.contains(Modifiers::SHIFT);
        match key.code {
            KeyCode::Escape => self.resolve(Outcome::Cancelled),
            KeyCode::Enter => self.accept(shift),
            KeyCode::Tab if shift => self.move_up(),
            KeyCode::Tab => self.on_tab(previous),
            KeyCode::Up => self.move_up(),
            KeyCode::Down => self.move_down(),
            KeyCode::Home => self.move_home(),
            KeyCode::End => self.move_end(),
            KeyCode::PageUp if mods.contains(Modifiers::CTRL) => self.move_back(self.layout.rows),
            KeyCode::PageUp => self.move_back(self.layout.capacity),
            KeyCode::PageDown if mods.contains(Modifiers::CTRL) => {
                self.move_forward(self.layout.rows);
            }
            KeyCode::PageDown => self.move_forward(self.layout.capacity),
            KeyCode::Left => {
                if self.query.move_left() {
                    self.needs_redraw = true;
                }
            }
            KeyCode::Right => {
                if self.query.move_right() {
                    self.needs_redraw = true;
                }
            }
            KeyCode::Backspace => {
                if self.query.delete_before() {
                    self.dirty = true;
                }
            }
            KeyCode::Delete if shift => self.delete_entry(),
            KeyCode::Delete => {
                if self.query.delete_at() {
                    self.dirty = true;
                }
            }
            KeyCode::Insert => return Some(selection_target(shift)),
            KeyCode::Char(c) => return self.on_char(c, mods),
        }
        None
    }

    fn on_char(&mut self, c: char, mods: Modifiers) -> Option<Selection> {
        let shift = mods.contains(Modifiers::SHIFT);
        if mods.contains(Modifiers::CTRL) {
            match c.to_ascii_lowercase() {
                'p' => self.move_up(),
                'n' => self.move_down(),
                'v' => return Some(selection_target(shift)),
                _ => {}
            }
            return None;
        }
        if mods.contains(Modifiers::ALT) {
            if let Some(digit) = c.to_digit(10) {
                if (1..=9).contains(&digit) {
                    self.resolve(Outcome::QuickJump(digit as usize - 1));
                }
            }
            return None;
        }
        if shift && (c == '/' || c == '?') {
            self.resolve(Outcome::NextList);
            return None;
        }
        if self.query.insert(c) {
            self.dirty = true;
        }
        None
    }

    fn accept(&mut self, alternate: bool) {
        match self.filtered.get(self.selected) {
            Some(&index) => self.resolve(Outcome::Selected { index, alternate }),
            None => self.resolve(Outcome::CustomInput(self.query.text().to_string())),
        }
    }

    fn on_tab(&mut self, previous: Option<KeyEvent>) {
        match self.filtered.len() {
            1 => self.accept(false),
            0 if was_plain_tab(previous) => self.resolve(Outcome::NextList),
            _ => self.move_down(),
        }
    }

    fn delete_entry(&mut self) {
        if let Some(&index) = self.filtered.get(self.selected) {
            self.resolve(Outcome::DeleteEntry(index));
        }
    }

    fn move_up(&mut self) {
        let len = self.filtered.len();
        if len == 0 {
            return;
        }
        self.selected = if self.selected == 0 {
            len - 1
        } else {
            self.selected - 1
        };
        self.needs_redraw = true;
    }

    fn move_down(&mut self) {
        let len = self.filtered.len();
        if len == 0 {
            return;
        }
        self.selected = if self.selected + 1 == len {
            0
        } else {
            self.selected + 1
        };
        self.needs_redraw = true;
    }

    fn move_back(&mut self, step: usize) {
        if self.filtered.is_empty() {
            return;
        }
        self.selected = self.selected.saturating_sub(step);
        self.needs_redraw = true;
    }

    fn move_forward(&mut self, step: usize) {
        let len = self.filtered.len();
        if len == 0 {
            return;
        }
        self.selected = (self.selected + step).min(len - 1);
        self.needs_redraw = true;
    }

    fn move_home(&mut self) {
        if self.filtered.is_empty() {
            return;
        }
        self.selected = 0;
        self.needs_redraw = true;
    }

    fn move_end(&mut self) {
        let len = self.filtered.len();
        if len == 0 {
            return;
        }
        self.selected = len - 1;
        self.needs_redraw = true;
    }
}

fn selection_target(shift: bool) -> Selection {
    if shift {
        Selection::Primary
    } else {
        Selection::Clipboard
    }
}

fn was_plain_tab(previous: Option<KeyEvent>) -> bool {
    previous.is_some_and(|key| {
        key.code == KeyCode::Tab && !key.modifiers.contains(Modifiers::SHIFT)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use sift_match::TokenMatcher;

    fn candidates() -> Candidates {
        vec![
            "Firefox".to_string(),
            "Terminal".to_string(),
            "Files".to_string(),
        ]
        .into()
    }

    fn session(candidates: &Candidates) -> Session<'_, TokenMatcher> {
        Session::new(
            candidates,
            TokenMatcher::new(),
            Layout::default(),
            SessionOptions::default(),
        )
        .unwrap()
    }

    fn key(session: &mut Session<'_, TokenMatcher>, event: KeyEvent) -> Step {
        session.step(InputEvent::Key(event)).unwrap()
    }

    // ── Construction ────────────────────────────────────────────────────

    #[test]
    fn initial_state_shows_everything() {
        let set = candidates();
        let s = session(&set);
        assert_eq!(s.filtered(), &[0, 1, 2]);
        assert_eq!(s.selected(), 0);
        assert!(!s.is_resolved());
    }

    #[test]
    fn initial_query_is_filtered_at_construction() {
        let set = candidates();
        let s = Session::new(
            &set,
            TokenMatcher::new(),
            Layout::default(),
            SessionOptions {
                initial_query: "fi".into(),
                ..SessionOptions::default()
            },
        )
        .unwrap();
        assert_eq!(s.filtered(), &[0, 2]);
        assert_eq!(s.query(), "fi");
    }

    #[test]
    fn invalid_layout_is_rejected_up_front() {
        let set = candidates();
        let err = Session::new(
            &set,
            TokenMatcher::new(),
            Layout::vertical(0, 1),
            SessionOptions::default(),
        )
        .unwrap_err();
        assert_eq!(err, SessionError::Config(ConfigError::ZeroRows));
    }

    #[test]
    fn auto_accept_can_resolve_at_construction() {
        let set: Candidates = vec!["only one".to_string()].into();
        let mut s = Session::new(
            &set,
            TokenMatcher::new(),
            Layout::default(),
            SessionOptions {
                auto_accept: true,
                ..SessionOptions::default()
            },
        )
        .unwrap();
        assert!(s.is_resolved());
        let step = s.step(InputEvent::Redraw).unwrap();
        let Step::Done(result) = step else {
            panic!("expected Done, got {step:?}");
        };
        assert_eq!(
            result.outcome,
            Outcome::Selected {
                index: 0,
                alternate: false
            }
        );
    }

    #[test]
    fn initial_selected_lands_on_the_original_index() {
        let set = candidates();
        let s = Session::new(
            &set,
            TokenMatcher::new(),
            Layout::default(),
            SessionOptions {
                initial_selected: Some(2),
                ..SessionOptions::default()
            },
        )
        .unwrap();
        assert_eq!(s.selected(), 2);
        assert_eq!(s.view().highlighted(), Some(2));
    }

    #[test]
    fn initial_selected_maps_into_a_ranked_list() {
        // Ranked "fx" puts Files (2) before Firefox (0); the initial
        // original index must land on its post-sort position.
        let set = candidates();
        let s = Session::new(
            &set,
            TokenMatcher::new(),
            Layout::default(),
            SessionOptions {
                initial_query: "fx".into(),
                initial_selected: Some(0),
                sort_by_distance: true,
                ..SessionOptions::default()
            },
        )
        .unwrap();
        assert_eq!(s.filtered(), &[2, 0]);
        assert_eq!(s.selected(), 1);
    }

    #[test]
    fn initial_selected_sticks_until_its_entry_appears() {
        let set = candidates();
        let mut s = Session::new(
            &set,
            TokenMatcher::new(),
            Layout::default(),
            SessionOptions {
                initial_query: "term".into(),
                initial_selected: Some(2),
                ..SessionOptions::default()
            },
        )
        .unwrap();
        // "term" filters Files out; the request stays pending.
        assert_eq!(s.filtered(), &[1]);
        assert_eq!(s.selected(), 0);
        // Clearing the query brings Files back and the request lands.
        for _ in 0..4 {
            key(&mut s, KeyEvent::new(KeyCode::Backspace));
        }
        assert_eq!(s.filtered(), &[0, 1, 2]);
        assert_eq!(s.selected(), 2);
    }

    #[test]
    fn out_of_range_initial_selected_is_ignored() {
        let set = candidates();
        let s = Session::new(
            &set,
            TokenMatcher::new(),
            Layout::default(),
            SessionOptions {
                initial_selected: Some(9),
                ..SessionOptions::default()
            },
        )
        .unwrap();
        assert_eq!(s.selected(), 0);
    }

    // ── Editing and refiltering ─────────────────────────────────────────

    #[test]
    fn typing_narrows_and_clamps_the_selection() {
        let set = candidates();
        let mut s = session(&set);
        key(&mut s, KeyEvent::new(KeyCode::End));
        assert_eq!(s.selected(), 2);
        key(&mut s, KeyEvent::char('f'));
        key(&mut s, KeyEvent::char('i'));
        assert_eq!(s.filtered(), &[0, 2]);
        assert_eq!(s.selected(), 1);
    }

    #[test]
    fn selection_survives_a_filter_to_empty_and_back() {
        let set = candidates();
        let mut s = session(&set);
        key(&mut s, KeyEvent::char('z'));
        assert!(s.filtered().is_empty());
        assert_eq!(s.selected(), 0);
        key(&mut s, KeyEvent::new(KeyCode::Backspace));
        assert_eq!(s.filtered(), &[0, 1, 2]);
    }

    #[test]
    fn paste_event_lands_in_the_query_and_refilters() {
        let set = candidates();
        let mut s = session(&set);
        let step = s.step(InputEvent::Paste("ter\nrest".into())).unwrap();
        assert_eq!(step, Step::Pending);
        assert_eq!(s.query(), "ter");
        assert_eq!(s.filtered(), &[1]);
    }

    #[test]
    fn ctrl_v_and_insert_request_a_fetch() {
        let set = candidates();
        let mut s = session(&set);
        let step = key(&mut s, KeyEvent::ctrl(KeyCode::Char('v')));
        assert_eq!(step, Step::FetchSelection(Selection::Clipboard));

        let step = key(&mut s, KeyEvent::new(KeyCode::Insert));
        assert_eq!(step, Step::FetchSelection(Selection::Clipboard));

        let step = key(&mut s, KeyEvent::shift(KeyCode::Insert));
        assert_eq!(step, Step::FetchSelection(Selection::Primary));
    }

    // ── Acceptance and terminal outcomes ────────────────────────────────

    #[test]
    fn enter_accepts_the_highlighted_candidate() {
        let set = candidates();
        let mut s = session(&set);
        key(&mut s, KeyEvent::new(KeyCode::Down));
        let step = key(&mut s, KeyEvent::new(KeyCode::Enter));
        let Step::Done(result) = step else {
            panic!("expected Done, got {step:?}");
        };
        assert_eq!(
            result.outcome,
            Outcome::Selected {
                index: 1,
                alternate: false
            }
        );
    }

    #[test]
    fn shift_enter_marks_the_alternate_action() {
        let set = candidates();
        let mut s = session(&set);
        let step = key(&mut s, KeyEvent::shift(KeyCode::Enter));
        let Step::Done(result) = step else {
            panic!("expected Done, got {step:?}");
        };
        assert_eq!(
            result.outcome,
            Outcome::Selected {
                index: 0,
                alternate: true
            }
        );
    }

    #[test]
    fn enter_with_no_match_returns_custom_input() {
        let set = candidates();
        let mut s = session(&set);
        for c in "xyz".chars() {
            key(&mut s, KeyEvent::char(c));
        }
        let step = key(&mut s, KeyEvent::new(KeyCode::Enter));
        let Step::Done(result) = step else {
            panic!("expected Done, got {step:?}");
        };
        assert_eq!(result.outcome, Outcome::CustomInput("xyz".into()));
        assert_eq!(result.query, "xyz");
    }

    #[test]
    fn escape_cancels_and_keeps_the_query() {
        let set = candidates();
        let mut s = session(&set);
        key(&mut s, KeyEvent::char('f'));
        let step = key(&mut s, KeyEvent::new(KeyCode::Escape));
        let Step::Done(result) = step else {
            panic!("expected Done, got {step:?}");
        };
        assert_eq!(result.outcome, Outcome::Cancelled);
        assert_eq!(result.query, "f");
    }

    #[test]
    fn shift_delete_reports_the_original_index() {
        let set = candidates();
        let mut s = session(&set);
        key(&mut s, KeyEvent::new(KeyCode::Down));
        let step = key(&mut s, KeyEvent::shift(KeyCode::Delete));
        let Step::Done(result) = step else {
            panic!("expected Done, got {step:?}");
        };
        assert_eq!(result.outcome, Outcome::DeleteEntry(1));
    }

    #[test]
    fn shift_delete_on_an_empty_list_is_a_no_op() {
        let set = candidates();
        let mut s = session(&set);
        key(&mut s, KeyEvent::char('z'));
        let step = key(&mut s, KeyEvent::shift(KeyCode::Delete));
        assert_eq!(step, Step::Pending);
        assert!(!s.is_resolved());
    }

    #[test]
    fn alt_digit_quick_jumps() {
        let set = candidates();
        let mut s = session(&set);
        let step = key(&mut s, KeyEvent::alt(KeyCode::Char('3')));
        let Step::Done(result) = step else {
            panic!("expected Done, got {step:?}");
        };
        assert_eq!(result.outcome, Outcome::QuickJump(2));
    }

    #[test]
    fn alt_zero_is_not_a_jump() {
        let set = candidates();
        let mut s = session(&set);
        let step = key(&mut s, KeyEvent::alt(KeyCode::Char('0')));
        assert_eq!(step, Step::Pending);
    }

    #[test]
    fn shift_slash_hands_over_to_the_next_list() {
        let set = candidates();
        let mut s = session(&set);
        let step = key(&mut s, KeyEvent::shift(KeyCode::Char('/')));
        let Step::Done(result) = step else {
            panic!("expected Done, got {step:?}");
        };
        assert_eq!(result.outcome, Outcome::NextList);
    }

    #[test]
    fn plain_slash_is_just_text() {
        let set = candidates();
        let mut s = session(&set);
        key(&mut s, KeyEvent::char('/'));
        assert_eq!(s.query(), "/");
        assert!(!s.is_resolved());
    }

    #[test]
    fn done_is_idempotent() {
        let set = candidates();
        let mut s = session(&set);
        key(&mut s, KeyEvent::new(KeyCode::Escape));
        let again = s.step(InputEvent::Key(KeyEvent::char('x'))).unwrap();
        let Step::Done(result) = again else {
            panic!("expected Done, got {again:?}");
        };
        assert_eq!(result.outcome, Outcome::Cancelled);
        // The ignored key never reached the query.
        assert_eq!(result.query, "");
    }

    // ── Tab ─────────────────────────────────────────────────────────────

    #[test]
    fn tab_moves_down_through_many_matches() {
        let set = candidates();
        let mut s = session(&set);
        key(&mut s, KeyEvent::new(KeyCode::Tab));
        assert_eq!(s.selected(), 1);
    }

    #[test]
    fn tab_accepts_a_single_match() {
        let set = candidates();
        let mut s = session(&set);
        for c in "term".chars() {
            key(&mut s, KeyEvent::char(c));
        }
        let step = key(&mut s, KeyEvent::new(KeyCode::Tab));
        let Step::Done(result) = step else {
            panic!("expected Done, got {step:?}");
        };
        assert_eq!(
            result.outcome,
            Outcome::Selected {
                index: 1,
                alternate: false
            }
        );
    }

    #[test]
    fn double_tab_on_an_empty_list_moves_to_the_next_list() {
        let set = candidates();
        let mut s = session(&set);
        key(&mut s, KeyEvent::char('z'));
        assert_eq!(key(&mut s, KeyEvent::new(KeyCode::Tab)), Step::Pending);
        let step = key(&mut s, KeyEvent::new(KeyCode::Tab));
        let Step::Done(result) = step else {
            panic!("expected Done, got {step:?}");
        };
        assert_eq!(result.outcome, Outcome::NextList);
    }

    #[test]
    fn interrupted_double_tab_does_not_hand_over() {
        let set = candidates();
        let mut s = session(&set);
        key(&mut s, KeyEvent::char('z'));
        key(&mut s, KeyEvent::new(KeyCode::Tab));
        key(&mut s, KeyEvent::new(KeyCode::Down));
        let step = key(&mut s, KeyEvent::new(KeyCode::Tab));
        assert_eq!(step, Step::Pending);
    }

    #[test]
    fn shift_tab_moves_up_and_does_not_arm_double_tab() {
        let set = candidates();
        let mut s = session(&set);
        key(&mut s, KeyEvent::shift(KeyCode::Tab));
        assert_eq!(s.selected(), 2);

        // Shift+Tab then Tab on an empty list is not a hand-over.
        key(&mut s, KeyEvent::char('z'));
        key(&mut s, KeyEvent::shift(KeyCode::Tab));
        let step = key(&mut s, KeyEvent::new(KeyCode::Tab));
        assert_eq!(step, Step::Pending);
    }

    // ── Navigation ──────────────────────────────────────────────────────

    #[test]
    fn up_and_down_wrap() {
        let set = candidates();
        let mut s = session(&set);
        key(&mut s, KeyEvent::new(KeyCode::Up));
        assert_eq!(s.selected(), 2);
        key(&mut s, KeyEvent::new(KeyCode::Down));
        assert_eq!(s.selected(), 0);
    }

    #[test]
    fn three_downs_wrap_back_to_the_top() {
        let set = candidates();
        let mut s = session(&set);
        let mut seen = Vec::new();
        for _ in 0..3 {
            key(&mut s, KeyEvent::new(KeyCode::Down));
            seen.push(s.selected());
        }
        assert_eq!(seen, vec![1, 2, 0]);
    }

    #[test]
    fn ctrl_p_and_ctrl_n_mirror_up_and_down() {
        let set = candidates();
        let mut s = session(&set);
        key(&mut s, KeyEvent::ctrl(KeyCode::Char('n')));
        assert_eq!(s.selected(), 1);
        key(&mut s, KeyEvent::ctrl(KeyCode::Char('p')));
        assert_eq!(s.selected(), 0);
        // Ctrl-held letters never reach the query.
        assert_eq!(s.query(), "");
    }

    #[test]
    fn navigation_on_an_empty_list_is_inert() {
        let set = candidates();
        let mut s = session(&set);
        key(&mut s, KeyEvent::char('z'));
        for event in [
            KeyEvent::new(KeyCode::Up),
            KeyEvent::new(KeyCode::Down),
            KeyEvent::new(KeyCode::Home),
            KeyEvent::new(KeyCode::End),
            KeyEvent::new(KeyCode::PageDown),
        ] {
            key(&mut s, event);
            assert_eq!(s.selected(), 0);
        }
    }

    #[test]
    fn home_and_end_jump_to_the_extremes() {
        let set = candidates();
        let mut s = session(&set);
        key(&mut s, KeyEvent::new(KeyCode::End));
        assert_eq!(s.selected(), 2);
        key(&mut s, KeyEvent::new(KeyCode::Home));
        assert_eq!(s.selected(), 0);
    }

    fn numbered(n: usize) -> Candidates {
        (0..n).map(|i| format!("entry {i:02}")).collect()
    }

    #[test]
    fn page_keys_move_by_capacity_and_saturate() {
        let set = numbered(40);
        let mut s = Session::new(
            &set,
            TokenMatcher::new(),
            Layout::vertical(15, 1),
            SessionOptions::default(),
        )
        .unwrap();
        key(&mut s, KeyEvent::new(KeyCode::PageDown));
        assert_eq!(s.selected(), 15);
        key(&mut s, KeyEvent::new(KeyCode::PageDown));
        key(&mut s, KeyEvent::new(KeyCode::PageDown));
        assert_eq!(s.selected(), 39);
        key(&mut s, KeyEvent::new(KeyCode::PageUp));
        assert_eq!(s.selected(), 24);
        key(&mut s, KeyEvent::new(KeyCode::PageUp));
        key(&mut s, KeyEvent::new(KeyCode::PageUp));
        assert_eq!(s.selected(), 0);
    }

    #[test]
    fn ctrl_page_keys_move_by_rows_in_a_grid() {
        let set = numbered(40);
        let mut s = Session::new(
            &set,
            TokenMatcher::new(),
            Layout::vertical(5, 3),
            SessionOptions::default(),
        )
        .unwrap();
        key(&mut s, KeyEvent::ctrl(KeyCode::PageDown));
        assert_eq!(s.selected(), 5);
        key(&mut s, KeyEvent::new(KeyCode::PageDown));
        assert_eq!(s.selected(), 20);
        key(&mut s, KeyEvent::ctrl(KeyCode::PageUp));
        assert_eq!(s.selected(), 15);
    }

    // ── Paging view ─────────────────────────────────────────────────────

    #[test]
    fn page_offset_follows_the_selection_without_jitter() {
        let set = numbered(40);
        let mut s = Session::new(
            &set,
            TokenMatcher::new(),
            Layout::vertical(10, 1),
            SessionOptions::default(),
        )
        .unwrap();
        for expected in 1..10 {
            key(&mut s, KeyEvent::new(KeyCode::Down));
            assert_eq!(s.selected(), expected);
            assert_eq!(s.view().page_offset, 0);
        }
        key(&mut s, KeyEvent::new(KeyCode::Down));
        assert_eq!(s.view().page_offset, 10);
        key(&mut s, KeyEvent::new(KeyCode::Up));
        assert_eq!(s.view().page_offset, 0);
    }

    #[test]
    fn wrap_to_the_end_snaps_to_the_last_page() {
        let set = numbered(35);
        let mut s = Session::new(
            &set,
            TokenMatcher::new(),
            Layout::vertical(10, 1),
            SessionOptions::default(),
        )
        .unwrap();
        key(&mut s, KeyEvent::new(KeyCode::Up));
        assert_eq!(s.selected(), 34);
        let view = s.view();
        assert_eq!(view.page_offset, 30);
        assert_eq!(view.indicator.page, 3);
        let visible: Vec<usize> = view.visible().map(|c| c.index).collect();
        assert_eq!(visible, vec![30, 31, 32, 33, 34]);
    }

    #[test]
    fn view_reports_the_highlighted_original_index() {
        let set = candidates();
        let mut s = session(&set);
        key(&mut s, KeyEvent::char('f'));
        key(&mut s, KeyEvent::char('i'));
        key(&mut s, KeyEvent::new(KeyCode::Down));
        assert_eq!(s.view().highlighted(), Some(2));
        assert_eq!(s.view().match_count(), 2);
    }

    // ── Redraw flag ─────────────────────────────────────────────────────

    #[test]
    fn redraw_flag_sets_on_damage_and_clears_on_take() {
        let set = candidates();
        let mut s = session(&set);
        assert!(s.take_redraw());
        assert!(!s.take_redraw());
        s.step(InputEvent::Redraw).unwrap();
        assert!(s.take_redraw());
        key(&mut s, KeyEvent::new(KeyCode::Down));
        assert!(s.take_redraw());
    }

    // ── Empty candidate set ─────────────────────────────────────────────

    #[test]
    fn empty_candidate_set_only_offers_custom_input() {
        let set = Candidates::new();
        let mut s = session(&set);
        assert!(s.filtered().is_empty());
        key(&mut s, KeyEvent::new(KeyCode::Down));
        assert_eq!(s.selected(), 0);
        for c in "run me".chars() {
            key(&mut s, KeyEvent::char(c));
        }
        let step = key(&mut s, KeyEvent::new(KeyCode::Enter));
        let Step::Done(result) = step else {
            panic!("expected Done, got {step:?}");
        };
        assert_eq!(result.outcome, Outcome::CustomInput("run me".into()));
    }
}
