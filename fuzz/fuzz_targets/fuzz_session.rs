//! Fuzz whole sessions: arbitrary candidates, layout, and event streams.
//!
//! Checks the structural invariants after every step: filtered indices
//! stay in range, the selection stays clamped, and the page offset stays
//! aligned and covering the selection.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use sift_core::{Candidates, InputEvent, KeyCode, KeyEvent, Layout, SessionOptions};
use sift_engine::session::{Session, Step};
use sift_match::TokenMatcher;

#[derive(Debug, Arbitrary)]
enum Ev {
    Char(char),
    ShiftChar(char),
    CtrlChar(char),
    AltChar(char),
    Enter,
    ShiftEnter,
    Escape,
    Backspace,
    Delete,
    ShiftDelete,
    Tab,
    ShiftTab,
    Insert,
    Up,
    Down,
    Left,
    Right,
    Home,
    End,
    PageUp,
    PageDown,
    CtrlPageUp,
    CtrlPageDown,
    Paste(String),
    Cancel,
    Redraw,
}

impl Ev {
    fn into_event(self) -> InputEvent {
        match self {
            Self::Char(c) => InputEvent::Key(KeyEvent::char(c)),
            Self::ShiftChar(c) => InputEvent::Key(KeyEvent::shift(KeyCode::Char(c))),
            Self::CtrlChar(c) => InputEvent::Key(KeyEvent::ctrl(KeyCode::Char(c))),
            Self::AltChar(c) => InputEvent::Key(KeyEvent::alt(KeyCode::Char(c))),
            Self::Enter => InputEvent::Key(KeyEvent::new(KeyCode::Enter)),
            Self::ShiftEnter => InputEvent::Key(KeyEvent::shift(KeyCode::Enter)),
            Self::Escape => InputEvent::Key(KeyEvent::new(KeyCode::Escape)),
            Self::Backspace => InputEvent::Key(KeyEvent::new(KeyCode::Backspace)),
            Self::Delete => InputEvent::Key(KeyEvent::new(KeyCode::Delete)),
            Self::ShiftDelete => InputEvent::Key(KeyEvent::shift(KeyCode::Delete)),
            Self::Tab => InputEvent::Key(KeyEvent::new(KeyCode::Tab)),
            Self::ShiftTab => InputEvent::Key(KeyEvent::shift(KeyCode::Tab)),
            Self::Insert => InputEvent::Key(KeyEvent::new(KeyCode::Insert)),
            Self::Up => InputEvent::Key(KeyEvent::new(KeyCode::Up)),
            Self::Down => InputEvent::Key(KeyEvent::new(KeyCode::Down)),
            Self::Left => InputEvent::Key(KeyEvent::new(KeyCode::Left)),
            Self::Right => InputEvent::Key(KeyEvent::new(KeyCode::Right)),
            Self::Home => InputEvent::Key(KeyEvent::new(KeyCode::Home)),
            Self::End => InputEvent::Key(KeyEvent::new(KeyCode::End)),
            Self::PageUp => InputEvent::Key(KeyEvent::new(KeyCode::PageUp)),
            Self::PageDown => InputEvent::Key(KeyEvent::new(KeyCode::PageDown)),
            Self::CtrlPageUp => InputEvent::Key(KeyEvent::ctrl(KeyCode::PageUp)),
            Self::CtrlPageDown => InputEvent::Key(KeyEvent::ctrl(KeyCode::PageDown)),
            Self::Paste(text) => InputEvent::Paste(text),
            Self::Cancel => InputEvent::Cancel,
            Self::Redraw => InputEvent::Redraw,
        }
    }
}

#[derive(Debug, Arbitrary)]
struct Plan {
    candidates: Vec<String>,
    initial_query: String,
    initial_selected: Option<u8>,
    sort_by_distance: bool,
    auto_accept: bool,
    rows: u8,
    columns: u8,
    horizontal: bool,
    fixed_rows: bool,
    events: Vec<Ev>,
}

fn check(session: &Session<'_, TokenMatcher>, total: usize) {
    let view = session.view();
    for &index in view.filtered {
        assert!(index < total);
    }
    if view.filtered.is_empty() {
        assert_eq!(view.selected, 0);
    } else {
        assert!(view.selected < view.filtered.len());
    }
    let capacity = view.layout.capacity;
    assert!(capacity > 0);
    assert_eq!(view.page_offset % capacity, 0);
    assert!(view.page_offset <= view.selected);
    assert!(view.selected < view.page_offset + capacity);
}

fuzz_target!(|plan: Plan| {
    let mut items = plan.candidates;
    items.truncate(32);
    let candidates: Candidates = items.into();
    let total = candidates.len();

    let layout = Layout {
        rows: usize::from(plan.rows % 24),
        columns: usize::from(plan.columns % 8),
        horizontal: plan.horizontal,
        fixed_rows: plan.fixed_rows,
    };
    let options = SessionOptions {
        initial_query: plan.initial_query,
        initial_selected: plan.initial_selected.map(usize::from),
        sort_by_distance: plan.sort_by_distance,
        auto_accept: plan.auto_accept,
    };

    // Zero rows or columns must be rejected up front, never panic.
    let Ok(mut session) = Session::new(&candidates, TokenMatcher::new(), layout, options) else {
        assert!(layout.validate().is_err());
        return;
    };
    check(&session, total);

    let mut events = plan.events;
    events.truncate(256);
    for ev in events {
        match session.step(ev.into_event()).unwrap() {
            Step::Pending => {}
            Step::FetchSelection(_) => {
                // Answer the fetch the way a display server would.
                session
                    .step(InputEvent::Paste("from selection\nrest".into()))
                    .unwrap();
            }
            Step::Done(_) => break,
        }
        check(&session, total);
    }
});
