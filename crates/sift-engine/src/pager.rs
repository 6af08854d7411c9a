#![forbid(unsafe_code)]

//! Pagination over the filtered list.
//!
//! The page offset is view state, not selection state. The anti-jitter
//! rule is the whole point: while the selection stays inside the current
//! window the offset must not move, otherwise the list visibly jumps on
//! every redraw. Only when the selection leaves the window does the
//! offset snap to the page containing it.
//!
//! # Invariants
//!
//! | Invariant | Meaning |
//! |-----------|---------|
//! | alignment | the offset is always a multiple of capacity |
//! | coverage | `offset <= selected < offset + capacity` after recompute |
//! | stability | moves within the window leave the offset untouched |

/// New page offset for `selected`, given the previous offset.
///
/// `capacity` is the visible window size and must be positive; the
/// previous offset is expected to be capacity-aligned, which every offset
/// returned here is.
#[must_use]
pub fn page_offset(previous: usize, selected: usize, capacity: usize) -> usize {
    debug_assert!(capacity > 0);
    if selected >= previous && selected < previous + capacity {
        previous
    } else {
        (selected / capacity) * capacity
    }
}

/// Where the current page sits in the filtered list, for callers that
/// draw scroll arrows or an "m/n" label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageIndicator {
    /// Zero-based page holding the selection.
    pub page: usize,
    /// Total pages; at least one, even for an empty list.
    pub pages: usize,
    /// Selection's slot within its page.
    pub slot: usize,
    /// A page exists before this one.
    pub has_prev: bool,
    /// A page exists after this one.
    pub has_next: bool,
    /// The selection sits on the first slot, so one step up scrolls.
    pub prev_hot: bool,
    /// The selection sits on the last slot, so one step down scrolls.
    pub next_hot: bool,
}

impl PageIndicator {
    /// Indicator for a filtered list of `len` entries.
    #[must_use]
    pub fn new(len: usize, selected: usize, capacity: usize) -> Self {
        debug_assert!(capacity > 0);
        let pages = len.div_ceil(capacity).max(1);
        let page = selected / capacity;
        let slot = selected % capacity;
        let has_prev = page > 0;
        let has_next = page + 1 < pages;
        Self {
            page,
            pages,
            slot,
            has_prev,
            has_next,
            prev_hot: has_prev && slot == 0,
            next_hot: has_next && slot == capacity - 1,
        }
    }
}
