#![forbid(unsafe_code)]

//! Edit-distance scoring for ranked filtering.
//!
//! Classic Levenshtein distance with unit insert, delete, and substitute
//! costs, computed over an explicit iterative table. The table and both
//! character scratch buffers live in [`DistanceTable`] and are reused
//! across calls, so scoring a whole refilter pass allocates to a
//! high-water mark instead of once per candidate.
//!
//! Callers are expected to pass fold keys (see
//! [`fold_key`](crate::token::fold_key)); the ranker itself is
//! case-sensitive and compares scalar values.

/// Reusable Levenshtein scratch space.
///
/// # Example
///
/// ```
/// use sift_match::rank::DistanceTable;
///
/// let mut table = DistanceTable::new();
/// assert_eq!(table.distance("fx", "files"), 4);
/// assert_eq!(table.distance("fx", "firefox"), 5);
/// ```
#[derive(Debug, Default)]
pub struct DistanceTable {
    cells: Vec<usize>,
    a_chars: Vec<char>,
    b_chars: Vec<char>,
}

impl DistanceTable {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Edit distance between `a` and `b`, in scalar values.
    #[must_use]
    pub fn distance(&mut self, a: &str, b: &str) -> usize {
        self.a_chars.clear();
        self.a_chars.extend(a.chars());
        self.b_chars.clear();
        self.b_chars.extend(b.chars());
        let m = self.a_chars.len();
        let n = self.b_chars.len();
        if m == 0 {
            return n;
        }
        if n == 0 {
            return m;
        }

        // Full (m + 1) x (n + 1) table in one flat row-major buffer.
        let cols = n + 1;
        self.cells.clear();
        self.cells.resize((m + 1) * cols, 0);
        for j in 0..=n {
            self.cells[j] = j;
        }
        for i in 1..=m {
            self.cells[i * cols] = i;
            for j in 1..=n {
                let cost = usize::from(self.a_chars[i - 1] != self.b_chars[j - 1]);
                let delete = self.cells[(i - 1) * cols + j] + 1;
                let insert = self.cells[i * cols + j - 1] + 1;
                let substitute = self.cells[(i - 1) * cols + j - 1] + cost;
                self.cells[i * cols + j] = delete.min(insert).min(substitute);
            }
        }
        self.cells[m * cols + n]
    }
}
