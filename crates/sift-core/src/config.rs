#![forbid(unsafe_code)]

//! Session configuration: the visible grid and behavior flags.
//!
//! Validation is caller-side and fatal before a session exists; a session
//! never re-checks its layout. The grid a session actually uses is derived
//! once from the total candidate count via [`Layout::effective`], so a
//! short list does not pay for a trailing empty column.

/// Errors from configuration validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// The layout has no visible rows.
    ZeroRows,
    /// The layout has no visible columns.
    ZeroColumns,
    /// A list rotation was built with no candidate lists.
    EmptyRotation,
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ZeroRows => write!(f, "layout needs at least one visible row"),
            Self::ZeroColumns => write!(f, "layout needs at least one visible column"),
            Self::EmptyRotation => write!(f, "rotation needs at least one candidate list"),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Visible grid requested by the caller.
///
/// # Example
///
/// ```
/// use sift_core::Layout;
///
/// // A flexible grid keeps its columns and shrinks rows to fit.
/// let eff = Layout::vertical(8, 2).effective(5);
/// assert_eq!(eff.rows, 3);
/// assert_eq!(eff.capacity, 6);
///
/// // A fixed grid keeps its rows and drops a trailing empty column.
/// let fixed = Layout {
///     fixed_rows: true,
///     ..Layout::vertical(8, 2)
/// };
/// assert_eq!(fixed.effective(5).columns, 1);
/// assert_eq!(fixed.effective(5).capacity, 8);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Layout {
    /// Visible candidate rows per column.
    pub rows: usize,
    /// Visible columns.
    pub columns: usize,
    /// Lay candidates out in a single row instead of a column grid.
    pub horizontal: bool,
    /// Keep the requested grid even when fewer candidates exist.
    pub fixed_rows: bool,
}

impl Default for Layout {
    fn default() -> Self {
        Self {
            rows: 15,
            columns: 1,
            horizontal: false,
            fixed_rows: false,
        }
    }
}

impl Layout {
    /// Vertical grid with the given row and column counts.
    #[must_use]
    pub fn vertical(rows: usize, columns: usize) -> Self {
        Self {
            rows,
            columns,
            ..Self::default()
        }
    }

    /// Single-row layout with the given number of slots.
    #[must_use]
    pub fn horizontal(slots: usize) -> Self {
        Self {
            rows: 1,
            columns: slots,
            horizontal: true,
            fixed_rows: false,
        }
    }

    /// Reject layouts no session could paginate.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.rows == 0 {
            return Err(ConfigError::ZeroRows);
        }
        if self.columns == 0 {
            return Err(ConfigError::ZeroColumns);
        }
        Ok(())
    }

    /// Derive the grid for a session over `total` candidates.
    ///
    /// - horizontal: one row; slots shrink to `total` unless `fixed_rows`.
    /// - vertical with `fixed_rows`: the row count is kept and the column
    ///   count shrinks to `ceil(total / rows)` when the requested grid
    ///   would leave a trailing column empty.
    /// - vertical otherwise: the column count is kept and the row count
    ///   shrinks to `ceil(total / columns)`.
    ///
    /// Rows and columns never drop below one, so capacity is always
    /// positive. Expects a validated layout.
    #[must_use]
    pub fn effective(&self, total: usize) -> EffectiveLayout {
        let (rows, columns) = if self.horizontal {
            let columns = if self.fixed_rows {
                self.columns
            } else {
                self.columns.min(total.max(1))
            };
            (1, columns)
        } else if self.fixed_rows {
            let natural = total.div_ceil(self.rows).max(1);
            (self.rows, self.columns.min(natural))
        } else {
            let natural = total.div_ceil(self.columns).max(1);
            (self.rows.min(natural), self.columns)
        };
        EffectiveLayout {
            rows,
            columns,
            capacity: rows * columns,
        }
    }
}

/// Grid a session actually paginates with, from [`Layout::effective`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EffectiveLayout {
    pub rows: usize,
    pub columns: usize,
    /// Candidates visible at once: `rows * columns`.
    pub capacity: usize,
}

/// Behavior flags and initial state for one session.
///
/// # Example
///
/// ```
/// use sift_core::SessionOptions;
///
/// let opts = SessionOptions {
///     initial_query: "fire".into(),
///     sort_by_distance: true,
///     ..Default::default()
/// };
/// assert!(!opts.auto_accept);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SessionOptions {
    /// Text the query buffer starts with; the cursor starts after it.
    pub initial_query: String,
    /// Original index to highlight once it appears in a filtered list,
    /// used to keep the selection across a related prior session.
    pub initial_selected: Option<usize>,
    /// Rank matches ascending by edit distance to the query.
    pub sort_by_distance: bool,
    /// Resolve immediately when a refilter leaves exactly one candidate.
    pub auto_accept: bool,
}
