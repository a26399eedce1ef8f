//! Discrete lattice coordinates

use std::fmt;

/// Row and column identifying a cell
///
/// Coordinates carry no intrinsic validity: whether a coordinate addresses a
/// cell depends on the grid it is used with. Fields are signed because the
/// world-to-lattice transform can land outside a grid, including above or to
/// the left of its origin.
///
/// Ordering is row-major, matching grid traversal order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Coordinate {
    /// Row index, increasing downward in world space
    pub row: i32,
    /// Column index, increasing rightward in world space
    pub col: i32,
}

impl Coordinate {
    /// The first cell of any non-empty grid
    pub const ZERO: Self = Self { row: 0, col: 0 };

    /// Create a coordinate from a row and column
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Offset this coordinate by a row and column delta
    ///
    /// Saturates at the `i32` limits.
    #[must_use]
    pub const fn offset(self, d_row: i32, d_col: i32) -> Self {
        Self {
            row: self.row.saturating_add(d_row),
            col: self.col.saturating_add(d_col),
        }
    }

    /// Convert to unsigned array indices, if both components are non-negative
    pub fn to_index(self) -> Option<[usize; 2]> {
        let row = usize::try_from(self.row).ok()?;
        let col = usize::try_from(self.col).ok()?;
        Some([row, col])
    }
}

impl From<(i32, i32)> for Coordinate {
    fn from((row, col): (i32, i32)) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.row, self.col)
    }
}
