//! Stateful row-major traversal over a grid's cells

use std::iter::FusedIterator;

use crate::io::error::{GridError, Result};
use crate::spatial::coordinate::Coordinate;
use crate::spatial::grid::{Cell, Grid};

/// Position of a cursor within its traversal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorState {
    /// Not yet advanced; logically just before `(0, 0)`
    BeforeFirst,
    /// Positioned on a valid cell
    AtCell(Coordinate),
    /// Advanced past the last cell
    Exhausted,
}

impl CursorState {
    /// Human-readable state name used in error messages
    pub const fn name(self) -> &'static str {
        match self {
            Self::BeforeFirst => "before the first cell",
            Self::AtCell(_) => "at a cell",
            Self::Exhausted => "exhausted",
        }
    }
}

/// Explicit traversal cursor over a grid
///
/// A cursor starts before the first cell. Each [`Cursor::advance`] moves one
/// cell along the row, wrapping to the next row after the last column, until
/// the traversal runs out. The current cell can only be read while the cursor
/// is positioned on one.
///
/// Cursors only borrow the grid, so any number of them can traverse the same
/// grid independently.
#[derive(Debug)]
pub struct Cursor<'a, T> {
    grid: &'a Grid<T>,
    state: CursorState,
}

impl<T> Clone for Cursor<'_, T> {
    fn clone(&self) -> Self {
        Self {
            grid: self.grid,
            state: self.state,
        }
    }
}

impl<'a, T> Cursor<'a, T> {
    /// Create a cursor positioned before the first cell
    pub const fn new(grid: &'a Grid<T>) -> Self {
        Self {
            grid,
            state: CursorState::BeforeFirst,
        }
    }

    /// Current traversal state
    pub const fn state(&self) -> CursorState {
        self.state
    }

    /// Coordinate of the current cell, if positioned on one
    pub const fn coordinate(&self) -> Option<Coordinate> {
        match self.state {
            CursorState::AtCell(coordinate) => Some(coordinate),
            CursorState::BeforeFirst | CursorState::Exhausted => None,
        }
    }

    /// Move to the next cell in row-major order
    ///
    /// Returns `false` once every cell has been visited; further calls keep
    /// returning `false`.
    pub fn advance(&mut self) -> bool {
        let rows = self.grid.row_count().max(0);
        let cols = self.grid.col_count().max(0);

        let (mut row, mut col) = match self.state {
            CursorState::BeforeFirst => (0, -1),
            CursorState::AtCell(coordinate) => (coordinate.row, coordinate.col),
            CursorState::Exhausted => return false,
        };

        col += 1;
        if col >= cols {
            col = 0;
            row += 1;
            if row >= rows {
                self.state = CursorState::Exhausted;
                return false;
            }
        }

        self.state = CursorState::AtCell(Coordinate::new(row, col));
        true
    }

    /// Read the cell under the cursor
    ///
    /// # Errors
    ///
    /// Returns `GridError::InvalidCursorState` before the first advance and
    /// after the traversal is exhausted.
    pub fn current(&self) -> Result<Cell<'a, T>> {
        match self.state {
            CursorState::AtCell(coordinate) => self.grid.get_cell(coordinate),
            state => Err(GridError::InvalidCursorState { state: state.name() }),
        }
    }

    /// Return to the before-first state
    pub fn reset(&mut self) {
        self.state = CursorState::BeforeFirst;
    }

    fn remaining(&self) -> usize {
        let total = self.grid.len();
        match self.state {
            CursorState::BeforeFirst => total,
            CursorState::Exhausted => 0,
            CursorState::AtCell(coordinate) => {
                let (_, cols) = self.grid.dimensions();
                coordinate
                    .to_index()
                    .map_or(0, |[row, col]| total.saturating_sub(row * cols + col + 1))
            }
        }
    }
}

impl<'a, T> Iterator for Cursor<'a, T> {
    type Item = Cell<'a, T>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.advance() {
            self.current().ok()
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.remaining();
        (remaining, Some(remaining))
    }
}

impl<T> ExactSizeIterator for Cursor<'_, T> {}

impl<T> FusedIterator for Cursor<'_, T> {}
