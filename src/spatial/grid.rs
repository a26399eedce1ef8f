//! Dense lattice storage with per-cell payloads and Moore adjacency
//!
//! Payloads live in a single row-major `Array2`, so a cell has no allocation
//! of its own: it is addressed by its coordinate and handed out as a borrowed
//! view pairing that coordinate with the payload.
//!
//! A grid built with a non-positive dimension is *empty*. It owns no cells and
//! reports `-1` for both its row and column count, which distinguishes an
//! uninitialized grid from a sized one. Grids are never resized in place;
//! callers replace the whole grid when the dimensions change.

use glam::{Vec2, Vec3};
use ndarray::Array2;

use crate::io::error::{GridError, Result};
use crate::spatial::coordinate::Coordinate;
use crate::spatial::cursor::Cursor;

/// Row count and column count reported by an empty grid
pub const EMPTY_DIMENSION: i32 = -1;

/// One of the eight Moore-neighborhood directions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Previous row, previous column
    UpLeft,
    /// Previous row
    Up,
    /// Previous row, next column
    UpRight,
    /// Next column
    Right,
    /// Next row, next column
    DownRight,
    /// Next row
    Down,
    /// Next row, previous column
    DownLeft,
    /// Previous column
    Left,
}

impl Direction {
    /// Clockwise compass order starting from the upper-left diagonal
    pub const COMPASS: [Self; 8] = [
        Self::UpLeft,
        Self::Up,
        Self::UpRight,
        Self::Right,
        Self::DownRight,
        Self::Down,
        Self::DownLeft,
        Self::Left,
    ];

    /// Row and column delta for a single step in this direction
    pub const fn delta(self) -> (i32, i32) {
        match self {
            Self::UpLeft => (-1, -1),
            Self::Up => (-1, 0),
            Self::UpRight => (-1, 1),
            Self::Right => (0, 1),
            Self::DownRight => (1, 1),
            Self::Down => (1, 0),
            Self::DownLeft => (1, -1),
            Self::Left => (0, -1),
        }
    }

    /// True for the four diagonal directions
    pub const fn is_diagonal(self) -> bool {
        let (d_row, d_col) = self.delta();
        d_row != 0 && d_col != 0
    }

    /// Step from a coordinate in this direction
    pub const fn step(self, from: Coordinate) -> Coordinate {
        let (d_row, d_col) = self.delta();
        from.offset(d_row, d_col)
    }
}

/// Read-only view of a single cell
#[derive(Debug, PartialEq)]
pub struct Cell<'a, T> {
    coordinate: Coordinate,
    data: &'a T,
}

impl<T> Clone for Cell<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Cell<'_, T> {}

impl<'a, T> Cell<'a, T> {
    /// Coordinate fixed at grid construction
    pub const fn coordinate(&self) -> Coordinate {
        self.coordinate
    }

    /// Payload stored in this cell
    pub const fn data(&self) -> &'a T {
        self.data
    }
}

/// Mutable view of a single cell
///
/// The coordinate stays fixed; only the payload can change.
#[derive(Debug)]
pub struct CellMut<'a, T> {
    coordinate: Coordinate,
    data: &'a mut T,
}

impl<T> CellMut<'_, T> {
    /// Coordinate fixed at grid construction
    pub const fn coordinate(&self) -> Coordinate {
        self.coordinate
    }

    /// Payload stored in this cell
    pub const fn data(&self) -> &T {
        self.data
    }

    /// Mutable access to the payload
    pub fn data_mut(&mut self) -> &mut T {
        self.data
    }

    /// Replace the payload, returning the previous value
    pub fn set(&mut self, value: T) -> T {
        std::mem::replace(self.data, value)
    }
}

/// Dense two-dimensional lattice of cells with world-space placement
///
/// Cell `(row, col)` sits at `origin + (spacing.x * col, -spacing.y * row)`:
/// rows run downward and columns run rightward from the top-left origin.
/// Spacing and origin start at zero, which collapses every cell onto the
/// origin until a spacing is configured.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid<T> {
    cells: Array2<T>,
    cell_spacing: Vec2,
    origin: Vec3,
}

// Both dimensions must be positive for a grid to own any cells
fn checked_shape(rows: i32, cols: i32) -> (usize, usize) {
    match (usize::try_from(rows), usize::try_from(cols)) {
        (Ok(rows), Ok(cols)) if rows > 0 && cols > 0 => (rows, cols),
        _ => (0, 0),
    }
}

impl<T> Grid<T> {
    /// Create a grid with every payload set to `T::default()`
    ///
    /// Non-positive dimensions produce an empty grid.
    pub fn new(rows: i32, cols: i32) -> Self
    where
        T: Default,
    {
        Self::from_cells(Array2::default(checked_shape(rows, cols)))
    }

    /// Create a grid with every payload set to a clone of `value`
    ///
    /// Non-positive dimensions produce an empty grid.
    pub fn with_default(rows: i32, cols: i32, value: T) -> Self
    where
        T: Clone,
    {
        Self::from_cells(Array2::from_elem(checked_shape(rows, cols), value))
    }

    /// Create a grid whose payloads are computed from their coordinates
    ///
    /// Non-positive dimensions produce an empty grid and `f` is never called.
    pub fn from_fn<F>(rows: i32, cols: i32, mut f: F) -> Self
    where
        F: FnMut(Coordinate) -> T,
    {
        let cells = Array2::from_shape_fn(checked_shape(rows, cols), |(row, col)| {
            f(Coordinate::new(row as i32, col as i32))
        });
        Self::from_cells(cells)
    }

    fn from_cells(cells: Array2<T>) -> Self {
        Self {
            cells,
            cell_spacing: Vec2::ZERO,
            origin: Vec3::ZERO,
        }
    }

    /// Set the world-space distance between adjacent cell centres
    #[must_use]
    pub fn with_cell_spacing(mut self, spacing: Vec2) -> Self {
        self.cell_spacing = spacing;
        self
    }

    /// Set the world-space position of cell `(0, 0)`
    #[must_use]
    pub fn with_origin(mut self, origin: Vec3) -> Self {
        self.origin = origin;
        self
    }

    /// World-space distance between adjacent cell centres
    pub const fn cell_spacing(&self) -> Vec2 {
        self.cell_spacing
    }

    /// Change the spacing between cell centres
    pub fn set_cell_spacing(&mut self, spacing: Vec2) {
        self.cell_spacing = spacing;
    }

    /// World-space position of cell `(0, 0)`
    pub const fn origin(&self) -> Vec3 {
        self.origin
    }

    /// Move the grid in world space
    pub fn set_origin(&mut self, origin: Vec3) {
        self.origin = origin;
    }

    /// True when the grid was built with a non-positive dimension
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Number of cells owned by the grid
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Number of rows, or `-1` for an empty grid
    pub fn row_count(&self) -> i32 {
        if self.is_empty() {
            EMPTY_DIMENSION
        } else {
            self.cells.nrows() as i32
        }
    }

    /// Number of columns, or `-1` for an empty grid
    pub fn col_count(&self) -> i32 {
        if self.is_empty() {
            EMPTY_DIMENSION
        } else {
            self.cells.ncols() as i32
        }
    }

    /// Storage shape as `(rows, cols)`; `(0, 0)` for an empty grid
    pub fn dimensions(&self) -> (usize, usize) {
        self.cells.dim()
    }

    /// Check whether a coordinate addresses a cell of this grid
    pub fn is_valid_index(&self, coordinate: Coordinate) -> bool {
        coordinate
            .to_index()
            .is_some_and(|[row, col]| row < self.cells.nrows() && col < self.cells.ncols())
    }

    /// Look up a cell
    ///
    /// # Errors
    ///
    /// Returns `GridError::OutOfRange` if the coordinate is not valid for this
    /// grid. Callers that cannot guarantee validity should check
    /// [`Grid::is_valid_index`] first.
    pub fn get_cell(&self, coordinate: Coordinate) -> Result<Cell<'_, T>> {
        let data = coordinate
            .to_index()
            .and_then(|index| self.cells.get(index))
            .ok_or_else(|| self.out_of_range(coordinate))?;

        Ok(Cell { coordinate, data })
    }

    /// Look up a cell for modification
    ///
    /// # Errors
    ///
    /// Returns `GridError::OutOfRange` if the coordinate is not valid for this
    /// grid.
    pub fn get_cell_mut(&mut self, coordinate: Coordinate) -> Result<CellMut<'_, T>> {
        let (rows, cols) = (self.row_count(), self.col_count());
        let data = coordinate
            .to_index()
            .and_then(|index| self.cells.get_mut(index))
            .ok_or(GridError::OutOfRange {
                coordinate,
                rows,
                cols,
            })?;

        Ok(CellMut { coordinate, data })
    }

    /// Payload at a coordinate, if valid
    pub fn get(&self, coordinate: Coordinate) -> Option<&T> {
        coordinate.to_index().and_then(|index| self.cells.get(index))
    }

    /// Mutable payload at a coordinate, if valid
    pub fn get_mut(&mut self, coordinate: Coordinate) -> Option<&mut T> {
        coordinate
            .to_index()
            .and_then(|index| self.cells.get_mut(index))
    }

    /// Overwrite every payload with a clone of `value`
    pub fn fill(&mut self, value: T)
    where
        T: Clone,
    {
        self.cells.fill(value);
    }

    fn out_of_range(&self, coordinate: Coordinate) -> GridError {
        GridError::OutOfRange {
            coordinate,
            rows: self.row_count(),
            cols: self.col_count(),
        }
    }

    /// In-bounds Moore neighbors in compass order
    ///
    /// The order is up-left, up, up-right, right, down-right, down, down-left,
    /// left, skipping any neighbor outside the grid. A diagonal is only
    /// present when both of the orthogonal edges it touches are inside the
    /// grid, so corner cells have three neighbors and edge cells five.
    pub fn neighbors(&self, coordinate: Coordinate) -> Vec<Coordinate> {
        Direction::COMPASS
            .iter()
            .map(|direction| direction.step(coordinate))
            .filter(|&neighbor| self.is_valid_index(neighbor))
            .collect()
    }

    /// In-bounds Moore neighbors in row-major order
    pub fn neighbors_sorted(&self, coordinate: Coordinate) -> Vec<Coordinate> {
        let mut neighbors = self.neighbors(coordinate);
        neighbors.sort_unstable();
        neighbors
    }

    /// Start a fresh row-major traversal
    pub const fn cursor(&self) -> Cursor<'_, T> {
        Cursor::new(self)
    }

    /// Iterate over all cells in row-major order
    pub const fn iter(&self) -> Cursor<'_, T> {
        self.cursor()
    }

    /// Iterate mutably over all cells in row-major order
    pub fn iter_mut(&mut self) -> impl Iterator<Item = CellMut<'_, T>> {
        self.cells
            .indexed_iter_mut()
            .map(|((row, col), data)| CellMut {
                coordinate: Coordinate::new(row as i32, col as i32),
                data,
            })
    }
}

impl<'a, T> IntoIterator for &'a Grid<T> {
    type Item = Cell<'a, T>;
    type IntoIter = Cursor<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.cursor()
    }
}
