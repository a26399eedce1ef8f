//! Row-major bitset of marked cells

use bitvec::bitvec;
use bitvec::vec::BitVec;

use crate::spatial::{Coordinate, Grid};

/// Set of cells of one grid, stored one bit per cell
///
/// Sized for a specific grid shape; coordinates outside that shape are never
/// members.
#[derive(Clone, Debug)]
pub struct HitMask {
    bits: BitVec,
    rows: usize,
    cols: usize,
}

impl HitMask {
    /// Create an empty mask matching a grid's shape
    pub fn for_grid<T>(grid: &Grid<T>) -> Self {
        let (rows, cols) = grid.dimensions();
        Self {
            bits: bitvec![0; rows * cols],
            rows,
            cols,
        }
    }

    fn offset(&self, coordinate: Coordinate) -> Option<usize> {
        let [row, col] = coordinate.to_index()?;
        (row < self.rows && col < self.cols).then(|| row * self.cols + col)
    }

    /// Mark a cell, returning `false` if the coordinate is outside the shape
    pub fn mark(&mut self, coordinate: Coordinate) -> bool {
        match self.offset(coordinate) {
            Some(offset) => {
                self.bits.set(offset, true);
                true
            }
            None => false,
        }
    }

    /// Test whether a cell is marked
    pub fn contains(&self, coordinate: Coordinate) -> bool {
        self.offset(coordinate)
            .is_some_and(|offset| self.bits.get(offset).as_deref() == Some(&true))
    }

    /// Number of marked cells
    pub fn count(&self) -> usize {
        self.bits.count_ones()
    }

    /// Test if no cells are marked
    pub fn is_empty(&self) -> bool {
        self.bits.not_any()
    }

    /// Marked coordinates in row-major order
    pub fn coordinates(&self) -> Vec<Coordinate> {
        let cols = self.cols.max(1);
        self.bits
            .iter_ones()
            .map(|offset| Coordinate::new((offset / cols) as i32, (offset % cols) as i32))
            .collect()
    }
}
