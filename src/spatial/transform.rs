//! Conversions between lattice coordinates and world-space positions

use glam::Vec3;

use crate::spatial::coordinate::Coordinate;
use crate::spatial::grid::Grid;

// Nearest step count along one axis, ties to even. A zero step collapses the
// axis onto index 0; out-of-range values saturate and NaN maps to 0.
fn nearest_index(distance: f32, step: f32) -> i32 {
    if step == 0.0 {
        0
    } else {
        (distance / step).round_ties_even() as i32
    }
}

impl<T> Grid<T> {
    /// World-space centre of a cell
    ///
    /// Columns advance along `+x` and rows along `-y`; `z` is taken from the
    /// origin. A zero spacing is a valid unconfigured mode in which every
    /// coordinate maps onto the origin.
    pub fn world_position(&self, coordinate: Coordinate) -> Vec3 {
        let spacing = self.cell_spacing();
        let origin = self.origin();

        if spacing.length() > 0.0 {
            Vec3::new(
                spacing.x.mul_add(coordinate.col as f32, origin.x),
                (-spacing.y).mul_add(coordinate.row as f32, origin.y),
                origin.z,
            )
        } else {
            origin
        }
    }

    /// Nearest cell centre to a world-space position
    ///
    /// This is an approximate inverse of [`Grid::world_position`]. Positions
    /// outside the grid produce coordinates outside the grid, so the result
    /// should be checked with [`Grid::is_valid_index`] before use. With a
    /// zero spacing every position resolves to `(0, 0)`, and a zero spacing
    /// component pins that axis to index 0.
    pub fn coordinate_from_world_position(&self, position: Vec3) -> Coordinate {
        let spacing = self.cell_spacing();
        let offset = position - self.origin();

        Coordinate::new(
            nearest_index(-offset.y, spacing.y),
            nearest_index(offset.x, spacing.x),
        )
    }

    /// Corners of the rectangle centred on a cell
    ///
    /// Ordered top-left, top-right, bottom-right, bottom-left.
    pub fn cell_world_corners(&self, coordinate: Coordinate) -> [Vec3; 4] {
        let center = self.world_position(coordinate);
        let half = self.cell_spacing() * 0.5;

        [
            center + Vec3::new(-half.x, half.y, 0.0),
            center + Vec3::new(half.x, half.y, 0.0),
            center + Vec3::new(half.x, -half.y, 0.0),
            center + Vec3::new(-half.x, -half.y, 0.0),
        ]
    }

    /// Far corner of the grid extent
    ///
    /// Computed from the reported row and column counts, so an empty grid
    /// yields the origin shifted by one spacing up and to the left.
    pub fn bottom_right(&self) -> Vec3 {
        let spacing = self.cell_spacing();
        self.origin()
            + Vec3::new(
                spacing.x * self.col_count() as f32,
                -spacing.y * self.row_count() as f32,
                0.0,
            )
    }

    /// Whether a position lies within the rectangle from the origin to
    /// [`Grid::bottom_right`], edges included
    pub fn is_world_position_in_grid(&self, position: Vec3) -> bool {
        let top_left = self.origin();
        let bottom_right = self.bottom_right();

        position.x >= top_left.x
            && position.x <= bottom_right.x
            && position.y <= top_left.y
            && position.y >= bottom_right.y
    }

    /// Whether a position lies within one cell-sized rectangle centred on
    /// [`Grid::bottom_right`], edges included
    ///
    /// The test is not tied to any particular cell coordinate; it always uses
    /// the bottom-right anchor.
    pub fn is_world_position_in_cell(&self, position: Vec3) -> bool {
        let anchor = self.bottom_right();
        let half = self.cell_spacing() * 0.5;
        let cell_top_left = anchor + Vec3::new(-half.x, half.y, 0.0);
        let cell_bottom_right = anchor + Vec3::new(half.x, -half.y, 0.0);

        position.x >= cell_top_left.x
            && position.x <= cell_bottom_right.x
            && position.y <= cell_top_left.y
            && position.y >= cell_bottom_right.y
    }
}
