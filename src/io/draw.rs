//! Debug line drawing through an injected sink
//!
//! The grid issues line requests but owns no rendering state. Anything that
//! can accept a pair of world-space points and a color can act as the sink:
//! an image rasterizer, an engine's debug renderer, or a closure collecting
//! lines in a test.

use crate::io::configuration::DEBUG_CROSS_SIZE;
use crate::spatial::{Coordinate, Grid, Vec3};

/// RGBA color of a debug line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color(pub [u8; 4]);

impl Color {
    /// Opaque red
    pub const RED: Self = Self::new(255, 0, 0, 255);
    /// Opaque green
    pub const GREEN: Self = Self::new(0, 255, 0, 255);
    /// Opaque blue
    pub const BLUE: Self = Self::new(0, 0, 255, 255);
    /// Opaque black
    pub const BLACK: Self = Self::new(0, 0, 0, 255);
    /// Opaque white
    pub const WHITE: Self = Self::new(255, 255, 255, 255);

    /// Create a color from its channels
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self([r, g, b, a])
    }
}

/// Destination for debug line segments
pub trait LineSink {
    /// Draw a segment between two world-space points
    fn draw_line(&mut self, from: Vec3, to: Vec3, color: Color);
}

impl<F> LineSink for F
where
    F: FnMut(Vec3, Vec3, Color),
{
    fn draw_line(&mut self, from: Vec3, to: Vec3, color: Color) {
        self(from, to, color);
    }
}

impl<T> Grid<T> {
    /// Outline a single cell, clockwise from its top-left corner
    pub fn draw_debug_cell<S>(&self, coordinate: Coordinate, sink: &mut S, color: Color)
    where
        S: LineSink + ?Sized,
    {
        let [top_left, top_right, bottom_right, bottom_left] =
            self.cell_world_corners(coordinate);

        sink.draw_line(top_left, top_right, color);
        sink.draw_line(top_right, bottom_right, color);
        sink.draw_line(bottom_right, bottom_left, color);
        sink.draw_line(bottom_left, top_left, color);
    }

    /// Outline every cell
    pub fn draw_debug_cells<S>(&self, sink: &mut S, color: Color)
    where
        S: LineSink + ?Sized,
    {
        for cell in self {
            self.draw_debug_cell(cell.coordinate(), sink, color);
        }
    }

    /// Draw the lattice graph: a cross on each cell centre and one link per
    /// pair of adjacent cells
    ///
    /// Each link is drawn from the cell that comes first in row-major order,
    /// so every adjacency appears exactly once.
    pub fn draw_debug_grid<S>(&self, sink: &mut S, color: Color)
    where
        S: LineSink + ?Sized,
    {
        let cross = DEBUG_CROSS_SIZE;

        for cell in self {
            let coordinate = cell.coordinate();
            let center = self.world_position(coordinate);

            sink.draw_line(
                center + Vec3::new(-cross, -cross, 0.0),
                center + Vec3::new(cross, cross, 0.0),
                color,
            );
            sink.draw_line(
                center + Vec3::new(-cross, cross, 0.0),
                center + Vec3::new(cross, -cross, 0.0),
                color,
            );

            for neighbor in self.neighbors(coordinate) {
                if neighbor > coordinate {
                    sink.draw_line(center, self.world_position(neighbor), color);
                }
            }
        }
    }
}
