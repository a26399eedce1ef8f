//! Dense two-dimensional lattice for spatial simulations and games
//!
//! A [`Grid`] stores one payload per cell, maps between discrete `(row, col)`
//! coordinates and continuous world positions, enumerates Moore neighborhoods
//! and traverses its cells in a fixed row-major order.

#![forbid(unsafe_code)]

/// Debug drawing, input sources, errors and the command-line demo
pub mod io;
/// Lattice data structures, coordinate transforms and traversal
pub mod spatial;

pub use io::error::{GridError, Result};
pub use spatial::{Cell, CellMut, Coordinate, Cursor, CursorState, Direction, Grid, Vec2, Vec3};
