//! Lattice data structures and spatial math
//!
//! This module contains the core lattice functionality:
//! - Discrete coordinates
//! - Dense grid storage, lookup and Moore adjacency
//! - Conversions between lattice and world coordinates
//! - Cursor-based traversal

/// Discrete (row, col) coordinates
pub mod coordinate;
/// Row-major traversal cursor
pub mod cursor;
/// Dense grid storage, lookup and adjacency
pub mod grid;
/// Lattice to world-space coordinate transforms
pub mod transform;

pub use coordinate::Coordinate;
pub use cursor::{Cursor, CursorState};
pub use grid::{Cell, CellMut, Direction, Grid};
pub use glam::{Vec2, Vec3};
