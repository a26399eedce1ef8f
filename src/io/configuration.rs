//! Demo defaults and debug rendering constants

use crate::io::draw::Color;

// Lattice shown when no dimensions are given
/// Default number of rows
pub const DEFAULT_ROWS: i32 = 3;
/// Default number of columns
pub const DEFAULT_COLS: i32 = 3;
/// Default horizontal distance between cell centres
pub const DEFAULT_SPACING_X: f32 = 1.0;
/// Default vertical distance between cell centres
pub const DEFAULT_SPACING_Y: f32 = 1.0;

/// Half-extent of the cross marking each cell centre
pub const DEBUG_CROSS_SIZE: f32 = 0.1;

// Raster output settings
/// Pixels per world unit when rendering to an image
pub const DEFAULT_PIXELS_PER_UNIT: f32 = 64.0;
/// World-space margin around the grid extent in rendered images
pub const RENDER_MARGIN: f32 = 1.0;
/// Largest width or height accepted for a rendered image
pub const MAX_IMAGE_DIMENSION: u32 = 8192;
/// Background of rendered images
pub const BACKGROUND_COLOR: Color = Color::new(255, 255, 255, 255);

// Debug colors
/// Color of cell outlines
pub const CELL_OUTLINE_COLOR: Color = Color::BLUE;
/// Color of centre crosses and neighbor links
pub const LATTICE_COLOR: Color = Color::RED;
/// Color of outlines around probed cells
pub const PROBE_HIT_COLOR: Color = Color::GREEN;

// Pointer probing
/// Fixed seed for reproducible random probes
pub const DEFAULT_SEED: u64 = 42;
/// Number of random probe positions drawn by default
pub const DEFAULT_PROBE_COUNT: usize = 8;

/// Output path for the rendered debug image
pub const DEFAULT_OUTPUT: &str = "lattice_debug.png";

/// Largest row or column count accepted by the demo
pub const MAX_GRID_DIMENSION: i32 = 10_000;
