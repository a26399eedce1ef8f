//! Error handling, configuration and the outer surfaces of the lattice
//!
//! This module contains the collaborators around the core grid:
//! - Debug drawing through an injected line sink, and an image-backed sink
//! - World-space input sources and probe resolution
//! - Progress display and the command-line demo

/// Command-line demo and grid session management
pub mod cli;
/// Demo defaults and rendering constants
pub mod configuration;
/// Line sink capability and debug drawing operations
pub mod draw;
/// Error types and result alias
pub mod error;
/// Position sources and probe resolution
pub mod input;
/// Bitset of marked cells
pub mod mask;
/// Progress display for rendering passes
pub mod progress;
/// Image-backed line sink and PNG export
pub mod raster;
