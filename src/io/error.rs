//! Error types for lattice lookups, traversal and debug rendering

use crate::spatial::Coordinate;
use std::fmt;
use std::path::PathBuf;

/// Main error type for all lattice operations
#[derive(Debug)]
pub enum GridError {
    /// Coordinate lookup outside the grid's current bounds
    ///
    /// Lookups never clamp: an invalid coordinate is always reported back to
    /// the caller. Empty grids report `-1` for both dimensions.
    OutOfRange {
        /// The rejected coordinate
        coordinate: Coordinate,
        /// Row count of the grid at lookup time
        rows: i32,
        /// Column count of the grid at lookup time
        cols: i32,
    },

    /// Cursor read while not positioned on a cell
    InvalidCursorState {
        /// Name of the state the cursor was in
        state: &'static str,
    },

    /// Parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Failed to encode or save a rendered image
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfRange {
                coordinate,
                rows,
                cols,
            } => {
                write!(
                    f,
                    "Coordinate ({coordinate}) is out of range for a {rows}x{cols} grid"
                )
            }
            Self::InvalidCursorState { state } => {
                write!(f, "Cursor has no current cell while {state}")
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export image to '{}': {source}",
                    path.display()
                )
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for GridError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for lattice results
pub type Result<T> = std::result::Result<T, GridError>;

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> GridError {
    GridError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}
