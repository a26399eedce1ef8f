//! Tests for error types including source chaining and message formatting

#[cfg(test)]
mod tests {
    use gridlattice::io::error::invalid_parameter;
    use gridlattice::{Coordinate, GridError};
    use std::error::Error;

    // Tests error source chaining works correctly
    #[test]
    fn test_error_source_chain() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let error = GridError::FileSystem {
            path: "/tmp/lattice.png".into(),
            operation: "create directory",
            source: io_error,
        };

        assert!(error.source().is_some());
        assert!(error.to_string().contains("create directory"));
    }

    // Tests OutOfRange formatting includes coordinate and bounds
    #[test]
    fn test_out_of_range_message() {
        let error = GridError::OutOfRange {
            coordinate: Coordinate::new(5, -1),
            rows: 3,
            cols: 4,
        };

        let message = error.to_string();
        assert!(message.contains("5,-1"));
        assert!(message.contains("3x4"));
        assert!(error.source().is_none());
    }

    #[test]
    fn test_invalid_cursor_state_message() {
        let error = GridError::InvalidCursorState {
            state: "before the first cell",
        };

        assert_eq!(
            error.to_string(),
            "Cursor has no current cell while before the first cell"
        );
    }

    // Tests InvalidParameter helper captures all fields
    #[test]
    fn test_invalid_parameter_helper() {
        let error = invalid_parameter("rows", &20_000, &"must not exceed 10000");

        let message = error.to_string();
        assert!(message.contains("rows"));
        assert!(message.contains("20000"));
        assert!(message.contains("must not exceed 10000"));
    }
}
