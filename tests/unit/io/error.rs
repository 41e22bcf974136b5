//! Tests for error types including source chaining and message formatting

#[cfg(test)]
mod tests {
    use arraygrid::GridError;
    use arraygrid::io::error::{WithLine, file_system_error, script_error};
    use std::error::Error;

    // Tests error source chaining works correctly
    // Verified by breaking source chain
    #[test]
    fn test_error_source_chain() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let error = file_system_error("/tmp/board.grid", "read", io_error);

        assert!(error.source().is_some());
        assert!(error.to_string().contains("/tmp/board.grid"));
        assert!(error.to_string().contains("read"));
    }

    // Tests grid errors have no underlying source
    // Verified by returning self as source
    #[test]
    fn test_grid_errors_have_no_source() {
        let error = GridError::InvalidDimension {
            width: 0,
            height: 3,
        };
        assert!(error.source().is_none());
    }

    // Tests OutOfBounds formatting includes the coordinate and grid size
    // Verified by omitting grid size from message
    #[test]
    fn test_out_of_bounds_message() {
        let error = GridError::OutOfBounds {
            x: 4,
            y: 1,
            width: 4,
            height: 2,
        };

        let message = error.to_string();
        assert!(message.contains("(4, 1)"));
        assert!(message.contains("4x2"));
    }

    // Tests DataLoss formatting names the endangered cell and target size
    // Verified by omitting coordinates from message
    #[test]
    fn test_data_loss_message() {
        let error = GridError::DataLoss {
            x: 2,
            y: 2,
            new_width: 2,
            new_height: 2,
        };

        let message = error.to_string();
        assert!(message.contains("(2, 2)"));
        assert!(message.contains("2x2"));
    }

    // Tests InvalidDimension formatting includes both values
    // Verified by printing only width
    #[test]
    fn test_invalid_dimension_message() {
        let error = GridError::InvalidDimension {
            width: -1,
            height: 5,
        };
        assert!(error.to_string().contains("-1x5"));
    }

    // Tests with_line tags script errors but leaves grid errors alone
    // Verified by applying line numbers to every variant
    #[test]
    fn test_with_line_only_tags_script_errors() {
        let script: Result<(), GridError> = Err(script_error(&"unknown command"));
        match script.with_line(12) {
            Err(GridError::Script { line, reason }) => {
                assert_eq!(line, 12);
                assert_eq!(reason, "unknown command");
            }
            other => unreachable!("Expected Script error, got {other:?}"),
        }

        let no_grid: Result<(), GridError> = Err(GridError::NoGrid { line: 0 });
        assert!(matches!(no_grid.with_line(3), Err(GridError::NoGrid { line: 3 })));

        let bounds: Result<(), GridError> = Err(GridError::OutOfBounds {
            x: 9,
            y: 9,
            width: 1,
            height: 1,
        });
        assert!(matches!(
            bounds.with_line(5),
            Err(GridError::OutOfBounds { x: 9, y: 9, .. })
        ));
    }

    // Tests io errors convert through the question mark operator
    // Verified by removing the From impl
    #[test]
    fn test_io_error_conversion() {
        fn fails() -> arraygrid::Result<()> {
            Err::<(), _>(std::io::Error::other("disk gone"))?;
            Ok(())
        }

        assert!(matches!(fails(), Err(GridError::FileSystem { .. })));
    }
}
