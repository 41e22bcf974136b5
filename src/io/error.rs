//! Error types and context management for grid operations

use std::fmt;
use std::path::PathBuf;

/// Main error type for all grid operations
#[derive(Debug)]
pub enum GridError {
    /// A supplied width or height is not strictly positive
    InvalidDimension {
        /// Requested width
        width: i32,
        /// Requested height
        height: i32,
    },

    /// Coordinate lies outside the current bounds rectangle
    OutOfBounds {
        /// Requested x-coordinate
        x: i32,
        /// Requested y-coordinate
        y: i32,
        /// Grid width at the time of the call
        width: i32,
        /// Grid height at the time of the call
        height: i32,
    },

    /// Resize would discard an occupied coordinate
    ///
    /// Reports the first occupied coordinate found outside the new bounds,
    /// scanning rows top to bottom.
    DataLoss {
        /// x-coordinate of the element that would be lost
        x: i32,
        /// y-coordinate of the element that would be lost
        y: i32,
        /// Rejected width
        new_width: i32,
        /// Rejected height
        new_height: i32,
    },

    /// Script line could not be parsed
    Script {
        /// 1-based line number, 0 when unknown
        line: usize,
        /// Description of what's wrong with the line
        reason: String,
    },

    /// Grid command issued before any grid was created
    NoGrid {
        /// 1-based line number, 0 when unknown
        line: usize,
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
            Self::InvalidDimension { width, height } => {
                write!(
                    f,
                    "Invalid dimensions {width}x{height}: width and height must be positive"
                )
            }
            Self::OutOfBounds {
                x,
                y,
                width,
                height,
            } => {
                write!(
                    f,
                    "Coordinate ({x}, {y}) is out of bounds for grid {width}x{height}"
                )
            }
            Self::DataLoss {
                x,
                y,
                new_width,
                new_height,
            } => {
                write!(
                    f,
                    "Resize to {new_width}x{new_height} would discard the element at ({x}, {y})"
                )
            }
            Self::Script { line, reason } => {
                write!(f, "Script error on line {line}: {reason}")
            }
            Self::NoGrid { line } => {
                write!(f, "No grid on line {line}: create one with 'new' first")
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
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for grid results
pub type Result<T> = std::result::Result<T, GridError>;

/// Attaches script line numbers to errors raised while replaying commands
pub trait WithLine<T> {
    /// Record the line that produced the error
    ///
    /// # Errors
    ///
    /// Propagates the original error with the line number applied
    fn with_line(self, line: usize) -> Result<T>;
}

impl<T, E> WithLine<T> for std::result::Result<T, E>
where
    E: Into<GridError>,
{
    fn with_line(self, line: usize) -> Result<T> {
        self.map_err(|e| {
            let mut error = e.into();
            // Grid errors carry their own coordinates, only script-level ones take a line
            match &mut error {
                GridError::Script { line: slot, .. } | GridError::NoGrid { line: slot } => {
                    *slot = line;
                }
                _ => {}
            }
            error
        })
    }
}

impl From<std::io::Error> for GridError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

/// Create a script parse error with an unknown line
pub fn script_error(reason: &impl ToString) -> GridError {
    GridError::Script {
        line: 0,
        reason: reason.to_string(),
    }
}

/// Create a file system error for an operation on a path
pub fn file_system_error(
    path: impl Into<PathBuf>,
    operation: &'static str,
    source: std::io::Error,
) -> GridError {
    GridError::FileSystem {
        path: path.into(),
        operation,
        source,
    }
}
