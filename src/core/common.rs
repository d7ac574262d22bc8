//! Common types for Dots and Boxes: board errors.

use crate::core::moves::{Move, Orientation};

/// Errors returned by Board and GameSession operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardError {
    /// Rows or columns were zero.
    InvalidDimensions { rows: usize, cols: usize },
    /// A supplied edge sequence does not match the board dimensions.
    InvalidEdgeLength {
        orientation: Orientation,
        expected: usize,
        actual: usize,
    },
    /// A state vector does not match the board dimensions.
    InvalidVectorLength { expected: usize, actual: usize },
    /// Edge or box coordinates outside the grid.
    OutOfBounds,
    /// Edge already drawn, or coordinates outside the grid on the move path.
    IllegalMove(Move),
}

impl core::fmt::Display for BoardError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            BoardError::InvalidDimensions { rows, cols } => {
                write!(f, "rows and cols must be positive (got {}x{})", rows, cols)
            }
            BoardError::InvalidEdgeLength {
                orientation,
                expected,
                actual,
            } => write!(
                f,
                "{} edges must have length {} (got {})",
                orientation.name(),
                expected,
                actual
            ),
            BoardError::InvalidVectorLength { expected, actual } => write!(
                f,
                "state vector must have length {} (got {})",
                expected, actual
            ),
            BoardError::OutOfBounds => write!(f, "Edge or box is out of bounds"),
            BoardError::IllegalMove(mv) => write!(f, "Illegal move: {}", mv),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for BoardError {}
