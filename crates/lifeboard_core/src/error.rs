//! Error types for lifeboard_core.
//!
//! Dimension errors are expected at input boundaries. Index and value
//! errors inside the engine are programming defects unless the caller
//! knows the index may be stale (see the controller).

use thiserror::Error;

/// Main error type for grid and automaton operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// Width or height below the playable minimum
    #[error(
        "Invalid dimension {width}x{height}: both sides must be at least {min}",
        min = crate::grid::MIN_SIDE
    )]
    InvalidDimension { width: u32, height: u32 },

    /// Cell index outside `0..width*height`
    #[error("Index {index} out of range for grid of {len} cells")]
    IndexOutOfRange { index: u32, len: usize },

    /// Cell value other than 0 or 1
    #[error("Invalid cell value: {0}")]
    InvalidCellValue(u8),

    /// Initial buffer whose length does not match the dimensions
    #[error("Initial cells have length {actual}, expected {expected}")]
    LengthMismatch { expected: usize, actual: usize },

    /// Pattern name that does not match any preset
    #[error("Unknown pattern: {0}")]
    UnknownPattern(String),
}

/// Result type alias for lifeboard_core operations.
pub type Result<T> = std::result::Result<T, EngineError>;

impl EngineError {
    /// True for errors a caller may see because its index was computed
    /// against a grid that has since been replaced.
    #[must_use]
    pub fn is_stale_index(&self) -> bool {
        matches!(self, Self::IndexOutOfRange { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = EngineError::IndexOutOfRange { index: 12, len: 9 };
        assert_eq!(err.to_string(), "Index 12 out of range for grid of 9 cells");
    }

    #[test]
    fn test_dimension_display_mentions_minimum() {
        let err = EngineError::InvalidDimension {
            width: 2,
            height: 5,
        };
        assert!(err.to_string().contains("at least 3"));
    }

    #[test]
    fn test_stale_index_classification() {
        assert!(EngineError::IndexOutOfRange { index: 0, len: 0 }.is_stale_index());
        assert!(!EngineError::InvalidCellValue(7).is_stale_index());
    }
}
