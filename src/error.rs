//! Error types for kernel operations.
//!
//! The algorithms themselves are total over finite input. The only failures
//! are caller-contract violations caught before any work starts.

use thiserror::Error;

/// Result type alias using [`KernelError`].
pub type Result<T> = std::result::Result<T, KernelError>;

/// Caller-contract violations rejected by the kernel.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum KernelError {
    /// Window bounds are inverted or not comparable (NaN).
    #[error("invalid clip window: left={left}, right={right}, bottom={bottom}, top={top}")]
    InvalidWindow {
        left: f64,
        right: f64,
        bottom: f64,
        top: f64,
    },

    /// Circle radius below zero.
    #[error("negative circle radius: {0}")]
    NegativeRadius(i32),

    /// Circle extends past the `i32` grid.
    #[error("circle at ({x}, {y}) with radius {radius} leaves the i32 grid")]
    CoordinateOverflow { x: i32, y: i32, radius: i32 },

    /// Real circle center that does not round onto the `i32` grid.
    #[error("circle center ({x}, {y}) is not on the i32 grid")]
    CenterOutOfGrid { x: f64, y: f64 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_window_display() {
        let err = KernelError::InvalidWindow {
            left: 10.0,
            right: 5.0,
            bottom: 0.0,
            top: 1.0,
        };
        let msg = err.to_string();
        assert!(msg.contains("left=10"));
        assert!(msg.contains("right=5"));
    }

    #[test]
    fn test_negative_radius_display() {
        let err = KernelError::NegativeRadius(-3);
        assert_eq!(err.to_string(), "negative circle radius: -3");
    }

    #[test]
    fn test_coordinate_overflow_display() {
        let err = KernelError::CoordinateOverflow {
            x: i32::MAX,
            y: 0,
            radius: 1,
        };
        assert_eq!(
            err.to_string(),
            "circle at (2147483647, 0) with radius 1 leaves the i32 grid"
        );
    }
}
