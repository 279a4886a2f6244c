//! Error types for trueno-raster operations.
//!
//! Rasterization itself never fails: out-of-bounds writes are clipped and
//! degenerate geometry draws a point or nothing. Errors only surface at
//! construction and I/O boundaries.

use std::io;
use thiserror::Error;

/// Result type alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in trueno-raster operations.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error (file operations, etc.).
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// PNG encoding error.
    #[error("PNG encoding error: {0}")]
    PngEncoding(#[from] png::EncodingError),

    /// Invalid dimensions for a canvas or field.
    #[error("Invalid dimensions: {width}x{height}")]
    InvalidDimensions {
        /// Width value.
        width: u32,
        /// Height value.
        height: u32,
    },

    /// Bezier spline built from too few or too many control points.
    #[error("Bezier spline needs {min} to {max} control points, got {count}")]
    ControlPointCount {
        /// Number of control points supplied.
        count: usize,
        /// Smallest accepted count.
        min: usize,
        /// Largest accepted count.
        max: usize,
    },

    /// A geometry or render parameter outside its accepted range.
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Raw pixel data does not match the canvas extent.
    #[error("Buffer length mismatch: expected {expected} bytes, got {actual}")]
    BufferLength {
        /// Length implied by the canvas extent and channel count.
        expected: usize,
        /// Length actually supplied.
        actual: usize,
    },

    /// Scene configuration could not be parsed.
    #[error("Config parse error at line {line}: {message}")]
    Config {
        /// Line number of the error (0 if unknown).
        line: usize,
        /// Parser message.
        message: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::InvalidDimensions {
            width: 0,
            height: 100,
        };
        assert!(err.to_string().contains("Invalid dimensions"));
    }

    #[test]
    fn test_control_point_count() {
        let err = Error::ControlPointCount {
            count: 12,
            min: 4,
            max: 9,
        };
        let text = err.to_string();
        assert!(text.contains("12"));
        assert!(text.contains("4 to 9"));
    }

    #[test]
    fn test_config_error_includes_line() {
        let err = Error::Config {
            line: 7,
            message: "bad value".to_string(),
        };
        assert!(err.to_string().contains("line 7"));
    }

    #[test]
    fn test_io_from() {
        let err: Error = io::Error::new(io::ErrorKind::NotFound, "missing").into();
        assert!(matches!(err, Error::Io(_)));
    }
}
