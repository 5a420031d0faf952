//! Error types for bitmap, drawing and encoder operations.
//!
//! This module defines all possible errors that can occur while building
//! a raster, drawing onto it, or serializing it to a BMP stream.

use thiserror::Error;

/// Main error type for raster and encoder operations.
///
/// None of these are recovered internally; every failure surfaces to the
/// immediate caller. Drawing and encoding are deterministic, so a caller
/// may simply retry after an I/O failure.
#[derive(Error, Debug)]
pub enum Error {
    /// Bitmap creation was asked for a zero-sized surface.
    #[error("Invalid bitmap dimensions {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    /// Pixel access outside `[0, width) x [0, height)`.
    ///
    /// Coordinates are rejected, never wrapped or clamped.
    #[error("Pixel ({x}, {y}) is outside the {width}x{height} bitmap")]
    OutOfBounds {
        x: u32,
        y: u32,
        width: u32,
        height: u32,
    },

    /// The requested operation is not implemented for monochrome rasters.
    #[error("Unsupported operation: {0}")]
    Unsupported(&'static str),

    /// The assembled BMP preamble did not come out at its fixed size.
    ///
    /// This signals a defect in the encoder itself rather than bad input;
    /// it is kept separate from [`Error::Io`] so callers can tell the two
    /// apart.
    #[error("Unexpected header length {0}")]
    HeaderLength(usize),

    /// The destination stream refused the written bytes.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
