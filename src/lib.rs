//! Monochrome raster core for barcode rendering.
//!
//! This crate provides the 1-bit-per-pixel [`Bitmap`] a barcode generator
//! paints into, a [`Canvas`] facade for filling bar and background
//! rectangles, and an exact encoder for the uncompressed 1-bpp BMP file
//! format.
//!
//! # Example
//!
//! ```rust
//! use barcode_bmp::{Bitmap, BwColor};
//!
//! let mut bitmap = Bitmap::new(40, 20).unwrap();
//! let mut canvas = bitmap.canvas();
//! canvas.fill_rect(BwColor::Black, 4, 0, 2, 20).unwrap();
//! drop(canvas);
//!
//! let mut out = Vec::new();
//! bitmap.write_bmp(&mut out).unwrap();
//! ```

mod bitmap;
mod bmp;
mod canvas;
mod color;
mod error;

pub use crate::{
    bitmap::{Bitmap, RotateFlip},
    bmp::BMP_HEADER_LEN,
    canvas::{Canvas, Rect},
    color::{Brush, BwColor},
    error::Error,
};
