//! BMP serialization of a monochrome bitmap.
//!
//! Writes the classic uncompressed 1-bpp layout: a 14-byte file header,
//! a 40-byte BITMAPINFOHEADER, a two-entry color table, then the pixel
//! buffer verbatim. Every multi-byte field is little-endian. This byte
//! layout is the crate's one external contract; a conforming BMP reader
//! must accept the output as-is.

use std::io::{self, Write};

use byteorder::{LittleEndian, WriteBytesExt};
use log::debug;

use crate::{bitmap::Bitmap, error::Error};

/// Combined size of the file header, info header and color table.
///
/// Pixel data starts at this offset in every file the encoder produces.
pub const BMP_HEADER_LEN: usize = 62;

impl Bitmap {
    /// Encode this bitmap into `dst` as a 1-bpp BMP file.
    ///
    /// The preamble is assembled in a scratch buffer first; if it does not
    /// come out at exactly [`BMP_HEADER_LEN`] bytes the encoder fails with
    /// [`Error::HeaderLength`] before touching the destination. Stream
    /// failures surface as [`Error::Io`].
    pub fn write_bmp<W: Write>(&self, dst: &mut W) -> Result<(), Error> {
        let header = self.bmp_header()?;
        if header.len() != BMP_HEADER_LEN {
            return Err(Error::HeaderLength(header.len()));
        }

        debug!(
            "writing {}x{} bitmap, stride {}: {} header bytes + {} pixel bytes",
            self.width(),
            self.height(),
            self.stride(),
            header.len(),
            self.buffer().len()
        );

        dst.write_all(&header)?;
        dst.write_all(self.buffer())?;
        Ok(())
    }

    fn bmp_header(&self) -> Result<Vec<u8>, io::Error> {
        let pixel_len = self.buffer().len() as u32;
        let mut o = Vec::with_capacity(BMP_HEADER_LEN);

        // BITMAPFILEHEADER
        o.write_all(&[0x42, 0x4D])?; // BM
        o.write_u32::<LittleEndian>(BMP_HEADER_LEN as u32 + pixel_len)?; // File size
        o.write_u32::<LittleEndian>(0)?; // Reserved
        o.write_u32::<LittleEndian>(BMP_HEADER_LEN as u32)?; // Offset to image data

        // BITMAPINFOHEADER
        o.write_u32::<LittleEndian>(40)?; // Header size
        o.write_i32::<LittleEndian>(self.width() as i32)?; // Image width
        o.write_i32::<LittleEndian>(self.height() as i32)?; // Image height
        o.write_u16::<LittleEndian>(1)?; // Planes
        o.write_u16::<LittleEndian>(1)?; // Bits per pixel
        o.write_u32::<LittleEndian>(0)?; // Compression
        o.write_u32::<LittleEndian>(pixel_len)?; // Image size
        o.write_i32::<LittleEndian>(0)?; // X pixels per meter
        o.write_i32::<LittleEndian>(0)?; // Y pixels per meter
        o.write_u32::<LittleEndian>(2)?; // Colors in color table
        o.write_u32::<LittleEndian>(2)?; // Important color count

        // Color table
        o.write_u32::<LittleEndian>(0x0000_0000)?;
        o.write_u32::<LittleEndian>(0x00FF_FFFF)?;

        Ok(o)
    }
}
