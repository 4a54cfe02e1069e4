use crate::bmp;
use crate::error::BitmapError;

/// Container metadata read from a BMP header without decoding pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BmpInfo {
    pub width: u32,
    pub height: u32,
    pub bits_per_pixel: u16,
    /// Declared total file size (validated against the layout).
    pub file_size: u32,
    /// Byte offset of the pixel array.
    pub pixel_offset: u32,
    /// Zero bytes appended to each scanline (0-3).
    pub row_padding: usize,
}

impl BmpInfo {
    /// Parse and validate the headers of a BMP buffer.
    ///
    /// Runs the same structural checks as a full decode, including the
    /// file-size cross-check, but does not require the pixel array to be present.
    pub fn from_bytes(data: &[u8]) -> Result<Self, BitmapError> {
        let header = bmp::parse_bmp_header(data)?;
        Ok(Self {
            width: header.width(),
            height: header.height(),
            bits_per_pixel: header.info.bits_per_pixel,
            file_size: header.file.file_size,
            pixel_offset: header.file.pixel_offset,
            row_padding: header.layout.padding,
        })
    }
}
