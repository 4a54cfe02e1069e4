//! Fixed-layout BMP header records.
//!
//! The 14-byte file header and the 40-byte `BITMAPINFOHEADER` are modeled as
//! plain structs with one `parse` and one `write` routine each. All multi-byte
//! fields are little-endian. Byte offsets below are absolute file offsets.

use crate::error::BitmapError;

pub(crate) const FILE_HEADER_SIZE: usize = 14;
pub(crate) const INFO_HEADER_SIZE: usize = 40;
/// Pixel-array offset written by the encoder (no palette, no masks).
pub(crate) const PIXEL_OFFSET: u32 = (FILE_HEADER_SIZE + INFO_HEADER_SIZE) as u32;
/// 72 DPI expressed in pixels per meter.
pub(crate) const PIXELS_PER_METER: i32 = 2835;
pub(crate) const BI_RGB: u32 = 0;

// ── Cursor for reading from &[u8] ───────────────────────────────────

pub(crate) struct Cursor<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> Cursor<'a> {
    pub(crate) fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    fn read_fixed_bytes<const N: usize>(&mut self) -> Result<[u8; N], BitmapError> {
        let end = self.pos.checked_add(N).ok_or(BitmapError::UnexpectedEof)?;
        let mut buf = [0u8; N];
        buf.copy_from_slice(
            self.data
                .get(self.pos..end)
                .ok_or(BitmapError::UnexpectedEof)?,
        );
        self.pos = end;
        Ok(buf)
    }

    fn get_u16_le(&mut self) -> Result<u16, BitmapError> {
        self.read_fixed_bytes().map(u16::from_le_bytes)
    }

    fn get_u32_le(&mut self) -> Result<u32, BitmapError> {
        self.read_fixed_bytes().map(u32::from_le_bytes)
    }

    fn get_i32_le(&mut self) -> Result<i32, BitmapError> {
        self.read_fixed_bytes().map(i32::from_le_bytes)
    }
}

// ── File header (offsets 0..14) ─────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct FileHeader {
    /// Offset 0. `BM` on write, not verified on read.
    pub signature: [u8; 2],
    /// Offset 2.
    pub file_size: u32,
    /// Offset 6, two u16 reserved fields.
    pub reserved: u32,
    /// Offset 10.
    pub pixel_offset: u32,
}

impl FileHeader {
    pub(crate) fn new(file_size: u32) -> Self {
        Self {
            signature: *b"BM",
            file_size,
            reserved: 0,
            pixel_offset: PIXEL_OFFSET,
        }
    }

    pub(crate) fn parse(cur: &mut Cursor<'_>) -> Result<Self, BitmapError> {
        Ok(Self {
            signature: cur.read_fixed_bytes()?,
            file_size: cur.get_u32_le()?,
            reserved: cur.get_u32_le()?,
            pixel_offset: cur.get_u32_le()?,
        })
    }

    pub(crate) fn write(&self, out: &mut Vec<u8>) {
        out.extend_from_slice(&self.signature);
        out.extend_from_slice(&self.file_size.to_le_bytes());
        out.extend_from_slice(&self.reserved.to_le_bytes());
        out.extend_from_slice(&self.pixel_offset.to_le_bytes());
    }
}

// ── Info header (offsets 14..54) ────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct InfoHeader {
    /// Offset 14.
    pub header_size: u32,
    /// Offset 18.
    pub width: i32,
    /// Offset 22. Positive = bottom-up.
    pub height: i32,
    /// Offset 26.
    pub planes: u16,
    /// Offset 28.
    pub bits_per_pixel: u16,
    /// Offset 30.
    pub compression: u32,
    /// Offset 34. Padded pixel-array size in bytes.
    pub image_size: u32,
    pub x_pixels_per_meter: i32,
    pub y_pixels_per_meter: i32,
    pub colors_used: u32,
    pub important_colors: u32,
}

impl InfoHeader {
    /// Header for an uncompressed bottom-up 24-bit image.
    pub(crate) fn bgr24(width: i32, height: i32, image_size: u32) -> Self {
        Self {
            header_size: INFO_HEADER_SIZE as u32,
            width,
            height,
            planes: 1,
            bits_per_pixel: 24,
            compression: BI_RGB,
            image_size,
            x_pixels_per_meter: PIXELS_PER_METER,
            y_pixels_per_meter: PIXELS_PER_METER,
            colors_used: 0,
            important_colors: 0,
        }
    }

    pub(crate) fn parse(cur: &mut Cursor<'_>) -> Result<Self, BitmapError> {
        Ok(Self {
            header_size: cur.get_u32_le()?,
            width: cur.get_i32_le()?,
            height: cur.get_i32_le()?,
            planes: cur.get_u16_le()?,
            bits_per_pixel: cur.get_u16_le()?,
            compression: cur.get_u32_le()?,
            image_size: cur.get_u32_le()?,
            x_pixels_per_meter: cur.get_i32_le()?,
            y_pixels_per_meter: cur.get_i32_le()?,
            colors_used: cur.get_u32_le()?,
            important_colors: cur.get_u32_le()?,
        })
    }

    pub(crate) fn write(&self, out: &mut Vec<u8>) {
        out.extend_from_slice(&self.header_size.to_le_bytes());
        out.extend_from_slice(&self.width.to_le_bytes());
        out.extend_from_slice(&self.height.to_le_bytes());
        out.extend_from_slice(&self.planes.to_le_bytes());
        out.extend_from_slice(&self.bits_per_pixel.to_le_bytes());
        out.extend_from_slice(&self.compression.to_le_bytes());
        out.extend_from_slice(&self.image_size.to_le_bytes());
        out.extend_from_slice(&self.x_pixels_per_meter.to_le_bytes());
        out.extend_from_slice(&self.y_pixels_per_meter.to_le_bytes());
        out.extend_from_slice(&self.colors_used.to_le_bytes());
        out.extend_from_slice(&self.important_colors.to_le_bytes());
    }
}

// ── Scanline layout ─────────────────────────────────────────────────

/// Zero bytes needed to round `row_bytes` up to a multiple of 4.
#[inline]
pub(crate) fn row_padding(row_bytes: usize) -> usize {
    (4 - row_bytes % 4) % 4
}

/// Derived pixel-array geometry. Recomputed on every decode and encode.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct RowLayout {
    pub width: usize,
    pub height: usize,
    pub bytes_per_pixel: usize,
    /// Pixel bytes in one scanline, excluding padding.
    pub row_bytes: usize,
    pub padding: usize,
}

impl RowLayout {
    pub(crate) fn new(width: u32, height: u32, bits_per_pixel: u16) -> Result<Self, BitmapError> {
        let bytes_per_pixel = usize::from(bits_per_pixel / 8);
        let row_bytes = (width as usize)
            .checked_mul(bytes_per_pixel)
            .ok_or(BitmapError::DimensionsTooLarge { width, height })?;
        // stride and array size must be representable too
        row_bytes
            .checked_add(3)
            .and_then(|s| s.checked_mul(height as usize))
            .ok_or(BitmapError::DimensionsTooLarge { width, height })?;
        Ok(Self {
            width: width as usize,
            height: height as usize,
            bytes_per_pixel,
            row_bytes,
            padding: row_padding(row_bytes),
        })
    }

    /// Scanline length including padding.
    pub(crate) fn stride(&self) -> usize {
        self.row_bytes + self.padding
    }

    /// Padded pixel-array size in bytes.
    pub(crate) fn pixel_array_size(&self) -> usize {
        self.stride() * self.height
    }
}
