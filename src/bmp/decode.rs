//! BMP decoder: uncompressed, bottom-up, 24-bit (32-bit with the 4th byte dropped).

use enough::Stop;

use super::header::{
    BI_RGB, Cursor, FILE_HEADER_SIZE, FileHeader, INFO_HEADER_SIZE, InfoHeader, RowLayout,
};
use crate::error::BitmapError;
use crate::grid::Grid;
use crate::pixel::{BLACK, Pixel};

/// Parsed and validated BMP headers.
#[derive(Clone, Copy, Debug)]
pub(crate) struct BmpHeader {
    pub file: FileHeader,
    pub info: InfoHeader,
    pub layout: RowLayout,
}

impl BmpHeader {
    pub(crate) fn width(&self) -> u32 {
        self.layout.width as u32
    }

    pub(crate) fn height(&self) -> u32 {
        self.layout.height as u32
    }

    /// File size implied by the pixel offset and the padded pixel array.
    pub(crate) fn expected_file_size(&self) -> u64 {
        u64::from(self.file.pixel_offset) + self.layout.pixel_array_size() as u64
    }
}

/// Parse both headers and run the structural checks.
///
/// The declared file-size field must equal
/// `pixel_offset + (row_bytes + padding) * height` exactly.
pub(crate) fn parse_bmp_header(data: &[u8]) -> Result<BmpHeader, BitmapError> {
    let mut cur = Cursor::new(data);
    let file = FileHeader::parse(&mut cur)?;
    let info = InfoHeader::parse(&mut cur)?;

    if (info.header_size as usize) < INFO_HEADER_SIZE {
        return Err(BitmapError::UnsupportedVariant(format!(
            "BMP info header size {} (need at least {INFO_HEADER_SIZE})",
            info.header_size
        )));
    }
    if info.height < 0 {
        return Err(BitmapError::UnsupportedVariant(
            "top-down BMP row order".into(),
        ));
    }
    if info.width <= 0 {
        return Err(BitmapError::InvalidHeader(format!(
            "BMP width is {}",
            info.width
        )));
    }
    if info.height == 0 {
        return Err(BitmapError::InvalidHeader("BMP height is zero".into()));
    }
    if !matches!(info.bits_per_pixel, 24 | 32) {
        return Err(BitmapError::UnsupportedVariant(format!(
            "BMP bit depth {} unsupported",
            info.bits_per_pixel
        )));
    }
    if info.compression != BI_RGB {
        return Err(BitmapError::UnsupportedVariant(format!(
            "BMP compression {} unsupported",
            info.compression
        )));
    }
    let headers_end = FILE_HEADER_SIZE as u64 + u64::from(info.header_size);
    if u64::from(file.pixel_offset) < headers_end {
        return Err(BitmapError::InvalidHeader(format!(
            "pixel offset {} overlaps headers ending at {headers_end}",
            file.pixel_offset
        )));
    }

    let layout = RowLayout::new(info.width as u32, info.height as u32, info.bits_per_pixel)?;
    let header = BmpHeader { file, info, layout };

    let expected = header.expected_file_size();
    if u64::from(file.file_size) != expected {
        log::warn!(
            "BMP size field {} disagrees with layout {expected}",
            file.file_size
        );
        return Err(BitmapError::SizeMismatch {
            declared: file.file_size,
            expected,
        });
    }

    Ok(header)
}

/// Read the pixel array into a grid, flipping rows so row 0 is the visual top.
pub(crate) fn decode_bmp_pixels(
    data: &[u8],
    header: &BmpHeader,
    stop: &dyn Stop,
) -> Result<Grid, BitmapError> {
    let layout = &header.layout;
    let start = header.file.pixel_offset as usize;
    let array = start
        .checked_add(layout.pixel_array_size())
        .and_then(|end| data.get(start..end))
        .ok_or(BitmapError::UnexpectedEof)?;

    let (w, h) = (layout.width, layout.height);
    let mut pixels = vec![BLACK; w * h];

    // first scanline in the file is the bottom row of the image
    for (file_row, scanline) in array.chunks_exact(layout.stride()).enumerate() {
        if file_row % 16 == 0 {
            stop.check()?;
        }
        let row = h - 1 - file_row;
        let dst = &mut pixels[row * w..(row + 1) * w];
        let src = scanline[..layout.row_bytes].chunks_exact(layout.bytes_per_pixel);
        for (px, bgr) in dst.iter_mut().zip(src) {
            *px = Pixel::new(bgr[2], bgr[1], bgr[0]);
        }
    }

    Grid::new(w, h, pixels)
}
