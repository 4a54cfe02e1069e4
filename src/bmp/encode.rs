//! BMP encoder: uncompressed 24-bit, bottom-up.

use enough::Stop;

use super::header::{FileHeader, InfoHeader, PIXEL_OFFSET, RowLayout};
use crate::error::BitmapError;
use crate::grid::Grid;

/// Encode a grid as a 24-bit BMP.
pub(crate) fn encode_bmp(grid: &Grid, stop: &dyn Stop) -> Result<Vec<u8>, BitmapError> {
    let too_large = || BitmapError::DimensionsTooLarge {
        width: u32::try_from(grid.width()).unwrap_or(u32::MAX),
        height: u32::try_from(grid.height()).unwrap_or(u32::MAX),
    };
    let width = i32::try_from(grid.width()).map_err(|_| too_large())?;
    let height = i32::try_from(grid.height()).map_err(|_| too_large())?;

    let layout = RowLayout::new(width as u32, height as u32, 24)?;
    let pixel_data_size = u32::try_from(layout.pixel_array_size()).map_err(|_| too_large())?;
    let file_size = pixel_data_size
        .checked_add(PIXEL_OFFSET)
        .ok_or_else(too_large)?;

    let mut out = Vec::with_capacity(file_size as usize);
    FileHeader::new(file_size).write(&mut out);
    InfoHeader::bgr24(width, height, pixel_data_size).write(&mut out);

    stop.check()?;

    let pad = [0u8; 3];
    for (i, row) in grid.rows().rev().enumerate() {
        if i % 16 == 0 {
            stop.check()?;
        }
        for p in row {
            out.extend_from_slice(&[p.b, p.g, p.r]);
        }
        out.extend_from_slice(&pad[..layout.padding]);
    }

    debug_assert_eq!(out.len(), file_size as usize);
    Ok(out)
}
