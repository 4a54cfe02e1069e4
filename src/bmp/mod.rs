//! BMP container codec (internal).
//!
//! Use top-level [`crate::DecodeRequest`], [`crate::EncodeRequest`],
//! [`crate::decode_file`] and [`crate::encode_file`].

mod decode;
mod encode;
mod header;

pub(crate) use decode::{BmpHeader, parse_bmp_header};

use crate::error::BitmapError;
use crate::grid::Grid;
use crate::limits::Limits;
use enough::Stop;

/// Decode BMP data into a grid.
pub(crate) fn decode(
    data: &[u8],
    limits: Option<&Limits>,
    stop: &dyn Stop,
) -> Result<Grid, BitmapError> {
    let header = decode::parse_bmp_header(data)?;
    check_limits(limits, &header)?;
    stop.check()?;
    let grid = decode::decode_bmp_pixels(data, &header, stop)?;
    log::debug!(
        "decoded {}x{} BMP ({} bpp, {} pad bytes/row)",
        header.width(),
        header.height(),
        header.info.bits_per_pixel,
        header.layout.padding
    );
    Ok(grid)
}

fn check_limits(limits: Option<&Limits>, header: &BmpHeader) -> Result<(), BitmapError> {
    let limits = limits.copied().unwrap_or_default();
    limits.check_grid(u64::from(header.width()), u64::from(header.height()))
}

/// Encode a grid to 24-bit BMP.
pub(crate) fn encode(grid: &Grid, stop: &dyn Stop) -> Result<Vec<u8>, BitmapError> {
    let out = encode::encode_bmp(grid, stop)?;
    log::debug!(
        "encoded {}x{} BMP ({} bytes)",
        grid.width(),
        grid.height(),
        out.len()
    );
    Ok(out)
}
