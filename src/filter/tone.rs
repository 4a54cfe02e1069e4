//! Point-wise color filters. Output dimensions always equal input dimensions.

use crate::error::BitmapError;
use crate::grid::Grid;
use crate::pixel::{BLACK, Pixel, WHITE, channel_average, channel_sum, map_channels};

/// Reject scale factors outside `[0, 1]` (NaN included).
pub(crate) fn check_scale(filter: &str, scale: f64) -> Result<(), BitmapError> {
    if (0.0..=1.0).contains(&scale) {
        return Ok(());
    }
    log::warn!("{filter}: rejecting scale factor {scale}");
    Err(BitmapError::InvalidParameter(format!(
        "{filter} scale factor must be within [0, 1], got {scale}"
    )))
}

#[inline]
fn lighten_px(p: Pixel, scale: f64) -> Pixel {
    map_channels(p, |c| 255.0 - (255.0 - c) * scale)
}

#[inline]
fn darken_px(p: Pixel, scale: f64) -> Pixel {
    map_channels(p, |c| c * scale)
}

/// Darken toward the corners.
///
/// Each channel is scaled by `(height - d) / height`, where `d` is the
/// Euclidean distance from the grid midpoint `(width / 2, height / 2)`
/// (integer division). Factors below zero clamp to black.
pub fn vignette(grid: &Grid) -> Grid {
    let (w, h) = (grid.width(), grid.height());
    let (mid_col, mid_row) = ((w / 2) as f64, (h / 2) as f64);
    let hf = h as f64;
    Grid::from_fn(w, h, |row, col| {
        let dx = col as f64 - mid_col;
        let dy = row as f64 - mid_row;
        let factor = (hf - dx.hypot(dy)) / hf;
        map_channels(grid.at(row, col), |c| c * factor)
    })
}

/// Push light pixels lighter and dark pixels darker.
///
/// Pixels whose channel average is at least 170 are lightened, those below 90
/// darkened, both by `scale`. Mid-tones pass through.
pub fn clarendon(grid: &Grid, scale: f64) -> Result<Grid, BitmapError> {
    check_scale("clarendon", scale)?;
    Ok(grid.map(|p| match channel_average(p) {
        170.. => lighten_px(p, scale),
        0..90 => darken_px(p, scale),
        _ => p,
    }))
}

/// Set every channel to the floor of the channel average.
pub fn grayscale(grid: &Grid) -> Grid {
    grid.map(|p| {
        let v = channel_average(p);
        Pixel::new(v, v, v)
    })
}

/// Pure white when the channel average is at least 128, else pure black.
pub fn high_contrast(grid: &Grid) -> Grid {
    grid.map(|p| if channel_average(p) >= 128 { WHITE } else { BLACK })
}

/// `255 - (255 - c) * scale` on every channel.
pub fn lighten(grid: &Grid, scale: f64) -> Result<Grid, BitmapError> {
    check_scale("lighten", scale)?;
    Ok(grid.map(|p| lighten_px(p, scale)))
}

/// `c * scale` on every channel.
pub fn darken(grid: &Grid, scale: f64) -> Result<Grid, BitmapError> {
    check_scale("darken", scale)?;
    Ok(grid.map(|p| darken_px(p, scale)))
}

/// Quantize to black, white, red, green and blue.
///
/// Channel sum >= 550 is white, <= 150 is black. Anything else becomes the
/// pure primary of its largest channel, ties resolved red, then green, then blue.
pub fn reduce_palette(grid: &Grid) -> Grid {
    grid.map(|p| {
        let sum = channel_sum(p);
        let max = p.r.max(p.g).max(p.b);
        if sum >= 550 {
            WHITE
        } else if sum <= 150 {
            BLACK
        } else if max == p.r {
            Pixel::new(255, 0, 0)
        } else if max == p.g {
            Pixel::new(0, 255, 0)
        } else {
            Pixel::new(0, 0, 255)
        }
    })
}
