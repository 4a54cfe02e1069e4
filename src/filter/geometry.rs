//! Rotation and nearest-neighbor enlargement.

use crate::error::BitmapError;
use crate::grid::Grid;
use crate::limits::Limits;

/// Rotate a quarter turn clockwise.
///
/// The pixel at (`row`, `col`) moves to (`col`, `height - 1 - row`), so the
/// output is `height` wide and `width` tall.
pub fn rotate_90(grid: &Grid) -> Grid {
    let h = grid.height();
    Grid::from_fn(h, grid.width(), |row, col| grid.at(h - 1 - col, row))
}

/// Rotate clockwise by `turns` quarter turns. Negative values turn
/// counter-clockwise; the count is reduced modulo 4.
pub fn rotate_quarter_turns(grid: &Grid, turns: i64) -> Grid {
    match turns.rem_euclid(4) {
        0 => grid.clone(),
        1 => rotate_90(grid),
        2 => rotate_90(&rotate_90(grid)),
        _ => rotate_90(&rotate_90(&rotate_90(grid))),
    }
}

/// Rotate clockwise by `degrees`, which must be a multiple of 90.
pub fn rotate_degrees(grid: &Grid, degrees: i64) -> Result<Grid, BitmapError> {
    if degrees % 90 != 0 {
        log::warn!("rotate: {degrees} is not a multiple of 90 degrees");
        return Err(BitmapError::InvalidParameter(format!(
            "rotation must be a multiple of 90 degrees, got {degrees}"
        )));
    }
    Ok(rotate_quarter_turns(grid, degrees / 90))
}

/// Nearest-neighbor upscale: `x_scale` times wider, `y_scale` times taller.
///
/// Output pixel (`r`, `c`) copies source pixel (`r / y_scale`, `c / x_scale`).
/// Only the default [`Limits`] apply, so the output merely has to be addressable.
pub fn enlarge(grid: &Grid, x_scale: i64, y_scale: i64) -> Result<Grid, BitmapError> {
    enlarge_within(grid, x_scale, y_scale, &Limits::default())
}

/// [`enlarge`] with the output grid held to `limits`.
pub fn enlarge_within(
    grid: &Grid,
    x_scale: i64,
    y_scale: i64,
    limits: &Limits,
) -> Result<Grid, BitmapError> {
    if x_scale <= 0 || y_scale <= 0 {
        log::warn!("enlarge: rejecting scale factors {x_scale}x{y_scale}");
        return Err(BitmapError::InvalidParameter(format!(
            "enlarge factors must be positive, got x={x_scale} y={y_scale}"
        )));
    }
    let too_large = || {
        BitmapError::LimitExceeded(format!(
            "enlarging {}x{} by {x_scale}x{y_scale} overflows",
            grid.width(),
            grid.height()
        ))
    };
    let xs = usize::try_from(x_scale).map_err(|_| too_large())?;
    let ys = usize::try_from(y_scale).map_err(|_| too_large())?;
    let w = grid.width().checked_mul(xs).ok_or_else(too_large)?;
    let h = grid.height().checked_mul(ys).ok_or_else(too_large)?;

    Grid::try_from_fn(w, h, limits, |row, col| grid.at(row / ys, col / xs))
        .inspect_err(|e| log::warn!("enlarge: {e}"))
}
