//! Size budget for grids the crate allocates.
//!
//! The same [`Limits`] bound the grid a decode produces and the grid an
//! enlarging or rotating filter produces, so a hostile header and a huge
//! scale factor fail the same way: with [`BitmapError::LimitExceeded`]
//! before any pixel buffer is reserved.

use crate::error::BitmapError;
use crate::pixel::Pixel;

const PIXEL_BYTES: u64 = size_of::<Pixel>() as u64;

/// Upper bounds on grid shape. `None` means unbounded.
///
/// Even `Limits::default()` refuses a pixel buffer larger than
/// `isize::MAX` bytes, the most a `Vec` can hold.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Limits {
    pub max_width: Option<u64>,
    pub max_height: Option<u64>,
    /// Maximum pixel count (width * height).
    pub max_pixels: Option<u64>,
    /// Maximum size of the grid's pixel buffer, 3 bytes per pixel.
    pub max_memory_bytes: Option<u64>,
}

impl Limits {
    /// Pixel-buffer bytes for a `width` x `height` grid, `None` on overflow.
    pub fn grid_bytes(width: u64, height: u64) -> Option<u64> {
        width.checked_mul(height)?.checked_mul(PIXEL_BYTES)
    }

    /// Reject a grid shape these limits do not admit.
    pub fn check_grid(&self, width: u64, height: u64) -> Result<(), BitmapError> {
        fn over(value: u64, max: Option<u64>, what: &str) -> Result<(), BitmapError> {
            match max {
                Some(max) if value > max => Err(BitmapError::LimitExceeded(format!(
                    "{what} {value} exceeds limit {max}"
                ))),
                _ => Ok(()),
            }
        }

        over(width, self.max_width, "width")?;
        over(height, self.max_height, "height")?;
        let unaddressable = || {
            BitmapError::LimitExceeded(format!("{width}x{height} grid does not fit in memory"))
        };
        let pixels = width.checked_mul(height).ok_or_else(unaddressable)?;
        over(pixels, self.max_pixels, "pixel count")?;
        let bytes = Self::grid_bytes(width, height)
            .filter(|&b| b <= isize::MAX as u64)
            .ok_or_else(unaddressable)?;
        over(bytes, self.max_memory_bytes, "grid size in bytes")
    }

    /// [`Limits::check_grid`] for in-memory dimensions.
    pub(crate) fn check_dims(&self, width: usize, height: usize) -> Result<(), BitmapError> {
        self.check_grid(
            u64::try_from(width).unwrap_or(u64::MAX),
            u64::try_from(height).unwrap_or(u64::MAX),
        )
    }
}
