//! Owned, rectangular pixel grid.
//!
//! Pixels live in one flat row-major [`imgref::ImgVec`]. Row 0 is the visual
//! top, column 0 the visual left. A grid always has at least one row and one
//! column, so every consumer may read `width()` and `height()` unconditionally.

use imgref::{ImgRef, ImgVec};

use crate::error::BitmapError;
use crate::limits::Limits;
use crate::pixel::Pixel;

/// A dense `height` x `width` grid of RGB pixels.
#[derive(Clone, Debug)]
pub struct Grid {
    img: ImgVec<Pixel>,
}

impl Grid {
    /// Wrap a row-major pixel buffer.
    ///
    /// Fails if either dimension is zero or `pixels.len() != width * height`.
    pub fn new(width: usize, height: usize, pixels: Vec<Pixel>) -> Result<Self, BitmapError> {
        if width == 0 || height == 0 {
            return Err(BitmapError::InvalidDimensions { width, height });
        }
        let expected = width
            .checked_mul(height)
            .ok_or(BitmapError::InvalidDimensions { width, height })?;
        if pixels.len() != expected {
            return Err(BitmapError::InvalidDimensions { width, height });
        }
        Ok(Self {
            img: ImgVec::new(pixels, width, height),
        })
    }

    /// A grid with every pixel set to `fill`.
    pub fn filled(width: usize, height: usize, fill: Pixel) -> Result<Self, BitmapError> {
        Self::try_from_fn(width, height, &Limits::default(), |_, _| fill)
    }

    /// Build a grid from nested rows, rejecting empty input and ragged rows.
    pub fn from_rows(rows: Vec<Vec<Pixel>>) -> Result<Self, BitmapError> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);
        if width == 0 || height == 0 {
            return Err(BitmapError::InvalidDimensions { width, height });
        }
        // every row is measured before anything is allocated
        if let Some((row, r)) = rows.iter().enumerate().find(|(_, r)| r.len() != width) {
            return Err(BitmapError::RaggedRows {
                row,
                expected: width,
                actual: r.len(),
            });
        }
        Self::new(width, height, rows.concat())
    }

    /// Build a grid by evaluating `f(row, col)` for every position.
    ///
    /// Only for shapes already held in memory, such as an existing grid's
    /// dimensions or their transpose. New shapes go through [`Grid::try_from_fn`].
    pub(crate) fn from_fn(
        width: usize,
        height: usize,
        f: impl FnMut(usize, usize) -> Pixel,
    ) -> Self {
        debug_assert!(width > 0 && height > 0);
        let mut pixels = Vec::with_capacity(width * height);
        fill(&mut pixels, width, height, f);
        Self {
            img: ImgVec::new(pixels, width, height),
        }
    }

    /// Like [`Grid::from_fn`], for a shape that has to pass `limits` first.
    ///
    /// The buffer is reserved fallibly, so an oversized request is an error
    /// rather than an abort.
    pub(crate) fn try_from_fn(
        width: usize,
        height: usize,
        limits: &Limits,
        f: impl FnMut(usize, usize) -> Pixel,
    ) -> Result<Self, BitmapError> {
        if width == 0 || height == 0 {
            return Err(BitmapError::InvalidDimensions { width, height });
        }
        limits.check_dims(width, height)?;
        let mut pixels = Vec::new();
        pixels.try_reserve_exact(width * height).map_err(|e| {
            BitmapError::LimitExceeded(format!("cannot allocate {width}x{height} grid: {e}"))
        })?;
        fill(&mut pixels, width, height, f);
        Ok(Self {
            img: ImgVec::new(pixels, width, height),
        })
    }

    /// Apply `f` to every pixel, keeping the dimensions.
    pub(crate) fn map(&self, f: impl Fn(Pixel) -> Pixel) -> Self {
        Self {
            img: ImgVec::new(
                self.pixels().iter().map(|&p| f(p)).collect(),
                self.width(),
                self.height(),
            ),
        }
    }

    /// Number of columns.
    pub fn width(&self) -> usize {
        self.img.width()
    }

    /// Number of rows.
    pub fn height(&self) -> usize {
        self.img.height()
    }

    /// Pixel at (`row`, `col`), or `None` when out of bounds.
    pub fn get(&self, row: usize, col: usize) -> Option<Pixel> {
        if row >= self.height() || col >= self.width() {
            return None;
        }
        self.pixels().get(row * self.width() + col).copied()
    }

    /// Pixel at (`row`, `col`). Callers guarantee bounds.
    #[inline]
    pub(crate) fn at(&self, row: usize, col: usize) -> Pixel {
        self.pixels()[row * self.width() + col]
    }

    /// One row of pixels, top to bottom.
    pub fn row(&self, row: usize) -> Option<&[Pixel]> {
        if row >= self.height() {
            return None;
        }
        let w = self.width();
        self.pixels().get(row * w..(row + 1) * w)
    }

    /// Iterate rows from top to bottom.
    pub fn rows(&self) -> impl DoubleEndedIterator<Item = &[Pixel]> + '_ {
        self.pixels().chunks_exact(self.width())
    }

    /// All pixels in row-major order.
    pub fn pixels(&self) -> &[Pixel] {
        self.img.buf()
    }

    /// Borrow as an [`imgref::ImgRef`].
    pub fn as_imgref(&self) -> ImgRef<'_, Pixel> {
        self.img.as_ref()
    }

    /// Take the underlying [`imgref::ImgVec`].
    pub fn into_imgvec(self) -> ImgVec<Pixel> {
        self.img
    }

    /// Copy out as nested rows.
    pub fn to_rows(&self) -> Vec<Vec<Pixel>> {
        self.rows().map(<[Pixel]>::to_vec).collect()
    }
}

fn fill(
    pixels: &mut Vec<Pixel>,
    width: usize,
    height: usize,
    mut f: impl FnMut(usize, usize) -> Pixel,
) {
    for row in 0..height {
        for col in 0..width {
            pixels.push(f(row, col));
        }
    }
}

impl PartialEq for Grid {
    fn eq(&self, other: &Self) -> bool {
        self.width() == other.width() && self.pixels() == other.pixels()
    }
}

impl Eq for Grid {}

impl TryFrom<ImgVec<Pixel>> for Grid {
    type Error = BitmapError;

    fn try_from(img: ImgVec<Pixel>) -> Result<Self, Self::Error> {
        let (width, height) = (img.width(), img.height());
        let mut pixels = Vec::with_capacity(width * height);
        for y in 0..height {
            pixels.extend_from_slice(&img.buf()[y * img.stride()..][..width]);
        }
        Self::new(width, height, pixels)
    }
}
