use std::path::Path;

use enough::{Stop, Unstoppable};

use crate::bmp;
use crate::error::BitmapError;
use crate::grid::Grid;
use crate::limits::Limits;

/// In-memory BMP decode with optional limits.
///
/// ```no_run
/// use bmpfx::{DecodeRequest, Limits, Unstoppable};
///
/// let data: &[u8] = &[]; // your BMP bytes
/// let limits = Limits { max_pixels: Some(50_000_000), ..Default::default() };
/// let grid = DecodeRequest::new(data).with_limits(&limits).decode(Unstoppable)?;
/// println!("{}x{}", grid.width(), grid.height());
/// # Ok::<(), bmpfx::BitmapError>(())
/// ```
#[derive(Clone, Debug)]
pub struct DecodeRequest<'a> {
    data: &'a [u8],
    limits: Option<&'a Limits>,
}

impl<'a> DecodeRequest<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, limits: None }
    }

    pub fn with_limits(mut self, limits: &'a Limits) -> Self {
        self.limits = Some(limits);
        self
    }

    pub fn decode(self, stop: impl Stop) -> Result<Grid, BitmapError> {
        bmp::decode(self.data, self.limits, &stop)
    }
}

/// Read and decode a BMP file.
///
/// The file is read in one pass and the handle is released before decoding.
pub fn decode_file(path: impl AsRef<Path>) -> Result<Grid, BitmapError> {
    let path = path.as_ref();
    let data = std::fs::read(path).map_err(|source| BitmapError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    DecodeRequest::new(&data).decode(Unstoppable)
}
