use std::path::Path;

use enough::{Stop, Unstoppable};

use crate::bmp;
use crate::error::BitmapError;
use crate::grid::Grid;

/// In-memory BMP encode. Output is always 24-bit, bottom-up, uncompressed.
#[derive(Clone, Copy, Debug, Default)]
pub struct EncodeRequest {
    _private: (),
}

impl EncodeRequest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn encode(self, grid: &Grid, stop: impl Stop) -> Result<Vec<u8>, BitmapError> {
        bmp::encode(grid, &stop)
    }
}

/// Encode a grid and write it to `path`, creating or truncating the file.
pub fn encode_file(path: impl AsRef<Path>, grid: &Grid) -> Result<(), BitmapError> {
    let path = path.as_ref();
    let bytes = EncodeRequest::new().encode(grid, Unstoppable)?;
    std::fs::write(path, bytes).map_err(|source| BitmapError::Io {
        path: path.to_path_buf(),
        source,
    })
}
