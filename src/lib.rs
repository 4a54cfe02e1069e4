//! # bmpfx
//!
//! Uncompressed BMP decoder and encoder with a set of simple pixel filters.
//!
//! ## Format
//!
//! The codec targets one canonical subformat: uncompressed, bottom-up, 24-bit
//! BGR with each scanline zero-padded to a multiple of 4 bytes. Decoding also
//! accepts 32-bit files (the 4th byte is dropped). Encoding always writes
//! 24-bit with a 54-byte header.
//!
//! A decoded file must declare a file size equal to
//! `pixel_offset + (row_bytes + padding) * height`; anything else is rejected
//! with [`BitmapError::SizeMismatch`].
//!
//! ## Filters
//!
//! Vignette, clarendon, grayscale, high contrast, lighten, darken, palette
//! reduction, quarter-turn rotation and nearest-neighbor enlargement. See
//! [`filter`] and [`Filter`]. Scaled channel values saturate to `[0, 255]`.
//!
//! ## Non-Goals
//!
//! - Compression (RLE, bitfields), palettes, bit depths below 24
//! - Top-down row order
//! - Alpha output
//!
//! ## Usage
//!
//! ```no_run
//! use bmpfx::{Filter, decode_file, encode_file};
//!
//! let grid = decode_file("photo.bmp")?;
//! let gray = Filter::Grayscale.apply(&grid)?;
//! encode_file("photo_gray.bmp", &gray)?;
//! # Ok::<(), bmpfx::BitmapError>(())
//! ```

#![forbid(unsafe_code)]

mod bmp;
mod decode;
mod encode;
mod error;
pub mod filter;
mod grid;
mod info;
mod limits;
mod pixel;

// Re-exports
pub use decode::{DecodeRequest, decode_file};
pub use encode::{EncodeRequest, encode_file};
pub use enough::{Stop, Unstoppable};
pub use error::BitmapError;
pub use filter::{Filter, FilterParams};
pub use grid::Grid;
pub use info::BmpInfo;
pub use limits::Limits;
pub use pixel::{BLACK, Pixel, WHITE, saturate};
