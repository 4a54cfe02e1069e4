//! Stateless grid-to-grid filters.
//!
//! Every filter borrows its input and returns a fresh grid, so a rejected
//! parameter leaves the caller holding the untouched original.

mod geometry;
mod tone;

pub use geometry::{enlarge, enlarge_within, rotate_90, rotate_degrees, rotate_quarter_turns};
pub use tone::{clarendon, darken, grayscale, high_contrast, lighten, reduce_palette, vignette};

use crate::error::BitmapError;
use crate::grid::Grid;
use crate::limits::Limits;

/// The closed set of available filters, with their parameters.
#[non_exhaustive]
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Filter {
    /// Darken toward the corners.
    Vignette,
    /// Lighten light pixels and darken dark ones by `scale` in `[0, 1]`.
    Clarendon { scale: f64 },
    /// Channel average on every channel.
    Grayscale,
    /// One quarter turn clockwise.
    Rotate90,
    /// `turns` quarter turns clockwise.
    Rotate { turns: i64 },
    /// Nearest-neighbor upscale by positive integer factors.
    Enlarge { x_scale: i64, y_scale: i64 },
    /// Pure black and white.
    HighContrast,
    Lighten { scale: f64 },
    Darken { scale: f64 },
    /// Black, white, red, green and blue only.
    Palette,
}

/// Parameters that accompany a numeric menu code.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FilterParams {
    pub scale: Option<f64>,
    pub turns: Option<i64>,
    pub x_scale: Option<i64>,
    pub y_scale: Option<i64>,
}

fn missing(filter: &str, param: &str) -> BitmapError {
    BitmapError::InvalidParameter(format!("{filter} requires `{param}`"))
}

impl Filter {
    /// Run the filter.
    pub fn apply(&self, grid: &Grid) -> Result<Grid, BitmapError> {
        self.apply_with_limits(grid, &Limits::default())
    }

    /// Run the filter, refusing to produce a grid `limits` does not admit.
    pub fn apply_with_limits(&self, grid: &Grid, limits: &Limits) -> Result<Grid, BitmapError> {
        if self.transposes(grid) {
            limits.check_dims(grid.height(), grid.width())?;
        }
        let out = match *self {
            Self::Vignette => vignette(grid),
            Self::Clarendon { scale } => clarendon(grid, scale)?,
            Self::Grayscale => grayscale(grid),
            Self::Rotate90 => rotate_90(grid),
            Self::Rotate { turns } => rotate_quarter_turns(grid, turns),
            Self::Enlarge { x_scale, y_scale } => enlarge_within(grid, x_scale, y_scale, limits)?,
            Self::HighContrast => high_contrast(grid),
            Self::Lighten { scale } => lighten(grid, scale)?,
            Self::Darken { scale } => darken(grid, scale)?,
            Self::Palette => reduce_palette(grid),
        };
        log::debug!(
            "{}: {}x{} -> {}x{}",
            self.name(),
            grid.width(),
            grid.height(),
            out.width(),
            out.height()
        );
        Ok(out)
    }

    /// Whether the output swaps the input's width and height.
    fn transposes(&self, grid: &Grid) -> bool {
        let odd_turns = match *self {
            Self::Rotate90 => true,
            Self::Rotate { turns } => turns.rem_euclid(2) == 1,
            _ => false,
        };
        odd_turns && grid.width() != grid.height()
    }

    /// Stable lowercase name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Vignette => "vignette",
            Self::Clarendon { .. } => "clarendon",
            Self::Grayscale => "grayscale",
            Self::Rotate90 => "rotate-90",
            Self::Rotate { .. } => "rotate",
            Self::Enlarge { .. } => "enlarge",
            Self::HighContrast => "high-contrast",
            Self::Lighten { .. } => "lighten",
            Self::Darken { .. } => "darken",
            Self::Palette => "palette",
        }
    }

    /// Menu number, 1 through 10.
    pub fn menu_code(&self) -> u8 {
        match self {
            Self::Vignette => 1,
            Self::Clarendon { .. } => 2,
            Self::Grayscale => 3,
            Self::Rotate90 => 4,
            Self::Rotate { .. } => 5,
            Self::Enlarge { .. } => 6,
            Self::HighContrast => 7,
            Self::Lighten { .. } => 8,
            Self::Darken { .. } => 9,
            Self::Palette => 10,
        }
    }

    /// Select a filter by menu number, taking whatever parameters it needs
    /// from `params`. Parameter ranges are checked when the filter is applied.
    pub fn from_menu_code(code: u8, params: &FilterParams) -> Result<Self, BitmapError> {
        let scale = |name: &'static str| params.scale.ok_or_else(|| missing(name, "scale"));
        Ok(match code {
            1 => Self::Vignette,
            2 => Self::Clarendon {
                scale: scale("clarendon")?,
            },
            3 => Self::Grayscale,
            4 => Self::Rotate90,
            5 => Self::Rotate {
                turns: params.turns.ok_or_else(|| missing("rotate", "turns"))?,
            },
            6 => Self::Enlarge {
                x_scale: params.x_scale.ok_or_else(|| missing("enlarge", "x_scale"))?,
                y_scale: params.y_scale.ok_or_else(|| missing("enlarge", "y_scale"))?,
            },
            7 => Self::HighContrast,
            8 => Self::Lighten {
                scale: scale("lighten")?,
            },
            9 => Self::Darken {
                scale: scale("darken")?,
            },
            10 => Self::Palette,
            other => {
                return Err(BitmapError::InvalidParameter(format!(
                    "menu code {other} out of range 1-10"
                )));
            }
        })
    }
}
