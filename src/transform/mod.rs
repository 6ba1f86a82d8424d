//! Grid-to-grid filters.
//!
//! Every filter is pure: it borrows its input and returns a freshly
//! allocated [`Grid`]. Filters never perform I/O.

mod geometry;
mod tone;

pub use geometry::{enlarge, rotate, rotate_90};
pub use tone::{clarendon, darken, five_color, grayscale, high_contrast, lighten, vignette};

use crate::error::BitmapError;
use crate::grid::Grid;

/// One of the fixed set of filters, with its parameters.
#[non_exhaustive]
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Transform {
    /// Dark corners.
    Vignette,
    /// Lights lighter, darks darker.
    Clarendon { factor: f64 },
    Grayscale,
    /// One quarter turn clockwise.
    Rotate90,
    /// `turns` quarter turns clockwise; negative turns go counter-clockwise.
    Rotate { turns: i32 },
    /// Nearest-neighbor upscale.
    Enlarge { x_scale: u32, y_scale: u32 },
    /// Black and white only.
    HighContrast,
    Lighten { factor: f64 },
    Darken { factor: f64 },
    /// Black, white, red, green and blue only.
    FiveColor,
}

impl Transform {
    /// Run the filter on `grid`.
    pub fn apply(&self, grid: &Grid) -> Result<Grid, BitmapError> {
        tracing::trace!(
            transform = self.name(),
            width = grid.width(),
            height = grid.height(),
            "applying transform"
        );
        Ok(match *self {
            Transform::Vignette => vignette(grid),
            Transform::Clarendon { factor } => clarendon(grid, factor)?,
            Transform::Grayscale => grayscale(grid),
            Transform::Rotate90 => rotate_90(grid),
            Transform::Rotate { turns } => rotate(grid, turns),
            Transform::Enlarge { x_scale, y_scale } => enlarge(grid, x_scale, y_scale)?,
            Transform::HighContrast => high_contrast(grid),
            Transform::Lighten { factor } => lighten(grid, factor)?,
            Transform::Darken { factor } => darken(grid, factor)?,
            Transform::FiveColor => five_color(grid),
        })
    }

    /// Short lowercase name, e.g. `"vignette"`.
    pub fn name(&self) -> &'static str {
        match self {
            Transform::Vignette => "vignette",
            Transform::Clarendon { .. } => "clarendon",
            Transform::Grayscale => "grayscale",
            Transform::Rotate90 => "rotate90",
            Transform::Rotate { .. } => "rotate",
            Transform::Enlarge { .. } => "enlarge",
            Transform::HighContrast => "high-contrast",
            Transform::Lighten { .. } => "lighten",
            Transform::Darken { .. } => "darken",
            Transform::FiveColor => "five-color",
        }
    }

    /// Whether the output may have different dimensions than the input.
    pub fn changes_shape(&self) -> bool {
        matches!(
            self,
            Transform::Rotate90 | Transform::Rotate { .. } | Transform::Enlarge { .. }
        )
    }
}

impl std::fmt::Display for Transform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match *self {
            Transform::Clarendon { factor }
            | Transform::Lighten { factor }
            | Transform::Darken { factor } => write!(f, "{}({factor})", self.name()),
            Transform::Rotate { turns } => write!(f, "{}({turns})", self.name()),
            Transform::Enlarge { x_scale, y_scale } => {
                write!(f, "{}({x_scale}x{y_scale})", self.name())
            }
            _ => f.write_str(self.name()),
        }
    }
}
