//! Filters that change the grid's shape.

use crate::error::BitmapError;
use crate::grid::{Grid, checked_len};

/// Rotate a quarter turn clockwise.
///
/// The output is `height` wide and `width` tall. Input `(row, col)` lands at
/// output `(col, height - 1 - row)`.
pub fn rotate_90(grid: &Grid) -> Grid {
    let h = grid.height();
    Grid::build(h, grid.width(), |row, col| grid.pixel(h - 1 - col, row))
}

/// Rotate `turns` quarter turns clockwise.
///
/// `turns` is reduced with a Euclidean remainder, so `-1` is the same as `3`
/// (one quarter turn counter-clockwise).
pub fn rotate(grid: &Grid, turns: i32) -> Grid {
    match turns.rem_euclid(4) {
        0 => grid.clone(),
        1 => rotate_90(grid),
        2 => rotate_90(&rotate_90(grid)),
        _ => rotate_90(&rotate_90(&rotate_90(grid))),
    }
}

/// Nearest-neighbor upscale by whole factors.
///
/// Output `(row, col)` copies input `(row / y_scale, col / x_scale)`.
pub fn enlarge(grid: &Grid, x_scale: u32, y_scale: u32) -> Result<Grid, BitmapError> {
    if x_scale == 0 || y_scale == 0 {
        return Err(BitmapError::InvalidParameter(format!(
            "enlarge scale must be positive, got {x_scale}x{y_scale}"
        )));
    }
    let (xs, ys) = (x_scale as usize, y_scale as usize);
    let too_large = || BitmapError::DimensionsTooLarge {
        width: (grid.width() as u64).saturating_mul(u64::from(x_scale)),
        height: (grid.height() as u64).saturating_mul(u64::from(y_scale)),
    };
    let w = grid.width().checked_mul(xs).ok_or_else(too_large)?;
    let h = grid.height().checked_mul(ys).ok_or_else(too_large)?;
    checked_len(w, h)?;

    Ok(Grid::build(w, h, |row, col| grid.pixel(row / ys, col / xs)))
}
