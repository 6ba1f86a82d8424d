//! 24-bit BMP decoder and encoder (internal).
//!
//! Use top-level [`crate::decode_bmp`], [`crate::encode_bmp`], etc.

mod decode;
mod encode;

pub use decode::{BmpHeader, BmpPermissiveness};

use crate::error::BitmapError;
use crate::grid::Grid;
use crate::limits::Limits;
use enough::Stop;

/// 14-byte file header + 40-byte BITMAPINFOHEADER.
pub(crate) const HEADER_SIZE: usize = 54;
pub(crate) const INFO_HEADER_SIZE: u32 = 40;
/// 72 DPI expressed in pixels per meter.
pub(crate) const RESOLUTION_PPM: u32 = 2835;

/// Bytes appended to a row of `row_bytes` so the row is a multiple of 4.
#[inline]
pub(crate) fn row_padding(row_bytes: u64) -> u64 {
    (4 - row_bytes % 4) % 4
}

/// Decode BMP data into a top-to-bottom grid.
pub(crate) fn decode(
    data: &[u8],
    limits: Option<&Limits>,
    permissiveness: BmpPermissiveness,
    stop: &dyn Stop,
) -> Result<Grid, BitmapError> {
    let header = BmpHeader::parse(data)?;
    header.validate(data, permissiveness)?;
    check_limits(limits, &header)?;
    stop.check()?;
    decode::decode_pixels(data, &header, stop)
}

fn check_limits(limits: Option<&Limits>, header: &BmpHeader) -> Result<(), BitmapError> {
    let Some(limits) = limits else {
        return Ok(());
    };
    let (width, height) = (u64::from(header.width), u64::from(header.height));
    limits.check(width, height)?;
    // decoded pixels are 3 bytes regardless of source depth
    limits.check_memory(width.saturating_mul(height).saturating_mul(3))
}

/// Encode a grid as 24-bit BMP.
pub(crate) fn encode(grid: &Grid, stop: &dyn Stop) -> Result<Vec<u8>, BitmapError> {
    encode::encode_bmp(grid, stop)
}
