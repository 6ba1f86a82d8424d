//! # bmpfilters
//!
//! Uncompressed 24-bit Windows bitmap (BMP) decoder and encoder, plus a fixed
//! set of pixel and geometry filters that run on the decoded image.
//!
//! ## Decoding
//!
//! The decoder reads the BITMAPINFOHEADER fields at their fixed offsets,
//! checks the declared file size against the padded pixel-array size, and
//! flips the bottom-up pixel rows into a top-to-bottom [`Grid`]. 32-bit input
//! is accepted; its 4th byte is dropped.
//!
//! ## Encoding
//!
//! The encoder always writes a canonical 54-byte header followed by a
//! bottom-up, 4-byte padded 24-bit pixel array.
//!
//! ## Filters
//!
//! Vignette, clarendon, grayscale, quarter-turn rotation, nearest-neighbor
//! enlarge, high contrast, lighten, darken, and five-color quantization.
//! All are pure functions in [`transform`]; [`Transform`] names one filter
//! together with its parameters. Channel math truncates toward zero and then
//! saturates into `0..=255`.
//!
//! ## Non-Goals
//!
//! - Compressed, palettized, or non-24/32-bit BMP variants
//! - Alpha channels
//! - Streaming decode
//!
//! ## Usage
//!
//! ```no_run
//! use bmpfilters::{Transform, decode_bmp_file, encode_bmp_file};
//!
//! let image = decode_bmp_file("input.bmp")?;
//! let darker = Transform::Darken { factor: 0.5 }.apply(&image)?;
//! encode_bmp_file("output.bmp", &darker)?;
//! # Ok::<(), bmpfilters::BitmapError>(())
//! ```

#![forbid(unsafe_code)]

mod bmp;
mod decode;
mod error;
mod file;
mod grid;
mod limits;
mod pixel;
pub mod transform;

// Re-exports
pub use bmp::{BmpHeader, BmpPermissiveness};
pub use decode::DecodeRequest;
pub use enough::{Stop, Unstoppable};
pub use error::BitmapError;
pub use file::{decode_bmp_file, encode_bmp_file, process_file};
pub use grid::Grid;
pub use limits::Limits;
pub use pixel::{BLACK, BLUE, GREEN, Pixel, RED, WHITE, channel_average, channel_sum};
pub use transform::Transform;

/// Decode BMP bytes with default limits and [`BmpPermissiveness::Standard`].
pub fn decode_bmp(data: &[u8], stop: impl Stop) -> Result<Grid, BitmapError> {
    DecodeRequest::new(data).decode(stop)
}

/// Decode BMP bytes, rejecting images that exceed `limits`.
pub fn decode_bmp_with_limits(
    data: &[u8],
    limits: &Limits,
    stop: impl Stop,
) -> Result<Grid, BitmapError> {
    DecodeRequest::new(data).with_limits(limits).decode(stop)
}

/// Encode a grid as a 24-bit BMP file image.
pub fn encode_bmp(grid: &Grid, stop: impl Stop) -> Result<Vec<u8>, BitmapError> {
    bmp::encode(grid, &stop)
}
