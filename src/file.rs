//! Path-based entry points.

use std::fs;
use std::io::Write;
use std::path::Path;

use enough::Unstoppable;

use crate::error::BitmapError;
use crate::grid::Grid;
use crate::transform::Transform;

/// Read and decode a BMP file with default settings.
pub fn decode_bmp_file(path: impl AsRef<Path>) -> Result<Grid, BitmapError> {
    let path = path.as_ref();
    let data = fs::read(path)?;
    tracing::debug!(path = %path.display(), bytes = data.len(), "read BMP file");
    crate::decode_bmp(&data, Unstoppable)
}

/// Encode `grid` and write it to `path`, replacing any existing file.
///
/// Nothing is created when encoding fails. If the destination opens but the
/// write fails, the partially written file is removed.
pub fn encode_bmp_file(path: impl AsRef<Path>, grid: &Grid) -> Result<(), BitmapError> {
    let path = path.as_ref();
    let bytes = crate::encode_bmp(grid, Unstoppable)?;
    let mut file = fs::File::create(path)?;
    if let Err(e) = file.write_all(&bytes) {
        drop(file);
        if fs::remove_file(path).is_ok() {
            tracing::warn!(path = %path.display(), "removed partial BMP output");
        }
        return Err(e.into());
    }
    tracing::debug!(path = %path.display(), bytes = bytes.len(), "wrote BMP file");
    Ok(())
}

/// Decode `input`, apply `transform`, encode to `output`.
pub fn process_file(
    input: impl AsRef<Path>,
    output: impl AsRef<Path>,
    transform: &Transform,
) -> Result<(), BitmapError> {
    let source = decode_bmp_file(input)?;
    let result = transform.apply(&source)?;
    encode_bmp_file(output, &result)
}
