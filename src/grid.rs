//! Non-empty, rectangular, row-major pixel grid.
//!
//! Row 0 is the topmost displayed row. Every constructor rejects zero
//! dimensions and ragged rows, so every `Grid` in existence is valid input
//! for the encoder and for every transform.

use imgref::{ImgRef, ImgVec};

use crate::error::BitmapError;
use crate::pixel::Pixel;

/// Decoded image held fully in memory.
#[derive(Clone, Debug)]
pub struct Grid {
    // stride == width, always
    img: ImgVec<Pixel>,
}

impl Grid {
    /// A `width` x `height` grid filled with `fill`.
    pub fn new(width: usize, height: usize, fill: Pixel) -> Result<Self, BitmapError> {
        let len = checked_len(width, height)?;
        Ok(Self::wrap(vec![fill; len], width, height))
    }

    /// Build from a row-major pixel buffer of exactly `width * height` pixels.
    pub fn from_pixels(pixels: Vec<Pixel>, width: usize, height: usize) -> Result<Self, BitmapError> {
        let len = checked_len(width, height)?;
        if pixels.len() != len {
            return Err(BitmapError::PixelCountMismatch {
                expected: len,
                actual: pixels.len(),
            });
        }
        Ok(Self::wrap(pixels, width, height))
    }

    /// Build from nested rows. All rows must have the same, non-zero length.
    pub fn from_rows(rows: Vec<Vec<Pixel>>) -> Result<Self, BitmapError> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);
        let len = checked_len(width, height)?;
        let mut pixels = Vec::with_capacity(len);
        for (row, r) in rows.into_iter().enumerate() {
            if r.len() != width {
                return Err(BitmapError::RaggedRows {
                    row,
                    expected: width,
                    actual: r.len(),
                });
            }
            pixels.extend(r);
        }
        Ok(Self::wrap(pixels, width, height))
    }

    /// Build by evaluating `f(row, col)` for every position, top row first.
    pub fn from_fn(
        width: usize,
        height: usize,
        f: impl FnMut(usize, usize) -> Pixel,
    ) -> Result<Self, BitmapError> {
        checked_len(width, height)?;
        Ok(Self::build(width, height, f))
    }

    /// Like [`Grid::from_fn`] for dimensions the caller already validated.
    pub(crate) fn build(
        width: usize,
        height: usize,
        mut f: impl FnMut(usize, usize) -> Pixel,
    ) -> Self {
        debug_assert!(width > 0 && height > 0);
        let mut pixels = Vec::with_capacity(width * height);
        for row in 0..height {
            for col in 0..width {
                pixels.push(f(row, col));
            }
        }
        Self::wrap(pixels, width, height)
    }

    fn wrap(pixels: Vec<Pixel>, width: usize, height: usize) -> Self {
        Self {
            img: ImgVec::new(pixels, width, height),
        }
    }

    /// Pixels per row.
    #[inline]
    pub fn width(&self) -> usize {
        self.img.width()
    }

    /// Number of rows.
    #[inline]
    pub fn height(&self) -> usize {
        self.img.height()
    }

    /// Pixel at (`row`, `col`), or `None` when out of bounds.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Option<Pixel> {
        if row >= self.height() || col >= self.width() {
            return None;
        }
        Some(self.img.buf()[row * self.width() + col])
    }

    /// Pixel at (`row`, `col`).
    ///
    /// # Panics
    ///
    /// Panics when out of bounds. Transforms only call this with in-range
    /// coordinates.
    #[inline]
    pub fn pixel(&self, row: usize, col: usize) -> Pixel {
        self.row(row)[col]
    }

    /// One row, left to right.
    #[inline]
    pub fn row(&self, row: usize) -> &[Pixel] {
        let w = self.width();
        &self.img.buf()[row * w..(row + 1) * w]
    }

    /// All rows, top to bottom.
    pub fn rows(&self) -> impl ExactSizeIterator<Item = &[Pixel]> + '_ {
        self.img.buf().chunks_exact(self.width())
    }

    /// All pixels in row-major order.
    #[inline]
    pub fn pixels(&self) -> &[Pixel] {
        self.img.buf()
    }

    /// Copy out as nested rows.
    pub fn to_rows(&self) -> Vec<Vec<Pixel>> {
        self.rows().map(<[Pixel]>::to_vec).collect()
    }

    /// Same dimensions, every pixel replaced by `f(pixel)`.
    pub fn map(&self, f: impl Fn(Pixel) -> Pixel) -> Self {
        let pixels = self.pixels().iter().map(|&p| f(p)).collect();
        Self::wrap(pixels, self.width(), self.height())
    }

    /// Borrow as an [`imgref::ImgRef`].
    pub fn as_imgref(&self) -> ImgRef<'_, Pixel> {
        self.img.as_ref()
    }

    /// Unwrap into the backing [`imgref::ImgVec`].
    pub fn into_imgvec(self) -> ImgVec<Pixel> {
        self.img
    }
}

impl PartialEq for Grid {
    fn eq(&self, other: &Self) -> bool {
        self.width() == other.width() && self.pixels() == other.pixels()
    }
}

impl Eq for Grid {}

impl TryFrom<ImgRef<'_, Pixel>> for Grid {
    type Error = BitmapError;

    fn try_from(img: ImgRef<'_, Pixel>) -> Result<Self, Self::Error> {
        let (width, height) = (img.width(), img.height());
        let len = checked_len(width, height)?;
        let mut pixels = Vec::with_capacity(len);
        for row in img.rows() {
            pixels.extend_from_slice(row);
        }
        Ok(Self::wrap(pixels, width, height))
    }
}

impl TryFrom<ImgVec<Pixel>> for Grid {
    type Error = BitmapError;

    fn try_from(img: ImgVec<Pixel>) -> Result<Self, Self::Error> {
        Grid::try_from(img.as_ref())
    }
}

impl From<Grid> for ImgVec<Pixel> {
    fn from(grid: Grid) -> Self {
        grid.img
    }
}

/// Pixel count for a `width` x `height` grid whose buffer fits in memory.
pub(crate) fn checked_len(width: usize, height: usize) -> Result<usize, BitmapError> {
    if width == 0 || height == 0 {
        return Err(BitmapError::InvalidDimensions { width, height });
    }
    let too_large = || BitmapError::DimensionsTooLarge {
        width: width as u64,
        height: height as u64,
    };
    let len = width.checked_mul(height).ok_or_else(too_large)?;
    let bytes = len
        .checked_mul(size_of::<Pixel>())
        .ok_or_else(too_large)?;
    if bytes > isize::MAX as usize {
        return Err(too_large());
    }
    Ok(len)
}
