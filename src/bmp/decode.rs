//! BMP decoder for uncompressed 24-bit and 32-bit bottom-up bitmaps.

use enough::Stop;

use super::{HEADER_SIZE, row_padding};
use crate::error::BitmapError;
use crate::grid::Grid;
use crate::pixel::{BLACK, Pixel};

// ── Permissiveness ──────────────────────────────────────────────────

/// Controls how strictly the BMP decoder validates input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BmpPermissiveness {
    /// Also require the `BM` magic, a single color plane, an uncompressed
    /// pixel array (or 32-bit bitfields with B, G, R, X masks), and a
    /// declared file size equal to the input length.
    Strict,

    /// Default behavior. The declared file size must equal the pixel-array
    /// offset plus the padded pixel-array size.
    #[default]
    Standard,

    /// Ignore the declared file size. Pixel data must still be present.
    Permissive,
}

// ── Cursor for reading from &[u8] ───────────────────────────────────

struct Cursor<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> Cursor<'a> {
    fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    fn set_position(&mut self, pos: usize) -> Result<(), BitmapError> {
        if pos > self.data.len() {
            return Err(BitmapError::UnexpectedEof);
        }
        self.pos = pos;
        Ok(())
    }

    fn skip(&mut self, n: usize) -> Result<(), BitmapError> {
        self.read_slice(n).map(|_| ())
    }

    fn read_slice(&mut self, n: usize) -> Result<&'a [u8], BitmapError> {
        let end = self.pos.checked_add(n).ok_or(BitmapError::UnexpectedEof)?;
        let slice = self
            .data
            .get(self.pos..end)
            .ok_or(BitmapError::UnexpectedEof)?;
        self.pos = end;
        Ok(slice)
    }

    fn read_fixed_bytes<const N: usize>(&mut self) -> Result<[u8; N], BitmapError> {
        let mut buf = [0u8; N];
        buf.copy_from_slice(self.read_slice(N)?);
        Ok(buf)
    }

    fn get_u16_le(&mut self) -> Result<u16, BitmapError> {
        self.read_fixed_bytes().map(u16::from_le_bytes)
    }

    fn get_u32_le(&mut self) -> Result<u32, BitmapError> {
        self.read_fixed_bytes().map(u32::from_le_bytes)
    }

    fn get_i32_le(&mut self) -> Result<i32, BitmapError> {
        self.read_fixed_bytes().map(i32::from_le_bytes)
    }
}

// ── Parsed BMP header info ──────────────────────────────────────────

/// Header fields of a BMP file, as read from its first 54 bytes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BmpHeader {
    pub magic: [u8; 2],
    /// Declared total file size (offset 2).
    pub file_size: u32,
    /// Start of the pixel array (offset 10).
    pub data_offset: u32,
    pub width: u32,
    pub height: u32,
    pub planes: u16,
    pub bits_per_pixel: u16,
    pub compression: u32,
}

impl BmpHeader {
    /// Parse the header without touching pixel data.
    ///
    /// Fails on truncated input, non-positive dimensions, and any depth
    /// other than 24 or 32 bits per pixel.
    pub fn parse(data: &[u8]) -> Result<Self, BitmapError> {
        if data.len() < HEADER_SIZE {
            return Err(BitmapError::UnexpectedEof);
        }
        let mut c = Cursor::new(data);

        let magic = c.read_fixed_bytes::<2>()?;
        let file_size = c.get_u32_le()?;
        c.skip(4)?; // reserved
        let data_offset = c.get_u32_le()?;
        c.skip(4)?; // info header size
        let width = c.get_i32_le()?;
        let height = c.get_i32_le()?;
        let planes = c.get_u16_le()?;
        let bits_per_pixel = c.get_u16_le()?;
        let compression = c.get_u32_le()?;

        if width <= 0 || height <= 0 {
            return Err(BitmapError::InvalidHeader(format!(
                "unsupported dimensions {width}x{height}"
            )));
        }
        if bits_per_pixel != 24 && bits_per_pixel != 32 {
            return Err(BitmapError::UnsupportedVariant(format!(
                "{bits_per_pixel} bits per pixel"
            )));
        }

        Ok(Self {
            magic,
            file_size,
            data_offset,
            width: width as u32,
            height: height as u32,
            planes,
            bits_per_pixel,
            compression,
        })
    }

    /// Bytes per stored pixel (3 or 4).
    pub fn bytes_per_pixel(&self) -> usize {
        usize::from(self.bits_per_pixel / 8)
    }

    /// Pixel bytes per row, before padding.
    pub fn scanline_bytes(&self) -> u64 {
        u64::from(self.width) * u64::from(self.bits_per_pixel / 8)
    }

    /// Zero bytes after each row.
    pub fn padding(&self) -> u64 {
        row_padding(self.scanline_bytes())
    }

    /// Pixel-array offset plus padded pixel-array size.
    ///
    /// Saturates instead of overflowing; a saturated value never matches a
    /// 32-bit declared size.
    pub fn expected_file_size(&self) -> u64 {
        (self.scanline_bytes() + self.padding())
            .saturating_mul(u64::from(self.height))
            .saturating_add(u64::from(self.data_offset))
    }

    pub(crate) fn validate(
        &self,
        data: &[u8],
        permissiveness: BmpPermissiveness,
    ) -> Result<(), BitmapError> {
        let data_len = data.len();
        if permissiveness == BmpPermissiveness::Strict {
            if &self.magic != b"BM" {
                return Err(BitmapError::UnrecognizedFormat);
            }
            if self.planes != 1 {
                return Err(BitmapError::InvalidHeader(format!(
                    "{} color planes",
                    self.planes
                )));
            }
            let bitfields_ok = self.compression == 3 && self.bits_per_pixel == 32;
            if self.compression != 0 && !bitfields_ok {
                return Err(BitmapError::UnsupportedVariant(format!(
                    "compression method {}",
                    self.compression
                )));
            }
            if bitfields_ok {
                // Pixels are always read as B, G, R, X.
                let masks = read_rgb_masks(data)?;
                if masks != BGRX_MASKS {
                    return Err(BitmapError::UnsupportedVariant(format!(
                        "bitfield masks {:#010x}/{:#010x}/{:#010x}",
                        masks[0], masks[1], masks[2]
                    )));
                }
            }
            if self.file_size as usize != data_len {
                return Err(BitmapError::InvalidHeader(format!(
                    "declared file size {} but input is {data_len} bytes",
                    self.file_size
                )));
            }
        }

        let declared = u64::from(self.file_size);
        let expected = self.expected_file_size();
        if declared != expected {
            if permissiveness == BmpPermissiveness::Permissive {
                tracing::warn!(declared, expected, "ignoring BMP file size mismatch");
            } else {
                return Err(BitmapError::FileSizeMismatch { declared, expected });
            }
        }
        Ok(())
    }
}

/// Red, green and blue masks of a 32-bit B, G, R, X pixel.
const BGRX_MASKS: [u32; 3] = [0x00FF_0000, 0x0000_FF00, 0x0000_00FF];

/// Bitfield masks stored right after the 40-byte info header.
fn read_rgb_masks(data: &[u8]) -> Result<[u32; 3], BitmapError> {
    let mut c = Cursor::new(data);
    c.set_position(HEADER_SIZE)?;
    Ok([c.get_u32_le()?, c.get_u32_le()?, c.get_u32_le()?])
}

// ── Pixel array ─────────────────────────────────────────────────────

/// Read the bottom-up pixel array into a top-to-bottom grid.
pub(crate) fn decode_pixels(
    data: &[u8],
    header: &BmpHeader,
    stop: &dyn Stop,
) -> Result<Grid, BitmapError> {
    let w = header.width as usize;
    let h = header.height as usize;
    let bpp = header.bytes_per_pixel();
    let scanline = w.checked_mul(bpp).ok_or(BitmapError::DimensionsTooLarge {
        width: u64::from(header.width),
        height: u64::from(header.height),
    })?;
    let padding = header.padding() as usize;

    // Reject truncated input before allocating the output.
    if header.expected_file_size() > data.len() as u64 {
        return Err(BitmapError::UnexpectedEof);
    }

    let mut pixels = vec![BLACK; w * h];
    let mut cursor = Cursor::new(data);
    cursor.set_position(header.data_offset as usize)?;

    for file_row in 0..h {
        if file_row % 16 == 0 {
            stop.check()?;
        }
        let src = cursor.read_slice(scanline)?;
        cursor.skip(padding)?;

        // The file's first row is the bottom of the image.
        let row = h - 1 - file_row;
        let dst = &mut pixels[row * w..(row + 1) * w];
        for (px, bgr) in dst.iter_mut().zip(src.chunks_exact(bpp)) {
            // 4th byte of 32-bit pixels is dropped
            *px = Pixel::new(bgr[2], bgr[1], bgr[0]);
        }
    }

    tracing::debug!(
        width = w,
        height = h,
        bits_per_pixel = header.bits_per_pixel,
        "decoded BMP"
    );
    Grid::from_pixels(pixels, w, h)
}
