//! BMP encoder: uncompressed 24-bit BMP.

use crate::bmp::{HEADER_SIZE, INFO_HEADER_SIZE, RESOLUTION_PPM, row_padding};
use crate::error::BitmapError;
use crate::grid::Grid;
use enough::Stop;

/// Encode a grid as a bottom-up 24-bit BMP.
pub(crate) fn encode_bmp(grid: &Grid, stop: &dyn Stop) -> Result<Vec<u8>, BitmapError> {
    let w = grid.width();
    let h = grid.height();
    let too_large = BitmapError::DimensionsTooLarge {
        width: w as u64,
        height: h as u64,
    };

    let row_bytes = (w as u64) * 3;
    let pad_bytes = row_padding(row_bytes);
    let pixel_data_size = (row_bytes + pad_bytes).saturating_mul(h as u64);
    let file_size = pixel_data_size.saturating_add(HEADER_SIZE as u64);
    // every size lands in a 32-bit header field, dimensions in signed ones
    if file_size > u64::from(u32::MAX) || w > i32::MAX as usize || h > i32::MAX as usize {
        return Err(too_large);
    }

    stop.check()?;

    let mut out = Vec::with_capacity(file_size as usize);
    write_bmp_header(
        &mut out,
        file_size as u32,
        pixel_data_size as u32,
        w as i32,
        h as i32,
    );

    for row in (0..h).rev() {
        if row % 16 == 0 {
            stop.check()?;
        }
        for px in grid.row(row) {
            out.push(px.b);
            out.push(px.g);
            out.push(px.r);
        }
        out.extend(std::iter::repeat_n(0u8, pad_bytes as usize));
    }

    tracing::debug!(width = w, height = h, bytes = out.len(), "encoded BMP");
    Ok(out)
}

fn write_bmp_header(out: &mut Vec<u8>, file_size: u32, pixel_data_size: u32, width: i32, height: i32) {
    // File header (14 bytes)
    out.extend_from_slice(b"BM");
    out.extend_from_slice(&file_size.to_le_bytes());
    out.extend_from_slice(&[0u8; 4]); // reserved
    out.extend_from_slice(&(HEADER_SIZE as u32).to_le_bytes()); // data offset

    // DIB header (BITMAPINFOHEADER, 40 bytes)
    out.extend_from_slice(&INFO_HEADER_SIZE.to_le_bytes());
    out.extend_from_slice(&width.to_le_bytes());
    out.extend_from_slice(&height.to_le_bytes()); // positive = bottom-up
    out.extend_from_slice(&1u16.to_le_bytes()); // planes
    out.extend_from_slice(&24u16.to_le_bytes());
    out.extend_from_slice(&0u32.to_le_bytes()); // compression
    out.extend_from_slice(&pixel_data_size.to_le_bytes());
    out.extend_from_slice(&RESOLUTION_PPM.to_le_bytes());
    out.extend_from_slice(&RESOLUTION_PPM.to_le_bytes());
    out.extend_from_slice(&0u32.to_le_bytes()); // colors used
    out.extend_from_slice(&0u32.to_le_bytes()); // important colors
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pixel::Pixel;

    fn le_u32(b: &[u8], at: usize) -> u32 {
        u32::from_le_bytes([b[at], b[at + 1], b[at + 2], b[at + 3]])
    }

    fn le_u16(b: &[u8], at: usize) -> u16 {
        u16::from_le_bytes([b[at], b[at + 1]])
    }

    #[test]
    fn header_is_canonical() {
        let grid = Grid::new(5, 2, Pixel::new(1, 2, 3)).unwrap();
        let out = encode_bmp(&grid, &enough::Unstoppable).unwrap();
        // 5 * 3 = 15 bytes per row, 1 byte padding
        assert_eq!(out.len(), 54 + 16 * 2);
        assert_eq!(&out[0..2], b"BM");
        assert_eq!(le_u32(&out, 2), 86);
        assert_eq!(le_u32(&out, 6), 0);
        assert_eq!(le_u32(&out, 10), 54);
        assert_eq!(le_u32(&out, 14), 40);
        assert_eq!(le_u32(&out, 18), 5);
        assert_eq!(le_u32(&out, 22), 2);
        assert_eq!(le_u16(&out, 26), 1);
        assert_eq!(le_u16(&out, 28), 24);
        assert_eq!(le_u32(&out, 30), 0);
        assert_eq!(le_u32(&out, 34), 32);
        assert_eq!(le_u32(&out, 38), 2835);
        assert_eq!(le_u32(&out, 42), 2835);
        assert_eq!(le_u32(&out, 46), 0);
        assert_eq!(le_u32(&out, 50), 0);
    }

    #[test]
    fn rows_are_bottom_up_bgr_with_zero_padding() {
        let grid = Grid::from_rows(vec![
            vec![Pixel::new(10, 20, 30)],
            vec![Pixel::new(40, 50, 60)],
        ])
        .unwrap();
        let out = encode_bmp(&grid, &enough::Unstoppable).unwrap();
        assert_eq!(&out[54..58], &[60, 50, 40, 0]);
        assert_eq!(&out[58..62], &[30, 20, 10, 0]);
    }

    #[test]
    fn no_padding_when_row_is_aligned() {
        let grid = Grid::new(4, 1, Pixel::new(9, 9, 9)).unwrap();
        let out = encode_bmp(&grid, &enough::Unstoppable).unwrap();
        assert_eq!(out.len(), 54 + 12);
    }
}
