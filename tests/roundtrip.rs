use bmpfilters::*;
use enough::Unstoppable;

fn pixel(r: u8, g: u8, b: u8) -> Pixel {
    Pixel::new(r, g, b)
}

#[test]
fn bmp_roundtrip_rgb8() {
    let grid = Grid::from_rows(vec![
        vec![pixel(255, 0, 0), pixel(0, 255, 0), pixel(0, 0, 255)], // row 0: R G B
        vec![pixel(128, 128, 128), pixel(64, 64, 64), pixel(0, 0, 0)], // row 1: gray dark black
    ])
    .unwrap();

    let encoded = encode_bmp(&grid, Unstoppable).unwrap();
    assert_eq!(&encoded[0..2], b"BM");

    let decoded = decode_bmp(&encoded, Unstoppable).unwrap();
    assert_eq!(decoded.width(), 3);
    assert_eq!(decoded.height(), 2);
    assert_eq!(decoded, grid);
}

#[test]
fn bmp_roundtrip_width_four_has_no_padding() {
    let grid = Grid::from_fn(4, 1, |_, col| pixel(col as u8 * 60, 1, 2)).unwrap();
    let encoded = encode_bmp(&grid, Unstoppable).unwrap();
    assert_eq!(encoded.len(), 54 + 12);
    assert_eq!(decode_bmp(&encoded, Unstoppable).unwrap(), grid);
}

#[test]
fn bmp_roundtrip_width_five_has_one_byte_padding() {
    let grid = Grid::from_fn(5, 1, |_, col| pixel(col as u8, 200, 100)).unwrap();
    let encoded = encode_bmp(&grid, Unstoppable).unwrap();
    // 15 pixel bytes + 1 padding byte
    assert_eq!(encoded.len(), 54 + 16);
    assert_eq!(encoded[54 + 15], 0);
    assert_eq!(decode_bmp(&encoded, Unstoppable).unwrap(), grid);
}

#[test]
fn bmp_header_probe_matches_encoder_output() {
    let grid = Grid::new(7, 3, pixel(1, 2, 3)).unwrap();
    let encoded = encode_bmp(&grid, Unstoppable).unwrap();
    let header = BmpHeader::parse(&encoded).unwrap();
    assert_eq!(header.width, 7);
    assert_eq!(header.height, 3);
    assert_eq!(header.bits_per_pixel, 24);
    assert_eq!(header.padding(), 3);
    assert_eq!(header.expected_file_size(), encoded.len() as u64);
    assert_eq!(header.file_size as usize, encoded.len());
}

#[test]
fn strict_mode_accepts_encoder_output() {
    let grid = Grid::new(3, 3, pixel(9, 8, 7)).unwrap();
    let encoded = encode_bmp(&grid, Unstoppable).unwrap();
    let decoded = DecodeRequest::new(&encoded)
        .with_permissiveness(BmpPermissiveness::Strict)
        .decode(Unstoppable)
        .unwrap();
    assert_eq!(decoded, grid);
}

#[test]
fn transformed_image_roundtrips() {
    let grid = Grid::from_fn(6, 4, |row, col| pixel(row as u8 * 40, col as u8 * 30, 90)).unwrap();
    for t in [
        Transform::Vignette,
        Transform::Rotate90,
        Transform::Enlarge {
            x_scale: 3,
            y_scale: 2,
        },
        Transform::FiveColor,
    ] {
        let out = t.apply(&grid).unwrap();
        let encoded = encode_bmp(&out, Unstoppable).unwrap();
        assert_eq!(decode_bmp(&encoded, Unstoppable).unwrap(), out, "{t}");
    }
}
