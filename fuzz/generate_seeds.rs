#!/usr/bin/env -S cargo +nightly -Zscript
//! Generate seed corpus files for fuzzing.
//! Run: cargo +nightly -Zscript fuzz/generate_seeds.rs

fn bmp(width: i32, height: i32, bpp: u16, pixel: &[u8]) -> Vec<u8> {
    let scanline = width as usize * usize::from(bpp / 8);
    let padding = (4 - scanline % 4) % 4;
    let size = 54 + (scanline + padding) * height as usize;
    let mut out = vec![0u8; 54];
    out[0] = b'B';
    out[1] = b'M';
    out[2..6].copy_from_slice(&(size as u32).to_le_bytes()); // file size
    out[10..14].copy_from_slice(&54u32.to_le_bytes()); // data offset
    out[14..18].copy_from_slice(&40u32.to_le_bytes()); // DIB header size
    out[18..22].copy_from_slice(&width.to_le_bytes());
    out[22..26].copy_from_slice(&height.to_le_bytes());
    out[26..28].copy_from_slice(&1u16.to_le_bytes()); // planes
    out[28..30].copy_from_slice(&bpp.to_le_bytes());
    for _ in 0..height {
        for _ in 0..width {
            out.extend_from_slice(pixel);
        }
        out.extend(std::iter::repeat_n(0u8, padding));
    }
    out
}

fn main() {
    use std::fs;
    let dir = "fuzz/corpus/fuzz_decode";
    fs::create_dir_all(dir).unwrap();

    fs::write(format!("{dir}/bmp_1x1.bmp"), bmp(1, 1, 24, &[0xff, 0, 0])).unwrap();
    fs::write(format!("{dir}/bmp_5x2.bmp"), bmp(5, 2, 24, &[1, 2, 3])).unwrap();
    fs::write(format!("{dir}/bmp_3x3_32.bmp"), bmp(3, 3, 32, &[1, 2, 3, 4])).unwrap();

    // Truncated/malformed seeds for edge coverage
    let mut wrong_size = bmp(2, 2, 24, &[9, 9, 9]);
    wrong_size[2] ^= 0x01;
    fs::write(format!("{dir}/wrong_size.bmp"), wrong_size).unwrap();
    let mut top_down = bmp(2, 2, 24, &[7, 7, 7]);
    top_down[22..26].copy_from_slice(&(-2i32).to_le_bytes());
    fs::write(format!("{dir}/top_down.bmp"), top_down).unwrap();
    fs::write(format!("{dir}/empty.bin"), b"").unwrap();
    fs::write(format!("{dir}/bm_short.bin"), b"BM\x00\x00").unwrap();

    println!("Generated seed corpus in {dir}/");
}
