//! Per-pixel filters. Output dimensions always equal input dimensions.
//!
//! Channel math runs in `f64` where a factor is involved and converts back
//! with truncation toward zero, saturating into `0..=255`.

use crate::error::BitmapError;
use crate::grid::Grid;
use crate::pixel::{
    BLACK, BLUE, GREEN, Pixel, RED, WHITE, channel_average, channel_sum, map_channels,
    truncate_channel,
};

/// Darken corners in proportion to their distance from the center.
///
/// The center is `(height / 2, width / 2)` in integer division, and the
/// scale is `(height - distance) / height`. Far corners of wide images get a
/// negative scale and clamp to black.
pub fn vignette(grid: &Grid) -> Grid {
    let (w, h) = (grid.width(), grid.height());
    let (cx, cy) = ((w / 2) as f64, (h / 2) as f64);
    let hf = h as f64;
    Grid::build(w, h, |row, col| {
        let dx = col as f64 - cx;
        let dy = row as f64 - cy;
        let distance = (dx * dx + dy * dy).sqrt();
        let scale = (hf - distance) / hf;
        map_channels(grid.pixel(row, col), |c| truncate_channel(f64::from(c) * scale))
    })
}

/// Push light pixels lighter and dark pixels darker.
///
/// Pixels whose integer channel average is at least 170 are lightened by
/// `factor`, those below 90 are darkened by it, the rest are kept.
pub fn clarendon(grid: &Grid, factor: f64) -> Result<Grid, BitmapError> {
    check_factor("clarendon", factor)?;
    Ok(grid.map(|p| match channel_average(p) {
        170.. => lighten_pixel(p, factor),
        0..90 => darken_pixel(p, factor),
        _ => p,
    }))
}

/// Replace every channel by the integer channel average.
pub fn grayscale(grid: &Grid) -> Grid {
    grid.map(|p| {
        let gray = channel_average(p);
        Pixel::new(gray, gray, gray)
    })
}

/// Threshold to pure black and white at an integer average of 127.
pub fn high_contrast(grid: &Grid) -> Grid {
    grid.map(|p| {
        if channel_average(p) >= 255 / 2 {
            WHITE
        } else {
            BLACK
        }
    })
}

/// Each channel becomes `255 - (255 - channel) * factor`.
///
/// Factors in `0.0..=1.0` lighten; 0 turns everything white.
pub fn lighten(grid: &Grid, factor: f64) -> Result<Grid, BitmapError> {
    check_factor("lighten", factor)?;
    Ok(grid.map(|p| lighten_pixel(p, factor)))
}

/// Each channel becomes `channel * factor`.
///
/// Factors in `0.0..=1.0` darken; 0 turns everything black.
pub fn darken(grid: &Grid, factor: f64) -> Result<Grid, BitmapError> {
    check_factor("darken", factor)?;
    Ok(grid.map(|p| darken_pixel(p, factor)))
}

/// Quantize to black, white, red, green, or blue.
///
/// Bright pixels (channel sum >= 550) become white and dark ones (< 150)
/// black. Otherwise a strictly dominant red or green channel wins; ties and
/// blue-dominant pixels become blue.
pub fn five_color(grid: &Grid) -> Grid {
    grid.map(|p| {
        let sum = channel_sum(p);
        if sum >= 550 {
            WHITE
        } else if sum < 150 {
            BLACK
        } else if p.r > p.g && p.r > p.b {
            RED
        } else if p.g > p.r && p.g > p.b {
            GREEN
        } else {
            BLUE
        }
    })
}

fn lighten_pixel(p: Pixel, factor: f64) -> Pixel {
    map_channels(p, |c| truncate_channel(255.0 - f64::from(255 - c) * factor))
}

fn darken_pixel(p: Pixel, factor: f64) -> Pixel {
    map_channels(p, |c| truncate_channel(f64::from(c) * factor))
}

fn check_factor(op: &str, factor: f64) -> Result<(), BitmapError> {
    if !factor.is_finite() {
        return Err(BitmapError::InvalidParameter(format!(
            "{op} factor must be finite, got {factor}"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn solid(w: usize, h: usize, p: Pixel) -> Grid {
        Grid::new(w, h, p).unwrap()
    }

    fn single(p: Pixel) -> Grid {
        solid(1, 1, p)
    }

    #[test]
    fn darken_truncates() {
        let out = darken(&solid(2, 2, Pixel::new(128, 128, 128)), 0.5).unwrap();
        assert!(out.pixels().iter().all(|&p| p == Pixel::new(64, 64, 64)));

        // 129 * 0.5 = 64.5, 255 * 0.3 = 76.5, 7 * 0.99 = 6.93
        let out = darken(&single(Pixel::new(129, 255, 7)), 0.5).unwrap();
        assert_eq!(out.pixel(0, 0), Pixel::new(64, 127, 3));
        let out = darken(&single(Pixel::new(255, 7, 0)), 0.99).unwrap();
        assert_eq!(out.pixel(0, 0), Pixel::new(252, 6, 0));
    }

    #[test]
    fn lighten_truncates() {
        // 255 - 155 * 0.5 = 177.5
        let out = lighten(&single(Pixel::new(100, 0, 255)), 0.5).unwrap();
        assert_eq!(out.pixel(0, 0), Pixel::new(177, 127, 255));
    }

    #[test]
    fn factors_outside_unit_range_saturate() {
        let out = darken(&single(Pixel::new(200, 100, 0)), 2.0).unwrap();
        assert_eq!(out.pixel(0, 0), Pixel::new(255, 200, 0));
        let out = darken(&single(Pixel::new(200, 100, 0)), -1.0).unwrap();
        assert_eq!(out.pixel(0, 0), BLACK);
        let out = lighten(&single(Pixel::new(0, 100, 255)), 2.0).unwrap();
        assert_eq!(out.pixel(0, 0), Pixel::new(0, 0, 255));
    }

    #[test]
    fn non_finite_factors_are_rejected() {
        let g = single(WHITE);
        assert!(matches!(
            darken(&g, f64::NAN),
            Err(BitmapError::InvalidParameter(_))
        ));
        assert!(lighten(&g, f64::INFINITY).is_err());
        assert!(clarendon(&g, f64::NEG_INFINITY).is_err());
    }

    #[test]
    fn clarendon_bands() {
        // avg 170 -> lighten: 255 - 85 * 0.5 = 212.5
        let light = clarendon(&single(Pixel::new(170, 170, 170)), 0.5).unwrap();
        assert_eq!(light.pixel(0, 0), Pixel::new(212, 212, 212));
        // avg 89 -> darken: 89 * 0.5 = 44.5
        let dark = clarendon(&single(Pixel::new(89, 89, 89)), 0.5).unwrap();
        assert_eq!(dark.pixel(0, 0), Pixel::new(44, 44, 44));
        // avg 90 and avg 169 -> unchanged
        let mid = Pixel::new(90, 90, 90);
        assert_eq!(clarendon(&single(mid), 0.5).unwrap().pixel(0, 0), mid);
        let upper = Pixel::new(169, 169, 170);
        assert_eq!(clarendon(&single(upper), 0.5).unwrap().pixel(0, 0), upper);
    }

    #[test]
    fn clarendon_uses_integer_average() {
        // sum 509 -> avg 169 (169.67 truncated) -> unchanged
        let p = Pixel::new(170, 170, 169);
        assert_eq!(clarendon(&single(p), 0.5).unwrap().pixel(0, 0), p);
    }

    #[test]
    fn grayscale_average() {
        let out = grayscale(&single(Pixel::new(10, 20, 31)));
        assert_eq!(out.pixel(0, 0), Pixel::new(20, 20, 20));
    }

    #[test]
    fn high_contrast_threshold() {
        // avg 127 -> white, avg 126 -> black
        let out = high_contrast(&single(Pixel::new(127, 127, 127)));
        assert_eq!(out.pixel(0, 0), WHITE);
        let out = high_contrast(&single(Pixel::new(126, 127, 127)));
        assert_eq!(out.pixel(0, 0), BLACK);
    }

    #[test]
    fn five_color_rules() {
        let cases = [
            (Pixel::new(200, 200, 150), WHITE),
            (Pixel::new(50, 50, 49), BLACK),
            (Pixel::new(50, 50, 50), BLUE),
            (Pixel::new(200, 100, 100), RED),
            (Pixel::new(100, 200, 100), GREEN),
            (Pixel::new(100, 100, 200), BLUE),
            (Pixel::new(150, 150, 20), BLUE),
        ];
        for (input, expected) in cases {
            assert_eq!(
                five_color(&single(input)).pixel(0, 0),
                expected,
                "input {input:?}"
            );
        }
    }

    #[test]
    fn vignette_keeps_center_and_darkens_edges() {
        let g = solid(5, 5, Pixel::new(200, 100, 50));
        let out = vignette(&g);
        assert_eq!(out.pixel(2, 2), Pixel::new(200, 100, 50));
        // (0, 2): distance 2, scale 3/5
        assert_eq!(out.pixel(0, 2), Pixel::new(120, 60, 30));
        // (0, 0): distance sqrt(8) = 2.828..., scale 0.4343
        assert_eq!(out.pixel(0, 0), Pixel::new(86, 43, 21));
    }

    #[test]
    fn vignette_clamps_negative_scale() {
        // height 1: any column away from the center has distance >= 1
        let g = solid(6, 1, WHITE);
        let out = vignette(&g);
        assert_eq!(out.pixel(0, 3), WHITE);
        assert_eq!(out.pixel(0, 2), BLACK);
        assert_eq!(out.pixel(0, 0), BLACK);
    }

    #[test]
    fn input_is_untouched() {
        let g = solid(3, 2, Pixel::new(128, 64, 32));
        let before = g.clone();
        let _ = darken(&g, 0.1).unwrap();
        let _ = grayscale(&g);
        let _ = vignette(&g);
        assert_eq!(g, before);
    }
}
