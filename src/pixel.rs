/// One 8-bit RGB pixel. There is no alpha channel.
pub type Pixel = rgb::RGB8;

pub const BLACK: Pixel = Pixel { r: 0, g: 0, b: 0 };
pub const WHITE: Pixel = Pixel {
    r: 255,
    g: 255,
    b: 255,
};
pub const RED: Pixel = Pixel { r: 255, g: 0, b: 0 };
pub const GREEN: Pixel = Pixel { r: 0, g: 255, b: 0 };
pub const BLUE: Pixel = Pixel { r: 0, g: 0, b: 255 };

/// Sum of the three channels (0..=765).
#[inline]
pub fn channel_sum(p: Pixel) -> u32 {
    u32::from(p.r) + u32::from(p.g) + u32::from(p.b)
}

/// Integer mean of the three channels, truncated.
#[inline]
pub fn channel_average(p: Pixel) -> u8 {
    // 765 / 3 == 255, always fits
    (channel_sum(p) / 3) as u8
}

/// Convert a computed channel value back to `u8`.
///
/// Truncates toward zero (never rounds), then saturates into `0..=255`.
/// `-0.7` becomes 0, `177.9` becomes 177, `300.0` becomes 255.
#[inline]
pub(crate) fn truncate_channel(v: f64) -> u8 {
    v as u8
}

/// Apply `f` to each channel independently.
#[inline]
pub(crate) fn map_channels(p: Pixel, f: impl Fn(u8) -> u8) -> Pixel {
    Pixel {
        r: f(p.r),
        g: f(p.g),
        b: f(p.b),
    }
}
