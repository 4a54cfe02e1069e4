//! Pixel type and channel arithmetic shared by the filters.

/// One 8-bit RGB pixel. Channels are stored in red, green, blue order.
pub type Pixel = rgb::RGB8;

/// Pure white.
pub const WHITE: Pixel = Pixel {
    r: 255,
    g: 255,
    b: 255,
};
/// Pure black.
pub const BLACK: Pixel = Pixel { r: 0, g: 0, b: 0 };

/// Convert a scaled channel value back to 8 bits.
///
/// Truncates toward zero, then clamps to `[0, 255]`. NaN maps to 0.
#[inline]
pub fn saturate(v: f64) -> u8 {
    if v.is_nan() {
        return 0;
    }
    v.trunc().clamp(0.0, 255.0) as u8
}

/// Sum of the three channels.
#[inline]
pub(crate) fn channel_sum(p: Pixel) -> u16 {
    u16::from(p.r) + u16::from(p.g) + u16::from(p.b)
}

/// Floor of the channel average.
#[inline]
pub(crate) fn channel_average(p: Pixel) -> u8 {
    (channel_sum(p) / 3) as u8
}

/// Apply `f` to each channel, saturating the result.
#[inline]
pub(crate) fn map_channels(p: Pixel, f: impl Fn(f64) -> f64) -> Pixel {
    Pixel::new(
        saturate(f(f64::from(p.r))),
        saturate(f(f64::from(p.g))),
        saturate(f(f64::from(p.b))),
    )
}
