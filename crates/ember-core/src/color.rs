//! HSB colors and the linear range mapping used by every styling rule.

/// Linearly remap `value` from `[in_a, in_b]` to `[out_a, out_b]` without clamping.
#[inline]
pub fn map_range(value: f32, in_a: f32, in_b: f32, out_a: f32, out_b: f32) -> f32 {
    let span = in_b - in_a;
    if span == 0.0 {
        return out_a;
    }
    out_a + (value - in_a) / span * (out_b - out_a)
}

/// Hue in degrees, saturation/brightness in 0..=100, alpha in 0..=1.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hsba {
    pub hue: f32,
    pub saturation: f32,
    pub brightness: f32,
    pub alpha: f32,
}

impl Hsba {
    pub const fn new(hue: f32, saturation: f32, brightness: f32, alpha: f32) -> Self {
        Self {
            hue,
            saturation,
            brightness,
            alpha,
        }
    }

    pub const WHITE: Hsba = Hsba::new(0.0, 0.0, 100.0, 1.0);
    pub const BLACK: Hsba = Hsba::new(0.0, 0.0, 0.0, 1.0);

    pub fn with_alpha(self, alpha: f32) -> Self {
        Self { alpha, ..self }
    }

    /// Convert to 8-bit RGB plus a clamped alpha.
    pub fn to_rgba8(self) -> ([u8; 3], f32) {
        let h = self.hue.rem_euclid(360.0) / 60.0;
        let s = (self.saturation / 100.0).clamp(0.0, 1.0);
        let v = (self.brightness / 100.0).clamp(0.0, 1.0);
        let c = v * s;
        let x = c * (1.0 - ((h % 2.0) - 1.0).abs());
        let (r, g, b) = match h as u32 {
            0 => (c, x, 0.0),
            1 => (x, c, 0.0),
            2 => (0.0, c, x),
            3 => (0.0, x, c),
            4 => (x, 0.0, c),
            _ => (c, 0.0, x),
        };
        let m = v - c;
        let to8 = |f: f32| ((f + m) * 255.0).round().clamp(0.0, 255.0) as u8;
        ([to8(r), to8(g), to8(b)], self.alpha.clamp(0.0, 1.0))
    }

    /// CSS `rgba()` string for canvas style setters.
    pub fn to_css(self) -> String {
        let ([r, g, b], a) = self.to_rgba8();
        format!("rgba({},{},{},{:.3})", r, g, b, a)
    }
}
