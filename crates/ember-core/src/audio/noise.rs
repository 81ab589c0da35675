//! Noise buffers for the ambient textures. A fresh buffer is rendered on
//! every activation; nothing is cached between activations.

use rand::Rng;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoiseColor {
    White,
    Brown,
    Pink,
}

/// How brown noise is produced.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BrownNoiseMode {
    /// Leaky random walk `b = (b + 0.02 w) / 1.02`, so energy falls off with
    /// frequency the way brown noise should.
    #[default]
    Integrated,
    /// Each sample is `(0.02 w) / 1.02` on its own: quiet, spectrally white.
    PerSample,
}

const WHITE_SCALE: f32 = 0.5;
const BROWN_STEP: f32 = 0.02;
const BROWN_LEAK: f32 = 1.02;
const BROWN_GAIN: f32 = 3.5;

/// Render `len` mono samples of the given color.
pub fn render_noise<R: Rng + ?Sized>(
    color: NoiseColor,
    len: usize,
    brown: BrownNoiseMode,
    rng: &mut R,
) -> Vec<f32> {
    let mut out = Vec::with_capacity(len);
    let mut last = 0.0_f32;
    for _ in 0..len {
        let white: f32 = rng.gen_range(-1.0..=1.0);
        let sample = match color {
            // pink leans on the shared lowpass for its spectral tilt
            NoiseColor::White | NoiseColor::Pink => white * WHITE_SCALE,
            NoiseColor::Brown => match brown {
                BrownNoiseMode::Integrated => {
                    last = (last + BROWN_STEP * white) / BROWN_LEAK;
                    last * BROWN_GAIN
                }
                BrownNoiseMode::PerSample => (BROWN_STEP * white) / BROWN_LEAK * BROWN_GAIN,
            },
        };
        out.push(sample);
    }
    out
}
