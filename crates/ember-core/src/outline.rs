//! Turn a rasterized glyph coverage mask into evenly spaced outline points.

use fnv::FnvHashSet;
use glam::Vec2;

/// Coverage at or above this value counts as ink.
pub const COVERAGE_THRESHOLD: u8 = 128;

/// Single-channel coverage image, row-major, one byte per pixel.
#[derive(Clone, Debug)]
pub struct CoverageMask {
    pub width: usize,
    pub height: usize,
    pub alpha: Vec<u8>,
}

impl CoverageMask {
    pub fn new(width: usize, height: usize, alpha: Vec<u8>) -> Option<Self> {
        (alpha.len() == width * height).then_some(Self {
            width,
            height,
            alpha,
        })
    }

    /// Build from RGBA bytes as returned by `getImageData`, keeping the alpha channel.
    pub fn from_rgba(width: usize, height: usize, rgba: &[u8]) -> Option<Self> {
        if rgba.len() != width * height * 4 {
            return None;
        }
        let alpha = rgba.chunks_exact(4).map(|px| px[3]).collect();
        Self::new(width, height, alpha)
    }

    #[inline]
    fn covered(&self, x: isize, y: isize) -> bool {
        if x < 0 || y < 0 || x as usize >= self.width || y as usize >= self.height {
            return false;
        }
        self.alpha[y as usize * self.width + x as usize] >= COVERAGE_THRESHOLD
    }

    fn is_edge(&self, x: isize, y: isize) -> bool {
        self.covered(x, y)
            && !(self.covered(x - 1, y)
                && self.covered(x + 1, y)
                && self.covered(x, y - 1)
                && self.covered(x, y + 1))
    }
}

/// Edge pixels of `mask`, thinned to at most one per `1/density` px cell and
/// offset by `origin`. Row-major scan keeps the output deterministic.
pub fn trace_outline(mask: &CoverageMask, origin: Vec2, density: f32) -> Vec<Vec2> {
    if !(density > 0.0) {
        return Vec::new();
    }
    let spacing = (1.0 / density).round().max(1.0) as isize;
    let mut taken: FnvHashSet<(isize, isize)> = FnvHashSet::default();
    let mut points = Vec::new();
    for y in 0..mask.height as isize {
        for x in 0..mask.width as isize {
            if !mask.is_edge(x, y) {
                continue;
            }
            if taken.insert((x.div_euclid(spacing), y.div_euclid(spacing))) {
                points.push(origin + Vec2::new(x as f32, y as f32));
            }
        }
    }
    points
}
