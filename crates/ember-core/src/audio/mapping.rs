use crate::color::map_range;
use crate::constants::{CUTOFF_MAX_HZ, CUTOFF_MIN_HZ};
use glam::Vec2;

#[inline]
fn clamp_axis(v: f32, extent: f32) -> f32 {
    if v.is_finite() {
        v.clamp(0.0, extent.max(0.0))
    } else {
        0.0
    }
}

/// Horizontal pointer position to lowpass cutoff, left = dark, right = bright.
pub fn cutoff_for_x(x: f32, width: f32) -> f32 {
    if !(width > 0.0) {
        return CUTOFF_MIN_HZ;
    }
    map_range(clamp_axis(x, width), 0.0, width, CUTOFF_MIN_HZ, CUTOFF_MAX_HZ)
}

/// Vertical pointer position to output gain; top of the canvas is loudest.
pub fn gain_for_y(y: f32, height: f32) -> f32 {
    if !(height > 0.0) {
        return 0.0;
    }
    map_range(clamp_axis(y, height), height, 0.0, 0.0, 1.0).clamp(0.0, 1.0)
}

/// Targets derived from one pointer sample.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LiveParams {
    pub cutoff_hz: f32,
    pub gain: f32,
}

impl LiveParams {
    pub fn from_pointer(pointer: Vec2, canvas: Vec2) -> Self {
        Self {
            cutoff_hz: cutoff_for_x(pointer.x, canvas.x),
            gain: gain_for_y(pointer.y, canvas.y),
        }
    }
}
