//! Two-axis mood value written by the host and read by the engine once per frame.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Valence (cold..warm) and energy (calm..agitated), both in \[0, 1\].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MoodState {
    pub valence: f32,
    pub energy: f32,
}

impl Default for MoodState {
    fn default() -> Self {
        Self {
            valence: 0.5,
            energy: 0.5,
        }
    }
}

impl MoodState {
    /// Build a mood from untrusted input; values are clamped, non-finite input becomes 0.5.
    pub fn new(valence: f32, energy: f32) -> Self {
        Self {
            valence: sanitize_axis(valence),
            energy: sanitize_axis(energy),
        }
    }

    fn pack(self) -> u64 {
        ((self.valence.to_bits() as u64) << 32) | self.energy.to_bits() as u64
    }

    fn unpack(bits: u64) -> Self {
        Self {
            valence: f32::from_bits((bits >> 32) as u32),
            energy: f32::from_bits(bits as u32),
        }
    }
}

#[inline]
fn sanitize_axis(v: f32) -> f32 {
    if v.is_finite() {
        v.clamp(0.0, 1.0)
    } else {
        0.5
    }
}

/// Shared mood cell. Both axes are replaced in a single store, so readers
/// never see a valence from one update paired with an energy from another.
#[derive(Clone, Debug)]
pub struct MoodHandle {
    bits: Arc<AtomicU64>,
}

impl Default for MoodHandle {
    fn default() -> Self {
        Self::new(MoodState::default())
    }
}

impl MoodHandle {
    pub fn new(initial: MoodState) -> Self {
        Self {
            bits: Arc::new(AtomicU64::new(initial.pack())),
        }
    }

    /// Last write wins; no queueing or blending.
    pub fn set(&self, valence: f32, energy: f32) {
        self.bits
            .store(MoodState::new(valence, energy).pack(), Ordering::Release);
    }

    pub fn snapshot(&self) -> MoodState {
        MoodState::unpack(self.bits.load(Ordering::Acquire))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_clamps_both_axes() {
        let mood = MoodHandle::default();
        mood.set(1.7, -0.2);
        assert_eq!(mood.snapshot(), MoodState::new(1.0, 0.0));
    }

    #[test]
    fn non_finite_input_falls_back_to_neutral() {
        let m = MoodState::new(f32::NAN, f32::INFINITY);
        assert_eq!(m, MoodState::default());
    }

    #[test]
    fn clones_share_the_same_cell() {
        let writer = MoodHandle::default();
        let reader = writer.clone();
        writer.set(0.1, 0.9);
        writer.set(0.3, 0.2);
        let snap = reader.snapshot();
        assert!((snap.valence - 0.3).abs() < 1e-6);
        assert!((snap.energy - 0.2).abs() < 1e-6);
    }
}
