//! Grid of force vectors re-sampled from 3D Perlin noise every frame.

use crate::constants::*;
use glam::Vec2;
use noise::{NoiseFn, Perlin};

pub struct FlowField {
    noise: Perlin,
    cell_size: f32,
    noise_step: f64,
    cols: usize,
    rows: usize,
    time_offset: f64,
    vectors: Vec<Vec2>,
}

impl FlowField {
    pub fn new(width: f32, height: f32, cell_size: f32, noise_step: f64, seed: u32) -> Self {
        let mut field = Self {
            noise: Perlin::new(seed),
            cell_size,
            noise_step,
            cols: 0,
            rows: 0,
            time_offset: 0.0,
            vectors: Vec::new(),
        };
        field.resize(width, height);
        field
    }

    pub fn resize(&mut self, width: f32, height: f32) {
        self.cols = (width.max(0.0) / self.cell_size).floor() as usize;
        self.rows = (height.max(0.0) / self.cell_size).floor() as usize;
        self.vectors.clear();
        self.vectors.resize(self.cols * self.rows, Vec2::ZERO);
        log::debug!("[field] resized to {}x{} cells", self.cols, self.rows);
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn time_offset(&self) -> f64 {
        self.time_offset
    }

    pub fn vectors(&self) -> &[Vec2] {
        &self.vectors
    }

    /// Recompute every cell, then advance time faster for higher energy.
    pub fn regenerate(&mut self, energy: f32) {
        let z = self.time_offset;
        for y in 0..self.rows {
            for x in 0..self.cols {
                let n = self.noise.get([
                    x as f64 * self.noise_step,
                    y as f64 * self.noise_step,
                    z,
                ]);
                // Perlin yields roughly [-1, 1]
                let unit = ((n + 1.0) * 0.5).clamp(0.0, 1.0) as f32;
                let angle = (unit * FIELD_ANGLE_SPAN).min(FIELD_ANGLE_SPAN - f32::EPSILON);
                self.vectors[x + y * self.cols] =
                    Vec2::new(angle.cos(), angle.sin()) * FIELD_MAGNITUDE;
            }
        }
        self.time_offset +=
            FIELD_TIME_STEP_BASE + energy.clamp(0.0, 1.0) as f64 * FIELD_TIME_STEP_ENERGY;
    }

    /// Force acting at `pos`, or `None` when the cell lies outside the grid.
    pub fn lookup(&self, pos: Vec2) -> Option<Vec2> {
        if !pos.x.is_finite() || !pos.y.is_finite() || pos.x < 0.0 || pos.y < 0.0 {
            return None;
        }
        let x = (pos.x / self.cell_size).floor() as usize;
        let y = (pos.y / self.cell_size).floor() as usize;
        if x >= self.cols || y >= self.rows {
            return None;
        }
        self.vectors.get(x + y * self.cols).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grid_dimensions_floor_canvas_size() {
        let f = FlowField::new(820.0, 610.0, 50.0, 0.1, 1);
        assert_eq!((f.cols(), f.rows()), (16, 12));
        assert_eq!(f.vectors().len(), 16 * 12);
    }

    #[test]
    fn regenerated_vectors_have_fixed_magnitude() {
        let mut f = FlowField::new(400.0, 300.0, 50.0, 0.1, 7);
        f.regenerate(0.5);
        for v in f.vectors() {
            assert!((v.length() - FIELD_MAGNITUDE).abs() < 1e-4);
        }
    }

    #[test]
    fn time_advances_faster_with_energy() {
        let mut calm = FlowField::new(100.0, 100.0, 50.0, 0.1, 7);
        let mut wild = FlowField::new(100.0, 100.0, 50.0, 0.1, 7);
        calm.regenerate(0.0);
        wild.regenerate(1.0);
        assert!((calm.time_offset() - 0.002).abs() < 1e-12);
        assert!((wild.time_offset() - 0.005).abs() < 1e-12);
    }

    #[test]
    fn field_evolves_between_frames() {
        let mut f = FlowField::new(500.0, 500.0, 50.0, 0.1, 3);
        f.regenerate(1.0);
        let first = f.vectors().to_vec();
        for _ in 0..50 {
            f.regenerate(1.0);
        }
        assert!(first.iter().zip(f.vectors()).any(|(a, b)| (*a - *b).length() > 1e-4));
    }

    #[test]
    fn lookup_outside_grid_yields_none() {
        let mut f = FlowField::new(200.0, 200.0, 50.0, 0.1, 3);
        f.regenerate(0.5);
        assert!(f.lookup(Vec2::new(10.0, 10.0)).is_some());
        assert!(f.lookup(Vec2::new(-1.0, 10.0)).is_none());
        assert!(f.lookup(Vec2::new(10.0, 200.0)).is_none());
        assert!(f.lookup(Vec2::new(f32::NAN, 10.0)).is_none());
        f.resize(100.0, 100.0);
        assert!(f.lookup(Vec2::new(150.0, 150.0)).is_none());
    }
}
