//! Drawing contract between the engine and a concrete 2D surface.

use crate::color::Hsba;
use glam::Vec2;

/// Color and width of one stroke.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Stroke {
    pub color: Hsba,
    pub weight: f32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BlendMode {
    Normal,
    Additive,
}

/// Implemented by the canvas front-end and by recording painters in tests.
pub trait Painter {
    fn size(&self) -> Vec2;
    fn set_blend(&mut self, mode: BlendMode);
    /// Cover the whole surface with translucent black.
    fn fade(&mut self, alpha: f32);
    fn clear(&mut self);
    fn line(&mut self, from: Vec2, to: Vec2, stroke: Stroke);
    fn point(&mut self, at: Vec2, stroke: Stroke);
    /// Unfilled circle outline.
    fn circle(&mut self, center: Vec2, diameter: f32, stroke: Stroke);
    /// Centered text.
    fn text(&mut self, at: Vec2, text: &str, size: f32, color: Hsba);
}
