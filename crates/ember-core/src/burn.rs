//! "Burn a thought": lay a string out at canvas center, sample its glyph
//! outline and seed one smoldering text particle per sample.
//!
//! The effect is fire-and-forget. After [`burn_text`] returns, the seeded
//! particles follow ordinary particle-system rules and nothing here keeps
//! any state.

use crate::constants::*;
use crate::system::ParticleSystem;
use glam::Vec2;
use rand::Rng;

/// Width and height of a laid-out string, in px.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TextBounds {
    pub width: f32,
    pub height: f32,
}

/// Font-backed provider of glyph outline samples.
pub trait GlyphOutlineSource {
    fn text_bounds(&self, text: &str, font_size: f32) -> TextBounds;

    /// Outline samples for `text` drawn with its left baseline at `origin`.
    fn text_to_points(&self, text: &str, origin: Vec2, font_size: f32, density: f32)
        -> Vec<Vec2>;
}

/// Where and how large a burn string is drawn.
#[derive(Clone, Debug, PartialEq)]
pub struct BurnLayout {
    pub text: String,
    pub font_size: f32,
    pub origin: Vec2,
}

/// Trim and upper-case; `None` for empty or whitespace-only input.
pub fn normalize_text(input: &str) -> Option<String> {
    let trimmed = input.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_uppercase())
}

/// Shrink long strings so the glyph run stays on screen.
pub fn font_size_for(text: &str) -> f32 {
    match text.chars().count() {
        0..=8 => FONT_SIZE_SHORT,
        9..=15 => FONT_SIZE_MEDIUM,
        _ => FONT_SIZE_LONG,
    }
}

pub fn layout<S: GlyphOutlineSource + ?Sized>(text: String, source: &S, canvas: Vec2) -> BurnLayout {
    let font_size = font_size_for(&text);
    let bounds = source.text_bounds(&text, font_size);
    let origin = Vec2::new(
        (canvas.x - bounds.width) / 2.0,
        (canvas.y + bounds.height) / 2.0,
    );
    BurnLayout {
        text,
        font_size,
        origin,
    }
}

/// Seed text particles for `input`; returns how many were spawned.
pub fn burn_text<S, R>(
    input: &str,
    source: &S,
    canvas: Vec2,
    density: f32,
    system: &mut ParticleSystem,
    rng: &mut R,
) -> usize
where
    S: GlyphOutlineSource + ?Sized,
    R: Rng + ?Sized,
{
    let Some(text) = normalize_text(input) else {
        return 0;
    };
    let layout = layout(text, source, canvas);
    let points = source.text_to_points(&layout.text, layout.origin, layout.font_size, density);
    let spawned = system.seed_text(&points, rng);
    log::info!(
        "[burn] '{}' at {}pt -> {} particles",
        layout.text,
        layout.font_size,
        spawned
    );
    spawned
}
