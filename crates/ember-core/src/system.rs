use crate::constants::*;
use crate::flow_field::FlowField;
use crate::mood::MoodState;
use crate::painter::Painter;
use crate::particle::{
    AmbientParticle, Behavior, Particle, ParticleKind, StepContext, TextParticle, UserParticle,
};
use glam::Vec2;
use rand::Rng;

/// Owns every live particle and runs the per-frame update/render/collect cycle.
#[derive(Default)]
pub struct ParticleSystem {
    particles: Vec<Particle>,
}

impl ParticleSystem {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn count(&self, kind: ParticleKind) -> usize {
        self.particles.iter().filter(|p| p.kind() == kind).count()
    }

    pub fn push(&mut self, particle: impl Into<Particle>) {
        self.particles.push(particle.into());
    }

    /// Scatter the persistent ambient population uniformly over the canvas.
    pub fn seed_ambient<R: Rng + ?Sized>(&mut self, count: usize, bounds: Vec2, rng: &mut R) {
        self.particles.reserve(count);
        for _ in 0..count {
            let pos = Vec2::new(
                rng.gen_range(0.0..bounds.x.max(f32::EPSILON)),
                rng.gen_range(0.0..bounds.y.max(f32::EPSILON)),
            );
            self.push(AmbientParticle::new(pos));
        }
    }

    /// Spawn `count` gesture particles jittered around `center`, all tinted `hue`.
    pub fn spawn_burst<R: Rng + ?Sized>(
        &mut self,
        center: Vec2,
        count: usize,
        jitter: f32,
        hue: f32,
        rng: &mut R,
    ) {
        for _ in 0..count {
            let offset = Vec2::new(
                rng.gen_range(-jitter..=jitter),
                rng.gen_range(-jitter..=jitter),
            );
            self.push(UserParticle::new(center + offset, hue));
        }
    }

    /// One smoldering text particle per anchor, each with its own ignition delay.
    pub fn seed_text<R: Rng + ?Sized>(&mut self, anchors: &[Vec2], rng: &mut R) -> usize {
        self.particles.reserve(anchors.len());
        for &anchor in anchors {
            let delay = TextParticle::ignition_delay(rng);
            self.push(TextParticle::new(anchor, delay));
        }
        anchors.len()
    }

    pub fn update<R: Rng + ?Sized>(&mut self, field: &FlowField, bounds: Vec2, rng: &mut R) {
        let ctx = StepContext { field, bounds };
        for p in &mut self.particles {
            p.update(&ctx, rng);
        }
    }

    pub fn render<P: Painter + ?Sized>(&self, mood: MoodState, painter: &mut P) {
        for p in &self.particles {
            p.render(mood, painter);
        }
    }

    /// Life-based garbage collection; returns how many particles were dropped.
    pub fn collect_expired(&mut self) -> usize {
        let before = self.particles.len();
        self.particles.retain(|p| !p.is_expired());
        before - self.particles.len()
    }

    /// Full flow-mode step: advance, draw, then drop what died this frame.
    pub fn step<R: Rng + ?Sized, P: Painter + ?Sized>(
        &mut self,
        field: &FlowField,
        bounds: Vec2,
        mood: MoodState,
        rng: &mut R,
        painter: &mut P,
    ) -> usize {
        self.update(field, bounds, rng);
        self.render(mood, painter);
        self.collect_expired()
    }
}

/// Largest number of frames a freshly spawned non-ambient particle can live.
pub fn max_frames_alive(kind: ParticleKind) -> Option<u32> {
    match kind {
        ParticleKind::Ambient => None,
        ParticleKind::User => Some((FULL_LIFE / USER_DECAY_PER_FRAME).ceil() as u32),
        ParticleKind::Text => {
            Some(IGNITION_DELAY_MAX + (FULL_LIFE / TEXT_DECAY_PER_FRAME).ceil() as u32)
        }
    }
}
