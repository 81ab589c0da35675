//! Engine context: owns the simulation and the audio graph, reads mood
//! through a shared handle, and exposes the host-facing operations.

use crate::audio::engine::ConnectFn;
use crate::audio::{AmbientType, AudioBackend, AudioEngine};
use crate::burn::{self, GlyphOutlineSource};
use crate::config::EngineConfig;
use crate::constants::*;
use crate::error::{AudioError, ConfigError};
use crate::flow_field::FlowField;
use crate::mode::{BreathFrame, ModeController, RenderMode};
use crate::mood::{MoodHandle, MoodState};
use crate::painter::{BlendMode, Painter};
use crate::particle::ParticleKind;
use crate::system::ParticleSystem;
use glam::Vec2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub struct Engine<B: AudioBackend> {
    pub config: EngineConfig,
    mood: MoodHandle,
    snapshot: MoodState,
    bounds: Vec2,
    field: FlowField,
    particles: ParticleSystem,
    mode: ModeController,
    audio: AudioEngine<B>,
    gesture_hue: f32,
    rng: StdRng,
    frame_count: u64,
}

impl<B: AudioBackend> Engine<B> {
    pub fn new(
        config: EngineConfig,
        width: f32,
        height: f32,
        mood: MoodHandle,
        connect_audio: ConnectFn<B>,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        let bounds = Vec2::new(width.max(0.0), height.max(0.0));
        let mut rng = StdRng::seed_from_u64(config.seed);
        let field = FlowField::new(
            bounds.x,
            bounds.y,
            config.cell_size,
            config.noise_step,
            config.seed as u32,
        );
        let mut particles = ParticleSystem::new();
        particles.seed_ambient(config.ambient_population, bounds, &mut rng);
        let audio = AudioEngine::new(&config, connect_audio);
        let snapshot = mood.snapshot();
        log::info!(
            "[engine] {}x{} canvas, {} ambient particles, {}x{} field",
            bounds.x,
            bounds.y,
            particles.len(),
            field.cols(),
            field.rows()
        );
        Ok(Self {
            config,
            mood,
            snapshot,
            bounds,
            field,
            particles,
            mode: ModeController::default(),
            audio,
            gesture_hue: 200.0,
            rng,
            frame_count: 0,
        })
    }

    pub fn mood_handle(&self) -> MoodHandle {
        self.mood.clone()
    }

    /// Mood as read at the start of the current frame.
    pub fn mood(&self) -> MoodState {
        self.snapshot
    }

    pub fn set_mood(&self, valence: f32, energy: f32) {
        self.mood.set(valence, energy);
    }

    pub fn bounds(&self) -> Vec2 {
        self.bounds
    }

    pub fn field(&self) -> &FlowField {
        &self.field
    }

    pub fn particles(&self) -> &ParticleSystem {
        &self.particles
    }

    pub fn particle_count(&self, kind: ParticleKind) -> usize {
        self.particles.count(kind)
    }

    pub fn audio(&self) -> &AudioEngine<B> {
        &self.audio
    }

    pub fn mode(&self) -> RenderMode {
        self.mode.mode()
    }

    pub fn set_mode(&mut self, mode: RenderMode) {
        self.mode.set(mode);
    }

    pub fn toggle_mode(&mut self) -> RenderMode {
        self.mode.toggle()
    }

    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// Advance and draw one frame. `elapsed_sec` is wall-clock time since
    /// start and only drives the breathing guide.
    pub fn frame<P: Painter + ?Sized>(&mut self, elapsed_sec: f64, painter: &mut P) {
        self.snapshot = self.mood.snapshot();
        let mode = self.mode.mode();

        painter.set_blend(BlendMode::Normal);
        painter.fade(mode.fade_alpha());
        painter.set_blend(BlendMode::Additive);

        match mode {
            RenderMode::Breathe => BreathFrame::at(elapsed_sec).render(painter),
            RenderMode::Flow => {
                self.field.regenerate(self.snapshot.energy);
                self.particles.step(
                    &self.field,
                    self.bounds,
                    self.snapshot,
                    &mut self.rng,
                    painter,
                );
            }
        }
        self.frame_count += 1;
    }

    /// Canvas resized: rebuild the grid. Particles stay where they are.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.bounds = Vec2::new(width.max(0.0), height.max(0.0));
        self.field.resize(self.bounds.x, self.bounds.y);
    }

    /// Pointer pressed: new gesture hue, a burst of 10, and live audio control.
    ///
    /// Particles are spawned even when the audio side fails; the error is
    /// returned for the host to surface.
    pub fn pointer_pressed(&mut self, pos: Vec2) -> Result<(), AudioError> {
        self.gesture_hue = self.rng.gen_range(0.0..360.0);
        self.particles.spawn_burst(
            pos,
            PRESS_SPAWN_COUNT,
            PRESS_SPAWN_JITTER,
            self.gesture_hue,
            &mut self.rng,
        );
        self.audio.control(pos, self.bounds)
    }

    pub fn pointer_dragged(&mut self, pos: Vec2) -> Result<(), AudioError> {
        self.particles.spawn_burst(
            pos,
            DRAG_SPAWN_COUNT,
            DRAG_SPAWN_JITTER,
            self.gesture_hue,
            &mut self.rng,
        );
        self.audio.control(pos, self.bounds)
    }

    pub fn gesture_hue(&self) -> f32 {
        self.gesture_hue
    }

    /// Seed a burn effect; returns the number of text particles spawned.
    pub fn burn_text<S: GlyphOutlineSource + ?Sized>(&mut self, text: &str, glyphs: &S) -> usize {
        burn::burn_text(
            text,
            glyphs,
            self.bounds,
            self.config.glyph_sample_density,
            &mut self.particles,
            &mut self.rng,
        )
    }

    pub fn select_ambient(&mut self, kind: AmbientType) -> Result<AmbientType, AudioError> {
        self.audio.select(kind)
    }

    pub fn stop_ambient(&mut self) {
        self.audio.stop();
    }

    pub fn ambient(&self) -> AmbientType {
        self.audio.active()
    }
}
