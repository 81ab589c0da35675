use crate::color::{map_range, Hsba};
use crate::constants::*;
use crate::painter::{Painter, Stroke};
use glam::Vec2;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RenderMode {
    #[default]
    Flow,
    Breathe,
}

impl RenderMode {
    pub fn fade_alpha(self) -> f32 {
        match self {
            RenderMode::Flow => FLOW_FADE_ALPHA,
            RenderMode::Breathe => BREATHE_FADE_ALPHA,
        }
    }
}

/// Selects which renderer runs each frame. Holds no particle state, so a
/// switch can never destroy or reset particles.
#[derive(Clone, Debug, Default)]
pub struct ModeController {
    mode: RenderMode,
}

impl ModeController {
    pub fn mode(&self) -> RenderMode {
        self.mode
    }

    pub fn set(&mut self, mode: RenderMode) {
        if self.mode != mode {
            log::info!("[mode] {:?} -> {:?}", self.mode, mode);
            self.mode = mode;
        }
    }

    pub fn toggle(&mut self) -> RenderMode {
        self.set(match self.mode {
            RenderMode::Flow => RenderMode::Breathe,
            RenderMode::Breathe => RenderMode::Flow,
        });
        self.mode
    }

    pub fn simulates(&self) -> bool {
        self.mode == RenderMode::Flow
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BreathPrompt {
    Inhale,
    Exhale,
}

impl BreathPrompt {
    pub fn label(self) -> &'static str {
        match self {
            BreathPrompt::Inhale => "inhale...",
            BreathPrompt::Exhale => "exhale...",
        }
    }
}

/// Breathing guide state at one instant.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BreathFrame {
    /// 0 = fully contracted, 1 = fully expanded.
    pub cycle: f32,
    pub diameter: f32,
    pub hue: f32,
    pub prompt: BreathPrompt,
}

impl BreathFrame {
    pub fn at(seconds: f64) -> Self {
        let cycle = (((seconds * BREATH_ANGULAR_RATE).sin() + 1.0) / 2.0) as f32;
        Self {
            cycle,
            diameter: map_range(cycle, 0.0, 1.0, BREATH_DIAMETER_MIN, BREATH_DIAMETER_MAX),
            hue: map_range(cycle, 0.0, 1.0, BREATH_HUE_MIN, BREATH_HUE_MAX),
            prompt: if cycle > 0.5 {
                BreathPrompt::Exhale
            } else {
                BreathPrompt::Inhale
            },
        }
    }

    pub fn render<P: Painter + ?Sized>(&self, painter: &mut P) {
        let center = painter.size() / 2.0;
        painter.circle(
            center,
            self.diameter,
            Stroke {
                color: Hsba::new(self.hue, 80.0, 100.0, 0.5),
                weight: 3.0,
            },
        );
        painter.text(center, self.prompt.label(), BREATH_TEXT_SIZE, Hsba::WHITE);
    }
}

/// Seconds in one full breath.
pub fn breath_period() -> f64 {
    std::f64::consts::TAU / BREATH_ANGULAR_RATE
}
