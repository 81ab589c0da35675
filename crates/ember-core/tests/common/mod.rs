// Test doubles shared by the host-side integration tests.

#![allow(dead_code)]

use ember_core::audio::engine::ConnectFn;
use ember_core::{
    AudioBackend, AudioError, BlendMode, EngineConfig, GlyphOutlineSource, Hsba, Painter, Stroke,
    TextBounds,
};
use glam::Vec2;
use std::cell::Cell;
use std::rc::Rc;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct NodeId(pub u32);

#[derive(Clone, Debug, PartialEq)]
pub enum Call {
    Resume,
    CreateGain { id: NodeId, level: f32 },
    CreateLowpass { id: NodeId, cutoff_hz: f32, output: NodeId },
    PlayNoise { id: NodeId, len: usize, input: NodeId },
    PlayTone { id: NodeId, freq_hz: f32, output: NodeId },
    RampGain { gain: NodeId, target: f32, tau: f64 },
    RampCutoff { filter: NodeId, target_hz: f32, tau: f64 },
    Stop { source: NodeId, delay_sec: f64 },
}

/// Records every graph operation instead of producing sound.
pub struct MockBackend {
    pub sample_rate: f32,
    pub calls: Vec<Call>,
    pub playing: Vec<NodeId>,
    next_id: u32,
}

impl MockBackend {
    pub fn new(sample_rate: f32) -> Self {
        Self {
            sample_rate,
            calls: Vec::new(),
            playing: Vec::new(),
            next_id: 1,
        }
    }

    fn id(&mut self) -> NodeId {
        let id = NodeId(self.next_id);
        self.next_id += 1;
        id
    }

    pub fn last_gain_target(&self) -> Option<f32> {
        self.calls.iter().rev().find_map(|c| match c {
            Call::RampGain { target, .. } => Some(*target),
            _ => None,
        })
    }

    pub fn last_cutoff_target(&self) -> Option<f32> {
        self.calls.iter().rev().find_map(|c| match c {
            Call::RampCutoff { target_hz, .. } => Some(*target_hz),
            _ => None,
        })
    }

    pub fn count(&self, pred: impl Fn(&Call) -> bool) -> usize {
        self.calls.iter().filter(|c| pred(c)).count()
    }
}

impl AudioBackend for MockBackend {
    type Source = NodeId;
    type Filter = NodeId;
    type Gain = NodeId;

    fn sample_rate(&self) -> f32 {
        self.sample_rate
    }

    fn resume(&mut self) {
        self.calls.push(Call::Resume);
    }

    fn create_gain(&mut self, level: f32) -> Result<NodeId, AudioError> {
        let id = self.id();
        self.calls.push(Call::CreateGain { id, level });
        Ok(id)
    }

    fn create_lowpass(&mut self, cutoff_hz: f32, output: &NodeId) -> Result<NodeId, AudioError> {
        let id = self.id();
        self.calls.push(Call::CreateLowpass {
            id,
            cutoff_hz,
            output: *output,
        });
        Ok(id)
    }

    fn play_noise(&mut self, samples: Vec<f32>, input: &NodeId) -> Result<NodeId, AudioError> {
        let id = self.id();
        self.calls.push(Call::PlayNoise {
            id,
            len: samples.len(),
            input: *input,
        });
        self.playing.push(id);
        Ok(id)
    }

    fn play_tone(&mut self, freq_hz: f32, output: &NodeId) -> Result<NodeId, AudioError> {
        let id = self.id();
        self.calls.push(Call::PlayTone {
            id,
            freq_hz,
            output: *output,
        });
        self.playing.push(id);
        Ok(id)
    }

    fn ramp_gain(&mut self, gain: &NodeId, target: f32, tau: f64) {
        self.calls.push(Call::RampGain {
            gain: *gain,
            target,
            tau,
        });
    }

    fn ramp_cutoff(&mut self, filter: &NodeId, target_hz: f32, tau: f64) {
        self.calls.push(Call::RampCutoff {
            filter: *filter,
            target_hz,
            tau,
        });
    }

    fn stop(&mut self, source: NodeId, delay_sec: f64) {
        self.calls.push(Call::Stop { source, delay_sec });
        self.playing.retain(|id| *id != source);
    }
}

pub fn mock_connect() -> ConnectFn<MockBackend> {
    Box::new(|| Ok(MockBackend::new(8_000.0)))
}

/// Connector that fails and counts how often it was asked.
pub fn failing_connect(attempts: Rc<Cell<u32>>) -> ConnectFn<MockBackend> {
    Box::new(move || {
        attempts.set(attempts.get() + 1);
        Err(AudioError::Context("autoplay blocked".to_string()))
    })
}

pub fn test_config() -> EngineConfig {
    EngineConfig::default().with_seed(7)
}

#[derive(Clone, Debug, PartialEq)]
pub enum Draw {
    Blend(BlendMode),
    Fade(f32),
    Clear,
    Line(Vec2, Vec2, Stroke),
    Point(Vec2, Stroke),
    Circle(Vec2, f32, Stroke),
    Text(Vec2, String, f32, Hsba),
}

/// Painter that remembers every command.
pub struct RecordingPainter {
    pub size: Vec2,
    pub draws: Vec<Draw>,
}

impl RecordingPainter {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            size: Vec2::new(width, height),
            draws: Vec::new(),
        }
    }

    pub fn lines(&self) -> usize {
        self.draws.iter().filter(|d| matches!(d, Draw::Line(..))).count()
    }

    pub fn points(&self) -> usize {
        self.draws.iter().filter(|d| matches!(d, Draw::Point(..))).count()
    }

    pub fn texts(&self) -> Vec<String> {
        self.draws
            .iter()
            .filter_map(|d| match d {
                Draw::Text(_, t, _, _) => Some(t.clone()),
                _ => None,
            })
            .collect()
    }
}

impl Painter for RecordingPainter {
    fn size(&self) -> Vec2 {
        self.size
    }
    fn set_blend(&mut self, mode: BlendMode) {
        self.draws.push(Draw::Blend(mode));
    }
    fn fade(&mut self, alpha: f32) {
        self.draws.push(Draw::Fade(alpha));
    }
    fn clear(&mut self) {
        self.draws.push(Draw::Clear);
    }
    fn line(&mut self, from: Vec2, to: Vec2, stroke: Stroke) {
        self.draws.push(Draw::Line(from, to, stroke));
    }
    fn point(&mut self, at: Vec2, stroke: Stroke) {
        self.draws.push(Draw::Point(at, stroke));
    }
    fn circle(&mut self, center: Vec2, diameter: f32, stroke: Stroke) {
        self.draws.push(Draw::Circle(center, diameter, stroke));
    }
    fn text(&mut self, at: Vec2, text: &str, size: f32, color: Hsba) {
        self.draws.push(Draw::Text(at, text.to_string(), size, color));
    }
}

/// Monospace stand-in font: every character yields `per_char` outline points.
pub struct FixedGlyphs {
    pub per_char: usize,
}

impl GlyphOutlineSource for FixedGlyphs {
    fn text_bounds(&self, text: &str, font_size: f32) -> TextBounds {
        TextBounds {
            width: text.chars().count() as f32 * font_size * 0.6,
            height: font_size * 0.7,
        }
    }

    fn text_to_points(&self, text: &str, origin: Vec2, font_size: f32, _density: f32) -> Vec<Vec2> {
        let advance = font_size * 0.6;
        text.chars()
            .enumerate()
            .filter(|(_, c)| !c.is_whitespace())
            .flat_map(|(i, _)| {
                (0..self.per_char).map(move |k| {
                    origin + Vec2::new(i as f32 * advance, -(k as f32) * 2.0)
                })
            })
            .collect()
    }
}
