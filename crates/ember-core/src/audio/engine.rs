use super::backend::AudioBackend;
use super::mapping::LiveParams;
use super::noise::{render_noise, BrownNoiseMode};
use super::AmbientType;
use crate::config::EngineConfig;
use crate::constants::*;
use crate::error::AudioError;
use glam::Vec2;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Opens the platform audio context. Called lazily from the first gesture.
pub type ConnectFn<B> = Box<dyn FnMut() -> Result<B, AudioError>>;

/// Ambient-type state machine over a lazily opened audio backend.
///
/// Graph: `source -> [lowpass ->] gain -> output`. Gain and lowpass are
/// created on first activation and reused for every later one, so the
/// tone/volume a user dialled in survives type switches.
pub struct AudioEngine<B: AudioBackend> {
    connect: ConnectFn<B>,
    backend: Option<B>,
    gain: Option<B::Gain>,
    filter: Option<B::Filter>,
    source: Option<B::Source>,
    active: AmbientType,
    level: f32,
    cutoff_hz: f32,
    brown: BrownNoiseMode,
    rng: StdRng,
}

fn open<'a, B>(
    slot: &'a mut Option<B>,
    connect: &mut ConnectFn<B>,
) -> Result<&'a mut B, AudioError> {
    if slot.is_none() {
        let backend = connect()?;
        log::info!("[audio] context opened");
        *slot = Some(backend);
    }
    slot.as_mut()
        .ok_or_else(|| AudioError::Context("backend missing after connect".to_string()))
}

impl<B: AudioBackend> AudioEngine<B> {
    pub fn new(config: &EngineConfig, connect: ConnectFn<B>) -> Self {
        Self {
            connect,
            backend: None,
            gain: None,
            filter: None,
            source: None,
            active: AmbientType::Off,
            level: config.initial_gain,
            cutoff_hz: config.default_cutoff_hz,
            brown: config.brown_noise,
            rng: StdRng::seed_from_u64(config.seed ^ 0xA0D1_0A0D_1A0D_10A0),
        }
    }

    pub fn active(&self) -> AmbientType {
        self.active
    }

    pub fn has_context(&self) -> bool {
        self.backend.is_some()
    }

    pub fn backend(&self) -> Option<&B> {
        self.backend.as_ref()
    }

    pub fn gain_node(&self) -> Option<&B::Gain> {
        self.gain.as_ref()
    }

    pub fn filter_node(&self) -> Option<&B::Filter> {
        self.filter.as_ref()
    }

    pub fn source_node(&self) -> Option<&B::Source> {
        self.source.as_ref()
    }

    /// Last volume the user asked for; restored when a new type starts.
    pub fn level(&self) -> f32 {
        self.level
    }

    pub fn cutoff_hz(&self) -> f32 {
        self.cutoff_hz
    }

    /// Open (or resume) the context on a user gesture.
    pub fn gesture(&mut self) -> Result<(), AudioError> {
        open(&mut self.backend, &mut self.connect)?.resume();
        Ok(())
    }

    /// Switch ambient type. Re-selecting the active type, or `Off`, mutes.
    pub fn select(&mut self, kind: AmbientType) -> Result<AmbientType, AudioError> {
        if kind == AmbientType::Off || kind == self.active {
            self.stop();
            return Ok(AmbientType::Off);
        }

        let backend = open(&mut self.backend, &mut self.connect)?;
        backend.resume();
        if let Some(previous) = self.source.take() {
            backend.stop(previous, 0.0);
        }
        self.active = AmbientType::Off;

        if self.gain.is_none() {
            self.gain = Some(backend.create_gain(self.level)?);
        }
        if self.filter.is_none() {
            if let Some(gain) = &self.gain {
                self.filter = Some(backend.create_lowpass(self.cutoff_hz, gain)?);
            }
        }
        let (Some(gain), Some(filter)) = (&self.gain, &self.filter) else {
            return Err(AudioError::Context("shared nodes unavailable".to_string()));
        };

        let source = match kind.noise_color() {
            None => backend.play_tone(TONE_HZ, gain)?,
            Some(color) => {
                let len = (backend.sample_rate() * NOISE_BUFFER_SECONDS).round() as usize;
                let samples = render_noise(color, len, self.brown, &mut self.rng);
                backend.play_noise(samples, filter)?
            }
        };
        // a previous fade-out may have left the gain at zero
        backend.ramp_gain(gain, self.level, RAMP_TIME_CONSTANT_SEC);

        self.source = Some(source);
        self.active = kind;
        log::info!("[audio] ambient -> {}", kind.name());
        Ok(kind)
    }

    /// Fade out, then stop the source once the fade has had time to finish.
    pub fn stop(&mut self) {
        if let (Some(backend), Some(gain)) = (self.backend.as_mut(), self.gain.as_ref()) {
            backend.ramp_gain(gain, 0.0, RAMP_TIME_CONSTANT_SEC);
            if let Some(source) = self.source.take() {
                backend.stop(source, STOP_GRACE_SEC);
            }
        }
        if self.active != AmbientType::Off {
            log::info!("[audio] ambient {} -> off", self.active.name());
        }
        self.active = AmbientType::Off;
    }

    /// Map a pointer sample onto cutoff (noise only) and volume.
    pub fn control(&mut self, pointer: Vec2, canvas: Vec2) -> Result<(), AudioError> {
        let backend = open(&mut self.backend, &mut self.connect)?;
        backend.resume();
        if self.active == AmbientType::Off || self.source.is_none() {
            return Ok(());
        }
        let params = LiveParams::from_pointer(pointer, canvas);
        if self.active.uses_filter() {
            if let Some(filter) = &self.filter {
                backend.ramp_cutoff(filter, params.cutoff_hz, RAMP_TIME_CONSTANT_SEC);
                self.cutoff_hz = params.cutoff_hz;
            }
        }
        if let Some(gain) = &self.gain {
            backend.ramp_gain(gain, params.gain, RAMP_TIME_CONSTANT_SEC);
            self.level = params.gain;
        }
        Ok(())
    }
}
