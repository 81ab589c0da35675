use crate::error::AudioError;

/// Minimal audio-graph surface the ambient engine needs.
///
/// Node handles are opaque to the engine. Gain and filter are created once
/// and then only ramped; sources are created per activation and handed back
/// through [`AudioBackend::stop`].
pub trait AudioBackend {
    type Source;
    type Filter;
    type Gain;

    fn sample_rate(&self) -> f32;

    /// Resume a context suspended by autoplay policy. Best effort.
    fn resume(&mut self);

    /// Gain node wired to the output device.
    fn create_gain(&mut self, level: f32) -> Result<Self::Gain, AudioError>;

    /// Lowpass filter wired into `output`.
    fn create_lowpass(
        &mut self,
        cutoff_hz: f32,
        output: &Self::Gain,
    ) -> Result<Self::Filter, AudioError>;

    /// Start looping `samples` (mono, at `sample_rate`) into `input`.
    fn play_noise(
        &mut self,
        samples: Vec<f32>,
        input: &Self::Filter,
    ) -> Result<Self::Source, AudioError>;

    /// Start a sine oscillator straight into `output`.
    fn play_tone(&mut self, freq_hz: f32, output: &Self::Gain) -> Result<Self::Source, AudioError>;

    /// Exponential approach to `target` (`setTargetAtTime` semantics).
    fn ramp_gain(&mut self, gain: &Self::Gain, target: f32, time_constant_sec: f64);

    fn ramp_cutoff(&mut self, filter: &Self::Filter, target_hz: f32, time_constant_sec: f64);

    /// Stop and release `source` after `delay_sec` on the audio clock (0 = now).
    fn stop(&mut self, source: Self::Source, delay_sec: f64);
}
