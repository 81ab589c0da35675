use crate::audio::BrownNoiseMode;
use crate::constants::*;
use crate::error::ConfigError;

/// Tunables for one engine instance.
///
/// Fixed behavioural rules live in [`crate::constants`]; this struct only
/// carries the values a host may reasonably want to override.
#[derive(Clone, Debug)]
pub struct EngineConfig {
    pub cell_size: f32,
    pub noise_step: f64,
    pub ambient_population: usize,
    pub seed: u64,
    pub glyph_sample_density: f32,
    pub brown_noise: BrownNoiseMode,
    pub initial_gain: f32,
    pub default_cutoff_hz: f32,
    pub font_family: String,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            cell_size: CELL_SIZE,
            noise_step: NOISE_STEP,
            ambient_population: AMBIENT_POPULATION,
            seed: 42,
            glyph_sample_density: GLYPH_SAMPLE_DENSITY,
            brown_noise: BrownNoiseMode::default(),
            initial_gain: DEFAULT_GAIN,
            default_cutoff_hz: DEFAULT_CUTOFF_HZ,
            font_family: "\"Source Code Pro\", monospace".to_string(),
        }
    }
}

impl EngineConfig {
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.cell_size > 0.0) {
            return Err(ConfigError::CellSize(self.cell_size));
        }
        if !(self.glyph_sample_density > 0.0 && self.glyph_sample_density <= 1.0) {
            return Err(ConfigError::SampleDensity(self.glyph_sample_density));
        }
        if !(0.0..=1.0).contains(&self.initial_gain) {
            return Err(ConfigError::Gain(self.initial_gain));
        }
        if !(CUTOFF_MIN_HZ..=CUTOFF_MAX_HZ).contains(&self.default_cutoff_hz) {
            return Err(ConfigError::Cutoff(self.default_cutoff_hz));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert_eq!(EngineConfig::default().validate(), Ok(()));
    }

    #[test]
    fn rejects_out_of_range_values() {
        let mut c = EngineConfig::default();
        c.cell_size = 0.0;
        assert_eq!(c.validate(), Err(ConfigError::CellSize(0.0)));

        let mut c = EngineConfig::default();
        c.glyph_sample_density = 1.5;
        assert!(matches!(c.validate(), Err(ConfigError::SampleDensity(_))));

        let mut c = EngineConfig::default();
        c.initial_gain = -0.1;
        assert!(matches!(c.validate(), Err(ConfigError::Gain(_))));

        let mut c = EngineConfig::default();
        c.default_cutoff_hz = 20.0;
        assert!(matches!(c.validate(), Err(ConfigError::Cutoff(_))));
    }
}
