//! Ambient soundscape: type state machine, noise synthesis and pointer mapping.
//!
//! The graph itself is built through [`AudioBackend`], so the state machine
//! runs unchanged against WebAudio in the browser and against a recording
//! backend in tests.

pub mod backend;
pub mod engine;
pub mod mapping;
pub mod noise;

pub use backend::AudioBackend;
pub use engine::AudioEngine;
pub use mapping::{cutoff_for_x, gain_for_y, LiveParams};
pub use noise::{render_noise, BrownNoiseMode, NoiseColor};

/// Which ambient texture is playing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum AmbientType {
    #[default]
    Off,
    Brown,
    White,
    Pink,
    Tone432,
}

impl AmbientType {
    pub const ALL: [AmbientType; 5] = [
        AmbientType::Off,
        AmbientType::Brown,
        AmbientType::White,
        AmbientType::Pink,
        AmbientType::Tone432,
    ];

    /// Parse the names used by the host UI.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "off" | "mute" => Some(AmbientType::Off),
            "brown" => Some(AmbientType::Brown),
            "white" => Some(AmbientType::White),
            "pink" => Some(AmbientType::Pink),
            "432" | "tone432" | "tone" => Some(AmbientType::Tone432),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            AmbientType::Off => "off",
            AmbientType::Brown => "brown",
            AmbientType::White => "white",
            AmbientType::Pink => "pink",
            AmbientType::Tone432 => "432",
        }
    }

    pub fn noise_color(self) -> Option<NoiseColor> {
        match self {
            AmbientType::Brown => Some(NoiseColor::Brown),
            AmbientType::White => Some(NoiseColor::White),
            AmbientType::Pink => Some(NoiseColor::Pink),
            AmbientType::Off | AmbientType::Tone432 => None,
        }
    }

    /// Noise runs through the shared lowpass; the tone bypasses it.
    pub fn uses_filter(self) -> bool {
        self.noise_color().is_some()
    }
}
