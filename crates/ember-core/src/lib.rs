pub mod audio;
pub mod burn;
pub mod color;
pub mod config;
pub mod constants;
pub mod engine;
pub mod error;
pub mod flow_field;
pub mod mode;
pub mod mood;
pub mod outline;
pub mod painter;
pub mod particle;
pub mod system;

pub use audio::{AmbientType, AudioBackend, AudioEngine, BrownNoiseMode};
pub use burn::{GlyphOutlineSource, TextBounds};
pub use color::{map_range, Hsba};
pub use config::EngineConfig;
pub use engine::Engine;
pub use error::{AudioError, ConfigError};
pub use flow_field::FlowField;
pub use mode::{BreathFrame, BreathPrompt, ModeController, RenderMode};
pub use mood::{MoodHandle, MoodState};
pub use outline::{trace_outline, CoverageMask};
pub use painter::{BlendMode, Painter, Stroke};
pub use particle::{Behavior, Particle, ParticleKind};
pub use system::ParticleSystem;
