use thiserror::Error;

/// Failures raised while building or driving the ambient audio graph.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum AudioError {
    #[error("audio context unavailable: {0}")]
    Context(String),
    #[error("{node} node construction failed: {reason}")]
    Node { node: &'static str, reason: String },
    #[error("noise buffer allocation failed: {0}")]
    Buffer(String),
}

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    #[error("cell size must be positive, got {0}")]
    CellSize(f32),
    #[error("glyph sample density must be in (0, 1], got {0}")]
    SampleDensity(f32),
    #[error("initial gain must be within [0, 1], got {0}")]
    Gain(f32),
    #[error("cutoff {0} Hz is outside the 100..=5000 Hz control range")]
    Cutoff(f32),
}
