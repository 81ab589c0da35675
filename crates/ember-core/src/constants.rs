// Shared simulation/audio tuning constants used by the engine and the web frontend.

// Flow field
pub const CELL_SIZE: f32 = 50.0; // px per flow cell (`scl`)
pub const NOISE_STEP: f64 = 0.1; // noise-space distance between neighbouring cells
pub const FIELD_MAGNITUDE: f32 = 0.5; // force magnitude of every flow vector
pub const FIELD_ANGLE_SPAN: f32 = std::f32::consts::TAU * 2.0; // noise [0,1] -> [0, 4pi)
pub const FIELD_TIME_STEP_BASE: f64 = 0.002;
pub const FIELD_TIME_STEP_ENERGY: f64 = 0.003;

// Particle populations and spawning
pub const AMBIENT_POPULATION: usize = 400;
pub const PRESS_SPAWN_COUNT: usize = 10;
pub const PRESS_SPAWN_JITTER: f32 = 20.0;
pub const DRAG_SPAWN_COUNT: usize = 5;
pub const DRAG_SPAWN_JITTER: f32 = 10.0;

// Particle kinematics
pub const AMBIENT_MAX_SPEED: f32 = 1.5;
pub const USER_MAX_SPEED: f32 = 2.0;
pub const TEXT_MAX_SPEED: f32 = 1.5;
pub const BURNING_SPEED_FACTOR: f32 = 2.0;

// Life
pub const FULL_LIFE: f32 = 255.0;
pub const USER_DECAY_PER_FRAME: f32 = 0.5;
pub const TEXT_DECAY_PER_FRAME: f32 = 2.0;
pub const ASH_LIFE_THRESHOLD: f32 = 100.0; // below this a burning glyph point turns grey

// Text ignition
pub const IGNITION_DELAY_MIN: u32 = 60; // frames
pub const IGNITION_DELAY_MAX: u32 = 150;
pub const SMOLDER_JITTER: f32 = 1.0;
pub const BURN_LATERAL_IMPULSE: f32 = 0.5; // +/- px/frame^2
pub const BURN_LIFT_MIN: f32 = -3.0; // upward is negative y
pub const BURN_LIFT_MAX: f32 = -1.0;

// Stroke styling
pub const AMBIENT_HUE_COLD: f32 = 230.0; // valence 0
pub const AMBIENT_HUE_WARM: f32 = 40.0; // valence 1
pub const AMBIENT_ALPHA: f32 = 0.05;
pub const USER_MAX_ALPHA: f32 = 0.3;
pub const USER_STROKE_WEIGHT: f32 = 6.0;
pub const TEXT_STROKE_WEIGHT: f32 = 3.0;
pub const BURNING_STROKE_WEIGHT: f32 = 2.0;

// Frame compositing
pub const FLOW_FADE_ALPHA: f32 = 0.03;
pub const BREATHE_FADE_ALPHA: f32 = 0.1;

// Burn text layout
pub const GLYPH_SAMPLE_DENSITY: f32 = 0.15; // outline points per px
pub const FONT_SIZE_SHORT: f32 = 100.0; // up to 8 chars
pub const FONT_SIZE_MEDIUM: f32 = 60.0; // 9..=15 chars
pub const FONT_SIZE_LONG: f32 = 40.0;

// Breathing guide
pub const BREATH_ANGULAR_RATE: f64 = 0.8; // rad/s, period 2pi/0.8 ~ 7.85s
pub const BREATH_DIAMETER_MIN: f32 = 100.0;
pub const BREATH_DIAMETER_MAX: f32 = 300.0;
pub const BREATH_HUE_MIN: f32 = 180.0;
pub const BREATH_HUE_MAX: f32 = 220.0;
pub const BREATH_TEXT_SIZE: f32 = 16.0;

// Ambient audio
pub const TONE_HZ: f32 = 432.0;
pub const NOISE_BUFFER_SECONDS: f32 = 2.0;
pub const DEFAULT_CUTOFF_HZ: f32 = 1000.0;
pub const DEFAULT_GAIN: f32 = 0.5;
pub const CUTOFF_MIN_HZ: f32 = 100.0;
pub const CUTOFF_MAX_HZ: f32 = 5000.0;
pub const RAMP_TIME_CONSTANT_SEC: f64 = 0.1;
pub const STOP_GRACE_SEC: f64 = 0.2; // fade must finish before the source is stopped
