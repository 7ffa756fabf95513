/// Scene layout and animation tuning constants.
///
/// Per-frame quantities are expressed in "per animation frame" units; the
/// loop is driven by requestAnimationFrame and does not scale by dt.
use std::f32::consts::PI;

// Nominal orbit radii (CSS px), innermost first
pub const RING_RADII: [f32; 4] = [90.0, 170.0, 260.0, 360.0];

// Population sizes
pub const PARTICLE_COUNT: usize = 140;
pub const STAR_COUNT: usize = 80;
pub const COMET_CAPACITY: usize = 3;

// Particles
pub const PARTICLE_RADIUS_JITTER: f32 = 11.0; // +/- around the ring radius
pub const PARTICLE_SPEED_MIN: f32 = 0.002;
pub const PARTICLE_SPEED_SPAN: f32 = 0.004;
pub const PARTICLE_SIZE_MIN: f32 = 2.0;
pub const PARTICLE_SIZE_SPAN: f32 = 2.5;
pub const PARTICLE_HUE_MIN: f32 = 190.0;
pub const PARTICLE_HUE_SPAN: f32 = 120.0;
pub const PARTICLE_TILT_PER_PX: f32 = 0.0008; // cosmetic marker rotation
pub const PARTICLE_LINE_WIDTH: f64 = 1.25;
pub const TRIANGLE_HALF_BASE: f32 = 0.95;

// Stars
pub const STAR_SIZE_MIN: f32 = 0.4;
pub const STAR_SIZE_SPAN: f32 = 1.2;
pub const STAR_TWINKLE_MIN: f32 = 0.005;
pub const STAR_TWINKLE_SPAN: f32 = 0.01;
pub const STAR_DRIFT_PX: f32 = 0.02;
pub const STAR_ALPHA_BASE: f32 = 0.3;
pub const STAR_ALPHA_SWING: f32 = 0.3;

// Arc segments
pub const ARC_BASE_SEGMENTS: usize = 6;
pub const ARC_SEGMENTS_PER_RING: usize = 2;
pub const ARC_RADIUS_INSET: f32 = 12.0;
pub const ARC_SPEED_BASE: f32 = 0.0006;
pub const ARC_SPEED_PER_RING: f32 = 0.0003;
pub const ARC_LINE_WIDTH: f64 = 2.0;

// Wobble rings
pub const RING_SAMPLES: usize = 120;
pub const RING_WOBBLE_FREQ_BASE: f32 = 1.5;
pub const RING_WOBBLE_FREQ_STEP: f32 = 0.25;
pub const RING_WOBBLE_AMPLITUDE: f32 = 4.0;
pub const RING_ALPHA_BASE: f32 = 0.4;
pub const RING_ALPHA_STEP: f32 = 0.07;
pub const RING_LINE_WIDTH: f64 = 1.2;

// Centre bloom and emblem
pub const BLOOM_RADIUS: f32 = 110.0;
pub const EMBLEM_RADIUS: f32 = 14.0;
pub const EMBLEM_LINE_WIDTH: f64 = 1.6;

// Comets
pub const COMET_SPAWN_CHANCE: f32 = 0.01;
pub const COMET_ORBIT_GAP: f32 = 40.0;
pub const COMET_ORBIT_SPAN: f32 = 60.0;
pub const COMET_SPEED_MIN: f32 = 0.02;
pub const COMET_SPEED_SPAN: f32 = 0.02;
pub const COMET_DECAY: f32 = 0.985;
pub const COMET_MIN_LIFE: f32 = 0.01; // below this a comet is pruned
pub const COMET_TRAIL_ANGLE: f32 = 0.4;
pub const COMET_TRAIL_RADIUS_SCALE: f32 = 0.96;
pub const COMET_HEAD_ALPHA: f32 = 0.6;
pub const COMET_LINE_WIDTH: f64 = 2.0;

// Viewport
pub const PARALLAX_FACTOR: f32 = 0.02;
pub const CENTER_LIFT_MAX: f32 = 120.0;
pub const CENTER_LIFT_FRACTION: f32 = 0.06;
pub const MAX_DEVICE_PIXEL_RATIO: f64 = 2.0;

pub const TAU: f32 = 2.0 * PI;

// Entry transition timing (ms)
pub const EXIT_TRANSITION_MS: f64 = 620.0;
pub const REVEAL_BASE_DELAY_MS: f64 = 80.0;
pub const REVEAL_STEP_MS: f64 = 60.0;
