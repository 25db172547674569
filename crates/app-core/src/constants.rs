// Shared simulation tuning constants used by the web frontend and tests.

// Field population
pub const PARTICLE_COUNT: usize = 2000; // lower on slow machines, raise for denser glyphs

// Pointer interaction
pub const CURSOR_RADIUS: f32 = 120.0; // repulsion reach in canvas pixels
pub const REPULSION_STRENGTH: f32 = 3.0; // multiplier on the falloff * density push

// Motion
pub const EASE_DIVISOR: f32 = 15.0; // fraction of remaining distance covered per tick; smaller converges faster
pub const DRIFT_SPEED: f32 = 2.0; // free-drift velocity range, symmetric around zero
pub const VELOCITY_JITTER: f32 = 0.05; // per-tick random velocity perturbation bound
pub const MAX_DRIFT_SPEED: f32 = 3.0; // jitter speed ceiling
pub const EXPLODE_SPEED: f32 = 50.0; // explosion velocity range, symmetric around zero

// Particle appearance / weight
pub const SIZE_MIN: f32 = 1.0;
pub const SIZE_MAX: f32 = 3.0;
pub const DENSITY_MIN: f32 = 1.0;
pub const DENSITY_MAX: f32 = 31.0;

// Glyph sampling
pub const SAMPLE_GAP: u32 = 2; // scan stride; smaller gives a denser point cloud
pub const ALPHA_THRESHOLD: u8 = 128; // "solidly inside the glyph" opacity cutoff
pub const GLYPH_FONT_FRACTION: f32 = 0.1; // font size as a fraction of surface width
