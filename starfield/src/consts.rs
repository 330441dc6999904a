//! Shared numeric constants for the starfield crate.

// ── Viewport ────────────────────────────────────────────────────

/// Viewports narrower than this get reduced entity populations.
pub const NARROW_VIEWPORT_PX: f64 = 768.0;

// ── Populations ─────────────────────────────────────────────────

/// Floating glyph count on a regular viewport.
pub const GLYPH_COUNT: usize = 35;

/// Floating glyph count on a narrow viewport.
pub const GLYPH_COUNT_NARROW: usize = 20;

/// Falling star count on a regular viewport.
pub const STAR_COUNT: usize = 120;

/// Falling star count on a narrow viewport.
pub const STAR_COUNT_NARROW: usize = 60;

/// Nebula cloud count (independent of viewport size).
pub const NEBULA_COUNT: usize = 5;

// ── Glyphs ──────────────────────────────────────────────────────

/// Glyph size range: `GLYPH_SIZE_MIN + rand * GLYPH_SIZE_SPAN`.
pub const GLYPH_SIZE_MIN: f64 = 2.0;
/// Size span on a regular viewport.
pub const GLYPH_SIZE_SPAN: f64 = 3.0;
/// Size span on a narrow viewport.
pub const GLYPH_SIZE_SPAN_NARROW: f64 = 2.0;

/// Drift speed range in px per tick.
pub const GLYPH_SPEED_MIN: f64 = 0.01;
pub const GLYPH_SPEED_SPAN: f64 = 0.02;

/// Rotation speed is uniform in `±GLYPH_ROTATION_SPEED_MAX` rad per time unit.
pub const GLYPH_ROTATION_SPEED_MAX: f64 = 0.000_5;

/// Glow never decays below this floor.
pub const GLOW_FLOOR: f64 = 0.3;
/// Initial glow range: `GLOW_FLOOR + rand * GLOW_SEED_SPAN`.
pub const GLOW_SEED_SPAN: f64 = 0.4;
/// Glow level while the pointer is inside the interaction radius.
pub const GLOW_ACTIVE: f64 = 0.8;
/// Glow lost per tick while the pointer is out of range.
pub const GLOW_DECAY: f64 = 0.02;

/// Pulse speed range.
pub const GLYPH_PULSE_SPEED_MIN: f64 = 0.002;
pub const GLYPH_PULSE_SPEED_SPAN: f64 = 0.004;

/// Interaction radius range in px: `MIN + rand * SPAN`.
pub const GLYPH_RADIUS_MIN: f64 = 50.0;
pub const GLYPH_RADIUS_SPAN: f64 = 100.0;

/// Speed at which a glyph is pushed directly away from the pointer.
pub const POINTER_PUSH_SPEED: f64 = 2.0;

// ── Stars ───────────────────────────────────────────────────────

/// Star radius is uniform in `[0, STAR_SIZE_MAX)`.
pub const STAR_SIZE_MAX: f64 = 1.5;

/// Fall speed range in px per tick.
pub const STAR_SPEED_MIN: f64 = 0.1;
pub const STAR_SPEED_SPAN: f64 = 0.5;

/// Trail capacity range: `MIN + rand_int(SPAN)`.
pub const TRAIL_LEN_MIN: usize = 5;
pub const TRAIL_LEN_SPAN: usize = 15;

/// Twinkle speed range.
pub const TWINKLE_SPEED_MIN: f64 = 0.01;
pub const TWINKLE_SPEED_SPAN: f64 = 0.05;

/// Star color palette as `"r, g, b"` fragments for rgba() composition.
pub const STAR_COLORS: [&str; 5] = [
    "147, 51, 234", // purple
    "64, 147, 255", // blue
    "255, 107, 107", // red
    "46, 204, 113", // green
    "241, 196, 15", // yellow
];

// ── Nebulae ─────────────────────────────────────────────────────

/// Nebula radius range in px: `MIN + rand * SPAN`.
pub const NEBULA_RADIUS_MIN: f64 = 100.0;
pub const NEBULA_RADIUS_SPAN: f64 = 200.0;

/// Drift speed range.
pub const NEBULA_SPEED_MIN: f64 = 0.000_5;
pub const NEBULA_SPEED_SPAN: f64 = 0.001;

/// Sinusoidal drift amplitude in px per tick.
pub const NEBULA_DRIFT_PX: f64 = 0.2;

// ── Shooting stars ──────────────────────────────────────────────

/// Per-tick probability of spawning a shooting star.
pub const SHOOTING_STAR_CHANCE: f64 = 0.01;

/// Tail length range in px: `MIN + rand * SPAN`.
pub const SHOOTING_STAR_LEN_MIN: f64 = 40.0;
pub const SHOOTING_STAR_LEN_SPAN: f64 = 80.0;

/// Speed range in px per tick.
pub const SHOOTING_STAR_SPEED_MIN: f64 = 10.0;
pub const SHOOTING_STAR_SPEED_SPAN: f64 = 15.0;

/// Life decay range per tick.
pub const SHOOTING_STAR_DECAY_MIN: f64 = 0.01;
pub const SHOOTING_STAR_DECAY_SPAN: f64 = 0.02;

// ── Rendering ───────────────────────────────────────────────────

/// Low-alpha overlay fill that fades previous frames into motion trails.
pub const TRAIL_FADE_FILL: &str = "rgba(0, 0, 0, 0.1)";
