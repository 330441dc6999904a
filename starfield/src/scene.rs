//! Entity types for the animated scene and their per-tick motion.
//!
//! All randomness comes from `fastrand`, so native tests can seed the
//! generator and get deterministic populations. No entity touches the 2D
//! context — drawing lives in [`crate::render`].

#[cfg(test)]
#[path = "scene_test.rs"]
mod scene_test;

use std::collections::VecDeque;
use std::f64::consts::PI;

use crate::consts::{
    GLOW_ACTIVE, GLOW_DECAY, GLOW_FLOOR, GLOW_SEED_SPAN, GLYPH_PULSE_SPEED_MIN, GLYPH_PULSE_SPEED_SPAN,
    GLYPH_RADIUS_MIN, GLYPH_RADIUS_SPAN, GLYPH_ROTATION_SPEED_MAX, GLYPH_SIZE_MIN, GLYPH_SIZE_SPAN,
    GLYPH_SIZE_SPAN_NARROW, GLYPH_SPEED_MIN, GLYPH_SPEED_SPAN, NEBULA_DRIFT_PX, NEBULA_RADIUS_MIN,
    NEBULA_RADIUS_SPAN, NEBULA_SPEED_MIN, NEBULA_SPEED_SPAN, POINTER_PUSH_SPEED, SHOOTING_STAR_DECAY_MIN,
    SHOOTING_STAR_DECAY_SPAN, SHOOTING_STAR_LEN_MIN, SHOOTING_STAR_LEN_SPAN, SHOOTING_STAR_SPEED_MIN,
    SHOOTING_STAR_SPEED_SPAN, STAR_COLORS, STAR_SIZE_MAX, STAR_SPEED_MIN, STAR_SPEED_SPAN, TRAIL_LEN_MIN,
    TRAIL_LEN_SPAN, TWINKLE_SPEED_MIN, TWINKLE_SPEED_SPAN,
};
use crate::glyph::GlyphShape;

/// Last-known pointer or touch coordinate in CSS pixels.
///
/// Written only by the host's input handlers; the tick reads it and never
/// mutates it.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Pointer {
    pub x: f64,
    pub y: f64,
}

/// Wrap a coordinate into `[0, span)` (toroidal space).
///
/// A non-positive span leaves the value untouched; that only happens before
/// the first `set_viewport`.
#[must_use]
pub fn wrap(value: f64, span: f64) -> f64 {
    if span > 0.0 { value.rem_euclid(span) } else { value }
}

// =============================================================
// Floating glyphs
// =============================================================

/// A drifting tech glyph that flees the pointer and glows when approached.
#[derive(Debug, Clone)]
pub struct FloatingGlyph {
    pub x: f64,
    pub y: f64,
    pub size: f64,
    /// Drift speed in px per tick while not fleeing.
    pub speed: f64,
    /// Drift heading in radians.
    pub heading: f64,
    /// Spin applied as `time * rotation_speed`.
    pub rotation_speed: f64,
    /// Glow intensity, clamped to `[GLOW_FLOOR, 1.0]`.
    pub glow: f64,
    pub pulse_phase: f64,
    pub pulse_speed: f64,
    /// Pointer distance below which the glyph reacts.
    pub radius: f64,
    pub shape: GlyphShape,
}

impl FloatingGlyph {
    /// Spawn a glyph at a random position with attributes in the documented ranges.
    #[must_use]
    pub fn spawn(width: f64, height: f64, narrow: bool) -> Self {
        let size_span = if narrow { GLYPH_SIZE_SPAN_NARROW } else { GLYPH_SIZE_SPAN };
        Self {
            x: fastrand::f64() * width,
            y: fastrand::f64() * height,
            size: GLYPH_SIZE_MIN + fastrand::f64() * size_span,
            speed: GLYPH_SPEED_MIN + fastrand::f64() * GLYPH_SPEED_SPAN,
            heading: fastrand::f64() * PI * 2.0,
            rotation_speed: (fastrand::f64() - 0.5) * 2.0 * GLYPH_ROTATION_SPEED_MAX,
            glow: GLOW_FLOOR + fastrand::f64() * GLOW_SEED_SPAN,
            pulse_phase: fastrand::f64() * PI * 2.0,
            pulse_speed: GLYPH_PULSE_SPEED_MIN + fastrand::f64() * GLYPH_PULSE_SPEED_SPAN,
            radius: GLYPH_RADIUS_MIN + fastrand::f64() * GLYPH_RADIUS_SPAN,
            shape: GlyphShape::pick(),
        }
    }

    /// Distance from this glyph to the pointer.
    #[must_use]
    pub fn pointer_distance(&self, pointer: Pointer) -> f64 {
        let dx = pointer.x - self.x;
        let dy = pointer.y - self.y;
        dx.hypot(dy)
    }

    /// Advance one tick: flee the pointer when inside the interaction radius,
    /// otherwise drift along the assigned heading while the glow decays
    /// toward its floor. Position wraps toroidally.
    pub fn advance(&mut self, pointer: Pointer, width: f64, height: f64) {
        let dx = pointer.x - self.x;
        let dy = pointer.y - self.y;
        let distance = dx.hypot(dy);

        if distance < self.radius {
            let away = dy.atan2(dx);
            self.x -= away.cos() * POINTER_PUSH_SPEED;
            self.y -= away.sin() * POINTER_PUSH_SPEED;
            self.glow = GLOW_ACTIVE;
        } else {
            self.glow = (self.glow - GLOW_DECAY).max(GLOW_FLOOR);
            self.x += self.heading.cos() * self.speed;
            self.y += self.heading.sin() * self.speed;
        }
        self.glow = self.glow.clamp(GLOW_FLOOR, 1.0);

        self.x = wrap(self.x, width);
        self.y = wrap(self.y, height);
    }
}

// =============================================================
// Falling stars
// =============================================================

/// One historical position in a star's trail, with the twinkle level at the
/// time it was recorded.
#[derive(Debug, Clone, Copy)]
pub struct TrailPoint {
    pub x: f64,
    pub y: f64,
    pub twinkle: f64,
}

/// A falling star point with a bounded fading trail.
#[derive(Debug, Clone)]
pub struct StarPoint {
    pub x: f64,
    pub y: f64,
    pub size: f64,
    /// Vertical fall speed in px per tick.
    pub speed: f64,
    /// Recent positions, newest first. Never longer than `max_trail`.
    pub trail: VecDeque<TrailPoint>,
    pub max_trail: usize,
    /// Palette color as an `"r, g, b"` fragment.
    pub color: &'static str,
    pub twinkle_speed: f64,
    pub twinkle_phase: f64,
}

impl StarPoint {
    /// Spawn a star at a random position with attributes in the documented ranges.
    #[must_use]
    pub fn spawn(width: f64, height: f64) -> Self {
        Self {
            x: fastrand::f64() * width,
            y: fastrand::f64() * height,
            size: fastrand::f64() * STAR_SIZE_MAX,
            speed: STAR_SPEED_MIN + fastrand::f64() * STAR_SPEED_SPAN,
            trail: VecDeque::new(),
            max_trail: TRAIL_LEN_MIN + fastrand::usize(..TRAIL_LEN_SPAN),
            color: STAR_COLORS[fastrand::usize(..STAR_COLORS.len())],
            twinkle_speed: TWINKLE_SPEED_MIN + fastrand::f64() * TWINKLE_SPEED_SPAN,
            twinkle_phase: fastrand::f64() * PI * 2.0,
        }
    }

    /// Twinkle level in `[0, 1]` at the given scene time.
    #[must_use]
    pub fn twinkle_at(&self, time: f64) -> f64 {
        (time * self.twinkle_speed + self.twinkle_phase).sin() * 0.5 + 0.5
    }

    /// Advance one tick: fall, reset to a random top position past the bottom
    /// edge (clearing the trail — stars fall, they do not wrap), then record
    /// the new position in the trail, evicting the oldest point past capacity.
    pub fn advance(&mut self, time: f64, width: f64, height: f64) {
        self.y += self.speed;
        if self.y > height {
            self.y = 0.0;
            self.x = fastrand::f64() * width;
            self.trail.clear();
        }

        let twinkle = self.twinkle_at(time);
        self.trail.push_front(TrailPoint { x: self.x, y: self.y, twinkle });
        self.trail.truncate(self.max_trail);
    }
}

// =============================================================
// Nebulae
// =============================================================

/// A large translucent cloud drifting sinusoidally.
#[derive(Debug, Clone)]
pub struct NebulaCloud {
    pub x: f64,
    pub y: f64,
    pub radius: f64,
    /// Full rgba() color string, fixed at spawn.
    pub color: String,
    pub speed: f64,
}

impl NebulaCloud {
    /// Spawn a nebula with a random translucent violet or teal tint.
    #[must_use]
    pub fn spawn(width: f64, height: f64) -> Self {
        let color = if fastrand::f64() > 0.5 {
            format!(
                "rgba({}, {}, {}, 0.03)",
                50 + fastrand::u32(..100),
                fastrand::u32(..50),
                100 + fastrand::u32(..150),
            )
        } else {
            format!(
                "rgba({}, {}, {}, 0.03)",
                fastrand::u32(..50),
                50 + fastrand::u32(..100),
                100 + fastrand::u32(..150),
            )
        };
        Self {
            x: fastrand::f64() * width,
            y: fastrand::f64() * height,
            radius: NEBULA_RADIUS_MIN + fastrand::f64() * NEBULA_RADIUS_SPAN,
            color,
            speed: NEBULA_SPEED_MIN + fastrand::f64() * NEBULA_SPEED_SPAN,
        }
    }

    /// Advance one tick: drift by a sinusoid of scene time, wrapping toroidally.
    pub fn advance(&mut self, time: f64, width: f64, height: f64) {
        self.x = wrap(self.x + (time * self.speed).sin() * NEBULA_DRIFT_PX, width);
        self.y = wrap(self.y + (time * self.speed).cos() * NEBULA_DRIFT_PX, height);
    }
}

// =============================================================
// Shooting stars
// =============================================================

/// A transient streak spawned probabilistically and discarded once its life
/// reaches zero. Shooting stars never wrap.
#[derive(Debug, Clone)]
pub struct ShootingStar {
    pub x: f64,
    pub y: f64,
    /// Tail length in px at full life.
    pub length: f64,
    /// Heading in radians, pointing down-and-across.
    pub heading: f64,
    pub speed: f64,
    /// Remaining life in `(0, 1]`.
    pub life: f64,
    /// Life lost per tick.
    pub decay: f64,
}

impl ShootingStar {
    /// Spawn at a random position along the top edge.
    #[must_use]
    pub fn spawn(width: f64) -> Self {
        Self {
            x: fastrand::f64() * width,
            y: 0.0,
            length: SHOOTING_STAR_LEN_MIN + fastrand::f64() * SHOOTING_STAR_LEN_SPAN,
            heading: PI / 4.0 + fastrand::f64() * PI / 4.0,
            speed: SHOOTING_STAR_SPEED_MIN + fastrand::f64() * SHOOTING_STAR_SPEED_SPAN,
            life: 1.0,
            decay: SHOOTING_STAR_DECAY_MIN + fastrand::f64() * SHOOTING_STAR_DECAY_SPAN,
        }
    }

    /// Advance one tick along the heading. Returns `false` once life is spent.
    pub fn advance(&mut self) -> bool {
        self.x += self.heading.cos() * self.speed;
        self.y += self.heading.sin() * self.speed;
        self.life -= self.decay;
        self.life > 0.0
    }
}
