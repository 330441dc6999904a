//! The fixed palette of procedural glyph shapes.
//!
//! Each variant is a pure trace routine of (size, time) drawn at the origin;
//! glyphs carry no state of their own. The actual path-building lives in
//! [`crate::render`] — this module owns the variant set, the per-variant
//! stroke color, and random selection.

#[cfg(test)]
#[path = "glyph_test.rs"]
mod glyph_test;

/// A decorative tech-themed shape drawn by a floating glyph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GlyphShape {
    /// Three spinning orbital rings around a core dot.
    Orbit,
    /// Pulsing square with crosshair lines.
    Reticle,
    /// W-shaped zigzag inside a pulsing circle.
    Wave,
    /// Tall shield with horizontal detail bars.
    Shield,
    /// Squat shield variant with offset detail bars.
    Crest,
    /// Hexagon with a vertical seam.
    Hex,
    /// Cylinder drawn as two ellipses joined by walls.
    Cylinder,
    /// Cluster of overlapping circles.
    Cloud,
    /// Opening and closing code brackets.
    Brackets,
}

/// All shapes, in palette order.
pub const ALL_SHAPES: [GlyphShape; 9] = [
    GlyphShape::Orbit,
    GlyphShape::Reticle,
    GlyphShape::Wave,
    GlyphShape::Shield,
    GlyphShape::Crest,
    GlyphShape::Hex,
    GlyphShape::Cylinder,
    GlyphShape::Cloud,
    GlyphShape::Brackets,
];

impl GlyphShape {
    /// Stroke color as an `"r, g, b"` fragment for rgba() composition.
    #[must_use]
    pub fn color(self) -> &'static str {
        match self {
            Self::Orbit => "61, 184, 255",
            Self::Reticle => "0, 122, 204",
            Self::Wave => "33, 117, 155",
            Self::Shield => "227, 79, 38",
            Self::Crest => "38, 77, 228",
            Self::Hex => "104, 160, 99",
            Self::Cylinder => "237, 114, 152",
            Self::Cloud => "66, 165, 245",
            Self::Brackets => "255, 193, 7",
        }
    }

    /// Pick a shape uniformly at random.
    #[must_use]
    pub fn pick() -> Self {
        ALL_SHAPES[fastrand::usize(..ALL_SHAPES.len())]
    }
}
