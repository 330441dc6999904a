use wasm_bindgen::JsValue;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::consts::{
    GLYPH_COUNT, GLYPH_COUNT_NARROW, NARROW_VIEWPORT_PX, NEBULA_COUNT, SHOOTING_STAR_CHANCE, STAR_COUNT,
    STAR_COUNT_NARROW,
};
use crate::render;
use crate::scene::{FloatingGlyph, NebulaCloud, Pointer, ShootingStar, StarPoint};

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

/// Core scene state — all logic that doesn't depend on the canvas element.
///
/// Separated from [`Field`] so the per-tick motion and lifecycle rules can be
/// tested natively, without WASM/browser dependencies.
pub struct FieldCore {
    pub glyphs: Vec<FloatingGlyph>,
    pub stars: Vec<StarPoint>,
    pub nebulae: Vec<NebulaCloud>,
    pub shooting_stars: Vec<ShootingStar>,
    pub pointer: Pointer,
    pub viewport_width: f64,
    pub viewport_height: f64,
    pub dpr: f64,
    /// Entity populations are reduced while this is set.
    pub narrow: bool,
    halted: bool,
}

impl Default for FieldCore {
    fn default() -> Self {
        Self {
            glyphs: Vec::new(),
            stars: Vec::new(),
            nebulae: Vec::new(),
            shooting_stars: Vec::new(),
            pointer: Pointer::default(),
            viewport_width: 0.0,
            viewport_height: 0.0,
            dpr: 1.0,
            narrow: false,
            halted: false,
        }
    }
}

impl FieldCore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // --- Lifecycle ---

    /// Replace all entity populations with freshly randomized ones, scaled
    /// down on narrow viewports. Called once at mount, after the first
    /// `set_viewport`.
    pub fn populate(&mut self) {
        let (w, h) = (self.viewport_width, self.viewport_height);
        let glyph_count = if self.narrow { GLYPH_COUNT_NARROW } else { GLYPH_COUNT };
        let star_count = if self.narrow { STAR_COUNT_NARROW } else { STAR_COUNT };

        self.glyphs = (0..glyph_count).map(|_| FloatingGlyph::spawn(w, h, self.narrow)).collect();
        self.stars = (0..star_count).map(|_| StarPoint::spawn(w, h)).collect();
        self.nebulae = (0..NEBULA_COUNT).map(|_| NebulaCloud::spawn(w, h)).collect();
        self.shooting_stars.clear();
    }

    /// Stop the scene permanently. Every later [`tick`](Self::tick) is a
    /// no-op that reports "do not reschedule".
    pub fn halt(&mut self) {
        self.halted = true;
    }

    #[must_use]
    pub fn is_halted(&self) -> bool {
        self.halted
    }

    // --- Inputs ---

    /// Update viewport dimensions, device pixel ratio, and the narrow flag.
    /// Existing entity populations are kept as-is.
    pub fn set_viewport(&mut self, width_css: f64, height_css: f64, dpr: f64) {
        self.viewport_width = width_css;
        self.viewport_height = height_css;
        self.dpr = dpr.max(1.0);
        self.narrow = width_css < NARROW_VIEWPORT_PX;
    }

    /// Record the latest pointer or touch coordinate.
    pub fn set_pointer(&mut self, x: f64, y: f64) {
        self.pointer = Pointer { x, y };
    }

    // --- Tick ---

    /// Advance the whole scene by one tick at the given scene time (seconds).
    ///
    /// Returns whether a next frame should be scheduled; `false` once halted.
    pub fn tick(&mut self, time: f64) -> bool {
        if self.halted {
            return false;
        }
        let (w, h) = (self.viewport_width, self.viewport_height);
        if w <= 0.0 || h <= 0.0 {
            return true;
        }

        for nebula in &mut self.nebulae {
            nebula.advance(time, w, h);
        }
        for star in &mut self.stars {
            star.advance(time, w, h);
        }
        let pointer = self.pointer;
        for glyph in &mut self.glyphs {
            glyph.advance(pointer, w, h);
        }

        if fastrand::f64() < SHOOTING_STAR_CHANCE {
            self.shooting_stars.push(ShootingStar::spawn(w));
        }
        self.shooting_stars.retain_mut(ShootingStar::advance);

        true
    }
}

/// The full animated background. Wraps [`FieldCore`] and owns the browser
/// canvas element.
pub struct Field {
    canvas: HtmlCanvasElement,
    pub core: FieldCore,
}

impl Field {
    /// Create a field bound to the given canvas element.
    #[must_use]
    pub fn new(canvas: HtmlCanvasElement) -> Self {
        Self { canvas, core: FieldCore::new() }
    }

    /// Update viewport state and resize the canvas backing store by DPR.
    pub fn set_viewport(&mut self, width_css: f64, height_css: f64, dpr: f64) {
        self.core.set_viewport(width_css, height_css, dpr);
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        {
            self.canvas.set_width((width_css * self.core.dpr).round().max(1.0) as u32);
            self.canvas.set_height((height_css * self.core.dpr).round().max(1.0) as u32);
        }
    }

    pub fn set_pointer(&mut self, x: f64, y: f64) {
        self.core.set_pointer(x, y);
    }

    #[must_use]
    pub fn canvas(&self) -> &HtmlCanvasElement {
        &self.canvas
    }

    pub fn populate(&mut self) {
        self.core.populate();
    }

    pub fn halt(&mut self) {
        self.core.halt();
    }

    /// Advance and draw one frame at the given scene time (seconds).
    ///
    /// Returns whether a next frame should be scheduled.
    ///
    /// # Errors
    ///
    /// Returns `Err` if any `Canvas2D` call fails; the scene state has still
    /// advanced and the caller may keep scheduling frames.
    pub fn frame(&mut self, time: f64) -> Result<bool, JsValue> {
        if !self.core.tick(time) {
            return Ok(false);
        }
        if let Some(ctx) = context_2d(&self.canvas) {
            render::draw(&ctx, &self.core, time)?;
        }
        Ok(true)
    }
}

fn context_2d(canvas: &HtmlCanvasElement) -> Option<CanvasRenderingContext2d> {
    use wasm_bindgen::JsCast;
    let value = canvas.get_context("2d").unwrap_or(None)?;
    match value.dyn_into::<CanvasRenderingContext2d>() {
        Ok(ctx) => Some(ctx),
        Err(_) => None,
    }
}
