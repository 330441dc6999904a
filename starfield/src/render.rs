//! Rendering: draws the animated scene to a 2D context.
//!
//! This module is the only place that touches [`web_sys::CanvasRenderingContext2d`].
//! It receives a read-only view of the scene and produces pixels — it does not
//! mutate any engine state.
//!
//! All fallible `Canvas2D` calls propagate errors via `Result<(), JsValue>`.
//! The top-level caller ([`crate::engine::Field::frame`]) handles the result.

use std::f64::consts::PI;

use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use crate::consts::TRAIL_FADE_FILL;
use crate::engine::FieldCore;
use crate::glyph::GlyphShape;
use crate::scene::{FloatingGlyph, NebulaCloud, Pointer, ShootingStar, StarPoint};

const TAU: f64 = PI * 2.0;

/// Pulse factor for a glyph at the given scene time: a slow oscillation
/// around zero used to modulate scale, shadow, and line width.
fn pulse_at(glyph: &FloatingGlyph, time: f64) -> f64 {
    (time * glyph.pulse_speed * 5.0 + glyph.pulse_phase).sin()
}

/// Draw the full scene: fade overlay, nebulae, star trails, glyphs, and
/// shooting stars, in that order.
///
/// # Errors
///
/// Returns `Err` if any `Canvas2D` call fails (e.g. invalid context state).
pub fn draw(ctx: &CanvasRenderingContext2d, core: &FieldCore, time: f64) -> Result<(), JsValue> {
    let (w, h) = (core.viewport_width, core.viewport_height);

    // Layer 0: DPR transform and the low-alpha fade that turns previous
    // frames into motion trails instead of a hard clear.
    ctx.set_transform(core.dpr, 0.0, 0.0, core.dpr, 0.0, 0.0)?;
    ctx.set_fill_style_str(TRAIL_FADE_FILL);
    ctx.fill_rect(0.0, 0.0, w, h);

    for nebula in &core.nebulae {
        draw_nebula(ctx, nebula)?;
    }
    for star in &core.stars {
        draw_star(ctx, star)?;
    }
    for glyph in &core.glyphs {
        draw_glyph(ctx, glyph, core.pointer, time)?;
    }
    for shooting in &core.shooting_stars {
        draw_shooting_star(ctx, shooting)?;
    }

    Ok(())
}

// =============================================================
// Scene layers
// =============================================================

fn draw_nebula(ctx: &CanvasRenderingContext2d, nebula: &NebulaCloud) -> Result<(), JsValue> {
    let gradient = ctx.create_radial_gradient(nebula.x, nebula.y, 0.0, nebula.x, nebula.y, nebula.radius)?;
    gradient.add_color_stop(0.0, &nebula.color)?;
    gradient.add_color_stop(1.0, "rgba(0, 0, 0, 0)")?;

    ctx.set_fill_style_canvas_gradient(&gradient);
    ctx.begin_path();
    ctx.arc(nebula.x, nebula.y, nebula.radius, 0.0, TAU)?;
    ctx.fill();
    Ok(())
}

fn draw_star(ctx: &CanvasRenderingContext2d, star: &StarPoint) -> Result<(), JsValue> {
    #[allow(clippy::cast_precision_loss)]
    let max_trail = star.max_trail.max(1) as f64;
    for (index, point) in star.trail.iter().enumerate() {
        #[allow(clippy::cast_precision_loss)]
        let age = index as f64 / max_trail;
        let alpha = (1.0 - age) * 0.5 * point.twinkle;
        ctx.set_fill_style_str(&format!("rgba({}, {alpha})", star.color));
        ctx.begin_path();
        ctx.arc(point.x, point.y, star.size * point.twinkle, 0.0, TAU)?;
        ctx.fill();
    }
    Ok(())
}

fn draw_glyph(
    ctx: &CanvasRenderingContext2d,
    glyph: &FloatingGlyph,
    pointer: Pointer,
    time: f64,
) -> Result<(), JsValue> {
    let distance = glyph.pointer_distance(pointer);
    let pulse = pulse_at(glyph, time);
    let scale = 1.0 + pulse * 0.2;
    let color = glyph.shape.color();

    ctx.save();
    ctx.translate(glyph.x, glyph.y)?;
    ctx.scale(scale, scale)?;
    ctx.rotate(time * glyph.rotation_speed)?;

    ctx.set_shadow_color(&format!("rgba({color}, {})", glyph.glow));
    ctx.set_shadow_blur(20.0 + pulse * 10.0);
    ctx.set_stroke_style_str(&format!("rgba({color}, {})", glyph.glow));
    ctx.set_line_width(1.5 + pulse * 0.5);

    trace_shape(ctx, glyph.shape, glyph.size * 2.0, time)?;
    ctx.stroke();

    // Proximity ring: grows as the pointer gets closer, fading with distance.
    if distance < glyph.radius {
        let proximity = 1.0 - distance / glyph.radius;
        ctx.begin_path();
        ctx.arc(0.0, 0.0, glyph.size * 4.0 * proximity, 0.0, TAU)?;
        ctx.set_stroke_style_str(&format!("rgba({color}, {})", 0.2 * proximity));
        ctx.stroke();
    }

    ctx.restore();
    Ok(())
}

fn draw_shooting_star(ctx: &CanvasRenderingContext2d, shooting: &ShootingStar) -> Result<(), JsValue> {
    let tail_x = shooting.x - shooting.heading.cos() * shooting.length * shooting.life;
    let tail_y = shooting.y - shooting.heading.sin() * shooting.length * shooting.life;

    let gradient = ctx.create_linear_gradient(shooting.x, shooting.y, tail_x, tail_y);
    gradient.add_color_stop(0.0, &format!("rgba(255, 255, 255, {})", shooting.life))?;
    gradient.add_color_stop(1.0, "rgba(255, 255, 255, 0)")?;

    ctx.begin_path();
    ctx.move_to(shooting.x, shooting.y);
    ctx.line_to(tail_x, tail_y);
    ctx.set_stroke_style_canvas_gradient(&gradient);
    ctx.set_line_width(2.0 * shooting.life);
    ctx.stroke();
    Ok(())
}

// =============================================================
// Glyph shape tracing
// =============================================================

/// Build the path for a glyph shape at the origin. Pure function of
/// (shape, size, time); the caller owns transform, style, and stroking.
fn trace_shape(ctx: &CanvasRenderingContext2d, shape: GlyphShape, s: f64, time: f64) -> Result<(), JsValue> {
    match shape {
        GlyphShape::Orbit => trace_orbit(ctx, s, time),
        GlyphShape::Reticle => trace_reticle(ctx, s, time),
        GlyphShape::Wave => trace_wave(ctx, s, time),
        GlyphShape::Shield => trace_shield(ctx, s, time),
        GlyphShape::Crest => trace_crest(ctx, s, time),
        GlyphShape::Hex => trace_hex(ctx, s, time),
        GlyphShape::Cylinder => trace_cylinder(ctx, s, time),
        GlyphShape::Cloud => trace_cloud(ctx, s, time),
        GlyphShape::Brackets => {
            trace_brackets(ctx, s, time);
            Ok(())
        }
    }
}

fn trace_orbit(ctx: &CanvasRenderingContext2d, s: f64, time: f64) -> Result<(), JsValue> {
    let spin = time * 2.0;
    ctx.begin_path();
    ctx.ellipse(0.0, 0.0, s * 2.0, s * 0.8, spin, 0.0, TAU)?;
    ctx.move_to(-s, 0.0);
    ctx.ellipse(0.0, 0.0, s * 2.0, s * 0.8, spin + PI / 3.0, 0.0, TAU)?;
    ctx.move_to(-s, 0.0);
    ctx.ellipse(0.0, 0.0, s * 2.0, s * 0.8, spin - PI / 3.0, 0.0, TAU)?;
    ctx.arc(0.0, 0.0, s * 0.5, 0.0, TAU)?;
    Ok(())
}

fn trace_reticle(ctx: &CanvasRenderingContext2d, s: f64, time: f64) -> Result<(), JsValue> {
    let pulse = (time * 3.0).sin() * 0.2 + 1.0;
    ctx.begin_path();
    ctx.rect(-s * 1.2 * pulse, -s * 1.2 * pulse, s * 2.4 * pulse, s * 2.4 * pulse);
    ctx.move_to(-s * 1.5, 0.0);
    ctx.line_to(s * 1.5, 0.0);
    ctx.move_to(0.0, -s * 1.5);
    ctx.line_to(0.0, s * 1.5);
    Ok(())
}

fn trace_wave(ctx: &CanvasRenderingContext2d, s: f64, time: f64) -> Result<(), JsValue> {
    let pulse = (time * 2.0).sin() * 0.2 + 1.0;
    ctx.begin_path();
    ctx.move_to(-s, -s * 0.5);
    ctx.line_to(-s * 0.6, -s * 0.5);
    ctx.line_to(-s * 0.3, s * 0.5);
    ctx.line_to(0.0, -s * 0.5);
    ctx.line_to(s * 0.3, s * 0.5);
    ctx.line_to(s * 0.6, -s * 0.5);
    ctx.line_to(s, -s * 0.5);
    ctx.move_to(s * 1.5 * pulse, 0.0);
    ctx.arc(0.0, 0.0, s * 1.5 * pulse, 0.0, TAU)?;
    Ok(())
}

fn trace_shield(ctx: &CanvasRenderingContext2d, s: f64, time: f64) -> Result<(), JsValue> {
    let pulse = (time * 2.5).sin() * 0.15 + 1.0;
    ctx.begin_path();
    ctx.move_to(0.0, -s * 1.5 * pulse);
    ctx.line_to(-s * pulse, s * pulse);
    ctx.line_to(0.0, s * 1.5 * pulse);
    ctx.line_to(s * pulse, s * pulse);
    ctx.line_to(0.0, -s * 1.5 * pulse);
    ctx.move_to(-s * 0.5, 0.0);
    ctx.line_to(s * 0.5, 0.0);
    ctx.move_to(-s * 0.3, -s * 0.5);
    ctx.line_to(s * 0.3, -s * 0.5);
    Ok(())
}

fn trace_crest(ctx: &CanvasRenderingContext2d, s: f64, time: f64) -> Result<(), JsValue> {
    let pulse = (time * 2.2).sin() * 0.15 + 1.0;
    ctx.begin_path();
    ctx.move_to(0.0, -s * 1.5 * pulse);
    ctx.line_to(-s * pulse, s * 0.8 * pulse);
    ctx.line_to(0.0, s * 1.3 * pulse);
    ctx.line_to(s * pulse, s * 0.8 * pulse);
    ctx.line_to(0.0, -s * 1.5 * pulse);
    ctx.move_to(-s * 0.5, s * 0.2);
    ctx.line_to(s * 0.5, s * 0.2);
    ctx.move_to(-s * 0.3, -s * 0.3);
    ctx.line_to(s * 0.3, -s * 0.3);
    Ok(())
}

fn trace_hex(ctx: &CanvasRenderingContext2d, s: f64, time: f64) -> Result<(), JsValue> {
    let pulse = (time * 1.8).sin() * 0.2 + 1.0;
    ctx.begin_path();
    for i in 0..6 {
        let angle = PI / 3.0 * f64::from(i);
        let px = angle.cos() * s * 1.2 * pulse;
        let py = angle.sin() * s * 1.2 * pulse;
        if i == 0 {
            ctx.move_to(px, py);
        } else {
            ctx.line_to(px, py);
        }
    }
    ctx.close_path();
    ctx.move_to(0.0, -s);
    ctx.line_to(0.0, s);
    Ok(())
}

fn trace_cylinder(ctx: &CanvasRenderingContext2d, s: f64, time: f64) -> Result<(), JsValue> {
    let pulse = (time * 2.0).sin() * 0.15 + 1.0;
    ctx.begin_path();
    ctx.ellipse(0.0, -s * pulse, s * pulse, s * 0.4 * pulse, 0.0, 0.0, TAU)?;
    ctx.move_to(-s * pulse, -s * pulse);
    ctx.line_to(-s * pulse, s * pulse);
    ctx.ellipse(0.0, s * pulse, s * pulse, s * 0.4 * pulse, 0.0, 0.0, TAU)?;
    ctx.move_to(s * pulse, -s * pulse);
    ctx.line_to(s * pulse, s * pulse);
    Ok(())
}

fn trace_cloud(ctx: &CanvasRenderingContext2d, s: f64, time: f64) -> Result<(), JsValue> {
    let pulse = time.sin() * 0.2 + 1.0;
    ctx.begin_path();
    ctx.arc(0.0, 0.0, s * pulse, 0.0, TAU)?;
    ctx.arc(-s * 1.2 * pulse, 0.0, s * 0.8 * pulse, 0.0, TAU)?;
    ctx.arc(s * 1.2 * pulse, 0.0, s * 0.8 * pulse, 0.0, TAU)?;
    ctx.arc(-s * 0.6 * pulse, -s * 0.7 * pulse, s * 0.6 * pulse, 0.0, TAU)?;
    ctx.arc(s * 0.6 * pulse, -s * 0.7 * pulse, s * 0.6 * pulse, 0.0, TAU)?;
    Ok(())
}

fn trace_brackets(ctx: &CanvasRenderingContext2d, s: f64, time: f64) {
    let pulse = (time * 2.5).sin() * 0.2 + 1.0;
    ctx.begin_path();
    ctx.move_to(-s * pulse, -s * pulse);
    ctx.line_to(-s * 1.5 * pulse, 0.0);
    ctx.line_to(-s * pulse, s * pulse);
    ctx.move_to(s * pulse, -s * pulse);
    ctx.line_to(s * 1.5 * pulse, 0.0);
    ctx.line_to(s * pulse, s * pulse);
}
