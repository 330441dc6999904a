use super::*;
use crate::consts::{
    GLOW_ACTIVE, GLOW_FLOOR, GLYPH_RADIUS_MIN, NEBULA_RADIUS_MIN, NEBULA_RADIUS_SPAN, SHOOTING_STAR_SPEED_MIN,
    STAR_SPEED_MIN, TRAIL_LEN_MIN, TRAIL_LEN_SPAN,
};

const W: f64 = 800.0;
const H: f64 = 600.0;

fn far_pointer() -> Pointer {
    Pointer { x: 10_000.0, y: 10_000.0 }
}

// =============================================================
// wrap
// =============================================================

#[test]
fn wrap_keeps_in_range() {
    assert_eq!(wrap(50.0, 100.0), 50.0);
    assert_eq!(wrap(150.0, 100.0), 50.0);
    assert_eq!(wrap(-10.0, 100.0), 90.0);
    assert_eq!(wrap(100.0, 100.0), 0.0);
}

#[test]
fn wrap_is_identity_for_zero_span() {
    assert_eq!(wrap(42.0, 0.0), 42.0);
    assert_eq!(wrap(-7.0, 0.0), -7.0);
}

// =============================================================
// FloatingGlyph
// =============================================================

#[test]
fn glyph_spawns_inside_viewport() {
    fastrand::seed(7);
    for _ in 0..200 {
        let g = FloatingGlyph::spawn(W, H, false);
        assert!((0.0..W).contains(&g.x));
        assert!((0.0..H).contains(&g.y));
        assert!(g.radius >= GLYPH_RADIUS_MIN);
        assert!(g.glow >= GLOW_FLOOR && g.glow <= 1.0);
    }
}

#[test]
fn glyph_position_wraps_toroidally() {
    fastrand::seed(1);
    let mut g = FloatingGlyph::spawn(W, H, false);
    g.x = W - 0.001;
    g.y = H - 0.001;
    g.heading = std::f64::consts::FRAC_PI_4;
    g.speed = 5.0;
    g.advance(far_pointer(), W, H);
    assert!((0.0..W).contains(&g.x));
    assert!((0.0..H).contains(&g.y));
}

#[test]
fn glyph_glow_never_leaves_bounds() {
    fastrand::seed(2);
    let mut g = FloatingGlyph::spawn(W, H, false);
    let near = Pointer { x: g.x, y: g.y };

    // Alternate hover/no-hover for a while; glow must stay clamped throughout.
    for i in 0..500 {
        let pointer = if i % 3 == 0 { near } else { far_pointer() };
        g.advance(pointer, W, H);
        assert!(g.glow >= GLOW_FLOOR, "glow {} fell below floor", g.glow);
        assert!(g.glow <= 1.0, "glow {} above max", g.glow);
    }
}

#[test]
fn glyph_glow_decays_to_floor_without_pointer() {
    fastrand::seed(3);
    let mut g = FloatingGlyph::spawn(W, H, false);
    g.glow = GLOW_ACTIVE;
    for _ in 0..100 {
        g.advance(far_pointer(), W, H);
    }
    assert!((g.glow - GLOW_FLOOR).abs() < 1e-9);
}

#[test]
fn glyph_flees_pointer_inside_radius() {
    fastrand::seed(4);
    let mut g = FloatingGlyph::spawn(W, H, false);
    g.x = 400.0;
    g.y = 300.0;
    let pointer = Pointer { x: 410.0, y: 300.0 };
    let before = g.pointer_distance(pointer);
    g.advance(pointer, W, H);
    assert!(g.pointer_distance(pointer) > before);
    assert!((g.glow - GLOW_ACTIVE).abs() < 1e-9);
}

// =============================================================
// StarPoint
// =============================================================

#[test]
fn star_trail_never_exceeds_capacity() {
    fastrand::seed(5);
    let mut star = StarPoint::spawn(W, H);
    let ticks = star.max_trail * 3;
    for i in 0..ticks {
        #[allow(clippy::cast_precision_loss)]
        star.advance(i as f64 * 0.016, W, H);
        assert!(star.trail.len() <= star.max_trail);
    }
    // After more ticks than the capacity, the trail is exactly full.
    assert_eq!(star.trail.len(), star.max_trail);
}

#[test]
fn star_trail_capacity_in_documented_range() {
    fastrand::seed(6);
    for _ in 0..100 {
        let star = StarPoint::spawn(W, H);
        assert!(star.max_trail >= TRAIL_LEN_MIN);
        assert!(star.max_trail < TRAIL_LEN_MIN + TRAIL_LEN_SPAN);
        assert!(star.speed >= STAR_SPEED_MIN);
    }
}

#[test]
fn star_resets_to_top_and_clears_trail_past_bottom() {
    fastrand::seed(8);
    let mut star = StarPoint::spawn(W, H);
    for i in 0..5 {
        #[allow(clippy::cast_precision_loss)]
        star.advance(i as f64 * 0.016, W, H);
    }
    star.y = H;
    star.advance(1.0, W, H);
    // The reset clears history before recording the fresh top position.
    assert_eq!(star.y, 0.0);
    assert_eq!(star.trail.len(), 1);
    assert_eq!(star.trail[0].y, 0.0);
}

#[test]
fn star_twinkle_stays_normalized() {
    fastrand::seed(9);
    let star = StarPoint::spawn(W, H);
    for i in 0..1000 {
        let t = star.twinkle_at(f64::from(i) * 0.37);
        assert!((0.0..=1.0).contains(&t));
    }
}

// =============================================================
// NebulaCloud
// =============================================================

#[test]
fn nebula_spawns_in_documented_range() {
    fastrand::seed(10);
    for _ in 0..50 {
        let n = NebulaCloud::spawn(W, H);
        assert!(n.radius >= NEBULA_RADIUS_MIN);
        assert!(n.radius < NEBULA_RADIUS_MIN + NEBULA_RADIUS_SPAN);
        assert!(n.color.starts_with("rgba("));
        assert!(n.color.ends_with("0.03)"));
    }
}

#[test]
fn nebula_wraps_toroidally() {
    fastrand::seed(11);
    let mut n = NebulaCloud::spawn(W, H);
    for i in 0..10_000 {
        n.advance(f64::from(i) * 0.016, W, H);
        assert!((0.0..W).contains(&n.x));
        assert!((0.0..H).contains(&n.y));
    }
}

// =============================================================
// ShootingStar
// =============================================================

#[test]
fn shooting_star_life_strictly_decreases() {
    fastrand::seed(12);
    let mut s = ShootingStar::spawn(W);
    let mut last = s.life;
    while s.advance() {
        assert!(s.life < last);
        last = s.life;
    }
    assert!(s.life <= 0.0);
}

#[test]
fn shooting_star_moves_down_and_across() {
    fastrand::seed(13);
    let mut s = ShootingStar::spawn(W);
    let (x0, y0) = (s.x, s.y);
    s.advance();
    // Heading is within (45°, 90°), so both axes advance and speed is bounded below.
    assert!(s.y > y0);
    assert!(s.x > x0);
    assert!(s.speed >= SHOOTING_STAR_SPEED_MIN);
}

#[test]
fn shooting_star_spawns_on_top_edge() {
    fastrand::seed(14);
    for _ in 0..50 {
        let s = ShootingStar::spawn(W);
        assert_eq!(s.y, 0.0);
        assert!((0.0..W).contains(&s.x));
        assert!((s.life - 1.0).abs() < f64::EPSILON);
    }
}
