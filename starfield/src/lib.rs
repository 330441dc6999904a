//! Ambient space-scene animation engine for the portfolio hero banner.
//!
//! This crate is compiled to WebAssembly and runs in the browser. It owns the
//! full per-frame state of the animated background: drifting tech glyphs that
//! flee the pointer, falling stars with bounded fading trails, slow nebula
//! clouds, and occasional shooting stars. The host Leptos layer is responsible
//! only for wiring DOM events (pointer, touch, resize) into the engine and
//! driving [`engine::Field::frame`] from `requestAnimationFrame`.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Canvas-bound [`engine::Field`] and testable [`engine::FieldCore`] |
//! | [`scene`] | Entity types (glyphs, stars, nebulae, shooting stars) and their per-tick motion |
//! | [`glyph`] | The fixed palette of procedural glyph shapes |
//! | [`render`] | Scene drawing against the 2D context |
//! | [`consts`] | Population sizes, motion ranges, and palette constants |

pub mod consts;
pub mod engine;
pub mod glyph;
pub mod render;
pub mod scene;
