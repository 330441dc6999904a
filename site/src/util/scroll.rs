//! Body scroll locking while an overlay is open.
//!
//! The overlay calls [`lock_body_scroll`] on mount and [`unlock_body_scroll`]
//! from `on_cleanup`, so the lock is released on every exit path — close
//! button, Escape, backdrop click, or the component being dropped.

/// Suppress page scrolling behind an open overlay.
pub fn lock_body_scroll() {
    set_body_overflow("hidden");
}

/// Restore page scrolling.
pub fn unlock_body_scroll() {
    set_body_overflow("");
}

#[cfg(feature = "hydrate")]
fn set_body_overflow(value: &str) {
    let Some(body) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.body())
    else {
        return;
    };
    if body.style().set_property("overflow", value).is_err() {
        log::warn!("body overflow could not be set to {value:?}");
    }
}

#[cfg(not(feature = "hydrate"))]
fn set_body_overflow(_value: &str) {}
