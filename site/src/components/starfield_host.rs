//! Bridge component between Leptos and the imperative `starfield::Field`.
//!
//! ARCHITECTURE
//! ============
//! The starfield crate owns simulation and render concerns while this host
//! wires the browser in: it mounts the field on hydration, feeds pointer and
//! resize events into it, and drives a self-rescheduling animation-frame loop.
//! Until the field is mounted the host shows a static gradient so
//! server-rendered pages never flash an empty black rectangle.

use leptos::prelude::*;

#[cfg(feature = "hydrate")]
use std::cell::{Cell, RefCell};
#[cfg(feature = "hydrate")]
use std::rc::Rc;

#[cfg(feature = "hydrate")]
use starfield::engine::Field;
#[cfg(feature = "hydrate")]
use wasm_bindgen::{JsCast, closure::Closure};

/// Fallback painted behind the canvas until the simulation takes over.
const STATIC_BACKDROP: &str = "linear-gradient(to bottom, #040412, #0a0a20)";

#[cfg(feature = "hydrate")]
fn window_metrics() -> Option<(f64, f64, f64)> {
    let window = web_sys::window()?;
    let width = window.inner_width().ok()?.as_f64()?;
    let height = window.inner_height().ok()?.as_f64()?;
    Some((width, height, window.device_pixel_ratio()))
}

#[cfg(feature = "hydrate")]
fn apply_viewport(field: &Rc<RefCell<Option<Field>>>) {
    let Some((width, height, dpr)) = window_metrics() else {
        return;
    };
    if let Some(field) = field.borrow_mut().as_mut() {
        field.set_viewport(width, height, dpr);
    }
}

#[cfg(feature = "hydrate")]
fn feed_pointer(field: &Rc<RefCell<Option<Field>>>, client_x: f64, client_y: f64) {
    if let Some(field) = field.borrow_mut().as_mut() {
        let rect = field.canvas().get_bounding_client_rect();
        field.set_pointer(client_x - rect.left(), client_y - rect.top());
    }
}

/// Starfield host component.
///
/// On hydration, this mounts `starfield::Field` on the canvas, populates the
/// scene, and keeps an animation-frame loop running until unmount. Every
/// browser-side resource it grabs is released in `on_cleanup`: the loop flag
/// flips, the pending frame is cancelled, the field is halted, and the window
/// listeners are detached.
#[component]
pub fn StarfieldHost() -> impl IntoView {
    let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
    let mounted = RwSignal::new(false);

    #[cfg(feature = "hydrate")]
    {
        let field: Rc<RefCell<Option<Field>>> = Rc::new(RefCell::new(None));
        let alive = Rc::new(Cell::new(true));
        let raf_handle: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));
        let raf_closure: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> =
            Rc::new(RefCell::new(None));
        let resize_closure: Rc<RefCell<Option<Closure<dyn FnMut(web_sys::Event)>>>> =
            Rc::new(RefCell::new(None));
        let mouse_closure: Rc<RefCell<Option<Closure<dyn FnMut(web_sys::MouseEvent)>>>> =
            Rc::new(RefCell::new(None));
        let touch_closure: Rc<RefCell<Option<Closure<dyn FnMut(web_sys::TouchEvent)>>>> =
            Rc::new(RefCell::new(None));

        {
            let field = Rc::clone(&field);
            let alive = Rc::clone(&alive);
            let raf_handle = Rc::clone(&raf_handle);
            let raf_closure = Rc::clone(&raf_closure);
            let resize_closure = Rc::clone(&resize_closure);
            let mouse_closure = Rc::clone(&mouse_closure);
            let touch_closure = Rc::clone(&touch_closure);
            Effect::new(move || {
                let Some(canvas) = canvas_ref.get() else {
                    return;
                };
                if field.borrow().is_some() {
                    return;
                }
                let Some(window) = web_sys::window() else {
                    return;
                };

                let mut instance = Field::new(canvas);
                if let Some((width, height, dpr)) = window_metrics() {
                    instance.set_viewport(width, height, dpr);
                }
                instance.populate();
                *field.borrow_mut() = Some(instance);
                mounted.set(true);

                // Window listeners stay registered for the component's whole
                // life and are detached in on_cleanup.
                {
                    let field = Rc::clone(&field);
                    let cb = Closure::wrap(Box::new(move |_ev: web_sys::Event| {
                        apply_viewport(&field);
                    }) as Box<dyn FnMut(web_sys::Event)>);
                    let _ = window.add_event_listener_with_callback(
                        "resize",
                        cb.as_ref().unchecked_ref(),
                    );
                    *resize_closure.borrow_mut() = Some(cb);
                }
                {
                    let field = Rc::clone(&field);
                    let cb = Closure::wrap(Box::new(move |ev: web_sys::MouseEvent| {
                        feed_pointer(&field, f64::from(ev.client_x()), f64::from(ev.client_y()));
                    }) as Box<dyn FnMut(web_sys::MouseEvent)>);
                    let _ = window.add_event_listener_with_callback(
                        "mousemove",
                        cb.as_ref().unchecked_ref(),
                    );
                    *mouse_closure.borrow_mut() = Some(cb);
                }
                {
                    let field = Rc::clone(&field);
                    let cb = Closure::wrap(Box::new(move |ev: web_sys::TouchEvent| {
                        if let Some(touch) = ev.touches().item(0) {
                            feed_pointer(
                                &field,
                                f64::from(touch.client_x()),
                                f64::from(touch.client_y()),
                            );
                        }
                    }) as Box<dyn FnMut(web_sys::TouchEvent)>);
                    let _ = window.add_event_listener_with_callback(
                        "touchmove",
                        cb.as_ref().unchecked_ref(),
                    );
                    *touch_closure.borrow_mut() = Some(cb);
                }

                // Self-rescheduling frame loop. The alive flag is checked
                // before every frame so a cancelled handle that still fires
                // cannot tick a torn-down field.
                let field_for_loop = Rc::clone(&field);
                let alive_for_loop = Rc::clone(&alive);
                let raf_handle_for_loop = Rc::clone(&raf_handle);
                let raf_closure_for_loop = Rc::clone(&raf_closure);
                *raf_closure.borrow_mut() =
                    Some(Closure::wrap(Box::new(move |timestamp_ms: f64| {
                        if !alive_for_loop.get() {
                            return;
                        }
                        let mut reschedule = false;
                        if let Some(field) = field_for_loop.borrow_mut().as_mut() {
                            match field.frame(timestamp_ms * 0.001) {
                                Ok(again) => reschedule = again,
                                Err(err) => log::error!("starfield frame failed: {err:?}"),
                            }
                        }
                        if !reschedule {
                            return;
                        }
                        if let (Some(window), Some(cb)) =
                            (web_sys::window(), raf_closure_for_loop.borrow().as_ref())
                        {
                            if let Ok(handle) =
                                window.request_animation_frame(cb.as_ref().unchecked_ref())
                            {
                                raf_handle_for_loop.set(Some(handle));
                            }
                        }
                    }) as Box<dyn FnMut(f64)>));

                if let Some(cb) = raf_closure.borrow().as_ref() {
                    if let Ok(handle) =
                        window.request_animation_frame(cb.as_ref().unchecked_ref())
                    {
                        raf_handle.set(Some(handle));
                    }
                }
            });
        }

        on_cleanup(move || {
            alive.set(false);
            if let (Some(window), Some(handle)) = (web_sys::window(), raf_handle.take()) {
                let _ = window.cancel_animation_frame(handle);
            }
            if let Some(field) = field.borrow_mut().as_mut() {
                field.halt();
            }
            if let Some(window) = web_sys::window() {
                if let Some(cb) = resize_closure.borrow_mut().take() {
                    let _ = window.remove_event_listener_with_callback(
                        "resize",
                        cb.as_ref().unchecked_ref(),
                    );
                }
                if let Some(cb) = mouse_closure.borrow_mut().take() {
                    let _ = window.remove_event_listener_with_callback(
                        "mousemove",
                        cb.as_ref().unchecked_ref(),
                    );
                }
                if let Some(cb) = touch_closure.borrow_mut().take() {
                    let _ = window.remove_event_listener_with_callback(
                        "touchmove",
                        cb.as_ref().unchecked_ref(),
                    );
                }
            }
            raf_closure.borrow_mut().take();
        });
    }

    view! {
        <div
            class="starfield-host"
            style:background=move || {
                if mounted.get() { "#000".to_string() } else { STATIC_BACKDROP.to_string() }
            }
        >
            <canvas node_ref=canvas_ref class="starfield-host__canvas"></canvas>
        </div>
    }
}
