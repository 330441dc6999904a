//! Full-detail overlay for a selected project.
//!
//! DESIGN
//! ======
//! The overlay closes three ways: the close button, the Escape key, and a
//! click on the backdrop. Clicks inside the panel stop propagation so only
//! true backdrop clicks dismiss. Body scroll is locked while the overlay is
//! mounted and restored from `on_cleanup`, which covers every exit path.

use leptos::prelude::*;

use crate::components::project_card::{TechChip, swap_to_placeholder};
use crate::data::projects::{Project, ProjectStats};
use crate::util::scroll::{lock_body_scroll, unlock_body_scroll};

#[cfg(feature = "hydrate")]
use std::cell::RefCell;
#[cfg(feature = "hydrate")]
use std::rc::Rc;

#[cfg(feature = "hydrate")]
use wasm_bindgen::{JsCast, closure::Closure};

/// The 2x2 / 1x4 strip of headline numbers. Rendered only for projects that
/// carry stats.
#[component]
fn StatsStrip(stats: ProjectStats) -> impl IntoView {
    view! {
        <div class="project-modal__stats">
            <div class="project-modal__stat">
                <div class="project-modal__stat-value">{stats.years}</div>
                <div class="project-modal__stat-label">"Years Experience"</div>
            </div>
            <div class="project-modal__stat">
                <div class="project-modal__stat-value">{stats.team_size}</div>
                <div class="project-modal__stat-label">"Team Size"</div>
            </div>
            <div class="project-modal__stat">
                <div class="project-modal__stat-value">{stats.users}</div>
                <div class="project-modal__stat-label">"Users"</div>
            </div>
            <div class="project-modal__stat">
                <div class="project-modal__stat-value">{stats.features}</div>
                <div class="project-modal__stat-label">"Features"</div>
            </div>
        </div>
    }
}

/// Modal overlay for one project.
#[component]
pub fn ProjectModal(project: &'static Project, on_close: Callback<()>) -> impl IntoView {
    lock_body_scroll();

    #[cfg(feature = "hydrate")]
    {
        let keydown_closure: Rc<RefCell<Option<Closure<dyn FnMut(web_sys::KeyboardEvent)>>>> =
            Rc::new(RefCell::new(None));

        if let Some(document) = web_sys::window().and_then(|w| w.document()) {
            let cb = Closure::wrap(Box::new(move |ev: web_sys::KeyboardEvent| {
                if ev.key() == "Escape" {
                    on_close.run(());
                }
            }) as Box<dyn FnMut(web_sys::KeyboardEvent)>);
            let _ = document.add_event_listener_with_callback("keydown", cb.as_ref().unchecked_ref());
            *keydown_closure.borrow_mut() = Some(cb);
        }

        let keydown_closure = Rc::clone(&keydown_closure);
        on_cleanup(move || {
            if let (Some(document), Some(cb)) = (
                web_sys::window().and_then(|w| w.document()),
                keydown_closure.borrow_mut().take(),
            ) {
                let _ = document
                    .remove_event_listener_with_callback("keydown", cb.as_ref().unchecked_ref());
            }
        });
    }

    on_cleanup(unlock_body_scroll);

    view! {
        <div class="project-modal__backdrop" on:click=move |_| on_close.run(())>
            <div class="project-modal" on:click=move |ev| ev.stop_propagation()>
                <button
                    type="button"
                    class="project-modal__close"
                    aria-label="Close"
                    on:click=move |_| on_close.run(())
                >
                    "\u{2715}"
                </button>
                <div class="project-modal__media">
                    <img
                        src=project.image
                        alt=project.title
                        on:error=move |ev| swap_to_placeholder(&ev)
                    />
                    <div class="project-modal__media-scrim"></div>
                    <div class="project-modal__heading">
                        <span class="project-modal__badge">{project.badge}</span>
                        <h3 class="project-modal__title">{project.title}</h3>
                    </div>
                </div>
                <div class="project-modal__body">
                    <p class="project-modal__description">{project.description}</p>
                    {project.stats.map(|stats| view! { <StatsStrip stats=stats /> })}
                    <h4 class="project-modal__subtitle">"Technologies Used"</h4>
                    <div class="project-modal__tech">
                        {project
                            .tech
                            .iter()
                            .map(|tech| view! { <TechChip tech=*tech /> })
                            .collect_view()}
                    </div>
                    <div class="project-modal__links">
                        {project.links.github.map(|href| {
                            view! {
                                <a
                                    class="project-modal__link"
                                    href=href
                                    target="_blank"
                                    rel="noopener noreferrer"
                                >
                                    "View Code"
                                </a>
                            }
                        })}
                        {project.links.live.map(|href| {
                            view! {
                                <a
                                    class="project-modal__link project-modal__link--live"
                                    href=href
                                    target="_blank"
                                    rel="noopener noreferrer"
                                >
                                    "Live Demo"
                                </a>
                            }
                        })}
                    </div>
                </div>
            </div>
        </div>
    }
}
