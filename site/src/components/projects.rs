//! Project gallery section: heading, card grid, and the detail overlay.

use leptos::prelude::*;

use crate::components::project_card::ProjectCard;
use crate::components::project_modal::ProjectModal;
use crate::data::projects::PROJECTS;
use crate::state::gallery::GalleryState;

/// Gallery section. Owns the selection state: at most one project is open,
/// and selecting from the grid replaces any previous selection.
#[component]
pub fn ProjectsSection() -> impl IntoView {
    let gallery = RwSignal::new(GalleryState::default());

    let on_select = Callback::new(move |id: &'static str| {
        gallery.update(|state| state.open(id));
    });
    let on_close = Callback::new(move |()| {
        gallery.update(GalleryState::close);
    });

    view! {
        <section class="projects" id="projects">
            <div class="projects__inner">
                <div class="projects__heading">
                    <h2 class="projects__title">"WordPress Projects"</h2>
                    <p class="projects__lead">
                        "Crafting exceptional WordPress websites with custom themes, plugins, and \
                         e-commerce solutions. Each project showcases the versatility and power of \
                         WordPress as a content management system."
                    </p>
                </div>
                <div class="projects__grid">
                    {PROJECTS
                        .iter()
                        .map(|project| view! { <ProjectCard project=project on_select=on_select /> })
                        .collect_view()}
                </div>
            </div>
            {move || {
                gallery
                    .get()
                    .selected_project()
                    .map(|project| view! { <ProjectModal project=project on_close=on_close /> })
            }}
        </section>
    }
}
