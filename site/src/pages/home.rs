//! Landing page: hero over the starfield, then the project gallery.

use leptos::prelude::*;

use crate::components::hero::Hero;
use crate::components::projects::ProjectsSection;

/// Home page.
#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <main class="home">
            <Hero />
            <ProjectsSection />
        </main>
    }
}
