//! One tile in the project grid.

use leptos::prelude::*;

use crate::data::projects::{Project, Tech};

#[cfg(test)]
#[path = "project_card_test.rs"]
mod project_card_test;

/// How many tech chips a card shows before collapsing into a "+N more" chip.
const CARD_TECH_LIMIT: usize = 3;

/// Split a tech list into the chips a card shows and the count folded into
/// the trailing "+N more" chip.
fn visible_tech(tech: &[Tech]) -> (&[Tech], usize) {
    let shown = tech.len().min(CARD_TECH_LIMIT);
    (&tech[..shown], tech.len() - shown)
}

/// Small chip with a technology's glyph and label.
#[component]
pub fn TechChip(tech: Tech) -> impl IntoView {
    view! {
        <span class=format!("tech-chip {}", tech.accent())>
            <span class="tech-chip__glyph">{tech.glyph()}</span>
            {tech.label()}
        </span>
    }
}

/// Clickable summary card for a project.
///
/// The image swaps to [`PLACEHOLDER_IMAGE`] on load failure, and the whole
/// card surface selects the project.
#[component]
pub fn ProjectCard(
    project: &'static Project,
    on_select: Callback<&'static str>,
) -> impl IntoView {
    let (shown, overflow) = visible_tech(project.tech);

    view! {
        <article
            class="project-card"
            on:click=move |_| on_select.run(project.id)
        >
            <div class="project-card__media">
                <img
                    src=project.image
                    alt=project.title
                    loading="lazy"
                    on:error=move |ev| swap_to_placeholder(&ev)
                />
                <span class="project-card__badge">{project.badge}</span>
            </div>
            <div class="project-card__body">
                <h3 class="project-card__title">{project.title}</h3>
                <p class="project-card__description">{project.description}</p>
                <div class="project-card__tech">
                    {shown
                        .iter()
                        .map(|tech| view! { <TechChip tech=*tech /> })
                        .collect_view()}
                    {(overflow > 0)
                        .then(|| view! { <span class="tech-chip">{format!("+{overflow} more")}</span> })}
                </div>
                <button type="button" class="project-card__details">"View Details"</button>
            </div>
        </article>
    }
}

#[cfg(feature = "hydrate")]
pub(crate) fn swap_to_placeholder(ev: &leptos::ev::ErrorEvent) {
    use wasm_bindgen::JsCast;

    let Some(img) = ev
        .target()
        .and_then(|t| t.dyn_into::<web_sys::HtmlImageElement>().ok())
    else {
        return;
    };
    // Guard against an error loop when the placeholder itself is missing.
    if img.src().ends_with(PLACEHOLDER_IMAGE) {
        return;
    }
    img.set_src(PLACEHOLDER_IMAGE);
}

#[cfg(not(feature = "hydrate"))]
pub(crate) fn swap_to_placeholder(_ev: &leptos::ev::ErrorEvent) {}
