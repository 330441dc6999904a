//! Full-viewport hero section layered over the starfield.

use leptos::prelude::*;

use crate::components::starfield_host::StarfieldHost;

#[cfg(feature = "hydrate")]
use crate::util::download::download_cv;

/// Call-to-action button with the hero's glow treatment.
///
/// `primary` selects the filled variant; the default is the outlined one.
#[component]
pub fn GlowingButton(
    #[prop(optional)] primary: bool,
    #[prop(optional, into)] on_press: Option<Callback<()>>,
    children: Children,
) -> impl IntoView {
    let class = if primary {
        "glowing-button glowing-button--primary"
    } else {
        "glowing-button"
    };
    view! {
        <button
            type="button"
            class=class
            on:click=move |_| {
                if let Some(on_press) = on_press {
                    on_press.run(());
                }
            }
        >
            <span class="glowing-button__label">{children()}</span>
        </button>
    }
}

/// Hero section: greeting, name, role, and the CV / contact actions.
///
/// The CV button streams `/HassanAmagroud.pdf` through a blob URL instead of
/// plain navigation so the browser saves the file rather than opening it.
#[component]
pub fn Hero() -> impl IntoView {
    let on_download = Callback::new(move |()| {
        #[cfg(feature = "hydrate")]
        wasm_bindgen_futures::spawn_local(download_cv());
    });

    view! {
        <section class="hero">
            <StarfieldHost />
            <div class="hero__scrim"></div>
            <div class="hero__content">
                <h2 class="hero__greeting">
                    "Hello" <span class="hero__wave">"\u{1F44B}"</span> "I'm"
                </h2>
                <h1 class="hero__name">"Hassan Amagroud"</h1>
                <p class="hero__role">"WordPress Developer"</p>
                <div class="hero__actions">
                    <GlowingButton primary=true on_press=on_download>
                        "Download CV"
                    </GlowingButton>
                    <a class="hero__contact-link" href="/contact">
                        <GlowingButton>"Contact"</GlowingButton>
                    </a>
                </div>
            </div>
        </section>
    }
}
