//! Leptos components for the portfolio page.

pub mod hero;
pub mod project_card;
pub mod project_modal;
pub mod projects;
pub mod starfield_host;
