//! Application state shared through Leptos context providers.

pub mod gallery;
