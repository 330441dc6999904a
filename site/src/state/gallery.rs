//! Gallery selection state.
//!
//! DESIGN
//! ======
//! Selection is exactly "nothing" or "one project id", owned by the gallery
//! section and passed down — the overlay never mutates it directly, it asks
//! for a close via callback.

#[cfg(test)]
#[path = "gallery_test.rs"]
mod gallery_test;

use crate::data::projects::{Project, project_by_id};

/// Which project, if any, has its detail overlay open.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GalleryState {
    selected_id: Option<&'static str>,
}

impl GalleryState {
    /// Open the overlay for the given project, replacing any prior selection.
    pub fn open(&mut self, id: &'static str) {
        self.selected_id = Some(id);
    }

    /// Close the overlay.
    pub fn close(&mut self) {
        self.selected_id = None;
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.selected_id.is_some()
    }

    /// The selected project record, if the selection resolves to one.
    #[must_use]
    pub fn selected_project(&self) -> Option<&'static Project> {
        self.selected_id.and_then(project_by_id)
    }
}
