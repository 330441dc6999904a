//! Static site content.
//!
//! The project catalog is hand-authored data compiled into the binary; there
//! is no backing service and no loading state.

pub mod projects;
