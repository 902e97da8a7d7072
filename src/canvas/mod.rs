//! Slide space to display canvas mapping, and the display list handed to the renderer.
//!
//! The model only ever sees whole slide-space pixels; display scale lives here.

pub(crate) mod bridge;
pub(crate) mod scene;
