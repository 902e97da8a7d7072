//! Template, slide and element model.
//!
//! A [`model::Template`] owns its slides and each [`slide::Slide`] owns its elements. Elements are
//! addressed by [`element::ElementId`] only; mutators are value-returning so revisions can be
//! compared by value.

pub(crate) mod defaults;
pub(crate) mod element;
pub(crate) mod model;
pub(crate) mod normalize;
pub(crate) mod patch;
pub(crate) mod slide;
