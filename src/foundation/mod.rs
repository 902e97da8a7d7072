//! Error taxonomy and shared geometry primitives.

pub(crate) mod core;
pub(crate) mod error;
