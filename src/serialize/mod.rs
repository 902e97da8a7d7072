//! Template → text configuration format.
//!
//! The format is a constrained, human-editable subset of YAML: fixed key order, explicit `[]`
//! for empty collections, literal blocks for multiline text and whole-pixel dimensions.

pub(crate) mod emit;
pub(crate) mod scalar;
pub(crate) mod template;
