//! Element placement: lengths, named presets and the resolver shared by editor and renderer.
//!
//! Everything here is pure and total. Bad input degrades to `0`, never to an error, because
//! resolution runs on every interaction frame.

pub(crate) mod dimension;
pub(crate) mod preset;
pub(crate) mod resolver;
