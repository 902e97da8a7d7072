//! Dual-mode editor state: visual canvas editing and plain-text editing over one template.
//!
//! Parser calls are the only asynchronous boundary. Each request carries a ticket and only the
//! newest ticket's result is applied.

pub(crate) mod dirty;
pub(crate) mod session;
pub(crate) mod validation;
