//! Text configuration format → structured template fields.
//!
//! [`response::TemplateParser`] is the seam the editor talks to. [`yaml::YamlTemplateParser`] is
//! the in-process implementation; hosts with a remote validator adapt its JSON reply through
//! [`response::ValidationResponse`].

pub(crate) mod canonical;
pub(crate) mod response;
pub(crate) mod yaml;
