//! Songslide is the document core of a song presentation template editor.
//!
//! A [`Template`] is a deck of slides holding backgrounds, images, video, audio, text and the
//! placeholders song content is overlaid on. The crate owns:
//!
//! - the template model and its value-returning mutators
//! - the round-trip-safe text configuration format ([`serialize_template`] and
//!   [`YamlTemplateParser`])
//! - position resolution shared by the editor and renderers ([`resolve_position`])
//! - the slide space ↔ display canvas mapping ([`CanvasBridge`])
//! - the dual-mode editor state machine ([`EditorSession`])
//!
//! See [`guide`] for a walkthrough.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod document;
mod foundation;

pub(crate) mod canvas;
pub(crate) mod editor;
pub(crate) mod parse;
pub(crate) mod position;
pub(crate) mod serialize;
pub(crate) mod template;

/// Standalone walkthrough of the crate.
pub mod guide;

pub use crate::foundation::core::{AspectRatio, Axis, Point, Rect, Size, SlideSize, Vec2};
pub use crate::foundation::error::{SongslideError, SongslideResult};

pub use crate::position::dimension::{Dimension, Unit};
pub use crate::position::preset::PositionPreset;
pub use crate::position::resolver::{
    PRESET_MARGIN, Position, resolve_box, resolve_position, resolve_size,
};

pub use crate::template::element::{
    AudioElement, Element, ElementId, ElementKind, ElementRef, ImageElement, Layer, TextAlign,
    TextElement, VideoElement,
};
pub use crate::template::model::Template;
pub use crate::template::patch::{BackgroundPatch, ElementPatch, SongStylePatch};
pub use crate::template::slide::{
    Background, BackgroundKind, Slide, SlideRole, SongContentStyle, SongStyleSlot, SongStyles,
};

pub use crate::serialize::template::{SerializeOpts, serialize_template, serialize_template_with};

pub use crate::parse::canonical::PartialTemplate;
pub use crate::parse::response::{TemplateParser, ValidationResponse};
pub use crate::parse::yaml::YamlTemplateParser;

pub use crate::canvas::bridge::{CanvasBridge, CanvasOpts, TransformEnd};
pub use crate::canvas::scene::{DisplayNode, NodeContent, NodeTarget, SlideScene};

pub use crate::document::TemplateDocument;
pub use crate::editor::session::{CloseDecision, EditorMode, EditorOpts, EditorSession, Transition};
pub use crate::editor::validation::{ValidationApplied, ValidationPurpose, ValidationTicket};
