//! # Songslide guide (v0.1.0)
//!
//! This module is a standalone walkthrough of Songslide's model and public API. Start here if you
//! are wiring the crate into an editor front end or a renderer.
//!
//! ---
//!
//! ## Core concepts
//!
//! - [`Template`](crate::Template): a named deck of slides with an aspect ratio and a reference
//!   slide
//! - [`Slide`](crate::Slide): an optional background plus images, videos, audios and text, kept in
//!   insertion order
//! - [`Element`](crate::Element): one positioned layer; every kind shares a
//!   [`Layer`](crate::Layer) (id, position, size, opacity, z-index, rotation)
//! - [`Position`](crate::Position): either explicit `x`/`y` or one of nine
//!   [`PositionPreset`](crate::PositionPreset)s, never both
//! - [`Dimension`](crate::Dimension): a length in pixels or percent of the slide extent
//! - Reference slide: the slide song content (title, lyrics, translation, footers) is overlaid on.
//!   Its placeholders are [`SongContentStyle`](crate::SongContentStyle)s. Slides before it are
//!   intro slides and slides after it are outro slides.
//!
//! All geometry lives in **slide space**, fixed by the aspect ratio: 1920x1080 for 16:9 and
//! 1600x1200 for 4:3. Display scale never reaches the model.
//!
//! ---
//!
//! ## Templates are values
//!
//! Every mutator takes `&self` and returns a new template, so an editor can keep the previous
//! revision, diff revisions by value and discard a failed edit without rollback logic.
//! Structural mistakes (unknown slide, unknown element, removing the last slide, a patch field the
//! element kind does not carry) come back as [`SongslideError::Validation`](crate::SongslideError).
//!
//! ```rust
//! use songslide::{ElementKind, ElementPatch, PositionPreset, Template};
//!
//! # fn main() -> songslide::SongslideResult<()> {
//! let (template, id) = Template::new("Sunday service").with_element_added(
//!     0,
//!     ElementKind::Text,
//!     &ElementPatch {
//!         preset: Some(PositionPreset::Center),
//!         ..ElementPatch::content("Hello")
//!     },
//! )?;
//! assert_eq!(template.locate(&id), Some(0));
//!
//! // Explicit coordinates always replace the preset.
//! let moved = template.with_element_updated(
//!     0,
//!     &id,
//!     &ElementPatch::at(songslide::Dimension::px(10.0), songslide::Dimension::px(20.0)),
//! )?;
//! let layer = moved.slides[0].find(&id).map(|e| e.layer().clone());
//! assert_eq!(layer.and_then(|l| l.position.preset()), None);
//! # Ok(())
//! # }
//! ```
//!
//! ---
//!
//! ## Position resolution
//!
//! [`resolve_position`](crate::resolve_position) is the single rule every consumer uses:
//! an explicit percentage, then an explicit pixel value, then a preset, else `0`. Presets keep a
//! [`PRESET_MARGIN`](crate::PRESET_MARGIN) from the slide edges and center on the middle row or
//! column. Resolution never fails; malformed input resolves to `0`.
//!
//! ```rust
//! use songslide::{Axis, resolve_position};
//!
//! assert_eq!(resolve_position(Some("50%"), None, Axis::X, 1920.0, 100.0, 1920.0, 1080.0), 960.0);
//! assert_eq!(resolve_position(None, Some("center"), Axis::X, 1920.0, 200.0, 1920.0, 1080.0), 860.0);
//! assert_eq!(resolve_position(None, Some("top-left"), Axis::Y, 1080.0, 100.0, 1920.0, 1080.0), 40.0);
//! ```
//!
//! ---
//!
//! ## The text format
//!
//! [`serialize_template`](crate::serialize_template) writes a constrained, human-editable subset
//! of YAML with a fixed key order and explicit `[]` for empty lists. Multiline text uses literal
//! blocks, and strings that would read back as something else are quoted. The output is
//! deterministic.
//!
//! Reading text back goes through the [`TemplateParser`](crate::TemplateParser) seam.
//! [`YamlTemplateParser`](crate::YamlTemplateParser) is the in-process implementation. Hosts that
//! validate remotely can decode the reply with
//! [`ValidationResponse`](crate::ValidationResponse).
//!
//! The round-trip contract: parsing serialized text yields
//! [`Template::normalized`](crate::Template::normalized), i.e. the original with whole-pixel
//! dimensions, whole-degree rotation, clamped opacity and volume, and audio play ranges made
//! explicit.
//!
//! ```rust
//! use songslide::{Template, TemplateParser, YamlTemplateParser, serialize_template};
//!
//! # fn main() -> songslide::SongslideResult<()> {
//! let template = Template::new("Evening").with_description(Some("Line one\nLine two".into()));
//! let text = serialize_template(&template);
//! assert!(text.contains("description: |-\n"));
//!
//! let back = YamlTemplateParser.validate(&text)?.into_template();
//! assert_eq!(back, template.normalized());
//! # Ok(())
//! # }
//! ```
//!
//! Older documents without a `slides` list (background and element lists at the top level) are
//! upgraded to a single slide while parsing, so nothing downstream has to branch on the shape.
//!
//! ---
//!
//! ## Canvas bridge
//!
//! [`CanvasBridge`](crate::CanvasBridge) maps slide space to a display canvas of
//! [`CanvasOpts::display_width`](crate::CanvasOpts) pixels with one uniform scale. Pointer
//! gestures end in the bridge, which divides by the scale and rounds, so the model only ever
//! receives whole slide pixels. [`SlideScene`](crate::SlideScene) is the back-to-front display
//! list a scene-graph library draws from.
//!
//! ---
//!
//! ## Editor sessions
//!
//! [`EditorSession`](crate::EditorSession) holds everything one open editor needs: the mode, the
//! snapshot taken at open or save, the current template, the text buffer and the selection.
//!
//! Switching to text serializes the template. Text edits are validated opportunistically; each
//! request carries a [`ValidationTicket`](crate::ValidationTicket) and only the newest ticket's
//! result is applied. A rejected switch back keeps the buffer and the last good template and
//! shows the parser's message.
//!
//! ```rust
//! use songslide::{EditorOpts, EditorSession, TemplateParser, Transition, YamlTemplateParser};
//!
//! # fn main() -> songslide::SongslideResult<()> {
//! let mut session = EditorSession::create(EditorOpts::default());
//! session.switch_to_text()?;
//!
//! if let Some(ticket) = session.edit_text("name: Draft\nslides:\n  - text: []\n") {
//!     // Normally sent to the parser asynchronously.
//!     let result = YamlTemplateParser.validate(&ticket.text);
//!     session.complete_validation(&ticket, result);
//! }
//! assert_eq!(session.template().name, "Draft");
//!
//! // The buffer already parsed, so nothing is left to validate.
//! assert_eq!(session.request_wysiwyg()?, Transition::Switched);
//! assert!(session.has_unsaved_changes());
//! # Ok(())
//! # }
//! ```
//!
//! Unsaved-change detection compares only what an author can change: name, description, aspect
//! ratio, slides, reference slide and the default flag. Server-owned fields such as the document
//! id never count.
//!
//! ---
//!
//! ## Errors and logging
//!
//! Fallible operations return [`SongslideResult`](crate::SongslideResult).
//! [`SongslideError::user_message`](crate::SongslideError::user_message) gives the text for an
//! error banner without the taxonomy prefix.
//!
//! The crate logs through `tracing` and never installs a subscriber. Serialization, parsing and
//! editor mode transitions are instrumented; discarded validation results are logged at `debug`
//! and surfaced parse failures at `warn`.
