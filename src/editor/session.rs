use crate::canvas::bridge::{CanvasBridge, CanvasOpts, TransformEnd};
use crate::canvas::scene::SlideScene;
use crate::document::TemplateDocument;
use crate::editor::dirty::has_unsaved_changes;
use crate::editor::validation::{
    ValidationApplied, ValidationPurpose, ValidationTicket, ValidationTracker,
};
use crate::foundation::core::Point;
use crate::foundation::error::{SongslideError, SongslideResult};
use crate::parse::canonical::PartialTemplate;
use crate::parse::response::TemplateParser;
use crate::serialize::template::{SerializeOpts, serialize_template_with};
use crate::template::element::{ElementId, ElementKind};
use crate::template::model::Template;
use crate::template::patch::{BackgroundPatch, ElementPatch, SongStylePatch};
use crate::template::slide::SongStyleSlot;

/// Which representation the author is editing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum EditorMode {
    /// Visual canvas editor.
    #[default]
    Wysiwyg,
    /// Plain-text configuration editor.
    Text,
}

/// Editor configuration.
#[derive(Clone, Debug, PartialEq)]
pub struct EditorOpts {
    /// Display canvas settings.
    pub canvas: CanvasOpts,
    /// Send the text buffer to the parser on every edit.
    pub live_validation: bool,
    /// Text format settings.
    pub serialize: SerializeOpts,
}

impl Default for EditorOpts {
    fn default() -> Self {
        Self {
            canvas: CanvasOpts::default(),
            live_validation: true,
            serialize: SerializeOpts::default(),
        }
    }
}

/// Outcome of asking to leave the text editor.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Transition {
    /// Done; nothing needed parsing.
    Switched,
    /// The buffer must be validated first; complete the ticket to finish the switch.
    Pending(ValidationTicket),
}

/// Outcome of asking to close the editor.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CloseDecision {
    /// The editor is closed.
    Closed,
    /// Unsaved changes exist; call [`EditorSession::discard_and_close`] once the author agrees.
    ConfirmDiscard,
}

/// State of one template editor: the single source of truth for both the canvas and the text
/// editor.
///
/// The template is only mutated through the visual editor API or by applying a successful parse
/// of the text buffer. A rejected parse never touches it, so previews always show the last good
/// state.
#[derive(Clone, Debug)]
pub struct EditorSession {
    opts: EditorOpts,
    mode: EditorMode,
    original: Option<TemplateDocument>,
    current: Template,
    is_default: bool,
    text: String,
    /// Buffer contents that `current` is known to reflect.
    synced_text: String,
    error: Option<String>,
    selected: Option<ElementId>,
    active_slide: usize,
    validations: ValidationTracker,
    closed: bool,
}

impl EditorSession {
    /// Start editing a brand-new template.
    pub fn create(opts: EditorOpts) -> Self {
        Self::with_state(opts, None, Template::new(""), false)
    }

    /// Start editing a stored document.
    pub fn open(document: TemplateDocument, opts: EditorOpts) -> Self {
        let current = document.template.clone();
        let is_default = document.is_default;
        Self::with_state(opts, Some(document), current, is_default)
    }

    fn with_state(
        opts: EditorOpts,
        original: Option<TemplateDocument>,
        current: Template,
        is_default: bool,
    ) -> Self {
        Self {
            opts,
            mode: EditorMode::Wysiwyg,
            original,
            current,
            is_default,
            text: String::new(),
            synced_text: String::new(),
            error: None,
            selected: None,
            active_slide: 0,
            validations: ValidationTracker::default(),
            closed: false,
        }
    }

    /// Which editor is active.
    pub fn mode(&self) -> EditorMode {
        self.mode
    }

    /// Last good template.
    pub fn template(&self) -> &Template {
        &self.current
    }

    /// Snapshot taken when the document was opened or last saved.
    pub fn original(&self) -> Option<&TemplateDocument> {
        self.original.as_ref()
    }

    /// Text editor buffer. Only meaningful in [`EditorMode::Text`].
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Message of the last rejected mode switch, shown above the text editor.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Selected element.
    pub fn selected(&self) -> Option<&ElementId> {
        self.selected.as_ref()
    }

    /// Index of the slide on the canvas.
    pub fn active_slide(&self) -> usize {
        self.active_slide
    }

    /// Whether the template is marked as default.
    pub fn is_default(&self) -> bool {
        self.is_default
    }

    /// Whether the session has been closed.
    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// Configuration.
    pub fn opts(&self) -> &EditorOpts {
        &self.opts
    }

    /// Canvas mapping for the current aspect ratio.
    pub fn bridge(&self) -> CanvasBridge {
        CanvasBridge::for_template(&self.current, &self.opts.canvas)
    }

    /// Display list of the active slide.
    pub fn scene(&self) -> SongslideResult<SlideScene> {
        SlideScene::build(&self.current, self.active_slide, &self.bridge())
    }

    fn ensure_open(&self) -> SongslideResult<()> {
        if self.closed {
            Err(SongslideError::validation("the editor is closed"))
        } else {
            Ok(())
        }
    }

    fn ensure_wysiwyg(&self) -> SongslideResult<()> {
        self.ensure_open()?;
        if self.mode == EditorMode::Text {
            return Err(SongslideError::validation(
                "switch to the visual editor before editing the template directly",
            ));
        }
        Ok(())
    }

    /// Drop a selection whose element is gone and keep the active slide in range.
    fn reconcile(&mut self) {
        self.active_slide = self
            .active_slide
            .min(self.current.slides.len().saturating_sub(1));
        if let Some(id) = &self.selected
            && self.current.locate(id).is_none()
        {
            self.selected = None;
        }
    }

    /// Select an element, or clear the selection with `None`. The element's slide becomes active.
    pub fn select(&mut self, id: Option<ElementId>) -> SongslideResult<()> {
        self.ensure_open()?;
        if let Some(id) = &id {
            let slide = self.current.locate(id).ok_or_else(|| {
                SongslideError::validation(format!("no element \"{id}\" in the template"))
            })?;
            self.active_slide = slide;
        }
        self.selected = id;
        Ok(())
    }

    /// Show another slide. Drops a selection that lives elsewhere.
    pub fn set_active_slide(&mut self, index: usize) -> SongslideResult<()> {
        self.ensure_open()?;
        if self.current.slide(index).is_none() {
            return Err(SongslideError::validation(format!(
                "slide index {index} out of range (template has {} slides)",
                self.current.slides.len()
            )));
        }
        self.active_slide = index;
        if let Some(id) = &self.selected
            && self.current.locate(id) != Some(index)
        {
            self.selected = None;
        }
        Ok(())
    }

    /// Apply a visual-editor mutation. Rejected in text mode.
    pub fn edit<F>(&mut self, f: F) -> SongslideResult<()>
    where
        F: FnOnce(&Template) -> SongslideResult<Template>,
    {
        self.ensure_wysiwyg()?;
        match f(&self.current) {
            Ok(next) => {
                self.current = next;
                self.reconcile();
                Ok(())
            }
            Err(e) => {
                tracing::warn!(error = %e, "template edit rejected");
                Err(e)
            }
        }
    }

    /// Add an element to the active slide and select it.
    pub fn add_element(
        &mut self,
        kind: ElementKind,
        patch: &ElementPatch,
    ) -> SongslideResult<ElementId> {
        let slide = self.active_slide;
        let mut added = None;
        self.edit(|t| {
            let (next, id) = t.with_element_added(slide, kind, patch)?;
            added = Some(id);
            Ok(next)
        })?;
        let id = added.ok_or_else(|| SongslideError::validation("element was not added"))?;
        self.selected = Some(id.clone());
        Ok(id)
    }

    fn slide_of(&self, id: &ElementId) -> SongslideResult<usize> {
        self.current.locate(id).ok_or_else(|| {
            SongslideError::validation(format!("no element \"{id}\" in the template"))
        })
    }

    /// Patch an element on whichever slide it lives on.
    pub fn update_element(&mut self, id: &ElementId, patch: &ElementPatch) -> SongslideResult<()> {
        self.ensure_wysiwyg()?;
        let slide = self.slide_of(id)?;
        self.edit(|t| t.with_element_updated(slide, id, patch))
    }

    /// Remove an element from whichever slide it lives on.
    pub fn remove_element(&mut self, id: &ElementId) -> SongslideResult<()> {
        self.ensure_wysiwyg()?;
        let slide = self.slide_of(id)?;
        self.edit(|t| t.with_element_removed(slide, id))
    }

    /// End of a canvas drag at display position `p`.
    pub fn drag_end(&mut self, id: &ElementId, p: Point) -> SongslideResult<()> {
        let patch = self.bridge().drag_end(p);
        self.update_element(id, &patch)
    }

    /// End of a resize/rotate gesture on the selected transformer.
    pub fn transform_end(&mut self, id: &ElementId, t: &TransformEnd) -> SongslideResult<()> {
        let patch = self.bridge().transform_end(t);
        self.update_element(id, &patch)
    }

    /// End of a drag of a song content placeholder.
    pub fn drag_song_style_end(&mut self, slot: SongStyleSlot, p: Point) -> SongslideResult<()> {
        let patch = self.bridge().drag_end_song_style(p);
        self.set_song_style(slot, &patch)
    }

    /// Change a song content style on the reference slide.
    pub fn set_song_style(
        &mut self,
        slot: SongStyleSlot,
        patch: &SongStylePatch,
    ) -> SongslideResult<()> {
        self.edit(|t| Ok(t.with_song_style(slot, patch)))
    }

    /// Change the active slide's background.
    pub fn set_background(&mut self, patch: &BackgroundPatch) -> SongslideResult<()> {
        let slide = self.active_slide;
        self.edit(|t| t.with_background(slide, patch))
    }

    /// Mark the template as default or not.
    pub fn set_is_default(&mut self, is_default: bool) -> SongslideResult<()> {
        self.ensure_open()?;
        self.is_default = is_default;
        Ok(())
    }

    /// Serialize the template into the text buffer and enter text mode.
    #[tracing::instrument(skip(self), fields(slides = self.current.slides.len()))]
    pub fn switch_to_text(&mut self) -> SongslideResult<()> {
        self.ensure_open()?;
        if self.mode == EditorMode::Text {
            return Ok(());
        }
        self.text = serialize_template_with(&self.current, &self.opts.serialize);
        self.synced_text.clone_from(&self.text);
        self.error = None;
        self.validations.cancel();
        self.mode = EditorMode::Text;
        Ok(())
    }

    /// Replace the text buffer. Returns a ticket when the buffer should be validated.
    ///
    /// While a mode switch is pending the new ticket carries the switch forward, so typing during
    /// validation does not lose the request.
    pub fn edit_text(&mut self, text: impl Into<String>) -> Option<ValidationTicket> {
        if self.closed || self.mode != EditorMode::Text {
            return None;
        }
        self.text = text.into();
        let switching = self.validations.pending() == Some(ValidationPurpose::ModeSwitch);
        if switching {
            if self.text.trim().is_empty() {
                self.validations.cancel();
                self.enter_wysiwyg();
                return None;
            }
            return Some(
                self.validations
                    .issue(ValidationPurpose::ModeSwitch, &self.text),
            );
        }
        if !self.opts.live_validation || self.text.trim().is_empty() {
            self.validations.cancel();
            return None;
        }
        Some(self.validations.issue(ValidationPurpose::LiveEdit, &self.text))
    }

    /// Ask to return to the visual editor.
    ///
    /// An empty buffer, or one the template already reflects, switches at once. Anything else has
    /// to be validated first.
    #[tracing::instrument(skip(self))]
    pub fn request_wysiwyg(&mut self) -> SongslideResult<Transition> {
        self.ensure_open()?;
        if self.mode == EditorMode::Wysiwyg {
            return Ok(Transition::Switched);
        }
        if self.text.trim().is_empty() || self.text == self.synced_text {
            self.validations.cancel();
            self.enter_wysiwyg();
            return Ok(Transition::Switched);
        }
        Ok(Transition::Pending(
            self.validations
                .issue(ValidationPurpose::ModeSwitch, &self.text),
        ))
    }

    fn enter_wysiwyg(&mut self) {
        self.mode = EditorMode::Wysiwyg;
        self.error = None;
    }

    fn apply_parsed(&mut self, partial: &PartialTemplate, text: &str) {
        self.current = partial.merge_into(&self.current);
        text.clone_into(&mut self.synced_text);
        self.error = None;
        self.reconcile();
    }

    /// Feed a parser result back. Only the newest ticket is applied; anything older, or anything
    /// arriving after the session left text mode or closed, is discarded.
    #[tracing::instrument(
        skip(self, ticket, result),
        fields(seq = ticket.seq, purpose = ?ticket.purpose)
    )]
    pub fn complete_validation(
        &mut self,
        ticket: &ValidationTicket,
        result: SongslideResult<PartialTemplate>,
    ) -> ValidationApplied {
        if self.closed || self.mode != EditorMode::Text || !self.validations.is_current(ticket) {
            tracing::debug!("discarding stale validation result");
            return ValidationApplied::Stale;
        }
        self.validations.settle(ticket);

        match (ticket.purpose, result) {
            (ValidationPurpose::LiveEdit, Ok(partial)) => {
                self.apply_parsed(&partial, &ticket.text);
                tracing::debug!("live edit applied");
                ValidationApplied::Applied
            }
            (ValidationPurpose::LiveEdit, Err(e)) => {
                tracing::debug!(error = %e, "live edit not valid yet");
                ValidationApplied::Ignored
            }
            (ValidationPurpose::ModeSwitch, Ok(partial)) => {
                self.apply_parsed(&partial, &ticket.text);
                self.enter_wysiwyg();
                ValidationApplied::SwitchedToWysiwyg
            }
            (ValidationPurpose::ModeSwitch, Err(e)) => {
                let message = e.user_message();
                tracing::warn!(error = %message, "text rejected, staying in text mode");
                self.error = Some(message.clone());
                ValidationApplied::Rejected(message)
            }
        }
    }

    /// [`EditorSession::edit_text`] with a synchronous parser.
    pub fn edit_text_with<P>(&mut self, parser: &P, text: impl Into<String>) -> ValidationApplied
    where
        P: TemplateParser + ?Sized,
    {
        let was_text = !self.closed && self.mode == EditorMode::Text;
        match self.edit_text(text) {
            Some(ticket) => {
                let result = parser.validate(&ticket.text);
                self.complete_validation(&ticket, result)
            }
            // An emptied buffer finishes a pending switch without parsing.
            None if was_text && self.mode == EditorMode::Wysiwyg => {
                ValidationApplied::SwitchedToWysiwyg
            }
            None => ValidationApplied::Ignored,
        }
    }

    /// [`EditorSession::request_wysiwyg`] with a synchronous parser.
    pub fn switch_to_wysiwyg<P>(&mut self, parser: &P) -> SongslideResult<ValidationApplied>
    where
        P: TemplateParser + ?Sized,
    {
        match self.request_wysiwyg()? {
            Transition::Switched => Ok(ValidationApplied::SwitchedToWysiwyg),
            Transition::Pending(ticket) => {
                let result = parser.validate(&ticket.text);
                Ok(self.complete_validation(&ticket, result))
            }
        }
    }

    /// Whether closing now would lose work: the authored fields differ from the snapshot, or the
    /// text buffer holds edits the template does not reflect yet.
    pub fn has_unsaved_changes(&self) -> bool {
        has_unsaved_changes(self.original.as_ref(), &self.current, self.is_default)
            || self.has_unparsed_text()
    }

    fn has_unparsed_text(&self) -> bool {
        self.mode == EditorMode::Text && self.text != self.synced_text
    }

    /// Close unless unsaved work would be lost.
    pub fn request_close(&mut self) -> CloseDecision {
        if !self.closed && self.has_unsaved_changes() {
            return CloseDecision::ConfirmDiscard;
        }
        self.discard_and_close();
        CloseDecision::Closed
    }

    /// Close unconditionally. Pending validations become stale.
    pub fn discard_and_close(&mut self) {
        self.validations.cancel();
        self.closed = true;
    }

    /// Document to hand to the storage service, its text form re-serialized from the template.
    #[tracing::instrument(skip(self))]
    pub fn prepare_save(&self) -> SongslideResult<TemplateDocument> {
        self.ensure_open()?;
        if self.has_unparsed_text() {
            tracing::warn!("save refused, text edits are not validated");
            return Err(SongslideError::validation(
                "the text has changes that have not been validated yet",
            ));
        }
        let template = self.current.normalized();
        let mut doc = match &self.original {
            Some(original) => original.with_template(template),
            None => TemplateDocument::new(template),
        };
        doc.is_default = self.is_default;
        Ok(doc)
    }

    /// Adopt the stored copy returned by the storage service as the new snapshot.
    pub fn mark_saved(&mut self, document: TemplateDocument) {
        self.current = document.template.clone();
        self.is_default = document.is_default;
        self.original = Some(document);
        if self.mode == EditorMode::Text && !self.has_unparsed_text() {
            self.text = serialize_template_with(&self.current, &self.opts.serialize);
            self.synced_text.clone_from(&self.text);
        }
        self.reconcile();
    }
}

#[cfg(test)]
#[path = "../../tests/unit/editor/session.rs"]
mod tests;
