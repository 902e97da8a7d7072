use crate::document::TemplateDocument;
use crate::foundation::core::AspectRatio;
use crate::template::model::Template;
use crate::template::slide::Slide;

/// The fields an author can change. Server-owned fields (`id`, `centerIds`, the text form) are
/// left out so they never count as unsaved work.
#[derive(Debug, PartialEq)]
pub(crate) struct EditableFields<'a> {
    name: &'a str,
    description: Option<&'a str>,
    aspect_ratio: AspectRatio,
    slides: &'a [Slide],
    reference_slide_index: usize,
    is_default: bool,
}

impl<'a> EditableFields<'a> {
    pub(crate) fn new(template: &'a Template, is_default: bool) -> Self {
        Self {
            name: &template.name,
            description: template.description.as_deref(),
            aspect_ratio: template.aspect_ratio,
            slides: &template.slides,
            reference_slide_index: template.reference_slide_index,
            is_default,
        }
    }
}

/// Whether `current` differs from what was last loaded or saved. Without an original, anything
/// authored counts.
pub(crate) fn has_unsaved_changes(
    original: Option<&TemplateDocument>,
    current: &Template,
    is_default: bool,
) -> bool {
    match original {
        None => !current.is_blank() || is_default,
        Some(doc) => {
            EditableFields::new(&doc.template, doc.is_default)
                != EditableFields::new(current, is_default)
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/editor/dirty.rs"]
mod tests;
