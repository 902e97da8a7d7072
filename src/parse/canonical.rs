use std::collections::HashSet;

use crate::foundation::core::AspectRatio;
use crate::foundation::error::{SongslideError, SongslideResult};
use crate::template::model::Template;
use crate::template::slide::Slide;

/// Structured fields recovered from text. Absent fields were not present in the text.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PartialTemplate {
    /// Template name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Aspect ratio.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aspect_ratio: Option<AspectRatio>,
    /// Slides, fully built.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slides: Option<Vec<Slide>>,
    /// Reference slide index.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reference_slide_index: Option<usize>,
}

impl PartialTemplate {
    /// Overlay these fields on `current`.
    ///
    /// `description` is taken as-is: text without one clears it. Everything else keeps the
    /// current value when absent. An empty slide list is ignored, and the reference index is
    /// clamped into the resulting slide range.
    pub fn merge_into(&self, current: &Template) -> Template {
        let mut next = current.clone();
        if let Some(name) = &self.name {
            next.name.clone_from(name);
        }
        next.description.clone_from(&self.description);
        if let Some(ratio) = self.aspect_ratio {
            next.aspect_ratio = ratio;
        }
        if let Some(slides) = self.slides.as_ref().filter(|s| !s.is_empty()) {
            next.slides.clone_from(slides);
        }
        if next.slides.is_empty() {
            next.slides.push(Slide::default());
        }
        if let Some(index) = self.reference_slide_index {
            next.reference_slide_index = index;
        }
        next.reference_slide_index = next.reference_slide_index.min(next.slides.len() - 1);
        next
    }

    /// A standalone template from these fields, defaults filling the gaps.
    pub fn into_template(self) -> Template {
        self.merge_into(&Template::new(""))
    }
}

/// Loosely-shaped template as found in text, before the single-slide shim is applied.
#[derive(Clone, Debug, Default)]
pub(crate) struct RawTemplate {
    pub(crate) name: Option<String>,
    pub(crate) description: Option<String>,
    pub(crate) aspect_ratio: Option<AspectRatio>,
    pub(crate) reference_slide_index: Option<i64>,
    pub(crate) slides: Option<Vec<Slide>>,
    /// Top-level slide fields of the legacy single-slide shape.
    pub(crate) legacy_slide: Option<Slide>,
}

/// Upgrade a raw template to the canonical multi-slide shape.
///
/// Runs once at load time: afterwards `slides` is either absent or non-empty, ids are unique,
/// and a present reference index points at an existing slide.
pub(crate) fn to_canonical_template(raw: RawTemplate) -> SongslideResult<PartialTemplate> {
    let slides = match (raw.slides, raw.legacy_slide) {
        (Some(slides), _) if slides.is_empty() => {
            return Err(SongslideError::parse(
                "$.slides: a template needs at least one slide",
            ));
        }
        (Some(slides), _) => Some(slides),
        (None, Some(legacy)) => Some(vec![legacy]),
        (None, None) => None,
    };

    if let Some(slides) = &slides {
        check_unique_ids(slides)?;
    }

    let reference_slide_index = match raw.reference_slide_index {
        None => None,
        Some(i) => {
            let in_range = usize::try_from(i)
                .ok()
                .filter(|&i| slides.as_ref().is_none_or(|s| i < s.len()));
            match in_range {
                Some(i) => Some(i),
                None => {
                    let count = slides.as_ref().map_or(0, Vec::len);
                    return Err(SongslideError::parse(format!(
                        "$.referenceSlideIndex: {i} is out of range for {count} slides"
                    )));
                }
            }
        }
    };

    Ok(PartialTemplate {
        name: raw.name,
        description: raw.description,
        aspect_ratio: raw.aspect_ratio,
        slides,
        reference_slide_index,
    })
}

fn check_unique_ids(slides: &[Slide]) -> SongslideResult<()> {
    let mut seen = HashSet::new();
    for (index, slide) in slides.iter().enumerate() {
        for e in slide.elements() {
            if !seen.insert(e.id()) {
                return Err(SongslideError::parse(format!(
                    "$.slides[{index}]: duplicate element id \"{}\"",
                    e.id()
                )));
            }
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/parse/canonical.rs"]
mod tests;
