use crate::foundation::core::{AspectRatio, SlideSize};
use crate::foundation::error::{SongslideError, SongslideResult};
use crate::template::defaults::default_element;
use crate::template::element::{Element, ElementId, ElementKind};
use crate::template::patch::{BackgroundPatch, ElementPatch, SongStylePatch};
use crate::template::slide::{Slide, SlideRole, SongContentStyle, SongStyleSlot, SongStyles};

/// A multi-slide presentation template.
///
/// Invariants: `slides` is never empty and `reference_slide_index < slides.len()`. Every mutator
/// returns a new value and leaves `self` untouched, so callers can diff revisions by value.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Template {
    /// Display name.
    pub name: String,
    /// Free-form notes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Slide shape.
    #[serde(default)]
    pub aspect_ratio: AspectRatio,
    /// Slides in presentation order.
    pub slides: Vec<Slide>,
    /// Slide the song content is overlaid on.
    #[serde(default)]
    pub reference_slide_index: usize,
}

impl Default for Template {
    fn default() -> Self {
        Self::new("")
    }
}

impl Template {
    /// One empty 16:9 slide that is also the reference slide.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            aspect_ratio: AspectRatio::default(),
            slides: vec![Slide::default()],
            reference_slide_index: 0,
        }
    }

    /// Nothing has been authored yet: the value still matches [`Template::new`] with an empty
    /// name, whitespace aside.
    pub fn is_blank(&self) -> bool {
        let fresh = Self::new("");
        self.name.trim().is_empty()
            && self.description.as_deref().is_none_or(|d| d.trim().is_empty())
            && self.aspect_ratio == fresh.aspect_ratio
            && self.slides == fresh.slides
    }

    /// Slide-space extent for the aspect ratio.
    pub fn slide_size(&self) -> SlideSize {
        self.aspect_ratio.slide_size()
    }

    /// Slide at `index`.
    pub fn slide(&self, index: usize) -> Option<&Slide> {
        self.slides.get(index)
    }

    /// The slide song content is overlaid on.
    pub fn reference_slide(&self) -> Option<&Slide> {
        self.slides.get(self.reference_slide_index)
    }

    /// Role of the slide at `index`, or `None` when out of range.
    pub fn slide_role(&self, index: usize) -> Option<SlideRole> {
        if index >= self.slides.len() {
            return None;
        }
        Some(match index.cmp(&self.reference_slide_index) {
            std::cmp::Ordering::Less => SlideRole::Intro,
            std::cmp::Ordering::Equal => SlideRole::Reference,
            std::cmp::Ordering::Greater => SlideRole::Outro,
        })
    }

    /// Slide index holding the element, if any.
    pub fn locate(&self, id: &ElementId) -> Option<usize> {
        self.slides.iter().position(|s| s.contains(id))
    }

    fn check_slide(&self, index: usize) -> SongslideResult<()> {
        if index < self.slides.len() {
            Ok(())
        } else {
            Err(SongslideError::validation(format!(
                "slide index {index} out of range (template has {} slides)",
                self.slides.len()
            )))
        }
    }

    /// Rename.
    pub fn with_name(&self, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..self.clone()
        }
    }

    /// Replace the description.
    pub fn with_description(&self, description: Option<String>) -> Self {
        Self {
            description,
            ..self.clone()
        }
    }

    /// Change the aspect ratio. Pixel geometry is kept as authored.
    pub fn with_aspect_ratio(&self, aspect_ratio: AspectRatio) -> Self {
        Self {
            aspect_ratio,
            ..self.clone()
        }
    }

    /// Add a default element of `kind`, then apply `patch` on top of the defaults.
    pub fn with_element_added(
        &self,
        slide_index: usize,
        kind: ElementKind,
        patch: &ElementPatch,
    ) -> SongslideResult<(Self, ElementId)> {
        self.check_slide(slide_index)?;
        patch.check_kind(kind)?;

        let slide_size = self.slide_size();
        let mut element = default_element(kind, slide_size);
        let id = element.id().clone();

        let mut next = self.clone();
        let slide = &mut next.slides[slide_index];
        if patch.z_index.is_none()
            && let Some(top) = slide.max_z_index(kind)
        {
            // Join the top of the kind's stack. Equal z-index paints in insertion order, so the
            // new element still draws above its peers.
            let z = element.layer().z_index.max(top);
            element.layer_mut().z_index = z;
        }
        slide.push(element);
        if let Some(target) = slide.element_mut(&id) {
            patch.apply(target, slide_size);
        }
        Ok((next, id))
    }

    /// Insert an already-built element, e.g. one pasted from another slide.
    pub fn with_element_inserted(
        &self,
        slide_index: usize,
        element: Element,
    ) -> SongslideResult<Self> {
        self.check_slide(slide_index)?;
        if let Some(owner) = self.locate(element.id()) {
            return Err(SongslideError::validation(format!(
                "element \"{}\" already exists on slide {owner}",
                element.id()
            )));
        }
        let mut next = self.clone();
        next.slides[slide_index].push(element);
        Ok(next)
    }

    /// Apply `patch` to an existing element.
    pub fn with_element_updated(
        &self,
        slide_index: usize,
        id: &ElementId,
        patch: &ElementPatch,
    ) -> SongslideResult<Self> {
        self.check_slide(slide_index)?;
        let slide_size = self.slide_size();
        let mut next = self.clone();
        let target = next.slides[slide_index]
            .element_mut(id)
            .ok_or_else(|| unknown_element(slide_index, id))?;
        patch.check_kind(target.kind())?;
        patch.apply(target, slide_size);
        Ok(next)
    }

    /// Drop an element from its slide.
    pub fn with_element_removed(
        &self,
        slide_index: usize,
        id: &ElementId,
    ) -> SongslideResult<Self> {
        self.check_slide(slide_index)?;
        let mut next = self.clone();
        next.slides[slide_index]
            .remove(id)
            .ok_or_else(|| unknown_element(slide_index, id))?;
        Ok(next)
    }

    /// Set, change or clear a slide background.
    pub fn with_background(
        &self,
        slide_index: usize,
        patch: &BackgroundPatch,
    ) -> SongslideResult<Self> {
        self.check_slide(slide_index)?;
        let mut next = self.clone();
        let slide = &mut next.slides[slide_index];
        slide.background = patch.apply(slide.background.take());
        Ok(next)
    }

    /// Update a song content style on the reference slide. A missing style starts from the slot
    /// default.
    pub fn with_song_style(&self, slot: SongStyleSlot, patch: &SongStylePatch) -> Self {
        let slide_size = self.slide_size();
        let mut next = self.clone();
        let index = next.reference_slide_index.min(next.slides.len().saturating_sub(1));
        if let Some(slide) = next.slides.get_mut(index) {
            let style = slide
                .song_styles
                .slot_mut(slot)
                .get_or_insert_with(|| SongContentStyle::default_for(slot, slide_size));
            patch.apply(style);
        }
        next
    }

    /// Drop a song content style from the reference slide.
    pub fn without_song_style(&self, slot: SongStyleSlot) -> Self {
        let mut next = self.clone();
        if let Some(slide) = next.slides.get_mut(next.reference_slide_index) {
            *slide.song_styles.slot_mut(slot) = None;
        }
        next
    }

    /// Insert an empty slide at `at` (clamped to the end).
    pub fn with_slide_added(&self, at: usize) -> Self {
        let mut next = self.clone();
        let at = at.min(next.slides.len());
        next.slides.insert(at, Slide::default());
        if at <= next.reference_slide_index {
            next.reference_slide_index += 1;
        }
        next
    }

    /// Remove a slide. The last remaining slide cannot be removed. Removing the reference slide
    /// promotes its nearest successor (or predecessor) and moves the song styles along.
    pub fn with_slide_removed(&self, index: usize) -> SongslideResult<Self> {
        self.check_slide(index)?;
        if self.slides.len() == 1 {
            return Err(SongslideError::validation(
                "a template must keep at least one slide",
            ));
        }
        let mut next = self.clone();
        let removed = next.slides.remove(index);
        if index < next.reference_slide_index {
            next.reference_slide_index -= 1;
        } else if index == next.reference_slide_index {
            next.reference_slide_index = index.min(next.slides.len() - 1);
            let target = &mut next.slides[next.reference_slide_index];
            if target.song_styles.is_empty() {
                target.song_styles = removed.song_styles;
            }
        }
        Ok(next)
    }

    /// Copy a slide right after itself. Copied elements get fresh ids; the copy is never the
    /// reference slide, so it carries no song styles.
    pub fn with_slide_duplicated(&self, index: usize) -> SongslideResult<Self> {
        self.check_slide(index)?;
        let mut copy = self.slides[index].clone();
        copy.song_styles = SongStyles::default();
        for e in &mut copy.images {
            e.layer.id = ElementId::generate(ElementKind::Image);
        }
        for e in &mut copy.videos {
            e.layer.id = ElementId::generate(ElementKind::Video);
        }
        for e in &mut copy.audios {
            e.layer.id = ElementId::generate(ElementKind::Audio);
        }
        for e in &mut copy.text {
            e.layer.id = ElementId::generate(ElementKind::Text);
        }
        let mut next = self.clone();
        next.slides.insert(index + 1, copy);
        if index < next.reference_slide_index {
            next.reference_slide_index += 1;
        }
        Ok(next)
    }

    /// Move a slide; the reference index keeps pointing at the same slide.
    pub fn with_slide_moved(&self, from: usize, to: usize) -> SongslideResult<Self> {
        self.check_slide(from)?;
        self.check_slide(to)?;
        let mut next = self.clone();
        let slide = next.slides.remove(from);
        next.slides.insert(to, slide);

        let r = self.reference_slide_index;
        next.reference_slide_index = if r == from {
            to
        } else if from < r && r <= to {
            r - 1
        } else if to <= r && r < from {
            r + 1
        } else {
            r
        };
        Ok(next)
    }

    /// Designate another slide as the reference slide. Song styles move with the designation.
    pub fn with_reference_slide(&self, index: usize) -> SongslideResult<Self> {
        self.check_slide(index)?;
        if index == self.reference_slide_index {
            return Ok(self.clone());
        }
        let mut next = self.clone();
        let styles = next
            .slides
            .get_mut(self.reference_slide_index)
            .map(|s| std::mem::take(&mut s.song_styles))
            .unwrap_or_default();
        next.slides[index].song_styles = styles;
        next.reference_slide_index = index;
        Ok(next)
    }
}

fn unknown_element(slide_index: usize, id: &ElementId) -> SongslideError {
    SongslideError::validation(format!("no element \"{id}\" on slide {slide_index}"))
}

#[cfg(test)]
#[path = "../../tests/unit/template/model.rs"]
mod tests;
