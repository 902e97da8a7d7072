use std::fmt;

use crate::position::dimension::Dimension;
use crate::template::element::{
    AudioElement, Element, ElementId, ElementKind, ElementRef, ImageElement, Layer, TextAlign,
    TextElement, VideoElement,
};

/// What fills the slide behind every element.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Background {
    /// Fill kind.
    #[serde(rename = "type")]
    pub kind: BackgroundKind,
    /// Color string for [`BackgroundKind::Color`], media URL otherwise.
    pub value: String,
}

/// How a [`Background`] value is interpreted.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BackgroundKind {
    /// Solid color.
    #[default]
    Color,
    /// Image URL.
    Image,
    /// Video URL.
    Video,
}

impl BackgroundKind {
    /// Lowercase name used in the text format.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Color => "color",
            Self::Image => "image",
            Self::Video => "video",
        }
    }

    /// Inverse of [`BackgroundKind::as_str`].
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim() {
            "color" => Some(Self::Color),
            "image" => Some(Self::Image),
            "video" => Some(Self::Video),
            _ => None,
        }
    }
}

impl Default for Background {
    fn default() -> Self {
        Self {
            kind: BackgroundKind::Color,
            value: "#000000".to_owned(),
        }
    }
}

/// The song-content overlay slots that exist on the reference slide.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SongStyleSlot {
    /// Song title.
    Title,
    /// Lyrics of the current section.
    Lyrics,
    /// Translated lyrics.
    Translation,
    /// Bottom-left footer.
    BottomLeft,
    /// Bottom-right footer.
    BottomRight,
}

impl SongStyleSlot {
    /// Every slot, in emission order.
    pub const ALL: [SongStyleSlot; 5] = [
        SongStyleSlot::Title,
        SongStyleSlot::Lyrics,
        SongStyleSlot::Translation,
        SongStyleSlot::BottomLeft,
        SongStyleSlot::BottomRight,
    ];

    /// Field name used by the text format and the persisted document.
    pub fn key(self) -> &'static str {
        match self {
            Self::Title => "songTitleStyle",
            Self::Lyrics => "songLyricsStyle",
            Self::Translation => "songTranslationStyle",
            Self::BottomLeft => "bottomLeftTextStyle",
            Self::BottomRight => "bottomRightTextStyle",
        }
    }
}

impl fmt::Display for SongStyleSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Where and how one piece of dynamic song content is drawn on the reference slide.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SongContentStyle {
    /// Left edge.
    pub x: Dimension,
    /// Top edge.
    pub y: Dimension,
    /// Box width.
    pub width: Dimension,
    /// Box height; grows with the content when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<Dimension>,
    /// Font size.
    pub font_size: Dimension,
    /// CSS-style weight.
    pub font_weight: String,
    /// CSS-style font style.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_style: Option<String>,
    /// Font family.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_family: Option<String>,
    /// Alignment within the box.
    #[serde(default)]
    pub text_align: TextAlign,
    /// CSS color string.
    pub color: String,
    /// Legacy vertical placement as a percentage of slide height. Kept so older documents
    /// survive a save; `y` is authoritative.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub y_position: Option<f64>,
}

/// The five optional song-content styles of a slide.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SongStyles {
    /// Song title.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub song_title_style: Option<SongContentStyle>,
    /// Lyrics.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub song_lyrics_style: Option<SongContentStyle>,
    /// Translation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub song_translation_style: Option<SongContentStyle>,
    /// Bottom-left footer.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bottom_left_text_style: Option<SongContentStyle>,
    /// Bottom-right footer.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bottom_right_text_style: Option<SongContentStyle>,
}

impl SongStyles {
    /// Style of one slot.
    pub fn get(&self, slot: SongStyleSlot) -> Option<&SongContentStyle> {
        match slot {
            SongStyleSlot::Title => self.song_title_style.as_ref(),
            SongStyleSlot::Lyrics => self.song_lyrics_style.as_ref(),
            SongStyleSlot::Translation => self.song_translation_style.as_ref(),
            SongStyleSlot::BottomLeft => self.bottom_left_text_style.as_ref(),
            SongStyleSlot::BottomRight => self.bottom_right_text_style.as_ref(),
        }
    }

    /// Mutable slot, for inserting or clearing a style.
    pub fn slot_mut(&mut self, slot: SongStyleSlot) -> &mut Option<SongContentStyle> {
        match slot {
            SongStyleSlot::Title => &mut self.song_title_style,
            SongStyleSlot::Lyrics => &mut self.song_lyrics_style,
            SongStyleSlot::Translation => &mut self.song_translation_style,
            SongStyleSlot::BottomLeft => &mut self.bottom_left_text_style,
            SongStyleSlot::BottomRight => &mut self.bottom_right_text_style,
        }
    }

    /// Present styles in emission order.
    pub fn iter(&self) -> impl Iterator<Item = (SongStyleSlot, &SongContentStyle)> {
        SongStyleSlot::ALL
            .into_iter()
            .filter_map(|slot| self.get(slot).map(|s| (slot, s)))
    }

    /// No slot is set.
    pub fn is_empty(&self) -> bool {
        self.iter().next().is_none()
    }
}

/// How a slide relates to the reference slide.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SlideRole {
    /// Static slide shown before the song content.
    Intro,
    /// The slide song content is overlaid on.
    Reference,
    /// Static slide shown after the song content.
    Outro,
}

/// One slide: a background plus per-kind element collections.
///
/// Element collections keep insertion order, which is the z-order tie breaker.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Slide {
    /// Fill behind every element; none paints nothing.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background: Option<Background>,
    /// Image layers.
    #[serde(default)]
    pub images: Vec<ImageElement>,
    /// Video layers.
    #[serde(default)]
    pub videos: Vec<VideoElement>,
    /// Audio layers.
    #[serde(default)]
    pub audios: Vec<AudioElement>,
    /// Text layers.
    #[serde(default)]
    pub text: Vec<TextElement>,
    /// Only meaningful on the reference slide.
    #[serde(flatten)]
    pub song_styles: SongStyles,
}

impl Slide {
    /// All elements in insertion order: images, videos, audios, then text.
    pub fn elements(&self) -> impl Iterator<Item = ElementRef<'_>> {
        self.images
            .iter()
            .map(ElementRef::Image)
            .chain(self.videos.iter().map(ElementRef::Video))
            .chain(self.audios.iter().map(ElementRef::Audio))
            .chain(self.text.iter().map(ElementRef::Text))
    }

    /// Number of elements across all kinds.
    pub fn element_count(&self) -> usize {
        self.images.len() + self.videos.len() + self.audios.len() + self.text.len()
    }

    /// No background, no elements and no song styles.
    pub fn is_empty(&self) -> bool {
        self.background.is_none() && self.element_count() == 0 && self.song_styles.is_empty()
    }

    /// Element with the given id.
    pub fn find(&self, id: &ElementId) -> Option<ElementRef<'_>> {
        self.elements().find(|e| e.id() == id)
    }

    /// Whether an element with the given id lives here.
    pub fn contains(&self, id: &ElementId) -> bool {
        self.find(id).is_some()
    }

    /// Append an element to the collection of its kind.
    pub fn push(&mut self, element: Element) {
        match element {
            Element::Image(e) => self.images.push(e),
            Element::Video(e) => self.videos.push(e),
            Element::Audio(e) => self.audios.push(e),
            Element::Text(e) => self.text.push(e),
        }
    }

    /// Remove an element by id, returning it when found.
    pub fn remove(&mut self, id: &ElementId) -> Option<Element> {
        fn take<T>(v: &mut Vec<T>, id: &ElementId, layer: impl Fn(&T) -> &Layer) -> Option<T> {
            let pos = v.iter().position(|e| &layer(e).id == id)?;
            Some(v.remove(pos))
        }

        if let Some(e) = take(&mut self.images, id, |e| &e.layer) {
            return Some(Element::Image(e));
        }
        if let Some(e) = take(&mut self.videos, id, |e| &e.layer) {
            return Some(Element::Video(e));
        }
        if let Some(e) = take(&mut self.audios, id, |e| &e.layer) {
            return Some(Element::Audio(e));
        }
        take(&mut self.text, id, |e| &e.layer).map(Element::Text)
    }

    /// Mutable access to an element's kind-specific record.
    pub(crate) fn element_mut(&mut self, id: &ElementId) -> Option<ElementMut<'_>> {
        if let Some(e) = self.images.iter_mut().find(|e| &e.layer.id == id) {
            return Some(ElementMut::Image(e));
        }
        if let Some(e) = self.videos.iter_mut().find(|e| &e.layer.id == id) {
            return Some(ElementMut::Video(e));
        }
        if let Some(e) = self.audios.iter_mut().find(|e| &e.layer.id == id) {
            return Some(ElementMut::Audio(e));
        }
        self.text
            .iter_mut()
            .find(|e| &e.layer.id == id)
            .map(ElementMut::Text)
    }

    /// Every layer, mutably, in insertion order.
    pub(crate) fn layers_mut(&mut self) -> impl Iterator<Item = &mut Layer> {
        self.images
            .iter_mut()
            .map(|e| &mut e.layer)
            .chain(self.videos.iter_mut().map(|e| &mut e.layer))
            .chain(self.audios.iter_mut().map(|e| &mut e.layer))
            .chain(self.text.iter_mut().map(|e| &mut e.layer))
    }

    /// Highest z-index among elements of `kind`, if any.
    pub(crate) fn max_z_index(&self, kind: ElementKind) -> Option<i32> {
        self.elements()
            .filter(|e| e.kind() == kind)
            .map(|e| e.layer().z_index)
            .max()
    }
}

pub(crate) enum ElementMut<'a> {
    Image(&'a mut ImageElement),
    Video(&'a mut VideoElement),
    Audio(&'a mut AudioElement),
    Text(&'a mut TextElement),
}

impl ElementMut<'_> {
    pub(crate) fn kind(&self) -> ElementKind {
        match self {
            Self::Image(_) => ElementKind::Image,
            Self::Video(_) => ElementKind::Video,
            Self::Audio(_) => ElementKind::Audio,
            Self::Text(_) => ElementKind::Text,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/template/slide.rs"]
mod tests;
