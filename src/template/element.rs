use std::fmt;

use crate::foundation::core::{Rect, SlideSize};
use crate::position::dimension::Dimension;
use crate::position::resolver::{Position, resolve_box};

/// Opaque element identity, stable for the lifetime of the element.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct ElementId(String);

impl ElementId {
    /// Wrap an existing id.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Fresh id prefixed with the element kind, e.g. `text-3f9c0a1b2d4e`.
    pub fn generate(kind: ElementKind) -> Self {
        let uuid = uuid::Uuid::new_v4().simple().to_string();
        Self(format!("{}-{}", kind.as_str(), &uuid[..12]))
    }

    /// Borrow the raw id.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The four positioned layer kinds a slide can hold.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ElementKind {
    /// Bitmap image.
    Image,
    /// Video clip.
    Video,
    /// Audio track, drawn as an icon.
    Audio,
    /// Text box.
    Text,
}

impl ElementKind {
    /// Every kind, in slide collection order.
    pub const ALL: [ElementKind; 4] = [
        ElementKind::Image,
        ElementKind::Video,
        ElementKind::Audio,
        ElementKind::Text,
    ];

    /// Lowercase name, also the generated id prefix.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Image => "image",
            Self::Video => "video",
            Self::Audio => "audio",
            Self::Text => "text",
        }
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Geometry and paint attributes shared by every element kind.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Layer {
    /// Identity, unique within the template.
    pub id: ElementId,
    /// Top-left corner or preset anchor.
    #[serde(flatten)]
    pub position: Position,
    /// Box width.
    pub width: Dimension,
    /// Box height.
    pub height: Dimension,
    /// Paint opacity in `[0, 1]`.
    #[serde(default = "default_opacity")]
    pub opacity: f64,
    /// Paint order; ties are broken by insertion order.
    #[serde(default)]
    pub z_index: i32,
    /// Clockwise rotation in degrees. Written as whole degrees.
    #[serde(default)]
    pub rotation: f64,
}

pub(crate) fn default_opacity() -> f64 {
    1.0
}

impl Layer {
    /// Slide-space bounding box (rotation not applied).
    pub fn bounds(&self, slide: SlideSize) -> Rect {
        resolve_box(&self.position, self.width, self.height, slide)
    }
}

/// Clamp a unit-interval value; non-finite input falls back to `fallback`.
pub(crate) fn clamp_unit(v: f64, fallback: f64) -> f64 {
    if v.is_finite() { v.clamp(0.0, 1.0) } else { fallback }
}

/// Still image layer.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageElement {
    /// Geometry and paint.
    #[serde(flatten)]
    pub layer: Layer,
    /// Media URL.
    pub url: String,
}

/// Video layer.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoElement {
    /// Geometry and paint.
    #[serde(flatten)]
    pub layer: Layer,
    /// Media URL.
    pub url: String,
    /// Start playing when the slide shows.
    pub auto_play: bool,
    /// Restart when playback ends.
    #[serde(rename = "loop")]
    pub looping: bool,
    /// Play without sound.
    pub muted: bool,
    /// Keep the picture hidden and only play the sound.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hide_video: Option<bool>,
    /// Drop the sound track.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hide_audio: Option<bool>,
}

/// Audio layer, shown as a speaker icon.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AudioElement {
    /// Geometry and paint.
    #[serde(flatten)]
    pub layer: Layer,
    /// Media URL.
    pub url: String,
    /// Start playing when the slide shows.
    pub auto_play: bool,
    /// Restart when playback ends.
    #[serde(rename = "loop")]
    pub looping: bool,
    /// Playback volume in `[0, 1]`.
    pub volume: f64,
    /// Hide the on-slide speaker icon.
    pub visual_hidden: bool,
    /// First slide (1-based) the audio plays on. Absent means the slide it lives on.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_slide: Option<u32>,
    /// Last slide (1-based) the audio plays on. Absent means the slide it lives on.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_slide: Option<u32>,
    /// Play from the first to the last slide, unless `start_slide`/`end_slide` narrow it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub play_across_all_slides: Option<bool>,
}

impl AudioElement {
    /// 1-based inclusive slide range this audio plays on when it lives on `slide_index`
    /// (0-based) of a deck with `slide_count` slides.
    pub fn effective_range(&self, slide_index: usize, slide_count: usize) -> (u32, u32) {
        let own = u32::try_from(slide_index + 1).unwrap_or(u32::MAX);
        let (start, end) = if self.play_across_all_slides == Some(true) {
            (1, u32::try_from(slide_count.max(1)).unwrap_or(u32::MAX))
        } else {
            (own, own)
        };
        (
            self.start_slide.unwrap_or(start).max(1),
            self.end_slide.unwrap_or(end).max(1),
        )
    }

    /// Whether the audio is audible on 1-based `slide_number`.
    pub fn plays_on(&self, slide_number: u32, slide_index: usize, slide_count: usize) -> bool {
        let (start, end) = self.effective_range(slide_index, slide_count);
        start <= slide_number && slide_number <= end
    }
}

/// Horizontal text alignment.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAlign {
    /// Flush left.
    Left,
    /// Centered.
    #[default]
    Center,
    /// Flush right.
    Right,
}

impl TextAlign {
    /// Lowercase name used in the text format.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Center => "center",
            Self::Right => "right",
        }
    }

    /// Inverse of [`TextAlign::as_str`].
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim() {
            "left" => Some(Self::Left),
            "center" => Some(Self::Center),
            "right" => Some(Self::Right),
            _ => None,
        }
    }
}

/// Text box layer.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextElement {
    /// Geometry and paint.
    #[serde(flatten)]
    pub layer: Layer,
    /// Text to draw; lyrics routinely span several lines.
    pub content: String,
    /// Font size; percentages refer to the slide height.
    pub font_size: Dimension,
    /// Font family; the renderer default when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_family: Option<String>,
    /// CSS-style weight, e.g. `bold` or `600`.
    pub font_weight: String,
    /// CSS-style font style, e.g. `italic`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_style: Option<String>,
    /// Alignment within the box.
    #[serde(default)]
    pub text_align: TextAlign,
    /// CSS color string.
    pub color: String,
    /// Wrap width; the box width when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_width: Option<Dimension>,
}

/// An owned element of any kind.
#[derive(Clone, Debug, PartialEq)]
pub enum Element {
    /// An image.
    Image(ImageElement),
    /// A video.
    Video(VideoElement),
    /// An audio track.
    Audio(AudioElement),
    /// A text box.
    Text(TextElement),
}

impl Element {
    /// Kind of the wrapped element.
    pub fn kind(&self) -> ElementKind {
        self.borrowed().kind()
    }

    /// Shared geometry and paint.
    pub fn layer(&self) -> &Layer {
        match self {
            Self::Image(e) => &e.layer,
            Self::Video(e) => &e.layer,
            Self::Audio(e) => &e.layer,
            Self::Text(e) => &e.layer,
        }
    }

    /// Mutable access to the shared layer.
    pub fn layer_mut(&mut self) -> &mut Layer {
        match self {
            Self::Image(e) => &mut e.layer,
            Self::Video(e) => &mut e.layer,
            Self::Audio(e) => &mut e.layer,
            Self::Text(e) => &mut e.layer,
        }
    }

    /// Element identity.
    pub fn id(&self) -> &ElementId {
        &self.layer().id
    }

    /// Borrow as an [`ElementRef`].
    pub fn borrowed(&self) -> ElementRef<'_> {
        match self {
            Self::Image(e) => ElementRef::Image(e),
            Self::Video(e) => ElementRef::Video(e),
            Self::Audio(e) => ElementRef::Audio(e),
            Self::Text(e) => ElementRef::Text(e),
        }
    }
}

/// A borrowed element of any kind, as yielded by [`crate::Slide::elements`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ElementRef<'a> {
    /// An image.
    Image(&'a ImageElement),
    /// A video.
    Video(&'a VideoElement),
    /// An audio track.
    Audio(&'a AudioElement),
    /// A text box.
    Text(&'a TextElement),
}

impl<'a> ElementRef<'a> {
    /// Kind of the borrowed element.
    pub fn kind(self) -> ElementKind {
        match self {
            Self::Image(_) => ElementKind::Image,
            Self::Video(_) => ElementKind::Video,
            Self::Audio(_) => ElementKind::Audio,
            Self::Text(_) => ElementKind::Text,
        }
    }

    /// Shared geometry and paint.
    pub fn layer(self) -> &'a Layer {
        match self {
            Self::Image(e) => &e.layer,
            Self::Video(e) => &e.layer,
            Self::Audio(e) => &e.layer,
            Self::Text(e) => &e.layer,
        }
    }

    /// Element identity.
    pub fn id(self) -> &'a ElementId {
        &self.layer().id
    }

    /// Owned copy.
    pub fn cloned(self) -> Element {
        match self {
            Self::Image(e) => Element::Image(e.clone()),
            Self::Video(e) => Element::Video(e.clone()),
            Self::Audio(e) => Element::Audio(e.clone()),
            Self::Text(e) => Element::Text(e.clone()),
        }
    }
}

impl TryFrom<Element> for ImageElement {
    type Error = Element;
    fn try_from(e: Element) -> Result<Self, Element> {
        match e {
            Element::Image(e) => Ok(e),
            other => Err(other),
        }
    }
}

impl TryFrom<Element> for VideoElement {
    type Error = Element;
    fn try_from(e: Element) -> Result<Self, Element> {
        match e {
            Element::Video(e) => Ok(e),
            other => Err(other),
        }
    }
}

impl TryFrom<Element> for AudioElement {
    type Error = Element;
    fn try_from(e: Element) -> Result<Self, Element> {
        match e {
            Element::Audio(e) => Ok(e),
            other => Err(other),
        }
    }
}

impl TryFrom<Element> for TextElement {
    type Error = Element;
    fn try_from(e: Element) -> Result<Self, Element> {
        match e {
            Element::Text(e) => Ok(e),
            other => Err(other),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/template/element.rs"]
mod tests;
