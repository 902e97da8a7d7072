use crate::foundation::core::SlideSize;
use crate::foundation::error::{SongslideError, SongslideResult};
use crate::position::dimension::Dimension;
use crate::position::preset::PositionPreset;
use crate::position::resolver::Position;
use crate::template::element::{ElementKind, Layer, TextAlign, clamp_unit};
use crate::template::slide::{Background, BackgroundKind, ElementMut, SongContentStyle};

/// Partial element attributes.
///
/// Unset fields leave the element untouched. Setting `x` or `y` switches the element to explicit
/// coordinates and drops any preset; setting only `preset` switches to the preset. When both are
/// given the explicit coordinates win.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ElementPatch {
    /// Explicit left edge.
    pub x: Option<Dimension>,
    /// Explicit top edge.
    pub y: Option<Dimension>,
    /// Named anchor.
    pub preset: Option<PositionPreset>,
    /// Box width.
    pub width: Option<Dimension>,
    /// Box height.
    pub height: Option<Dimension>,
    /// Opacity, clamped to `[0, 1]`.
    pub opacity: Option<f64>,
    /// Paint order.
    pub z_index: Option<i32>,
    /// Rotation in degrees.
    pub rotation: Option<f64>,

    /// Image, video and audio.
    pub url: Option<String>,
    /// Video and audio.
    pub auto_play: Option<bool>,
    /// Video and audio.
    pub looping: Option<bool>,

    /// Video only.
    pub muted: Option<bool>,
    /// Video only.
    pub hide_video: Option<bool>,
    /// Video only.
    pub hide_audio: Option<bool>,

    /// Audio only. Clamped to `[0, 1]`.
    pub volume: Option<f64>,
    /// Audio only.
    pub visual_hidden: Option<bool>,
    /// Audio only.
    pub start_slide: Option<u32>,
    /// Audio only.
    pub end_slide: Option<u32>,
    /// Audio only.
    pub play_across_all_slides: Option<bool>,

    /// Text only.
    pub content: Option<String>,
    /// Text only.
    pub font_size: Option<Dimension>,
    /// Text only.
    pub font_family: Option<String>,
    /// Text only.
    pub font_weight: Option<String>,
    /// Text only.
    pub font_style: Option<String>,
    /// Text only.
    pub text_align: Option<TextAlign>,
    /// Text only.
    pub color: Option<String>,
    /// Text only.
    pub max_width: Option<Dimension>,
}

impl ElementPatch {
    /// Move to explicit coordinates.
    pub fn at(x: Dimension, y: Dimension) -> Self {
        Self {
            x: Some(x),
            y: Some(y),
            ..Self::default()
        }
    }

    /// Snap to a named preset.
    pub fn preset(preset: PositionPreset) -> Self {
        Self {
            preset: Some(preset),
            ..Self::default()
        }
    }

    /// Resize.
    pub fn sized(width: Dimension, height: Dimension) -> Self {
        Self {
            width: Some(width),
            height: Some(height),
            ..Self::default()
        }
    }

    /// Replace the text content.
    pub fn content(content: impl Into<String>) -> Self {
        Self {
            content: Some(content.into()),
            ..Self::default()
        }
    }

    /// Point at different media.
    pub fn url(url: impl Into<String>) -> Self {
        Self {
            url: Some(url.into()),
            ..Self::default()
        }
    }

    /// Whether the patch sets anything at all.
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }

    /// Names of set fields that an element of `kind` does not carry.
    fn foreign_fields(&self, kind: ElementKind) -> Vec<&'static str> {
        let media = matches!(
            kind,
            ElementKind::Image | ElementKind::Video | ElementKind::Audio
        );
        let playable = matches!(kind, ElementKind::Video | ElementKind::Audio);
        let video = kind == ElementKind::Video;
        let audio = kind == ElementKind::Audio;
        let text = kind == ElementKind::Text;

        let checks: [(&'static str, bool, bool); 19] = [
            ("url", self.url.is_some(), media),
            ("autoPlay", self.auto_play.is_some(), playable),
            ("loop", self.looping.is_some(), playable),
            ("muted", self.muted.is_some(), video),
            ("hideVideo", self.hide_video.is_some(), video),
            ("hideAudio", self.hide_audio.is_some(), video),
            ("volume", self.volume.is_some(), audio),
            ("visualHidden", self.visual_hidden.is_some(), audio),
            ("startSlide", self.start_slide.is_some(), audio),
            ("endSlide", self.end_slide.is_some(), audio),
            (
                "playAcrossAllSlides",
                self.play_across_all_slides.is_some(),
                audio,
            ),
            ("content", self.content.is_some(), text),
            ("fontSize", self.font_size.is_some(), text),
            ("fontFamily", self.font_family.is_some(), text),
            ("fontWeight", self.font_weight.is_some(), text),
            ("fontStyle", self.font_style.is_some(), text),
            ("textAlign", self.text_align.is_some(), text),
            ("color", self.color.is_some(), text),
            ("maxWidth", self.max_width.is_some(), text),
        ];
        checks
            .into_iter()
            .filter(|(_, set, allowed)| *set && !*allowed)
            .map(|(name, _, _)| name)
            .collect()
    }

    /// Fail when the patch sets fields the element kind does not have.
    pub(crate) fn check_kind(&self, kind: ElementKind) -> SongslideResult<()> {
        let foreign = self.foreign_fields(kind);
        if foreign.is_empty() {
            return Ok(());
        }
        Err(SongslideError::validation(format!(
            "{kind} elements have no {}",
            foreign.join(", ")
        )))
    }

    /// Apply the shared geometry and paint fields.
    pub(crate) fn apply_layer(&self, layer: &mut Layer, slide: SlideSize) {
        if self.x.is_some() || self.y.is_some() {
            let (cur_x, cur_y) = match layer.position {
                Position::Explicit { x, y } => (x, y),
                Position::Preset(_) => {
                    // Freeze the preset's resolved corner for the axis the patch leaves alone.
                    let origin = layer.bounds(slide).origin();
                    (Dimension::px(origin.x), Dimension::px(origin.y))
                }
            };
            layer.position = Position::explicit(self.x.unwrap_or(cur_x), self.y.unwrap_or(cur_y));
        } else if let Some(preset) = self.preset {
            layer.position = Position::Preset(preset);
        }

        if let Some(w) = self.width {
            layer.width = w;
        }
        if let Some(h) = self.height {
            layer.height = h;
        }
        if let Some(o) = self.opacity {
            layer.opacity = clamp_unit(o, layer.opacity);
        }
        if let Some(z) = self.z_index {
            layer.z_index = z;
        }
        if let Some(r) = self.rotation.filter(|r| r.is_finite()) {
            layer.rotation = r;
        }
    }

    /// Apply every field to an element. Callers check the kind first.
    pub(crate) fn apply(&self, element: ElementMut<'_>, slide: SlideSize) {
        match element {
            ElementMut::Image(e) => {
                self.apply_layer(&mut e.layer, slide);
                set(&mut e.url, &self.url);
            }
            ElementMut::Video(e) => {
                self.apply_layer(&mut e.layer, slide);
                set(&mut e.url, &self.url);
                set(&mut e.auto_play, &self.auto_play);
                set(&mut e.looping, &self.looping);
                set(&mut e.muted, &self.muted);
                set_opt(&mut e.hide_video, &self.hide_video);
                set_opt(&mut e.hide_audio, &self.hide_audio);
            }
            ElementMut::Audio(e) => {
                self.apply_layer(&mut e.layer, slide);
                set(&mut e.url, &self.url);
                set(&mut e.auto_play, &self.auto_play);
                set(&mut e.looping, &self.looping);
                if let Some(v) = self.volume {
                    e.volume = clamp_unit(v, e.volume);
                }
                set(&mut e.visual_hidden, &self.visual_hidden);
                set_opt(&mut e.start_slide, &self.start_slide.map(|s| s.max(1)));
                set_opt(&mut e.end_slide, &self.end_slide.map(|s| s.max(1)));
                set_opt(&mut e.play_across_all_slides, &self.play_across_all_slides);
            }
            ElementMut::Text(e) => {
                self.apply_layer(&mut e.layer, slide);
                set(&mut e.content, &self.content);
                set(&mut e.font_size, &self.font_size);
                set_opt(&mut e.font_family, &self.font_family);
                set(&mut e.font_weight, &self.font_weight);
                set_opt(&mut e.font_style, &self.font_style);
                set(&mut e.text_align, &self.text_align);
                set(&mut e.color, &self.color);
                set_opt(&mut e.max_width, &self.max_width);
            }
        }
    }
}

fn set<T: Clone>(dst: &mut T, src: &Option<T>) {
    if let Some(v) = src {
        *dst = v.clone();
    }
}

fn set_opt<T: Clone>(dst: &mut Option<T>, src: &Option<T>) {
    if src.is_some() {
        dst.clone_from(src);
    }
}

/// Partial background update. `clear` removes the background and wins over the other fields.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct BackgroundPatch {
    /// New fill kind.
    pub kind: Option<BackgroundKind>,
    /// New color or media URL.
    pub value: Option<String>,
    /// Remove the background.
    pub clear: bool,
}

impl BackgroundPatch {
    /// Solid color fill.
    pub fn color(value: impl Into<String>) -> Self {
        Self {
            kind: Some(BackgroundKind::Color),
            value: Some(value.into()),
            clear: false,
        }
    }

    /// Image or video fill.
    pub fn media(kind: BackgroundKind, url: impl Into<String>) -> Self {
        Self {
            kind: Some(kind),
            value: Some(url.into()),
            clear: false,
        }
    }

    /// Remove the background.
    pub fn clear() -> Self {
        Self {
            clear: true,
            ..Self::default()
        }
    }

    pub(crate) fn apply(&self, current: Option<Background>) -> Option<Background> {
        if self.clear {
            return None;
        }
        if self.kind.is_none() && self.value.is_none() {
            return current;
        }
        let mut bg = current.unwrap_or_default();
        if let Some(kind) = self.kind {
            bg.kind = kind;
        }
        set(&mut bg.value, &self.value);
        Some(bg)
    }
}

/// Partial song content style update.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SongStylePatch {
    /// Left edge.
    pub x: Option<Dimension>,
    /// Top edge.
    pub y: Option<Dimension>,
    /// Box width.
    pub width: Option<Dimension>,
    /// Box height.
    pub height: Option<Dimension>,
    /// Font size.
    pub font_size: Option<Dimension>,
    /// CSS-style weight.
    pub font_weight: Option<String>,
    /// CSS-style font style.
    pub font_style: Option<String>,
    /// Font family.
    pub font_family: Option<String>,
    /// Alignment.
    pub text_align: Option<TextAlign>,
    /// CSS color string.
    pub color: Option<String>,
}

impl SongStylePatch {
    /// Move to explicit coordinates.
    pub fn at(x: Dimension, y: Dimension) -> Self {
        Self {
            x: Some(x),
            y: Some(y),
            ..Self::default()
        }
    }

    pub(crate) fn apply(&self, style: &mut SongContentStyle) {
        set(&mut style.x, &self.x);
        if let Some(y) = self.y {
            style.y = y;
            // `y` supersedes the legacy percentage alias.
            style.y_position = None;
        }
        set(&mut style.width, &self.width);
        set_opt(&mut style.height, &self.height);
        set(&mut style.font_size, &self.font_size);
        set(&mut style.font_weight, &self.font_weight);
        set_opt(&mut style.font_style, &self.font_style);
        set_opt(&mut style.font_family, &self.font_family);
        set(&mut style.text_align, &self.text_align);
        set(&mut style.color, &self.color);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/template/patch.rs"]
mod tests;
