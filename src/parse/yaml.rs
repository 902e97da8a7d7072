use std::fmt;

use serde_yaml::{Mapping, Value};

use crate::foundation::core::{AspectRatio, Axis, SlideSize};
use crate::foundation::error::{SongslideError, SongslideResult};
use crate::parse::canonical::{PartialTemplate, RawTemplate, to_canonical_template};
use crate::parse::response::TemplateParser;
use crate::position::dimension::Dimension;
use crate::position::preset::PositionPreset;
use crate::position::resolver::{Position, resolve_size};
use crate::template::defaults::default_element;
use crate::template::element::{
    AudioElement, Element, ElementId, ElementKind, ImageElement, Layer, TextAlign, TextElement,
    VideoElement, clamp_unit,
};
use crate::template::slide::{
    Background, BackgroundKind, Slide, SongContentStyle, SongStyleSlot, SongStyles,
};

/// Reference parser for the text configuration format, backed by `serde_yaml`.
///
/// Accepts everything the serializer writes, plus common hand-authored shortcuts: bare numbers
/// for dimensions, numbers where strings are expected, elements without ids, a single axis next
/// to a preset, the legacy `yPosition` on song styles, and the legacy single-slide layout.
#[derive(Clone, Copy, Debug, Default)]
pub struct YamlTemplateParser;

impl TemplateParser for YamlTemplateParser {
    #[tracing::instrument(skip(self, text), fields(len = text.len()))]
    fn validate(&self, text: &str) -> SongslideResult<PartialTemplate> {
        let root: Value = serde_yaml::from_str(text)
            .map_err(|e| SongslideError::parse(format!("invalid YAML: {e}")))?;
        let raw = Walker::new().template(&root)?;
        to_canonical_template(raw)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PathElem {
    Field(&'static str),
    Index(usize),
}

struct PathDisplay<'a>(&'a [PathElem]);

impl fmt::Display for PathDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("$")?;
        for p in self.0 {
            match *p {
                PathElem::Field(name) => write!(f, ".{name}")?,
                PathElem::Index(i) => write!(f, "[{i}]")?,
            }
        }
        Ok(())
    }
}

const LEGACY_SLIDE_KEYS: [&str; 5] = ["background", "images", "videos", "audios", "text"];

struct Walker {
    path: Vec<PathElem>,
    /// Slide extent of the template being read; presets and defaults resolve against it.
    slide: SlideSize,
}

impl Walker {
    fn new() -> Self {
        Self {
            path: Vec::new(),
            slide: AspectRatio::default().slide_size(),
        }
    }

    fn err(&self, msg: impl fmt::Display) -> SongslideError {
        SongslideError::parse(format!("{}: {msg}", PathDisplay(&self.path)))
    }

    fn at<T>(
        &mut self,
        elem: PathElem,
        f: impl FnOnce(&mut Self) -> SongslideResult<T>,
    ) -> SongslideResult<T> {
        self.path.push(elem);
        let out = f(self);
        self.path.pop();
        out
    }

    /// Optional field: `null` counts as absent.
    fn field<T>(
        &mut self,
        m: &Mapping,
        key: &'static str,
        f: impl FnOnce(&mut Self, &Value) -> SongslideResult<T>,
    ) -> SongslideResult<Option<T>> {
        match m.get(key) {
            None | Some(Value::Null) => Ok(None),
            Some(v) => self.at(PathElem::Field(key), |w| f(w, v)).map(Some),
        }
    }

    fn required<T>(
        &mut self,
        m: &Mapping,
        key: &'static str,
        f: impl FnOnce(&mut Self, &Value) -> SongslideResult<T>,
    ) -> SongslideResult<T> {
        self.field(m, key, f)?
            .ok_or_else(|| self.err(format!("missing field `{key}`")))
    }

    fn mapping<'v>(&self, v: &'v Value) -> SongslideResult<&'v Mapping> {
        match v {
            Value::Mapping(m) => Ok(m),
            other => Err(self.err(format!("expected a mapping, found {}", kind_of(other)))),
        }
    }

    fn list<T>(
        &mut self,
        v: &Value,
        mut f: impl FnMut(&mut Self, &Value) -> SongslideResult<T>,
    ) -> SongslideResult<Vec<T>> {
        let Value::Sequence(items) = v else {
            return Err(self.err(format!("expected a list, found {}", kind_of(v))));
        };
        items
            .iter()
            .enumerate()
            .map(|(i, item)| self.at(PathElem::Index(i), |w| f(w, item)))
            .collect()
    }

    fn string(&mut self, v: &Value) -> SongslideResult<String> {
        match v {
            Value::String(s) => Ok(s.clone()),
            Value::Number(n) => Ok(n.to_string()),
            Value::Bool(b) => Ok(b.to_string()),
            other => Err(self.err(format!("expected a string, found {}", kind_of(other)))),
        }
    }

    fn number(&mut self, v: &Value) -> SongslideResult<f64> {
        let n = match v {
            Value::Number(n) => n.as_f64(),
            Value::String(s) => s.trim().parse::<f64>().ok(),
            _ => None,
        };
        n.filter(|n| n.is_finite())
            .ok_or_else(|| self.err(format!("expected a number, found {}", kind_of(v))))
    }

    fn integer(&mut self, v: &Value) -> SongslideResult<i64> {
        let n = self.number(v)?;
        if n.fract() != 0.0 || n.abs() > i64::MAX as f64 {
            return Err(self.err(format!("expected a whole number, found {n}")));
        }
        Ok(n as i64)
    }

    fn boolean(&mut self, v: &Value) -> SongslideResult<bool> {
        match v {
            Value::Bool(b) => Ok(*b),
            Value::String(s) if s.trim() == "true" => Ok(true),
            Value::String(s) if s.trim() == "false" => Ok(false),
            other => Err(self.err(format!(
                "expected true or false, found {}",
                kind_of(other)
            ))),
        }
    }

    fn dimension(&mut self, v: &Value) -> SongslideResult<Dimension> {
        match v {
            Value::Number(_) => self.number(v).map(Dimension::px),
            Value::String(s) => Dimension::parse(s).ok_or_else(|| {
                self.err(format!(
                    "invalid dimension \"{s}\" (expected e.g. \"120px\" or \"50%\")"
                ))
            }),
            other => Err(self.err(format!("expected a dimension, found {}", kind_of(other)))),
        }
    }

    fn parsed<T>(
        &mut self,
        v: &Value,
        parse: impl FnOnce(&str) -> Result<T, String>,
    ) -> SongslideResult<T> {
        let s = self.string(v)?;
        parse(&s).map_err(|e| self.err(e))
    }

    fn template(&mut self, root: &Value) -> SongslideResult<RawTemplate> {
        // An empty document reads as an empty mapping.
        let empty = Mapping::new();
        let root = match root {
            Value::Null => &empty,
            other => self.mapping(other)?,
        };

        let aspect_ratio: Option<AspectRatio> =
            self.field(root, "aspectRatio", |w, v| w.parsed(v, str::parse))?;
        self.slide = aspect_ratio.unwrap_or_default().slide_size();

        let slides = self.field(root, "slides", |w, v| w.list(v, Self::slide))?;
        let legacy_slide = if slides.is_none()
            && LEGACY_SLIDE_KEYS.iter().any(|k| root.contains_key(*k))
        {
            Some(self.slide_fields(root)?)
        } else {
            None
        };

        Ok(RawTemplate {
            name: self.field(root, "name", Self::string)?,
            description: self.field(root, "description", Self::string)?,
            aspect_ratio,
            reference_slide_index: self.field(root, "referenceSlideIndex", Self::integer)?,
            slides,
            legacy_slide,
        })
    }

    fn slide(&mut self, v: &Value) -> SongslideResult<Slide> {
        let m = self.mapping(v)?;
        self.slide_fields(m)
    }

    fn slide_fields(&mut self, m: &Mapping) -> SongslideResult<Slide> {
        let mut song_styles = SongStyles::default();
        for slot in SongStyleSlot::ALL {
            *song_styles.slot_mut(slot) =
                self.field(m, slot.key(), |w, v| w.song_style(v, slot))?;
        }
        Ok(Slide {
            background: self.field(m, "background", Self::background)?,
            images: self.elements(m, "images", ElementKind::Image)?,
            videos: self.elements(m, "videos", ElementKind::Video)?,
            audios: self.elements(m, "audios", ElementKind::Audio)?,
            text: self.elements(m, "text", ElementKind::Text)?,
            song_styles,
        })
    }

    fn background(&mut self, v: &Value) -> SongslideResult<Background> {
        let m = self.mapping(v)?;
        let kind = self
            .field(m, "type", |w, v| {
                w.parsed(v, |s| {
                    BackgroundKind::parse(s).ok_or_else(|| {
                        format!("unknown background type \"{s}\" (expected color, image or video)")
                    })
                })
            })?
            .unwrap_or_default();
        Ok(Background {
            kind,
            value: self.field(m, "value", Self::string)?.unwrap_or_default(),
        })
    }

    /// Elements of one kind; `E` is unwrapped from the typed [`Element`] the walker builds.
    fn elements<E>(
        &mut self,
        m: &Mapping,
        key: &'static str,
        kind: ElementKind,
    ) -> SongslideResult<Vec<E>>
    where
        E: TryFrom<Element>,
    {
        let elements = self
            .field(m, key, |w, v| w.list(v, |w, item| w.element(item, kind)))?
            .unwrap_or_default();
        Ok(elements
            .into_iter()
            .filter_map(|e| E::try_from(e).ok())
            .collect())
    }

    fn element(&mut self, v: &Value, kind: ElementKind) -> SongslideResult<Element> {
        let m = self.mapping(v)?;
        let mut element = default_element(kind, self.slide);
        self.layer(m, element.layer_mut())?;

        match &mut element {
            Element::Image(e) => self.image(m, e)?,
            Element::Video(e) => self.video(m, e)?,
            Element::Audio(e) => self.audio(m, e)?,
            Element::Text(e) => self.text(m, e)?,
        }
        Ok(element)
    }

    fn layer(&mut self, m: &Mapping, layer: &mut Layer) -> SongslideResult<()> {
        let id = self.field(m, "id", Self::string)?;
        if let Some(id) = id.filter(|s| !s.trim().is_empty()) {
            layer.id = ElementId::new(id);
        }
        if let Some(w) = self.field(m, "width", Self::dimension)? {
            layer.width = w;
        }
        if let Some(h) = self.field(m, "height", Self::dimension)? {
            layer.height = h;
        }

        let x = self.field(m, "x", Self::dimension)?;
        let y = self.field(m, "y", Self::dimension)?;
        let preset =
            self.field(m, "preset", |w, v| w.parsed(v, str::parse::<PositionPreset>))?;
        layer.position = match (x, y, preset) {
            (None, None, Some(p)) => Position::Preset(p),
            (None, None, None) => Position::default(),
            (x, y, preset) => {
                // A lone axis next to a preset takes the preset's value on the other axis.
                let size = resolve_size(layer.width, layer.height, self.slide);
                let slide = self.slide;
                let fill = |axis: Axis| match preset {
                    Some(p) => Dimension::px(Position::Preset(p).resolve_axis(axis, slide, size)),
                    None => Dimension::ZERO,
                };
                Position::explicit(
                    x.unwrap_or_else(|| fill(Axis::X)),
                    y.unwrap_or_else(|| fill(Axis::Y)),
                )
            }
        };

        if let Some(o) = self.field(m, "opacity", Self::number)? {
            layer.opacity = clamp_unit(o, 1.0);
        }
        if let Some(z) = self.field(m, "zIndex", Self::integer)? {
            layer.z_index = z.clamp(i32::MIN.into(), i32::MAX.into()) as i32;
        }
        if let Some(r) = self.field(m, "rotation", Self::number)? {
            layer.rotation = r;
        }
        Ok(())
    }

    fn image(&mut self, m: &Mapping, e: &mut ImageElement) -> SongslideResult<()> {
        e.url = self.required(m, "url", Self::string)?;
        Ok(())
    }

    fn video(&mut self, m: &Mapping, e: &mut VideoElement) -> SongslideResult<()> {
        e.url = self.required(m, "url", Self::string)?;
        if let Some(b) = self.field(m, "autoPlay", Self::boolean)? {
            e.auto_play = b;
        }
        if let Some(b) = self.field(m, "loop", Self::boolean)? {
            e.looping = b;
        }
        if let Some(b) = self.field(m, "muted", Self::boolean)? {
            e.muted = b;
        }
        e.hide_video = self.field(m, "hideVideo", Self::boolean)?;
        e.hide_audio = self.field(m, "hideAudio", Self::boolean)?;
        Ok(())
    }

    fn audio(&mut self, m: &Mapping, e: &mut AudioElement) -> SongslideResult<()> {
        e.url = self.required(m, "url", Self::string)?;
        if let Some(b) = self.field(m, "autoPlay", Self::boolean)? {
            e.auto_play = b;
        }
        if let Some(b) = self.field(m, "loop", Self::boolean)? {
            e.looping = b;
        }
        if let Some(v) = self.field(m, "volume", Self::number)? {
            e.volume = clamp_unit(v, 1.0);
        }
        if let Some(b) = self.field(m, "visualHidden", Self::boolean)? {
            e.visual_hidden = b;
        }
        e.start_slide = self.field(m, "startSlide", Self::slide_number)?;
        e.end_slide = self.field(m, "endSlide", Self::slide_number)?;
        e.play_across_all_slides = self.field(m, "playAcrossAllSlides", Self::boolean)?;
        Ok(())
    }

    fn slide_number(&mut self, v: &Value) -> SongslideResult<u32> {
        let n = self.integer(v)?;
        u32::try_from(n)
            .ok()
            .filter(|&n| n >= 1)
            .ok_or_else(|| self.err(format!("slide numbers start at 1, found {n}")))
    }

    fn text_align(&mut self, v: &Value) -> SongslideResult<TextAlign> {
        self.parsed(v, |s| {
            TextAlign::parse(s).ok_or_else(|| {
                format!("unknown text alignment \"{s}\" (expected left, center or right)")
            })
        })
    }

    fn text(&mut self, m: &Mapping, e: &mut TextElement) -> SongslideResult<()> {
        e.content = self.field(m, "content", Self::string)?.unwrap_or_default();
        if let Some(d) = self.field(m, "fontSize", Self::dimension)? {
            e.font_size = d;
        }
        e.font_family = self.field(m, "fontFamily", Self::string)?;
        if let Some(s) = self.field(m, "fontWeight", Self::string)? {
            e.font_weight = s;
        }
        e.font_style = self.field(m, "fontStyle", Self::string)?;
        if let Some(a) = self.field(m, "textAlign", Self::text_align)? {
            e.text_align = a;
        }
        if let Some(c) = self.field(m, "color", Self::string)? {
            e.color = c;
        }
        e.max_width = self.field(m, "maxWidth", Self::dimension)?;
        Ok(())
    }

    fn song_style(
        &mut self,
        v: &Value,
        slot: SongStyleSlot,
    ) -> SongslideResult<SongContentStyle> {
        let m = self.mapping(v)?;
        let mut style = SongContentStyle::default_for(slot, self.slide);
        if let Some(x) = self.field(m, "x", Self::dimension)? {
            style.x = x;
        }
        style.y_position = self.field(m, "yPosition", Self::number)?;
        match self.field(m, "y", Self::dimension)? {
            Some(y) => style.y = y,
            None => {
                if let Some(p) = style.y_position {
                    style.y = Dimension::percent(p);
                }
            }
        }
        if let Some(w) = self.field(m, "width", Self::dimension)? {
            style.width = w;
        }
        style.height = self.field(m, "height", Self::dimension)?;
        if let Some(d) = self.field(m, "fontSize", Self::dimension)? {
            style.font_size = d;
        }
        if let Some(s) = self.field(m, "fontWeight", Self::string)? {
            style.font_weight = s;
        }
        style.font_style = self.field(m, "fontStyle", Self::string)?;
        style.font_family = self.field(m, "fontFamily", Self::string)?;
        if let Some(a) = self.field(m, "textAlign", Self::text_align)? {
            style.text_align = a;
        }
        if let Some(c) = self.field(m, "color", Self::string)? {
            style.color = c;
        }
        Ok(style)
    }
}

fn kind_of(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Sequence(_) => "a list",
        Value::Mapping(_) => "a mapping",
        Value::Tagged(_) => "a tagged value",
    }
}

#[cfg(test)]
#[path = "../../tests/unit/parse/yaml.rs"]
mod tests;
