use crate::position::dimension::Dimension;
use crate::position::resolver::Position;
use crate::serialize::emit::{MapBuilder, Node, render};
use crate::serialize::scalar;
use crate::template::element::{
    AudioElement, ImageElement, Layer, TextElement, VideoElement, clamp_unit, default_opacity,
};
use crate::template::model::Template;
use crate::template::normalize::round_degrees;
use crate::template::slide::{Background, Slide, SongContentStyle};

/// Text-format layout options.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SerializeOpts {
    /// Spaces per nesting level, also used as the extra indent of block text. Clamped to `1..=8`.
    pub indent: usize,
}

impl Default for SerializeOpts {
    fn default() -> Self {
        Self { indent: 2 }
    }
}

/// Write a template in the text configuration format with default options.
pub fn serialize_template(template: &Template) -> String {
    serialize_template_with(template, &SerializeOpts::default())
}

/// Write a template in the text configuration format.
///
/// Output is deterministic: the same template always yields byte-identical text, and
/// re-reading it yields [`Template::normalized`].
#[tracing::instrument(skip(template, opts), fields(slides = template.slides.len()))]
pub fn serialize_template_with(template: &Template, opts: &SerializeOpts) -> String {
    let count = template.slides.len();
    let reference = template.reference_slide_index.min(count.saturating_sub(1));
    let slides = template
        .slides
        .iter()
        .enumerate()
        .map(|(index, slide)| slide_node(slide, index, count, index == reference))
        .collect();

    let root = MapBuilder::new()
        .put("name", Node::str(&template.name))
        .put_opt("description", template.description.as_deref(), Node::str)
        .put("aspectRatio", Node::str(template.aspect_ratio.as_str()))
        .put("referenceSlideIndex", Node::Raw(reference.to_string()))
        .put("slides", Node::List(slides))
        .build();
    render(&root, opts.indent)
}

fn slide_node(slide: &Slide, index: usize, count: usize, is_reference: bool) -> Node {
    let mut m = MapBuilder::new()
        .put_opt("background", slide.background.as_ref(), background_node)
        .put("images", Node::List(slide.images.iter().map(image_node).collect()))
        .put("videos", Node::List(slide.videos.iter().map(video_node).collect()))
        .put(
            "audios",
            Node::List(
                slide
                    .audios
                    .iter()
                    .map(|a| audio_node(a, index, count))
                    .collect(),
            ),
        )
        .put("text", Node::List(slide.text.iter().map(text_node).collect()));
    if is_reference {
        for (slot, style) in slide.song_styles.iter() {
            m = m.put(slot.key(), song_style_node(style));
        }
    }
    m.build()
}

fn background_node(bg: &Background) -> Node {
    MapBuilder::new()
        .put("type", Node::str(bg.kind.as_str()))
        .put("value", Node::str(&bg.value))
        .build()
}

fn dim(d: Dimension) -> Node {
    Node::Raw(scalar::dimension(d))
}

/// `id`, then the kind's leading field, then shared geometry.
fn layer_entries(layer: &Layer, lead: (&'static str, Node)) -> MapBuilder {
    let m = MapBuilder::new()
        .put("id", Node::str(layer.id.as_str()))
        .put(lead.0, lead.1);
    let m = match layer.position {
        Position::Explicit { x, y } => m.put("x", dim(x)).put("y", dim(y)),
        Position::Preset(p) => m.put("preset", Node::str(p.as_str())),
    };
    m.put("width", dim(layer.width))
        .put("height", dim(layer.height))
        .put(
            "opacity",
            Node::number(clamp_unit(layer.opacity, default_opacity())),
        )
        .put("zIndex", Node::int(layer.z_index))
        .put("rotation", Node::number(round_degrees(layer.rotation)))
}

fn image_node(e: &ImageElement) -> Node {
    layer_entries(&e.layer, ("url", Node::str(&e.url))).build()
}

fn video_node(e: &VideoElement) -> Node {
    layer_entries(&e.layer, ("url", Node::str(&e.url)))
        .put("autoPlay", Node::bool(e.auto_play))
        .put("loop", Node::bool(e.looping))
        .put("muted", Node::bool(e.muted))
        .put_opt("hideVideo", e.hide_video, Node::bool)
        .put_opt("hideAudio", e.hide_audio, Node::bool)
        .build()
}

/// Playback fields are always written, with the range synthesized from the owning slide.
fn audio_node(e: &AudioElement, slide_index: usize, slide_count: usize) -> Node {
    let (start, end) = e.effective_range(slide_index, slide_count);
    layer_entries(&e.layer, ("url", Node::str(&e.url)))
        .put("autoPlay", Node::bool(e.auto_play))
        .put("loop", Node::bool(e.looping))
        .put("volume", Node::number(clamp_unit(e.volume, 1.0)))
        .put("visualHidden", Node::bool(e.visual_hidden))
        .put("startSlide", Node::int(start))
        .put("endSlide", Node::int(end))
        .put_opt("playAcrossAllSlides", e.play_across_all_slides, Node::bool)
        .build()
}

fn text_node(e: &TextElement) -> Node {
    layer_entries(&e.layer, ("content", Node::str(&e.content)))
        .put("fontSize", dim(e.font_size))
        .put_opt("fontFamily", e.font_family.as_deref(), Node::str)
        .put("fontWeight", Node::str(&e.font_weight))
        .put_opt("fontStyle", e.font_style.as_deref(), Node::str)
        .put("textAlign", Node::str(e.text_align.as_str()))
        .put("color", Node::str(&e.color))
        .put_opt("maxWidth", e.max_width, dim)
        .build()
}

fn song_style_node(s: &SongContentStyle) -> Node {
    MapBuilder::new()
        .put("x", dim(s.x))
        .put("y", dim(s.y))
        .put("width", dim(s.width))
        .put_opt("height", s.height, dim)
        .put("fontSize", dim(s.font_size))
        .put("fontWeight", Node::str(&s.font_weight))
        .put_opt("fontStyle", s.font_style.as_deref(), Node::str)
        .put_opt("fontFamily", s.font_family.as_deref(), Node::str)
        .put("textAlign", Node::str(s.text_align.as_str()))
        .put("color", Node::str(&s.color))
        .put_opt(
            "yPosition",
            s.y_position.filter(|v| v.is_finite()),
            Node::number,
        )
        .build()
}

#[cfg(test)]
#[path = "../../tests/unit/serialize/template.rs"]
mod tests;
