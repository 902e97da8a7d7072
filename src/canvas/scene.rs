use crate::canvas::bridge::CanvasBridge;
use crate::foundation::core::{Point, Rect, Size, SlideSize};
use crate::foundation::error::{SongslideError, SongslideResult};
use crate::position::dimension::Dimension;
use crate::position::resolver::resolve_size;
use crate::template::element::{ElementId, ElementRef, TextAlign, clamp_unit};
use crate::template::model::Template;
use crate::template::slide::{Background, BackgroundKind, SongContentStyle, SongStyleSlot};

/// Placeholder height, in lines, of a song style without an explicit height.
const PLACEHOLDER_LINES: f64 = 1.2;

/// What a display node stands for in the model.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum NodeTarget {
    /// The slide background.
    Background,
    /// A slide element.
    Element(ElementId),
    /// A song content placeholder.
    SongStyle(SongStyleSlot),
}

/// Paint-level description of a node. Lengths are display pixels.
#[derive(Clone, Debug, PartialEq)]
pub enum NodeContent {
    /// Solid background color.
    Fill {
        /// CSS color string.
        color: String,
    },
    /// Image, background or layer.
    Image {
        /// Media URL.
        url: String,
    },
    /// Video, background or layer.
    Video {
        /// Media URL.
        url: String,
        /// Start when shown.
        auto_play: bool,
        /// Restart at the end.
        looping: bool,
        /// Play without sound.
        muted: bool,
    },
    /// Speaker icon standing in for an audio layer.
    AudioIcon {
        /// Media URL.
        url: String,
    },
    /// Text box.
    Text {
        /// Text to draw.
        content: String,
        /// Font size in display pixels.
        font_size: f64,
        /// Font family.
        font_family: Option<String>,
        /// CSS-style weight.
        font_weight: String,
        /// CSS-style font style.
        font_style: Option<String>,
        /// Alignment.
        text_align: TextAlign,
        /// CSS color string.
        color: String,
        /// Wrap width in display pixels.
        max_width: Option<f64>,
    },
    /// Where song content will be overlaid; labelled with the slot.
    Placeholder {
        /// Slot shown in the label.
        slot: SongStyleSlot,
        /// Font size in display pixels.
        font_size: f64,
        /// Alignment.
        text_align: TextAlign,
        /// CSS color string.
        color: String,
    },
}

/// One positioned, sized, rotatable node handed to the rendering collaborator.
#[derive(Clone, Debug, PartialEq)]
pub struct DisplayNode {
    /// Model object the node stands for.
    pub target: NodeTarget,
    /// What to paint.
    pub content: NodeContent,
    /// Display-space bounds before rotation.
    pub rect: Rect,
    /// Degrees, clockwise, about the top-left corner.
    pub rotation: f64,
    /// Paint opacity in `[0, 1]`.
    pub opacity: f64,
    /// Paint order.
    pub z_index: i32,
    /// Whether the canvas lets the node be moved.
    pub draggable: bool,
}

/// Back-to-front display list of one slide.
#[derive(Clone, Debug, PartialEq)]
pub struct SlideScene {
    /// Canvas size in display pixels.
    pub size: Size,
    /// Nodes, back to front.
    pub nodes: Vec<DisplayNode>,
}

impl SlideScene {
    /// Order: background, then elements by `z_index` (ties keep slide order), then the song
    /// content placeholders when `slide_index` is the reference slide.
    pub fn build(
        template: &Template,
        slide_index: usize,
        bridge: &CanvasBridge,
    ) -> SongslideResult<Self> {
        let slide = template.slide(slide_index).ok_or_else(|| {
            SongslideError::validation(format!(
                "slide index {slide_index} out of range (template has {} slides)",
                template.slides.len()
            ))
        })?;
        let slide_size = template.slide_size();

        let mut nodes = Vec::with_capacity(slide.element_count() + 1);
        if let Some(bg) = &slide.background {
            nodes.push(background_node(bg, bridge));
        }

        let mut elements: Vec<DisplayNode> = slide
            .elements()
            .filter_map(|e| element_node(e, slide_size, bridge))
            .collect();
        elements.sort_by_key(|n| n.z_index);
        nodes.extend(elements);

        if slide_index == template.reference_slide_index {
            nodes.extend(
                slide
                    .song_styles
                    .iter()
                    .map(|(slot, style)| placeholder_node(slot, style, slide_size, bridge)),
            );
        }

        Ok(Self {
            size: bridge.display_size(),
            nodes,
        })
    }

    /// Top-most draggable node under display point `p`. Rotation is ignored.
    pub fn hit_test(&self, p: Point) -> Option<&DisplayNode> {
        self.nodes
            .iter()
            .rev()
            .find(|n| n.draggable && n.rect.contains(p))
    }

    /// Node drawn for an element.
    pub fn node(&self, id: &ElementId) -> Option<&DisplayNode> {
        self.nodes
            .iter()
            .find(|n| matches!(&n.target, NodeTarget::Element(e) if e == id))
    }
}

fn background_node(bg: &Background, bridge: &CanvasBridge) -> DisplayNode {
    let content = match bg.kind {
        BackgroundKind::Color => NodeContent::Fill {
            color: bg.value.clone(),
        },
        BackgroundKind::Image => NodeContent::Image {
            url: bg.value.clone(),
        },
        BackgroundKind::Video => NodeContent::Video {
            url: bg.value.clone(),
            auto_play: true,
            looping: true,
            muted: true,
        },
    };
    DisplayNode {
        target: NodeTarget::Background,
        content,
        rect: Rect::from_origin_size(Point::ZERO, bridge.display_size()),
        rotation: 0.0,
        opacity: 1.0,
        z_index: i32::MIN,
        draggable: false,
    }
}

fn element_node(
    e: ElementRef<'_>,
    slide: SlideSize,
    bridge: &CanvasBridge,
) -> Option<DisplayNode> {
    let content = match e {
        ElementRef::Image(img) => NodeContent::Image {
            url: img.url.clone(),
        },
        ElementRef::Video(v) if v.hide_video == Some(true) => return None,
        ElementRef::Video(v) => NodeContent::Video {
            url: v.url.clone(),
            auto_play: v.auto_play,
            looping: v.looping,
            muted: v.muted,
        },
        ElementRef::Audio(a) if a.visual_hidden => return None,
        ElementRef::Audio(a) => NodeContent::AudioIcon { url: a.url.clone() },
        ElementRef::Text(t) => NodeContent::Text {
            content: t.content.clone(),
            font_size: display_len(t.font_size, slide.height, bridge),
            font_family: t.font_family.clone(),
            font_weight: t.font_weight.clone(),
            font_style: t.font_style.clone(),
            text_align: t.text_align,
            color: t.color.clone(),
            max_width: t.max_width.map(|w| display_len(w, slide.width, bridge)),
        },
    };
    let layer = e.layer();
    Some(DisplayNode {
        target: NodeTarget::Element(layer.id.clone()),
        content,
        rect: bridge.rect_to_display(layer.bounds(slide)),
        rotation: if layer.rotation.is_finite() {
            layer.rotation
        } else {
            0.0
        },
        opacity: clamp_unit(layer.opacity, 1.0),
        z_index: layer.z_index,
        draggable: true,
    })
}

fn placeholder_node(
    slot: SongStyleSlot,
    style: &SongContentStyle,
    slide: SlideSize,
    bridge: &CanvasBridge,
) -> DisplayNode {
    let font_size = style.font_size.resolve(slide.height);
    let size = match style.height {
        Some(h) => resolve_size(style.width, h, slide),
        None => Size::new(style.width.resolve(slide.width), font_size * PLACEHOLDER_LINES),
    };
    let origin = Point::new(style.x.resolve(slide.width), style.y.resolve(slide.height));
    DisplayNode {
        target: NodeTarget::SongStyle(slot),
        content: NodeContent::Placeholder {
            slot,
            font_size: bridge.length_to_display(font_size),
            text_align: style.text_align,
            color: style.color.clone(),
        },
        rect: bridge.rect_to_display(Rect::from_origin_size(origin, size)),
        rotation: 0.0,
        opacity: 1.0,
        z_index: i32::MAX,
        draggable: true,
    }
}

fn display_len(d: Dimension, extent: f64, bridge: &CanvasBridge) -> f64 {
    bridge.length_to_display(d.resolve(extent))
}

#[cfg(test)]
#[path = "../../tests/unit/canvas/scene.rs"]
mod tests;
