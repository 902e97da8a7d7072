//! Presentation defaults for newly created elements and song content styles.
//!
//! Geometry is authored against the 1920x1080 slide and scaled to the template's slide size, so a
//! fresh element is always visible and draggable regardless of aspect ratio.

use crate::foundation::core::SlideSize;
use crate::position::dimension::Dimension;
use crate::position::preset::PositionPreset;
use crate::position::resolver::Position;
use crate::template::element::{
    AudioElement, Element, ElementId, ElementKind, ImageElement, Layer, TextAlign, TextElement,
    VideoElement,
};
use crate::template::slide::{SongContentStyle, SongStyleSlot};

const BASE_WIDTH: f64 = 1920.0;
const BASE_HEIGHT: f64 = 1080.0;

/// Default z-order per kind: images below video below text below the audio icon.
pub(crate) fn default_z_index(kind: ElementKind) -> i32 {
    match kind {
        ElementKind::Image | ElementKind::Video => 1,
        ElementKind::Text => 2,
        ElementKind::Audio => 3,
    }
}

fn sx(slide: SlideSize, v: f64) -> Dimension {
    Dimension::px((v * slide.width / BASE_WIDTH).round())
}

fn sy(slide: SlideSize, v: f64) -> Dimension {
    Dimension::px((v * slide.height / BASE_HEIGHT).round())
}

fn layer(kind: ElementKind, position: Position, width: Dimension, height: Dimension) -> Layer {
    Layer {
        id: ElementId::generate(kind),
        position,
        width,
        height,
        opacity: 1.0,
        z_index: default_z_index(kind),
        rotation: 0.0,
    }
}

/// A new element of `kind` with default geometry for `slide`.
pub(crate) fn default_element(kind: ElementKind, slide: SlideSize) -> Element {
    match kind {
        ElementKind::Image => Element::Image(ImageElement {
            layer: layer(
                kind,
                Position::explicit(sx(slide, 100.0), sy(slide, 100.0)),
                sx(slide, 480.0),
                sy(slide, 270.0),
            ),
            url: String::new(),
        }),
        ElementKind::Video => Element::Video(VideoElement {
            layer: layer(
                kind,
                Position::explicit(sx(slide, 160.0), sy(slide, 160.0)),
                sx(slide, 768.0),
                sy(slide, 432.0),
            ),
            url: String::new(),
            auto_play: true,
            looping: true,
            muted: true,
            hide_video: None,
            hide_audio: None,
        }),
        ElementKind::Audio => Element::Audio(AudioElement {
            layer: layer(
                kind,
                Position::explicit(Dimension::px(40.0), Dimension::px(40.0)),
                Dimension::px(80.0),
                Dimension::px(80.0),
            ),
            url: String::new(),
            auto_play: true,
            looping: false,
            volume: 1.0,
            visual_hidden: false,
            start_slide: None,
            end_slide: None,
            play_across_all_slides: None,
        }),
        ElementKind::Text => Element::Text(TextElement {
            layer: layer(
                kind,
                Position::Preset(PositionPreset::Center),
                sx(slide, 960.0),
                sy(slide, 120.0),
            ),
            content: "New text".to_owned(),
            font_size: sy(slide, 48.0),
            font_family: None,
            font_weight: "normal".to_owned(),
            font_style: None,
            text_align: TextAlign::Center,
            color: "#ffffff".to_owned(),
            max_width: None,
        }),
    }
}

impl SongContentStyle {
    /// Where a song content slot sits before the author moves it.
    pub fn default_for(slot: SongStyleSlot, slide: SlideSize) -> Self {
        let style = |x: f64, y: f64, w: f64, font: f64, weight: &str, align: TextAlign| Self {
            x: sx(slide, x),
            y: sy(slide, y),
            width: sx(slide, w),
            height: None,
            font_size: sy(slide, font),
            font_weight: weight.to_owned(),
            font_style: None,
            font_family: None,
            text_align: align,
            color: "#ffffff".to_owned(),
            y_position: None,
        };
        match slot {
            SongStyleSlot::Title => style(160.0, 80.0, 1600.0, 64.0, "bold", TextAlign::Center),
            SongStyleSlot::Lyrics => Self {
                height: Some(sy(slide, 480.0)),
                ..style(160.0, 280.0, 1600.0, 56.0, "normal", TextAlign::Center)
            },
            SongStyleSlot::Translation => Self {
                font_style: Some("italic".to_owned()),
                ..style(160.0, 820.0, 1600.0, 40.0, "normal", TextAlign::Center)
            },
            SongStyleSlot::BottomLeft => {
                style(40.0, 1000.0, 760.0, 28.0, "normal", TextAlign::Left)
            }
            SongStyleSlot::BottomRight => {
                style(1120.0, 1000.0, 760.0, 28.0, "normal", TextAlign::Right)
            }
        }
    }
}
