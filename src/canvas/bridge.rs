use crate::foundation::core::{AspectRatio, Point, Rect, Size, SlideSize, Vec2};
use crate::position::dimension::Dimension;
use crate::template::model::Template;
use crate::template::patch::{ElementPatch, SongStylePatch};

/// Display canvas configuration.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CanvasOpts {
    /// Width of the interactive preview in display pixels. Height follows the aspect ratio.
    pub display_width: f64,
}

impl Default for CanvasOpts {
    fn default() -> Self {
        Self {
            display_width: 960.0,
        }
    }
}

/// What the rendering collaborator reports when a resize/rotate gesture ends.
///
/// `position` is the node's display-space origin. `width`/`height` are the node's display size
/// before the transformer scale is applied, as scene-graph libraries report them.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TransformEnd {
    /// Display-space origin.
    pub position: Point,
    /// Unscaled display width.
    pub width: f64,
    /// Unscaled display height.
    pub height: f64,
    /// Horizontal transformer scale.
    pub scale_x: f64,
    /// Vertical transformer scale.
    pub scale_y: f64,
    /// Degrees, clockwise.
    pub rotation: f64,
}

/// Uniform mapping between slide space and the display canvas.
///
/// Pointer input is divided by [`CanvasBridge::scale`] and rounded here, so model values are
/// always whole slide-space pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CanvasBridge {
    slide: SlideSize,
    display_width: f64,
    scale: f64,
}

impl CanvasBridge {
    /// Bridge for a slide shape. Non-positive or non-finite display widths fall back to the default.
    pub fn new(aspect_ratio: AspectRatio, opts: &CanvasOpts) -> Self {
        let slide = aspect_ratio.slide_size();
        let display_width = if opts.display_width.is_finite() && opts.display_width > 0.0 {
            opts.display_width
        } else {
            CanvasOpts::default().display_width
        };
        Self {
            slide,
            display_width,
            scale: display_width / slide.width,
        }
    }

    /// Bridge for the template's aspect ratio.
    pub fn for_template(template: &Template, opts: &CanvasOpts) -> Self {
        Self::new(template.aspect_ratio, opts)
    }

    /// `display_width / slide_width`.
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Slide-space extent.
    pub fn slide_size(&self) -> SlideSize {
        self.slide
    }

    /// Canvas size in display pixels.
    pub fn display_size(&self) -> Size {
        Size::new(
            self.display_width,
            self.display_width * self.slide.height / self.slide.width,
        )
    }

    /// Slide point to display point.
    pub fn to_display(&self, p: Point) -> Point {
        (p.to_vec2() * self.scale).to_point()
    }

    /// Display point to slide point, unrounded.
    pub fn to_slide(&self, p: Point) -> Point {
        (p.to_vec2() / self.scale).to_point()
    }

    /// Slide length to display length.
    pub fn length_to_display(&self, v: f64) -> f64 {
        v * self.scale
    }

    /// Display length to slide length.
    pub fn length_to_slide(&self, v: f64) -> f64 {
        v / self.scale
    }

    /// Slide rect to display rect.
    pub fn rect_to_display(&self, r: Rect) -> Rect {
        Rect::new(
            r.x0 * self.scale,
            r.y0 * self.scale,
            r.x1 * self.scale,
            r.y1 * self.scale,
        )
    }

    /// Display point to whole slide-space pixels.
    pub fn snap_to_slide(&self, p: Point) -> Point {
        let v: Vec2 = p.to_vec2() / self.scale;
        Point::new(round(v.x), round(v.y))
    }

    /// Patch for an element dropped at display position `p`.
    pub fn drag_end(&self, p: Point) -> ElementPatch {
        let s = self.snap_to_slide(p);
        ElementPatch::at(Dimension::px(s.x), Dimension::px(s.y))
    }

    /// Patch for a song content placeholder dropped at display position `p`.
    pub fn drag_end_song_style(&self, p: Point) -> SongStylePatch {
        let s = self.snap_to_slide(p);
        SongStylePatch::at(Dimension::px(s.x), Dimension::px(s.y))
    }

    /// Patch for the end of a transformer gesture: the scale is folded into the size.
    pub fn transform_end(&self, t: &TransformEnd) -> ElementPatch {
        let s = self.snap_to_slide(t.position);
        let extent = |len: f64, scale: f64| {
            let scale = if scale.is_finite() { scale.abs() } else { 1.0 };
            Dimension::px(round(self.length_to_slide(len * scale)).max(1.0))
        };
        ElementPatch {
            width: Some(extent(t.width, t.scale_x)),
            height: Some(extent(t.height, t.scale_y)),
            rotation: t.rotation.is_finite().then(|| t.rotation.round() + 0.0),
            ..ElementPatch::at(Dimension::px(s.x), Dimension::px(s.y))
        }
    }
}

fn round(v: f64) -> f64 {
    if v.is_finite() { v.round() + 0.0 } else { 0.0 }
}

#[cfg(test)]
#[path = "../../tests/unit/canvas/bridge.rs"]
mod tests;
