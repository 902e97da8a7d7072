use crate::foundation::core::{Axis, Point, Rect, Size, SlideSize};
use crate::position::dimension::Dimension;
use crate::position::preset::{GridAlign, PositionPreset};

/// Distance kept between a preset-placed element and the slide edges, in slide-space units.
pub const PRESET_MARGIN: f64 = 40.0;

/// Where an element sits on its slide.
///
/// Explicit coordinates and presets are mutually exclusive: whichever was set last replaces the
/// other (see [`crate::ElementPatch`]).
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(from = "PositionRepr", into = "PositionRepr")]
pub enum Position {
    /// Top-left corner given per axis.
    Explicit {
        /// Horizontal offset of the top-left corner.
        x: Dimension,
        /// Vertical offset of the top-left corner.
        y: Dimension,
    },
    /// Named anchor resolved against the slide and element size.
    Preset(PositionPreset),
}

impl Default for Position {
    fn default() -> Self {
        Self::Explicit {
            x: Dimension::ZERO,
            y: Dimension::ZERO,
        }
    }
}

impl Position {
    /// Explicit top-left corner.
    pub fn explicit(x: Dimension, y: Dimension) -> Self {
        Self::Explicit { x, y }
    }

    /// The preset, when the position is not explicit.
    pub fn preset(&self) -> Option<PositionPreset> {
        match self {
            Self::Preset(p) => Some(*p),
            Self::Explicit { .. } => None,
        }
    }

    /// Slide-space top-left coordinate on one axis.
    pub fn resolve_axis(&self, axis: Axis, slide: SlideSize, element: Size) -> f64 {
        let element_extent = match axis {
            Axis::X => element.width,
            Axis::Y => element.height,
        };
        match *self {
            Self::Explicit { x, y } => {
                let d = match axis {
                    Axis::X => x,
                    Axis::Y => y,
                };
                d.resolve(slide.extent(axis))
            }
            Self::Preset(p) => preset_coordinate(p, axis, slide.extent(axis), element_extent),
        }
    }

    /// Slide-space top-left corner.
    pub fn resolve(&self, slide: SlideSize, element: Size) -> Point {
        Point::new(
            self.resolve_axis(Axis::X, slide, element),
            self.resolve_axis(Axis::Y, slide, element),
        )
    }

    /// Explicit form with every axis in whole pixels, presets untouched.
    pub fn normalized(&self) -> Self {
        match *self {
            Self::Explicit { x, y } => Self::Explicit {
                x: x.normalized(),
                y: y.normalized(),
            },
            Self::Preset(p) => Self::Preset(p),
        }
    }
}

/// Loose wire form: optional `x`/`y` next to an optional `preset`.
#[derive(Clone, Debug, Default, serde::Serialize, serde::Deserialize)]
struct PositionRepr {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    x: Option<Dimension>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    y: Option<Dimension>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    preset: Option<PositionPreset>,
}

impl From<PositionRepr> for Position {
    fn from(r: PositionRepr) -> Self {
        match (r.x, r.y, r.preset) {
            (None, None, Some(p)) => Self::Preset(p),
            (x, y, _) => Self::Explicit {
                x: x.unwrap_or(Dimension::ZERO),
                y: y.unwrap_or(Dimension::ZERO),
            },
        }
    }
}

impl From<Position> for PositionRepr {
    fn from(p: Position) -> Self {
        match p {
            Position::Explicit { x, y } => Self {
                x: Some(x),
                y: Some(y),
                preset: None,
            },
            Position::Preset(p) => Self {
                preset: Some(p),
                ..Self::default()
            },
        }
    }
}

/// Resolve one axis of an element position from its raw text form.
///
/// Priority: an explicit `%` value, then an explicit pixel value, then a named preset, else `0`.
/// Never fails: malformed values and unknown preset names resolve to `0`.
pub fn resolve_position(
    explicit: Option<&str>,
    preset: Option<&str>,
    axis: Axis,
    slide_extent: f64,
    element_extent: f64,
    slide_width: f64,
    slide_height: f64,
) -> f64 {
    if let Some(raw) = explicit.map(str::trim).filter(|s| !s.is_empty()) {
        return Dimension::parse_lossy(raw).resolve(slide_extent);
    }
    let Some(preset) = preset.and_then(|p| p.parse::<PositionPreset>().ok()) else {
        return 0.0;
    };
    let axis_extent = match axis {
        Axis::X => slide_width,
        Axis::Y => slide_height,
    };
    preset_coordinate(preset, axis, axis_extent, element_extent)
}

fn preset_coordinate(preset: PositionPreset, axis: Axis, slide: f64, element: f64) -> f64 {
    let align = match axis {
        Axis::X => preset.column(),
        Axis::Y => preset.row(),
    };
    let v = match align {
        GridAlign::Start => PRESET_MARGIN,
        GridAlign::Center => (slide - element) * 0.5,
        GridAlign::End => slide - element - PRESET_MARGIN,
    };
    if v.is_finite() { v } else { 0.0 }
}

/// Slide-space size of an element whose width/height may be percentages of the slide.
pub fn resolve_size(width: Dimension, height: Dimension, slide: SlideSize) -> Size {
    Size::new(
        width.resolve(slide.width).max(0.0),
        height.resolve(slide.height).max(0.0),
    )
}

/// Slide-space bounding box of an element.
pub fn resolve_box(
    position: &Position,
    width: Dimension,
    height: Dimension,
    slide: SlideSize,
) -> Rect {
    let size = resolve_size(width, height, slide);
    Rect::from_origin_size(position.resolve(slide, size), size)
}

#[cfg(test)]
#[path = "../../tests/unit/position/resolver.rs"]
mod tests;
