use std::fmt;
use std::str::FromStr;

pub use kurbo::{Point, Rect, Size, Vec2};

/// Supported template aspect ratios.
///
/// Each ratio fixes the slide-space extent all element geometry is authored in.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum AspectRatio {
    /// Widescreen, 1920x1080 slide space.
    #[default]
    #[serde(rename = "16:9")]
    Widescreen,
    /// Standard, 1600x1200 slide space.
    #[serde(rename = "4:3")]
    Standard,
}

impl AspectRatio {
    /// Every supported ratio.
    pub const ALL: [AspectRatio; 2] = [AspectRatio::Widescreen, AspectRatio::Standard];

    /// Slide-space size for this ratio.
    pub fn slide_size(self) -> SlideSize {
        match self {
            Self::Widescreen => SlideSize::new(1920.0, 1080.0),
            Self::Standard => SlideSize::new(1600.0, 1200.0),
        }
    }

    /// Text form used by the configuration format (`"16:9"`, `"4:3"`).
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Widescreen => "16:9",
            Self::Standard => "4:3",
        }
    }
}

impl fmt::Display for AspectRatio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AspectRatio {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "16:9" => Ok(Self::Widescreen),
            "4:3" => Ok(Self::Standard),
            other => Err(format!(
                "unknown aspect ratio \"{other}\" (expected \"16:9\" or \"4:3\")"
            )),
        }
    }
}

/// Slide-space extent in pixels.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SlideSize {
    /// Horizontal extent.
    pub width: f64,
    /// Vertical extent.
    pub height: f64,
}

impl SlideSize {
    /// Size from explicit extents.
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Extent along one axis.
    pub fn extent(self, axis: Axis) -> f64 {
        match axis {
            Axis::X => self.width,
            Axis::Y => self.height,
        }
    }

    /// Same extent as a kurbo [`Size`].
    pub fn to_kurbo(self) -> Size {
        Size::new(self.width, self.height)
    }
}

/// Coordinate axis in slide or display space.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Horizontal.
    X,
    /// Vertical.
    Y,
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
