use std::fmt;
use std::str::FromStr;

/// One of the nine named anchor points an element can be placed at.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PositionPreset {
    /// Top-left corner.
    TopLeft,
    /// Top edge, centered horizontally.
    TopCenter,
    /// Top-right corner.
    TopRight,
    /// Left edge, centered vertically.
    CenterLeft,
    /// Slide center.
    Center,
    /// Right edge, centered vertically.
    CenterRight,
    /// Bottom-left corner.
    BottomLeft,
    /// Bottom edge, centered horizontally.
    BottomCenter,
    /// Bottom-right corner.
    BottomRight,
}

/// Placement of a preset along one axis of the 3x3 grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum GridAlign {
    Start,
    Center,
    End,
}

impl PositionPreset {
    /// Every preset, row by row.
    pub const ALL: [PositionPreset; 9] = [
        PositionPreset::TopLeft,
        PositionPreset::TopCenter,
        PositionPreset::TopRight,
        PositionPreset::CenterLeft,
        PositionPreset::Center,
        PositionPreset::CenterRight,
        PositionPreset::BottomLeft,
        PositionPreset::BottomCenter,
        PositionPreset::BottomRight,
    ];

    /// Kebab-case name used in the text format.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::TopLeft => "top-left",
            Self::TopCenter => "top-center",
            Self::TopRight => "top-right",
            Self::CenterLeft => "center-left",
            Self::Center => "center",
            Self::CenterRight => "center-right",
            Self::BottomLeft => "bottom-left",
            Self::BottomCenter => "bottom-center",
            Self::BottomRight => "bottom-right",
        }
    }

    /// Horizontal grid column.
    pub(crate) fn column(self) -> GridAlign {
        match self {
            Self::TopLeft | Self::CenterLeft | Self::BottomLeft => GridAlign::Start,
            Self::TopCenter | Self::Center | Self::BottomCenter => GridAlign::Center,
            Self::TopRight | Self::CenterRight | Self::BottomRight => GridAlign::End,
        }
    }

    /// Vertical grid row.
    pub(crate) fn row(self) -> GridAlign {
        match self {
            Self::TopLeft | Self::TopCenter | Self::TopRight => GridAlign::Start,
            Self::CenterLeft | Self::Center | Self::CenterRight => GridAlign::Center,
            Self::BottomLeft | Self::BottomCenter | Self::BottomRight => GridAlign::End,
        }
    }
}

impl fmt::Display for PositionPreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PositionPreset {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|p| p.as_str() == s)
            .ok_or_else(|| format!("unknown position preset \"{s}\""))
    }
}
