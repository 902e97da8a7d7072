use std::fmt;

/// Unit carried by a [`Dimension`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Unit {
    /// Slide-space pixels.
    #[default]
    Px,
    /// Percentage of the slide extent along the dimension's axis.
    Percent,
}

/// A signed length paired with a unit.
///
/// Text forms are `"120"`, `"120px"`, `"-3.5px"` and `"50%"`. Numbers without a unit are pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Dimension {
    /// Magnitude in `unit`.
    pub value: f64,
    /// What `value` is measured in.
    pub unit: Unit,
}

impl Dimension {
    /// `0px`.
    pub const ZERO: Dimension = Dimension {
        value: 0.0,
        unit: Unit::Px,
    };

    /// Slide-space pixels.
    pub fn px(value: f64) -> Self {
        Self {
            value,
            unit: Unit::Px,
        }
    }

    /// Percentage of the slide extent.
    pub fn percent(value: f64) -> Self {
        Self {
            value,
            unit: Unit::Percent,
        }
    }

    /// Strict parse. Returns `None` for empty, non-numeric or non-finite input.
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        if let Some(num) = s.strip_suffix('%') {
            return parse_finite(num).map(Self::percent);
        }
        let num = s.strip_suffix("px").unwrap_or(s);
        parse_finite(num).map(Self::px)
    }

    /// Lenient parse used on interaction paths: malformed input becomes `0px`.
    pub fn parse_lossy(s: &str) -> Self {
        Self::parse(s).unwrap_or(Self::ZERO)
    }

    /// Whether the value is relative to the slide.
    pub fn is_percent(self) -> bool {
        self.unit == Unit::Percent
    }

    /// Slide-space pixels for this dimension given the extent percentages refer to.
    pub fn resolve(self, extent: f64) -> f64 {
        let v = match self.unit {
            Unit::Px => self.value,
            Unit::Percent => self.value / 100.0 * extent,
        };
        if v.is_finite() { v } else { 0.0 }
    }

    /// Form written by the serializer: whole pixels, percentages untouched.
    pub fn normalized(self) -> Self {
        if !self.value.is_finite() {
            return Self {
                value: 0.0,
                unit: self.unit,
            };
        }
        match self.unit {
            // `+ 0.0` folds -0.0 into 0.0 so the text form never reads "-0px".
            Unit::Px => Self::px(self.value.round() + 0.0),
            Unit::Percent => self,
        }
    }
}

fn parse_finite(s: &str) -> Option<f64> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }
    s.parse::<f64>().ok().filter(|v| v.is_finite())
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.unit {
            Unit::Px => write!(f, "{}px", self.value),
            Unit::Percent => write!(f, "{}%", self.value),
        }
    }
}

impl serde::Serialize for Dimension {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> serde::Deserialize<'de> for Dimension {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(serde::Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Num(f64),
            Str(String),
        }

        match Repr::deserialize(deserializer)? {
            Repr::Num(v) if v.is_finite() => Ok(Self::px(v)),
            Repr::Num(v) => Err(serde::de::Error::custom(format!(
                "dimension must be finite, got {v}"
            ))),
            Repr::Str(s) => Self::parse(&s).ok_or_else(|| {
                serde::de::Error::custom(format!(
                    "invalid dimension \"{s}\" (expected e.g. \"120px\" or \"50%\")"
                ))
            }),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/position/dimension.rs"]
mod tests;
