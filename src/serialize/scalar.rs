use std::fmt::Write as _;

use crate::position::dimension::{Dimension, Unit};

/// Characters that force a string into quotes wherever they appear.
const RESERVED: &[char] = &[
    ':', '|', '{', '}', '[', ']', ',', '&', '*', '#', '?', '!', '@', '`', '\'', '"', '%', '\t',
];

/// Characters that only matter at the start of a plain scalar.
const LEADING_INDICATORS: &[char] = &['-', '<', '>', '=', '~', '.', '+'];

/// Words a reader would resolve to a boolean or null instead of a string.
const KEYWORDS: &[&str] = &[
    "true", "false", "yes", "no", "on", "off", "y", "n", "null", "~",
];

/// How a string value is written.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Style {
    Plain,
    SingleQuoted,
    DoubleQuoted,
    Literal,
}

/// Pick the emission style for a string value.
pub(crate) fn style_for(s: &str) -> Style {
    if has_unprintable(s) {
        return Style::DoubleQuoted;
    }
    if s.contains('\n') {
        // A block needs at least one visible character to anchor its indentation.
        return if s.chars().any(|c| !c.is_whitespace()) {
            Style::Literal
        } else {
            Style::DoubleQuoted
        };
    }
    if needs_quotes(s) {
        Style::SingleQuoted
    } else {
        Style::Plain
    }
}

fn has_unprintable(s: &str) -> bool {
    s.chars().any(|c| {
        (c.is_control() && c != '\n' && c != '\t')
            || matches!(c, '\u{2028}' | '\u{2029}' | '\u{feff}')
    })
}

/// Whether a single-line string must be quoted to read back as the same string.
pub(crate) fn needs_quotes(s: &str) -> bool {
    if s.is_empty() || s.trim() != s {
        return true;
    }
    if s.contains(RESERVED) || s.starts_with(LEADING_INDICATORS) {
        return true;
    }
    if KEYWORDS.iter().any(|k| s.eq_ignore_ascii_case(k)) {
        return true;
    }
    looks_numeric(s)
}

fn looks_numeric(s: &str) -> bool {
    if s.parse::<f64>().is_ok() {
        return true;
    }
    // Hex, octal, digit separators and other number-like spellings.
    s.starts_with(|c: char| c.is_ascii_digit())
}

/// `'...'` with embedded single quotes doubled.
pub(crate) fn single_quoted(s: &str) -> String {
    format!("'{}'", s.replace('\'', "''"))
}

/// `"..."` with backslash escapes for everything outside printable text.
pub(crate) fn double_quoted(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\0' => out.push_str("\\0"),
            c if (c as u32) < 0x20 || c as u32 == 0x7f => {
                let _ = write!(out, "\\x{:02X}", c as u32);
            }
            c if c.is_control() || matches!(c, '\u{2028}' | '\u{2029}' | '\u{feff}') => {
                let _ = write!(out, "\\u{:04X}", c as u32);
            }
            c => out.push(c),
        }
    }
    out.push('"');
    out
}

/// A single-line rendering of any string, for positions where a block cannot go.
pub(crate) fn inline(s: &str) -> String {
    match style_for(s) {
        Style::Plain => s.to_owned(),
        Style::SingleQuoted => single_quoted(s),
        Style::DoubleQuoted | Style::Literal => double_quoted(s),
    }
}

/// Shortest text that reads back as the same `f64`. Non-finite values become `0`.
pub(crate) fn number(v: f64) -> String {
    if v.is_finite() {
        format!("{}", v + 0.0)
    } else {
        "0".to_owned()
    }
}

/// Whole-pixel `12px`, or a quoted percentage such as `'50%'`.
///
/// Only pixels are rounded. Percentages keep their fraction: `12.5%` of a 1080px slide is a
/// whole 135px, and rounding it to `13%` would move the element.
pub(crate) fn dimension(d: Dimension) -> String {
    let d = d.normalized();
    match d.unit {
        Unit::Px => d.to_string(),
        Unit::Percent => single_quoted(&d.to_string()),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/serialize/scalar.rs"]
mod tests;
