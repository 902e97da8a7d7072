use crate::template::element::{Layer, clamp_unit, default_opacity};
use crate::template::model::Template;
use crate::template::slide::{SongContentStyle, SongStyleSlot};

impl Template {
    /// The form this template takes after a trip through the text format.
    ///
    /// Pixel dimensions become whole pixels, rotation becomes whole degrees, opacity and volume
    /// are clamped to `[0, 1]`, audio play ranges are filled in, and song styles are dropped from
    /// every slide except the reference slide. The reference index is clamped into range.
    pub fn normalized(&self) -> Self {
        let mut next = self.clone();
        if next.slides.is_empty() {
            next.slides.push(Default::default());
        }
        next.reference_slide_index = next.reference_slide_index.min(next.slides.len() - 1);

        let count = next.slides.len();
        let reference = next.reference_slide_index;
        for (index, slide) in next.slides.iter_mut().enumerate() {
            for layer in slide.layers_mut() {
                normalize_layer(layer);
            }
            for e in &mut slide.audios {
                let (start, end) = e.effective_range(index, count);
                e.start_slide = Some(start);
                e.end_slide = Some(end);
                e.volume = clamp_unit(e.volume, 1.0);
            }
            for e in &mut slide.text {
                e.font_size = e.font_size.normalized();
                e.max_width = e.max_width.map(|d| d.normalized());
            }
            if index == reference {
                for slot in SongStyleSlot::ALL {
                    if let Some(style) = slide.song_styles.slot_mut(slot) {
                        normalize_song_style(style);
                    }
                }
            } else {
                slide.song_styles = Default::default();
            }
        }
        next
    }
}

fn normalize_layer(layer: &mut Layer) {
    layer.position = layer.position.normalized();
    layer.width = layer.width.normalized();
    layer.height = layer.height.normalized();
    layer.opacity = clamp_unit(layer.opacity, default_opacity());
    layer.rotation = round_degrees(layer.rotation);
}

fn normalize_song_style(style: &mut SongContentStyle) {
    style.x = style.x.normalized();
    style.y = style.y.normalized();
    style.width = style.width.normalized();
    style.height = style.height.map(|d| d.normalized());
    style.font_size = style.font_size.normalized();
    style.y_position = style.y_position.filter(|v| v.is_finite());
}

/// Whole degrees; non-finite input becomes `0`.
pub(crate) fn round_degrees(v: f64) -> f64 {
    if v.is_finite() { v.round() + 0.0 } else { 0.0 }
}

#[cfg(test)]
#[path = "../../tests/unit/template/normalize.rs"]
mod tests;
