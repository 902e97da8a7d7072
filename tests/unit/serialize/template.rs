use super::*;
use crate::foundation::core::AspectRatio;
use crate::position::preset::PositionPreset;
use crate::template::element::{ElementId, ElementKind, TextAlign};
use crate::template::patch::{BackgroundPatch, ElementPatch, SongStylePatch};
use crate::template::slide::SongStyleSlot;

fn text_element(id: &str, content: &str) -> TextElement {
    TextElement {
        layer: Layer {
            id: ElementId::new(id),
            position: Position::Preset(PositionPreset::Center),
            width: Dimension::px(960.4),
            height: Dimension::px(120.0),
            opacity: 1.0,
            z_index: 2,
            rotation: 14.6,
        },
        content: content.to_owned(),
        font_size: Dimension::px(48.0),
        font_family: None,
        font_weight: "normal".to_owned(),
        font_style: None,
        text_align: TextAlign::Center,
        color: "#ffffff".to_owned(),
        max_width: None,
    }
}

#[test]
fn writes_a_complete_single_slide_template() {
    let mut t = Template::new("Sunday Service")
        .with_background(0, &BackgroundPatch::color("#000000"))
        .unwrap();
    t.slides[0].text.push(text_element("t1", "Hello"));

    let expected = "\
name: Sunday Service
aspectRatio: '16:9'
referenceSlideIndex: 0
slides:
  - background:
      type: color
      value: '#000000'
    images: []
    videos: []
    audios: []
    text:
      - id: t1
        content: Hello
        preset: center
        width: 960px
        height: 120px
        opacity: 1
        zIndex: 2
        rotation: 15
        fontSize: 48px
        fontWeight: normal
        textAlign: center
        color: '#ffffff'
";
    assert_eq!(serialize_template(&t), expected);
}

#[test]
fn multiline_content_reconstructs_exactly() {
    let mut t = Template::new("t");
    t.slides[0]
        .text
        .push(text_element("t1", "Line: one\nLine two"));
    let out = serialize_template(&t);
    assert!(out.contains("        content: |-\n          Line: one\n          Line two\n"));

    let mut t = Template::new("t");
    t.slides[0].text.push(text_element("t1", "a:b"));
    assert!(serialize_template(&t).contains("content: 'a:b'\n"));
}

#[test]
fn audio_range_defaults_to_owning_slide() {
    let t = Template::new("t").with_slide_added(1).with_slide_added(2);
    let (t, _) = t
        .with_element_added(2, ElementKind::Audio, &ElementPatch::url("song.mp3"))
        .unwrap();
    let out = serialize_template(&t);
    for line in [
        "opacity: 1",
        "zIndex: 3",
        "autoPlay: true",
        "loop: false",
        "volume: 1",
        "visualHidden: false",
        "startSlide: 3",
        "endSlide: 3",
    ] {
        assert!(out.contains(line), "missing {line:?} in\n{out}");
    }
}

#[test]
fn song_styles_only_on_reference_slide() {
    let t = Template::new("t")
        .with_slide_added(1)
        .with_song_style(SongStyleSlot::Lyrics, &SongStylePatch::default());
    let mut t = t.with_reference_slide(1).unwrap();
    // Stale copy on a static slide is ignored.
    t.slides[0].song_styles = t.slides[1].song_styles.clone();

    let out = serialize_template(&t);
    assert_eq!(out.matches("songLyricsStyle:").count(), 1);
    let at = out.find("songLyricsStyle:").unwrap();
    let second_slide = out.rfind("  - ").unwrap();
    assert!(at > second_slide);
}

#[test]
fn description_and_percentages() {
    let patch = ElementPatch {
        width: Some(Dimension::percent(50.0)),
        ..ElementPatch::at(Dimension::px(10.2), Dimension::px(-4.0))
    };
    let (t, _) = Template::new("t")
        .with_description(Some("Intro: welcome".to_owned()))
        .with_aspect_ratio(AspectRatio::Standard)
        .with_element_added(0, ElementKind::Image, &patch)
        .unwrap();
    let out = serialize_template(&t);
    assert!(out.starts_with("name: t\ndescription: 'Intro: welcome'\naspectRatio: '4:3'\n"));
    assert!(out.contains("x: 10px\n"));
    assert!(out.contains("y: -4px\n"));
    assert!(out.contains("width: '50%'\n"));
}

#[test]
fn serializing_twice_is_byte_identical() {
    let (t, _) = Template::new("t")
        .with_element_added(0, ElementKind::Video, &ElementPatch::url("v.mp4"))
        .unwrap();
    assert_eq!(serialize_template(&t), serialize_template(&t));
    let wide = serialize_template_with(&t, &SerializeOpts { indent: 4 });
    assert!(wide.contains("\n    - background") || wide.contains("\n    - images"));
}
