use super::*;

fn parse(text: &str) -> PartialTemplate {
    YamlTemplateParser.validate(text).unwrap()
}

fn parse_err(text: &str) -> String {
    YamlTemplateParser.validate(text).unwrap_err().to_string()
}

#[test]
fn reads_multi_slide_template() {
    let p = parse(
        "\
name: Evening
aspectRatio: '4:3'
referenceSlideIndex: 1
slides:
  - background:
      type: image
      value: https://cdn.example/bg.jpg
    images: []
    videos: []
    audios: []
    text: []
  - images:
      - id: logo
        url: logo.png
        x: 10px
        y: '5%'
        width: 200px
        height: 100px
    text:
      - id: t1
        content: |-
          Line: one
          Line two
        preset: bottom-center
        width: 400px
        height: 80px
        fontSize: 40px
        color: '#fff'
",
    );
    assert_eq!(p.name.as_deref(), Some("Evening"));
    assert_eq!(p.aspect_ratio, Some(AspectRatio::Standard));
    assert_eq!(p.reference_slide_index, Some(1));
    let slides = p.slides.unwrap();
    assert_eq!(slides.len(), 2);
    assert_eq!(
        slides[0].background,
        Some(Background {
            kind: BackgroundKind::Image,
            value: "https://cdn.example/bg.jpg".to_owned()
        })
    );
    let logo = &slides[1].images[0];
    assert_eq!(logo.layer.id, ElementId::new("logo"));
    assert_eq!(
        logo.layer.position,
        Position::explicit(Dimension::px(10.0), Dimension::percent(5.0))
    );
    let text = &slides[1].text[0];
    assert_eq!(text.content, "Line: one\nLine two");
    assert_eq!(text.layer.position, Position::Preset(PositionPreset::BottomCenter));
    assert_eq!(text.color, "#fff");
}

#[test]
fn lenient_hand_authored_forms() {
    let p = parse(
        "\
name: 2024
slides:
  - text:
      - content: 42
        x: 100
        preset: center
        width: 200
        height: 100
        fontWeight: 700
        opacity: '0.5'
",
    );
    assert_eq!(p.name.as_deref(), Some("2024"));
    let text = &p.slides.unwrap()[0].text[0];
    assert!(text.layer.id.as_str().starts_with("text-"));
    assert_eq!(text.content, "42");
    assert_eq!(text.font_weight, "700");
    assert_eq!(text.layer.opacity, 0.5);
    // y taken from the preset: (1080 - 100) / 2.
    assert_eq!(
        text.layer.position,
        Position::explicit(Dimension::px(100.0), Dimension::px(490.0))
    );
}

#[test]
fn legacy_single_slide_layout_becomes_one_slide() {
    let p = parse(
        "\
name: Old
background:
  type: color
  value: '#000'
text:
  - id: a
    content: hi
    x: 0px
    y: 0px
    width: 10px
    height: 10px
",
    );
    let slides = p.slides.unwrap();
    assert_eq!(slides.len(), 1);
    assert_eq!(slides[0].text[0].content, "hi");
    assert!(slides[0].background.is_some());
}

#[test]
fn metadata_only_text_has_no_slides() {
    let p = parse("name: Just a name\n");
    assert_eq!(p.slides, None);
    assert_eq!(p.description, None);
    assert_eq!(parse(""), PartialTemplate::default());
}

#[test]
fn song_style_legacy_y_position() {
    let p = parse(
        "\
slides:
  - songLyricsStyle:
      x: 100px
      yPosition: 40
      width: 1600px
      fontSize: 50px
      fontWeight: bold
      color: '#eee'
",
    );
    let style = p.slides.unwrap()[0]
        .song_styles
        .song_lyrics_style
        .clone()
        .unwrap();
    assert_eq!(style.y, Dimension::percent(40.0));
    assert_eq!(style.y_position, Some(40.0));
    assert_eq!(style.text_align, TextAlign::Center);
}

#[test]
fn audio_fields_are_read() {
    let p = parse(
        "\
slides:
  - audios:
      - id: a1
        url: song.mp3
        x: 40px
        y: 40px
        width: 80px
        height: 80px
        volume: 2
        visualHidden: true
        startSlide: 1
        endSlide: 2
",
    );
    let audio = &p.slides.unwrap()[0].audios[0];
    assert_eq!(audio.volume, 1.0);
    assert!(audio.visual_hidden);
    assert_eq!((audio.start_slide, audio.end_slide), (Some(1), Some(2)));
}

#[test]
fn errors_name_the_offending_path() {
    assert_eq!(
        parse_err("slides:\n  - images:\n      - id: x\n        width: wide\n        url: a\n"),
        "parse error: $.slides[0].images[0].width: invalid dimension \"wide\" (expected e.g. \"120px\" or \"50%\")"
    );
    assert_eq!(
        parse_err("slides:\n  - videos:\n      - id: v\n"),
        "parse error: $.slides[0].videos[0]: missing field `url`"
    );
    assert_eq!(
        parse_err("slides:\n  - text:\n      - preset: middle\n"),
        "parse error: $.slides[0].text[0].preset: unknown position preset \"middle\""
    );
    assert_eq!(
        parse_err("slides: 3\n"),
        "parse error: $.slides: expected a list, found a number"
    );
    assert!(parse_err("name: [unclosed\n").starts_with("parse error: invalid YAML"));
    assert!(parse_err("- a\n- b\n").contains("expected a mapping"));
}

#[test]
fn structural_checks_run_after_walking() {
    assert!(parse_err("slides: []\n").contains("at least one slide"));
    assert!(parse_err("referenceSlideIndex: 2\nslides:\n  - {}\n").contains("out of range"));
    let dup = "slides:\n  - images:\n      - {id: a, url: x}\n  - text:\n      - {id: a}\n";
    assert!(parse_err(dup).contains("duplicate element id \"a\""));
}
