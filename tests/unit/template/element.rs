use super::*;

fn audio() -> AudioElement {
    AudioElement {
        layer: Layer {
            id: ElementId::new("a1"),
            position: Position::explicit(Dimension::px(40.0), Dimension::px(40.0)),
            width: Dimension::px(80.0),
            height: Dimension::px(80.0),
            opacity: 1.0,
            z_index: 3,
            rotation: 0.0,
        },
        url: "song.mp3".to_owned(),
        auto_play: true,
        looping: false,
        volume: 1.0,
        visual_hidden: false,
        start_slide: None,
        end_slide: None,
        play_across_all_slides: None,
    }
}

#[test]
fn generated_ids_carry_the_kind() {
    let a = ElementId::generate(ElementKind::Video);
    let b = ElementId::generate(ElementKind::Video);
    assert!(a.as_str().starts_with("video-"));
    assert_eq!(a.as_str().len(), "video-".len() + 12);
    assert_ne!(a, b);
}

#[test]
fn audio_range_defaults_to_its_own_slide() {
    let a = audio();
    assert_eq!(a.effective_range(2, 5), (3, 3));
    assert!(a.plays_on(3, 2, 5));
    assert!(!a.plays_on(4, 2, 5));

    let across = AudioElement {
        play_across_all_slides: Some(true),
        ..audio()
    };
    assert_eq!(across.effective_range(2, 5), (1, 5));

    let explicit = AudioElement {
        start_slide: Some(2),
        end_slide: Some(4),
        play_across_all_slides: Some(true),
        ..audio()
    };
    assert_eq!(explicit.effective_range(0, 5), (2, 4));
}

#[test]
fn try_from_returns_other_kinds_unchanged() {
    let e = Element::Audio(audio());
    let back = ImageElement::try_from(e.clone()).unwrap_err();
    assert_eq!(back, e);
    assert_eq!(AudioElement::try_from(e).unwrap(), audio());
}

#[test]
fn element_views_agree() {
    let e = Element::Audio(audio());
    assert_eq!(e.kind(), ElementKind::Audio);
    assert_eq!(e.borrowed().id(), e.id());
    assert_eq!(e.borrowed().cloned(), e);
    assert_eq!(
        e.layer().bounds(SlideSize::new(1920.0, 1080.0)),
        Rect::new(40.0, 40.0, 120.0, 120.0)
    );
}

#[test]
fn video_json_uses_wire_names() {
    let v = VideoElement {
        layer: Layer {
            id: ElementId::new("v1"),
            position: Position::explicit(Dimension::px(0.0), Dimension::percent(50.0)),
            width: Dimension::px(10.0),
            height: Dimension::px(10.0),
            opacity: 1.0,
            z_index: 1,
            rotation: 0.0,
        },
        url: "clip.mp4".to_owned(),
        auto_play: true,
        looping: true,
        muted: false,
        hide_video: None,
        hide_audio: Some(true),
    };
    let json = serde_json::to_value(&v).unwrap();
    assert_eq!(json["loop"], true);
    assert_eq!(json["autoPlay"], true);
    assert_eq!(json["hideAudio"], true);
    assert_eq!(json["y"], "50%");
    assert_eq!(json["zIndex"], 1);
    assert!(json.get("hideVideo").is_none());
    assert!(json.get("preset").is_none());

    let back: VideoElement = serde_json::from_value(json).unwrap();
    assert_eq!(back, v);
}

#[test]
fn clamp_unit_handles_non_finite() {
    assert_eq!(clamp_unit(1.5, 1.0), 1.0);
    assert_eq!(clamp_unit(-0.5, 1.0), 0.0);
    assert_eq!(clamp_unit(f64::NAN, 0.25), 0.25);
}
