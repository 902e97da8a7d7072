use super::*;
use crate::position::resolver::Position;

fn text(id: &str, z: i32) -> TextElement {
    TextElement {
        layer: Layer {
            id: ElementId::new(id),
            position: Position::default(),
            width: Dimension::px(100.0),
            height: Dimension::px(40.0),
            opacity: 1.0,
            z_index: z,
            rotation: 0.0,
        },
        content: id.to_owned(),
        font_size: Dimension::px(24.0),
        font_family: None,
        font_weight: "normal".to_owned(),
        font_style: None,
        text_align: TextAlign::Center,
        color: "#fff".to_owned(),
        max_width: None,
    }
}

fn image(id: &str, z: i32) -> ImageElement {
    ImageElement {
        layer: Layer {
            z_index: z,
            ..text(id, z).layer
        },
        url: format!("https://cdn.example/{id}.png"),
    }
}

#[test]
fn elements_iterate_in_kind_order() {
    let mut slide = Slide::default();
    slide.push(Element::Text(text("t1", 2)));
    slide.push(Element::Image(image("i1", 1)));
    slide.push(Element::Text(text("t2", 2)));

    let ids: Vec<_> = slide.elements().map(|e| e.id().as_str().to_owned()).collect();
    assert_eq!(ids, ["i1", "t1", "t2"]);
    assert_eq!(slide.element_count(), 3);
}

#[test]
fn remove_finds_element_in_any_collection() {
    let mut slide = Slide::default();
    slide.push(Element::Image(image("i1", 1)));
    slide.push(Element::Text(text("t1", 2)));

    let removed = slide.remove(&ElementId::new("t1")).unwrap();
    assert_eq!(removed.kind(), ElementKind::Text);
    assert!(!slide.contains(&ElementId::new("t1")));
    assert!(slide.remove(&ElementId::new("missing")).is_none());
    assert!(slide.contains(&ElementId::new("i1")));
}

#[test]
fn max_z_index_is_per_kind() {
    let mut slide = Slide::default();
    assert_eq!(slide.max_z_index(ElementKind::Text), None);
    slide.push(Element::Text(text("t1", 4)));
    slide.push(Element::Image(image("i1", 9)));
    assert_eq!(slide.max_z_index(ElementKind::Text), Some(4));
}

#[test]
fn song_styles_iterate_in_slot_order() {
    let style = SongContentStyle {
        x: Dimension::px(0.0),
        y: Dimension::px(0.0),
        width: Dimension::px(10.0),
        height: None,
        font_size: Dimension::px(12.0),
        font_weight: "bold".to_owned(),
        font_style: None,
        font_family: None,
        text_align: TextAlign::Left,
        color: "#000".to_owned(),
        y_position: None,
    };
    let mut styles = SongStyles::default();
    assert!(styles.is_empty());
    *styles.slot_mut(SongStyleSlot::BottomRight) = Some(style.clone());
    *styles.slot_mut(SongStyleSlot::Title) = Some(style);

    let slots: Vec<_> = styles.iter().map(|(slot, _)| slot).collect();
    assert_eq!(slots, [SongStyleSlot::Title, SongStyleSlot::BottomRight]);
    assert_eq!(SongStyleSlot::Lyrics.key(), "songLyricsStyle");
}

#[test]
fn background_serde_uses_type_key() {
    let bg = Background {
        kind: BackgroundKind::Image,
        value: "bg.jpg".to_owned(),
    };
    let json = serde_json::to_value(&bg).unwrap();
    assert_eq!(json, serde_json::json!({ "type": "image", "value": "bg.jpg" }));
    assert_eq!(BackgroundKind::parse(" video "), Some(BackgroundKind::Video));
    assert_eq!(BackgroundKind::parse("gradient"), None);
}

#[test]
fn empty_slide_detection_includes_background() {
    let mut slide = Slide::default();
    assert!(slide.is_empty());
    slide.background = Some(Background::default());
    assert!(!slide.is_empty());
}
