use super::*;

const W: f64 = 1920.0;
const H: f64 = 1080.0;

#[test]
fn percent_resolves_against_axis_extent() {
    assert_eq!(
        resolve_position(Some("50%"), None, Axis::X, W, 100.0, W, H),
        960.0
    );
    assert_eq!(
        resolve_position(Some("10%"), Some("center"), Axis::Y, H, 100.0, W, H),
        108.0
    );
}

#[test]
fn explicit_pixels_win_over_preset() {
    assert_eq!(
        resolve_position(Some("125px"), Some("bottom-right"), Axis::X, W, 100.0, W, H),
        125.0
    );
    assert_eq!(
        resolve_position(Some("-20"), None, Axis::Y, H, 100.0, W, H),
        -20.0
    );
}

#[test]
fn malformed_explicit_value_is_zero() {
    assert_eq!(
        resolve_position(Some("wide"), Some("center"), Axis::X, W, 100.0, W, H),
        0.0
    );
}

#[test]
fn blank_explicit_value_falls_through_to_preset() {
    assert_eq!(
        resolve_position(Some("  "), Some("top-left"), Axis::X, W, 100.0, W, H),
        PRESET_MARGIN
    );
}

#[test]
fn presets_form_a_three_by_three_grid() {
    assert_eq!(
        resolve_position(None, Some("center"), Axis::X, W, 200.0, W, H),
        860.0
    );
    assert_eq!(
        resolve_position(None, Some("top-left"), Axis::Y, H, 100.0, W, H),
        40.0
    );
    assert_eq!(
        resolve_position(None, Some("bottom-right"), Axis::X, W, 200.0, W, H),
        W - 200.0 - 40.0
    );
    assert_eq!(
        resolve_position(None, Some("bottom-center"), Axis::Y, H, 100.0, W, H),
        H - 100.0 - 40.0
    );
    assert_eq!(
        resolve_position(None, Some("center-left"), Axis::Y, H, 100.0, W, H),
        490.0
    );
}

#[test]
fn unknown_or_missing_inputs_resolve_to_zero() {
    assert_eq!(
        resolve_position(None, Some("middle"), Axis::X, W, 100.0, W, H),
        0.0
    );
    assert_eq!(resolve_position(None, None, Axis::X, W, 100.0, W, H), 0.0);
    assert_eq!(
        resolve_position(None, Some("center"), Axis::X, f64::NAN, 1.0, f64::NAN, H),
        0.0
    );
}

#[test]
fn typed_position_matches_string_contract() {
    let slide = SlideSize::new(W, H);
    let element = Size::new(200.0, 100.0);
    for preset in PositionPreset::ALL {
        let p = Position::Preset(preset).resolve(slide, element);
        let x = resolve_position(None, Some(preset.as_str()), Axis::X, W, 200.0, W, H);
        let y = resolve_position(None, Some(preset.as_str()), Axis::Y, H, 100.0, W, H);
        assert_eq!(p, Point::new(x, y), "preset {preset}");
    }

    let explicit = Position::explicit(Dimension::percent(25.0), Dimension::px(12.0));
    assert_eq!(explicit.resolve(slide, element), Point::new(480.0, 12.0));
}

#[test]
fn resolve_box_uses_percent_sizes() {
    let slide = SlideSize::new(W, H);
    let rect = resolve_box(
        &Position::Preset(PositionPreset::Center),
        Dimension::percent(50.0),
        Dimension::percent(50.0),
        slide,
    );
    assert_eq!(rect, Rect::new(480.0, 270.0, 1440.0, 810.0));
}

#[test]
fn serde_wire_form_is_loose_fields() {
    let json = serde_json::to_value(Position::Preset(PositionPreset::TopRight)).unwrap();
    assert_eq!(json, serde_json::json!({ "preset": "top-right" }));

    let json = serde_json::to_value(Position::explicit(Dimension::px(1.0), Dimension::px(2.0)))
        .unwrap();
    assert_eq!(json, serde_json::json!({ "x": "1px", "y": "2px" }));

    // Explicit coordinates take precedence over a stale preset.
    let p: Position =
        serde_json::from_value(serde_json::json!({ "x": 5, "preset": "center" })).unwrap();
    assert_eq!(p, Position::explicit(Dimension::px(5.0), Dimension::ZERO));
}
