use super::*;

#[test]
fn parse_accepts_px_percent_and_bare_numbers() {
    assert_eq!(Dimension::parse("120"), Some(Dimension::px(120.0)));
    assert_eq!(Dimension::parse("120px"), Some(Dimension::px(120.0)));
    assert_eq!(Dimension::parse(" -3.5px "), Some(Dimension::px(-3.5)));
    assert_eq!(Dimension::parse("50%"), Some(Dimension::percent(50.0)));
    assert_eq!(Dimension::parse("12.5 %"), Some(Dimension::percent(12.5)));
}

#[test]
fn parse_rejects_malformed_input() {
    for s in ["", "px", "%", "abc", "12em", "1e999px", "NaN", "inf%"] {
        assert_eq!(Dimension::parse(s), None, "input {s:?}");
        assert_eq!(Dimension::parse_lossy(s), Dimension::ZERO, "input {s:?}");
    }
}

#[test]
fn resolve_scales_percent_by_extent() {
    assert_eq!(Dimension::percent(50.0).resolve(1920.0), 960.0);
    assert_eq!(Dimension::px(33.0).resolve(1920.0), 33.0);
    assert_eq!(Dimension::percent(10.0).resolve(f64::INFINITY), 0.0);
}

#[test]
fn normalized_rounds_pixels_only() {
    assert_eq!(Dimension::px(10.4).normalized(), Dimension::px(10.0));
    assert_eq!(Dimension::px(10.5).normalized(), Dimension::px(11.0));
    assert_eq!(Dimension::px(-0.4).normalized().to_string(), "0px");
    assert_eq!(
        Dimension::percent(33.3).normalized(),
        Dimension::percent(33.3)
    );
    assert_eq!(Dimension::px(f64::NAN).normalized(), Dimension::px(0.0));
}

#[test]
fn display_and_serde_use_text_form() {
    assert_eq!(Dimension::px(12.0).to_string(), "12px");
    assert_eq!(Dimension::percent(7.5).to_string(), "7.5%");

    let json = serde_json::to_string(&Dimension::percent(50.0)).unwrap();
    assert_eq!(json, "\"50%\"");
    let from_num: Dimension = serde_json::from_str("42").unwrap();
    assert_eq!(from_num, Dimension::px(42.0));
    let from_str: Dimension = serde_json::from_str("\"42px\"").unwrap();
    assert_eq!(from_str, Dimension::px(42.0));
    assert!(serde_json::from_str::<Dimension>("\"wide\"").is_err());
}
