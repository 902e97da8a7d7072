use super::*;

#[test]
fn plain_strings_stay_bare() {
    for s in ["plain", "Amazing Grace", "top-left", "bold", "text-1a2b"] {
        assert_eq!(style_for(s), Style::Plain, "{s:?}");
        assert_eq!(inline(s), s);
    }
}

#[test]
fn reserved_punctuation_forces_single_quotes() {
    assert_eq!(inline("a:b"), "'a:b'");
    assert_eq!(inline("#ffffff"), "'#ffffff'");
    assert_eq!(inline("it's"), "'it''s'");
    assert_eq!(inline("50%"), "'50%'");
    assert_eq!(inline("Tom & Jerry"), "'Tom & Jerry'");
    assert_eq!(inline("say \"hi\""), "'say \"hi\"'");
}

#[test]
fn ambiguous_scalars_are_quoted() {
    for s in ["", " lead", "trail ", "true", "No", "null", "~", "12", "-3.5", "0x1F", "1e3", ".inf", "- item", "700"] {
        assert_eq!(style_for(s), Style::SingleQuoted, "{s:?}");
    }
}

#[test]
fn multiline_goes_to_a_block_unless_blank() {
    assert_eq!(style_for("Line: one\nLine two"), Style::Literal);
    assert_eq!(style_for("\n\n"), Style::DoubleQuoted);
    assert_eq!(style_for("a\r\nb"), Style::DoubleQuoted);
}

#[test]
fn double_quoted_escapes_control_characters() {
    assert_eq!(double_quoted("a\r\nb\\\"c\u{7}"), "\"a\\r\\nb\\\\\\\"c\\x07\"");
    assert_eq!(double_quoted("\u{2028}"), "\"\\u2028\"");
}

#[test]
fn numbers_and_dimensions() {
    assert_eq!(number(0.5), "0.5");
    assert_eq!(number(1.0), "1");
    assert_eq!(number(-0.0), "0");
    assert_eq!(number(f64::NAN), "0");
    assert_eq!(dimension(Dimension::px(119.6)), "120px");
    assert_eq!(dimension(Dimension::px(-20.0)), "-20px");
    assert_eq!(dimension(Dimension::percent(12.5)), "'12.5%'");
}

#[test]
fn only_pixels_are_rounded() {
    assert_eq!(dimension(Dimension::px(0.4)), "0px");
    assert_eq!(dimension(Dimension::px(-0.4)), "0px");
    assert_eq!(dimension(Dimension::percent(33.25)), "'33.25%'");
    assert_eq!(dimension(Dimension::percent(-0.5)), "'-0.5%'");
    assert_eq!(
        Dimension::parse("33.25%").map(dimension).as_deref(),
        Some("'33.25%'")
    );
}
