use super::*;

#[test]
fn wire_shape_round_trips_through_json() {
    let ok: ValidationResponse = serde_json::from_value(serde_json::json!({
        "valid": true,
        "template": { "name": "Remote", "referenceSlideIndex": 0 }
    }))
    .unwrap();
    let partial = ok.into_result().unwrap();
    assert_eq!(partial.name.as_deref(), Some("Remote"));
    assert_eq!(partial.reference_slide_index, Some(0));

    let bad: ValidationResponse = serde_json::from_value(serde_json::json!({
        "valid": false,
        "error": "line 3: bad indentation"
    }))
    .unwrap();
    let err = bad.into_result().unwrap_err();
    assert_eq!(err.user_message(), "line 3: bad indentation");
}

#[test]
fn accepted_without_template_is_an_error() {
    let r = ValidationResponse {
        valid: true,
        template: None,
        error: None,
    };
    assert!(matches!(r.into_result(), Err(SongslideError::Parse(_))));
}

#[test]
fn closures_act_as_parsers() {
    let parser = |text: &str| -> SongslideResult<PartialTemplate> {
        if text.is_empty() {
            Err(SongslideError::parse("empty"))
        } else {
            Ok(PartialTemplate {
                name: Some(text.to_owned()),
                ..PartialTemplate::default()
            })
        }
    };
    assert_eq!(parser.validate("x").unwrap().name.as_deref(), Some("x"));

    let reply = ValidationResponse::from(parser.validate(""));
    assert_eq!(reply, ValidationResponse::rejected("empty"));
    let json = serde_json::to_value(&reply).unwrap();
    assert_eq!(json, serde_json::json!({ "valid": false, "error": "empty" }));
}
