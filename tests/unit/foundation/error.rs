use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        SongslideError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(SongslideError::parse("x").to_string().contains("parse error:"));
    assert!(
        SongslideError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = SongslideError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
    assert_eq!(err.user_message(), "boom");
}

#[test]
fn user_message_drops_prefix() {
    let err = SongslideError::parse("$.name: expected a string");
    assert_eq!(err.user_message(), "$.name: expected a string");
}

#[test]
fn host_errors_convert_with_question_mark() {
    fn fetch() -> anyhow::Result<String> {
        Err(anyhow::anyhow!("validator unreachable"))
    }
    fn validate_remote() -> SongslideResult<String> {
        Ok(fetch()?)
    }

    let err = validate_remote().unwrap_err();
    assert!(matches!(err, SongslideError::Other(_)));
    assert_eq!(err.user_message(), "validator unreachable");
}
