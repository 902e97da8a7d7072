use crate::foundation::error::{SongslideError, SongslideResult};
use crate::parse::canonical::PartialTemplate;

/// Turns text in the configuration format back into structured template fields.
///
/// Implementations must accept everything [`crate::serialize_template`] produces. A rejection is
/// reported as [`SongslideError::Parse`] carrying a user-facing message.
pub trait TemplateParser {
    /// Parse `text`, or explain why it is not a template.
    fn validate(&self, text: &str) -> SongslideResult<PartialTemplate>;
}

impl<F> TemplateParser for F
where
    F: Fn(&str) -> SongslideResult<PartialTemplate>,
{
    fn validate(&self, text: &str) -> SongslideResult<PartialTemplate> {
        self(text)
    }
}

/// Wire shape of a remote validator reply: `{ "valid": true, "template": {..} }` or
/// `{ "valid": false, "error": ".." }`.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ValidationResponse {
    /// Whether the text parsed.
    pub valid: bool,
    /// Parsed fields when valid.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template: Option<PartialTemplate>,
    /// Reason when invalid.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ValidationResponse {
    /// Successful reply.
    pub fn accepted(template: PartialTemplate) -> Self {
        Self {
            valid: true,
            template: Some(template),
            error: None,
        }
    }

    /// Rejection with a user-facing message.
    pub fn rejected(error: impl Into<String>) -> Self {
        Self {
            valid: false,
            template: None,
            error: Some(error.into()),
        }
    }

    /// Collapse into a parse result.
    pub fn into_result(self) -> SongslideResult<PartialTemplate> {
        match (self.valid, self.template) {
            (true, Some(template)) => Ok(template),
            (true, None) => Err(SongslideError::parse(
                "validator accepted the text but returned no template",
            )),
            (false, _) => Err(SongslideError::parse(
                self.error
                    .unwrap_or_else(|| "template text is not valid".to_owned()),
            )),
        }
    }
}

impl From<SongslideResult<PartialTemplate>> for ValidationResponse {
    fn from(result: SongslideResult<PartialTemplate>) -> Self {
        match result {
            Ok(template) => Self::accepted(template),
            Err(e) => Self::rejected(e.user_message()),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/parse/response.rs"]
mod tests;
