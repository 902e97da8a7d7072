/// Convenience result type used across songslide.
pub type SongslideResult<T> = Result<T, SongslideError>;

/// Top-level error taxonomy used by model, parser and editor APIs.
///
/// Malformed positions and dimensions never appear in this taxonomy: they are
/// absorbed where they occur and degrade to `0`.
#[derive(thiserror::Error, Debug)]
pub enum SongslideError {
    /// A structural model operation was given an unknown slide, element or kind.
    #[error("validation error: {0}")]
    Validation(String),

    /// The text format was rejected by a parser collaborator.
    #[error("parse error: {0}")]
    Parse(String),

    /// Errors when serializing or deserializing the persisted document.
    #[error("serialization error: {0}")]
    Serde(String),

    /// An error raised by host code, such as a storage or transport failure.
    ///
    /// Songslide never builds this variant itself. It exists so parser collaborators and
    /// callers can fold their own `anyhow` errors into [`SongslideResult`] with `?`.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl SongslideError {
    /// Build a [`SongslideError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`SongslideError::Parse`] value.
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }

    /// Build a [`SongslideError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }

    /// Message suitable for a user-facing banner (no taxonomy prefix).
    pub fn user_message(&self) -> String {
        match self {
            Self::Validation(m) | Self::Parse(m) | Self::Serde(m) => m.clone(),
            Self::Other(e) => e.to_string(),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
