//! Persisted template document as exchanged with the storage service.
//!
//! The structured template and its text form travel together; `yaml` is re-serialized from the
//! template on every save so the two never drift.

use crate::foundation::error::{SongslideError, SongslideResult};
use crate::parse::response::TemplateParser;
use crate::serialize::template::serialize_template;
use crate::template::model::Template;

/// A template plus the fields the storage service owns.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateDocument {
    /// Server-assigned; absent until first saved.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Authored content.
    #[serde(flatten)]
    pub template: Template,
    /// Default template of its centers.
    #[serde(default)]
    pub is_default: bool,
    /// Centers the template belongs to.
    #[serde(default)]
    pub center_ids: Vec<String>,
    /// Text form of `template`.
    #[serde(default)]
    pub yaml: String,
}

impl TemplateDocument {
    /// An unsaved document whose text form matches `template`.
    pub fn new(template: Template) -> Self {
        let yaml = serialize_template(&template);
        Self {
            id: None,
            template,
            is_default: false,
            center_ids: Vec::new(),
            yaml,
        }
    }

    /// Build a document from its text form alone.
    pub fn from_yaml<P>(text: &str, parser: &P) -> SongslideResult<Self>
    where
        P: TemplateParser + ?Sized,
    {
        let template = parser.validate(text)?.into_template();
        Ok(Self {
            yaml: text.to_owned(),
            ..Self::new(template)
        })
    }

    /// Replace the structured fields from `yaml`, keeping everything the server owns.
    pub fn reload_from_yaml<P>(&self, parser: &P) -> SongslideResult<Self>
    where
        P: TemplateParser + ?Sized,
    {
        let template = parser.validate(&self.yaml)?.merge_into(&self.template);
        Ok(Self {
            template,
            ..self.clone()
        })
    }

    /// Same document with `template` swapped in and the text form re-serialized.
    pub fn with_template(&self, template: Template) -> Self {
        let mut next = Self {
            template,
            ..self.clone()
        };
        next.sync_yaml();
        next
    }

    /// Re-serialize `yaml` from `template`.
    pub fn sync_yaml(&mut self) {
        self.yaml = serialize_template(&self.template);
    }

    /// Whether `yaml` matches `template`.
    pub fn is_yaml_in_sync(&self) -> bool {
        self.yaml == serialize_template(&self.template)
    }

    /// Encode for the storage service.
    pub fn to_json(&self) -> SongslideResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| SongslideError::serde(e.to_string()))
    }

    /// Decode a stored document. Structural template invariants are checked.
    pub fn from_json(json: &str) -> SongslideResult<Self> {
        let doc: Self =
            serde_json::from_str(json).map_err(|e| SongslideError::serde(e.to_string()))?;
        let count = doc.template.slides.len();
        if count == 0 {
            return Err(SongslideError::serde("document template has no slides"));
        }
        if doc.template.reference_slide_index >= count {
            return Err(SongslideError::serde(format!(
                "referenceSlideIndex {} is out of range for {count} slides",
                doc.template.reference_slide_index
            )));
        }
        Ok(doc)
    }
}

#[cfg(test)]
#[path = "../tests/unit/document.rs"]
mod tests;
