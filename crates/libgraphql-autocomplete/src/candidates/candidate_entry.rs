use crate::candidates::CandidateType;

/// A single completion candidate.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct CandidateEntry {
    pub(crate) deprecation_reason: Option<String>,
    pub(crate) description: Option<String>,
    pub(crate) text: String,
    pub(crate) type_ref: Option<CandidateType>,
}
impl CandidateEntry {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            deprecation_reason: None,
            description: None,
            text: text.into(),
            type_ref: None,
        }
    }

    pub fn deprecation_reason(&self) -> Option<&str> {
        self.deprecation_reason.as_deref()
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// The text inserted when this candidate is accepted.
    pub fn text(&self) -> &str {
        self.text.as_str()
    }

    pub fn type_ref(&self) -> Option<&CandidateType> {
        self.type_ref.as_ref()
    }

    pub fn with_deprecation_reason(mut self, reason: Option<&str>) -> Self {
        self.deprecation_reason = reason.map(str::to_string);
        self
    }

    pub fn with_description(mut self, description: Option<&str>) -> Self {
        self.description = description.map(str::to_string);
        self
    }

    pub fn with_type(mut self, type_ref: CandidateType) -> Self {
        self.type_ref = Some(type_ref);
        self
    }
}
