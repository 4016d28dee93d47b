use thiserror::Error;

/// A fragment defined elsewhere in the document (or project) that the host
/// can offer at a fragment spread.
#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct KnownFragment {
    pub description: Option<String>,
    pub name: String,
    pub type_condition: String,
}
impl KnownFragment {
    pub fn new(name: impl Into<String>, type_condition: impl Into<String>) -> Self {
        Self {
            description: None,
            name: name.into(),
            type_condition: type_condition.into(),
        }
    }
}
impl std::str::FromStr for KnownFragment {
    type Err = KnownFragmentParseError;

    /// Parse `Name:TypeCondition`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.split_once(':') {
            Some((name, type_condition))
                if !name.trim().is_empty() && !type_condition.trim().is_empty() =>
                Ok(Self::new(name.trim(), type_condition.trim())),
            _ => Err(KnownFragmentParseError {
                input: s.to_string(),
            }),
        }
    }
}

#[derive(Clone, Debug, Eq, Error, PartialEq)]
#[error("Expected `FragmentName:TypeName`, got `{input}`")]
pub struct KnownFragmentParseError {
    pub input: String,
}
