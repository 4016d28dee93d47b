use crate::grammar::GrammarKind;
use crate::grammar::StateChainParseError;

/// One node of the chain of grammar states enclosing the cursor.
///
/// The textual form is `Kind[#step][:name][@type]`, e.g. `Field:hero` or
/// `InlineFragment#2@Human`. A zero step is omitted when printing.
#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct GrammarState {
    pub kind: GrammarKind,

    /// The sub-position within this state's production (e.g. `0` on an
    /// argument's name, `2` on its value).
    pub step: usize,

    /// Identifier text attached to the state (field, argument, directive or
    /// fragment name), if any has been typed yet.
    pub name: Option<String>,

    /// Raw type-name text. Only fragment-related states carry one.
    pub type_name: Option<String>,
}
impl GrammarState {
    pub fn new(kind: GrammarKind) -> Self {
        Self {
            kind,
            step: 0,
            name: None,
            type_name: None,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_step(mut self, step: usize) -> Self {
        self.step = step;
        self
    }

    pub fn with_type_name(mut self, type_name: impl Into<String>) -> Self {
        self.type_name = Some(type_name.into());
        self
    }
}
impl std::fmt::Display for GrammarState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.kind)?;
        if self.step != 0 {
            write!(f, "#{}", self.step)?;
        }
        if let Some(name) = &self.name {
            write!(f, ":{name}")?;
        }
        if let Some(type_name) = &self.type_name {
            write!(f, "@{type_name}")?;
        }
        Ok(())
    }
}
impl std::str::FromStr for GrammarState {
    type Err = StateChainParseError;

    fn from_str(segment: &str) -> Result<Self, Self::Err> {
        let segment = segment.trim();
        let (rest, type_name) = match segment.split_once('@') {
            Some((rest, type_name)) => (rest, Some(type_name)),
            None => (segment, None),
        };
        let (rest, name) = match rest.split_once(':') {
            Some((rest, name)) => (rest, Some(name)),
            None => (rest, None),
        };
        let (kind_name, step) = match rest.split_once('#') {
            Some((kind_name, step)) => {
                let step = step.parse::<usize>().map_err(|_| {
                    StateChainParseError::InvalidStep {
                        segment: segment.to_string(),
                    }
                })?;
                (kind_name, step)
            },
            None => (rest, 0),
        };

        Ok(Self {
            kind: kind_name.parse()?,
            step,
            name: name.filter(|name| !name.is_empty()).map(str::to_string),
            type_name: type_name.filter(|t| !t.is_empty()).map(str::to_string),
        })
    }
}
