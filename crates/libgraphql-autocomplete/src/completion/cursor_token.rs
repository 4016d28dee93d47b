use thiserror::Error;

/// The lexical class an editor's GraphQL lexer assigned to a token.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, serde::Deserialize, serde::Serialize)]
pub enum TokenClass {
    Atom,
    Attribute,
    Builtin,
    Comment,
    Def,
    Invalid,
    Keyword,
    Number,
    Property,
    Punctuation,
    Qualifier,
    String,
    StringSpecial,
    Variable,
}
impl TokenClass {
    const ALL: [TokenClass; 14] = [
        Self::Atom,
        Self::Attribute,
        Self::Builtin,
        Self::Comment,
        Self::Def,
        Self::Invalid,
        Self::Keyword,
        Self::Number,
        Self::Property,
        Self::Punctuation,
        Self::Qualifier,
        Self::String,
        Self::StringSpecial,
        Self::Variable,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Atom => "atom",
            Self::Attribute => "attribute",
            Self::Builtin => "builtin",
            Self::Comment => "comment",
            Self::Def => "def",
            Self::Invalid => "invalid",
            Self::Keyword => "keyword",
            Self::Number => "number",
            Self::Property => "property",
            Self::Punctuation => "punctuation",
            Self::Qualifier => "qualifier",
            Self::String => "string",
            Self::StringSpecial => "stringspecial",
            Self::Variable => "variable",
        }
    }
}
impl std::fmt::Display for TokenClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
impl std::str::FromStr for TokenClass {
    type Err = TokenClassParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // CodeMirror-style lexers call the special-string class `string-2`.
        if s == "string-2" {
            return Ok(Self::StringSpecial);
        }
        Self::ALL
            .into_iter()
            .find(|class| class.name() == s)
            .ok_or_else(|| TokenClassParseError {
                class_name: s.to_string(),
            })
    }
}

#[derive(Clone, Debug, Eq, Error, PartialEq)]
#[error("`{class_name}` is not a known token class")]
pub struct TokenClassParseError {
    pub class_name: String,
}

/// The token under (or immediately before) the cursor.
///
/// `start` and `end` are character offsets within the cursor's line, `end`
/// exclusive.
#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct CursorToken {
    /// `None` when the cursor sits on whitespace or otherwise outside any
    /// classified token.
    pub token_class: Option<TokenClass>,
    pub string: String,
    pub start: usize,
    pub end: usize,
}
impl CursorToken {
    pub fn new(
        token_class: Option<TokenClass>,
        string: impl Into<String>,
        start: usize,
        end: usize,
    ) -> Self {
        Self {
            token_class,
            string: string.into(),
            start,
            end,
        }
    }
}
