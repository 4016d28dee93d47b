use crate::grammar::StateChainParseError;

/// Identifies the grammar production a [`GrammarState`] sits inside.
///
/// [`GrammarState`]: crate::grammar::GrammarState
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, serde::Deserialize, serde::Serialize)]
pub enum GrammarKind {
    AliasedField,
    Argument,
    Arguments,
    BooleanValue,
    Comment,
    DefaultValue,
    Directive,
    Document,
    EnumValue,
    Field,
    FragmentDefinition,
    FragmentSpread,
    InlineFragment,
    Invalid,
    ListType,
    ListValue,
    Mutation,
    NamedType,
    NonNullType,
    NullValue,
    NumberValue,
    ObjectField,
    ObjectValue,
    Query,
    Selection,
    SelectionSet,
    ShortQuery,
    StringValue,
    Subscription,
    TypeCondition,
    Variable,
    VariableDefinition,
    VariableDefinitions,
}
impl GrammarKind {
    pub const ALL: [GrammarKind; 33] = [
        Self::AliasedField,
        Self::Argument,
        Self::Arguments,
        Self::BooleanValue,
        Self::Comment,
        Self::DefaultValue,
        Self::Directive,
        Self::Document,
        Self::EnumValue,
        Self::Field,
        Self::FragmentDefinition,
        Self::FragmentSpread,
        Self::InlineFragment,
        Self::Invalid,
        Self::ListType,
        Self::ListValue,
        Self::Mutation,
        Self::NamedType,
        Self::NonNullType,
        Self::NullValue,
        Self::NumberValue,
        Self::ObjectField,
        Self::ObjectValue,
        Self::Query,
        Self::Selection,
        Self::SelectionSet,
        Self::ShortQuery,
        Self::StringValue,
        Self::Subscription,
        Self::TypeCondition,
        Self::Variable,
        Self::VariableDefinition,
        Self::VariableDefinitions,
    ];

    /// Indicates if this kind names a field selection (`name` or
    /// `alias: name`).
    pub fn is_field(&self) -> bool {
        matches!(self, Self::AliasedField | Self::Field)
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::AliasedField => "AliasedField",
            Self::Argument => "Argument",
            Self::Arguments => "Arguments",
            Self::BooleanValue => "BooleanValue",
            Self::Comment => "Comment",
            Self::DefaultValue => "DefaultValue",
            Self::Directive => "Directive",
            Self::Document => "Document",
            Self::EnumValue => "EnumValue",
            Self::Field => "Field",
            Self::FragmentDefinition => "FragmentDefinition",
            Self::FragmentSpread => "FragmentSpread",
            Self::InlineFragment => "InlineFragment",
            Self::Invalid => "Invalid",
            Self::ListType => "ListType",
            Self::ListValue => "ListValue",
            Self::Mutation => "Mutation",
            Self::NamedType => "NamedType",
            Self::NonNullType => "NonNullType",
            Self::NullValue => "NullValue",
            Self::NumberValue => "NumberValue",
            Self::ObjectField => "ObjectField",
            Self::ObjectValue => "ObjectValue",
            Self::Query => "Query",
            Self::Selection => "Selection",
            Self::SelectionSet => "SelectionSet",
            Self::ShortQuery => "ShortQuery",
            Self::StringValue => "StringValue",
            Self::Subscription => "Subscription",
            Self::TypeCondition => "TypeCondition",
            Self::Variable => "Variable",
            Self::VariableDefinition => "VariableDefinition",
            Self::VariableDefinitions => "VariableDefinitions",
        }
    }
}
impl std::fmt::Display for GrammarKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
impl std::str::FromStr for GrammarKind {
    type Err = StateChainParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.name() == s)
            .ok_or_else(|| StateChainParseError::UnknownGrammarKind {
                kind_name: s.to_string(),
            })
    }
}
