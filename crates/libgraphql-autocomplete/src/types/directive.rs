use crate::ast;
use crate::loc;
use crate::types::Parameter;
use crate::types::TypeAnnotation;
use indexmap::IndexMap;

/// The places in a GraphQL document where a directive may be applied.
///
/// See: <https://spec.graphql.org/October2021/#DirectiveLocations>
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, serde::Deserialize, serde::Serialize)]
pub enum DirectiveLocation {
    // Executable locations
    Field,
    FragmentDefinition,
    FragmentSpread,
    InlineFragment,
    Mutation,
    Query,
    Subscription,
    VariableDefinition,

    // Type-system locations
    ArgumentDefinition,
    Enum,
    EnumValue,
    FieldDefinition,
    InputFieldDefinition,
    InputObject,
    Interface,
    Object,
    Scalar,
    Schema,
    Union,
}
impl DirectiveLocation {
    /// The `SCREAMING_CASE` name used for this location in SDL.
    pub fn graphql_name(&self) -> &'static str {
        match self {
            Self::ArgumentDefinition => "ARGUMENT_DEFINITION",
            Self::Enum => "ENUM",
            Self::EnumValue => "ENUM_VALUE",
            Self::Field => "FIELD",
            Self::FieldDefinition => "FIELD_DEFINITION",
            Self::FragmentDefinition => "FRAGMENT_DEFINITION",
            Self::FragmentSpread => "FRAGMENT_SPREAD",
            Self::InlineFragment => "INLINE_FRAGMENT",
            Self::InputFieldDefinition => "INPUT_FIELD_DEFINITION",
            Self::InputObject => "INPUT_OBJECT",
            Self::Interface => "INTERFACE",
            Self::Mutation => "MUTATION",
            Self::Object => "OBJECT",
            Self::Query => "QUERY",
            Self::Scalar => "SCALAR",
            Self::Schema => "SCHEMA",
            Self::Subscription => "SUBSCRIPTION",
            Self::Union => "UNION",
            Self::VariableDefinition => "VARIABLE_DEFINITION",
        }
    }
}

impl std::convert::From<&ast::schema::DirectiveLocation> for DirectiveLocation {
    fn from(value: &ast::schema::DirectiveLocation) -> Self {
        use ast::schema::DirectiveLocation as Ast;
        match value {
            Ast::ArgumentDefinition => Self::ArgumentDefinition,
            Ast::Enum => Self::Enum,
            Ast::EnumValue => Self::EnumValue,
            Ast::Field => Self::Field,
            Ast::FieldDefinition => Self::FieldDefinition,
            Ast::FragmentDefinition => Self::FragmentDefinition,
            Ast::FragmentSpread => Self::FragmentSpread,
            Ast::InlineFragment => Self::InlineFragment,
            Ast::InputFieldDefinition => Self::InputFieldDefinition,
            Ast::InputObject => Self::InputObject,
            Ast::Interface => Self::Interface,
            Ast::Mutation => Self::Mutation,
            Ast::Object => Self::Object,
            Ast::Query => Self::Query,
            Ast::Scalar => Self::Scalar,
            Ast::Schema => Self::Schema,
            Ast::Subscription => Self::Subscription,
            Ast::Union => Self::Union,
            Ast::VariableDefinition => Self::VariableDefinition,
        }
    }
}

/// Represents a directive definition: either one of the built-ins every
/// schema carries (`@skip`, `@include`, `@deprecated`, `@specifiedBy`) or a
/// custom `directive @name(...) on ...` definition.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Directive {
    pub(crate) def_location: loc::SourceLocation,
    pub(crate) description: Option<String>,
    pub(crate) locations: Vec<DirectiveLocation>,
    pub(crate) name: String,
    pub(crate) parameters: IndexMap<String, Parameter>,
    pub(crate) repeatable: bool,
}
impl Directive {
    /// The directives GraphQL defines implicitly for every schema.
    pub(crate) fn builtins() -> Vec<Directive> {
        let non_null_bool = || TypeAnnotation::builtin_named("Boolean", false);
        vec![
            Self::builtin(
                "skip",
                "Directs the executor to skip this field or fragment when \
                the `if` argument is true.",
                vec![
                    Parameter::builtin("if", non_null_bool(), "Skipped when true.", None),
                ],
                vec![
                    DirectiveLocation::Field,
                    DirectiveLocation::FragmentSpread,
                    DirectiveLocation::InlineFragment,
                ],
            ),
            Self::builtin(
                "include",
                "Directs the executor to include this field or fragment only \
                when the `if` argument is true.",
                vec![
                    Parameter::builtin("if", non_null_bool(), "Included when true.", None),
                ],
                vec![
                    DirectiveLocation::Field,
                    DirectiveLocation::FragmentSpread,
                    DirectiveLocation::InlineFragment,
                ],
            ),
            Self::builtin(
                "deprecated",
                "Marks an element of a GraphQL schema as no longer supported.",
                vec![
                    Parameter::builtin(
                        "reason",
                        TypeAnnotation::builtin_named("String", true),
                        "Explains why this element was deprecated, usually \
                        also including a suggestion for how to access \
                        supported similar data.",
                        Some("\"No longer supported\""),
                    ),
                ],
                vec![
                    DirectiveLocation::ArgumentDefinition,
                    DirectiveLocation::EnumValue,
                    DirectiveLocation::FieldDefinition,
                    DirectiveLocation::InputFieldDefinition,
                ],
            ),
            Self::builtin(
                "specifiedBy",
                "Exposes a URL that specifies the behavior of this scalar.",
                vec![
                    Parameter::builtin(
                        "url",
                        TypeAnnotation::builtin_named("String", false),
                        "The URL that specifies the behavior of this scalar.",
                        None,
                    ),
                ],
                vec![DirectiveLocation::Scalar],
            ),
        ]
    }

    fn builtin(
        name: &str,
        description: &str,
        parameters: Vec<Parameter>,
        locations: Vec<DirectiveLocation>,
    ) -> Self {
        Self {
            def_location: loc::SourceLocation::GraphQLBuiltIn,
            description: Some(description.to_string()),
            locations,
            name: name.to_string(),
            parameters: parameters.into_iter()
                .map(|param| (param.name().to_string(), param))
                .collect(),
            repeatable: false,
        }
    }

    pub fn def_location(&self) -> &loc::SourceLocation {
        &self.def_location
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn is_builtin(&self) -> bool {
        self.def_location == loc::SourceLocation::GraphQLBuiltIn
    }

    pub fn is_repeatable(&self) -> bool {
        self.repeatable
    }

    pub fn is_valid_at(&self, location: DirectiveLocation) -> bool {
        self.locations.contains(&location)
    }

    /// The locations this directive may be applied at, in declaration order.
    pub fn locations(&self) -> &[DirectiveLocation] {
        self.locations.as_slice()
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// The arguments this directive accepts, in declaration order.
    pub fn parameters(&self) -> &IndexMap<String, Parameter> {
        &self.parameters
    }
}
