use crate::types::GraphQLType;

/// The category of a [`GraphQLType`], without its definition.
///
/// Carried on completion candidates so that renderers can tell an enum from
/// an object (and so on) without holding on to the schema.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, serde::Deserialize, serde::Serialize)]
pub enum GraphQLTypeKind {
    Bool,
    Enum,
    Float,
    ID,
    InputObject,
    Int,
    Interface,
    Object,
    Scalar,
    String,
    Union,
}
impl GraphQLTypeKind {
    /// Interfaces and unions.
    pub fn is_abstract(&self) -> bool {
        matches!(self, Self::Interface | Self::Union)
    }

    /// Kinds a selection set can be made against.
    pub fn is_composite(&self) -> bool {
        matches!(self, Self::Interface | Self::Object | Self::Union)
    }

    /// Kinds usable for arguments, variables and input fields.
    pub fn is_input(&self) -> bool {
        !self.is_composite()
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Bool => "Boolean",
            Self::Enum => "Enum",
            Self::Float => "Float",
            Self::ID => "ID",
            Self::InputObject => "InputObject",
            Self::Int => "Int",
            Self::Interface => "Interface",
            Self::Object => "Object",
            Self::Scalar => "Scalar",
            Self::String => "String",
            Self::Union => "Union",
        }
    }
}
impl std::fmt::Display for GraphQLTypeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
impl From<&GraphQLType> for GraphQLTypeKind {
    fn from(type_: &GraphQLType) -> Self {
        match type_ {
            GraphQLType::Bool => Self::Bool,
            GraphQLType::Enum(_) => Self::Enum,
            GraphQLType::Float => Self::Float,
            GraphQLType::ID => Self::ID,
            GraphQLType::InputObject(_) => Self::InputObject,
            GraphQLType::Int => Self::Int,
            GraphQLType::Interface(_) => Self::Interface,
            GraphQLType::Object(_) => Self::Object,
            GraphQLType::Scalar(_) => Self::Scalar,
            GraphQLType::String => Self::String,
            GraphQLType::Union(_) => Self::Union,
        }
    }
}
