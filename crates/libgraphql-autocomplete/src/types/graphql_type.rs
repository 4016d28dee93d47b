use crate::loc;
use crate::types::EnumType;
use crate::types::Field;
use crate::types::GraphQLTypeKind;
use crate::types::InputObjectType;
use crate::types::InterfaceType;
use crate::types::ObjectType;
use crate::types::ScalarType;
use crate::types::UnionType;
use indexmap::IndexMap;

static BUILTIN_LOCATION: loc::SourceLocation = loc::SourceLocation::GraphQLBuiltIn;

/// Represents a defined GraphQL type.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub enum GraphQLType {
    Bool,
    Enum(EnumType),
    Float,
    ID,
    InputObject(InputObjectType),
    Int,
    Interface(InterfaceType),
    Object(ObjectType),
    Scalar(ScalarType),
    String,
    Union(UnionType),
}
impl GraphQLType {
    pub fn as_enum(&self) -> Option<&EnumType> {
        if let Self::Enum(type_) = self {
            Some(type_)
        } else {
            None
        }
    }

    pub fn as_input_object(&self) -> Option<&InputObjectType> {
        if let Self::InputObject(type_) = self {
            Some(type_)
        } else {
            None
        }
    }

    pub fn as_interface(&self) -> Option<&InterfaceType> {
        if let Self::Interface(type_) = self {
            Some(type_)
        } else {
            None
        }
    }

    pub fn as_object(&self) -> Option<&ObjectType> {
        if let Self::Object(type_) = self {
            Some(type_)
        } else {
            None
        }
    }

    pub fn as_union(&self) -> Option<&UnionType> {
        if let Self::Union(type_) = self {
            Some(type_)
        } else {
            None
        }
    }

    /// The [`SourceLocation`](loc::SourceLocation) indicating where this
    /// type was defined.
    pub fn def_location(&self) -> &loc::SourceLocation {
        match self {
            Self::Bool
                | Self::Float
                | Self::ID
                | Self::Int
                | Self::String =>
                &BUILTIN_LOCATION,
            Self::Enum(t) => t.def_location(),
            Self::InputObject(t) => t.def_location(),
            Self::Interface(t) => t.def_location(),
            Self::Object(t) => t.def_location(),
            Self::Scalar(t) => t.def_location(),
            Self::Union(t) => t.def_location(),
        }
    }

    /// The description of this type as defined in the schema. Built-in
    /// scalars carry no description.
    pub fn description(&self) -> Option<&str> {
        match self {
            Self::Bool
                | Self::Float
                | Self::ID
                | Self::Int
                | Self::String => None,
            Self::Enum(t) => t.description(),
            Self::InputObject(t) => t.description(),
            Self::Interface(t) => t.description(),
            Self::Object(t) => t.description(),
            Self::Scalar(t) => t.description(),
            Self::Union(t) => t.description(),
        }
    }

    /// The output fields selectable on this type. Only object and interface
    /// types declare fields; unions select through fragments.
    pub fn fields(&self) -> Option<&IndexMap<String, Field>> {
        match self {
            Self::Interface(t) => Some(t.fields()),
            Self::Object(t) => Some(t.fields()),
            _ => None,
        }
    }

    /// Interfaces and unions: types that stand in for one of several
    /// possible object types.
    pub fn is_abstract(&self) -> bool {
        self.kind().is_abstract()
    }

    /// Objects, interfaces and unions: the types a selection set can be
    /// made against.
    pub fn is_composite(&self) -> bool {
        self.kind().is_composite()
    }

    /// Types usable for arguments, variables and input fields.
    pub fn is_input_type(&self) -> bool {
        self.kind().is_input()
    }

    pub fn kind(&self) -> GraphQLTypeKind {
        self.into()
    }

    pub fn name(&self) -> &str {
        match self {
            Self::Bool => "Boolean",
            Self::Enum(t) => t.name(),
            Self::Float => "Float",
            Self::ID => "ID",
            Self::InputObject(t) => t.name(),
            Self::Int => "Int",
            Self::Interface(t) => t.name(),
            Self::Object(t) => t.name(),
            Self::Scalar(t) => t.name(),
            Self::String => "String",
            Self::Union(t) => t.name(),
        }
    }
}
