use crate::schema::Schema;
use crate::types::Directive;
use crate::types::Field;
use crate::types::GraphQLType;
use crate::types::InputField;
use crate::types::Parameter;
use crate::types::TypeAnnotation;
use indexmap::IndexMap;

/// The type of the expression at some point in a document.
///
/// Operation roots and fragments name a schema type directly, whereas fields
/// carry a (possibly list-wrapped or non-null) annotation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TypeRef<'schema> {
    Annotated(&'schema TypeAnnotation),
    Named(&'schema GraphQLType),
}
impl<'schema> TypeRef<'schema> {
    /// Strip all list and non-null wrappers and look up the named type.
    pub fn named_type(self, schema: &'schema Schema) -> Option<&'schema GraphQLType> {
        match self {
            Self::Annotated(annot) => annot.innermost_graphql_type(schema),
            Self::Named(type_) => Some(type_),
        }
    }
}
impl std::fmt::Display for TypeRef<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Annotated(annot) => write!(f, "{annot}"),
            Self::Named(type_) => f.write_str(type_.name()),
        }
    }
}

/// Type-system facts implied by the cursor's position. Every field starts as
/// `None` and stays `None` when the enclosing document does not determine it.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TypeContext<'schema> {
    /// The type of the innermost expression.
    pub type_ref: Option<TypeRef<'schema>>,

    /// The named type whose selection set encloses the cursor.
    pub parent_type: Option<&'schema GraphQLType>,

    /// The type expected at the innermost value position.
    pub input_type: Option<&'schema TypeAnnotation>,

    pub directive_def: Option<&'schema Directive>,
    pub field_def: Option<&'schema Field>,
    pub arg_def: Option<&'schema Parameter>,
    pub arg_defs: Option<&'schema IndexMap<String, Parameter>>,
    pub object_field_defs: Option<&'schema IndexMap<String, InputField>>,
}
