use crate::ast;
use crate::loc;
use crate::schema::Schema;
use crate::types::GraphQLType;
use crate::types::ListTypeAnnotation;
use crate::types::NamedTypeAnnotation;

/// Represents the annotated type for a [`Field`](crate::types::Field),
/// [`Parameter`](crate::types::Parameter), or
/// [`InputField`](crate::types::InputField).
///
/// Non-null wrappers are folded into the `nullable` flag of the annotation
/// they wrap, so `[Episode!]!` is a non-nullable list of non-nullable
/// `Episode`s.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub enum TypeAnnotation {
    List(ListTypeAnnotation),
    Named(NamedTypeAnnotation),
}
impl TypeAnnotation {
    /// Unwrap the [`ListTypeAnnotation`] if this annotation is one.
    pub fn as_list_annotation(&self) -> Option<&ListTypeAnnotation> {
        if let Self::List(annot) = self {
            Some(annot)
        } else {
            None
        }
    }

    /// Unwrap the [`NamedTypeAnnotation`] if this annotation is one.
    pub fn as_named_annotation(&self) -> Option<&NamedTypeAnnotation> {
        if let Self::Named(annot) = self {
            Some(annot)
        } else {
            None
        }
    }

    pub(crate) fn builtin_named(type_name: &str, nullable: bool) -> Self {
        Self::Named(NamedTypeAnnotation {
            nullable,
            ref_location: loc::SourceLocation::GraphQLBuiltIn,
            type_name: type_name.to_string(),
        })
    }

    pub(crate) fn from_ast_type(
        ref_location: &loc::SourceLocation,
        ast_type: &ast::schema::Type,
    ) -> Self {
        Self::from_ast_type_impl(ref_location, ast_type, /* nullable = */ true)
    }

    fn from_ast_type_impl(
        ref_location: &loc::SourceLocation,
        ast_type: &ast::schema::Type,
        nullable: bool,
    ) -> Self {
        use graphql_parser::schema::Type;
        match ast_type {
            Type::ListType(inner) =>
                Self::List(ListTypeAnnotation {
                    inner_type_annotation: Box::new(Self::from_ast_type_impl(
                        ref_location,
                        inner,
                        true,
                    )),
                    nullable,
                    ref_location: ref_location.to_owned(),
                }),

            Type::NamedType(name) =>
                Self::Named(NamedTypeAnnotation {
                    nullable,
                    ref_location: ref_location.to_owned(),
                    type_name: name.to_string(),
                }),

            Type::NonNullType(inner) =>
                Self::from_ast_type_impl(ref_location, inner, false),
        }
    }

    /// Recursively unwrap this [`TypeAnnotation`] and return the inner-most
    /// [`NamedTypeAnnotation`] from it.
    pub fn innermost_named_type_annotation(&self) -> &NamedTypeAnnotation {
        match self {
            Self::List(ListTypeAnnotation { inner_type_annotation, .. })
                => inner_type_annotation.innermost_named_type_annotation(),
            Self::Named(named_annot)
                => named_annot,
        }
    }

    /// Strip every list and non-null wrapper and look the remaining named type
    /// up in `schema`.
    pub fn innermost_graphql_type<'schema>(
        &self,
        schema: &'schema Schema,
    ) -> Option<&'schema GraphQLType> {
        self.innermost_named_type_annotation().graphql_type(schema)
    }

    /// Indicates if this [`TypeAnnotation`] is [nullable or
    /// non-nullable](https://spec.graphql.org/October2021/#sec-Non-Null).
    pub fn nullable(&self) -> bool {
        match self {
            Self::List(annot) => annot.nullable(),
            Self::Named(annot) => annot.nullable(),
        }
    }

    pub fn ref_location(&self) -> &loc::SourceLocation {
        match self {
            Self::List(annot) => annot.ref_location(),
            Self::Named(annot) => annot.ref_location(),
        }
    }
}
impl std::convert::From<ListTypeAnnotation> for TypeAnnotation {
    fn from(value: ListTypeAnnotation) -> Self {
        Self::List(value)
    }
}
impl std::convert::From<NamedTypeAnnotation> for TypeAnnotation {
    fn from(value: NamedTypeAnnotation) -> Self {
        Self::Named(value)
    }
}
impl std::fmt::Display for TypeAnnotation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::List(list_annot) => write!(
                f,
                "[{}]{}",
                list_annot.inner_type_annotation(),
                if list_annot.nullable() { "" } else { "!" },
            ),

            Self::Named(named_annot) => write!(
                f,
                "{}{}",
                named_annot.graphql_type_name(),
                if named_annot.nullable() { "" } else { "!" },
            ),
        }
    }
}
