use crate::schema::Schema;
use crate::types::GraphQLType;
use crate::types::GraphQLTypeKind;
use crate::types::TypeAnnotation;

/// The type shown alongside a [`CandidateEntry`](crate::candidates::CandidateEntry).
///
/// Renderers can tell lists, non-null wrappers and the kind of the named type
/// apart without consulting the schema again. `kind` is `None` when the
/// named type is not defined by the schema (e.g. the introspection types).
#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
pub enum CandidateType {
    List {
        item: Box<CandidateType>,
        nullable: bool,
    },
    Named {
        kind: Option<GraphQLTypeKind>,
        name: String,
        nullable: bool,
    },
}
impl CandidateType {
    pub fn from_annotation(schema: &Schema, annot: &TypeAnnotation) -> Self {
        match annot {
            TypeAnnotation::List(list_annot) => Self::List {
                item: Box::new(Self::from_annotation(
                    schema,
                    list_annot.inner_type_annotation(),
                )),
                nullable: list_annot.nullable(),
            },
            TypeAnnotation::Named(named_annot) => Self::Named {
                kind: named_annot.graphql_type(schema).map(GraphQLType::kind),
                name: named_annot.graphql_type_name().to_string(),
                nullable: named_annot.nullable(),
            },
        }
    }

    /// A nullable reference to `type_`.
    pub fn from_type(type_: &GraphQLType) -> Self {
        Self::Named {
            kind: Some(type_.kind()),
            name: type_.name().to_string(),
            nullable: true,
        }
    }

    pub fn nullable(&self) -> bool {
        match self {
            Self::List { nullable, .. } | Self::Named { nullable, .. } => *nullable,
        }
    }
}
impl std::fmt::Display for CandidateType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::List { item, nullable } =>
                write!(f, "[{item}]{}", if *nullable { "" } else { "!" }),
            Self::Named { name, nullable, .. } =>
                write!(f, "{name}{}", if *nullable { "" } else { "!" }),
        }
    }
}
