use crate::schema::Schema;
use crate::types::Field;
use crate::types::GraphQLType;
use crate::types::Parameter;
use crate::types::TypeAnnotation;
use std::sync::OnceLock;

struct MetaFields {
    schema: Field,
    type_: Field,
    typename: Field,
}

static META_FIELDS: OnceLock<MetaFields> = OnceLock::new();

fn meta_fields() -> &'static MetaFields {
    META_FIELDS.get_or_init(|| MetaFields {
        schema: Field::builtin(
            "__schema",
            TypeAnnotation::builtin_named("__Schema", false),
            "Access the current type schema of this server.",
            vec![],
        ),
        type_: Field::builtin(
            "__type",
            TypeAnnotation::builtin_named("__Type", true),
            "Request the type information of a single type.",
            vec![
                Parameter::builtin(
                    "name",
                    TypeAnnotation::builtin_named("String", false),
                    "The name of the type to look up.",
                    None,
                ),
            ],
        ),
        typename: Field::builtin(
            "__typename",
            TypeAnnotation::builtin_named("String", false),
            "The name of the current Object type at runtime.",
            vec![],
        ),
    })
}

/// `__schema: __Schema!`, selectable on the Query root type only.
pub fn schema_meta_field() -> &'static Field {
    &meta_fields().schema
}

/// `__type(name: String!): __Type`, selectable on the Query root type only.
pub fn type_meta_field() -> &'static Field {
    &meta_fields().type_
}

/// `__typename: String!`, selectable on every composite type.
pub fn typename_meta_field() -> &'static Field {
    &meta_fields().typename
}

/// Find the definition of the field named `field_name` selected on
/// `parent_type`, including the introspection meta fields wherever GraphQL
/// allows them.
pub fn lookup_field_def<'schema>(
    schema: &'schema Schema,
    parent_type: &'schema GraphQLType,
    field_name: &str,
) -> Option<&'schema Field> {
    match field_name {
        "__schema" if schema.is_query_type(parent_type) =>
            Some(schema_meta_field()),
        "__type" if schema.is_query_type(parent_type) =>
            Some(type_meta_field()),
        "__typename" if parent_type.is_composite() =>
            Some(typename_meta_field()),
        _ => parent_type.fields()?.get(field_name),
    }
}
