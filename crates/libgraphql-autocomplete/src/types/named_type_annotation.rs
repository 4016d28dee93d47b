use crate::loc;
use crate::schema::Schema;
use crate::types::GraphQLType;

#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct NamedTypeAnnotation {
    pub(super) nullable: bool,
    pub(super) ref_location: loc::SourceLocation,
    pub(super) type_name: String,
}
impl NamedTypeAnnotation {
    /// Look the referenced type up in `schema`.
    ///
    /// Returns `None` for names the schema does not define. [`SchemaBuilder`]
    /// rejects dangling references in schema definitions, but the built-in
    /// meta fields reference introspection types (`__Schema`, `__Type`) that
    /// are not modelled here.
    ///
    /// [`SchemaBuilder`]: crate::schema::SchemaBuilder
    pub fn graphql_type<'schema>(
        &self,
        schema: &'schema Schema,
    ) -> Option<&'schema GraphQLType> {
        schema.lookup_type(self.type_name.as_str())
    }

    pub fn graphql_type_name(&self) -> &str {
        self.type_name.as_str()
    }

    pub fn nullable(&self) -> bool {
        self.nullable
    }

    pub fn ref_location(&self) -> &loc::SourceLocation {
        &self.ref_location
    }
}
