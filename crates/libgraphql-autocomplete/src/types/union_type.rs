use crate::loc;
use crate::schema::Schema;
use crate::types::GraphQLType;
use indexmap::IndexMap;

/// Represents a
/// [union type](https://spec.graphql.org/October2021/#sec-Unions) defined
/// within some [`Schema`].
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct UnionType {
    pub(crate) def_location: loc::SourceLocation,
    pub(crate) description: Option<String>,
    pub(crate) members: IndexMap<String, loc::SourceLocation>,
    pub(crate) name: String,
}
impl UnionType {
    pub fn def_location(&self) -> &loc::SourceLocation {
        &self.def_location
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// An ordered list of the names of each [`GraphQLType`] defined as a member
    /// of this union.
    pub fn member_type_names(&self) -> Vec<&str> {
        self.members.keys()
            .map(|type_name| type_name.as_str())
            .collect()
    }

    /// An ordered list of [`GraphQLType`]s defined as a member of this union.
    pub fn member_types<'schema>(
        &self,
        schema: &'schema Schema,
    ) -> Vec<&'schema GraphQLType> {
        self.members.keys()
            .filter_map(|type_name| schema.lookup_type(type_name))
            .collect()
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }
}
