use crate::ast;
use crate::loc;
use indexmap::IndexMap;
use std::path::Path;

/// Represents an
/// [enum type](https://spec.graphql.org/October2021/#sec-Enums) defined
/// within some [`Schema`](crate::schema::Schema).
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct EnumType {
    pub(crate) def_location: loc::SourceLocation,
    pub(crate) description: Option<String>,
    pub(crate) name: String,
    pub(crate) values: IndexMap<String, EnumValue>,
}
impl EnumType {
    pub fn def_location(&self) -> &loc::SourceLocation {
        &self.def_location
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// The values of this enum in declaration order.
    pub fn values(&self) -> &IndexMap<String, EnumValue> {
        &self.values
    }
}

/// Represents a defined value of some [`EnumType`].
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct EnumValue {
    pub(super) def_location: loc::SourceLocation,
    pub(super) deprecation_reason: Option<String>,
    pub(super) description: Option<String>,
    pub(super) name: String,
}
impl EnumValue {
    pub fn def_location(&self) -> &loc::SourceLocation {
        &self.def_location
    }

    pub fn deprecation_reason(&self) -> Option<&str> {
        self.deprecation_reason.as_deref()
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub(crate) fn from_ast(
        file_path: Option<&Path>,
        ast_value: &ast::schema::EnumValue,
    ) -> Self {
        Self {
            def_location: loc::SourceLocation::from_schema_ast_position(
                file_path,
                &ast_value.position,
            ),
            deprecation_reason: ast::deprecation_reason(&ast_value.directives),
            description: ast_value.description.to_owned(),
            name: ast_value.name.to_string(),
        }
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }
}
