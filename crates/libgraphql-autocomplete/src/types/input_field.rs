use crate::ast;
use crate::loc;
use crate::types::TypeAnnotation;
use std::path::Path;

/// Represents an
/// [input field](https://spec.graphql.org/October2021/#InputFieldsDefinition)
/// defined on an [`InputObjectType`](crate::types::InputObjectType).
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct InputField {
    pub(super) def_location: loc::SourceLocation,
    pub(super) default_value: Option<String>,
    pub(super) description: Option<String>,
    pub(super) name: String,
    pub(super) type_annotation: TypeAnnotation,
}
impl InputField {
    pub fn def_location(&self) -> &loc::SourceLocation {
        &self.def_location
    }

    pub fn default_value(&self) -> Option<&str> {
        self.default_value.as_deref()
    }

    /// The description of this [`InputField`] as defined in the schema
    /// (e.g. in a `"""`-string immediately before the input field definition).
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub(crate) fn from_ast(
        file_path: Option<&Path>,
        input_val: &ast::schema::InputValue,
    ) -> Self {
        let def_location = loc::SourceLocation::from_schema_ast_position(
            file_path,
            &input_val.position,
        );
        Self {
            default_value: input_val.default_value
                .as_ref()
                .map(ast::value_to_graphql_string),
            description: input_val.description.to_owned(),
            name: input_val.name.to_string(),
            type_annotation: TypeAnnotation::from_ast_type(
                &def_location,
                &input_val.value_type,
            ),
            def_location,
        }
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// The [`TypeAnnotation`] specifying the schema-defined type of this
    /// [`InputField`].
    pub fn type_annotation(&self) -> &TypeAnnotation {
        &self.type_annotation
    }
}
