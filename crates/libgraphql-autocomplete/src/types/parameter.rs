use crate::ast;
use crate::loc;
use crate::types::TypeAnnotation;
use std::path::Path;

/// An argument declared on a [`Field`](crate::types::Field) or a
/// [`Directive`](crate::types::Directive).
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Parameter {
    pub(super) def_location: loc::SourceLocation,
    pub(super) default_value: Option<String>,
    pub(super) description: Option<String>,
    pub(super) name: String,
    pub(super) type_annotation: TypeAnnotation,
}
impl Parameter {
    pub(crate) fn builtin(
        name: &str,
        type_annotation: TypeAnnotation,
        description: &str,
        default_value: Option<&str>,
    ) -> Self {
        Self {
            def_location: loc::SourceLocation::GraphQLBuiltIn,
            default_value: default_value.map(str::to_string),
            description: Some(description.to_string()),
            name: name.to_string(),
            type_annotation,
        }
    }

    pub fn def_location(&self) -> &loc::SourceLocation {
        &self.def_location
    }

    /// The default value, printed in GraphQL syntax.
    pub fn default_value(&self) -> Option<&str> {
        self.default_value.as_deref()
    }

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

    pub fn type_annotation(&self) -> &TypeAnnotation {
        &self.type_annotation
    }
}
