use crate::ast;
use crate::loc;
use crate::types::Parameter;
use crate::types::TypeAnnotation;
use indexmap::IndexMap;
use std::path::Path;

/// Represents a field defined on an [`ObjectType`](crate::types::ObjectType)
/// or [`InterfaceType`](crate::types::InterfaceType), or one of the built-in
/// meta fields (`__typename`, `__schema`, `__type`).
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Field {
    pub(super) def_location: loc::SourceLocation,
    pub(super) deprecation_reason: Option<String>,
    pub(super) description: Option<String>,
    pub(super) name: String,
    pub(super) parameters: IndexMap<String, Parameter>,
    pub(super) type_annotation: TypeAnnotation,
}
impl Field {
    pub(crate) fn builtin(
        name: &str,
        type_annotation: TypeAnnotation,
        description: &str,
        parameters: Vec<Parameter>,
    ) -> Self {
        Self {
            def_location: loc::SourceLocation::GraphQLBuiltIn,
            deprecation_reason: None,
            description: Some(description.to_string()),
            name: name.to_string(),
            parameters: parameters.into_iter()
                .map(|param| (param.name().to_string(), param))
                .collect(),
            type_annotation,
        }
    }

    pub fn def_location(&self) -> &loc::SourceLocation {
        &self.def_location
    }

    /// The reason given by this field's `@deprecated` annotation, if it has
    /// one.
    pub fn deprecation_reason(&self) -> Option<&str> {
        self.deprecation_reason.as_deref()
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub(crate) fn from_ast(
        file_path: Option<&Path>,
        ast_field: &ast::schema::Field,
    ) -> Self {
        let def_location = loc::SourceLocation::from_schema_ast_position(
            file_path,
            &ast_field.position,
        );
        Self {
            deprecation_reason: ast::deprecation_reason(&ast_field.directives),
            description: ast_field.description.to_owned(),
            name: ast_field.name.to_string(),
            parameters: ast_field.arguments
                .iter()
                .map(|input_val| (
                    input_val.name.to_string(),
                    Parameter::from_ast(file_path, input_val),
                ))
                .collect(),
            type_annotation: TypeAnnotation::from_ast_type(
                &def_location,
                &ast_field.field_type,
            ),
            def_location,
        }
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// The arguments this field accepts, in declaration order.
    pub fn parameters(&self) -> &IndexMap<String, Parameter> {
        &self.parameters
    }

    pub fn type_annotation(&self) -> &TypeAnnotation {
        &self.type_annotation
    }
}
