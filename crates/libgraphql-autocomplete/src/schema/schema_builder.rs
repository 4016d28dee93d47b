use crate::ast;
use crate::loc;
use crate::schema::Schema;
use crate::schema::TypeValidationError;
use crate::types::Directive;
use crate::types::DirectiveLocation;
use crate::types::EnumType;
use crate::types::EnumValue;
use crate::types::Field;
use crate::types::GraphQLType;
use crate::types::GraphQLTypeKind;
use crate::types::InputField;
use crate::types::InputObjectType;
use crate::types::InterfaceType;
use crate::types::ObjectOrInterfaceTypeData;
use crate::types::ObjectType;
use crate::types::Parameter;
use crate::types::ScalarType;
use crate::types::TypeAnnotation;
use crate::types::UnionType;
use indexmap::IndexMap;
use std::path::Path;
use std::path::PathBuf;
use thiserror::Error;

type Result<T> = std::result::Result<T, SchemaBuildError>;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum OperationKind {
    Mutation,
    Query,
    Subscription,
}
impl OperationKind {
    /// The name GraphQL assumes for this operation's root type when no
    /// `schema { ... }` block overrides it.
    pub fn default_type_name(&self) -> &'static str {
        match self {
            Self::Mutation => "Mutation",
            Self::Query => "Query",
            Self::Subscription => "Subscription",
        }
    }
}

/// Utility for building a [`Schema`] from GraphQL SDL.
///
/// ```
/// use libgraphql_autocomplete::schema::SchemaBuilder;
///
/// let schema = SchemaBuilder::new()
///     .load_str(None, "type Query { hello: String }")
///     .unwrap()
///     .build()
///     .unwrap();
/// assert_eq!(schema.query_type().name(), "Query");
/// ```
#[derive(Debug)]
pub struct SchemaBuilder {
    directive_defs: IndexMap<String, Directive>,
    extensions: Vec<(Option<PathBuf>, ast::schema::TypeExtension)>,
    mutation_type: Option<NamedTypeDefLocation>,
    query_type: Option<NamedTypeDefLocation>,
    subscription_type: Option<NamedTypeDefLocation>,
    types: IndexMap<String, GraphQLType>,
}
impl SchemaBuilder {
    pub fn build(mut self) -> Result<Schema> {
        // Extensions may precede the definitions they extend (even across
        // files), so they are only merged once everything has been loaded.
        for (file_path, ext) in std::mem::take(&mut self.extensions) {
            self.merge_type_extension(file_path.as_deref(), ext)?;
        }

        let query_type =
            self.resolve_root_type(OperationKind::Query, self.query_type.clone())?
                .ok_or(SchemaBuildError::NoQueryOperationTypeDefined)?;
        let mutation_type =
            self.resolve_root_type(OperationKind::Mutation, self.mutation_type.clone())?;
        let subscription_type =
            self.resolve_root_type(OperationKind::Subscription, self.subscription_type.clone())?;

        // Schema validation rule:
        //
        // > The query, mutation, and subscription root types must all be
        // > different types if provided.
        //
        // https://spec.graphql.org/October2021/#sel-FAHTRLCAACG0B57a
        let roots = [
            (OperationKind::Query, Some(&query_type)),
            (OperationKind::Mutation, mutation_type.as_ref()),
            (OperationKind::Subscription, subscription_type.as_ref()),
        ];
        for (idx, (operation1, type_name1)) in roots.iter().enumerate() {
            for (operation2, type_name2) in roots.iter().skip(idx + 1) {
                if type_name1.is_some() && type_name1 == type_name2 {
                    let reused_type_name =
                        type_name1.map(|name| name.to_string()).unwrap_or_default();
                    return Err(SchemaBuildError::NonUniqueOperationTypes {
                        reused_type_name,
                        operation1: *operation1,
                        operation2: *operation2,
                    });
                }
            }
        }

        let errors = self.validate_type_references();
        if !errors.is_empty() {
            return Err(SchemaBuildError::TypeValidationErrors { errors });
        }

        log::debug!(
            "Built schema with {} types and {} directives.",
            self.types.len(),
            self.directive_defs.len(),
        );

        Ok(Schema {
            directive_defs: self.directive_defs,
            mutation_type,
            query_type,
            subscription_type,
            types: self.types,
        })
    }

    pub fn new() -> Self {
        Self {
            directive_defs: Directive::builtins()
                .into_iter()
                .map(|directive| (directive.name().to_string(), directive))
                .collect(),
            extensions: vec![],
            mutation_type: None,
            query_type: None,
            subscription_type: None,
            types: IndexMap::from([
                ("Boolean".to_string(), GraphQLType::Bool),
                ("Float".to_string(), GraphQLType::Float),
                ("ID".to_string(), GraphQLType::ID),
                ("Int".to_string(), GraphQLType::Int),
                ("String".to_string(), GraphQLType::String),
            ]),
        }
    }

    pub fn load_file(
        self,
        file_path: impl AsRef<Path>,
    ) -> Result<Self> {
        self.load_files(vec![file_path])
    }

    pub fn load_files(
        mut self,
        file_paths: Vec<impl AsRef<Path>>,
    ) -> Result<Self> {
        for file_path in file_paths {
            let file_path = file_path.as_ref();
            let content = std::fs::read_to_string(file_path).map_err(|err| {
                SchemaBuildError::SchemaFileReadError {
                    file: file_path.to_path_buf(),
                    message: err.to_string(),
                }
            })?;
            self = self.load_str(Some(file_path.to_path_buf()), content.as_str())?;
        }
        Ok(self)
    }

    /// Parse `content` as GraphQL SDL and add its definitions to this
    /// builder. `file_path` is only used to attribute source locations.
    pub fn load_str(
        mut self,
        file_path: Option<PathBuf>,
        content: &str,
    ) -> Result<Self> {
        let ast_doc =
            graphql_parser::schema::parse_schema::<String>(content)
                .map_err(|err| SchemaBuildError::ParseError {
                    file: file_path.to_owned(),
                    err: err.to_string(),
                })?
                .into_static();

        log::debug!(
            "Loading {} schema definitions from {}.",
            ast_doc.definitions.len(),
            file_path.as_deref()
                .map(|path| path.display().to_string())
                .unwrap_or_else(|| "<str>".to_string()),
        );

        for def in ast_doc.definitions {
            self.visit_ast_def(file_path.as_deref(), def)?;
        }

        Ok(self)
    }

    fn add_new_type(
        &mut self,
        type_name: String,
        def_location: &loc::SourceLocation,
        type_: GraphQLType,
    ) -> Result<()> {
        if type_name.starts_with("__") {
            return Err(SchemaBuildError::InvalidDunderPrefixedTypeName {
                def_location: def_location.to_owned(),
                type_name,
            });
        }

        if let Some(conflicting_type) = self.types.get(type_name.as_str()) {
            return Err(SchemaBuildError::DuplicateTypeDefinition {
                def1: conflicting_type.def_location().to_owned(),
                def2: def_location.to_owned(),
                type_name,
            });
        }

        self.types.insert(type_name, type_);
        Ok(())
    }

    fn merge_type_extension(
        &mut self,
        file_path: Option<&Path>,
        ext: ast::schema::TypeExtension,
    ) -> Result<()> {
        use graphql_parser::schema::TypeExtension;
        let (type_name, position) = match &ext {
            TypeExtension::Enum(ext) => (ext.name.to_string(), ext.position),
            TypeExtension::InputObject(ext) => (ext.name.to_string(), ext.position),
            TypeExtension::Interface(ext) => (ext.name.to_string(), ext.position),
            TypeExtension::Object(ext) => (ext.name.to_string(), ext.position),
            TypeExtension::Scalar(ext) => (ext.name.to_string(), ext.position),
            TypeExtension::Union(ext) => (ext.name.to_string(), ext.position),
        };
        let extension_location =
            loc::SourceLocation::from_schema_ast_position(file_path, &position);

        let Some(existing_type) = self.types.get_mut(type_name.as_str()) else {
            return Err(SchemaBuildError::ExtensionOfUndefinedType {
                extension_location,
                type_name,
            });
        };

        match (existing_type, ext) {
            (GraphQLType::Enum(enum_type), TypeExtension::Enum(ext)) =>
                add_enum_values(file_path, &type_name, &ext.values, &mut enum_type.values),

            (GraphQLType::InputObject(inputobj_type), TypeExtension::InputObject(ext)) =>
                add_input_fields(file_path, &type_name, &ext.fields, &mut inputobj_type.fields),

            (GraphQLType::Interface(iface_type), TypeExtension::Interface(ext)) => {
                add_fields(file_path, &type_name, &ext.fields, &mut iface_type.0.fields)?;
                add_interfaces(
                    &type_name,
                    &extension_location,
                    &ext.implements_interfaces,
                    &mut iface_type.0.interfaces,
                )
            },

            (GraphQLType::Object(obj_type), TypeExtension::Object(ext)) => {
                add_fields(file_path, &type_name, &ext.fields, &mut obj_type.0.fields)?;
                add_interfaces(
                    &type_name,
                    &extension_location,
                    &ext.implements_interfaces,
                    &mut obj_type.0.interfaces,
                )
            },

            // Scalar extensions can only add directive annotations, none of
            // which are retained.
            (GraphQLType::Scalar(_), TypeExtension::Scalar(_)) => Ok(()),

            (GraphQLType::Union(union_type), TypeExtension::Union(ext)) =>
                add_union_members(
                    &type_name,
                    &extension_location,
                    &ext.types,
                    &mut union_type.members,
                ),

            (existing_type, _) => Err(SchemaBuildError::InvalidExtensionType {
                existing_type_kind: existing_type.kind(),
                extension_location,
                type_name,
            }),
        }
    }

    fn resolve_root_type(
        &self,
        operation: OperationKind,
        explicit_def: Option<NamedTypeDefLocation>,
    ) -> Result<Option<String>> {
        let Some(def) = explicit_def else {
            let default_name = operation.default_type_name();
            return Ok(match self.types.get(default_name) {
                Some(GraphQLType::Object(_)) => Some(default_name.to_string()),
                _ => None,
            });
        };

        match self.types.get(def.type_name.as_str()) {
            Some(GraphQLType::Object(_)) => Ok(Some(def.type_name)),
            Some(other_type) => Err(SchemaBuildError::NonObjectOperationType {
                operation,
                type_kind: other_type.kind(),
                type_def: def,
            }),
            None => Err(SchemaBuildError::UndefinedOperationType {
                operation,
                type_def: def,
            }),
        }
    }

    fn set_root_operation_type(
        slot: &mut Option<NamedTypeDefLocation>,
        operation: OperationKind,
        type_name: Option<&String>,
        def_location: &loc::SourceLocation,
    ) -> Result<()> {
        let Some(type_name) = type_name else {
            return Ok(());
        };
        let typedef_loc = NamedTypeDefLocation {
            def_location: def_location.to_owned(),
            type_name: type_name.to_string(),
        };
        if let Some(existing_typedef_loc) = slot {
            return Err(SchemaBuildError::DuplicateOperationDefinition {
                operation,
                location1: existing_typedef_loc.clone(),
                location2: typedef_loc,
            });
        }
        *slot = Some(typedef_loc);
        Ok(())
    }

    /// Every named reference in the schema must resolve to a type of a kind
    /// allowed at that position. All problems are collected rather than
    /// stopping at the first one.
    fn validate_type_references(&self) -> Vec<TypeValidationError> {
        let mut errors = vec![];
        for type_ in self.types.values() {
            match type_ {
                GraphQLType::Bool
                | GraphQLType::Enum(_)
                | GraphQLType::Float
                | GraphQLType::ID
                | GraphQLType::Int
                | GraphQLType::Scalar(_)
                | GraphQLType::String
                    => (),

                GraphQLType::InputObject(inputobj_type) => {
                    for field in inputobj_type.fields().values() {
                        match self.lookup_annotated_type(field.type_annotation(), &mut errors) {
                            Some(field_type) if !field_type.is_input_type() =>
                                errors.push(TypeValidationError::InvalidInputFieldWithOutputType {
                                    def_location: field.def_location().to_owned(),
                                    field_name: field.name().to_string(),
                                    invalid_type_name: field_type.name().to_string(),
                                    parent_type_name: inputobj_type.name().to_string(),
                                }),
                            _ => (),
                        }
                    }
                },

                GraphQLType::Interface(InterfaceType(data))
                | GraphQLType::Object(ObjectType(data)) =>
                    self.validate_object_or_interface(data, &mut errors),

                GraphQLType::Union(union_type) => {
                    for (member_name, member_loc) in union_type.members.iter() {
                        match self.types.get(member_name.as_str()) {
                            Some(GraphQLType::Object(_)) => (),
                            Some(member_type) =>
                                errors.push(TypeValidationError::InvalidUnionMemberTypeKind {
                                    location: member_loc.to_owned(),
                                    member_type_kind: member_type.kind(),
                                    member_type_name: member_name.to_string(),
                                    union_type_name: union_type.name().to_string(),
                                }),
                            None =>
                                errors.push(TypeValidationError::UndefinedTypeName {
                                    ref_location: member_loc.to_owned(),
                                    undefined_type_name: member_name.to_string(),
                                }),
                        }
                    }
                },
            }
        }

        for directive in self.directive_defs.values() {
            for param in directive.parameters().values() {
                self.validate_parameter(param, &mut errors);
            }
        }

        errors
    }

    fn validate_object_or_interface(
        &self,
        data: &ObjectOrInterfaceTypeData,
        errors: &mut Vec<TypeValidationError>,
    ) {
        for iface_name in data.interfaces.iter() {
            match self.types.get(iface_name.as_str()) {
                Some(GraphQLType::Interface(_)) => (),
                Some(_) => errors.push(TypeValidationError::ImplementsNonInterfaceType {
                    loc: data.def_location.to_owned(),
                    non_interface_type_name: iface_name.to_string(),
                    type_name: data.name.to_string(),
                }),
                None => errors.push(TypeValidationError::UndefinedTypeName {
                    ref_location: data.def_location.to_owned(),
                    undefined_type_name: iface_name.to_string(),
                }),
            }
        }

        for field in data.fields.values() {
            if let Some(GraphQLType::InputObject(input_type)) =
                self.lookup_annotated_type(field.type_annotation(), errors) {
                errors.push(TypeValidationError::InvalidOutputFieldWithInputType {
                    def_location: field.def_location().to_owned(),
                    field_name: field.name().to_string(),
                    input_type_name: input_type.name().to_string(),
                    parent_type_name: data.name.to_string(),
                });
            }

            for param in field.parameters().values() {
                self.validate_parameter(param, errors);
            }
        }
    }

    fn validate_parameter(
        &self,
        param: &Parameter,
        errors: &mut Vec<TypeValidationError>,
    ) {
        match self.lookup_annotated_type(param.type_annotation(), errors) {
            Some(param_type) if !param_type.is_input_type() =>
                errors.push(TypeValidationError::InvalidParameterWithOutputOnlyType {
                    def_location: param.def_location().to_owned(),
                    parameter_name: param.name().to_string(),
                    outputonly_type_name: param_type.name().to_string(),
                }),
            _ => (),
        }
    }

    fn lookup_annotated_type(
        &self,
        annot: &TypeAnnotation,
        errors: &mut Vec<TypeValidationError>,
    ) -> Option<&GraphQLType> {
        let named_annot = annot.innermost_named_type_annotation();
        let type_ = self.types.get(named_annot.graphql_type_name());
        if type_.is_none() {
            errors.push(TypeValidationError::UndefinedTypeName {
                ref_location: named_annot.ref_location().to_owned(),
                undefined_type_name: named_annot.graphql_type_name().to_string(),
            });
        }
        type_
    }

    fn visit_ast_def(
        &mut self,
        file_path: Option<&Path>,
        def: ast::schema::Definition,
    ) -> Result<()> {
        use graphql_parser::schema::Definition;
        match def {
            Definition::DirectiveDefinition(directive_def) =>
                self.visit_ast_directive_def(file_path, directive_def),
            Definition::SchemaDefinition(schema_def) =>
                self.visit_ast_schemablock_def(file_path, schema_def),
            Definition::TypeDefinition(type_def) =>
                self.visit_ast_type_def(file_path, type_def),
            Definition::TypeExtension(type_ext) => {
                self.extensions.push((file_path.map(Path::to_path_buf), type_ext));
                Ok(())
            },
        }
    }

    fn visit_ast_directive_def(
        &mut self,
        file_path: Option<&Path>,
        def: ast::schema::DirectiveDefinition,
    ) -> Result<()> {
        let def_location = loc::SourceLocation::from_schema_ast_position(
            file_path,
            &def.position,
        );

        if let Some(existing_def) = self.directive_defs.get(def.name.as_str()) {
            return Err(if existing_def.is_builtin() {
                SchemaBuildError::RedefinitionOfBuiltinDirective {
                    directive_name: def.name.to_string(),
                    location: def_location,
                }
            } else {
                SchemaBuildError::DuplicateDirectiveDefinition {
                    directive_name: def.name.to_string(),
                    location1: existing_def.def_location().to_owned(),
                    location2: def_location,
                }
            });
        }

        if def.name.starts_with("__") {
            return Err(SchemaBuildError::InvalidDunderPrefixedDirectiveName {
                def_location,
                directive_name: def.name.to_string(),
            });
        }

        self.directive_defs.insert(def.name.to_string(), Directive {
            def_location,
            description: def.description.to_owned(),
            locations: def.locations.iter().map(DirectiveLocation::from).collect(),
            name: def.name.to_string(),
            parameters: def.arguments.iter().map(|input_val| (
                input_val.name.to_string(),
                Parameter::from_ast(file_path, input_val),
            )).collect(),
            repeatable: def.repeatable,
        });

        Ok(())
    }

    fn visit_ast_schemablock_def(
        &mut self,
        file_path: Option<&Path>,
        schema_def: ast::schema::SchemaDefinition,
    ) -> Result<()> {
        let def_location = loc::SourceLocation::from_schema_ast_position(
            file_path,
            &schema_def.position,
        );
        Self::set_root_operation_type(
            &mut self.query_type,
            OperationKind::Query,
            schema_def.query.as_ref(),
            &def_location,
        )?;
        Self::set_root_operation_type(
            &mut self.mutation_type,
            OperationKind::Mutation,
            schema_def.mutation.as_ref(),
            &def_location,
        )?;
        Self::set_root_operation_type(
            &mut self.subscription_type,
            OperationKind::Subscription,
            schema_def.subscription.as_ref(),
            &def_location,
        )
    }

    fn visit_ast_type_def(
        &mut self,
        file_path: Option<&Path>,
        type_def: ast::schema::TypeDefinition,
    ) -> Result<()> {
        use graphql_parser::schema::TypeDefinition;
        match type_def {
            TypeDefinition::Enum(def) => {
                let def_location =
                    loc::SourceLocation::from_schema_ast_position(file_path, &def.position);
                let mut values = IndexMap::new();
                add_enum_values(file_path, &def.name, &def.values, &mut values)?;
                if values.is_empty() {
                    return Err(SchemaBuildError::EnumWithNoValues {
                        location: def_location,
                        type_name: def.name,
                    });
                }
                let type_ = GraphQLType::Enum(EnumType {
                    def_location: def_location.clone(),
                    description: def.description,
                    name: def.name.to_string(),
                    values,
                });
                self.add_new_type(def.name, &def_location, type_)
            },

            TypeDefinition::InputObject(def) => {
                let def_location =
                    loc::SourceLocation::from_schema_ast_position(file_path, &def.position);
                let mut fields = IndexMap::new();
                add_input_fields(file_path, &def.name, &def.fields, &mut fields)?;
                let type_ = GraphQLType::InputObject(InputObjectType {
                    def_location: def_location.clone(),
                    description: def.description,
                    fields,
                    name: def.name.to_string(),
                });
                self.add_new_type(def.name, &def_location, type_)
            },

            TypeDefinition::Interface(def) => {
                let def_location =
                    loc::SourceLocation::from_schema_ast_position(file_path, &def.position);
                let data = build_object_or_interface_data(
                    file_path,
                    &def_location,
                    &def.name,
                    def.description,
                    &def.implements_interfaces,
                    &def.fields,
                )?;
                self.add_new_type(def.name, &def_location, GraphQLType::Interface(
                    InterfaceType(data),
                ))
            },

            TypeDefinition::Object(def) => {
                let def_location =
                    loc::SourceLocation::from_schema_ast_position(file_path, &def.position);
                let data = build_object_or_interface_data(
                    file_path,
                    &def_location,
                    &def.name,
                    def.description,
                    &def.implements_interfaces,
                    &def.fields,
                )?;
                self.add_new_type(def.name, &def_location, GraphQLType::Object(
                    ObjectType(data),
                ))
            },

            TypeDefinition::Scalar(def) => {
                let def_location =
                    loc::SourceLocation::from_schema_ast_position(file_path, &def.position);
                let type_ = GraphQLType::Scalar(ScalarType {
                    def_location: def_location.clone(),
                    description: def.description,
                    name: def.name.to_string(),
                });
                self.add_new_type(def.name, &def_location, type_)
            },

            TypeDefinition::Union(def) => {
                let def_location =
                    loc::SourceLocation::from_schema_ast_position(file_path, &def.position);
                let mut members = IndexMap::new();
                add_union_members(&def.name, &def_location, &def.types, &mut members)?;
                let type_ = GraphQLType::Union(UnionType {
                    def_location: def_location.clone(),
                    description: def.description,
                    members,
                    name: def.name.to_string(),
                });
                self.add_new_type(def.name, &def_location, type_)
            },
        }
    }
}
impl Default for SchemaBuilder {
    fn default() -> Self {
        Self::new()
    }
}

fn build_object_or_interface_data(
    file_path: Option<&Path>,
    def_location: &loc::SourceLocation,
    type_name: &str,
    description: Option<String>,
    ast_interfaces: &[String],
    ast_fields: &[ast::schema::Field],
) -> Result<ObjectOrInterfaceTypeData> {
    let mut fields = IndexMap::new();
    add_fields(file_path, type_name, ast_fields, &mut fields)?;

    let mut interfaces = vec![];
    add_interfaces(type_name, def_location, ast_interfaces, &mut interfaces)?;

    Ok(ObjectOrInterfaceTypeData {
        def_location: def_location.to_owned(),
        description,
        fields,
        interfaces,
        name: type_name.to_string(),
    })
}

fn add_enum_values(
    file_path: Option<&Path>,
    enum_name: &str,
    ast_values: &[ast::schema::EnumValue],
    values: &mut IndexMap<String, EnumValue>,
) -> Result<()> {
    for ast_value in ast_values {
        let value = EnumValue::from_ast(file_path, ast_value);
        if let Some(existing_value) = values.get(value.name()) {
            return Err(SchemaBuildError::DuplicateEnumValueDefinition {
                enum_name: enum_name.to_string(),
                value_def1: existing_value.def_location().to_owned(),
                value_def2: value.def_location().to_owned(),
                value_name: value.name().to_string(),
            });
        }
        values.insert(value.name().to_string(), value);
    }
    Ok(())
}

fn add_fields(
    file_path: Option<&Path>,
    type_name: &str,
    ast_fields: &[ast::schema::Field],
    fields: &mut IndexMap<String, Field>,
) -> Result<()> {
    for ast_field in ast_fields {
        let field = Field::from_ast(file_path, ast_field);
        if field.name().starts_with("__") {
            return Err(SchemaBuildError::InvalidDunderPrefixedFieldName {
                def_location: field.def_location().to_owned(),
                field_name: field.name().to_string(),
                type_name: type_name.to_string(),
            });
        }
        if let Some(existing_field) = fields.get(field.name()) {
            return Err(SchemaBuildError::DuplicateFieldNameDefinition {
                field_def1: existing_field.def_location().to_owned(),
                field_def2: field.def_location().to_owned(),
                field_name: field.name().to_string(),
                type_name: type_name.to_string(),
            });
        }
        fields.insert(field.name().to_string(), field);
    }
    Ok(())
}

fn add_input_fields(
    file_path: Option<&Path>,
    type_name: &str,
    ast_fields: &[ast::schema::InputValue],
    fields: &mut IndexMap<String, InputField>,
) -> Result<()> {
    for ast_field in ast_fields {
        let field = InputField::from_ast(file_path, ast_field);
        if let Some(existing_field) = fields.get(field.name()) {
            return Err(SchemaBuildError::DuplicateFieldNameDefinition {
                field_def1: existing_field.def_location().to_owned(),
                field_def2: field.def_location().to_owned(),
                field_name: field.name().to_string(),
                type_name: type_name.to_string(),
            });
        }
        fields.insert(field.name().to_string(), field);
    }
    Ok(())
}

fn add_interfaces(
    type_name: &str,
    def_location: &loc::SourceLocation,
    ast_interfaces: &[String],
    interfaces: &mut Vec<String>,
) -> Result<()> {
    for iface_name in ast_interfaces {
        if iface_name == type_name {
            return Err(SchemaBuildError::InvalidSelfImplementingInterface {
                def_location: def_location.to_owned(),
                interface_name: type_name.to_string(),
            });
        }
        if interfaces.contains(iface_name) {
            return Err(SchemaBuildError::DuplicateInterfaceImplementsDeclaration {
                def_location: def_location.to_owned(),
                duplicated_interface_name: iface_name.to_string(),
                type_name: type_name.to_string(),
            });
        }
        interfaces.push(iface_name.to_string());
    }
    Ok(())
}

fn add_union_members(
    type_name: &str,
    def_location: &loc::SourceLocation,
    ast_members: &[String],
    members: &mut IndexMap<String, loc::SourceLocation>,
) -> Result<()> {
    for member_name in ast_members {
        if let Some(existing_member_loc) = members.get(member_name.as_str()) {
            return Err(SchemaBuildError::DuplicatedUnionMember {
                member1: existing_member_loc.to_owned(),
                member2: def_location.to_owned(),
                member_name: member_name.to_string(),
                type_name: type_name.to_string(),
            });
        }
        members.insert(member_name.to_string(), def_location.to_owned());
    }
    Ok(())
}

#[derive(Clone, Debug, Error, PartialEq)]
pub enum SchemaBuildError {
    #[error("Multiple directives were defined with the name `@{directive_name}`")]
    DuplicateDirectiveDefinition {
        directive_name: String,
        location1: loc::SourceLocation,
        location2: loc::SourceLocation,
    },

    #[error("The `{enum_name}` enum defines the `{value_name}` value more than once")]
    DuplicateEnumValueDefinition {
        enum_name: String,
        value_def1: loc::SourceLocation,
        value_def2: loc::SourceLocation,
        value_name: String,
    },

    #[error("The `{type_name}` type defines the `{field_name}` field more than once")]
    DuplicateFieldNameDefinition {
        field_def1: loc::SourceLocation,
        field_def2: loc::SourceLocation,
        field_name: String,
        type_name: String,
    },

    #[error(
        "The `{type_name}` type declares that it implements the \
        `{duplicated_interface_name}` interface more than once"
    )]
    DuplicateInterfaceImplementsDeclaration {
        def_location: loc::SourceLocation,
        duplicated_interface_name: String,
        type_name: String,
    },

    #[error("The {operation:?} root operation type was defined more than once")]
    DuplicateOperationDefinition {
        operation: OperationKind,
        location1: NamedTypeDefLocation,
        location2: NamedTypeDefLocation,
    },

    #[error("Multiple GraphQL types with the name `{type_name}` were defined")]
    DuplicateTypeDefinition {
        type_name: String,
        def1: loc::SourceLocation,
        def2: loc::SourceLocation,
    },

    #[error("The `{type_name}` union specifies `{member_name}` as a member more than once")]
    DuplicatedUnionMember {
        member1: loc::SourceLocation,
        member2: loc::SourceLocation,
        member_name: String,
        type_name: String,
    },

    #[error("The `{type_name}` enum must define one or more unique values")]
    EnumWithNoValues {
        location: loc::SourceLocation,
        type_name: String,
    },

    #[error("Attempted to extend the `{type_name}` type, which is not defined")]
    ExtensionOfUndefinedType {
        extension_location: loc::SourceLocation,
        type_name: String,
    },

    #[error(
        "Attempted to extend the `{type_name}` type with an extension of a \
        different kind: `{type_name}` is a(n) {} type",
        existing_type_kind.name(),
    )]
    InvalidExtensionType {
        existing_type_kind: GraphQLTypeKind,
        extension_location: loc::SourceLocation,
        type_name: String,
    },

    #[error("Custom directive names must not start with `__`")]
    InvalidDunderPrefixedDirectiveName {
        def_location: loc::SourceLocation,
        directive_name: String,
    },

    #[error("Field names must not start with `__`")]
    InvalidDunderPrefixedFieldName {
        def_location: loc::SourceLocation,
        field_name: String,
        type_name: String,
    },

    #[error("Type names must not start with `__`")]
    InvalidDunderPrefixedTypeName {
        def_location: loc::SourceLocation,
        type_name: String,
    },

    #[error(
        "Interface types may not declare that they implement themselves: The \
        `{interface_name}` interface does just that"
    )]
    InvalidSelfImplementingInterface {
        def_location: loc::SourceLocation,
        interface_name: String,
    },

    #[error("Attempted to build a schema that has no Query operation type defined")]
    NoQueryOperationTypeDefined,

    #[error(
        "The {operation:?} root operation type must be an object type, but \
        `{}` is a(n) {} type",
        type_def.type_name,
        type_kind.name(),
    )]
    NonObjectOperationType {
        operation: OperationKind,
        type_def: NamedTypeDefLocation,
        type_kind: GraphQLTypeKind,
    },

    #[error(
        "The {operation1:?} and {operation2:?} root operations are defined with \
        the same GraphQL type (`{reused_type_name}`), but this is not allowed in \
        GraphQL. All root operations must be defined with different types."
    )]
    NonUniqueOperationTypes {
        reused_type_name: String,
        operation1: OperationKind,
        operation2: OperationKind,
    },

    #[error("Error parsing schema string")]
    ParseError {
        file: Option<PathBuf>,
        err: String,
    },

    #[error("Attempted to redefine the builtin `@{directive_name}` directive")]
    RedefinitionOfBuiltinDirective {
        directive_name: String,
        location: loc::SourceLocation,
    },

    #[error("Failure while trying to read the schema file at {file:?}: {message}")]
    SchemaFileReadError {
        file: PathBuf,
        message: String,
    },

    #[error(
        "Encountered the following type-validation errors while building the \
        schema:\n\n{}",
        errors.iter()
            .map(|s| format!("  * {s}"))
            .collect::<Vec<_>>()
            .join("\n"),
    )]
    TypeValidationErrors {
        errors: Vec<TypeValidationError>,
    },

    #[error(
        "The {operation:?} root operation type is declared as `{}`, but no \
        such type is defined",
        type_def.type_name,
    )]
    UndefinedOperationType {
        operation: OperationKind,
        type_def: NamedTypeDefLocation,
    },
}

/// Represents the location of a given type's definition in the schema.
#[derive(Clone, Debug, PartialEq)]
pub struct NamedTypeDefLocation {
    pub def_location: loc::SourceLocation,
    pub type_name: String,
}
