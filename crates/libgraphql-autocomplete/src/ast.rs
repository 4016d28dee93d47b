//! `'static` aliases for the `graphql_parser` schema AST nodes consumed by
//! [`SchemaBuilder`](crate::schema::SchemaBuilder).

pub(crate) mod schema {
    pub use graphql_parser::schema::DirectiveLocation;

    pub type Definition = graphql_parser::schema::Definition<'static, String>;
    pub type Directive = graphql_parser::schema::Directive<'static, String>;
    pub type DirectiveDefinition = graphql_parser::schema::DirectiveDefinition<'static, String>;
    pub type EnumValue = graphql_parser::schema::EnumValue<'static, String>;
    pub type Field = graphql_parser::schema::Field<'static, String>;
    pub type InputValue = graphql_parser::schema::InputValue<'static, String>;
    pub type SchemaDefinition = graphql_parser::schema::SchemaDefinition<'static, String>;
    pub type Type = graphql_parser::schema::Type<'static, String>;
    pub type TypeDefinition = graphql_parser::schema::TypeDefinition<'static, String>;
    pub type TypeExtension = graphql_parser::schema::TypeExtension<'static, String>;
    pub type Value = graphql_parser::schema::Value<'static, String>;
}

const DEFAULT_DEPRECATION_REASON: &str = "No longer supported";

/// Extracts the reason given by a `@deprecated` annotation, if one is
/// present among `directives`.
pub(crate) fn deprecation_reason(
    directives: &[schema::Directive],
) -> Option<String> {
    let annot = directives.iter().find(|annot| annot.name == "deprecated")?;
    let reason = annot.arguments
        .iter()
        .find(|(arg_name, _)| arg_name == "reason")
        .and_then(|(_, value)| match value {
            graphql_parser::schema::Value::String(reason) => Some(reason.to_string()),
            _ => None,
        });
    Some(reason.unwrap_or_else(|| DEFAULT_DEPRECATION_REASON.to_string()))
}

/// Prints a constant value back out in GraphQL syntax (used for default
/// values).
pub(crate) fn value_to_graphql_string(value: &schema::Value) -> String {
    use graphql_parser::schema::Value;
    match value {
        Value::Boolean(b) => b.to_string(),
        Value::Enum(name) => name.to_string(),
        Value::Float(f) => f.to_string(),
        Value::Int(num) => num.as_i64()
            .map(|i| i.to_string())
            .unwrap_or_default(),
        Value::List(items) => format!(
            "[{}]",
            items.iter()
                .map(value_to_graphql_string)
                .collect::<Vec<_>>()
                .join(", "),
        ),
        Value::Null => "null".to_string(),
        Value::Object(fields) => format!(
            "{{{}}}",
            fields.iter()
                .map(|(name, value)| format!(
                    "{name}: {}",
                    value_to_graphql_string(value),
                ))
                .collect::<Vec<_>>()
                .join(", "),
        ),
        Value::String(s) => format!("{s:?}"),
        Value::Variable(name) => format!("${name}"),
    }
}
