use crate::grammar::GrammarKind;
use crate::grammar::ParserStateChain;
use crate::schema::Schema;
use crate::type_info::lookup_field_def;
use crate::type_info::TypeContext;
use crate::type_info::TypeRef;

/// Derive the [`TypeContext`] at the leaf of `chain`.
///
/// States are applied root to leaf, each updating only the facts its own
/// grammar kind determines. Anything that can't be determined (unknown
/// types, misspelled fields, a half-typed argument) is left as `None` and
/// every later rule tolerates that.
pub fn resolve<'schema>(
    schema: &'schema Schema,
    chain: &ParserStateChain,
) -> TypeContext<'schema> {
    let mut ctx = TypeContext::default();

    for (idx, state) in chain.iter().enumerate() {
        match state.kind {
            GrammarKind::Query | GrammarKind::ShortQuery => {
                ctx.type_ref = schema.lookup_type(schema.query_type_name())
                    .map(TypeRef::Named);
            },

            GrammarKind::Mutation => {
                ctx.type_ref = schema.mutation_type().map(TypeRef::Named);
            },

            GrammarKind::Subscription => {
                ctx.type_ref = schema.subscription_type().map(TypeRef::Named);
            },

            GrammarKind::FragmentDefinition | GrammarKind::InlineFragment => {
                ctx.type_ref = state.type_name
                    .as_deref()
                    .and_then(|type_name| schema.lookup_type(type_name))
                    .map(TypeRef::Named);
            },

            GrammarKind::AliasedField | GrammarKind::Field => {
                ctx.field_def = match (ctx.type_ref, ctx.parent_type, state.name.as_deref()) {
                    (Some(_), Some(parent_type), Some(field_name)) =>
                        lookup_field_def(schema, parent_type, field_name),
                    _ => None,
                };
                ctx.type_ref = ctx.field_def
                    .map(|field_def| TypeRef::Annotated(field_def.type_annotation()));
            },

            GrammarKind::SelectionSet => {
                ctx.parent_type = ctx.type_ref
                    .and_then(|type_ref| type_ref.named_type(schema));
            },

            GrammarKind::Directive => {
                ctx.directive_def = state.name
                    .as_deref()
                    .and_then(|name| schema.directive(name));
            },

            GrammarKind::Arguments => {
                ctx.arg_defs = match chain.enclosing(idx).map(|ancestor| ancestor.kind) {
                    Some(GrammarKind::AliasedField | GrammarKind::Field) =>
                        ctx.field_def.map(|field_def| field_def.parameters()),
                    Some(GrammarKind::Directive) =>
                        ctx.directive_def.map(|directive_def| directive_def.parameters()),
                    _ => None,
                };
            },

            GrammarKind::Argument => {
                ctx.arg_def = match (ctx.arg_defs, state.name.as_deref()) {
                    (Some(arg_defs), Some(arg_name)) =>
                        arg_defs.values().find(|arg_def| arg_def.name() == arg_name),
                    _ => None,
                };
                ctx.input_type = ctx.arg_def.map(|arg_def| arg_def.type_annotation());
            },

            GrammarKind::ListValue => {
                ctx.input_type = ctx.input_type
                    .and_then(|input_type| input_type.as_list_annotation())
                    .map(|list_annot| list_annot.inner_type_annotation());
            },

            GrammarKind::ObjectValue => {
                ctx.object_field_defs = ctx.input_type
                    .and_then(|input_type| input_type.innermost_graphql_type(schema))
                    .and_then(|named_type| named_type.as_input_object())
                    .map(|inputobj_type| inputobj_type.fields());
            },

            GrammarKind::ObjectField => {
                ctx.input_type = match (ctx.object_field_defs, state.name.as_deref()) {
                    (Some(field_defs), Some(field_name)) =>
                        field_defs.get(field_name).map(|field| field.type_annotation()),
                    _ => None,
                };
            },

            GrammarKind::BooleanValue
                | GrammarKind::Comment
                | GrammarKind::DefaultValue
                | GrammarKind::Document
                | GrammarKind::EnumValue
                | GrammarKind::FragmentSpread
                | GrammarKind::Invalid
                | GrammarKind::ListType
                | GrammarKind::NamedType
                | GrammarKind::NonNullType
                | GrammarKind::NullValue
                | GrammarKind::NumberValue
                | GrammarKind::Selection
                | GrammarKind::StringValue
                | GrammarKind::TypeCondition
                | GrammarKind::Variable
                | GrammarKind::VariableDefinition
                | GrammarKind::VariableDefinitions => (),
        }

        log::trace!(
            "type_info: `{state}` -> type: {}, parent_type: {}, input_type: {}",
            ctx.type_ref.map(|type_ref| type_ref.to_string()).unwrap_or_default(),
            ctx.parent_type.map(|parent_type| parent_type.name()).unwrap_or_default(),
            ctx.input_type.map(|input_type| input_type.to_string()).unwrap_or_default(),
        );
    }

    ctx
}
