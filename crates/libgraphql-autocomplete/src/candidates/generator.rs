use crate::candidates::CandidateEntry;
use crate::candidates::CandidateType;
use crate::candidates::KnownFragment;
use crate::grammar::GrammarKind;
use crate::grammar::GrammarState;
use crate::schema::Schema;
use crate::type_info::schema_meta_field;
use crate::type_info::type_meta_field;
use crate::type_info::typename_meta_field;
use crate::type_info::TypeContext;
use crate::types::DirectiveLocation;
use crate::types::Field;
use crate::types::GraphQLType;

const DOCUMENT_KEYWORDS: [&str; 5] = ["query", "mutation", "subscription", "fragment", "{"];

/// List the candidates for the grammar position described by `leaf` (the
/// state the cursor is in) and `ancestor_kind` (the kind of the state
/// enclosing it).
///
/// Returns `None` when nothing can be suggested at this position, either
/// because no suggestions apply to it or because `ctx` lacks the type
/// information they would be drawn from. `known_fragments` is only consulted
/// at fragment spreads.
pub fn generate(
    schema: &Schema,
    ctx: &TypeContext<'_>,
    leaf: &GrammarState,
    ancestor_kind: Option<GrammarKind>,
    known_fragments: &[KnownFragment],
) -> Option<Vec<CandidateEntry>> {
    let step = leaf.step;
    match leaf.kind {
        GrammarKind::Document =>
            Some(DOCUMENT_KEYWORDS.into_iter().map(CandidateEntry::new).collect()),

        GrammarKind::AliasedField
            | GrammarKind::Field
            | GrammarKind::SelectionSet =>
            field_names(schema, ctx),

        GrammarKind::Arguments =>
            argument_names(schema, ctx),
        GrammarKind::Argument if step == 0 =>
            argument_names(schema, ctx),

        GrammarKind::ObjectValue =>
            object_field_names(schema, ctx),
        GrammarKind::ObjectField if step == 0 =>
            object_field_names(schema, ctx),

        GrammarKind::EnumValue =>
            values(schema, ctx),
        GrammarKind::ListValue if step == 1 =>
            values(schema, ctx),
        GrammarKind::ObjectField | GrammarKind::Argument if step == 2 =>
            values(schema, ctx),

        GrammarKind::TypeCondition if step == 1 =>
            type_conditions(schema, ctx),
        GrammarKind::NamedType if ancestor_kind == Some(GrammarKind::TypeCondition) =>
            type_conditions(schema, ctx),

        GrammarKind::VariableDefinition if step == 2 =>
            input_types(schema),
        GrammarKind::ListType if step == 1 =>
            input_types(schema),
        GrammarKind::NamedType if matches!(
            ancestor_kind,
            Some(GrammarKind::ListType | GrammarKind::VariableDefinition),
        ) =>
            input_types(schema),

        GrammarKind::Directive =>
            directives(schema, ancestor_kind),

        GrammarKind::FragmentSpread if step == 1 =>
            fragment_spreads(schema, ctx, known_fragments),

        GrammarKind::Argument
            | GrammarKind::BooleanValue
            | GrammarKind::Comment
            | GrammarKind::DefaultValue
            | GrammarKind::FragmentDefinition
            | GrammarKind::FragmentSpread
            | GrammarKind::InlineFragment
            | GrammarKind::Invalid
            | GrammarKind::ListType
            | GrammarKind::ListValue
            | GrammarKind::Mutation
            | GrammarKind::NamedType
            | GrammarKind::NonNullType
            | GrammarKind::NullValue
            | GrammarKind::NumberValue
            | GrammarKind::ObjectField
            | GrammarKind::Query
            | GrammarKind::Selection
            | GrammarKind::ShortQuery
            | GrammarKind::StringValue
            | GrammarKind::Subscription
            | GrammarKind::TypeCondition
            | GrammarKind::Variable
            | GrammarKind::VariableDefinition
            | GrammarKind::VariableDefinitions => None,
    }
}

fn field_entry(schema: &Schema, field: &Field) -> CandidateEntry {
    CandidateEntry::new(field.name())
        .with_type(CandidateType::from_annotation(schema, field.type_annotation()))
        .with_description(field.description())
        .with_deprecation_reason(field.deprecation_reason())
}

fn type_entry(type_: &GraphQLType) -> CandidateEntry {
    CandidateEntry::new(type_.name())
        .with_description(type_.description())
}

fn field_names(schema: &Schema, ctx: &TypeContext<'_>) -> Option<Vec<CandidateEntry>> {
    let parent_type = ctx.parent_type?;
    let mut entries = parent_type.fields()
        .map(|fields| {
            fields.values()
                .map(|field| field_entry(schema, field))
                .collect::<Vec<_>>()
        })
        .unwrap_or_default();

    if parent_type.is_abstract() {
        entries.push(field_entry(schema, typename_meta_field()));
    }
    if schema.is_query_type(parent_type) {
        entries.push(field_entry(schema, schema_meta_field()));
        entries.push(field_entry(schema, type_meta_field()));
    }

    Some(entries)
}

fn argument_names(schema: &Schema, ctx: &TypeContext<'_>) -> Option<Vec<CandidateEntry>> {
    Some(ctx.arg_defs?
        .values()
        .map(|arg_def| {
            CandidateEntry::new(arg_def.name())
                .with_type(CandidateType::from_annotation(schema, arg_def.type_annotation()))
                .with_description(arg_def.description())
        })
        .collect())
}

fn object_field_names(schema: &Schema, ctx: &TypeContext<'_>) -> Option<Vec<CandidateEntry>> {
    Some(ctx.object_field_defs?
        .values()
        .map(|field_def| {
            CandidateEntry::new(field_def.name())
                .with_type(CandidateType::from_annotation(schema, field_def.type_annotation()))
                .with_description(field_def.description())
        })
        .collect())
}

fn values(schema: &Schema, ctx: &TypeContext<'_>) -> Option<Vec<CandidateEntry>> {
    let named_input_type = ctx.input_type?.innermost_graphql_type(schema)?;
    match named_input_type {
        GraphQLType::Enum(enum_type) => Some(
            enum_type.values()
                .values()
                .map(|value| {
                    CandidateEntry::new(value.name())
                        .with_type(CandidateType::from_type(named_input_type))
                        .with_description(value.description())
                        .with_deprecation_reason(value.deprecation_reason())
                })
                .collect(),
        ),

        GraphQLType::Bool => Some(vec![
            CandidateEntry::new("true")
                .with_type(CandidateType::from_type(named_input_type))
                .with_description(Some("Not false.")),
            CandidateEntry::new("false")
                .with_type(CandidateType::from_type(named_input_type))
                .with_description(Some("Not true.")),
        ]),

        _ => None,
    }
}

fn type_conditions(schema: &Schema, ctx: &TypeContext<'_>) -> Option<Vec<CandidateEntry>> {
    let possible_types = match ctx.parent_type {
        Some(parent_type) if parent_type.is_abstract() =>
            schema.possible_types(parent_type),
        Some(parent_type) => vec![parent_type],
        None => schema.all_types()
            .values()
            .filter(|type_| type_.is_composite())
            .collect(),
    };
    Some(possible_types.into_iter().map(type_entry).collect())
}

fn input_types(schema: &Schema) -> Option<Vec<CandidateEntry>> {
    Some(schema.all_types()
        .values()
        .filter(|type_| type_.is_input_type())
        .map(type_entry)
        .collect())
}

fn directive_location(ancestor_kind: GrammarKind) -> Option<DirectiveLocation> {
    match ancestor_kind {
        GrammarKind::AliasedField | GrammarKind::Field =>
            Some(DirectiveLocation::Field),
        GrammarKind::FragmentDefinition => Some(DirectiveLocation::FragmentDefinition),
        GrammarKind::FragmentSpread => Some(DirectiveLocation::FragmentSpread),
        GrammarKind::InlineFragment => Some(DirectiveLocation::InlineFragment),
        GrammarKind::Mutation => Some(DirectiveLocation::Mutation),
        GrammarKind::Query | GrammarKind::ShortQuery => Some(DirectiveLocation::Query),
        GrammarKind::Subscription => Some(DirectiveLocation::Subscription),
        GrammarKind::VariableDefinition => Some(DirectiveLocation::VariableDefinition),
        _ => None,
    }
}

fn directives(
    schema: &Schema,
    ancestor_kind: Option<GrammarKind>,
) -> Option<Vec<CandidateEntry>> {
    // A directive in an unrecognized position still counts as a directive
    // position; it just has nothing valid to offer.
    let location = ancestor_kind.and_then(directive_location);
    Some(schema.all_directives()
        .values()
        .filter(|directive| location.is_some_and(|loc| directive.is_valid_at(loc)))
        .map(|directive| {
            CandidateEntry::new(directive.name())
                .with_description(directive.description())
        })
        .collect())
}

/// Two types overlap when some object type is a possible type of both.
fn types_overlap(schema: &Schema, type1: &GraphQLType, type2: &GraphQLType) -> bool {
    if type1.name() == type2.name() {
        return true;
    }
    let possible_types1 = schema.possible_types(type1);
    schema.possible_types(type2)
        .into_iter()
        .any(|type_| possible_types1.iter().any(|other| other.name() == type_.name()))
}

fn fragment_spreads(
    schema: &Schema,
    ctx: &TypeContext<'_>,
    known_fragments: &[KnownFragment],
) -> Option<Vec<CandidateEntry>> {
    Some(known_fragments
        .iter()
        .filter_map(|fragment| {
            let fragment_type = schema.lookup_type(fragment.type_condition.as_str());
            let applies = match (ctx.parent_type, fragment_type) {
                (None, _) => true,
                (Some(parent_type), Some(fragment_type)) =>
                    types_overlap(schema, parent_type, fragment_type),
                (Some(_), None) => false,
            };
            if !applies {
                return None;
            }

            let description = fragment.description.to_owned().unwrap_or_else(|| {
                format!("fragment {} on {}", fragment.name, fragment.type_condition)
            });
            let mut entry = CandidateEntry::new(fragment.name.as_str())
                .with_description(Some(description.as_str()));
            if let Some(fragment_type) = fragment_type {
                entry = entry.with_type(CandidateType::from_type(fragment_type));
            }
            Some(entry)
        })
        .collect())
}
