use crate::candidates::generate;
use crate::candidates::CandidateEntry;
use crate::candidates::CandidateType;
use crate::candidates::KnownFragment;
use crate::grammar::ParserStateChain;
use crate::schema::Schema;
use crate::test_utils;
use crate::test_utils::texts;
use crate::type_info;
use crate::types::GraphQLTypeKind;

fn generate_str(
    schema: &Schema,
    chain: &str,
    known_fragments: &[KnownFragment],
) -> Option<Vec<CandidateEntry>> {
    let chain: ParserStateChain = chain.parse().unwrap();
    let ctx = type_info::resolve(schema, &chain);
    generate(
        schema,
        &ctx,
        chain.leaf().unwrap(),
        chain.leaf_ancestor_kind(),
        known_fragments,
    )
}

mod document {
    use super::*;

    #[test]
    fn document_keywords_regardless_of_schema() {
        let star_wars = test_utils::star_wars_schema();
        let tiny = Schema::builder()
            .load_str(None, "type Query { a: Int }")
            .unwrap()
            .build()
            .unwrap();

        for schema in [&star_wars, &tiny] {
            let entries = generate_str(schema, "Document", &[]).unwrap();
            assert_eq!(
                texts(&entries),
                vec!["query", "mutation", "subscription", "fragment", "{"],
            );
        }
    }
}

mod field_names {
    use super::*;

    #[test]
    fn query_root_fields_include_introspection() {
        let schema = test_utils::star_wars_schema();
        let entries = generate_str(&schema, "Document > Query > SelectionSet", &[]).unwrap();

        assert_eq!(
            texts(&entries),
            vec!["hero", "human", "droid", "search", "__schema", "__type"],
        );
        assert_eq!(entries[0].description(), Some("The hero of a given episode."));
        assert_eq!(entries[0].type_ref().map(|t| t.to_string()), Some("Character".to_string()));
    }

    #[test]
    fn abstract_parent_gets_typename_once() {
        let schema = test_utils::star_wars_schema();
        let entries = generate_str(
            &schema,
            "Document > ShortQuery > SelectionSet > Field:hero > SelectionSet > Field:na",
            &[],
        ).unwrap();

        assert_eq!(
            texts(&entries),
            vec!["id", "name", "friends", "appearsIn", "__typename"],
        );
        let typename_count = entries.iter().filter(|e| e.text() == "__typename").count();
        assert_eq!(typename_count, 1);
    }

    #[test]
    fn union_parent_only_offers_typename() {
        let schema = test_utils::star_wars_schema();
        let entries = generate_str(
            &schema,
            "Document > Query > SelectionSet > Field:search > SelectionSet",
            &[],
        ).unwrap();

        assert_eq!(texts(&entries), vec!["__typename"]);
    }

    #[test]
    fn concrete_parent_has_no_meta_fields() {
        let schema = test_utils::star_wars_schema();
        let entries = generate_str(
            &schema,
            "Document > Query > SelectionSet > Field:droid > SelectionSet",
            &[],
        ).unwrap();

        assert_eq!(
            texts(&entries),
            vec!["id", "name", "friends", "appearsIn", "primaryFunction", "serialNumber"],
        );
        assert_eq!(entries[5].deprecation_reason(), Some("Use `id`."));
    }

    #[test]
    fn unknown_parent_yields_nothing() {
        let schema = test_utils::star_wars_schema();

        assert_eq!(
            generate_str(
                &schema,
                "Document > Query > SelectionSet > Field:villain > SelectionSet",
                &[],
            ),
            None,
        );
    }
}

mod arguments {
    use super::*;

    #[test]
    fn field_argument_names_in_declaration_order() {
        let schema = test_utils::star_wars_schema();
        let entries = generate_str(
            &schema,
            "Document > Query > SelectionSet > Field:search > Arguments",
            &[],
        ).unwrap();

        assert_eq!(texts(&entries), vec!["text", "first"]);
        assert_eq!(entries[1].type_ref().map(|t| t.to_string()), Some("Int".to_string()));
    }

    #[test]
    fn argument_name_at_first_step() {
        let schema = test_utils::star_wars_schema();
        let entries = generate_str(
            &schema,
            "Document > Mutation > SelectionSet > Field:createReview > Arguments > Argument:rev",
            &[],
        ).unwrap();

        assert_eq!(texts(&entries), vec!["episode", "review"]);
    }

    #[test]
    fn directive_argument_names() {
        let schema = test_utils::star_wars_schema();
        let entries = generate_str(
            &schema,
            "Document > Query > SelectionSet > Field:hero > Directive:auth > Arguments",
            &[],
        ).unwrap();

        assert_eq!(texts(&entries), vec!["role"]);
    }

    #[test]
    fn unknown_field_has_no_arguments() {
        let schema = test_utils::star_wars_schema();

        assert_eq!(
            generate_str(
                &schema,
                "Document > Query > SelectionSet > Field:villain > Arguments",
                &[],
            ),
            None,
        );
    }
}

mod input_values {
    use super::*;

    #[test]
    fn input_object_field_names() {
        let schema = test_utils::star_wars_schema();
        let entries = generate_str(
            &schema,
            "Document > Mutation > SelectionSet > Field:createReview > Arguments \
             > Argument#2:review > ObjectValue",
            &[],
        ).unwrap();

        assert_eq!(texts(&entries), vec!["stars", "commentary", "episode"]);
        assert_eq!(entries[0].description(), Some("0-5 stars"));
    }

    #[test]
    fn enum_values_at_argument_value() {
        let schema = test_utils::star_wars_schema();
        let entries = generate_str(
            &schema,
            "Document > Query > SelectionSet > Field:hero > Arguments > Argument#2:episode",
            &[],
        ).unwrap();

        assert_eq!(texts(&entries), vec!["NEWHOPE", "EMPIRE", "JEDI"]);
        assert_eq!(entries[1].description(), Some("Released in 1980."));
        assert_eq!(entries[1].type_ref(), Some(&CandidateType::Named {
            kind: Some(GraphQLTypeKind::Enum),
            name: "Episode".to_string(),
            nullable: true,
        }));
    }

    #[test]
    fn enum_values_inside_input_object_field() {
        let schema = test_utils::star_wars_schema();
        let entries = generate_str(
            &schema,
            "Document > Mutation > SelectionSet > Field:createReview > Arguments \
             > Argument#2:review > ObjectValue > ObjectField#2:episode > EnumValue",
            &[],
        ).unwrap();

        assert_eq!(texts(&entries), vec!["NEWHOPE", "EMPIRE", "JEDI"]);
    }

    #[test]
    fn enum_values_inside_list_value() {
        let schema = Schema::builder()
            .load_str(None, concat!(
                "enum Color { RED GREEN }\n",
                "type Query { paint(colors: [Color!]!): Int }\n",
            ))
            .unwrap()
            .build()
            .unwrap();
        let entries = generate_str(
            &schema,
            "Document > Query > SelectionSet > Field:paint > Arguments \
             > Argument#2:colors > ListValue#1",
            &[],
        ).unwrap();

        assert_eq!(texts(&entries), vec!["RED", "GREEN"]);
        assert_eq!(entries[0].type_ref().map(|t| t.to_string()), Some("Color".to_string()));
    }

    #[test]
    fn boolean_values() {
        let schema = test_utils::star_wars_schema();
        let entries = generate_str(
            &schema,
            "Document > Query > SelectionSet > Field:hero > Directive:skip > Arguments > Argument#2:if",
            &[],
        ).unwrap();

        assert_eq!(texts(&entries), vec!["true", "false"]);
        assert_eq!(entries[0].description(), Some("Not false."));
        assert_eq!(entries[1].description(), Some("Not true."));
    }

    #[test]
    fn other_scalars_have_no_values() {
        let schema = test_utils::star_wars_schema();

        assert_eq!(
            generate_str(
                &schema,
                "Document > Query > SelectionSet > Field:search > Arguments > Argument#2:first",
                &[],
            ),
            None,
        );
    }

    #[test]
    fn argument_at_intermediate_step_yields_nothing() {
        let schema = test_utils::star_wars_schema();

        assert_eq!(
            generate_str(
                &schema,
                "Document > Query > SelectionSet > Field:hero > Arguments > Argument#1:episode",
                &[],
            ),
            None,
        );
    }
}

mod type_names {
    use super::*;

    #[test]
    fn type_condition_on_abstract_parent() {
        let schema = test_utils::star_wars_schema();
        let entries = generate_str(
            &schema,
            "Document > Query > SelectionSet > Field:hero > SelectionSet \
             > InlineFragment > TypeCondition#1",
            &[],
        ).unwrap();

        assert_eq!(texts(&entries), vec!["Human", "Droid"]);
        assert_eq!(
            entries[0].description(),
            Some("A humanoid creature in the Star Wars universe."),
        );
    }

    #[test]
    fn type_condition_on_concrete_parent() {
        let schema = test_utils::star_wars_schema();
        let entries = generate_str(
            &schema,
            "Document > Query > SelectionSet > Field:human > SelectionSet \
             > InlineFragment > TypeCondition > NamedType",
            &[],
        ).unwrap();

        assert_eq!(texts(&entries), vec!["Human"]);
    }

    #[test]
    fn type_condition_without_parent() {
        let schema = test_utils::star_wars_schema();
        let entries = generate_str(
            &schema,
            "Document > FragmentDefinition:Frag > TypeCondition#1",
            &[],
        ).unwrap();

        assert_eq!(
            texts(&entries),
            vec![
                "Character",
                "Human",
                "Droid",
                "Starship",
                "SearchResult",
                "Review",
                "Query",
                "Mutation",
            ],
        );
    }

    #[test]
    fn variable_types_are_input_types() {
        let schema = test_utils::star_wars_schema();
        let expected = vec![
            "Boolean",
            "Float",
            "ID",
            "Int",
            "String",
            "Episode",
            "LengthUnit",
            "ReviewInput",
        ];

        for chain in [
            "Document > Query > VariableDefinitions > VariableDefinition#2",
            "Document > Query > VariableDefinitions > VariableDefinition > ListType#1",
            "Document > Query > VariableDefinitions > VariableDefinition > NamedType",
            "Document > Query > VariableDefinitions > VariableDefinition > ListType > NamedType",
        ] {
            let entries = generate_str(&schema, chain, &[]).unwrap();
            assert_eq!(texts(&entries), expected, "{chain}");
        }
    }

    #[test]
    fn named_type_elsewhere_yields_nothing() {
        let schema = test_utils::star_wars_schema();

        assert_eq!(
            generate_str(
                &schema,
                "Document > Query > VariableDefinitions > VariableDefinition > NonNullType > NamedType",
                &[],
            ),
            None,
        );
    }
}

mod directives {
    use super::*;

    #[test]
    fn field_directives() {
        let schema = test_utils::star_wars_schema();
        let entries = generate_str(
            &schema,
            "Document > Query > SelectionSet > Field:hero > Directive",
            &[],
        ).unwrap();

        assert_eq!(texts(&entries), vec!["skip", "include", "auth"]);
    }

    #[test]
    fn operation_directives() {
        let schema = test_utils::star_wars_schema();

        let query_entries = generate_str(&schema, "Document > Query > Directive", &[]).unwrap();
        assert_eq!(texts(&query_entries), vec!["auth"]);

        let mutation_entries =
            generate_str(&schema, "Document > Mutation > Directive", &[]).unwrap();
        assert!(mutation_entries.is_empty());
    }

    #[test]
    fn subscription_directives() {
        let schema = Schema::builder()
            .load_str(None, concat!(
                "type Query { a: Int }\n",
                "type Subscription { colorChanged: Int }\n",
                "directive @live on SUBSCRIPTION | QUERY\n",
                "directive @sampled on FIELD\n",
            ))
            .unwrap()
            .build()
            .unwrap();

        let entries = generate_str(&schema, "Document > Subscription > Directive", &[]).unwrap();
        assert_eq!(texts(&entries), vec!["live"]);

        let star_wars = test_utils::star_wars_schema();
        let entries =
            generate_str(&star_wars, "Document > Subscription > Directive", &[]).unwrap();
        assert!(entries.is_empty());
    }

    #[test]
    fn fragment_directives() {
        let schema = test_utils::star_wars_schema();

        for chain in [
            "Document > Query > SelectionSet > FragmentSpread:Frag > Directive",
            "Document > Query > SelectionSet > InlineFragment > Directive",
        ] {
            let entries = generate_str(&schema, chain, &[]).unwrap();
            assert_eq!(texts(&entries), vec!["skip", "include"], "{chain}");
        }

        let definition_entries = generate_str(
            &schema,
            "Document > FragmentDefinition:Frag@Human > Directive",
            &[],
        ).unwrap();
        assert!(definition_entries.is_empty());
    }
}

mod fragment_spreads {
    use super::*;

    fn known_fragments() -> Vec<KnownFragment> {
        vec![
            KnownFragment::new("HumanFields", "Human"),
            KnownFragment::new("StarshipFields", "Starship"),
            KnownFragment {
                description: Some("Everything about a character".to_string()),
                name: "CharacterFields".to_string(),
                type_condition: "Character".to_string(),
            },
            KnownFragment::new("GhostFields", "Ghost"),
        ]
    }

    #[test]
    fn spreads_filtered_by_overlapping_type() {
        let schema = test_utils::star_wars_schema();
        let entries = generate_str(
            &schema,
            "Document > Query > SelectionSet > Field:hero > SelectionSet > FragmentSpread#1",
            &known_fragments(),
        ).unwrap();

        assert_eq!(texts(&entries), vec!["HumanFields", "CharacterFields"]);
        assert_eq!(entries[0].description(), Some("fragment HumanFields on Human"));
        assert_eq!(entries[1].description(), Some("Everything about a character"));
    }

    #[test]
    fn union_parent_overlaps_with_member_fragments() {
        let schema = test_utils::star_wars_schema();
        let entries = generate_str(
            &schema,
            "Document > Query > SelectionSet > Field:search > SelectionSet > FragmentSpread#1",
            &known_fragments(),
        ).unwrap();

        assert_eq!(
            texts(&entries),
            vec!["HumanFields", "StarshipFields", "CharacterFields"],
        );
    }

    #[test]
    fn every_spread_without_parent() {
        let schema = test_utils::star_wars_schema();
        let entries = generate_str(
            &schema,
            "Document > FragmentDefinition:Frag@Wookiee > SelectionSet > FragmentSpread#1",
            &known_fragments(),
        ).unwrap();

        assert_eq!(entries.len(), 4);
    }
}
