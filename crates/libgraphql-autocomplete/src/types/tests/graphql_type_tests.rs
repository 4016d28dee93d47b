use crate::test_utils;
use crate::types::GraphQLTypeKind;

#[test]
fn kind_predicates() {
    let schema = test_utils::star_wars_schema();
    let lookup = |name: &str| schema.lookup_type(name).unwrap();

    assert!(lookup("Character").is_abstract());
    assert!(lookup("SearchResult").is_abstract());
    assert!(!lookup("Human").is_abstract());

    assert!(lookup("Human").is_composite());
    assert!(!lookup("Episode").is_composite());

    assert!(lookup("ReviewInput").is_input_type());
    assert!(lookup("Episode").is_input_type());
    assert!(lookup("Int").is_input_type());
    assert!(!lookup("Review").is_input_type());

    assert_eq!(lookup("Boolean").kind(), GraphQLTypeKind::Bool);
    assert!(GraphQLTypeKind::Union.is_abstract());
    assert!(!GraphQLTypeKind::Object.is_abstract());
    assert!(GraphQLTypeKind::InputObject.is_input());
    assert!(!GraphQLTypeKind::Interface.is_input());
    assert_eq!(GraphQLTypeKind::Bool.to_string(), "Boolean");
}

#[test]
fn fields_only_exist_on_objects_and_interfaces() {
    let schema = test_utils::star_wars_schema();

    assert!(schema.lookup_type("Human").unwrap().fields().is_some());
    assert!(schema.lookup_type("Character").unwrap().fields().is_some());
    assert!(schema.lookup_type("SearchResult").unwrap().fields().is_none());
    assert!(schema.lookup_type("ReviewInput").unwrap().fields().is_none());
}

#[test]
fn object_interfaces_resolve_through_schema() {
    let schema = test_utils::star_wars_schema();
    let human = schema.lookup_type("Human").unwrap().as_object().unwrap();

    assert_eq!(human.interface_names(), vec!["Character"]);
    let ifaces = human.interfaces(&schema);
    assert_eq!(ifaces.len(), 1);
    assert_eq!(ifaces[0].name(), "Character");
}

#[test]
fn enum_values_carry_descriptions_and_deprecations() {
    let schema = test_utils::star_wars_schema();
    let episode = schema.lookup_type("Episode").unwrap().as_enum().unwrap();
    let unit = schema.lookup_type("LengthUnit").unwrap().as_enum().unwrap();

    assert_eq!(episode.description(), Some("One of the films in the Star Wars Trilogy"));
    assert_eq!(episode.values()["NEWHOPE"].description(), Some("Released in 1977."));
    assert_eq!(unit.values()["CUBIT"].deprecation_reason(), Some("No longer supported"));
}
