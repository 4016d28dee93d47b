use crate::loc;
use crate::test_utils;
use crate::types::TypeAnnotation;

fn annotation_of(type_name: &str, field_name: &str) -> TypeAnnotation {
    let schema = test_utils::star_wars_schema();
    schema.lookup_type(type_name)
        .and_then(|type_| type_.fields())
        .and_then(|fields| fields.get(field_name))
        .map(|field| field.type_annotation().to_owned())
        .unwrap()
}

#[test]
fn display_named_annotations() {
    assert_eq!(annotation_of("Character", "id").to_string(), "String!");
    assert_eq!(annotation_of("Character", "name").to_string(), "String");
}

#[test]
fn display_list_annotations() {
    assert_eq!(annotation_of("Character", "friends").to_string(), "[Character]");
    assert_eq!(annotation_of("Query", "search").to_string(), "[SearchResult!]!");
}

#[test]
fn non_null_wrappers_fold_into_nullable() {
    let annot = annotation_of("Query", "search");

    assert!(!annot.nullable());
    let list_annot = annot.as_list_annotation().unwrap();
    assert!(!list_annot.inner_type_annotation().nullable());
    assert_eq!(
        annot.innermost_named_type_annotation().graphql_type_name(),
        "SearchResult",
    );
}

#[test]
fn innermost_graphql_type_unwraps_lists() {
    let schema = test_utils::star_wars_schema();
    let annot = annotation_of("Character", "appearsIn");

    let type_ = annot.innermost_graphql_type(&schema).unwrap();
    assert_eq!(type_.name(), "Episode");
}

#[test]
fn builtin_annotations_have_builtin_location() {
    let annot = TypeAnnotation::builtin_named("String", false);

    assert_eq!(annot.ref_location(), &loc::SourceLocation::GraphQLBuiltIn);
    assert_eq!(annot.to_string(), "String!");
}
