use crate::fuzzy::lexical_distance;
use crate::fuzzy::normalize;
use proptest::prelude::*;

#[test]
fn normalize_keeps_only_lowercased_word_chars() {
    assert_eq!(normalize("Hero_Name-2!"), "hero_name2");
    assert_eq!(normalize("__typename"), "__typename");
    assert_eq!(normalize("$episode"), "episode");
    assert_eq!(normalize("{"), "");
    assert_eq!(normalize("Ñame"), "ame");
}

#[test]
fn basic_edits() {
    assert_eq!(lexical_distance("", ""), 0);
    assert_eq!(lexical_distance("hero", "hero"), 0);
    assert_eq!(lexical_distance("hero", "her"), 1);
    assert_eq!(lexical_distance("her", "hero"), 1);
    assert_eq!(lexical_distance("hero", "zero"), 1);
    assert_eq!(lexical_distance("kitten", "sitting"), 3);
}

#[test]
fn adjacent_transposition_costs_one() {
    assert_eq!(lexical_distance("ab", "ba"), 1);
    assert_eq!(lexical_distance("hreo", "hero"), 1);
    assert_eq!(lexical_distance("abc", "acb"), 1);
}

#[test]
fn transposed_pair_is_not_edited_again() {
    // Unrestricted Damerau-Levenshtein would give 2 ("ca" -> "ac" -> "abc").
    assert_eq!(lexical_distance("ca", "abc"), 3);
}

#[test]
fn counts_chars_not_bytes() {
    assert_eq!(lexical_distance("é", ""), 1);
    assert_eq!(lexical_distance("éa", "aé"), 1);
}

proptest! {
    #[test]
    fn distance_to_self_is_zero(s in "\\PC{0,24}") {
        prop_assert_eq!(lexical_distance(&s, &s), 0);
    }

    #[test]
    fn distance_from_empty_is_length(s in "\\PC{0,24}") {
        prop_assert_eq!(lexical_distance("", &s), s.chars().count());
        prop_assert_eq!(lexical_distance(&s, ""), s.chars().count());
    }

    #[test]
    fn distance_is_symmetric(a in "[a-e]{0,10}", b in "[a-e]{0,10}") {
        prop_assert_eq!(lexical_distance(&a, &b), lexical_distance(&b, &a));
    }

    #[test]
    fn distance_is_bounded_by_longer_length(a in "[a-e]{0,10}", b in "[a-e]{0,10}") {
        let bound = a.chars().count().max(b.chars().count());
        prop_assert!(lexical_distance(&a, &b) <= bound);
    }

    #[test]
    fn normalize_is_idempotent(s in "\\PC{0,24}") {
        let once = normalize(&s);
        prop_assert_eq!(normalize(&once), once.clone());
    }
}
