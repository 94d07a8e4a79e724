use allergen_model::{CanonicalAllergen, LookupValue};
use allergen_normalization::{
    alias_keys, canonical_allergen_from_label, canonical_allergen_from_label_in,
    canonical_allergens, canonicalize_allergen, canonicalize_allergen_in,
};
use allergen_standards::AllergenRegistry;
use proptest::prelude::*;

fn slug_of(value: Option<&CanonicalAllergen>) -> Option<&'static str> {
    value.map(|entry| entry.slug)
}

#[test]
fn every_alias_and_label_resolves_to_its_entry() {
    for entry in canonical_allergens() {
        for term in entry.match_terms() {
            assert_eq!(
                slug_of(canonicalize_allergen(term)),
                Some(entry.slug),
                "term {term}"
            );
        }
    }
}

#[test]
fn lookup_is_case_and_trim_insensitive() {
    assert_eq!(
        canonicalize_allergen("  WHEAT "),
        canonicalize_allergen("wheat")
    );
    assert_eq!(slug_of(canonicalize_allergen("wheat")), Some("cereals_gluten"));
    assert_eq!(
        slug_of(canonicalize_allergen("Sulphur Dioxide & Sulphites")),
        Some("sulphites")
    );
}

#[test]
fn absent_and_blank_yield_none() {
    assert!(canonicalize_allergen(None::<&str>).is_none());
    assert!(canonicalize_allergen("").is_none());
    assert!(canonicalize_allergen(" \t ").is_none());
    assert!(canonicalize_allergen(LookupValue::Absent).is_none());
    assert!(canonical_allergen_from_label(None::<String>).is_none());
    assert!(canonical_allergen_from_label("").is_none());
}

#[test]
fn label_lookup_does_not_match_alias_only_text() {
    assert!(canonical_allergen_from_label("dairy").is_none());
    assert_eq!(slug_of(canonicalize_allergen("dairy")), Some("milk"));
    assert_eq!(slug_of(canonical_allergen_from_label("Milk")), Some("milk"));
    assert_eq!(
        slug_of(canonical_allergen_from_label("not plant-based (VEGAN)")),
        Some("vegan")
    );
}

#[test]
fn canonical_entry_is_returned_unchanged() {
    let entry = &canonical_allergens()[7];
    let resolved = canonicalize_allergen(entry).expect("identity");
    assert!(std::ptr::eq(entry, resolved));
}

#[test]
fn foreign_canonical_entry_is_returned_unchanged() {
    let local = CanonicalAllergen::new("kiwi", "Kiwi", &[], &["kiwifruit"]);
    let resolved = canonicalize_allergen(&local).expect("identity");
    assert!(std::ptr::eq(&local, resolved));
}

#[test]
fn no_substring_matching_for_allergens() {
    assert!(canonicalize_allergen("Peanut butter traces").is_none());
    assert!(canonicalize_allergen("peanuts!").is_none());
    assert!(canonicalize_allergen("almond milk").is_none());
}

#[test]
fn non_text_values_are_coerced() {
    assert!(canonicalize_allergen(220).is_none());
    assert!(canonicalize_allergen(true).is_none());
    let json = serde_json::json!("E220");
    assert_eq!(slug_of(canonicalize_allergen(&json)), Some("sulphites"));
    let null = serde_json::Value::Null;
    assert!(canonicalize_allergen(&null).is_none());
}

#[test]
fn owned_strings_are_accepted() {
    let term = String::from("Tahini");
    assert_eq!(slug_of(canonicalize_allergen(&term)), Some("sesame"));
    assert_eq!(slug_of(canonicalize_allergen(term)), Some("sesame"));
    assert_eq!(
        slug_of(canonicalize_allergen(Some("prawn".to_string()))),
        Some("crustaceans")
    );
}

#[test]
fn custom_registry_keeps_last_write_wins() {
    static ENTRIES: &[CanonicalAllergen] = &[
        CanonicalAllergen::new("first", "First", &[], &["shared"]),
        CanonicalAllergen::new("second", "Second", &[], &["shared", "first"]),
    ];
    let registry = AllergenRegistry::new(ENTRIES);
    assert_eq!(
        slug_of(canonicalize_allergen_in(&registry, "shared")),
        Some("second")
    );
    // "first" is the first entry's label and the second entry's alias.
    assert_eq!(
        slug_of(canonicalize_allergen_in(&registry, "FIRST")),
        Some("second")
    );
    assert_eq!(
        slug_of(canonical_allergen_from_label_in(&registry, "First")),
        Some("first")
    );
}

#[test]
fn legacy_codes_are_not_lookup_terms() {
    static ENTRIES: &[CanonicalAllergen] =
        &[CanonicalAllergen::new("milk", "Milk", &["en:milk"], &["dairy"])];
    let registry = AllergenRegistry::new(ENTRIES);
    assert!(canonicalize_allergen_in(&registry, "en:milk").is_none());
}

fn alias_key_strategy() -> impl Strategy<Value = String> {
    let keys: Vec<String> = alias_keys().map(str::to_string).collect();
    prop::sample::select(keys)
}

proptest! {
    #[test]
    fn random_casing_and_padding_resolve_identically(
        key in alias_key_strategy(),
        upper in any::<bool>(),
        left in "[ \t]{0,3}",
        right in "[ \t\n]{0,3}",
    ) {
        let cased = if upper { key.to_uppercase() } else { key.clone() };
        let input = format!("{left}{cased}{right}");
        let expected = canonicalize_allergen(key.as_str()).map(|e| e.slug);
        prop_assert!(expected.is_some());
        prop_assert_eq!(canonicalize_allergen(input.as_str()).map(|e| e.slug), expected);
    }
}
