use std::collections::BTreeSet;

use allergen_model::{Certainty, UiCertainty};
use allergen_normalization::codes::TREE_NUTS;
use allergen_normalization::{
    AllergenPayload, AllergenView, ManualAllergenOptions, canonicalize_allergen,
    PayloadAllergens, manual_allergen_links, normalize_allergen_entry,
    resolve_allergen_payload,
};

fn payload(value: serde_json::Value) -> AllergenPayload {
    serde_json::from_value(value).expect("payload")
}

#[test]
fn entry_normalization_fills_metadata() {
    let entry = payload(serde_json::json!({
        "code": "tree_nuts:almonds",
        "certainty": "Confirmed",
        "marker_type": "  Contains ",
    }));
    let normalized = normalize_allergen_entry(&entry).expect("normalized");
    assert_eq!(normalized.canonical_code, "en:almonds");
    assert_eq!(normalized.display_code, "tree_nuts:almonds");
    assert_eq!(normalized.display_name, "Almonds");
    assert_eq!(normalized.family, Some(TREE_NUTS));
    assert_eq!(normalized.marker_type.as_deref(), Some("contains"));
    assert_eq!(normalized.certainty, Some(serde_json::json!("Confirmed")));
}

#[test]
fn entry_without_code_or_name_is_dropped() {
    let entry = payload(serde_json::json!({"certainty": "high"}));
    assert!(normalize_allergen_entry(&entry).is_none());
}

#[test]
fn canonical_view_serializes() {
    let milk = canonicalize_allergen("dairy").expect("milk");
    let view = AllergenView::from_canonical(milk, Some(Certainty::Certain), None);
    insta::assert_snapshot!(
        serde_json::to_string(&view).expect("serialize view"),
        @r#"{"code":"milk","name":"Milk","certainty":"certain","canonical_code":"milk","canonical_name":"Milk","family_code":null,"family_name":null,"marker_type":null}"#
    );
}

#[test]
fn family_view_uses_display_code() {
    let view = AllergenView::from_code(Some("en:almonds"), None, Some("likely"), Some("may contain"));
    assert_eq!(view.code, "tree_nuts:almonds");
    assert_eq!(view.name, "Almonds");
    assert_eq!(view.canonical_code.as_deref(), Some("en:almonds"));
    assert_eq!(view.family_code, Some("tree_nuts"));
    assert_eq!(view.family_name, Some("Tree nuts"));
    assert_eq!(view.certainty, UiCertainty::Likely);
}

#[test]
fn payload_list_resolves_and_dedupes() {
    let raw = r#"[
        {"code": "tree_nuts:almonds", "certainty": "Confirmed", "marker_type": " Contains "},
        "dairy",
        "Peanut butter traces",
        {"code": "EN:Almonds"},
        5,
        null
    ]"#;
    let mut known = BTreeSet::new();
    let result = resolve_allergen_payload(raw, &mut known);

    assert_eq!(result.unparsed, None);
    let codes: Vec<&str> = result.allergens.iter().map(|a| a.code.as_str()).collect();
    assert_eq!(codes, vec!["tree_nuts:almonds", "milk"]);
    assert_eq!(result.allergens[0].certainty, UiCertainty::Certain);
    assert_eq!(result.allergens[0].marker_type.as_deref(), Some("contains"));
    assert_eq!(result.allergens[1].certainty, UiCertainty::Likely);
    assert_eq!(
        known,
        BTreeSet::from([
            "en:almonds".to_string(),
            "milk".to_string(),
            "tree_nuts:almonds".to_string(),
        ])
    );
}

#[test]
fn payload_skips_codes_already_known() {
    let mut known = BTreeSet::from(["milk".to_string()]);
    let result = resolve_allergen_payload(r#"["cheese"]"#, &mut known);
    assert!(result.allergens.is_empty());
    assert_eq!(result.unparsed, None);
}

#[test]
fn single_string_payload() {
    let mut known = BTreeSet::new();
    let result = resolve_allergen_payload(r#""Sesame seeds""#, &mut known);
    assert_eq!(result.allergens.len(), 1);
    assert_eq!(result.allergens[0].canonical_code.as_deref(), Some("sesame"));
}

#[test]
fn object_without_code_or_name_is_skipped() {
    let mut known = BTreeSet::new();
    let result = resolve_allergen_payload(r#"{"certainty": "likely"}"#, &mut known);
    assert!(result.allergens.is_empty());
    assert_eq!(result.unparsed, None);
}

#[test]
fn invalid_json_is_returned_unparsed() {
    let mut known = BTreeSet::new();
    let result = resolve_allergen_payload("peanuts, milk", &mut known);
    assert!(result.allergens.is_empty());
    assert_eq!(result.unparsed.as_deref(), Some("peanuts, milk"));
    assert!(known.is_empty());
}

#[test]
fn empty_payload_is_ignored() {
    let mut known = BTreeSet::new();
    assert_eq!(
        resolve_allergen_payload("", &mut known),
        PayloadAllergens::default()
    );
}

#[test]
fn manual_links_dedupe_and_default_certainty() {
    let entries = vec![
        payload(serde_json::json!({"code": "tree_nuts:almonds", "certainty": "probable"})),
        payload(serde_json::json!({"code": "en:almonds", "name": "Almonds"})),
        payload(serde_json::json!({"name": "Sesame"})),
        payload(serde_json::json!({"certainty": "high"})),
        payload(serde_json::json!({"code": "en:milk", "certainty": "gibberish"})),
    ];
    let links = manual_allergen_links(&entries, &ManualAllergenOptions::default());
    let summary: Vec<(&str, &str, Certainty)> = links
        .iter()
        .map(|l| (l.canonical_code.as_str(), l.display_name.as_str(), l.certainty))
        .collect();
    assert_eq!(
        summary,
        vec![
            ("en:almonds", "Almonds", Certainty::Likely),
            ("en:sesame", "Sesame", Certainty::Certain),
            ("en:milk", "Milk", Certainty::Certain),
        ]
    );
    assert!(links.iter().all(|l| l.source == "user"));
    assert_eq!(links[0].family, Some(TREE_NUTS));
}

#[test]
fn manual_links_honour_options() {
    let entries = vec![payload(serde_json::json!({"code": "en:celery"}))];
    let options = ManualAllergenOptions::default()
        .with_default_certainty(Certainty::Likely)
        .with_source("import");
    let links = manual_allergen_links(&entries, &options);
    assert_eq!(links.len(), 1);
    assert_eq!(links[0].certainty, Certainty::Likely);
    assert_eq!(links[0].source, "import");
    assert_eq!(links[0].display_name, "Celery");
}
