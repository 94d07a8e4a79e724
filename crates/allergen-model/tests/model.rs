#![allow(missing_docs)]

use allergen_model::{CanonicalAllergen, Certainty, LookupValue, ModelError, UiCertainty};
use proptest::prelude::*;

static SESAME: CanonicalAllergen = CanonicalAllergen::new(
    "sesame",
    "Sesame seeds",
    &[],
    &["sesame", "tahini"],
);

#[test]
fn certainty_serializes_lowercase() {
    let json = serde_json::to_string(&Certainty::Certain).expect("serialize certainty");
    assert_eq!(json, "\"certain\"");
    let ui: UiCertainty = serde_json::from_str("\"confirmed\"").expect("deserialize ui");
    assert_eq!(ui, UiCertainty::Confirmed);
}

#[test]
fn certainty_parse_error_names_value() {
    let err = "probable".parse::<Certainty>().unwrap_err();
    assert_eq!(
        err,
        ModelError::UnknownCertainty {
            value: "probable".to_string()
        }
    );
}

#[test]
fn canonical_entry_serializes_all_fields() {
    let value = serde_json::to_value(&SESAME).expect("serialize entry");
    assert_eq!(value["slug"], "sesame");
    assert_eq!(value["label"], "Sesame seeds");
    assert_eq!(value["legacy_codes"], serde_json::json!([]));
    assert_eq!(value["aliases"], serde_json::json!(["sesame", "tahini"]));
}

#[test]
fn canonical_entry_lookup_value_reads_as_label() {
    let value = LookupValue::from(&SESAME);
    assert_eq!(value.as_text(), Some("Sesame seeds"));
    assert_eq!(value.lookup_key().as_deref(), Some("sesame seeds"));
}

proptest! {
    #[test]
    fn lookup_key_ignores_surrounding_whitespace(
        word in "[a-zA-Z]{1,12}",
        left in "[ \t\n]{0,4}",
        right in "[ \t\n]{0,4}",
    ) {
        let padded = format!("{left}{word}{right}");
        prop_assert_eq!(
            LookupValue::from(padded.as_str()).lookup_key(),
            Some(word.to_lowercase())
        );
    }
}
