//! Stored allergen payloads.
//!
//! Recipe ingredients keep predicted or user-entered allergens as a JSON
//! blob: a list of entries, a single entry object, or a bare string. Each
//! item is resolved into an [`AllergenView`], skipping anything already
//! listed for the ingredient.

use std::collections::BTreeSet;

use allergen_model::LookupValue;
use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use crate::allergen::resolve_allergen_term;
use crate::certainty::normalize_certainty;
use crate::entry::{AllergenPayload, AllergenView, normalize_allergen_entry};

/// Allergens recovered from a stored payload.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PayloadAllergens {
    pub allergens: Vec<AllergenView>,
    /// Raw payload text when it was not JSON and produced nothing.
    pub unparsed: Option<String>,
}

/// Resolve a stored allergen payload.
///
/// `known_codes` holds lower-cased codes already shown for the ingredient;
/// items whose display or stored code is known are skipped, and the codes
/// of every appended item are added.
pub fn resolve_allergen_payload(raw: &str, known_codes: &mut BTreeSet<String>) -> PayloadAllergens {
    let mut result = PayloadAllergens::default();
    if raw.is_empty() {
        return result;
    }

    let decoded = match serde_json::from_str::<Value>(raw) {
        Ok(value) => value,
        Err(error) => {
            debug!(%error, "allergen payload is not JSON");
            Value::Null
        }
    };
    let items: Vec<&Value> = match &decoded {
        Value::Array(items) => items.iter().collect(),
        Value::Object(_) | Value::String(_) => vec![&decoded],
        _ => Vec::new(),
    };

    for item in items {
        let Some(view) = resolve_item(item) else {
            continue;
        };
        let lowered: Vec<String> = view.codes().map(str::to_lowercase).collect();
        if lowered.iter().any(|code| known_codes.contains(code)) {
            continue;
        }
        known_codes.extend(lowered);
        result.allergens.push(view);
    }

    if result.allergens.is_empty() && decoded.is_null() {
        result.unparsed = Some(raw.to_string());
    }
    result
}

fn resolve_item(item: &Value) -> Option<AllergenView> {
    if let Value::Object(object) = item {
        let payload = AllergenPayload::from_json_object(object);
        if let Some(normalized) = normalize_allergen_entry(&payload) {
            let certainty = normalize_certainty(normalized.certainty.as_ref());
            return Some(AllergenView::from_code(
                Some(&normalized.canonical_code),
                Some(&normalized.display_name),
                certainty.map(|c| c.as_str()),
                normalized.marker_type.as_deref(),
            ));
        }
        let canonical = resolve_allergen_term(payload.label_field())?;
        let certainty = normalize_certainty(payload.certainty.as_ref());
        let marker_type = payload.marker_type.as_ref().and_then(Value::as_str);
        return Some(AllergenView::from_canonical(canonical, certainty, marker_type));
    }

    let canonical = resolve_allergen_term(LookupValue::from(item))?;
    Some(AllergenView::from_canonical(canonical, None, None))
}
