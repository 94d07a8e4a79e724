//! Allergen payload entries and response views.

use allergen_model::{CanonicalAllergen, Certainty, UiCertainty};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::certainty::certainty_to_ui;
use crate::codes::{
    AllergenFamily, canonical_code_from_payload, display_code_for, fallback_name_from_code,
    family_for_code,
};

/// An allergen as submitted by a user or a prediction service.
///
/// Every field is optional. `certainty` and `marker_type` keep the raw JSON
/// value since callers send strings, numbers or nothing at all.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AllergenPayload {
    pub code: Option<String>,
    pub canonical_code: Option<String>,
    pub name: Option<String>,
    pub canonical_name: Option<String>,
    pub allergen: Option<String>,
    pub marker_type: Option<Value>,
    pub certainty: Option<Value>,
}

impl AllergenPayload {
    /// Build a payload from a JSON object, keeping only string name/code
    /// fields.
    pub fn from_json_object(object: &serde_json::Map<String, Value>) -> Self {
        let text = |key: &str| object.get(key).and_then(Value::as_str).map(str::to_string);
        Self {
            code: text("code"),
            canonical_code: text("canonical_code"),
            name: text("name"),
            canonical_name: text("canonical_name"),
            allergen: text("allergen"),
            marker_type: object.get("marker_type").cloned(),
            certainty: object.get("certainty").cloned(),
        }
    }

    /// First non-empty of `canonical_code`, `code`.
    pub fn code_field(&self) -> Option<&str> {
        first_non_empty([&self.canonical_code, &self.code])
    }

    /// First non-empty of `canonical_name`, `name`, `allergen`.
    pub fn name_field(&self) -> Option<&str> {
        first_non_empty([&self.canonical_name, &self.name, &self.allergen])
    }

    /// First non-empty of `allergen`, `name`, `code`: the free-form term a
    /// caller most likely typed.
    pub fn label_field(&self) -> Option<&str> {
        first_non_empty([&self.allergen, &self.name, &self.code])
    }
}

fn first_non_empty<const N: usize>(fields: [&Option<String>; N]) -> Option<&str> {
    fields
        .into_iter()
        .filter_map(Option::as_deref)
        .find(|value| !value.is_empty())
}

/// A payload entry reduced to its stored code and display metadata.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NormalizedAllergenEntry {
    pub display_code: String,
    pub canonical_code: String,
    pub display_name: String,
    pub family: Option<AllergenFamily>,
    pub marker_type: Option<String>,
    pub certainty: Option<Value>,
}

/// Normalize a payload entry. Returns `None` when neither a code nor a name
/// yields a stored code.
pub fn normalize_allergen_entry(entry: &AllergenPayload) -> Option<NormalizedAllergenEntry> {
    let name = entry.name_field();
    let canonical_code = canonical_code_from_payload(entry.code_field(), name)?;
    let display_name = name
        .map(str::trim)
        .filter(|n| !n.is_empty())
        .map_or_else(|| fallback_name_from_code(&canonical_code), str::to_string);
    Some(NormalizedAllergenEntry {
        display_code: display_code_for(Some(&canonical_code))
            .unwrap_or_else(|| canonical_code.clone()),
        family: family_for_code(Some(&canonical_code)),
        marker_type: marker_type_text(entry.marker_type.as_ref()),
        certainty: entry.certainty.clone(),
        display_name,
        canonical_code,
    })
}

fn marker_type_text(value: Option<&Value>) -> Option<String> {
    value
        .and_then(Value::as_str)
        .map(|marker| marker.trim().to_lowercase())
}

/// An allergen as returned to API consumers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AllergenView {
    pub code: String,
    pub name: String,
    pub certainty: UiCertainty,
    pub canonical_code: Option<String>,
    pub canonical_name: String,
    pub family_code: Option<&'static str>,
    pub family_name: Option<&'static str>,
    pub marker_type: Option<String>,
}

impl AllergenView {
    /// Build a view from a stored code. `certainty` is a stored internal
    /// value and goes through [`certainty_to_ui`].
    pub fn from_code(
        canonical_code: Option<&str>,
        name: Option<&str>,
        certainty: Option<&str>,
        marker_type: Option<&str>,
    ) -> Self {
        let family = family_for_code(canonical_code);
        let canonical_name = name
            .filter(|n| !n.is_empty())
            .map_or_else(
                || fallback_name_from_code(canonical_code.unwrap_or_default()),
                str::to_string,
            );
        let code = display_code_for(canonical_code)
            .or_else(|| canonical_code.map(str::to_string))
            .unwrap_or_default();
        Self {
            code,
            name: canonical_name.clone(),
            certainty: certainty_to_ui(certainty),
            canonical_code: canonical_code.map(str::to_string),
            canonical_name,
            family_code: family.map(|f| f.code),
            family_name: family.map(|f| f.name),
            marker_type: marker_type.map(str::to_string),
        }
    }

    /// Build a view keyed by a canonical entry's slug and label.
    pub fn from_canonical(
        entry: &CanonicalAllergen,
        certainty: Option<Certainty>,
        marker_type: Option<&str>,
    ) -> Self {
        Self::from_code(
            Some(entry.slug),
            Some(entry.label),
            certainty.map(|c| c.as_str()),
            marker_type,
        )
    }

    /// Codes a caller can use to recognize this allergen again.
    pub fn codes(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.code.as_str())
            .chain(self.canonical_code.as_deref())
            .filter(|code| !code.is_empty())
    }
}
