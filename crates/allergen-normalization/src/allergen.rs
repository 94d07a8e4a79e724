//! Allergen canonicalization.
//!
//! Lookups are exact after trimming and lower-casing. There is no substring,
//! prefix or fuzzy matching for allergens: `"peanut butter traces"` does not
//! resolve even though `"peanut"` and `"butter"` are both aliases.

use allergen_model::{CanonicalAllergen, LookupValue};
use allergen_standards::{AllergenRegistry, default_registry};
use tracing::trace;

/// Resolve a free-form allergen term against the shipped table.
///
/// Absent and blank values yield `None`. An entry that is already canonical
/// is returned unchanged.
pub fn canonicalize_allergen<'a>(value: impl Into<LookupValue<'a>>) -> Option<&'a CanonicalAllergen> {
    canonicalize_allergen_in(default_registry(), value)
}

/// [`canonicalize_allergen`] against a caller-supplied registry.
pub fn canonicalize_allergen_in<'a>(
    registry: &AllergenRegistry<'a>,
    value: impl Into<LookupValue<'a>>,
) -> Option<&'a CanonicalAllergen> {
    let value = value.into();
    if let LookupValue::Allergen(entry) = value {
        return Some(entry);
    }
    let key = value.lookup_key()?;
    let found = registry.lookup_alias_or_label(&key);
    if found.is_none() {
        trace!(term = %key, "no canonical allergen for term");
    }
    found
}

/// Resolve a display label against the shipped table.
///
/// Only labels match; an alias that is not also a label yields `None`.
pub fn canonical_allergen_from_label<'a>(
    label: impl Into<LookupValue<'a>>,
) -> Option<&'a CanonicalAllergen> {
    canonical_allergen_from_label_in(default_registry(), label)
}

/// [`canonical_allergen_from_label`] against a caller-supplied registry.
pub fn canonical_allergen_from_label_in<'a>(
    registry: &AllergenRegistry<'a>,
    label: impl Into<LookupValue<'a>>,
) -> Option<&'a CanonicalAllergen> {
    let key = label.into().lookup_key()?;
    registry.lookup_label(&key)
}

/// Label lookup first, then the alias index.
pub fn resolve_allergen_term<'a>(value: impl Into<LookupValue<'a>>) -> Option<&'a CanonicalAllergen> {
    let value = value.into();
    canonical_allergen_from_label(value.clone()).or_else(|| canonicalize_allergen(value))
}
