//! Allergen and certainty canonicalization.
//!
//! The four core operations are:
//!
//! - [`canonicalize_allergen`]: free-form term -> canonical allergen
//! - [`canonical_allergen_from_label`]: display label -> canonical allergen
//! - [`normalize_certainty`]: free-form certainty -> `certain` / `likely`
//! - [`certainty_to_ui`]: internal certainty -> `likely` / `certain` / `confirmed`
//!
//! All of them are pure lookups over tables built once per process.

pub mod allergen;
pub mod certainty;
pub mod codes;
pub mod entry;
pub mod manual;
pub mod options;
pub mod payload;

pub use allergen::{
    canonical_allergen_from_label, canonical_allergen_from_label_in, canonicalize_allergen,
    canonicalize_allergen_in, resolve_allergen_term,
};
pub use allergen_standards::{alias_keys, canonical_allergens};
pub use certainty::{
    certainty_to_ui, collapse_certainty_text, normalize_certainty, normalize_certainty_with,
    ui_certainty_for,
};
pub use codes::{
    AllergenFamily, canonical_code_from_payload, display_code_for, fallback_name_from_code,
    family_for_code,
};
pub use entry::{AllergenPayload, AllergenView, NormalizedAllergenEntry, normalize_allergen_entry};
pub use manual::{ManualAllergenLink, manual_allergen_links};
pub use options::ManualAllergenOptions;
pub use payload::{PayloadAllergens, resolve_allergen_payload};
