//! Manually entered ingredient allergens.

use std::collections::BTreeSet;

use allergen_model::Certainty;
use serde::Serialize;
use tracing::debug;

use crate::certainty::normalize_certainty;
use crate::codes::AllergenFamily;
use crate::entry::{AllergenPayload, normalize_allergen_entry};
use crate::options::ManualAllergenOptions;

/// A normalized allergen link ready to be stored against an ingredient.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ManualAllergenLink {
    pub canonical_code: String,
    pub display_name: String,
    pub family: Option<AllergenFamily>,
    pub certainty: Certainty,
    pub source: String,
}

/// Normalize manual entries, dropping unusable ones and keeping the first
/// entry for each stored code.
pub fn manual_allergen_links(
    entries: &[AllergenPayload],
    options: &ManualAllergenOptions,
) -> Vec<ManualAllergenLink> {
    let mut seen = BTreeSet::new();
    let mut links = Vec::new();
    for entry in entries {
        let Some(normalized) = normalize_allergen_entry(entry) else {
            debug!("skipping manual allergen without code or name");
            continue;
        };
        if !seen.insert(normalized.canonical_code.clone()) {
            continue;
        }
        let certainty = normalize_certainty(normalized.certainty.as_ref())
            .unwrap_or(options.default_certainty);
        links.push(ManualAllergenLink {
            canonical_code: normalized.canonical_code,
            display_name: normalized.display_name,
            family: normalized.family,
            certainty,
            source: options.source.clone(),
        });
    }
    links
}
