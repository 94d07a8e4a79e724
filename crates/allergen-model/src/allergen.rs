//! Canonical allergen entries.
//!
//! A [`CanonicalAllergen`] is the single authoritative record for an allergen
//! category. Entries are declared as `'static` data and never mutated; lookup
//! indexes over them live in `allergen-standards`.

use std::fmt;

use serde::Serialize;

/// A canonical allergen entry.
///
/// - `slug` is the stable identity key (lowercase, unique per table).
/// - `label` is the display name and also matches as an implicit alias.
/// - `legacy_codes` holds historical identifiers. They are carried for
///   consumers that need them but are never consulted by lookups.
/// - `aliases` are free-form synonyms, stored lowercase.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct CanonicalAllergen {
    /// Machine identifier (e.g., "tree_nuts").
    pub slug: &'static str,

    /// Human-readable name (e.g., "Tree nuts").
    pub label: &'static str,

    /// Historical identifiers, in declaration order.
    pub legacy_codes: &'static [&'static str],

    /// Synonyms that resolve to this entry, in declaration order.
    pub aliases: &'static [&'static str],
}

impl CanonicalAllergen {
    /// Declare a new entry.
    pub const fn new(
        slug: &'static str,
        label: &'static str,
        legacy_codes: &'static [&'static str],
        aliases: &'static [&'static str],
    ) -> Self {
        Self {
            slug,
            label,
            legacy_codes,
            aliases,
        }
    }

    /// Terms this entry answers to, label first and then aliases in order.
    pub fn match_terms(&self) -> impl Iterator<Item = &'static str> + '_ {
        std::iter::once(self.label).chain(self.aliases.iter().copied())
    }

    /// Whether `term` (case-insensitive, trimmed) is this entry's label or
    /// one of its aliases.
    pub fn answers_to(&self, term: &str) -> bool {
        let key = term.trim().to_lowercase();
        self.match_terms().any(|t| t.to_lowercase() == key)
    }
}

impl fmt::Display for CanonicalAllergen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.label, self.slug)
    }
}
