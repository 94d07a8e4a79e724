//! Canonical allergen registry and its derived indexes.
//!
//! The registry borrows an entry table and builds three indexes once:
//!
//! - by slug
//! - by lower-cased label (`ByLabel`)
//! - by lower-cased label or alias (`ByAliasOrLabel`)
//!
//! The alias index is filled in declaration order, label first and then each
//! alias, so when two entries share a term the later entry owns it. Every
//! such overwrite is kept as an [`AliasCollision`].

use std::collections::{BTreeMap, HashMap};
use std::sync::LazyLock;

use allergen_model::CanonicalAllergen;
use serde::Serialize;
use tracing::debug;

use crate::catalog::CANONICAL_ALLERGENS;
use crate::error::StandardsError;

/// A term claimed by more than one entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AliasCollision {
    /// Lower-cased term.
    pub key: String,
    /// Slug of the earlier entry that lost the term.
    pub shadowed: &'static str,
    /// Slug of the later entry that now owns the term.
    pub winner: &'static str,
}

/// Read-only lookup indexes over a canonical allergen table.
#[derive(Debug, Clone)]
pub struct AllergenRegistry<'a> {
    entries: &'a [CanonicalAllergen],
    by_slug: BTreeMap<&'static str, &'a CanonicalAllergen>,
    by_label: BTreeMap<String, &'a CanonicalAllergen>,
    by_alias_or_label: BTreeMap<String, &'a CanonicalAllergen>,
    collisions: Vec<AliasCollision>,
}

impl<'a> AllergenRegistry<'a> {
    /// Build the indexes for `entries`.
    pub fn new(entries: &'a [CanonicalAllergen]) -> Self {
        let mut by_slug = BTreeMap::new();
        let mut by_label = BTreeMap::new();
        let mut by_alias_or_label: BTreeMap<String, &'a CanonicalAllergen> = BTreeMap::new();
        let mut collisions = Vec::new();

        for entry in entries {
            by_slug.insert(entry.slug, entry);
            by_label.insert(entry.label.to_lowercase(), entry);
            for term in entry.match_terms() {
                let key = term.to_lowercase();
                if let Some(previous) = by_alias_or_label.insert(key.clone(), entry)
                    && !std::ptr::eq(previous, entry)
                {
                    debug!(
                        key = %key,
                        shadowed = previous.slug,
                        winner = entry.slug,
                        "allergen term claimed by a later entry"
                    );
                    collisions.push(AliasCollision {
                        key,
                        shadowed: previous.slug,
                        winner: entry.slug,
                    });
                }
            }
        }

        debug!(
            entries = entries.len(),
            labels = by_label.len(),
            terms = by_alias_or_label.len(),
            collisions = collisions.len(),
            "built allergen registry"
        );

        Self {
            entries,
            by_slug,
            by_label,
            by_alias_or_label,
            collisions,
        }
    }

    /// Entries in declaration order.
    pub fn entries(&self) -> &'a [CanonicalAllergen] {
        self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Lower-cased label index.
    pub fn by_label(&self) -> &BTreeMap<String, &'a CanonicalAllergen> {
        &self.by_label
    }

    /// Lower-cased label and alias index.
    pub fn by_alias_or_label(&self) -> &BTreeMap<String, &'a CanonicalAllergen> {
        &self.by_alias_or_label
    }

    /// Every known label/alias key, lower-cased, in sorted order.
    pub fn alias_keys(&self) -> impl Iterator<Item = &str> + '_ {
        self.by_alias_or_label.keys().map(String::as_str)
    }

    /// Entry with the given slug (exact, case-sensitive).
    pub fn get(&self, slug: &str) -> Option<&'a CanonicalAllergen> {
        self.by_slug.get(slug).copied()
    }

    /// Label-only lookup. `key` must already be trimmed and lower-cased.
    pub fn lookup_label(&self, key: &str) -> Option<&'a CanonicalAllergen> {
        self.by_label.get(key).copied()
    }

    /// Label-or-alias lookup. `key` must already be trimmed and lower-cased.
    pub fn lookup_alias_or_label(&self, key: &str) -> Option<&'a CanonicalAllergen> {
        self.by_alias_or_label.get(key).copied()
    }

    /// Terms that moved to a later entry while building the alias index.
    pub fn collisions(&self) -> &[AliasCollision] {
        &self.collisions
    }

    /// Check the table invariants, returning every violation found.
    pub fn issues(&self) -> Vec<StandardsError> {
        let mut issues = Vec::new();
        let mut seen_slugs: HashMap<&str, usize> = HashMap::new();
        let mut seen_labels: HashMap<String, &str> = HashMap::new();

        for (index, entry) in self.entries.iter().enumerate() {
            if entry.slug.is_empty() {
                issues.push(StandardsError::EmptySlug { index });
            } else if entry.slug != entry.slug.trim().to_lowercase() {
                issues.push(StandardsError::NonCanonicalSlug {
                    slug: entry.slug.to_string(),
                });
            }
            if seen_slugs.insert(entry.slug, index).is_some() {
                issues.push(StandardsError::DuplicateSlug {
                    slug: entry.slug.to_string(),
                });
            }

            let label = entry.label.trim().to_lowercase();
            if label.is_empty() {
                issues.push(StandardsError::EmptyLabel {
                    slug: entry.slug.to_string(),
                });
                continue;
            }
            if let Some(first) = seen_labels.get(&label) {
                issues.push(StandardsError::DuplicateLabel {
                    label: entry.label.to_string(),
                    first: (*first).to_string(),
                    second: entry.slug.to_string(),
                });
            } else {
                seen_labels.insert(label, entry.slug);
            }
        }
        issues
    }

    /// Check the table invariants, failing on the first violation.
    pub fn validate(&self) -> Result<(), StandardsError> {
        match self.issues().into_iter().next() {
            Some(issue) => Err(issue),
            None => Ok(()),
        }
    }
}

static DEFAULT_REGISTRY: LazyLock<AllergenRegistry<'static>> =
    LazyLock::new(|| AllergenRegistry::new(CANONICAL_ALLERGENS));

/// Registry over the shipped table, built on first access.
pub fn default_registry() -> &'static AllergenRegistry<'static> {
    &DEFAULT_REGISTRY
}

/// The shipped canonical entries.
pub fn canonical_allergens() -> &'static [CanonicalAllergen] {
    default_registry().entries()
}

/// Every label/alias key of the shipped table, lower-cased.
pub fn alias_keys() -> impl Iterator<Item = &'static str> {
    default_registry().alias_keys()
}
