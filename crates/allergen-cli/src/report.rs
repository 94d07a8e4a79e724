//! Rows shown by the CLI commands, built independently of table rendering.

use allergen_model::{CanonicalAllergen, Certainty, UiCertainty};
use allergen_normalization::{
    canonical_allergen_from_label, canonicalize_allergen, certainty_to_ui, collapse_certainty_text,
    normalize_certainty,
};
use allergen_standards::{AllergenRegistry, certainty_rules};
use serde::Serialize;

/// Which index resolved a term.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchKind {
    Label,
    Alias,
}

impl MatchKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Label => "label",
            Self::Alias => "alias",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AllergenRow {
    pub slug: &'static str,
    pub label: &'static str,
    pub aliases: Vec<&'static str>,
}

impl From<&'static CanonicalAllergen> for AllergenRow {
    fn from(entry: &'static CanonicalAllergen) -> Self {
        Self {
            slug: entry.slug,
            label: entry.label,
            aliases: entry.aliases.to_vec(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolveRow {
    pub input: String,
    pub matched: Option<MatchKind>,
    pub slug: Option<&'static str>,
    pub label: Option<&'static str>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CertaintyRow {
    pub input: String,
    pub normalized_text: String,
    pub rule: Option<&'static str>,
    pub certainty: Option<Certainty>,
    pub ui: UiCertainty,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AliasRow {
    pub key: String,
    pub slug: &'static str,
}

pub fn allergen_rows(entries: &'static [CanonicalAllergen]) -> Vec<AllergenRow> {
    entries.iter().map(AllergenRow::from).collect()
}

/// Resolve a term, preferring the label index. With `label_only`, the alias
/// index is not consulted.
pub fn resolve_row(input: &str, label_only: bool) -> ResolveRow {
    let (matched, entry) = if let Some(entry) = canonical_allergen_from_label(input) {
        (Some(MatchKind::Label), Some(entry))
    } else if label_only {
        (None, None)
    } else {
        match canonicalize_allergen(input) {
            Some(entry) => (Some(MatchKind::Alias), Some(entry)),
            None => (None, None),
        }
    };
    ResolveRow {
        input: input.to_string(),
        matched,
        slug: entry.map(|e| e.slug),
        label: entry.map(|e| e.label),
    }
}

/// Normalize `input` and report the rule key that decided it.
pub fn certainty_row(input: &str) -> CertaintyRow {
    let certainty = normalize_certainty(input);
    let normalized_text = collapse_certainty_text(input);
    let rule = certainty.and(certainty_rules().matching_key(&normalized_text));
    CertaintyRow {
        input: input.to_string(),
        normalized_text,
        rule,
        certainty,
        ui: certainty_to_ui(certainty.map(|c| c.as_str())),
    }
}

/// Alias index keys in sorted order, optionally restricted to one slug.
pub fn alias_rows(registry: &AllergenRegistry<'static>, slug: Option<&str>) -> Vec<AliasRow> {
    registry
        .by_alias_or_label()
        .iter()
        .filter(|(_, entry)| slug.is_none_or(|slug| entry.slug == slug))
        .map(|(key, entry)| AliasRow {
            key: key.clone(),
            slug: entry.slug,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_certainty_has_no_rule() {
        let row = certainty_row("   ");
        assert_eq!(row.rule, None);
        assert_eq!(row.certainty, None);
        assert_eq!(row.ui, UiCertainty::Likely);
    }

    #[test]
    fn label_only_skips_aliases() {
        let row = resolve_row("shrimp", true);
        assert_eq!(row.matched, None);
        assert_eq!(row.slug, None);
    }
}
