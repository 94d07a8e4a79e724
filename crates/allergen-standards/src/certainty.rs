//! Certainty normalization rules.
//!
//! [`CERTAINTY_RULES`] is ordered: exact lookups ignore the order, but the
//! prefix fallback returns the first declared key the input starts with.
//! `"high"` is declared before `"very high"` and `"high confidence"`, so
//! `"high confidence please"` resolves through `"high"`.

use std::collections::HashMap;
use std::sync::LazyLock;

use allergen_model::{Certainty, UiCertainty};

/// Free-form certainty keys and their internal value, in declaration order.
pub static CERTAINTY_RULES: &[(&str, Certainty)] = &[
    ("certain", Certainty::Certain),
    ("definite", Certainty::Certain),
    ("explicit", Certainty::Certain),
    ("sure", Certainty::Certain),
    ("confirmed", Certainty::Certain),
    ("direct", Certainty::Certain),
    ("likely", Certainty::Likely),
    ("probable", Certainty::Likely),
    ("suggested", Certainty::Likely),
    ("estimated", Certainty::Likely),
    ("assumed", Certainty::Likely),
    ("inferred", Certainty::Likely),
    ("high", Certainty::Likely),
    ("very high", Certainty::Likely),
    ("high confidence", Certainty::Likely),
    ("most likely", Certainty::Likely),
    ("strong", Certainty::Likely),
    ("medium", Certainty::Likely),
    ("moderate", Certainty::Likely),
    ("medium confidence", Certainty::Likely),
    ("possible", Certainty::Likely),
    ("potential", Certainty::Likely),
    ("maybe", Certainty::Likely),
    ("uncertain", Certainty::Likely),
    ("low", Certainty::Likely),
    ("low confidence", Certainty::Likely),
    ("speculative", Certainty::Likely),
    ("predicted", Certainty::Likely),
    ("unknown", Certainty::Likely),
    ("n/a", Certainty::Likely),
    ("na", Certainty::Likely),
    ("unspecified", Certainty::Likely),
];

/// Values the UI vocabulary passes through unchanged.
pub static UI_CERTAINTY_MAP: &[(&str, UiCertainty)] = &[
    ("likely", UiCertainty::Likely),
    ("certain", UiCertainty::Certain),
    ("confirmed", UiCertainty::Confirmed),
];

/// An ordered rule table with an exact-match index.
#[derive(Debug, Clone)]
pub struct CertaintyRules {
    ordered: &'static [(&'static str, Certainty)],
    exact: HashMap<&'static str, Certainty>,
}

impl CertaintyRules {
    /// Build from an ordered rule slice. Duplicate keys keep the later value
    /// for exact lookups; the prefix scan still sees the first declaration.
    pub fn new(ordered: &'static [(&'static str, Certainty)]) -> Self {
        let exact = ordered.iter().copied().collect();
        Self { ordered, exact }
    }

    /// Rules in declaration order.
    pub fn rules(&self) -> &'static [(&'static str, Certainty)] {
        self.ordered
    }

    /// Exact key lookup.
    pub fn exact(&self, key: &str) -> Option<Certainty> {
        self.exact.get(key).copied()
    }

    /// Value of the first declared key that `text` starts with.
    pub fn first_prefix(&self, text: &str) -> Option<Certainty> {
        self.ordered
            .iter()
            .find(|(key, _)| text.starts_with(key))
            .map(|&(_, value)| value)
    }

    /// Exact lookup, then the prefix scan. `text` must already be
    /// normalized (trimmed, lower-cased, whitespace collapsed).
    pub fn resolve(&self, text: &str) -> Option<Certainty> {
        self.exact(text).or_else(|| self.first_prefix(text))
    }

    /// The rule key that decides `text` under [`CertaintyRules::resolve`].
    pub fn matching_key(&self, text: &str) -> Option<&'static str> {
        if let Some((&key, _)) = self.exact.get_key_value(text) {
            return Some(key);
        }
        self.ordered
            .iter()
            .find(|(key, _)| text.starts_with(key))
            .map(|&(key, _)| key)
    }
}

static DEFAULT_RULES: LazyLock<CertaintyRules> =
    LazyLock::new(|| CertaintyRules::new(CERTAINTY_RULES));

static UI_LOOKUP: LazyLock<HashMap<&'static str, UiCertainty>> =
    LazyLock::new(|| UI_CERTAINTY_MAP.iter().copied().collect());

/// The shipped certainty rules.
pub fn certainty_rules() -> &'static CertaintyRules {
    &DEFAULT_RULES
}

/// Look up a value in the UI certainty map.
pub fn ui_certainty(value: &str) -> Option<UiCertainty> {
    UI_LOOKUP.get(value).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_match_wins_over_prefix() {
        let rules = certainty_rules();
        assert_eq!(rules.exact("very high"), Some(Certainty::Likely));
        assert_eq!(rules.resolve("confirmed"), Some(Certainty::Certain));
    }

    #[test]
    fn prefix_scan_follows_declaration_order() {
        static RULES: &[(&str, Certainty)] = &[
            ("high", Certainty::Likely),
            ("high confidence", Certainty::Certain),
        ];
        let rules = CertaintyRules::new(RULES);
        assert_eq!(
            rules.first_prefix("high confidence please"),
            Some(Certainty::Likely)
        );
        assert_eq!(rules.resolve("high confidence"), Some(Certainty::Certain));
        assert_eq!(rules.matching_key("high confidence"), Some("high confidence"));
        assert_eq!(rules.matching_key("high confidence please"), Some("high"));
    }

    #[test]
    fn no_prefix_match_is_none() {
        assert_eq!(certainty_rules().resolve("zzz"), None);
        assert_eq!(certainty_rules().resolve(""), None);
    }

    #[test]
    fn ui_map_has_three_values() {
        assert_eq!(ui_certainty("confirmed"), Some(UiCertainty::Confirmed));
        assert_eq!(ui_certainty("direct"), None);
        assert_eq!(UI_CERTAINTY_MAP.len(), 3);
    }
}
