//! Certainty normalization.

use allergen_model::{Certainty, LookupValue, UiCertainty};
use allergen_standards::{CertaintyRules, certainty_rules, ui_certainty};
use tracing::trace;

/// Lower-case `text` and collapse every whitespace run to a single space,
/// dropping leading and trailing whitespace.
pub fn collapse_certainty_text(text: &str) -> String {
    text.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

/// Map free-form certainty text into the internal vocabulary.
///
/// Exact rule keys are tried first, then the first declared key the text
/// starts with. Absent, blank and unrecognized values yield `None`.
pub fn normalize_certainty<'a>(value: impl Into<LookupValue<'a>>) -> Option<Certainty> {
    normalize_certainty_with(certainty_rules(), value)
}

/// [`normalize_certainty`] with caller-supplied rules.
pub fn normalize_certainty_with<'a>(
    rules: &CertaintyRules,
    value: impl Into<LookupValue<'a>>,
) -> Option<Certainty> {
    let value = value.into();
    let text = collapse_certainty_text(value.as_text()?);
    if text.is_empty() {
        return None;
    }
    let resolved = rules.resolve(&text);
    if resolved.is_none() {
        trace!(certainty = %text, "unrecognized certainty");
    }
    resolved
}

/// Translate a normalized certainty value into the UI vocabulary.
///
/// `likely`, `certain` and `confirmed` pass through; everything else,
/// including `None`, becomes `likely`.
pub fn certainty_to_ui(value: Option<&str>) -> UiCertainty {
    value.and_then(ui_certainty).unwrap_or_default()
}

/// Normalize free-form text and translate the result for the UI.
pub fn ui_certainty_for<'a>(value: impl Into<LookupValue<'a>>) -> UiCertainty {
    certainty_to_ui(normalize_certainty(value).map(|c| c.as_str()))
}
