//! Allergen code normalization.
//!
//! Stored allergens use Open Food Facts style codes (`en:wheat`). UIs show
//! members of the two umbrella families under family-qualified display codes
//! (`cereals_gluten:wheat`, `tree_nuts:almonds`). This module converts
//! between the two and derives family metadata and fallback names.

use serde::Serialize;

/// An umbrella allergen family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct AllergenFamily {
    pub code: &'static str,
    pub name: &'static str,
}

pub const CEREALS_GLUTEN: AllergenFamily = AllergenFamily {
    code: "cereals_gluten",
    name: "Cereals containing gluten",
};

pub const TREE_NUTS: AllergenFamily = AllergenFamily {
    code: "tree_nuts",
    name: "Tree nuts",
};

/// Families whose members get family-qualified display codes.
pub const FAMILIES: [AllergenFamily; 2] = [CEREALS_GLUTEN, TREE_NUTS];

/// Display code -> stored code.
static DISPLAY_CODES: &[(&str, &str)] = &[
    ("cereals_gluten:wheat", "en:wheat"),
    ("cereals_gluten:rye", "en:rye"),
    ("cereals_gluten:barley", "en:barley"),
    ("cereals_gluten:oats", "en:oats"),
    ("cereals_gluten:spelt", "en:spelt"),
    ("cereals_gluten:triticale", "en:triticale"),
    ("tree_nuts:almonds", "en:almonds"),
    ("tree_nuts:hazelnuts", "en:hazelnuts"),
    ("tree_nuts:walnuts", "en:walnuts"),
    ("tree_nuts:cashews", "en:cashews"),
    ("tree_nuts:pecans", "en:pecans"),
    ("tree_nuts:brazil_nuts", "en:brazil-nut"),
    ("tree_nuts:pistachios", "en:pistachio"),
    ("tree_nuts:macadamia", "en:macadamia-nut"),
];

/// Known misspellings of stored codes.
static CODE_SPELLING_FIXES: &[(&str, &str)] = &[
    ("en:brazil-nuts", "en:brazil-nut"),
    ("en:pistachios", "en:pistachio"),
    ("en:macadamia-nuts", "en:macadamia-nut"),
];

/// Stored codes that belong to a family.
static FAMILY_MEMBERS: &[(&str, AllergenFamily)] = &[
    ("en:wheat", CEREALS_GLUTEN),
    ("en:rye", CEREALS_GLUTEN),
    ("en:barley", CEREALS_GLUTEN),
    ("en:oats", CEREALS_GLUTEN),
    ("en:spelt", CEREALS_GLUTEN),
    ("en:triticale", CEREALS_GLUTEN),
    ("en:durum-wheat", CEREALS_GLUTEN),
    ("en:semolina", CEREALS_GLUTEN),
    ("en:farina", CEREALS_GLUTEN),
    ("en:malt", CEREALS_GLUTEN),
    ("en:hordeum-vulgare", CEREALS_GLUTEN),
    ("en:almonds", TREE_NUTS),
    ("en:hazelnuts", TREE_NUTS),
    ("en:walnuts", TREE_NUTS),
    ("en:cashews", TREE_NUTS),
    ("en:pecans", TREE_NUTS),
    ("en:brazil-nut", TREE_NUTS),
    ("en:pistachio", TREE_NUTS),
    ("en:macadamia-nut", TREE_NUTS),
];

const STORED_PREFIX: &str = "en:";

fn normalize_code(value: Option<&str>) -> String {
    value.unwrap_or_default().trim().to_lowercase()
}

fn fix_spelling(code: String) -> String {
    CODE_SPELLING_FIXES
        .iter()
        .find(|(wrong, _)| *wrong == code)
        .map_or(code, |(_, right)| (*right).to_string())
}

fn family_by_code(code: &str) -> Option<AllergenFamily> {
    FAMILIES.iter().find(|family| family.code == code).copied()
}

/// Derive the stored code for an allergen from a payload's code and name.
///
/// Display codes are translated, family-qualified codes are unwrapped, bare
/// codes are prefixed with `en:`, and a name is used only when no usable
/// code is present. A bare family code without a name yields `None`.
pub fn canonical_code_from_payload(code: Option<&str>, name: Option<&str>) -> Option<String> {
    let mut normalized = normalize_code(code);
    if let Some((_, stored)) = DISPLAY_CODES.iter().find(|(display, _)| *display == normalized) {
        normalized = (*stored).to_string();
    }
    let normalized = fix_spelling(normalized);

    if normalized.starts_with(STORED_PREFIX) {
        return Some(normalized);
    }
    if let Some((family, specific)) = normalized.split_once(':')
        && family_by_code(family).is_some()
        && !specific.is_empty()
    {
        return Some(fix_spelling(format!("{STORED_PREFIX}{specific}")));
    }
    if !normalized.is_empty() && family_by_code(&normalized).is_none() {
        return Some(fix_spelling(format!("{STORED_PREFIX}{normalized}")));
    }

    let sanitized = name?.trim().to_lowercase().replace(' ', "-");
    if sanitized.is_empty() {
        return None;
    }
    Some(fix_spelling(format!("{STORED_PREFIX}{sanitized}")))
}

/// Family of a stored code, or of a bare family code.
pub fn family_for_code(code: Option<&str>) -> Option<AllergenFamily> {
    let normalized = normalize_code(code);
    if normalized.is_empty() {
        return None;
    }
    FAMILY_MEMBERS
        .iter()
        .find(|(member, _)| *member == normalized)
        .map(|&(_, family)| family)
        .or_else(|| family_by_code(&normalized))
}

/// Display code for a stored code. Codes without a family display code are
/// returned as given.
pub fn display_code_for(code: Option<&str>) -> Option<String> {
    let code = code.filter(|c| !c.is_empty())?;
    let normalized = normalize_code(Some(code));
    let display = DISPLAY_CODES
        .iter()
        .find(|(_, stored)| *stored == normalized)
        .map_or(code, |&(display, _)| display);
    Some(display.to_string())
}

/// Human-readable name derived from a code: `en:brazil-nut` -> `Brazil Nut`.
pub fn fallback_name_from_code(code: &str) -> String {
    let raw = code.rsplit(':').next().unwrap_or_default();
    raw.replace('-', " ")
        .split_whitespace()
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}
