#![deny(unsafe_code)]

use crate::certainty::{CERTAINTY_RULES, UI_CERTAINTY_MAP};
use crate::registry::{AliasCollision, AllergenRegistry};

#[derive(Debug, Clone, serde::Serialize)]
pub struct DoctorReport {
    pub schema: String,
    pub schema_version: u32,
    pub counts: DoctorCounts,
    pub collisions: Vec<AliasCollision>,
    pub issues: Vec<String>,
}

#[derive(Debug, Clone, serde::Serialize)]
pub struct DoctorCounts {
    pub entries: usize,
    pub labels: usize,
    pub alias_keys: usize,
    pub legacy_codes: usize,
    pub certainty_rules: usize,
    pub ui_certainty_values: usize,
}

impl DoctorReport {
    pub fn from_registry(registry: &AllergenRegistry<'_>) -> Self {
        Self {
            schema: "allergen-normalizer.table-doctor".to_string(),
            schema_version: 1,
            counts: DoctorCounts {
                entries: registry.len(),
                labels: registry.by_label().len(),
                alias_keys: registry.by_alias_or_label().len(),
                legacy_codes: registry
                    .entries()
                    .iter()
                    .map(|entry| entry.legacy_codes.len())
                    .sum(),
                certainty_rules: CERTAINTY_RULES.len(),
                ui_certainty_values: UI_CERTAINTY_MAP.len(),
            },
            collisions: registry.collisions().to_vec(),
            issues: registry
                .issues()
                .iter()
                .map(ToString::to_string)
                .collect(),
        }
    }

    pub fn is_healthy(&self) -> bool {
        self.issues.is_empty()
    }
}
