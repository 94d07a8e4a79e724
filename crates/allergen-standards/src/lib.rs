#![deny(unsafe_code)]

pub mod catalog;
pub mod certainty;
pub mod doctor;
pub mod error;
pub mod registry;

pub use crate::catalog::CANONICAL_ALLERGENS;
pub use crate::certainty::{
    CERTAINTY_RULES, CertaintyRules, UI_CERTAINTY_MAP, certainty_rules, ui_certainty,
};
pub use crate::doctor::DoctorReport;
pub use crate::error::StandardsError;
pub use crate::registry::{
    AliasCollision, AllergenRegistry, alias_keys, canonical_allergens, default_registry,
};
