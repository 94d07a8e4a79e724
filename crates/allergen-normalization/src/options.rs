//! Configuration options for allergen normalization.

use allergen_model::Certainty;
use serde::{Deserialize, Serialize};

/// Source tag for allergens entered by hand.
pub const MANUAL_SOURCE: &str = "user";

/// Options for normalizing manually entered allergens.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManualAllergenOptions {
    /// Certainty used when an entry states none, or one that is not
    /// recognized. A person typing an allergen in is asserting it.
    pub default_certainty: Certainty,

    /// Source tag recorded on each link.
    pub source: String,
}

impl Default for ManualAllergenOptions {
    fn default() -> Self {
        Self {
            default_certainty: Certainty::Certain,
            source: MANUAL_SOURCE.to_string(),
        }
    }
}

impl ManualAllergenOptions {
    pub fn with_default_certainty(mut self, certainty: Certainty) -> Self {
        self.default_certainty = certainty;
        self
    }

    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = source.into();
        self
    }
}
