//! Value types for allergen canonicalization.

pub mod allergen;
pub mod certainty;
pub mod error;
pub mod lookup;

pub use allergen::CanonicalAllergen;
pub use certainty::{Certainty, UiCertainty};
pub use error::{ModelError, Result};
pub use lookup::LookupValue;
