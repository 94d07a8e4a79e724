//! CLI library components for the allergen normalizer.

#![allow(missing_docs)]

pub mod logging;
pub mod report;
