//! Certainty vocabularies.
//!
//! Two controlled vocabularies describe how strongly an allergen is asserted:
//!
//! - [`Certainty`]: the internal two-tier vocabulary (`certain`, `likely`)
//!   produced by certainty normalization.
//! - [`UiCertainty`]: the three values UI layers accept (`likely`, `certain`,
//!   `confirmed`).

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ModelError;

/// Internal certainty vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Certainty {
    /// Explicitly stated or confirmed.
    Certain,
    /// Inferred, predicted or otherwise not explicitly stated.
    Likely,
}

impl Certainty {
    /// All values, in vocabulary order.
    pub const ALL: [Certainty; 2] = [Certainty::Certain, Certainty::Likely];

    /// Returns the vocabulary string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Certainty::Certain => "certain",
            Certainty::Likely => "likely",
        }
    }
}

impl fmt::Display for Certainty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Certainty {
    type Err = ModelError;

    /// Parses the exact vocabulary string. Free-form text goes through
    /// certainty normalization instead.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "certain" => Ok(Certainty::Certain),
            "likely" => Ok(Certainty::Likely),
            _ => Err(ModelError::UnknownCertainty {
                value: s.to_string(),
            }),
        }
    }
}

/// UI certainty vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UiCertainty {
    /// Default when nothing better is known.
    #[default]
    Likely,
    Certain,
    Confirmed,
}

impl UiCertainty {
    /// All values, in vocabulary order.
    pub const ALL: [UiCertainty; 3] = [
        UiCertainty::Likely,
        UiCertainty::Certain,
        UiCertainty::Confirmed,
    ];

    /// Returns the vocabulary string.
    pub fn as_str(&self) -> &'static str {
        match self {
            UiCertainty::Likely => "likely",
            UiCertainty::Certain => "certain",
            UiCertainty::Confirmed => "confirmed",
        }
    }
}

impl fmt::Display for UiCertainty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UiCertainty {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "likely" => Ok(UiCertainty::Likely),
            "certain" => Ok(UiCertainty::Certain),
            "confirmed" => Ok(UiCertainty::Confirmed),
            _ => Err(ModelError::UnknownUiCertainty {
                value: s.to_string(),
            }),
        }
    }
}

impl From<Certainty> for UiCertainty {
    fn from(value: Certainty) -> Self {
        match value {
            Certainty::Certain => UiCertainty::Certain,
            Certainty::Likely => UiCertainty::Likely,
        }
    }
}
