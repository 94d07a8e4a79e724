//! Lookup input values.
//!
//! Lookups accept "anything a caller might hold": absent values, text, an
//! already-canonical entry, numbers, booleans or raw JSON values. Every such
//! value converts into a [`LookupValue`] without failing.

use std::borrow::Cow;

use crate::allergen::CanonicalAllergen;

/// A value submitted for allergen or certainty lookup.
#[derive(Debug, Clone, PartialEq)]
pub enum LookupValue<'a> {
    /// No value was supplied (null / `None`).
    Absent,
    /// Free-form text, untrimmed.
    Text(Cow<'a, str>),
    /// An entry that is already canonical.
    Allergen(&'a CanonicalAllergen),
}

impl<'a> LookupValue<'a> {
    /// Returns true when no value was supplied.
    pub fn is_absent(&self) -> bool {
        matches!(self, LookupValue::Absent)
    }

    /// Textual form of the value. Canonical entries read as their label.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            LookupValue::Absent => None,
            LookupValue::Text(text) => Some(text.as_ref()),
            LookupValue::Allergen(entry) => Some(entry.label),
        }
    }

    /// Trimmed, lower-cased text, or `None` when absent or blank.
    pub fn lookup_key(&self) -> Option<String> {
        let key = self.as_text()?.trim().to_lowercase();
        if key.is_empty() { None } else { Some(key) }
    }
}

impl<'a> From<&'a str> for LookupValue<'a> {
    fn from(value: &'a str) -> Self {
        LookupValue::Text(Cow::Borrowed(value))
    }
}

impl<'a> From<&'a String> for LookupValue<'a> {
    fn from(value: &'a String) -> Self {
        LookupValue::Text(Cow::Borrowed(value.as_str()))
    }
}

impl From<String> for LookupValue<'_> {
    fn from(value: String) -> Self {
        LookupValue::Text(Cow::Owned(value))
    }
}

impl<'a> From<Cow<'a, str>> for LookupValue<'a> {
    fn from(value: Cow<'a, str>) -> Self {
        LookupValue::Text(value)
    }
}

impl<'a> From<&'a CanonicalAllergen> for LookupValue<'a> {
    fn from(value: &'a CanonicalAllergen) -> Self {
        LookupValue::Allergen(value)
    }
}

impl<'a, T> From<Option<T>> for LookupValue<'a>
where
    T: Into<LookupValue<'a>>,
{
    fn from(value: Option<T>) -> Self {
        value.map_or(LookupValue::Absent, Into::into)
    }
}

impl<'a> From<&'a serde_json::Value> for LookupValue<'a> {
    fn from(value: &'a serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => LookupValue::Absent,
            serde_json::Value::String(text) => LookupValue::Text(Cow::Borrowed(text.as_str())),
            other => LookupValue::Text(Cow::Owned(other.to_string())),
        }
    }
}

macro_rules! lookup_from_display {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for LookupValue<'_> {
                fn from(value: $ty) -> Self {
                    LookupValue::Text(Cow::Owned(value.to_string()))
                }
            }
        )*
    };
}

lookup_from_display!(
    bool, char, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64,
);
