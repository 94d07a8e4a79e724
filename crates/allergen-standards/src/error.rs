#![deny(unsafe_code)]

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StandardsError {
    #[error("entry {index} has an empty slug")]
    EmptySlug { index: usize },

    #[error("slug must be trimmed lowercase: {slug:?}")]
    NonCanonicalSlug { slug: String },

    #[error("duplicate slug in allergen table: {slug}")]
    DuplicateSlug { slug: String },

    #[error("entry {slug} has an empty label")]
    EmptyLabel { slug: String },

    #[error("duplicate label {label:?} declared by {first} and {second}")]
    DuplicateLabel {
        label: String,
        first: String,
        second: String,
    },
}
