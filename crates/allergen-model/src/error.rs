use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    #[error("unknown certainty: {value}")]
    UnknownCertainty { value: String },
    #[error("unknown ui certainty: {value}")]
    UnknownUiCertainty { value: String },
}

pub type Result<T> = std::result::Result<T, ModelError>;
