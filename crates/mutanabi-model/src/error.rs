use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("unknown form field: {0}")]
    UnknownField(String),
}

pub type Result<T> = std::result::Result<T, ModelError>;
