use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("unknown cluster kind: {0}")]
    UnknownClusterKind(String),

    #[error("unknown runtime environment: {0}")]
    UnknownEnvironment(String),

    #[error("invalid model: {0}")]
    Invalid(String),
}

pub type ModelResult<T> = Result<T, ModelError>;
