use thiserror::Error;

use daskform_model::ModelError;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("no runtime environment selected for cluster kind: {0}")]
    MissingEnvironment(String),

    #[error("config store error: {0}")]
    Store(String),

    #[error("model error: {0}")]
    Model(#[from] ModelError),
}
