use codedoc_core::ValidationError;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Upstream model call failed: {0}")]
    Upstream(String),

    #[error("Invalid request body: {0}")]
    InvalidBody(String),
}
