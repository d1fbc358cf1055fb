use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("Movie with ID {0} not found.")]
    MovieNotFound(u32),
    #[error(transparent)]
    Validation(#[from] models::errors::ModelError),
}
