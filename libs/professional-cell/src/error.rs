use thiserror::Error;

use shared_storage::StorageError;

#[derive(Error, Debug)]
pub enum ProfessionalError {
    #[error("Professional not found")]
    NotFound,

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("No availability exception on {0}")]
    ExceptionNotFound(chrono::NaiveDate),

    #[error("Storage error: {0}")]
    StorageError(String),
}

impl From<StorageError> for ProfessionalError {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::NotFound => ProfessionalError::NotFound,
            other => ProfessionalError::StorageError(other.to_string()),
        }
    }
}
