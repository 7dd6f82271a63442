use thiserror::Error;

use shared_storage::StorageError;

#[derive(Error, Debug)]
pub enum CompanyError {
    #[error("Company not found")]
    NotFound,

    #[error("Session is not bound to a company")]
    NoCompanyBound,

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Storage error: {0}")]
    StorageError(String),
}

impl From<StorageError> for CompanyError {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::NotFound => CompanyError::NotFound,
            other => CompanyError::StorageError(other.to_string()),
        }
    }
}
