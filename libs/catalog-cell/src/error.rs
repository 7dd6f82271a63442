use thiserror::Error;

use shared_storage::StorageError;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Service not found")]
    NotFound,

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Storage error: {0}")]
    StorageError(String),
}

impl From<StorageError> for CatalogError {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::NotFound => CatalogError::NotFound,
            other => CatalogError::StorageError(other.to_string()),
        }
    }
}
