use thiserror::Error;

use shared_storage::StorageError;

#[derive(Error, Debug)]
pub enum FinanceError {
    #[error("Transaction not found")]
    NotFound,

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Storage error: {0}")]
    StorageError(String),
}

impl From<StorageError> for FinanceError {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::NotFound => FinanceError::NotFound,
            other => FinanceError::StorageError(other.to_string()),
        }
    }
}
