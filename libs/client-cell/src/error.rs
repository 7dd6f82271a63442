use thiserror::Error;

use shared_storage::StorageError;

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("Client not found")]
    NotFound,

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Storage error: {0}")]
    StorageError(String),
}

impl From<StorageError> for ClientError {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::NotFound => ClientError::NotFound,
            other => ClientError::StorageError(other.to_string()),
        }
    }
}
