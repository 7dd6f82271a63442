use thiserror::Error;

use shared_storage::StorageError;

#[derive(Error, Debug)]
pub enum EventError {
    #[error("Event not found")]
    NotFound,

    #[error("Client not found")]
    ClientNotFound,

    #[error("Event is at capacity")]
    EventFull,

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Storage error: {0}")]
    StorageError(String),
}

impl From<StorageError> for EventError {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::NotFound => EventError::NotFound,
            other => EventError::StorageError(other.to_string()),
        }
    }
}
