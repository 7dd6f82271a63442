use thiserror::Error;

use shared_storage::StorageError;

#[derive(Error, Debug)]
pub enum NotificationError {
    #[error("Storage error: {0}")]
    StorageError(String),
}

impl From<StorageError> for NotificationError {
    fn from(err: StorageError) -> Self {
        NotificationError::StorageError(err.to_string())
    }
}
