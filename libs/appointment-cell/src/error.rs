use thiserror::Error;

use shared_models::AppointmentStatus;
use shared_storage::StorageError;

#[derive(Error, Debug)]
pub enum AppointmentError {
    #[error("Appointment not found")]
    NotFound,

    #[error("Client not found")]
    ClientNotFound,

    #[error("Service not found")]
    ServiceNotFound,

    #[error("Professional not found")]
    ProfessionalNotFound,

    #[error("Requested time is not an offered slot")]
    SlotNotAvailable,

    #[error("Appointment conflicts with an existing booking")]
    ConflictDetected,

    #[error("Appointment cannot move from {0} to {1}")]
    InvalidStatusTransition(AppointmentStatus, AppointmentStatus),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Storage error: {0}")]
    StorageError(String),
}

impl From<StorageError> for AppointmentError {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::NotFound => AppointmentError::NotFound,
            other => AppointmentError::StorageError(other.to_string()),
        }
    }
}
