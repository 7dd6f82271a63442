// libs/appointment-cell/src/services/lifecycle.rs
use tracing::{debug, info, warn};

use shared_models::AppointmentStatus;

use crate::error::AppointmentError;

/// Status state machine. One transition table consulted by every
/// mutation path; nothing else decides what a booking may become.
pub struct AppointmentLifecycle;

impl AppointmentLifecycle {
    pub fn new() -> Self {
        Self
    }

    /// Validates a status change against the table.
    pub fn validate_transition(
        &self,
        current: AppointmentStatus,
        target: AppointmentStatus,
    ) -> Result<(), AppointmentError> {
        debug!("Validating status transition: {} -> {}", current, target);

        if !self.valid_transitions(current).contains(&target) {
            warn!("Invalid status transition attempted: {} -> {}", current, target);
            return Err(AppointmentError::InvalidStatusTransition(current, target));
        }

        info!("Status transition validated: {} -> {}", current, target);
        Ok(())
    }

    /// Every status a booking may move to from `current`.
    pub fn valid_transitions(&self, current: AppointmentStatus) -> Vec<AppointmentStatus> {
        match current {
            AppointmentStatus::Pending => vec![
                AppointmentStatus::Confirmed,
                AppointmentStatus::Completed,
                AppointmentStatus::Cancelled,
            ],
            AppointmentStatus::Confirmed => vec![
                AppointmentStatus::EnRoute,
                AppointmentStatus::Completed,
                AppointmentStatus::Cancelled,
            ],
            AppointmentStatus::EnRoute => vec![
                AppointmentStatus::Completed,
                AppointmentStatus::Cancelled,
            ],
            // Terminal states - no transitions allowed
            AppointmentStatus::Completed => vec![],
            AppointmentStatus::Cancelled => vec![],
        }
    }
}
