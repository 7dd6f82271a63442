use std::sync::Arc;

use chrono::NaiveDate;
use tracing::{debug, warn};
use uuid::Uuid;

use shared_models::{Appointment, TenantContext, TimeInterval};
use shared_storage::{AppState, AppointmentQueries};

use crate::error::AppointmentError;

/// Overlap re-check run right before a booking is persisted. Slot
/// membership filters most collisions; this catches bookings whose full
/// duration crosses a neighbouring appointment.
pub struct ConflictService {
    appointments: Arc<dyn AppointmentQueries>,
}

impl ConflictService {
    pub fn new(state: &AppState) -> Self {
        Self {
            appointments: state.store.appointments.clone(),
        }
    }

    /// Non-cancelled bookings for the professional overlapping `interval`
    /// on `date`. `exclude` leaves out the booking being edited.
    pub async fn find_conflicts(
        &self,
        ctx: &TenantContext,
        professional_id: Uuid,
        date: NaiveDate,
        interval: TimeInterval,
        exclude: Option<Uuid>,
    ) -> Result<Vec<Appointment>, AppointmentError> {
        debug!(
            "Checking conflicts for professional {} on {} between {} and {}",
            professional_id, date, interval.start, interval.end
        );

        let day = self
            .appointments
            .list_for_professional_day(ctx, professional_id, date)
            .await?;

        let conflicts: Vec<Appointment> = day
            .into_iter()
            .filter(|appointment| Some(appointment.id) != exclude)
            .filter(|appointment| appointment.blocks_slot())
            .filter(|appointment| appointment.interval().overlaps(&interval))
            .collect();

        if !conflicts.is_empty() {
            warn!(
                "Conflict detected for professional {}: {} overlapping bookings",
                professional_id,
                conflicts.len()
            );
        }

        Ok(conflicts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveTime;
    use shared_models::AppointmentStatus;
    use shared_utils::fixtures::{admin_context, hm, test_state};

    fn appointment(
        company_id: Uuid,
        professional_id: Uuid,
        date: NaiveDate,
        start: NaiveTime,
        end: NaiveTime,
        status: AppointmentStatus,
    ) -> Appointment {
        Appointment {
            id: Uuid::new_v4(),
            company_id,
            client_id: Uuid::new_v4(),
            professional_id,
            service_id: Uuid::new_v4(),
            date,
            start_time: start,
            end_time: end,
            status,
            notes: None,
            custom_field_values: None,
        }
    }

    #[tokio::test]
    async fn overlapping_booking_is_reported() {
        let state = test_state();
        let company_id = Uuid::new_v4();
        let professional_id = Uuid::new_v4();
        let ctx = admin_context(company_id);
        let date = NaiveDate::from_ymd_opt(2024, 6, 10).unwrap();

        state
            .store
            .appointments
            .insert_unchecked(appointment(
                company_id,
                professional_id,
                date,
                hm(10, 0),
                hm(11, 0),
                AppointmentStatus::Confirmed,
            ))
            .await;

        let service = ConflictService::new(&state);
        let conflicts = service
            .find_conflicts(
                &ctx,
                professional_id,
                date,
                TimeInterval::new(hm(10, 30), hm(11, 30)),
                None,
            )
            .await
            .unwrap();

        assert_eq!(conflicts.len(), 1);
    }

    #[tokio::test]
    async fn cancelled_and_touching_bookings_do_not_conflict() {
        let state = test_state();
        let company_id = Uuid::new_v4();
        let professional_id = Uuid::new_v4();
        let ctx = admin_context(company_id);
        let date = NaiveDate::from_ymd_opt(2024, 6, 10).unwrap();

        state
            .store
            .appointments
            .insert_unchecked(appointment(
                company_id,
                professional_id,
                date,
                hm(10, 0),
                hm(11, 0),
                AppointmentStatus::Cancelled,
            ))
            .await;
        // Ends exactly where the candidate starts.
        state
            .store
            .appointments
            .insert_unchecked(appointment(
                company_id,
                professional_id,
                date,
                hm(9, 0),
                hm(10, 0),
                AppointmentStatus::Pending,
            ))
            .await;

        let service = ConflictService::new(&state);
        let conflicts = service
            .find_conflicts(
                &ctx,
                professional_id,
                date,
                TimeInterval::new(hm(10, 0), hm(11, 0)),
                None,
            )
            .await
            .unwrap();

        assert!(conflicts.is_empty());
    }

    #[tokio::test]
    async fn excluded_booking_is_ignored() {
        let state = test_state();
        let company_id = Uuid::new_v4();
        let professional_id = Uuid::new_v4();
        let ctx = admin_context(company_id);
        let date = NaiveDate::from_ymd_opt(2024, 6, 10).unwrap();

        let existing = appointment(
            company_id,
            professional_id,
            date,
            hm(10, 0),
            hm(11, 0),
            AppointmentStatus::Pending,
        );
        let existing_id = existing.id;
        state.store.appointments.insert_unchecked(existing).await;

        let service = ConflictService::new(&state);
        let conflicts = service
            .find_conflicts(
                &ctx,
                professional_id,
                date,
                TimeInterval::new(hm(10, 0), hm(11, 0)),
                Some(existing_id),
            )
            .await
            .unwrap();

        assert!(conflicts.is_empty());
    }
}
