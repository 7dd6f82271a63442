use std::sync::Arc;

use chrono::{Duration, NaiveDate, NaiveTime};
use tracing::debug;
use uuid::Uuid;

use shared_models::{Appointment, Professional, TenantContext};
use shared_storage::{AppointmentQueries, AppState, Repository};

use crate::error::ProfessionalError;
use crate::models::DayAvailability;
use crate::services::availability::resolve_day;

const DEFAULT_SLOT_MINUTES: u32 = 60;

/// Bookable start times for one professional on one date. Walks each
/// working interval in `slot_interval` steps, drops candidates that
/// would spill past the interval end or cross midnight, and skips any
/// start whose slot overlaps a non-cancelled appointment.
pub fn generate_slots(
    date: NaiveDate,
    professional: &Professional,
    appointments: &[Appointment],
) -> Vec<NaiveTime> {
    let day = resolve_day(date, professional);
    if !day.is_working || day.intervals.is_empty() {
        return Vec::new();
    }

    let minutes = professional.slot_interval.unwrap_or(DEFAULT_SLOT_MINUTES);
    if minutes == 0 {
        return Vec::new();
    }
    let step = Duration::minutes(minutes as i64);

    let blocking: Vec<&Appointment> = appointments
        .iter()
        .filter(|appointment| appointment.blocks_slot())
        .collect();

    let mut slots = Vec::new();
    for interval in &day.intervals {
        let mut cursor = interval.start;
        loop {
            let (slot_end, wrapped) = cursor.overflowing_add_signed(step);
            if wrapped != 0 || slot_end > interval.end {
                break;
            }

            let taken = blocking.iter().any(|appointment| {
                appointment.start_time < slot_end && appointment.end_time > cursor
            });
            if !taken {
                slots.push(cursor);
            }

            cursor = slot_end;
        }
    }

    // Intervals may touch or overlap; present one ascending list.
    slots.sort();
    slots.dedup();
    slots
}

pub struct SchedulingService {
    professionals: Arc<dyn Repository<Professional>>,
    appointments: Arc<dyn AppointmentQueries>,
}

impl SchedulingService {
    pub fn new(state: &AppState) -> Self {
        Self {
            professionals: state.store.professionals.clone(),
            appointments: state.store.appointments.clone(),
        }
    }

    /// Free slots for the date, with booked ones already removed.
    pub async fn available_slots(
        &self,
        ctx: &TenantContext,
        professional_id: Uuid,
        date: NaiveDate,
    ) -> Result<Vec<NaiveTime>, ProfessionalError> {
        debug!(
            "Calculating available slots for professional {} on {}",
            professional_id, date
        );
        let professional = self.professionals.get(ctx, professional_id).await?;
        let appointments = self
            .appointments
            .list_for_professional_day(ctx, professional_id, date)
            .await?;

        let slots = generate_slots(date, &professional, &appointments);
        debug!("Found {} available slots", slots.len());
        Ok(slots)
    }

    /// Resolved working hours for the date, exception applied.
    pub async fn day_schedule(
        &self,
        ctx: &TenantContext,
        professional_id: Uuid,
        date: NaiveDate,
    ) -> Result<DayAvailability, ProfessionalError> {
        let professional = self.professionals.get(ctx, professional_id).await?;
        Ok(resolve_day(date, &professional))
    }
}
