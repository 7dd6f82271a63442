// libs/appointment-cell/src/services/booking.rs
use std::sync::Arc;

use chrono::{Duration, Utc};
use tracing::{debug, info, warn};
use uuid::Uuid;

use notification_cell::NotificationService;
use professional_cell::generate_slots;
use shared_models::{
    Appointment, AppointmentStatus, Client, PaymentMethod, Professional, Service, TenantContext,
    TimeInterval,
};
use shared_storage::{AppState, AppointmentQueries, Repository};

use crate::error::AppointmentError;
use crate::models::{
    AppointmentSearchQuery, AppointmentStats, CreateAppointmentRequest, UpdateAppointmentRequest,
};
use crate::services::conflict::ConflictService;
use crate::services::lifecycle::AppointmentLifecycle;
use crate::services::payment::PaymentService;

pub struct BookingService {
    appointments: Arc<dyn AppointmentQueries>,
    clients: Arc<dyn Repository<Client>>,
    services: Arc<dyn Repository<Service>>,
    professionals: Arc<dyn Repository<Professional>>,
    conflict_service: ConflictService,
    lifecycle_service: AppointmentLifecycle,
    payment_service: PaymentService,
    notification_service: NotificationService,
}

impl BookingService {
    pub fn new(state: &AppState) -> Self {
        Self::with_notifier(state, NotificationService::new(state))
    }

    pub fn with_notifier(state: &AppState, notification_service: NotificationService) -> Self {
        Self {
            appointments: state.store.appointments.clone(),
            clients: state.store.clients.clone(),
            services: state.store.services.clone(),
            professionals: state.store.professionals.clone(),
            conflict_service: ConflictService::new(state),
            lifecycle_service: AppointmentLifecycle::new(),
            payment_service: PaymentService::new(state),
            notification_service,
        }
    }

    /// Books a PENDING appointment. Nothing is persisted unless every
    /// validation passes; the confirmation message is best-effort.
    pub async fn book(
        &self,
        ctx: &TenantContext,
        request: CreateAppointmentRequest,
    ) -> Result<Appointment, AppointmentError> {
        info!(
            "Booking appointment for client {} with professional {} on {}",
            request.client_id, request.professional_id, request.date
        );

        // Step 1: every referenced record must exist and be visible.
        let client = self
            .clients
            .get(ctx, request.client_id)
            .await
            .map_err(|_| AppointmentError::ClientNotFound)?;
        let service = self
            .services
            .get(ctx, request.service_id)
            .await
            .map_err(|_| AppointmentError::ServiceNotFound)?;
        let professional = self
            .professionals
            .get(ctx, request.professional_id)
            .await
            .map_err(|_| AppointmentError::ProfessionalNotFound)?;

        // Step 2: one tenant across the board. Scoped reads already
        // guarantee this for company admins; the master can see everything
        // and still must not mix companies.
        if client.company_id != professional.company_id
            || service.company_id != professional.company_id
        {
            return Err(AppointmentError::ValidationError(
                "Client, service and professional belong to different companies".to_string(),
            ));
        }

        // Step 3: the start time must be one of the offered slots.
        let day_appointments = self
            .appointments
            .list_for_professional_day(ctx, professional.id, request.date)
            .await?;
        let offered = generate_slots(request.date, &professional, &day_appointments);
        if !offered.contains(&request.start_time) {
            warn!(
                "Requested time {} on {} is not offered by professional {}",
                request.start_time.format("%H:%M"),
                request.date,
                professional.id
            );
            return Err(AppointmentError::SlotNotAvailable);
        }

        // Step 4: the booking spans the full service duration, which may
        // overrun the slot that admitted it.
        if service.duration_minutes == 0 {
            return Err(AppointmentError::ValidationError(
                "Service duration must be at least one minute".to_string(),
            ));
        }
        let (end_time, wrapped) = request
            .start_time
            .overflowing_add_signed(Duration::minutes(service.duration_minutes as i64));
        if wrapped != 0 {
            return Err(AppointmentError::ValidationError(
                "Service runs past midnight".to_string(),
            ));
        }

        // Step 5: re-check the whole interval against the day's bookings.
        // The slot walk only proves the start is free.
        let interval = TimeInterval::new(request.start_time, end_time);
        let conflicts = self
            .conflict_service
            .find_conflicts(ctx, professional.id, request.date, interval, None)
            .await?;
        if !conflicts.is_empty() {
            return Err(AppointmentError::ConflictDetected);
        }

        // Step 6: persist. Reads and this insert are not atomic; the
        // repository seam is where a transactional check-and-insert would
        // go if concurrent admins per tenant became a supported setup.
        let appointment = Appointment {
            id: Uuid::new_v4(),
            company_id: professional.company_id,
            client_id: client.id,
            professional_id: professional.id,
            service_id: service.id,
            date: request.date,
            start_time: request.start_time,
            end_time,
            status: AppointmentStatus::Pending,
            notes: request.notes,
            custom_field_values: request.custom_field_values,
        };
        let created = self.appointments.create(ctx, appointment).await?;

        // Step 7: confirmation message. Delivery problems never unwind a
        // booking that is already stored.
        if let Err(err) = self
            .notification_service
            .appointment_created(ctx, &created)
            .await
        {
            warn!(
                "Booking confirmation for {} not dispatched: {}",
                created.id, err
            );
        }

        info!(
            "Appointment {} booked for client {} at {}",
            created.id,
            client.id,
            created.start_time.format("%H:%M")
        );
        Ok(created)
    }

    pub async fn get(
        &self,
        ctx: &TenantContext,
        appointment_id: Uuid,
    ) -> Result<Appointment, AppointmentError> {
        Ok(self.appointments.get(ctx, appointment_id).await?)
    }

    pub async fn search(
        &self,
        ctx: &TenantContext,
        query: AppointmentSearchQuery,
    ) -> Result<Vec<Appointment>, AppointmentError> {
        debug!("Searching appointments with filters: {:?}", query);

        let mut appointments = self.appointments.list(ctx).await?;

        if let Some(date) = query.date {
            appointments.retain(|appointment| appointment.date == date);
        }
        if let Some(from) = query.from {
            appointments.retain(|appointment| appointment.date >= from);
        }
        if let Some(to) = query.to {
            appointments.retain(|appointment| appointment.date <= to);
        }
        if let Some(professional_id) = query.professional_id {
            appointments.retain(|appointment| appointment.professional_id == professional_id);
        }
        if let Some(client_id) = query.client_id {
            appointments.retain(|appointment| appointment.client_id == client_id);
        }
        if let Some(status) = query.status {
            appointments.retain(|appointment| appointment.status == status);
        }

        appointments.sort_by_key(|appointment| (appointment.date, appointment.start_time));
        Ok(appointments)
    }

    /// Generic edit: notes, custom field values, and the non-terminal
    /// status moves. Terminal targets are refused here so payment capture
    /// and cancellation notices cannot be bypassed.
    pub async fn update(
        &self,
        ctx: &TenantContext,
        appointment_id: Uuid,
        request: UpdateAppointmentRequest,
    ) -> Result<Appointment, AppointmentError> {
        debug!("Updating appointment: {}", appointment_id);

        let mut appointment = self.appointments.get(ctx, appointment_id).await?;

        if let Some(target) = request.status {
            if target.is_terminal() {
                return Err(AppointmentError::ValidationError(format!(
                    "Status {} must go through its dedicated endpoint",
                    target
                )));
            }
            if target != appointment.status {
                self.lifecycle_service
                    .validate_transition(appointment.status, target)?;
                appointment.status = target;
            }
        }
        if let Some(notes) = request.notes {
            appointment.notes = Some(notes);
        }
        if let Some(values) = request.custom_field_values {
            appointment.custom_field_values = Some(values);
        }

        let updated = self.appointments.update(ctx, appointment).await?;
        info!("Appointment {} updated", updated.id);
        Ok(updated)
    }

    /// Cancels the booking and tells the client, releasing its slots.
    pub async fn cancel(
        &self,
        ctx: &TenantContext,
        appointment_id: Uuid,
    ) -> Result<Appointment, AppointmentError> {
        debug!("Cancelling appointment: {}", appointment_id);

        let mut appointment = self.appointments.get(ctx, appointment_id).await?;
        self.lifecycle_service
            .validate_transition(appointment.status, AppointmentStatus::Cancelled)?;

        appointment.status = AppointmentStatus::Cancelled;
        let cancelled = self.appointments.update(ctx, appointment).await?;

        if let Err(err) = self
            .notification_service
            .appointment_cancelled(ctx, &cancelled)
            .await
        {
            warn!(
                "Cancellation notice for {} not dispatched: {}",
                cancelled.id, err
            );
        }

        info!("Appointment {} cancelled", cancelled.id);
        Ok(cancelled)
    }

    /// Payment first, status second: a failed capture leaves the booking
    /// in its current status.
    pub async fn complete(
        &self,
        ctx: &TenantContext,
        appointment_id: Uuid,
        payment_method: PaymentMethod,
    ) -> Result<Appointment, AppointmentError> {
        debug!("Completing appointment: {}", appointment_id);

        let mut appointment = self.appointments.get(ctx, appointment_id).await?;
        self.lifecycle_service
            .validate_transition(appointment.status, AppointmentStatus::Completed)?;

        let service = self
            .services
            .get(ctx, appointment.service_id)
            .await
            .map_err(|_| AppointmentError::ServiceNotFound)?;

        self.payment_service
            .capture_service_payment(ctx, &appointment, &service, payment_method)
            .await?;

        appointment.status = AppointmentStatus::Completed;
        let completed = self.appointments.update(ctx, appointment).await?;

        info!("Appointment {} completed and paid", completed.id);
        Ok(completed)
    }

    /// Counters for the dashboard cards.
    pub async fn stats(&self, ctx: &TenantContext) -> Result<AppointmentStats, AppointmentError> {
        let appointments = self.appointments.list(ctx).await?;
        let today = Utc::now().date_naive();

        Ok(AppointmentStats {
            total: appointments.len(),
            today: appointments
                .iter()
                .filter(|appointment| appointment.date == today)
                .count(),
            pending: appointments
                .iter()
                .filter(|appointment| appointment.status == AppointmentStatus::Pending)
                .count(),
            completed: appointments
                .iter()
                .filter(|appointment| appointment.status == AppointmentStatus::Completed)
                .count(),
        })
    }
}
