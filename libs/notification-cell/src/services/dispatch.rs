use std::sync::Arc;

use chrono::Utc;
use tracing::{debug, info, warn};
use uuid::Uuid;

use shared_models::{
    Appointment, Client, Company, DeliveryStatus, Event, NotificationLog, NotificationTrigger,
    Professional, Service, TenantContext,
};
use shared_storage::{AppState, Repository};

use crate::error::NotificationError;
use crate::services::gateway::{ConsoleGateway, MessageGateway};
use crate::services::template::render;

/// Best-effort WhatsApp messaging. Every attempted delivery leaves a log
/// row; a company with notifications switched off (or never configured)
/// produces neither a delivery nor a log.
pub struct NotificationService {
    companies: Arc<dyn Repository<Company>>,
    clients: Arc<dyn Repository<Client>>,
    services: Arc<dyn Repository<Service>>,
    professionals: Arc<dyn Repository<Professional>>,
    logs: Arc<dyn Repository<NotificationLog>>,
    gateway: Arc<dyn MessageGateway>,
}

impl NotificationService {
    pub fn new(state: &AppState) -> Self {
        Self::with_gateway(state, Arc::new(ConsoleGateway))
    }

    pub fn with_gateway(state: &AppState, gateway: Arc<dyn MessageGateway>) -> Self {
        Self {
            companies: state.store.companies.clone(),
            clients: state.store.clients.clone(),
            services: state.store.services.clone(),
            professionals: state.store.professionals.clone(),
            logs: state.store.notifications.clone(),
            gateway,
        }
    }

    pub async fn list_logs(
        &self,
        ctx: &TenantContext,
    ) -> Result<Vec<NotificationLog>, NotificationError> {
        let mut logs = self.logs.list(ctx).await?;
        logs.sort_by(|a, b| b.date.cmp(&a.date));
        Ok(logs)
    }

    /// Booking confirmation to the client's phone.
    pub async fn appointment_created(
        &self,
        ctx: &TenantContext,
        appointment: &Appointment,
    ) -> Result<Option<NotificationLog>, NotificationError> {
        debug!(
            "Dispatching booking confirmation for appointment: {}",
            appointment.id
        );

        let loaded = futures::try_join!(
            self.clients.get(ctx, appointment.client_id),
            self.services.get(ctx, appointment.service_id),
            self.professionals.get(ctx, appointment.professional_id),
        );
        let (client, service, professional) = match loaded {
            Ok(parts) => parts,
            Err(err) => {
                debug!("Skipping confirmation, booking references missing data: {}", err);
                return Ok(None);
            }
        };

        let values = [
            ("client_name", client.name.clone()),
            ("service_name", service.name),
            ("professional_name", professional.name),
            ("date", appointment.date.format("%d/%m/%Y").to_string()),
            ("time", appointment.start_time.format("%H:%M").to_string()),
        ];

        self.dispatch(
            ctx,
            appointment.company_id,
            &client.phone,
            NotificationTrigger::AppointmentCreated,
            &values,
        )
        .await
    }

    /// Cancellation notice to the client's phone.
    pub async fn appointment_cancelled(
        &self,
        ctx: &TenantContext,
        appointment: &Appointment,
    ) -> Result<Option<NotificationLog>, NotificationError> {
        debug!(
            "Dispatching cancellation notice for appointment: {}",
            appointment.id
        );

        let client = match self.clients.get(ctx, appointment.client_id).await {
            Ok(client) => client,
            Err(err) => {
                debug!("Skipping cancellation notice, client lookup failed: {}", err);
                return Ok(None);
            }
        };

        let values = [
            ("client_name", client.name.clone()),
            ("date", appointment.date.format("%d/%m/%Y").to_string()),
        ];

        self.dispatch(
            ctx,
            appointment.company_id,
            &client.phone,
            NotificationTrigger::AppointmentCancelled,
            &values,
        )
        .await
    }

    /// Payment link forwarded to a client's phone.
    pub async fn payment_link(
        &self,
        ctx: &TenantContext,
        client: &Client,
        link: &str,
    ) -> Result<Option<NotificationLog>, NotificationError> {
        debug!("Dispatching payment link to client: {}", client.id);

        let values = [
            ("client_name", client.name.clone()),
            ("link", link.to_string()),
        ];

        self.dispatch(
            ctx,
            client.company_id,
            &client.phone,
            NotificationTrigger::PaymentLink,
            &values,
        )
        .await
    }

    /// Enrollment confirmation for an event, with the meeting link when
    /// the event has one.
    pub async fn event_invite(
        &self,
        ctx: &TenantContext,
        event: &Event,
        client: &Client,
    ) -> Result<Option<NotificationLog>, NotificationError> {
        debug!(
            "Dispatching event invite for event: {} to client: {}",
            event.id, client.id
        );

        let values = [
            ("event_title", event.title.clone()),
            ("date", event.date.format("%d/%m/%Y").to_string()),
            ("link", event.meeting_link.clone().unwrap_or_default()),
        ];

        self.dispatch(
            ctx,
            event.company_id,
            &client.phone,
            NotificationTrigger::EventInvite,
            &values,
        )
        .await
    }

    // Private helper methods

    async fn dispatch(
        &self,
        ctx: &TenantContext,
        company_id: Uuid,
        to: &str,
        trigger: NotificationTrigger,
        values: &[(&str, String)],
    ) -> Result<Option<NotificationLog>, NotificationError> {
        let company = match self.companies.get(ctx, company_id).await {
            Ok(company) => company,
            Err(err) => {
                debug!("Skipping notification, company lookup failed: {}", err);
                return Ok(None);
            }
        };

        let settings = match company.notification_settings {
            Some(settings) => settings,
            None => {
                debug!("Notifications not configured for company: {}", company.name);
                return Ok(None);
            }
        };

        if !settings.active {
            info!("Notifications inactive for company: {}", company.name);
            return Ok(None);
        }

        let message = render(trigger.template(&settings.templates), values);

        let status = match self.gateway.deliver(&settings, to, &message).await {
            Ok(()) => DeliveryStatus::Sent,
            Err(err) => {
                warn!("Message delivery to {} failed: {}", to, err);
                DeliveryStatus::Failed
            }
        };

        let log = NotificationLog {
            id: Uuid::new_v4(),
            company_id,
            date: Utc::now(),
            to: to.to_string(),
            message,
            trigger,
            status,
        };
        let stored = self.logs.create(ctx, log).await?;

        info!(
            "Recorded {:?} notification {} for company: {}",
            status, stored.id, company_id
        );
        Ok(Some(stored))
    }
}
