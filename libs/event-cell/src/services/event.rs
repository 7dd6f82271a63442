use std::sync::Arc;

use tracing::{debug, info, warn};
use uuid::Uuid;

use notification_cell::NotificationService;
use shared_models::{Client, Event, TenantContext};
use shared_storage::{AppState, Repository};

use crate::error::EventError;
use crate::models::{CreateEventRequest, UpdateEventRequest};

pub struct EventService {
    events: Arc<dyn Repository<Event>>,
    clients: Arc<dyn Repository<Client>>,
    notification_service: NotificationService,
}

impl EventService {
    pub fn new(state: &AppState) -> Self {
        Self::with_notifier(state, NotificationService::new(state))
    }

    pub fn with_notifier(state: &AppState, notification_service: NotificationService) -> Self {
        Self {
            events: state.store.events.clone(),
            clients: state.store.clients.clone(),
            notification_service,
        }
    }

    /// Upcoming-first listing for the events board.
    pub async fn list(&self, ctx: &TenantContext) -> Result<Vec<Event>, EventError> {
        let mut events = self.events.list(ctx).await?;
        events.sort_by_key(|event| (event.date, event.time));
        Ok(events)
    }

    pub async fn get(&self, ctx: &TenantContext, event_id: Uuid) -> Result<Event, EventError> {
        Ok(self.events.get(ctx, event_id).await?)
    }

    pub async fn create(
        &self,
        ctx: &TenantContext,
        request: CreateEventRequest,
    ) -> Result<Event, EventError> {
        debug!("Creating event {}", request.title);
        if request.title.trim().is_empty() || request.speaker.trim().is_empty() {
            return Err(EventError::ValidationError(
                "Title and speaker are required".to_string(),
            ));
        }
        let capacity = request.capacity.unwrap_or(50);
        if capacity == 0 {
            return Err(EventError::ValidationError(
                "Capacity must be at least one seat".to_string(),
            ));
        }

        let company_id = request
            .company_id
            .or(ctx.company_id)
            .ok_or_else(|| EventError::ValidationError("companyId is required".to_string()))?;

        let event = Event {
            id: Uuid::new_v4(),
            company_id,
            title: request.title,
            date: request.date,
            time: request.time,
            speaker: request.speaker,
            capacity,
            enrolled_ids: Vec::new(),
            meeting_link: request.meeting_link,
            description: request.description,
            duration_minutes: request.duration_minutes,
        };
        Ok(self.events.create(ctx, event).await?)
    }

    pub async fn update(
        &self,
        ctx: &TenantContext,
        event_id: Uuid,
        request: UpdateEventRequest,
    ) -> Result<Event, EventError> {
        debug!("Updating event {}", event_id);
        let mut event = self.events.get(ctx, event_id).await?;
        if let Some(title) = request.title {
            event.title = title;
        }
        if let Some(date) = request.date {
            event.date = date;
        }
        if let Some(time) = request.time {
            event.time = time;
        }
        if let Some(speaker) = request.speaker {
            event.speaker = speaker;
        }
        if let Some(capacity) = request.capacity {
            if (capacity as usize) < event.enrolled_ids.len() {
                return Err(EventError::ValidationError(
                    "Capacity cannot drop below current enrollment".to_string(),
                ));
            }
            event.capacity = capacity;
        }
        if let Some(meeting_link) = request.meeting_link {
            event.meeting_link = Some(meeting_link);
        }
        if let Some(description) = request.description {
            event.description = Some(description);
        }
        if let Some(duration_minutes) = request.duration_minutes {
            event.duration_minutes = Some(duration_minutes);
        }
        Ok(self.events.update(ctx, event).await?)
    }

    pub async fn delete(&self, ctx: &TenantContext, event_id: Uuid) -> Result<(), EventError> {
        debug!("Deleting event {}", event_id);
        Ok(self.events.delete(ctx, event_id).await?)
    }

    /// Adds the client to the roster and sends the invite. Re-enrolling an
    /// already-listed client is a no-op, not an error.
    pub async fn enroll(
        &self,
        ctx: &TenantContext,
        event_id: Uuid,
        client_id: Uuid,
    ) -> Result<Event, EventError> {
        let event = self.events.get(ctx, event_id).await?;
        let client = self
            .clients
            .get(ctx, client_id)
            .await
            .map_err(|_| EventError::ClientNotFound)?;

        // The master can see every tenant and still must not mix them.
        if client.company_id != event.company_id {
            return Err(EventError::ValidationError(
                "Client and event belong to different companies".to_string(),
            ));
        }

        if event.enrolled_ids.contains(&client.id) {
            debug!("Client {} already enrolled in event {}", client.id, event.id);
            return Ok(event);
        }
        if event.is_full() {
            warn!("Event {} is at capacity ({} seats)", event.id, event.capacity);
            return Err(EventError::EventFull);
        }

        let mut event = event;
        event.enrolled_ids.push(client.id);
        let event = self.events.update(ctx, event).await?;

        info!("Enrolled client {} in event {}", client.id, event.id);

        if let Err(err) = self.notification_service.event_invite(ctx, &event, &client).await {
            warn!("Event invite for {} not delivered: {}", client.id, err);
        }

        Ok(event)
    }
}
