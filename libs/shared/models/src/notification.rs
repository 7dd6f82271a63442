use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NotificationProvider {
    Mock,
    WhatsappCloud,
    ZApi,
    Ultramsg,
}

/// Message bodies with `{placeholder}` tokens, one per dispatch trigger.
/// Defaults are the product's stock Portuguese copy.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageTemplates {
    pub appointment_created: String,
    pub appointment_reminder: String,
    pub appointment_cancelled: String,
    pub payment_link: String,
    pub event_invite: String,
}

impl Default for MessageTemplates {
    fn default() -> Self {
        Self {
            appointment_created: "Olá {client_name}, seu agendamento de {service_name} foi confirmado para {date} às {time} com {professional_name}.📍".into(),
            appointment_reminder: "Lembrete: Você tem um horário de {service_name} hoje às {time}. Confirma?".into(),
            appointment_cancelled: "Olá {client_name}, seu agendamento para {date} foi cancelado. Entre em contato para reagendar.".into(),
            payment_link: "Olá, segue o link de pagamento para seu serviço: {link}".into(),
            event_invite: "Você foi inscrito no evento {event_title} dia {date}. Link: {link}".into(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationSettings {
    pub provider: NotificationProvider,
    pub api_key: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instance_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone_from: Option<String>,
    pub templates: MessageTemplates,
    pub active: bool,
}

/// Dispatch triggers, stored on each log entry. Template keys stay camelCase
/// on the settings payload; the log wire uses the upper-case form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NotificationTrigger {
    AppointmentCreated,
    AppointmentReminder,
    AppointmentCancelled,
    PaymentLink,
    EventInvite,
}

impl NotificationTrigger {
    pub fn template<'a>(&self, templates: &'a MessageTemplates) -> &'a str {
        match self {
            NotificationTrigger::AppointmentCreated => &templates.appointment_created,
            NotificationTrigger::AppointmentReminder => &templates.appointment_reminder,
            NotificationTrigger::AppointmentCancelled => &templates.appointment_cancelled,
            NotificationTrigger::PaymentLink => &templates.payment_link,
            NotificationTrigger::EventInvite => &templates.event_invite,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DeliveryStatus {
    Sent,
    Failed,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationLog {
    pub id: Uuid,
    pub company_id: Uuid,
    pub date: DateTime<Utc>,
    pub to: String,
    pub message: String,
    pub trigger: NotificationTrigger,
    pub status: DeliveryStatus,
}
