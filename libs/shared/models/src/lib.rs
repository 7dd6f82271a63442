pub mod appointment;
pub mod auth;
pub mod client;
pub mod company;
pub mod error;
pub mod event;
pub mod finance;
pub mod notification;
pub mod professional;
pub mod service;
pub mod time;

pub use appointment::{Appointment, AppointmentStatus};
pub use auth::{Role, TenantContext, User};
pub use client::Client;
pub use company::{Company, Plan};
pub use error::AppError;
pub use event::Event;
pub use finance::{PaymentMethod, Transaction, TransactionStatus, TransactionType};
pub use notification::{
    DeliveryStatus, MessageTemplates, NotificationLog, NotificationProvider,
    NotificationSettings, NotificationTrigger,
};
pub use professional::{AvailabilityException, AvailabilityRule, Professional};
pub use service::{CustomField, CustomFieldType, Service};
pub use time::TimeInterval;
