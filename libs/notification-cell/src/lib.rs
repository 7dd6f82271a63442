pub mod error;
pub mod handlers;
pub mod router;
pub mod services;

pub use error::NotificationError;
pub use router::notification_routes;
pub use services::{ConsoleGateway, MessageGateway, NotificationService};
