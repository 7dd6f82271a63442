pub mod error;
pub mod handlers;
pub mod models;
pub mod router;
pub mod services;

pub use error::AppointmentError;
pub use models::{AppointmentSearchQuery, AppointmentStats};
pub use router::appointment_routes;
pub use services::{AppointmentLifecycle, BookingService, ConflictService, PaymentService};
