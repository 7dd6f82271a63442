pub mod error;
pub mod handlers;
pub mod models;
pub mod router;
pub mod services;

pub use error::ProfessionalError;
pub use models::{DayAvailability, UpsertExceptionRequest};
pub use router::professional_routes;
pub use services::availability::{default_week, resolve_day, validate_weekly_rules, weekday_index};
pub use services::scheduling::generate_slots;
pub use services::{AvailabilityService, ProfessionalService, SchedulingService};
