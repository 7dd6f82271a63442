pub mod error;
pub mod handlers;
pub mod models;
pub mod router;
pub mod services;

pub use error::EventError;
pub use router::event_routes;
pub use services::EventService;
