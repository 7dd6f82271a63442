pub mod error;
pub mod handlers;
pub mod models;
pub mod router;
pub mod services;

pub use error::ClientError;
pub use router::client_routes;
pub use services::ClientService;
