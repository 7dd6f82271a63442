pub mod error;
pub mod handlers;
pub mod models;
pub mod router;
pub mod services;

pub use error::FinanceError;
pub use models::FinanceSummary;
pub use router::finance_routes;
pub use services::LedgerService;
