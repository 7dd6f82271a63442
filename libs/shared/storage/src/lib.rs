pub mod error;
pub mod memory;
pub mod repository;
pub mod seed;
pub mod state;

pub use error::StorageError;
pub use memory::MemoryCollection;
pub use repository::{AppointmentQueries, Repository, TenantOwned, UserDirectory};
pub use seed::seed_demo;
pub use state::{AppState, MemoryStore};
