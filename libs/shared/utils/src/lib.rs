pub mod fixtures;
pub mod tenant;

pub use tenant::{require_admin, require_master, tenant_middleware};
