use std::sync::Arc;

use shared_config::AppConfig;
use shared_models::{
    Appointment, Client, Company, Event, NotificationLog, Professional, Service, Transaction,
    User,
};

use crate::memory::MemoryCollection;

/// Every collection the backend persists, one per legacy storage key.
pub struct MemoryStore {
    pub companies: Arc<MemoryCollection<Company>>,
    pub users: Arc<MemoryCollection<User>>,
    pub clients: Arc<MemoryCollection<Client>>,
    pub services: Arc<MemoryCollection<Service>>,
    pub professionals: Arc<MemoryCollection<Professional>>,
    pub appointments: Arc<MemoryCollection<Appointment>>,
    pub transactions: Arc<MemoryCollection<Transaction>>,
    pub notifications: Arc<MemoryCollection<NotificationLog>>,
    pub events: Arc<MemoryCollection<Event>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            companies: Arc::new(MemoryCollection::new()),
            users: Arc::new(MemoryCollection::new()),
            clients: Arc::new(MemoryCollection::new()),
            services: Arc::new(MemoryCollection::new()),
            professionals: Arc::new(MemoryCollection::new()),
            appointments: Arc::new(MemoryCollection::new()),
            transactions: Arc::new(MemoryCollection::new()),
            notifications: Arc::new(MemoryCollection::new()),
            events: Arc::new(MemoryCollection::new()),
        }
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

/// Shared application state handed to every router; services are built
/// per request from the collections in here.
pub struct AppState {
    pub config: AppConfig,
    pub store: MemoryStore,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        Self {
            config,
            store: MemoryStore::new(),
        }
    }
}
