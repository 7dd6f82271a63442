use async_trait::async_trait;
use chrono::NaiveDate;
use uuid::Uuid;

use shared_models::{
    Appointment, Client, Company, Event, NotificationLog, Professional, Service, TenantContext,
    Transaction, User,
};

use crate::error::StorageError;

/// Stored record owned by (at most) one company. The store uses this to
/// scope every read and to stamp the owner on writes.
pub trait TenantOwned {
    fn id(&self) -> Uuid;
    fn company_id(&self) -> Option<Uuid>;
    /// Called when a non-master caller writes the record; identity-owned
    /// records (the company itself) ignore it.
    fn assign_company(&mut self, company_id: Uuid);
}

/// Tenant-scoped persistence port, one instantiation per entity. Reads
/// never return another company's records; writes by non-master callers
/// are stamped with the caller's company.
#[async_trait]
pub trait Repository<T>: Send + Sync {
    async fn list(&self, ctx: &TenantContext) -> Result<Vec<T>, StorageError>;
    async fn get(&self, ctx: &TenantContext, id: Uuid) -> Result<T, StorageError>;
    async fn create(&self, ctx: &TenantContext, item: T) -> Result<T, StorageError>;
    async fn update(&self, ctx: &TenantContext, item: T) -> Result<T, StorageError>;
    async fn delete(&self, ctx: &TenantContext, id: Uuid) -> Result<(), StorageError>;
}

/// Appointment lookups the scheduling paths need beyond plain CRUD.
#[async_trait]
pub trait AppointmentQueries: Repository<Appointment> {
    /// Day sheet for one professional, every status included; the caller
    /// decides which statuses matter.
    async fn list_for_professional_day(
        &self,
        ctx: &TenantContext,
        professional_id: Uuid,
        date: NaiveDate,
    ) -> Result<Vec<Appointment>, StorageError>;

    async fn list_for_day(
        &self,
        ctx: &TenantContext,
        date: NaiveDate,
    ) -> Result<Vec<Appointment>, StorageError>;
}

/// Identity lookup used before a request has a tenant context.
#[async_trait]
pub trait UserDirectory: Send + Sync {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, StorageError>;
}

impl TenantOwned for Company {
    fn id(&self) -> Uuid {
        self.id
    }

    // A company is its own tenant; its admins see it through the normal
    // scoping rule.
    fn company_id(&self) -> Option<Uuid> {
        Some(self.id)
    }

    fn assign_company(&mut self, _company_id: Uuid) {}
}

impl TenantOwned for User {
    fn id(&self) -> Uuid {
        self.id
    }

    fn company_id(&self) -> Option<Uuid> {
        self.company_id
    }

    fn assign_company(&mut self, company_id: Uuid) {
        self.company_id = Some(company_id);
    }
}

macro_rules! tenant_owned {
    ($($entity:ty),+ $(,)?) => {
        $(
            impl TenantOwned for $entity {
                fn id(&self) -> Uuid {
                    self.id
                }

                fn company_id(&self) -> Option<Uuid> {
                    Some(self.company_id)
                }

                fn assign_company(&mut self, company_id: Uuid) {
                    self.company_id = company_id;
                }
            }
        )+
    };
}

tenant_owned!(
    Client,
    Service,
    Professional,
    Appointment,
    Transaction,
    NotificationLog,
    Event,
);
