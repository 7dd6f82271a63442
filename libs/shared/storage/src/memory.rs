use async_trait::async_trait;
use chrono::NaiveDate;
use tokio::sync::RwLock;
use uuid::Uuid;

use shared_models::{Appointment, TenantContext, User};

use crate::error::StorageError;
use crate::repository::{AppointmentQueries, Repository, TenantOwned, UserDirectory};

/// One entity's records behind a read/write lock. The whole store is
/// process-local; durability is out of scope, matching the single-node
/// deployment this backend replaces.
pub struct MemoryCollection<T> {
    items: RwLock<Vec<T>>,
}

impl<T: Clone> MemoryCollection<T> {
    pub fn new() -> Self {
        Self {
            items: RwLock::new(Vec::new()),
        }
    }

    /// Unscoped insert for seeding and test fixtures.
    pub async fn insert_unchecked(&self, item: T) {
        self.items.write().await.push(item);
    }

    pub async fn len(&self) -> usize {
        self.items.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.items.read().await.is_empty()
    }
}

impl<T: Clone> Default for MemoryCollection<T> {
    fn default() -> Self {
        Self::new()
    }
}

fn visible<T: TenantOwned>(ctx: &TenantContext, item: &T) -> bool {
    match item.company_id() {
        Some(company) => ctx.can_view_company(company),
        // Company-less records (master users) are master-only.
        None => ctx.is_master(),
    }
}

fn stamp_owner<T: TenantOwned>(ctx: &TenantContext, item: &mut T) -> Result<(), StorageError> {
    if !ctx.is_master() {
        let company = ctx.company_id.ok_or(StorageError::MissingCompany)?;
        item.assign_company(company);
    }
    Ok(())
}

#[async_trait]
impl<T> Repository<T> for MemoryCollection<T>
where
    T: TenantOwned + Clone + Send + Sync,
{
    async fn list(&self, ctx: &TenantContext) -> Result<Vec<T>, StorageError> {
        let items = self.items.read().await;
        Ok(items.iter().filter(|item| visible(ctx, *item)).cloned().collect())
    }

    async fn get(&self, ctx: &TenantContext, id: Uuid) -> Result<T, StorageError> {
        let items = self.items.read().await;
        items
            .iter()
            .find(|item| item.id() == id && visible(ctx, *item))
            .cloned()
            .ok_or(StorageError::NotFound)
    }

    async fn create(&self, ctx: &TenantContext, mut item: T) -> Result<T, StorageError> {
        stamp_owner(ctx, &mut item)?;
        self.items.write().await.push(item.clone());
        Ok(item)
    }

    async fn update(&self, ctx: &TenantContext, mut item: T) -> Result<T, StorageError> {
        stamp_owner(ctx, &mut item)?;
        let mut items = self.items.write().await;
        let index = items
            .iter()
            .position(|existing| existing.id() == item.id() && visible(ctx, existing))
            .ok_or(StorageError::NotFound)?;
        items[index] = item.clone();
        Ok(item)
    }

    async fn delete(&self, ctx: &TenantContext, id: Uuid) -> Result<(), StorageError> {
        let mut items = self.items.write().await;
        let index = items
            .iter()
            .position(|existing| existing.id() == id && visible(ctx, existing))
            .ok_or(StorageError::NotFound)?;
        items.remove(index);
        Ok(())
    }
}

#[async_trait]
impl AppointmentQueries for MemoryCollection<Appointment> {
    async fn list_for_professional_day(
        &self,
        ctx: &TenantContext,
        professional_id: Uuid,
        date: NaiveDate,
    ) -> Result<Vec<Appointment>, StorageError> {
        let items = self.items.read().await;
        Ok(items
            .iter()
            .filter(|appointment| {
                visible(ctx, *appointment)
                    && appointment.professional_id == professional_id
                    && appointment.date == date
            })
            .cloned()
            .collect())
    }

    async fn list_for_day(
        &self,
        ctx: &TenantContext,
        date: NaiveDate,
    ) -> Result<Vec<Appointment>, StorageError> {
        let items = self.items.read().await;
        Ok(items
            .iter()
            .filter(|appointment| visible(ctx, *appointment) && appointment.date == date)
            .cloned()
            .collect())
    }
}

#[async_trait]
impl UserDirectory for MemoryCollection<User> {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, StorageError> {
        let items = self.items.read().await;
        Ok(items.iter().find(|user| user.id == id).cloned())
    }
}
