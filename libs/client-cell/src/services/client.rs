use std::sync::Arc;

use chrono::Utc;
use tracing::debug;
use uuid::Uuid;

use shared_models::{Client, TenantContext};
use shared_storage::{AppState, Repository};

use crate::error::ClientError;
use crate::models::{CreateClientRequest, UpdateClientRequest};

pub struct ClientService {
    clients: Arc<dyn Repository<Client>>,
}

impl ClientService {
    pub fn new(state: &AppState) -> Self {
        Self {
            clients: state.store.clients.clone(),
        }
    }

    /// Listing with the directory search box semantics: the term matches the
    /// name case-insensitively and the email as typed.
    pub async fn list(
        &self,
        ctx: &TenantContext,
        search: Option<&str>,
    ) -> Result<Vec<Client>, ClientError> {
        let mut clients = self.clients.list(ctx).await?;
        if let Some(term) = search {
            let lowered = term.to_lowercase();
            clients.retain(|client| {
                client.name.to_lowercase().contains(&lowered) || client.email.contains(term)
            });
        }
        Ok(clients)
    }

    pub async fn get(&self, ctx: &TenantContext, client_id: Uuid) -> Result<Client, ClientError> {
        Ok(self.clients.get(ctx, client_id).await?)
    }

    pub async fn create(
        &self,
        ctx: &TenantContext,
        request: CreateClientRequest,
    ) -> Result<Client, ClientError> {
        debug!("Creating client {}", request.name);
        validate_contact(&request.name, &request.email, &request.phone)?;

        let company_id = request
            .company_id
            .or(ctx.company_id)
            .ok_or_else(|| ClientError::ValidationError("companyId is required".to_string()))?;

        let client = Client {
            id: Uuid::new_v4(),
            company_id,
            name: request.name,
            email: request.email,
            phone: request.phone,
            notes: request.notes,
            created_at: Utc::now(),
        };
        Ok(self.clients.create(ctx, client).await?)
    }

    pub async fn update(
        &self,
        ctx: &TenantContext,
        client_id: Uuid,
        request: UpdateClientRequest,
    ) -> Result<Client, ClientError> {
        debug!("Updating client {}", client_id);
        let mut client = self.clients.get(ctx, client_id).await?;
        if let Some(name) = request.name {
            client.name = name;
        }
        if let Some(email) = request.email {
            client.email = email;
        }
        if let Some(phone) = request.phone {
            client.phone = phone;
        }
        if let Some(notes) = request.notes {
            client.notes = Some(notes);
        }
        validate_contact(&client.name, &client.email, &client.phone)?;
        Ok(self.clients.update(ctx, client).await?)
    }

    pub async fn delete(&self, ctx: &TenantContext, client_id: Uuid) -> Result<(), ClientError> {
        debug!("Deleting client {}", client_id);
        Ok(self.clients.delete(ctx, client_id).await?)
    }
}

fn validate_contact(name: &str, email: &str, phone: &str) -> Result<(), ClientError> {
    if name.trim().is_empty() || email.trim().is_empty() || phone.trim().is_empty() {
        return Err(ClientError::ValidationError(
            "Name, email and phone are required".to_string(),
        ));
    }
    Ok(())
}
