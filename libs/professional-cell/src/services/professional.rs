use std::sync::Arc;

use tracing::debug;
use uuid::Uuid;

use shared_models::{Professional, TenantContext};
use shared_storage::{AppState, Repository};

use crate::error::ProfessionalError;
use crate::models::{CreateProfessionalRequest, UpdateProfessionalRequest};
use crate::services::availability::default_week;

pub struct ProfessionalService {
    professionals: Arc<dyn Repository<Professional>>,
}

impl ProfessionalService {
    pub fn new(state: &AppState) -> Self {
        Self {
            professionals: state.store.professionals.clone(),
        }
    }

    pub async fn list(&self, ctx: &TenantContext) -> Result<Vec<Professional>, ProfessionalError> {
        Ok(self.professionals.list(ctx).await?)
    }

    pub async fn get(
        &self,
        ctx: &TenantContext,
        professional_id: Uuid,
    ) -> Result<Professional, ProfessionalError> {
        Ok(self.professionals.get(ctx, professional_id).await?)
    }

    /// New professionals start with the stock weekly template and no
    /// exceptions.
    pub async fn create(
        &self,
        ctx: &TenantContext,
        request: CreateProfessionalRequest,
    ) -> Result<Professional, ProfessionalError> {
        debug!("Creating professional {}", request.name);
        validate_identity(&request.name, &request.email, &request.specialty)?;
        validate_slot_interval(request.slot_interval)?;

        let company_id = request
            .company_id
            .or(ctx.company_id)
            .ok_or_else(|| {
                ProfessionalError::ValidationError("companyId is required".to_string())
            })?;

        let professional = Professional {
            id: Uuid::new_v4(),
            company_id,
            name: request.name,
            email: request.email,
            specialty: request.specialty,
            avatar_url: request.avatar_url,
            availability: default_week(),
            exceptions: Vec::new(),
            slot_interval: request.slot_interval,
        };
        Ok(self.professionals.create(ctx, professional).await?)
    }

    pub async fn update(
        &self,
        ctx: &TenantContext,
        professional_id: Uuid,
        request: UpdateProfessionalRequest,
    ) -> Result<Professional, ProfessionalError> {
        debug!("Updating professional {}", professional_id);
        validate_slot_interval(request.slot_interval)?;

        let mut professional = self.professionals.get(ctx, professional_id).await?;
        if let Some(name) = request.name {
            professional.name = name;
        }
        if let Some(email) = request.email {
            professional.email = email;
        }
        if let Some(specialty) = request.specialty {
            professional.specialty = specialty;
        }
        if let Some(avatar_url) = request.avatar_url {
            professional.avatar_url = Some(avatar_url);
        }
        if let Some(slot_interval) = request.slot_interval {
            professional.slot_interval = Some(slot_interval);
        }
        Ok(self.professionals.update(ctx, professional).await?)
    }

    pub async fn delete(
        &self,
        ctx: &TenantContext,
        professional_id: Uuid,
    ) -> Result<(), ProfessionalError> {
        debug!("Deleting professional {}", professional_id);
        Ok(self.professionals.delete(ctx, professional_id).await?)
    }
}

fn validate_identity(name: &str, email: &str, specialty: &str) -> Result<(), ProfessionalError> {
    if name.trim().is_empty() || email.trim().is_empty() || specialty.trim().is_empty() {
        return Err(ProfessionalError::ValidationError(
            "Name, email and specialty are required".to_string(),
        ));
    }
    Ok(())
}

fn validate_slot_interval(slot_interval: Option<u32>) -> Result<(), ProfessionalError> {
    if slot_interval == Some(0) {
        return Err(ProfessionalError::ValidationError(
            "Slot interval must be at least 1 minute".to_string(),
        ));
    }
    Ok(())
}
