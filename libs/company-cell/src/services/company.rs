use std::sync::Arc;

use chrono::Utc;
use tracing::{debug, info};
use uuid::Uuid;

use shared_models::{
    Company, NotificationSettings, Plan, Role, TenantContext, User,
};
use shared_storage::{AppState, Repository};

use crate::error::CompanyError;
use crate::models::{CreateCompanyRequest, UpdateCompanyRequest};

pub struct CompanyService {
    companies: Arc<dyn Repository<Company>>,
    users: Arc<dyn Repository<User>>,
}

impl CompanyService {
    pub fn new(state: &AppState) -> Self {
        Self {
            companies: state.store.companies.clone(),
            users: state.store.users.clone(),
        }
    }

    pub async fn list(&self, ctx: &TenantContext) -> Result<Vec<Company>, CompanyError> {
        Ok(self.companies.list(ctx).await?)
    }

    pub async fn get(&self, ctx: &TenantContext, company_id: Uuid) -> Result<Company, CompanyError> {
        Ok(self.companies.get(ctx, company_id).await?)
    }

    /// Creates the tenant together with its first admin login, so a fresh
    /// company is usable without a separate signup step.
    pub async fn create(
        &self,
        ctx: &TenantContext,
        request: CreateCompanyRequest,
    ) -> Result<(Company, User), CompanyError> {
        debug!("Creating company {}", request.name);
        if request.name.trim().is_empty() {
            return Err(CompanyError::ValidationError(
                "Company name is required".to_string(),
            ));
        }

        let company = Company {
            id: Uuid::new_v4(),
            name: request.name,
            plan: request.plan.unwrap_or(Plan::Pro),
            active: request.active.unwrap_or(true),
            created_at: Utc::now(),
            notification_settings: None,
        };
        let company = self.companies.create(ctx, company).await?;

        let admin = User {
            id: Uuid::new_v4(),
            company_id: Some(company.id),
            name: format!("Admin {}", company.name),
            email: format!("admin@{}.com", email_slug(&company.name)),
            role: Role::CompanyAdmin,
            avatar_url: None,
        };
        let admin = self.users.create(ctx, admin).await?;

        info!("Created company {} with admin login {}", company.id, admin.email);
        Ok((company, admin))
    }

    pub async fn update(
        &self,
        ctx: &TenantContext,
        company_id: Uuid,
        request: UpdateCompanyRequest,
    ) -> Result<Company, CompanyError> {
        debug!("Updating company {}", company_id);
        let mut company = self.companies.get(ctx, company_id).await?;
        if let Some(name) = request.name {
            if name.trim().is_empty() {
                return Err(CompanyError::ValidationError(
                    "Company name is required".to_string(),
                ));
            }
            company.name = name;
        }
        if let Some(plan) = request.plan {
            company.plan = plan;
        }
        if let Some(active) = request.active {
            company.active = active;
        }
        Ok(self.companies.update(ctx, company).await?)
    }

    pub async fn delete(&self, ctx: &TenantContext, company_id: Uuid) -> Result<(), CompanyError> {
        debug!("Deleting company {}", company_id);
        Ok(self.companies.delete(ctx, company_id).await?)
    }

    /// The caller's own company record, as shown on the settings screen.
    pub async fn own_company(&self, ctx: &TenantContext) -> Result<Company, CompanyError> {
        let company_id = ctx.company_id.ok_or(CompanyError::NoCompanyBound)?;
        Ok(self.companies.get(ctx, company_id).await?)
    }

    /// Replaces the whole notification settings blob; the settings screen
    /// always submits every field.
    pub async fn update_notification_settings(
        &self,
        ctx: &TenantContext,
        settings: NotificationSettings,
    ) -> Result<Company, CompanyError> {
        let mut company = self.own_company(ctx).await?;
        company.notification_settings = Some(settings);
        let company = self.companies.update(ctx, company).await?;

        info!("Updated notification settings for company {}", company.id);
        Ok(company)
    }
}

/// Login local-part for the bootstrap admin: the company name stripped to
/// ascii alphanumerics, lower-cased, with a fallback for names that leave
/// nothing behind.
fn email_slug(name: &str) -> String {
    let slug: String = name
        .chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .collect::<String>()
        .to_lowercase();
    if slug.is_empty() {
        "empresa".to_string()
    } else {
        slug
    }
}
