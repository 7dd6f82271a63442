use std::sync::Arc;

use tracing::debug;
use uuid::Uuid;

use shared_models::{CustomField, CustomFieldType, Service, TenantContext};
use shared_storage::{AppState, Repository};

use crate::error::CatalogError;
use crate::models::{CreateServiceRequest, CustomFieldSpec, UpdateServiceRequest};

pub struct CatalogService {
    services: Arc<dyn Repository<Service>>,
}

impl CatalogService {
    pub fn new(state: &AppState) -> Self {
        Self {
            services: state.store.services.clone(),
        }
    }

    pub async fn list(&self, ctx: &TenantContext) -> Result<Vec<Service>, CatalogError> {
        Ok(self.services.list(ctx).await?)
    }

    pub async fn get(&self, ctx: &TenantContext, service_id: Uuid) -> Result<Service, CatalogError> {
        Ok(self.services.get(ctx, service_id).await?)
    }

    pub async fn create(
        &self,
        ctx: &TenantContext,
        request: CreateServiceRequest,
    ) -> Result<Service, CatalogError> {
        debug!("Creating service {}", request.name);
        validate_offering(&request.name, request.duration_minutes, request.price)?;

        let company_id = request
            .company_id
            .or(ctx.company_id)
            .ok_or_else(|| CatalogError::ValidationError("companyId is required".to_string()))?;

        let custom_fields = request
            .custom_fields
            .map(materialize_fields)
            .transpose()?;

        let service = Service {
            id: Uuid::new_v4(),
            company_id,
            name: request.name,
            duration_minutes: request.duration_minutes,
            price: request.price,
            custom_fields,
        };
        Ok(self.services.create(ctx, service).await?)
    }

    pub async fn update(
        &self,
        ctx: &TenantContext,
        service_id: Uuid,
        request: UpdateServiceRequest,
    ) -> Result<Service, CatalogError> {
        debug!("Updating service {}", service_id);
        let mut service = self.services.get(ctx, service_id).await?;
        if let Some(name) = request.name {
            service.name = name;
        }
        if let Some(duration_minutes) = request.duration_minutes {
            service.duration_minutes = duration_minutes;
        }
        if let Some(price) = request.price {
            service.price = price;
        }
        if let Some(specs) = request.custom_fields {
            service.custom_fields = Some(materialize_fields(specs)?);
        }
        validate_offering(&service.name, service.duration_minutes, service.price)?;
        Ok(self.services.update(ctx, service).await?)
    }

    pub async fn delete(&self, ctx: &TenantContext, service_id: Uuid) -> Result<(), CatalogError> {
        debug!("Deleting service {}", service_id);
        Ok(self.services.delete(ctx, service_id).await?)
    }
}

fn validate_offering(name: &str, duration_minutes: u32, price: f64) -> Result<(), CatalogError> {
    if name.trim().is_empty() {
        return Err(CatalogError::ValidationError(
            "Service name is required".to_string(),
        ));
    }
    if duration_minutes == 0 {
        return Err(CatalogError::ValidationError(
            "Duration must be at least one minute".to_string(),
        ));
    }
    if !price.is_finite() || price < 0.0 {
        return Err(CatalogError::ValidationError(
            "Price must be zero or positive".to_string(),
        ));
    }
    Ok(())
}

fn materialize_fields(specs: Vec<CustomFieldSpec>) -> Result<Vec<CustomField>, CatalogError> {
    specs
        .into_iter()
        .map(|spec| {
            if spec.label.trim().is_empty() {
                return Err(CatalogError::ValidationError(
                    "Custom field label is required".to_string(),
                ));
            }
            if spec.field_type == CustomFieldType::Select
                && spec.options.as_deref().map_or(true, |options| options.is_empty())
            {
                return Err(CatalogError::ValidationError(format!(
                    "Select field '{}' needs at least one option",
                    spec.label
                )));
            }
            Ok(CustomField {
                id: spec.id.unwrap_or_else(Uuid::new_v4),
                label: spec.label,
                field_type: spec.field_type,
                options: spec.options,
                required: spec.required,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    fn spec(label: &str, field_type: CustomFieldType) -> CustomFieldSpec {
        CustomFieldSpec {
            id: None,
            label: label.to_string(),
            field_type,
            options: None,
            required: false,
        }
    }

    #[test]
    fn existing_field_ids_survive_a_save() {
        let kept = Uuid::new_v4();
        let fields = materialize_fields(vec![
            CustomFieldSpec {
                id: Some(kept),
                ..spec("Observações", CustomFieldType::Text)
            },
            spec("Assinatura", CustomFieldType::Signature),
        ])
        .unwrap();

        assert_eq!(fields[0].id, kept);
        assert_ne!(fields[1].id, kept);
    }

    #[test]
    fn select_without_options_is_rejected() {
        let err = materialize_fields(vec![CustomFieldSpec {
            options: Some(Vec::new()),
            ..spec("Tamanho", CustomFieldType::Select)
        }])
        .unwrap_err();
        assert_matches!(err, CatalogError::ValidationError(msg) if msg.contains("Tamanho"));

        assert!(materialize_fields(vec![CustomFieldSpec {
            options: Some(vec!["P".into(), "M".into(), "G".into()]),
            ..spec("Tamanho", CustomFieldType::Select)
        }])
        .is_ok());
    }

    #[test]
    fn offering_guards_reject_free_form_nonsense() {
        assert!(validate_offering("Corte", 30, 50.0).is_ok());
        assert!(validate_offering(" ", 30, 50.0).is_err());
        assert!(validate_offering("Corte", 0, 50.0).is_err());
        assert!(validate_offering("Corte", 30, -1.0).is_err());
        assert!(validate_offering("Corte", 30, f64::NAN).is_err());
    }
}
