use std::sync::Arc;

use chrono::{NaiveTime, Utc};
use uuid::Uuid;

use shared_config::AppConfig;
use shared_models::{
    AvailabilityRule, Client, Company, MessageTemplates, NotificationProvider,
    NotificationSettings, Plan, Professional, Role, Service, TenantContext, TimeInterval, User,
};
use shared_storage::AppState;

pub fn hm(hour: u32, minute: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, minute, 0).unwrap()
}

pub fn test_config() -> AppConfig {
    AppConfig {
        bind_host: "127.0.0.1".to_string(),
        bind_port: 0,
        seed_demo: false,
    }
}

pub fn test_state() -> Arc<AppState> {
    Arc::new(AppState::new(test_config()))
}

pub fn master_context() -> TenantContext {
    TenantContext {
        user_id: Uuid::new_v4(),
        company_id: None,
        role: Role::MasterAdmin,
    }
}

pub fn admin_context(company_id: Uuid) -> TenantContext {
    TenantContext {
        user_id: Uuid::new_v4(),
        company_id: Some(company_id),
        role: Role::CompanyAdmin,
    }
}

pub fn user_fixture(company_id: Uuid, role: Role) -> User {
    User {
        id: Uuid::new_v4(),
        company_id: Some(company_id),
        name: "Admin Teste".to_string(),
        email: "admin@teste.com".to_string(),
        role,
        avatar_url: None,
    }
}

/// Active company with the stock message templates and notifications
/// switched on.
pub fn company_fixture() -> Company {
    Company {
        id: Uuid::new_v4(),
        name: "Barbearia Teste".to_string(),
        plan: Plan::Pro,
        active: true,
        created_at: Utc::now(),
        notification_settings: Some(NotificationSettings {
            provider: NotificationProvider::Mock,
            api_key: "sk_test_123".to_string(),
            instance_id: None,
            phone_from: None,
            templates: MessageTemplates::default(),
            active: true,
        }),
    }
}

pub fn client_fixture(company_id: Uuid) -> Client {
    Client {
        id: Uuid::new_v4(),
        company_id,
        name: "Maria Silva".to_string(),
        email: "maria@example.com".to_string(),
        phone: "+55 11 98888-7777".to_string(),
        notes: None,
        created_at: Utc::now(),
    }
}

pub fn service_fixture(company_id: Uuid, duration_minutes: u32, price: f64) -> Service {
    Service {
        id: Uuid::new_v4(),
        company_id,
        name: "Corte de Cabelo".to_string(),
        duration_minutes,
        price,
        custom_fields: None,
    }
}

/// Professional working every day 09:00-18:00 with 60-minute slots, so
/// tests stay independent of which weekday a date lands on.
pub fn professional_fixture(company_id: Uuid) -> Professional {
    let availability = (0u8..7)
        .map(|day_of_week| AvailabilityRule {
            day_of_week,
            active: true,
            intervals: vec![TimeInterval::new(hm(9, 0), hm(18, 0))],
        })
        .collect();
    Professional {
        id: Uuid::new_v4(),
        company_id,
        name: "Carlos Barbeiro".to_string(),
        email: "carlos@barbearia.com".to_string(),
        specialty: "Barbeiro".to_string(),
        avatar_url: None,
        availability,
        exceptions: Vec::new(),
        slot_interval: Some(60),
    }
}
