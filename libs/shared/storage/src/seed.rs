use chrono::Utc;
use tracing::info;
use uuid::Uuid;

use shared_models::{
    Company, MessageTemplates, NotificationProvider, NotificationSettings, Plan, Role, User,
};

use crate::state::MemoryStore;

/// First-run demo tenants: two companies and their logins. Bearer tokens
/// are the seeded user ids, so each one is logged at startup. Skipped
/// when the user table already has records.
pub async fn seed_demo(store: &MemoryStore) {
    if !store.users.is_empty().await {
        return;
    }

    let barbershop = Company {
        id: Uuid::new_v4(),
        name: "Barbearia Vintage".to_string(),
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
    };
    let consultancy = Company {
        id: Uuid::new_v4(),
        name: "Consultoria Tech".to_string(),
        plan: Plan::Enterprise,
        active: true,
        created_at: Utc::now(),
        notification_settings: Some(NotificationSettings {
            provider: NotificationProvider::WhatsappCloud,
            api_key: String::new(),
            instance_id: None,
            phone_from: None,
            templates: MessageTemplates::default(),
            active: false,
        }),
    };

    let users = [
        User {
            id: Uuid::new_v4(),
            company_id: None,
            name: "Master Admin".to_string(),
            email: "master@cronos.com".to_string(),
            role: Role::MasterAdmin,
            avatar_url: None,
        },
        User {
            id: Uuid::new_v4(),
            company_id: Some(barbershop.id),
            name: "Admin Barbearia".to_string(),
            email: "admin@barbearia.com".to_string(),
            role: Role::CompanyAdmin,
            avatar_url: None,
        },
        User {
            id: Uuid::new_v4(),
            company_id: Some(consultancy.id),
            name: "Admin Consultoria".to_string(),
            email: "admin@consultoria.com".to_string(),
            role: Role::CompanyAdmin,
            avatar_url: None,
        },
        User {
            id: Uuid::new_v4(),
            company_id: Some(barbershop.id),
            name: "João Cliente".to_string(),
            email: "joao@cliente.com".to_string(),
            role: Role::Client,
            avatar_url: None,
        },
    ];

    store.companies.insert_unchecked(barbershop).await;
    store.companies.insert_unchecked(consultancy).await;
    for user in users {
        info!("Seeded login {} <{}> token: {}", user.name, user.email, user.id);
        store.users.insert_unchecked(user).await;
    }
}
