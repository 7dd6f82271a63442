use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Access tiers carried over from the legacy user records. `EMPRESA_ADMIN`
/// and `CLIENTE` are the stored wire strings and must not change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    #[serde(rename = "MASTER_ADMIN")]
    MasterAdmin,
    #[serde(rename = "EMPRESA_ADMIN")]
    CompanyAdmin,
    #[serde(rename = "CLIENTE")]
    Client,
}

impl Role {
    pub fn is_master(&self) -> bool {
        matches!(self, Role::MasterAdmin)
    }

    pub fn is_admin(&self) -> bool {
        matches!(self, Role::MasterAdmin | Role::CompanyAdmin)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: Uuid,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company_id: Option<Uuid>,
    pub name: String,
    pub email: String,
    pub role: Role,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
}

/// Resolved caller identity, attached to the request by the tenant
/// middleware and threaded through every repository call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TenantContext {
    pub user_id: Uuid,
    pub company_id: Option<Uuid>,
    pub role: Role,
}

impl TenantContext {
    pub fn is_master(&self) -> bool {
        self.role.is_master()
    }

    /// True when the caller may see data belonging to `company_id`. A
    /// non-master caller with no company of their own sees nothing.
    pub fn can_view_company(&self, company_id: Uuid) -> bool {
        self.is_master() || self.company_id == Some(company_id)
    }
}

impl From<&User> for TenantContext {
    fn from(user: &User) -> Self {
        Self {
            user_id: user.id,
            company_id: user.company_id,
            role: user.role,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_wire_strings_are_stable() {
        assert_eq!(
            serde_json::to_string(&Role::CompanyAdmin).unwrap(),
            "\"EMPRESA_ADMIN\""
        );
        assert_eq!(
            serde_json::from_str::<Role>("\"MASTER_ADMIN\"").unwrap(),
            Role::MasterAdmin
        );
        assert_eq!(serde_json::from_str::<Role>("\"CLIENTE\"").unwrap(), Role::Client);
    }

    #[test]
    fn master_sees_every_company() {
        let ctx = TenantContext {
            user_id: Uuid::new_v4(),
            company_id: None,
            role: Role::MasterAdmin,
        };
        assert!(ctx.can_view_company(Uuid::new_v4()));
    }

    #[test]
    fn company_admin_sees_only_their_company() {
        let company_id = Uuid::new_v4();
        let ctx = TenantContext {
            user_id: Uuid::new_v4(),
            company_id: Some(company_id),
            role: Role::CompanyAdmin,
        };
        assert!(ctx.can_view_company(company_id));
        assert!(!ctx.can_view_company(Uuid::new_v4()));
    }

    #[test]
    fn homeless_user_sees_nothing() {
        let ctx = TenantContext {
            user_id: Uuid::new_v4(),
            company_id: None,
            role: Role::Client,
        };
        assert!(!ctx.can_view_company(Uuid::new_v4()));
    }
}
