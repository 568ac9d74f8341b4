use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Claims the identity provider attaches to a verified token.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct IdentityClaims {
    #[serde(default)]
    pub admin: Option<bool>,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
}

/// The caller of a request, resolved from its bearer token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Identity {
    pub uid: String,
    pub claims: IdentityClaims,
}

impl Identity {
    pub fn new(uid: impl Into<String>, claims: IdentityClaims) -> Self {
        Self {
            uid: uid.into(),
            claims,
        }
    }

    /// Admins carry either `admin: true` or `role: "admin"`.
    pub fn is_admin(&self) -> bool {
        self.claims.admin == Some(true) || self.claims.role.as_deref() == Some("admin")
    }
}
