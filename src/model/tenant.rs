use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

uuid_id! {
    /// Identifier of a [`Tenant`] (one restaurant).
    TenantId
}

/// Staff role. Each tenant holds one shared secret per role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    Owner,
    Chef,
    Waiter,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Role::Owner => "OWNER",
            Role::Chef => "CHEF",
            Role::Waiter => "WAITER",
        })
    }
}

/// Argon2 PHC strings, one per role. Never serialized.
#[derive(Clone, PartialEq, Eq)]
pub struct RoleSecrets {
    pub owner: String,
    pub chef: String,
    pub waiter: String,
}

impl RoleSecrets {
    pub fn for_role(&self, role: Role) -> &str {
        match role {
            Role::Owner => &self.owner,
            Role::Chef => &self.chef,
            Role::Waiter => &self.waiter,
        }
    }

    pub fn set(&mut self, role: Role, hash: String) {
        match role {
            Role::Owner => self.owner = hash,
            Role::Chef => self.chef = hash,
            Role::Waiter => self.waiter = hash,
        }
    }
}

impl fmt::Debug for RoleSecrets {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("RoleSecrets(***)")
    }
}

/// A restaurant account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Tenant {
    pub id: TenantId,
    /// Lower-case slug, unique across the directory.
    pub handle: String,
    pub display_name: String,
    #[serde(skip)]
    pub secrets: RoleSecrets,
    pub created_at: DateTime<Utc>,
}

/// Payload for registering a tenant. Secrets arrive already hashed.
#[derive(Debug, Clone)]
pub struct TenantCreate {
    pub handle: String,
    pub display_name: String,
    pub secrets: RoleSecrets,
}

/// Changes the directory accepts for an existing tenant.
#[derive(Clone)]
pub enum TenantUpdate {
    /// Replace one role's hash.
    RotateSecret { role: Role, hash: String },
}

impl fmt::Debug for TenantUpdate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TenantUpdate::RotateSecret { role, .. } => {
                f.debug_struct("RotateSecret").field("role", role).finish_non_exhaustive()
            }
        }
    }
}

/// Normalizes a handle: trimmed, lower-cased, `[a-z0-9-]` only.
///
/// Anything that parses as a uuid is refused: tenant references are read as
/// ids first, so such a handle could never be resolved.
pub fn normalize_handle(raw: &str) -> Option<String> {
    let handle = raw.trim().to_ascii_lowercase();
    let valid = !handle.is_empty()
        && handle
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
        && uuid::Uuid::parse_str(&handle).is_err();
    valid.then_some(handle)
}
