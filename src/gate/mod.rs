//! # Role Session Gate
//!
//! Staff prove a role by presenting that role's shared password for one
//! tenant. A correct password yields a [`StaffSession`], the capability every
//! staff operation takes. Sessions cannot be built outside this crate, so
//! holding one means the gate checked the password.

pub mod secret;

use crate::clients::TenantClient;
use crate::engine::EngineError;
use crate::model::{Role, TenantId};
use secret::{hash_blocking, verify_blocking};
use tracing::{info, instrument, warn};

/// Proof that the holder passed the gate for one tenant and one role.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaffSession {
    tenant_id: TenantId,
    role: Role,
}

impl StaffSession {
    pub(crate) fn issue(tenant_id: TenantId, role: Role) -> Self {
        Self { tenant_id, role }
    }

    pub fn tenant_id(&self) -> TenantId {
        self.tenant_id
    }

    pub fn role(&self) -> Role {
        self.role
    }

    /// `Forbidden` unless the session's role is one of `allowed`.
    pub fn require(&self, allowed: &[Role], operation: &'static str) -> Result<(), EngineError> {
        if allowed.contains(&self.role) {
            Ok(())
        } else {
            warn!(tenant_id = %self.tenant_id, role = %self.role, operation, "Role rejected");
            Err(EngineError::Forbidden {
                role: self.role,
                operation,
            })
        }
    }
}

/// Verifies role passwords and rotates them.
#[derive(Clone)]
pub struct RoleGate {
    tenants: TenantClient,
}

impl RoleGate {
    pub fn new(tenants: TenantClient) -> Self {
        Self { tenants }
    }

    /// Checks `password` against the tenant's secret for `role`.
    ///
    /// `UnknownTenant` if `tenant_ref` (uuid or handle) resolves to nothing;
    /// `Forbidden` for a wrong password.
    #[instrument(skip(self, password))]
    pub async fn verify_role(
        &self,
        tenant_ref: &str,
        role: Role,
        password: &str,
    ) -> Result<StaffSession, EngineError> {
        let tenant = self.tenants.resolve(tenant_ref).await?;
        let hash = tenant.secrets.for_role(role).to_string();

        let ok = verify_blocking(password.to_string(), hash)
            .await
            .map_err(|e| EngineError::Transient(e.to_string()))?;
        if !ok {
            warn!(tenant_id = %tenant.id, %role, "Wrong role password");
            return Err(EngineError::Forbidden {
                role,
                operation: "sign in",
            });
        }

        info!(tenant_id = %tenant.id, %role, "Session issued");
        Ok(StaffSession::issue(tenant.id, role))
    }

    /// Replaces the secret of `role` for the session's tenant. Owner only.
    #[instrument(skip(self, session, new_password), fields(tenant_id = %session.tenant_id()))]
    pub async fn rotate_secret(
        &self,
        session: &StaffSession,
        role: Role,
        new_password: &str,
    ) -> Result<(), EngineError> {
        session.require(&[Role::Owner], "rotate role secrets")?;
        let hash = hash_blocking(new_password.to_string())
            .await
            .map_err(crate::tenant_actor::TenantError::from)?;
        self.tenants
            .set_secret(session.tenant_id(), role, hash)
            .await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn require_checks_membership() {
        let chef = StaffSession::issue(TenantId::new(), Role::Chef);
        assert!(chef.require(&[Role::Owner, Role::Chef], "advance orders").is_ok());
        assert_eq!(
            chef.require(&[Role::Owner, Role::Waiter], "mark orders paid"),
            Err(EngineError::Forbidden {
                role: Role::Chef,
                operation: "mark orders paid",
            })
        );
    }
}
