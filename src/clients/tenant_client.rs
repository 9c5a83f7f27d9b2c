//! # Tenant Client
//!
//! The tenant directory API: register, resolve by id or handle, rotate a
//! role's secret.
use crate::gate::secret::{hash_blocking, RolePasswords};
use crate::model::{normalize_handle, Role, RoleSecrets, Tenant, TenantCreate, TenantId, TenantUpdate};
use crate::tenant_actor::TenantError;
use actor_framework::{ActorClient, FrameworkError, ResourceClient};
use async_trait::async_trait;
use tracing::{debug, info, instrument};

/// Client for interacting with the Tenant actor.
#[derive(Clone)]
pub struct TenantClient {
    inner: ResourceClient<Tenant>,
}

impl TenantClient {
    pub fn new(inner: ResourceClient<Tenant>) -> Self {
        Self { inner }
    }

    /// Hashes the three role passwords and stores the new tenant.
    ///
    /// The handle is normalized to lower case; a taken handle fails with
    /// `HandleTaken`.
    #[instrument(skip(self, passwords))]
    pub async fn register(
        &self,
        handle: &str,
        display_name: &str,
        passwords: RolePasswords,
    ) -> Result<Tenant, TenantError> {
        // Reject a bad handle before paying for three hashes.
        if normalize_handle(handle).is_none() {
            return Err(TenantError::InvalidHandle(handle.to_string()));
        }
        let (owner, chef, waiter) = tokio::try_join!(
            hash_blocking(passwords.owner),
            hash_blocking(passwords.chef),
            hash_blocking(passwords.waiter),
        )?;

        let tenant = self
            .inner
            .create(TenantCreate {
                handle: handle.to_string(),
                display_name: display_name.to_string(),
                secrets: RoleSecrets {
                    owner,
                    chef,
                    waiter,
                },
            })
            .await?;
        info!(tenant_id = %tenant.id, handle = %tenant.handle, "Tenant registered");
        Ok(tenant)
    }

    /// Looks a tenant up by uuid or by handle (case-insensitive).
    #[instrument(skip(self))]
    pub async fn resolve(&self, identifier: &str) -> Result<Tenant, TenantError> {
        let identifier = identifier.trim();
        let found = match identifier.parse::<TenantId>() {
            Ok(id) => self.inner.get(id, id).await?,
            Err(_) => {
                let handle = identifier.to_ascii_lowercase();
                debug!(%handle, "Resolving by handle");
                self.inner
                    .find(move |tenant: &Tenant| tenant.handle == handle)
                    .await?
                    .into_iter()
                    .next()
            }
        };
        found.ok_or_else(|| TenantError::NotFound(identifier.to_string()))
    }

    /// Replaces one role's stored hash.
    #[instrument(skip(self, hash))]
    pub async fn set_secret(
        &self,
        tenant_id: TenantId,
        role: Role,
        hash: String,
    ) -> Result<Tenant, TenantError> {
        let tenant = self
            .inner
            .update(tenant_id, tenant_id, TenantUpdate::RotateSecret { role, hash })
            .await?;
        info!(%tenant_id, %role, "Secret rotated");
        Ok(tenant)
    }
}

#[async_trait]
impl ActorClient<Tenant> for TenantClient {
    type Error = TenantError;

    fn inner(&self) -> &ResourceClient<Tenant> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        TenantError::from(e)
    }
}
