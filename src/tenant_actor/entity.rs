//! [`ActorEntity`] implementation for [`Tenant`].
//!
//! A tenant is its own scope, so `get(id, id)` is the only way to read one by
//! id; handle lookups go through the unscoped `find`.

use crate::model::{normalize_handle, Tenant, TenantCreate, TenantId, TenantUpdate};
use crate::tenant_actor::{TenantAction, TenantError};
use actor_framework::ActorEntity;
use async_trait::async_trait;
use chrono::Utc;

#[async_trait]
impl ActorEntity for Tenant {
    type Id = TenantId;
    type Scope = TenantId;
    type Create = TenantCreate;
    type Update = TenantUpdate;
    type Action = TenantAction;
    type ActionResult = ();
    type Context = ();
    type Error = TenantError;

    fn from_create_params(id: TenantId, params: TenantCreate) -> Result<Self, Self::Error> {
        let handle = normalize_handle(&params.handle)
            .ok_or_else(|| TenantError::InvalidHandle(params.handle.clone()))?;
        let display_name = params.display_name.trim();
        if display_name.is_empty() {
            return Err(TenantError::ValidationError(
                "display name must not be empty".into(),
            ));
        }

        Ok(Self {
            id,
            handle,
            display_name: display_name.to_string(),
            secrets: params.secrets,
            created_at: Utc::now(),
        })
    }

    fn scope(&self) -> &TenantId {
        &self.id
    }

    /// Handles are unique across the whole directory.
    fn unique_key(&self) -> Option<String> {
        Some(self.handle.clone())
    }

    async fn on_update(&mut self, update: TenantUpdate, _ctx: &()) -> Result<(), Self::Error> {
        match update {
            TenantUpdate::RotateSecret { role, hash } => self.secrets.set(role, hash),
        }
        Ok(())
    }

    async fn handle_action(&mut self, action: TenantAction, _ctx: &()) -> Result<(), Self::Error> {
        match action {}
    }
}
