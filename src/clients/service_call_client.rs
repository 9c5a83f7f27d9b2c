//! # Service Call Client
use crate::model::{ServiceCall, ServiceCallCreate, ServiceCallId, TenantId};
use crate::service_actor::ServiceCallError;
use actor_framework::{ActorClient, FrameworkError, ResourceClient};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for interacting with the ServiceCall actor.
#[derive(Clone)]
pub struct ServiceCallClient {
    inner: ResourceClient<ServiceCall>,
}

impl ServiceCallClient {
    pub fn new(inner: ResourceClient<ServiceCall>) -> Self {
        Self { inner }
    }

    #[instrument(skip(self))]
    pub async fn request(&self, params: ServiceCallCreate) -> Result<ServiceCall, ServiceCallError> {
        debug!("Sending request");
        Ok(self.inner.create(params).await?)
    }

    /// Deletes the call. `None` means it was already resolved, never existed
    /// or belongs to another tenant.
    #[instrument(skip(self))]
    pub async fn resolve(
        &self,
        tenant_id: TenantId,
        id: ServiceCallId,
    ) -> Result<Option<ServiceCall>, ServiceCallError> {
        Ok(self.inner.delete(tenant_id, id).await?)
    }

    /// Open calls of the tenant, in request order.
    #[instrument(skip(self))]
    pub async fn open_calls(&self, tenant_id: TenantId) -> Result<Vec<ServiceCall>, ServiceCallError> {
        Ok(self.inner.list(tenant_id).await?)
    }
}

#[async_trait]
impl ActorClient<ServiceCall> for ServiceCallClient {
    type Error = ServiceCallError;

    fn inner(&self) -> &ResourceClient<ServiceCall> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        ServiceCallError::from(e)
    }
}
