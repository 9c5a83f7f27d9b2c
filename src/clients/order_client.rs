//! # Order Client
//!
//! Provides a high-level API for interacting with the `Order` actor. Tenant
//! validation, totals and publishing happen inside the actor; this type only
//! builds requests and maps errors.
use crate::model::{Order, OrderCreate, OrderId, OrderStatus, TenantId};
use crate::order_actor::{OrderAction, OrderActionResult, OrderError};
use actor_framework::{ActorClient, FrameworkError, ResourceClient};
use async_trait::async_trait;
use tracing::{debug, info, instrument};

/// Client for interacting with the Order actor.
#[derive(Clone)]
pub struct OrderClient {
    inner: ResourceClient<Order>,
}

impl OrderClient {
    pub fn new(inner: ResourceClient<Order>) -> Self {
        Self { inner }
    }

    #[instrument(skip(self, params), fields(tenant_id = %params.tenant_id))]
    pub async fn place_order(&self, params: OrderCreate) -> Result<Order, OrderError> {
        debug!(?params, "place_order called");
        let order = self.inner.create(params).await?;
        info!(order_id = %order.id, total = %order.total_amount, "Order placed");
        Ok(order)
    }

    #[instrument(skip(self))]
    pub async fn advance(
        &self,
        tenant_id: TenantId,
        id: OrderId,
        status: OrderStatus,
    ) -> Result<OrderActionResult, OrderError> {
        Ok(self
            .inner
            .perform_action(tenant_id, id, OrderAction::Advance(status))
            .await?)
    }

    #[instrument(skip(self))]
    pub async fn mark_paid(
        &self,
        tenant_id: TenantId,
        id: OrderId,
    ) -> Result<OrderActionResult, OrderError> {
        Ok(self
            .inner
            .perform_action(tenant_id, id, OrderAction::MarkPaid)
            .await?)
    }

    /// Every order of the tenant, in placement order.
    #[instrument(skip(self))]
    pub async fn orders(&self, tenant_id: TenantId) -> Result<Vec<Order>, OrderError> {
        Ok(self.inner.list(tenant_id).await?)
    }

    /// Like `get`, but an absent order is an error.
    #[instrument(skip(self))]
    pub async fn order(&self, tenant_id: TenantId, id: OrderId) -> Result<Order, OrderError> {
        self.inner
            .get(tenant_id, id)
            .await?
            .ok_or_else(|| OrderError::NotFound(id.to_string()))
    }
}

#[async_trait]
impl ActorClient<Order> for OrderClient {
    type Error = OrderError;

    fn inner(&self) -> &ResourceClient<Order> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        OrderError::from(e)
    }
}
