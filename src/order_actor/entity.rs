//! [`ActorEntity`] implementation for [`Order`].
//!
//! Creation validates the payload, computes the total and checks the tenant
//! exists. After every committed change the order is published to the
//! tenant's realtime channel; a new order also triggers a notification.

use crate::model::{
    total_of, Order, OrderCreate, OrderId, OrderStatus, OrderSummary, PaymentStatus, TenantId,
};
use crate::order_actor::{OrderAction, OrderActionResult, OrderContext, OrderError};
use crate::realtime::LifecycleEvent;
use actor_framework::{ActorClient, ActorEntity, Commit};
use async_trait::async_trait;
use chrono::Utc;
use tracing::{debug, info};

#[async_trait]
impl ActorEntity for Order {
    type Id = OrderId;
    type Scope = TenantId;
    type Create = OrderCreate;
    type Update = ();
    type Action = OrderAction;
    type ActionResult = OrderActionResult;
    type Context = OrderContext;
    type Error = OrderError;

    fn from_create_params(id: OrderId, params: OrderCreate) -> Result<Self, Self::Error> {
        let customer_name = params.customer_name.trim();
        if customer_name.is_empty() {
            return Err(OrderError::ValidationError(
                "customer name must not be empty".into(),
            ));
        }
        let total_amount =
            total_of(&params.line_items).map_err(|e| OrderError::ValidationError(e.to_string()))?;

        let now = Utc::now();
        Ok(Self {
            id,
            tenant_id: params.tenant_id,
            table: params.table,
            customer_name: customer_name.to_string(),
            line_items: params.line_items,
            total_amount,
            payment_method: params.payment_method,
            payment_status: PaymentStatus::Pending,
            status: OrderStatus::Placed,
            created_at: now,
            updated_at: now,
        })
    }

    fn scope(&self) -> &TenantId {
        &self.tenant_id
    }

    /// Rejects orders for tenants the directory does not know.
    async fn on_create(&mut self, ctx: &OrderContext) -> Result<(), Self::Error> {
        debug!(tenant_id = %self.tenant_id, "Validating tenant");
        let tenant = ctx
            .tenants
            .get(self.tenant_id, self.tenant_id)
            .await
            .map_err(|e| OrderError::ActorCommunicationError(e.to_string()))?;
        if tenant.is_none() {
            return Err(OrderError::UnknownTenant(self.tenant_id.to_string()));
        }
        Ok(())
    }

    /// Line items, totals and customer details are fixed at creation.
    async fn on_update(&mut self, _update: (), _ctx: &OrderContext) -> Result<(), Self::Error> {
        Err(OrderError::ValidationError(
            "orders change only through status and payment actions".into(),
        ))
    }

    async fn handle_action(
        &mut self,
        action: OrderAction,
        _ctx: &OrderContext,
    ) -> Result<OrderActionResult, Self::Error> {
        let changed = match action {
            OrderAction::Advance(requested) => {
                if !self.status.can_advance_to(requested) {
                    return Err(OrderError::IllegalTransition {
                        current: self.status,
                        requested,
                    });
                }
                self.status = requested;
                true
            }
            OrderAction::MarkPaid => {
                if self.payment_status == PaymentStatus::Paid {
                    false
                } else {
                    self.payment_status = PaymentStatus::Paid;
                    if self.status == OrderStatus::Ready {
                        self.status = OrderStatus::Served;
                    }
                    true
                }
            }
        };

        if changed {
            self.updated_at = Utc::now();
        }
        Ok(OrderActionResult {
            order: self.clone(),
            changed,
        })
    }

    fn on_commit(&self, commit: Commit<'_, Self>, ctx: &OrderContext) {
        match commit {
            Commit::Created => {
                ctx.router
                    .publish(self.tenant_id, LifecycleEvent::NewOrder(self.clone()));
                ctx.notifier
                    .dispatch(self.tenant_id, OrderSummary::from(self));
            }
            Commit::Acted(result) if result.changed => {
                info!(
                    order_id = %self.id,
                    status = %self.status,
                    payment = %self.payment_status,
                    "Order changed"
                );
                ctx.router
                    .publish(self.tenant_id, LifecycleEvent::OrderUpdated(self.clone()));
            }
            Commit::Acted(_) | Commit::Updated | Commit::Deleted => {}
        }
    }
}
