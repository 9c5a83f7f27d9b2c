//! # Order Lifecycle Engine
//!
//! The operations customers and staff perform on orders and service calls.
//! The engine resolves tenants, checks roles and hands the change to the
//! owning store actor; transition legality, totals and publishing live in the
//! actors themselves.
//!
//! | Operation | Who | Event |
//! |---|---|---|
//! | [`place_order`](LifecycleEngine::place_order) | customer | `NewOrder` |
//! | [`advance_status`](LifecycleEngine::advance_status) | OWNER, CHEF | `OrderUpdated` |
//! | [`mark_paid`](LifecycleEngine::mark_paid) | OWNER, WAITER | `OrderUpdated` if changed |
//! | [`request_service`](LifecycleEngine::request_service) | customer | `NewServiceCall` |
//! | [`resolve_service`](LifecycleEngine::resolve_service) | OWNER, WAITER | `ServiceResolved` if it was open |

pub mod error;

pub use error::EngineError;

use crate::clients::{OrderClient, ServiceCallClient, TenantClient};
use crate::gate::StaffSession;
use crate::model::{
    CallKind, LineItem, Order, OrderCreate, OrderId, OrderStatus, PaymentMethod, Role,
    ServiceCall, ServiceCallCreate, ServiceCallId, Table, Tenant,
};
use crate::realtime::{Router, Subscription};
use tracing::{debug, info, instrument};

/// A customer's order as submitted. There is no total: it is computed from
/// the line items.
#[derive(Debug, Clone)]
pub struct PlaceOrder {
    pub customer_name: String,
    pub table_number: String,
    pub line_items: Vec<LineItem>,
    pub payment_method: PaymentMethod,
}

#[derive(Clone)]
pub struct LifecycleEngine {
    tenants: TenantClient,
    orders: OrderClient,
    calls: ServiceCallClient,
    router: Router,
}

fn parse_table(raw: &str) -> Result<Table, EngineError> {
    Table::parse(raw).ok_or_else(|| EngineError::InvalidInput("table number must not be empty".into()))
}

impl LifecycleEngine {
    pub fn new(
        tenants: TenantClient,
        orders: OrderClient,
        calls: ServiceCallClient,
        router: Router,
    ) -> Self {
        Self {
            tenants,
            orders,
            calls,
            router,
        }
    }

    async fn tenant(&self, tenant_ref: &str) -> Result<Tenant, EngineError> {
        Ok(self.tenants.resolve(tenant_ref).await?)
    }

    /// Places a new order in PLACED / PENDING.
    #[instrument(skip(self, request), fields(table = %request.table_number))]
    pub async fn place_order(
        &self,
        tenant_ref: &str,
        request: PlaceOrder,
    ) -> Result<Order, EngineError> {
        let tenant = self.tenant(tenant_ref).await?;
        let table = parse_table(&request.table_number)?;
        let order = self
            .orders
            .place_order(OrderCreate {
                tenant_id: tenant.id,
                table,
                customer_name: request.customer_name,
                line_items: request.line_items,
                payment_method: request.payment_method,
            })
            .await?;
        Ok(order)
    }

    /// Moves an order forward in the kitchen.
    #[instrument(skip(self, session), fields(tenant_id = %session.tenant_id(), role = %session.role()))]
    pub async fn advance_status(
        &self,
        session: &StaffSession,
        order_id: OrderId,
        requested: OrderStatus,
    ) -> Result<Order, EngineError> {
        session.require(&[Role::Owner, Role::Chef], "advance orders")?;
        let result = self
            .orders
            .advance(session.tenant_id(), order_id, requested)
            .await?;
        info!(%order_id, status = %result.order.status, "Status advanced");
        Ok(result.order)
    }

    /// Records payment. Paying a READY order also serves it; paying twice is
    /// a silent success.
    #[instrument(skip(self, session), fields(tenant_id = %session.tenant_id(), role = %session.role()))]
    pub async fn mark_paid(
        &self,
        session: &StaffSession,
        order_id: OrderId,
    ) -> Result<Order, EngineError> {
        session.require(&[Role::Owner, Role::Waiter], "mark orders paid")?;
        let result = self.orders.mark_paid(session.tenant_id(), order_id).await?;
        if !result.changed {
            debug!(%order_id, "Already paid");
        }
        Ok(result.order)
    }

    /// Opens a service call for a dine-in table.
    #[instrument(skip(self))]
    pub async fn request_service(
        &self,
        tenant_ref: &str,
        table_number: &str,
        kind: CallKind,
    ) -> Result<ServiceCall, EngineError> {
        let tenant = self.tenant(tenant_ref).await?;
        let table = parse_table(table_number)?;
        if table.is_takeaway() {
            return Err(EngineError::InvalidInput(
                "takeaway orders cannot call for table service".into(),
            ));
        }
        let call = self
            .calls
            .request(ServiceCallCreate {
                tenant_id: tenant.id,
                table,
                kind,
            })
            .await?;
        info!(call_id = %call.id, table = %call.table, %kind, "Service requested");
        Ok(call)
    }

    /// Closes a service call. Resolving a call that is already gone (or is
    /// another tenant's) succeeds without publishing anything.
    #[instrument(skip(self, session), fields(tenant_id = %session.tenant_id(), role = %session.role()))]
    pub async fn resolve_service(
        &self,
        session: &StaffSession,
        call_id: ServiceCallId,
    ) -> Result<(), EngineError> {
        session.require(&[Role::Owner, Role::Waiter], "resolve service calls")?;
        match self.calls.resolve(session.tenant_id(), call_id).await? {
            Some(call) => info!(%call_id, table = %call.table, "Service resolved"),
            None => debug!(%call_id, "Nothing to resolve"),
        }
        Ok(())
    }

    /// All orders of the tenant, oldest first. Used by boards to catch up
    /// after (re)connecting.
    #[instrument(skip(self))]
    pub async fn list_orders(&self, tenant_ref: &str) -> Result<Vec<Order>, EngineError> {
        let tenant = self.tenant(tenant_ref).await?;
        Ok(self.orders.orders(tenant.id).await?)
    }

    /// Open service calls of the tenant, oldest first.
    #[instrument(skip(self))]
    pub async fn list_service_calls(
        &self,
        tenant_ref: &str,
    ) -> Result<Vec<ServiceCall>, EngineError> {
        let tenant = self.tenant(tenant_ref).await?;
        Ok(self.calls.open_calls(tenant.id).await?)
    }

    /// One order, for the customer's tracking page.
    #[instrument(skip(self))]
    pub async fn get_order(&self, tenant_ref: &str, order_id: OrderId) -> Result<Order, EngineError> {
        let tenant = self.tenant(tenant_ref).await?;
        Ok(self.orders.order(tenant.id, order_id).await?)
    }

    /// Opens a realtime connection on the tenant's channel.
    #[instrument(skip(self))]
    pub async fn subscribe(&self, tenant_ref: &str) -> Result<Subscription, EngineError> {
        let tenant = self.tenant(tenant_ref).await?;
        Ok(self.router.subscribe(tenant.id))
    }
}
