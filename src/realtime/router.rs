//! Realtime fan-out router.
//!
//! ```text
//! order / service-call actor (on_commit)
//!        │ publish(tenant, event)
//!        ▼
//!   Router ── tenants: TenantId → [connection queues]
//!        ├── mpsc ──► staff board #1   (try_send, full ⇒ dropped)
//!        ├── mpsc ──► staff board #2
//!        └── mpsc ──► customer tracker
//! ```
//!
//! Every connection is bound to exactly one tenant when it subscribes, and
//! events are only ever pushed into that tenant's list, so a board cannot
//! receive another restaurant's orders.

use crate::model::TenantId;
use crate::realtime::LifecycleEvent;
use dashmap::DashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Weak};
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// Identifies one connection. Returned by [`Router::subscribe`] and accepted
/// by [`Router::unsubscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionHandle {
    tenant_id: TenantId,
    connection: u64,
}

impl SubscriptionHandle {
    pub fn tenant_id(&self) -> TenantId {
        self.tenant_id
    }
}

/// The receiving end of one connection.
///
/// Dropping it removes the connection from the router.
#[derive(Debug)]
pub struct Subscription {
    handle: SubscriptionHandle,
    events: mpsc::Receiver<Arc<LifecycleEvent>>,
    tenants: Weak<Connections>,
}

impl Subscription {
    pub fn handle(&self) -> SubscriptionHandle {
        self.handle
    }

    pub fn tenant_id(&self) -> TenantId {
        self.handle.tenant_id
    }

    /// Next event, or `None` once the router dropped this connection and the
    /// queue is drained.
    pub async fn recv(&mut self) -> Option<Arc<LifecycleEvent>> {
        self.events.recv().await
    }

    pub fn try_recv(&mut self) -> Option<Arc<LifecycleEvent>> {
        self.events.try_recv().ok()
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(tenants) = self.tenants.upgrade() {
            if remove_connection(&tenants, self.handle) {
                debug!(
                    tenant_id = %self.handle.tenant_id,
                    connection = self.handle.connection,
                    "Subscription dropped"
                );
            }
        }
    }
}

struct Connection {
    id: u64,
    tx: mpsc::Sender<Arc<LifecycleEvent>>,
}

type Connections = DashMap<TenantId, Vec<Connection>>;

/// Removes one connection, and the tenant's entry once it is empty. Returns
/// whether the connection was still there.
fn remove_connection(tenants: &Connections, handle: SubscriptionHandle) -> bool {
    let removed = tenants
        .get_mut(&handle.tenant_id)
        .map(|mut connections| {
            let before = connections.len();
            connections.retain(|c| c.id != handle.connection);
            before != connections.len()
        })
        .unwrap_or(false);
    if removed {
        tenants.remove_if(&handle.tenant_id, |_, connections| connections.is_empty());
    }
    removed
}

/// Tenant-partitioned broadcast of lifecycle events.
///
/// Cheap to clone; clones share the same subscriber table.
#[derive(Clone)]
pub struct Router {
    tenants: Arc<Connections>,
    next_connection: Arc<AtomicU64>,
    queue_capacity: usize,
}

impl Router {
    /// `queue_capacity` bounds each connection's pending events.
    pub fn new(queue_capacity: usize) -> Self {
        Self {
            tenants: Arc::new(DashMap::new()),
            next_connection: Arc::new(AtomicU64::new(1)),
            queue_capacity: queue_capacity.max(1),
        }
    }

    pub fn subscribe(&self, tenant_id: TenantId) -> Subscription {
        let (tx, events) = mpsc::channel(self.queue_capacity);
        let connection = self.next_connection.fetch_add(1, Ordering::Relaxed);
        self.tenants
            .entry(tenant_id)
            .or_default()
            .push(Connection { id: connection, tx });
        info!(%tenant_id, connection, "Subscribed");

        Subscription {
            handle: SubscriptionHandle {
                tenant_id,
                connection,
            },
            events,
            tenants: Arc::downgrade(&self.tenants),
        }
    }

    /// Removes the connection. Unknown or already removed handles are ignored.
    pub fn unsubscribe(&self, handle: SubscriptionHandle) {
        if remove_connection(&self.tenants, handle) {
            info!(tenant_id = %handle.tenant_id, connection = handle.connection, "Unsubscribed");
        }
    }

    /// Delivers `event` to every live connection of `tenant_id` and returns how
    /// many accepted it.
    ///
    /// Never blocks. A connection whose queue is full or closed is removed.
    /// The tenant's entry stays locked for the whole fan-out, so two publishes
    /// for one tenant reach every connection in the same order.
    pub fn publish(&self, tenant_id: TenantId, event: LifecycleEvent) -> usize {
        let event = Arc::new(event);
        let kind = event.kind();
        let Some(mut connections) = self.tenants.get_mut(&tenant_id) else {
            debug!(%tenant_id, kind, "No subscribers");
            return 0;
        };

        let mut delivered = 0;
        connections.retain(|connection| match connection.tx.try_send(Arc::clone(&event)) {
            Ok(()) => {
                delivered += 1;
                true
            }
            Err(mpsc::error::TrySendError::Full(_)) => {
                warn!(
                    %tenant_id,
                    connection = connection.id,
                    kind,
                    "Subscriber queue full, dropping subscriber"
                );
                false
            }
            Err(mpsc::error::TrySendError::Closed(_)) => {
                debug!(%tenant_id, connection = connection.id, "Subscriber gone");
                false
            }
        });
        let empty = connections.is_empty();
        drop(connections);

        if empty {
            self.tenants
                .remove_if(&tenant_id, |_, connections| connections.is_empty());
        }
        debug!(%tenant_id, kind, delivered, "Published");
        delivered
    }

    pub fn subscriber_count(&self, tenant_id: TenantId) -> usize {
        self.tenants
            .get(&tenant_id)
            .map(|connections| connections.len())
            .unwrap_or(0)
    }
}
