//! Best-effort push notification when a new order arrives.
//!
//! The order actor hands each new order to a [`Notifier`], which runs the sink
//! on its own task under a timeout. Nothing waits for it and nothing it does
//! can fail order placement.

use crate::model::{OrderSummary, TenantId};
use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, warn};

#[derive(Debug, thiserror::Error)]
pub enum NotifyError {
    #[error("Notification delivery failed: {0}")]
    Delivery(String),
}

/// Something that can tell restaurant staff about a new order.
#[async_trait]
pub trait NotificationSink: Send + Sync + 'static {
    async fn notify_new_order(
        &self,
        tenant_id: TenantId,
        summary: OrderSummary,
    ) -> Result<(), NotifyError>;
}

/// Default sink: writes the summary to the log.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

#[async_trait]
impl NotificationSink for TracingSink {
    async fn notify_new_order(
        &self,
        tenant_id: TenantId,
        summary: OrderSummary,
    ) -> Result<(), NotifyError> {
        info!(
            %tenant_id,
            order_id = %summary.order_id,
            table = %summary.table_number,
            items = summary.item_count,
            total = %summary.total_amount,
            "New order"
        );
        Ok(())
    }
}

/// Fire-and-forget dispatcher around a [`NotificationSink`].
#[derive(Clone)]
pub struct Notifier {
    sink: Arc<dyn NotificationSink>,
    timeout: Duration,
}

impl Notifier {
    pub fn new(sink: Arc<dyn NotificationSink>, timeout: Duration) -> Self {
        Self { sink, timeout }
    }

    /// Spawns the notification and returns immediately.
    ///
    /// Must be called from inside a Tokio runtime. Errors and timeouts are
    /// logged and dropped.
    pub fn dispatch(&self, tenant_id: TenantId, summary: OrderSummary) -> tokio::task::JoinHandle<()> {
        let sink = Arc::clone(&self.sink);
        let timeout = self.timeout;
        let order_id = summary.order_id;

        tokio::spawn(async move {
            match tokio::time::timeout(timeout, sink.notify_new_order(tenant_id, summary)).await {
                Ok(Ok(())) => debug!(%tenant_id, %order_id, "Notification sent"),
                Ok(Err(e)) => warn!(%tenant_id, %order_id, error = %e, "Notification failed"),
                Err(_) => warn!(
                    %tenant_id,
                    %order_id,
                    timeout_ms = timeout.as_millis() as u64,
                    "Notification timed out"
                ),
            }
        })
    }
}

impl Default for Notifier {
    fn default() -> Self {
        Self::new(Arc::new(TracingSink), Duration::from_secs(3))
    }
}
