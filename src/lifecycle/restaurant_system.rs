use crate::clients::{MenuClient, OrderClient, ServiceCallClient, TenantClient};
use crate::config::Config;
use crate::engine::LifecycleEngine;
use crate::gate::RoleGate;
use crate::menu::MenuService;
use crate::notify::{NotificationSink, Notifier, TracingSink};
use crate::order_actor::OrderContext;
use crate::realtime::Router;
use crate::service_actor::ServiceCallContext;
use std::sync::Arc;
use tracing::{error, info};

/// The running restaurant backend: every store actor, wired and spawned.
///
/// # Architecture
///
/// - **Tenant actor**: directory of restaurants and their role secrets
/// - **Menu actor**: dishes per tenant
/// - **Order actor**: orders; checks tenants, publishes, notifies
/// - **Service call actor**: open table-service calls; checks tenants, publishes
///
/// The order and service call actors get the tenant client and the shared
/// [`Router`] as their context. Callers use the facades in the public fields.
///
/// # Example
///
/// ```no_run
/// # async fn demo() -> Result<(), Box<dyn std::error::Error>> {
/// use tableside::config::Config;
/// use tableside::gate::secret::RolePasswords;
/// use tableside::lifecycle::RestaurantSystem;
///
/// let system = RestaurantSystem::new(Config::from_env());
/// system
///     .directory
///     .register("spice-route", "Spice Route", RolePasswords::new("o", "c", "w"))
///     .await?;
/// let mut board = system.engine.subscribe("spice-route").await?;
/// // ... place orders, advance them; `board` receives each change ...
/// # let _ = board.try_recv();
/// system.shutdown().await?;
/// # Ok(())
/// # }
/// ```
pub struct RestaurantSystem {
    pub engine: LifecycleEngine,
    pub gate: RoleGate,
    /// Tenant registration and lookup.
    pub directory: TenantClient,
    pub menu: MenuService,
    pub router: Router,

    /// Actor tasks, tenant actor last: the others hold tenant clients.
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl RestaurantSystem {
    /// Starts the system with the default [`TracingSink`] for notifications.
    pub fn new(config: Config) -> Self {
        Self::with_sink(config, Arc::new(TracingSink))
    }

    /// Starts the system with a custom notification sink.
    ///
    /// Must be called from inside a Tokio runtime.
    pub fn with_sink(config: Config, sink: Arc<dyn NotificationSink>) -> Self {
        info!(?config, "Starting restaurant system");

        // 1. Create actors (no dependencies yet)
        let (tenant_actor, tenant_inner) = crate::tenant_actor::new(config.actor_buffer);
        let (menu_actor, menu_inner) = crate::menu_actor::new(config.actor_buffer);
        let (order_actor, order_inner) = crate::order_actor::new(config.actor_buffer);
        let (call_actor, call_inner) = crate::service_actor::new(config.actor_buffer);

        let tenants = TenantClient::new(tenant_inner);
        let router = Router::new(config.subscriber_queue);
        let notifier = Notifier::new(sink, config.notify_timeout);

        // 2. Start actors with injected context
        let order_handle = tokio::spawn(order_actor.run(OrderContext {
            tenants: tenants.clone(),
            router: router.clone(),
            notifier,
        }));
        let call_handle = tokio::spawn(call_actor.run(ServiceCallContext {
            tenants: tenants.clone(),
            router: router.clone(),
        }));
        let menu_handle = tokio::spawn(menu_actor.run(()));
        let tenant_handle = tokio::spawn(tenant_actor.run(()));

        // 3. Facades
        let engine = LifecycleEngine::new(
            tenants.clone(),
            OrderClient::new(order_inner),
            ServiceCallClient::new(call_inner),
            router.clone(),
        );
        let gate = RoleGate::new(tenants.clone());
        let menu = MenuService::new(tenants.clone(), MenuClient::new(menu_inner));

        Self {
            engine,
            gate,
            directory: tenants,
            menu,
            router,
            handles: vec![order_handle, call_handle, menu_handle, tenant_handle],
        }
    }

    /// Gracefully shuts down every actor.
    ///
    /// Dropping the facades closes the request channels; each actor drains
    /// what it already received and exits. Errors if an actor task panicked.
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down restaurant system...");

        drop(self.engine);
        drop(self.gate);
        drop(self.menu);
        drop(self.directory);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Actor task failed: {:?}", e);
                return Err(format!("Actor task failed: {:?}", e));
            }
        }

        info!("System shutdown complete.");
        Ok(())
    }
}
