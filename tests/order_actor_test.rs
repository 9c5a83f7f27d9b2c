use actor_framework::mock::MockClient;
use async_trait::async_trait;
use chrono::Utc;
use std::sync::Arc;
use std::time::Duration;
use tableside::clients::{OrderClient, TenantClient};
use tableside::model::{
    LineItem, Money, OrderCreate, OrderStatus, OrderSummary, PaymentMethod, PaymentStatus,
    RoleSecrets, Table, Tenant, TenantId,
};
use tableside::notify::{NotificationSink, Notifier, NotifyError};
use tableside::order_actor::{OrderContext, OrderError};
use tableside::realtime::{LifecycleEvent, Router};
use tokio::sync::mpsc;

/// Forwards every notification to the test.
struct ChannelSink(mpsc::UnboundedSender<(TenantId, OrderSummary)>);

#[async_trait]
impl NotificationSink for ChannelSink {
    async fn notify_new_order(
        &self,
        tenant_id: TenantId,
        summary: OrderSummary,
    ) -> Result<(), NotifyError> {
        let _ = self.0.send((tenant_id, summary));
        Ok(())
    }
}

fn tenant(id: TenantId) -> Tenant {
    Tenant {
        id,
        handle: "spice-route".into(),
        display_name: "Spice Route".into(),
        secrets: RoleSecrets {
            owner: String::new(),
            chef: String::new(),
            waiter: String::new(),
        },
        created_at: Utc::now(),
    }
}

fn lunch(tenant_id: TenantId) -> OrderCreate {
    OrderCreate {
        tenant_id,
        table: Table::Dine("4".into()),
        customer_name: "Asha".into(),
        line_items: vec![
            LineItem::new("Paneer Tikka", Money::from_minor(25_000), 1),
            LineItem::new("Masala Chai", Money::from_minor(4_000), 2),
        ],
        payment_method: PaymentMethod::Cash,
    }
}

/// Real Order actor with a mocked tenant directory.
///
/// - Real Order actor (validation, transitions, publishing)
/// - Mocked tenant client (isolates the directory)
#[tokio::test]
async fn order_actor_publishes_and_notifies_with_mocked_directory() {
    let tenant_id = TenantId::new();
    let mut tenant_mock = MockClient::<Tenant>::new();
    tenant_mock.expect_get(tenant_id).return_ok(Some(tenant(tenant_id)));

    let (tx, mut notifications) = mpsc::unbounded_channel();
    let router = Router::new(16);
    let mut board = router.subscribe(tenant_id);

    let (order_actor, order_generic_client) = tableside::order_actor::new(16);
    let orders = OrderClient::new(order_generic_client);
    let actor_handle = tokio::spawn(order_actor.run(OrderContext {
        tenants: TenantClient::new(tenant_mock.client()),
        router: router.clone(),
        notifier: Notifier::new(Arc::new(ChannelSink(tx)), Duration::from_secs(1)),
    }));

    let order = orders.place_order(lunch(tenant_id)).await.unwrap();
    assert_eq!(order.total_amount, Money::from_minor(33_000));
    assert_eq!(order.status, OrderStatus::Placed);
    assert_eq!(order.payment_status, PaymentStatus::Pending);

    match board.recv().await.as_deref() {
        Some(LifecycleEvent::NewOrder(published)) => assert_eq!(published, &order),
        other => panic!("expected NewOrder, got {other:?}"),
    }

    let (notified_tenant, summary) = tokio::time::timeout(Duration::from_secs(1), notifications.recv())
        .await
        .unwrap()
        .unwrap();
    assert_eq!(notified_tenant, tenant_id);
    assert_eq!(summary.order_id, order.id);
    assert_eq!(summary.item_count, 3);
    assert_eq!(summary.total_amount, Money::from_minor(33_000));

    let cooking = orders
        .advance(tenant_id, order.id, OrderStatus::Cooking)
        .await
        .unwrap();
    assert!(cooking.changed);
    match board.recv().await.as_deref() {
        Some(LifecycleEvent::OrderUpdated(o)) => assert_eq!(o.status, OrderStatus::Cooking),
        other => panic!("expected OrderUpdated, got {other:?}"),
    }

    tenant_mock.verify();

    drop(orders);
    actor_handle.await.unwrap();
}

#[tokio::test]
async fn order_for_unknown_tenant_is_rejected_without_side_effects() {
    let tenant_id = TenantId::new();
    let mut tenant_mock = MockClient::<Tenant>::new();
    tenant_mock.expect_get(tenant_id).return_ok(None);

    let (tx, mut notifications) = mpsc::unbounded_channel();
    let router = Router::new(16);
    let mut board = router.subscribe(tenant_id);

    let (order_actor, order_generic_client) = tableside::order_actor::new(16);
    let orders = OrderClient::new(order_generic_client);
    let actor_handle = tokio::spawn(order_actor.run(OrderContext {
        tenants: TenantClient::new(tenant_mock.client()),
        router,
        notifier: Notifier::new(Arc::new(ChannelSink(tx)), Duration::from_secs(1)),
    }));

    let err = orders.place_order(lunch(tenant_id)).await.unwrap_err();
    assert_eq!(err, OrderError::UnknownTenant(tenant_id.to_string()));
    assert!(orders.orders(tenant_id).await.unwrap().is_empty());
    assert!(board.try_recv().is_none());

    tenant_mock.verify();
    drop(orders);
    actor_handle.await.unwrap();
    // The actor held the only notifier; nothing was ever sent.
    assert!(notifications.recv().await.is_none());
}

#[tokio::test]
async fn invalid_orders_never_reach_the_directory() {
    // No expectations: any call to the directory would fail the test.
    let tenant_mock = MockClient::<Tenant>::new();
    let (order_actor, order_generic_client) = tableside::order_actor::new(16);
    let orders = OrderClient::new(order_generic_client);
    let actor_handle = tokio::spawn(order_actor.run(OrderContext {
        tenants: TenantClient::new(tenant_mock.client()),
        router: Router::new(16),
        notifier: Notifier::default(),
    }));

    let tenant_id = TenantId::new();
    let mut empty = lunch(tenant_id);
    empty.line_items.clear();
    assert!(matches!(
        orders.place_order(empty).await,
        Err(OrderError::ValidationError(_))
    ));

    let mut zero = lunch(tenant_id);
    zero.line_items[0].quantity = 0;
    assert!(matches!(
        orders.place_order(zero).await,
        Err(OrderError::ValidationError(_))
    ));

    let mut nameless = lunch(tenant_id);
    nameless.customer_name = "   ".into();
    assert!(matches!(
        orders.place_order(nameless).await,
        Err(OrderError::ValidationError(_))
    ));

    tenant_mock.verify();
    drop(orders);
    actor_handle.await.unwrap();
}

#[tokio::test]
async fn transitions_and_payment_follow_the_lifecycle() {
    let tenant_id = TenantId::new();
    let mut tenant_mock = MockClient::<Tenant>::new();
    tenant_mock.expect_get(tenant_id).return_ok(Some(tenant(tenant_id)));

    let router = Router::new(16);
    let mut board = router.subscribe(tenant_id);
    let (order_actor, order_generic_client) = tableside::order_actor::new(16);
    let orders = OrderClient::new(order_generic_client);
    let actor_handle = tokio::spawn(order_actor.run(OrderContext {
        tenants: TenantClient::new(tenant_mock.client()),
        router: router.clone(),
        notifier: Notifier::default(),
    }));

    let order = orders.place_order(lunch(tenant_id)).await.unwrap();
    board.recv().await.unwrap();

    // SERVED cannot be reached from PLACED.
    let err = orders
        .advance(tenant_id, order.id, OrderStatus::Served)
        .await
        .unwrap_err();
    assert_eq!(
        err,
        OrderError::IllegalTransition {
            current: OrderStatus::Placed,
            requested: OrderStatus::Served,
        }
    );

    // PLACED -> READY shortcut.
    orders
        .advance(tenant_id, order.id, OrderStatus::Ready)
        .await
        .unwrap();
    board.recv().await.unwrap();

    // Paying a READY order serves it.
    let paid = orders.mark_paid(tenant_id, order.id).await.unwrap();
    assert!(paid.changed);
    assert_eq!(paid.order.status, OrderStatus::Served);
    assert_eq!(paid.order.payment_status, PaymentStatus::Paid);
    match board.recv().await.as_deref() {
        Some(LifecycleEvent::OrderUpdated(o)) => assert_eq!(o.status, OrderStatus::Served),
        other => panic!("expected OrderUpdated, got {other:?}"),
    }

    // Paying again changes nothing and publishes nothing.
    let again = orders.mark_paid(tenant_id, order.id).await.unwrap();
    assert!(!again.changed);
    assert_eq!(again.order, paid.order);
    assert!(board.try_recv().is_none());

    // Another tenant cannot see or touch the order.
    let other = TenantId::new();
    assert!(matches!(
        orders.order(other, order.id).await,
        Err(OrderError::NotFound(_))
    ));
    assert!(matches!(
        orders.mark_paid(other, order.id).await,
        Err(OrderError::NotFound(_))
    ));

    tenant_mock.verify();
    drop(orders);
    actor_handle.await.unwrap();
}
