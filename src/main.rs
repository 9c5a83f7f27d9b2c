//! Walks one restaurant through a lunch service: register, sign staff in,
//! take an order through the kitchen, take payment, answer a table call.

use actor_framework::tracing::setup_tracing;
use tableside::config::Config;
use tableside::engine::{EngineError, PlaceOrder};
use tableside::gate::secret::RolePasswords;
use tableside::lifecycle::RestaurantSystem;
use tableside::model::{CallKind, LineItem, Money, OrderStatus, PaymentMethod, Role};
use tracing::{info, Instrument};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv::dotenv().ok();
    setup_tracing();

    let system = RestaurantSystem::new(Config::from_env());

    let tenant = system
        .directory
        .register(
            "spice-route",
            "Spice Route",
            RolePasswords::new("owner-pass", "chef-pass", "waiter-pass"),
        )
        .await?;
    info!(tenant_id = %tenant.id, handle = %tenant.handle, "Restaurant open");

    let owner = system.gate.verify_role("spice-route", Role::Owner, "owner-pass").await?;
    let chef = system.gate.verify_role("spice-route", Role::Chef, "chef-pass").await?;
    let waiter = system.gate.verify_role("spice-route", Role::Waiter, "waiter-pass").await?;

    system
        .menu
        .add_dish(&owner, "Paneer Tikka", Money::from_minor(25_000), "Starters")
        .await?;
    system
        .menu
        .add_dish(&owner, "Masala Chai", Money::from_minor(4_000), "Drinks")
        .await?;

    let mut board = system.engine.subscribe("spice-route").await?;

    let span = tracing::info_span!("lunch_order");
    let order = async {
        let order = system
            .engine
            .place_order(
                "spice-route",
                PlaceOrder {
                    customer_name: "Asha".to_string(),
                    table_number: "4".to_string(),
                    line_items: vec![
                        LineItem::new("Paneer Tikka", Money::from_minor(25_000), 1)
                            .with_customization("extra spicy"),
                        LineItem::new("Masala Chai", Money::from_minor(4_000), 2),
                    ],
                    payment_method: PaymentMethod::Cash,
                },
            )
            .await?;
        system
            .engine
            .advance_status(&chef, order.id, OrderStatus::Cooking)
            .await?;
        system
            .engine
            .advance_status(&chef, order.id, OrderStatus::Ready)
            .await?;
        let paid = system.engine.mark_paid(&waiter, order.id).await?;
        Ok::<_, EngineError>(paid)
    }
    .instrument(span)
    .await?;
    info!(
        order_id = %order.id,
        status = %order.status,
        payment = %order.payment_status,
        total = %order.total_amount,
        "Order closed"
    );

    let call = system
        .engine
        .request_service("spice-route", "4", CallKind::Water)
        .await?;
    system.engine.resolve_service(&waiter, call.id).await?;

    while let Some(event) = board.try_recv() {
        info!(kind = event.kind(), json = %event.to_json()?, "Board received");
    }

    system.shutdown().await?;
    info!("Demo finished");
    Ok(())
}
