//! # Tableside
//!
//! Order lifecycle backend for multi-tenant restaurants: customers place
//! orders and call for service from their table, kitchen and floor staff move
//! orders forward, and every change reaches the restaurant's open boards in
//! real time.
//!
//! Each store (tenants, menu, orders, service calls) is a
//! [`ResourceActor`](actor_framework::ResourceActor) owning its state in one
//! task. Validation and side effects live in the entities' hooks; the
//! facades on top only resolve tenants and check roles.
//!
//! ## Module Tour
//!
//! - **[`model`]**: plain data: orders, line items, money, tables, tenants.
//! - **[`tenant_actor`], [`menu_actor`], [`order_actor`], [`service_actor`]**:
//!   the [`ActorEntity`](actor_framework::ActorEntity) implementations.
//! - **[`clients`]**: typed wrappers hiding the message passing.
//! - **[`engine`]**: the order lifecycle operations and the error taxonomy
//!   callers see.
//! - **[`gate`]**: role passwords in, [`StaffSession`](gate::StaffSession)
//!   out.
//! - **[`realtime`]**: per-tenant fan-out of [`LifecycleEvent`](realtime::LifecycleEvent)s.
//! - **[`notify`]**: best-effort new-order notifications.
//! - **[`menu`]**: owner-only menu editing.
//! - **[`lifecycle`]**: [`RestaurantSystem`](lifecycle::RestaurantSystem),
//!   which starts and stops all of the above.
//!
//! ## Running the Demo
//!
//! ```bash
//! RUST_LOG=info cargo run
//! ```

pub mod clients;
pub mod config;
pub mod engine;
pub mod gate;
pub mod lifecycle;
pub mod menu;
pub mod menu_actor;
pub mod model;
pub mod notify;
pub mod order_actor;
pub mod realtime;
pub mod service_actor;
pub mod tenant_actor;
