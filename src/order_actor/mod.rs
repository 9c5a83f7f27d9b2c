//! # Order Actor
//!
//! Owns every order of every tenant and is the single place order state
//! changes. Requests are handled one at a time, so concurrent status or
//! payment changes to one order are serialized: the second `Advance` to READY
//! sees READY and fails with `IllegalTransition`, and the second `MarkPaid`
//! is a no-op.
//!
//! ## Structure
//!
//! - [`entity`] - [`ActorEntity`](actor_framework::ActorEntity) implementation for [`Order`]
//! - [`error`] - [`OrderError`]
//! - [`actions`] - [`OrderAction`] and [`OrderActionResult`]
//! - [`new()`] - factory for the actor and its generic client
//!
//! ## Dependencies
//!
//! The actor runs with an [`OrderContext`]: the tenant client (to reject
//! orders for unknown tenants), the realtime router and the notifier. Both
//! event paths are driven from `on_commit`, after the store holds the change.

pub mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;

use crate::clients::TenantClient;
use crate::model::{Order, OrderId};
use crate::notify::Notifier;
use crate::realtime::Router;
use actor_framework::{ResourceActor, ResourceClient};

/// Everything an order needs from the rest of the system.
#[derive(Clone)]
pub struct OrderContext {
    pub tenants: TenantClient,
    pub router: Router,
    pub notifier: Notifier,
}

/// Creates a new Order actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<Order>, ResourceClient<Order>) {
    ResourceActor::new(buffer_size, OrderId::new)
}
