//! # Tenant Actor
//!
//! The tenant directory: restaurant accounts keyed by id, with a unique
//! lower-case handle and one hashed secret per staff role.
//!
//! ## Structure
//!
//! - [`entity`] - [`ActorEntity`](actor_framework::ActorEntity) implementation for [`Tenant`]
//! - [`error`] - [`TenantError`]
//! - [`new()`] - factory for the actor and its generic client
//!
//! Registration, resolution and secret rotation are exposed by
//! [`TenantClient`](crate::clients::TenantClient).

pub mod entity;
pub mod error;

pub use error::*;

use crate::model::{Tenant, TenantId};
use actor_framework::{ResourceActor, ResourceClient};

/// Tenants have no custom actions; every change is an update.
#[derive(Debug)]
pub enum TenantAction {}

/// Creates a new Tenant actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<Tenant>, ResourceClient<Tenant>) {
    ResourceActor::new(buffer_size, TenantId::new)
}
