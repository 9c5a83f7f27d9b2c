//! # Service Call Actor
//!
//! Open table-service requests (help, bill, water). A call is open while it
//! exists; resolving it deletes it, and deleting an absent call is a no-op.

pub mod entity;
pub mod error;

pub use error::*;

use crate::clients::TenantClient;
use crate::model::{ServiceCall, ServiceCallId};
use crate::realtime::Router;
use actor_framework::{ResourceActor, ResourceClient};

/// Service calls are created and deleted, never changed in place.
#[derive(Debug)]
pub enum ServiceCallAction {}

#[derive(Clone)]
pub struct ServiceCallContext {
    pub tenants: TenantClient,
    pub router: Router,
}

/// Creates a new ServiceCall actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<ServiceCall>, ResourceClient<ServiceCall>) {
    ResourceActor::new(buffer_size, ServiceCallId::new)
}
