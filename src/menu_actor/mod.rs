//! # Menu Actor
//!
//! Dish catalog, one menu per tenant. Owners edit it; customers and the engine
//! only read it.

pub mod entity;
pub mod error;

pub use error::*;

use crate::model::{Dish, DishId};
use actor_framework::{ResourceActor, ResourceClient};

/// Dishes change through updates only.
#[derive(Debug)]
pub enum DishAction {}

/// Creates a new Menu actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<Dish>, ResourceClient<Dish>) {
    ResourceActor::new(buffer_size, DishId::new)
}
