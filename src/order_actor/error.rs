//! Error types for the Order actor.

use crate::model::OrderStatus;
use actor_framework::FrameworkError;
use thiserror::Error;

/// Errors that can occur during order operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum OrderError {
    /// The order does not exist, or belongs to another tenant.
    #[error("Order not found: {0}")]
    NotFound(String),

    /// The tenant the order was placed for is not in the directory.
    #[error("Unknown tenant: {0}")]
    UnknownTenant(String),

    /// The order data provided is invalid.
    #[error("Order validation error: {0}")]
    ValidationError(String),

    #[error("Illegal transition {current} -> {requested}")]
    IllegalTransition {
        current: OrderStatus,
        requested: OrderStatus,
    },

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<FrameworkError> for OrderError {
    fn from(e: FrameworkError) -> Self {
        match e.downcast_entity::<OrderError>() {
            Ok(typed) => typed,
            Err(FrameworkError::NotFound(id)) => OrderError::NotFound(id),
            Err(other) => OrderError::ActorCommunicationError(other.to_string()),
        }
    }
}
