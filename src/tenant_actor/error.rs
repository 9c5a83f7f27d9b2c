//! Error types for the Tenant actor.

use crate::gate::secret::SecretError;
use actor_framework::FrameworkError;
use thiserror::Error;

/// Errors that can occur during tenant directory operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum TenantError {
    /// The handle is empty or has characters outside `[a-z0-9-]`.
    #[error("Invalid handle: {0:?}")]
    InvalidHandle(String),

    #[error("Handle already taken: {0}")]
    HandleTaken(String),

    #[error("Tenant validation error: {0}")]
    ValidationError(String),

    /// No tenant with this id or handle.
    #[error("Unknown tenant: {0}")]
    NotFound(String),

    /// Hashing a secret failed or its blocking task died.
    #[error("Secret hashing failed: {0}")]
    Hashing(String),

    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<FrameworkError> for TenantError {
    fn from(e: FrameworkError) -> Self {
        match e.downcast_entity::<TenantError>() {
            Ok(typed) => typed,
            Err(FrameworkError::NotFound(id)) => TenantError::NotFound(id),
            Err(FrameworkError::Conflict(handle)) => TenantError::HandleTaken(handle),
            Err(other) => TenantError::ActorCommunicationError(other.to_string()),
        }
    }
}

impl From<SecretError> for TenantError {
    fn from(e: SecretError) -> Self {
        match e {
            SecretError::Empty => TenantError::ValidationError(e.to_string()),
            other => TenantError::Hashing(other.to_string()),
        }
    }
}
