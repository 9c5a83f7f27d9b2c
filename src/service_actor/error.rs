use actor_framework::FrameworkError;
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum ServiceCallError {
    #[error("Unknown tenant: {0}")]
    UnknownTenant(String),

    /// Empty table label, or the takeaway sentinel.
    #[error("Service call validation error: {0}")]
    ValidationError(String),

    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<FrameworkError> for ServiceCallError {
    fn from(e: FrameworkError) -> Self {
        match e.downcast_entity::<ServiceCallError>() {
            Ok(typed) => typed,
            Err(other) => ServiceCallError::ActorCommunicationError(other.to_string()),
        }
    }
}
