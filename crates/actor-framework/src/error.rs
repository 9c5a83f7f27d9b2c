//! # Framework Errors
//!
//! Errors raised by the plumbing between a `ResourceClient` and its
//! `ResourceActor`. Domain failures travel boxed inside
//! [`FrameworkError::EntityError`] and are recovered by typed clients with
//! [`FrameworkError::downcast_entity`].

use std::error::Error;

/// Errors that can occur within the actor framework itself.
#[derive(Debug, thiserror::Error)]
pub enum FrameworkError {
    #[error("Actor closed")]
    ActorClosed,
    #[error("Actor dropped response channel")]
    ActorDropped,
    #[error("Item not found: {0}")]
    NotFound(String),
    #[error("Unique key already taken: {0}")]
    Conflict(String),
    #[error("Entity error: {0}")]
    EntityError(Box<dyn Error + Send + Sync>),
}

impl FrameworkError {
    /// Boxes a domain error raised by an entity hook.
    pub fn entity<E>(error: E) -> Self
    where
        E: Error + Send + Sync + 'static,
    {
        FrameworkError::EntityError(Box::new(error))
    }

    /// True when the actor could not be reached at all. The request may or may
    /// not have been applied, so only the caller can decide to retry.
    pub fn is_transient(&self) -> bool {
        matches!(self, FrameworkError::ActorClosed | FrameworkError::ActorDropped)
    }

    /// Recovers the typed entity error, handing `self` back untouched when it
    /// is not an `EntityError` of type `E`.
    pub fn downcast_entity<E>(self) -> Result<E, Self>
    where
        E: Error + 'static,
    {
        match self {
            FrameworkError::EntityError(inner) => inner
                .downcast::<E>()
                .map(|typed| *typed)
                .map_err(FrameworkError::EntityError),
            other => Err(other),
        }
    }
}
