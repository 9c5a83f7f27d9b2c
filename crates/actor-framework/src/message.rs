//! # Generic Messages
//!
//! The request type exchanged between `ResourceClient` and `ResourceActor`.

use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use std::fmt;
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by actors.
pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

/// Predicate for unscoped lookups.
pub type Filter<T> = Box<dyn Fn(&T) -> bool + Send + Sync>;

/// Internal message type sent to the actor to request operations.
///
/// # Resource-Oriented Architecture
/// Instead of ad-hoc messages for every operation, every store speaks the
/// same CRUD vocabulary plus a custom `Action` for domain transitions.
///
/// - **Create**: uses [`ActorEntity::Create`] and answers with the stored entity.
/// - **Get** / **List**: reads inside one scope.
/// - **Find**: unscoped read by predicate (directory lookups).
/// - **Update**: applies [`ActorEntity::Update`] to one entity.
/// - **Delete**: removes one entity; answers `None` when it was already gone.
/// - **Action**: executes a custom [`ActorEntity::Action`].
///
/// Every request that names an id also names the scope it acts in; an entity
/// outside that scope is invisible to the request.
pub enum ResourceRequest<T: ActorEntity> {
    Create {
        params: T::Create,
        respond_to: Response<T>,
    },
    Get {
        scope: T::Scope,
        id: T::Id,
        respond_to: Response<Option<T>>,
    },
    List {
        scope: T::Scope,
        respond_to: Response<Vec<T>>,
    },
    Find {
        filter: Filter<T>,
        respond_to: Response<Vec<T>>,
    },
    Update {
        scope: T::Scope,
        id: T::Id,
        update: T::Update,
        respond_to: Response<T>,
    },
    Delete {
        scope: T::Scope,
        id: T::Id,
        respond_to: Response<Option<T>>,
    },
    Action {
        scope: T::Scope,
        id: T::Id,
        action: T::Action,
        respond_to: Response<T::ActionResult>,
    },
}

impl<T: ActorEntity> fmt::Debug for ResourceRequest<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResourceRequest::Create { params, .. } => {
                f.debug_struct("Create").field("params", params).finish()
            }
            ResourceRequest::Get { scope, id, .. } => f
                .debug_struct("Get")
                .field("scope", scope)
                .field("id", id)
                .finish(),
            ResourceRequest::List { scope, .. } => {
                f.debug_struct("List").field("scope", scope).finish()
            }
            ResourceRequest::Find { .. } => f.debug_struct("Find").finish_non_exhaustive(),
            ResourceRequest::Update {
                scope, id, update, ..
            } => f
                .debug_struct("Update")
                .field("scope", scope)
                .field("id", id)
                .field("update", update)
                .finish(),
            ResourceRequest::Delete { scope, id, .. } => f
                .debug_struct("Delete")
                .field("scope", scope)
                .field("id", id)
                .finish(),
            ResourceRequest::Action {
                scope, id, action, ..
            } => f
                .debug_struct("Action")
                .field("scope", scope)
                .field("id", id)
                .field("action", action)
                .finish(),
        }
    }
}
