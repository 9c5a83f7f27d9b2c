//! # Generic Actor Server
//!
//! This module defines the `ResourceActor`, the component that owns the store
//! for one entity type. It is the "Server" side of the Actor Model: requests
//! are processed one at a time, so two writers racing on the same entity are
//! serialized without any locking.

use crate::client::ResourceClient;
use crate::entity::{ActorEntity, Commit};
use crate::error::FrameworkError;
use crate::message::{Filter, ResourceRequest};
use std::collections::HashMap;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// The generic actor that manages a collection of entities.
///
/// # Usage Pattern
///
/// 1.  **Create**: call `ResourceActor::new()` to get the `actor` and its `client`.
/// 2.  **Wire**: pass dependencies into `actor.run(context)`.
/// 3.  **Run**: spawn the run loop in a background task.
///
/// ```rust
/// use actor_framework::{ActorEntity, ResourceActor};
/// use async_trait::async_trait;
///
/// #[derive(Clone, Debug)] struct Note { id: u32, owner: String, text: String }
/// #[derive(Debug)] struct NoteCreate { owner: String, text: String }
/// #[derive(Debug)] struct NoteUpdate;
/// #[derive(Debug)] enum NoteAction {}
/// #[derive(Debug, thiserror::Error)] #[error("note error")] struct NoteError;
///
/// #[async_trait]
/// impl ActorEntity for Note {
///     type Id = u32;
///     type Scope = String;
///     type Create = NoteCreate;
///     type Update = NoteUpdate;
///     type Action = NoteAction;
///     type ActionResult = ();
///     type Context = ();
///     type Error = NoteError;
///
///     fn from_create_params(id: u32, p: NoteCreate) -> Result<Self, Self::Error> {
///         Ok(Self { id, owner: p.owner, text: p.text })
///     }
///     fn scope(&self) -> &String { &self.owner }
///     async fn on_update(&mut self, _: NoteUpdate, _: &()) -> Result<(), Self::Error> { Ok(()) }
///     async fn handle_action(&mut self, _: NoteAction, _: &()) -> Result<(), Self::Error> { Ok(()) }
/// }
///
/// #[tokio::main]
/// async fn main() {
///     let mut next = 0;
///     let (actor, client) = ResourceActor::<Note>::new(10, move || { next += 1; next });
///     tokio::spawn(actor.run(()));
///
///     let note = client.create(NoteCreate { owner: "ana".into(), text: "hi".into() }).await.unwrap();
///     assert!(client.get("ana".into(), note.id).await.unwrap().is_some());
///     assert!(client.get("bob".into(), note.id).await.unwrap().is_none());
/// }
/// ```
///
/// # Operations
///
/// * **Create**: next id → `from_create_params` → unique-key check →
///   `on_create` → insert → `on_commit(Created)`.
/// * **Update** / **Action**: the hook runs on a clone of the stored entity;
///   the clone replaces the original only on success, then `on_commit` runs.
///   A failed hook leaves the store untouched.
/// * **Delete**: `on_delete` → remove → `on_commit(Deleted)`. Deleting an
///   absent entity answers `Ok(None)`.
/// * **List** / **Find**: results come back in creation order, oldest first.
pub struct ResourceActor<T: ActorEntity> {
    receiver: mpsc::Receiver<ResourceRequest<T>>,
    store: HashMap<T::Id, T>,
    /// Creation sequence number of every stored entity.
    created: HashMap<T::Id, u64>,
    next_seq: u64,
    next_id: Box<dyn FnMut() -> T::Id + Send>,
    entity_type: &'static str,
}

impl<T: ActorEntity> ResourceActor<T> {
    /// Creates a new `ResourceActor` and its associated `ResourceClient`.
    ///
    /// * `buffer_size` - capacity of the request channel. When it is full,
    ///   client calls wait for space.
    /// * `next_id` - id generator, called once per `Create`.
    pub fn new(
        buffer_size: usize,
        next_id: impl FnMut() -> T::Id + Send + 'static,
    ) -> (Self, ResourceClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        // "Order" instead of "tableside::model::order::Order"
        let entity_type = std::any::type_name::<T>()
            .rsplit("::")
            .next()
            .unwrap_or("Unknown");
        let actor = Self {
            receiver,
            store: HashMap::new(),
            created: HashMap::new(),
            next_seq: 0,
            next_id: Box::new(next_id),
            entity_type,
        };
        (actor, ResourceClient::new(sender))
    }

    /// Runs the actor's event loop until every client has been dropped.
    ///
    /// The `context` is injected into every entity hook.
    pub async fn run(mut self, context: T::Context) {
        let entity_type = self.entity_type;
        info!(entity_type, "Actor started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                ResourceRequest::Create { params, respond_to } => {
                    let _ = respond_to.send(self.create(params, &context).await);
                }
                ResourceRequest::Get {
                    scope,
                    id,
                    respond_to,
                } => {
                    let item = self.scoped(&scope, &id).cloned();
                    debug!(entity_type, %scope, %id, found = item.is_some(), "Get");
                    let _ = respond_to.send(Ok(item));
                }
                ResourceRequest::List { scope, respond_to } => {
                    let items = self.in_creation_order(|item| item.scope() == &scope);
                    debug!(entity_type, %scope, count = items.len(), "List");
                    let _ = respond_to.send(Ok(items));
                }
                ResourceRequest::Find { filter, respond_to } => {
                    let _ = respond_to.send(Ok(self.find(&filter)));
                }
                ResourceRequest::Update {
                    scope,
                    id,
                    update,
                    respond_to,
                } => {
                    let _ = respond_to.send(self.update(&scope, &id, update, &context).await);
                }
                ResourceRequest::Delete {
                    scope,
                    id,
                    respond_to,
                } => {
                    let _ = respond_to.send(self.delete(&scope, &id, &context).await);
                }
                ResourceRequest::Action {
                    scope,
                    id,
                    action,
                    respond_to,
                } => {
                    let _ = respond_to.send(self.act(&scope, &id, action, &context).await);
                }
            }
        }

        info!(entity_type, size = self.store.len(), "Shutdown");
    }

    fn scoped(&self, scope: &T::Scope, id: &T::Id) -> Option<&T> {
        self.store.get(id).filter(|item| item.scope() == scope)
    }

    fn scoped_mut(&mut self, scope: &T::Scope, id: &T::Id) -> Option<&mut T> {
        self.store.get_mut(id).filter(|item| item.scope() == scope)
    }

    fn find(&self, filter: &Filter<T>) -> Vec<T> {
        let found = self.in_creation_order(|item| filter(item));
        debug!(entity_type = self.entity_type, count = found.len(), "Find");
        found
    }

    /// Clones the matching entities, oldest first.
    fn in_creation_order(&self, keep: impl Fn(&T) -> bool) -> Vec<T> {
        let mut found: Vec<(u64, &T)> = self
            .store
            .iter()
            .filter(|(_, item)| keep(item))
            .map(|(id, item)| (self.created.get(id).copied().unwrap_or(u64::MAX), item))
            .collect();
        found.sort_by_key(|(seq, _)| *seq);
        found.into_iter().map(|(_, item)| item.clone()).collect()
    }

    async fn create(&mut self, params: T::Create, ctx: &T::Context) -> Result<T, FrameworkError> {
        let entity_type = self.entity_type;
        debug!(entity_type, ?params, "Create");
        let id = (self.next_id)();

        let mut item = T::from_create_params(id.clone(), params).map_err(|e| {
            warn!(entity_type, error = %e, "Create failed");
            FrameworkError::entity(e)
        })?;

        if let Some(key) = item.unique_key() {
            let taken = self
                .store
                .values()
                .any(|other| other.unique_key().as_deref() == Some(key.as_str()));
            if taken {
                warn!(entity_type, %key, "Create conflict");
                return Err(FrameworkError::Conflict(key));
            }
        }

        if let Err(e) = item.on_create(ctx).await {
            warn!(entity_type, error = %e, "on_create failed");
            return Err(FrameworkError::entity(e));
        }

        self.store.insert(id.clone(), item.clone());
        self.created.insert(id.clone(), self.next_seq);
        self.next_seq += 1;
        info!(entity_type, %id, scope = %item.scope(), size = self.store.len(), "Created");
        item.on_commit(Commit::Created, ctx);
        Ok(item)
    }

    async fn update(
        &mut self,
        scope: &T::Scope,
        id: &T::Id,
        update: T::Update,
        ctx: &T::Context,
    ) -> Result<T, FrameworkError> {
        let entity_type = self.entity_type;
        debug!(entity_type, %scope, %id, ?update, "Update");
        let Some(item) = self.scoped_mut(scope, id) else {
            warn!(entity_type, %scope, %id, "Not found");
            return Err(FrameworkError::NotFound(id.to_string()));
        };

        let mut draft = item.clone();
        if let Err(e) = draft.on_update(update, ctx).await {
            warn!(entity_type, %id, error = %e, "Update failed");
            return Err(FrameworkError::entity(e));
        }
        *item = draft;
        info!(entity_type, %id, "Updated");
        item.on_commit(Commit::Updated, ctx);
        Ok(item.clone())
    }

    async fn delete(
        &mut self,
        scope: &T::Scope,
        id: &T::Id,
        ctx: &T::Context,
    ) -> Result<Option<T>, FrameworkError> {
        let entity_type = self.entity_type;
        debug!(entity_type, %scope, %id, "Delete");
        let Some(item) = self.scoped(scope, id) else {
            debug!(entity_type, %id, "Already absent");
            return Ok(None);
        };

        if let Err(e) = item.on_delete(ctx).await {
            warn!(entity_type, %id, error = %e, "on_delete failed");
            return Err(FrameworkError::entity(e));
        }
        let Some(removed) = self.store.remove(id) else {
            return Ok(None);
        };
        self.created.remove(id);
        info!(entity_type, %id, size = self.store.len(), "Deleted");
        removed.on_commit(Commit::Deleted, ctx);
        Ok(Some(removed))
    }

    async fn act(
        &mut self,
        scope: &T::Scope,
        id: &T::Id,
        action: T::Action,
        ctx: &T::Context,
    ) -> Result<T::ActionResult, FrameworkError> {
        let entity_type = self.entity_type;
        debug!(entity_type, %scope, %id, ?action, "Action");
        let Some(item) = self.scoped_mut(scope, id) else {
            warn!(entity_type, %scope, %id, "Not found");
            return Err(FrameworkError::NotFound(id.to_string()));
        };

        let mut draft = item.clone();
        match draft.handle_action(action, ctx).await {
            Ok(result) => {
                *item = draft;
                info!(entity_type, %id, "Action ok");
                item.on_commit(Commit::Acted(&result), ctx);
                Ok(result)
            }
            Err(e) => {
                warn!(entity_type, %id, error = %e, "Action failed");
                Err(FrameworkError::entity(e))
            }
        }
    }
}
