//! # ActorEntity Trait
//!
//! The `ActorEntity` trait is the contract every resource (Tenant, Dish, Order,
//! ServiceCall, …) implements to be managed by the generic `ResourceActor`.
//! It names the associated types for IDs, scopes, DTOs, actions, context and
//! errors, and provides the lifecycle hooks (`on_create`, `on_update`,
//! `on_delete`, `handle_action`) plus the post-commit hook `on_commit`.
//!
//! # Scopes
//! Every entity belongs to exactly one [`ActorEntity::Scope`] (for a
//! multi-tenant store, the tenant). Reads and writes name the scope they act
//! in, and the actor treats an entity from another scope exactly like a
//! missing one. There is no way to reach across scopes except the explicit,
//! unscoped `find` query.
//!
//! # Provided Methods (Hooks)
//! - [`ActorEntity::on_create`]
//! - [`ActorEntity::on_delete`]
//! - [`ActorEntity::unique_key`]
//! - [`ActorEntity::on_commit`]
//!
//! You do **not** need to implement these unless you want to customize
//! behavior. The defaults do nothing.

use async_trait::async_trait;
use std::fmt::{Debug, Display};
use std::hash::Hash;

/// The change that was just written to the store.
///
/// Passed to [`ActorEntity::on_commit`] together with the committed entity.
/// For `Deleted` the entity is the last state before removal.
pub enum Commit<'a, T: ActorEntity> {
    Created,
    Updated,
    Acted(&'a T::ActionResult),
    Deleted,
}

/// Trait that any resource entity must implement to be managed by ResourceActor.
///
/// # Async & Context
/// This trait is `#[async_trait]` so hooks can await other actors. The
/// `Context` type is injected into every hook when the actor is started,
/// which lets dependencies be wired after construction ("late binding").
#[async_trait]
pub trait ActorEntity: Clone + Send + Sync + 'static {
    /// The unique identifier for this entity.
    type Id: Eq + Hash + Clone + Send + Sync + Display + Debug;

    /// The partition an entity lives in (e.g. the owning tenant).
    type Scope: Eq + Clone + Send + Sync + Display + Debug;

    /// The data required to create a new instance.
    type Create: Send + Sync + Debug;

    /// The data required to update an existing instance.
    type Update: Send + Sync + Debug;

    /// Enum representing resource-specific operations (e.g. `Advance`).
    type Action: Send + Sync + Debug;

    /// The result type returned by custom actions.
    type ActionResult: Send + Sync + Debug;

    /// The runtime context (dependencies) injected into the actor.
    /// Use `()` if no dependencies are needed.
    type Context: Send + Sync;

    /// The error type for this entity.
    ///
    /// One enum per actor rather than one per message: clients match on a
    /// single type, at the cost of each operation's signature admitting
    /// variants it never produces.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Construct the full entity from the ID and payload.
    /// This is where input validation belongs; it runs before `on_create`.
    fn from_create_params(id: Self::Id, params: Self::Create) -> Result<Self, Self::Error>;

    /// The scope this entity belongs to.
    fn scope(&self) -> &Self::Scope;

    /// A key that must be unique across the whole store (not just the scope).
    /// Creation is rejected with `FrameworkError::Conflict` when taken.
    fn unique_key(&self) -> Option<String> {
        None
    }

    // --- Lifecycle Hooks (Async) ---

    /// Called after construction, before the entity is stored.
    /// Use this hook for checks that need other actors.
    async fn on_create(&mut self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Called on a draft copy when an update request is received.
    async fn on_update(
        &mut self,
        update: Self::Update,
        _ctx: &Self::Context,
    ) -> Result<(), Self::Error>;

    /// Called immediately before the entity is removed from the store.
    async fn on_delete(&self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    // --- Action Handler (Async) ---

    /// Handle a custom resource-specific action on a draft copy.
    /// The draft replaces the stored entity only if this returns `Ok`.
    async fn handle_action(
        &mut self,
        action: Self::Action,
        _ctx: &Self::Context,
    ) -> Result<Self::ActionResult, Self::Error>;

    // --- Post-commit ---

    /// Called after a change is in the store, before the caller is answered.
    ///
    /// Must not block: it runs inside the actor loop. Anything slow belongs
    /// in a spawned task.
    fn on_commit(&self, _commit: Commit<'_, Self>, _ctx: &Self::Context) {}
}
