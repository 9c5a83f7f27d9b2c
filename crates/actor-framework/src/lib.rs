//! # Actor Framework
//!
//! Building blocks for type-safe, concurrent stores of stateful entities. It
//! implements a **Resource-Oriented Architecture (ROA)** on top of the
//! **Actor Model**: each entity type gets one actor that owns its store and
//! processes requests strictly one after another.
//!
//! ## Architecture Overview
//!
//! 1. **Entity Layer** ([`ActorEntity`]): domain model, validation, transitions
//! 2. **Runtime Layer** ([`ResourceActor`]): message loop and the store
//! 3. **Interface Layer** ([`ResourceClient`]): typed requests over a channel
//!
//! Business logic is written once in the entity trait; the framework handles
//! message passing, draft-then-commit writes and logging.
//!
//! ## Scoped stores
//!
//! Every entity belongs to a [`ActorEntity::Scope`], typically a tenant. All
//! id-addressed requests carry the scope they act in, and an entity from a
//! different scope answers exactly like an absent one. The only unscoped read
//! is [`ResourceClient::find`].
//!
//! ```rust
//! use actor_framework::{ActorEntity, FrameworkError, ResourceActor};
//! use async_trait::async_trait;
//!
//! #[derive(Clone, Debug)]
//! struct Ticket { id: u64, venue: String, open: bool }
//!
//! #[derive(Debug)] struct TicketCreate { venue: String }
//! #[derive(Debug)] struct TicketUpdate;
//! #[derive(Debug)] enum TicketAction { Close }
//!
//! #[derive(Debug, thiserror::Error)]
//! enum TicketError {
//!     #[error("ticket already closed")]
//!     AlreadyClosed,
//! }
//!
//! #[async_trait]
//! impl ActorEntity for Ticket {
//!     type Id = u64;
//!     type Scope = String;
//!     type Create = TicketCreate;
//!     type Update = TicketUpdate;
//!     type Action = TicketAction;
//!     type ActionResult = ();
//!     type Context = ();
//!     type Error = TicketError;
//!
//!     fn from_create_params(id: u64, params: TicketCreate) -> Result<Self, Self::Error> {
//!         Ok(Self { id, venue: params.venue, open: true })
//!     }
//!
//!     fn scope(&self) -> &String { &self.venue }
//!
//!     async fn on_update(&mut self, _: TicketUpdate, _: &()) -> Result<(), Self::Error> { Ok(()) }
//!
//!     async fn handle_action(&mut self, action: TicketAction, _: &()) -> Result<(), Self::Error> {
//!         match action {
//!             TicketAction::Close if !self.open => Err(TicketError::AlreadyClosed),
//!             TicketAction::Close => { self.open = false; Ok(()) }
//!         }
//!     }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let mut next = 0;
//!     let (actor, client) = ResourceActor::<Ticket>::new(10, move || { next += 1; next });
//!     tokio::spawn(actor.run(()));
//!
//!     let ticket = client.create(TicketCreate { venue: "north".into() }).await.unwrap();
//!     client.perform_action("north".into(), ticket.id, TicketAction::Close).await.unwrap();
//!
//!     // Second close fails and the typed error survives the trip.
//!     let err = client
//!         .perform_action("north".into(), ticket.id, TicketAction::Close)
//!         .await
//!         .unwrap_err();
//!     assert!(matches!(err.downcast_entity::<TicketError>(), Ok(TicketError::AlreadyClosed)));
//!
//!     // Another venue cannot see it.
//!     let err = client
//!         .perform_action("south".into(), ticket.id, TicketAction::Close)
//!         .await
//!         .unwrap_err();
//!     assert!(matches!(err, FrameworkError::NotFound(_)));
//! }
//! ```
//!
//! ## Context Injection Pattern
//!
//! Dependencies are injected when the actor is started (`actor.run(context)`),
//! not at construction. All actors and clients can be created first and wired
//! afterwards, which avoids ordering problems between actors that depend on
//! each other.
//!
//! ## Concurrency Model
//!
//! - Each actor runs in its own Tokio task
//! - Requests to one actor are processed **sequentially** (no locks)
//! - Different actors run in parallel
//!
//! ## Testing
//!
//! [`mock::MockClient`] hands out a real [`ResourceClient`] answered from a
//! queue of expectations, so code that depends on another store can be tested
//! without spawning it.

pub mod actor;
pub mod client;
pub mod client_trait;
pub mod entity;
pub mod error;
pub mod message;
pub mod mock;
pub mod tracing;

// Re-export core types for convenience
pub use actor::ResourceActor;
pub use client::ResourceClient;
pub use client_trait::ActorClient;
pub use entity::{ActorEntity, Commit};
pub use error::FrameworkError;
pub use message::{Filter, ResourceRequest, Response};
