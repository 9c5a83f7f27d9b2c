//! # ActorClient Trait
//!
//! Common interface for resource-specific clients: default scoped `get` and
//! `list` built on top of a generic `ResourceClient`, with errors mapped into
//! the resource's own error type.
use crate::{ActorEntity, FrameworkError, ResourceClient};
use async_trait::async_trait;

/// Trait for resource-specific clients to inherit standard reads.
///
/// # Example
///
/// ```rust
/// use actor_framework::{ActorClient, ActorEntity, FrameworkError, ResourceClient};
/// use async_trait::async_trait;
///
/// #[derive(Clone, Debug)]
/// struct Table { id: u32, venue: u32 }
/// #[derive(Debug)] struct TableCreate { venue: u32 }
/// #[derive(Debug)] struct TableUpdate;
/// #[derive(Debug)] enum TableAction {}
///
/// #[derive(Debug, thiserror::Error)]
/// #[error("table error: {0}")]
/// struct TableError(String);
///
/// #[async_trait]
/// impl ActorEntity for Table {
///     type Id = u32;
///     type Scope = u32;
///     type Create = TableCreate;
///     type Update = TableUpdate;
///     type Action = TableAction;
///     type ActionResult = ();
///     type Context = ();
///     type Error = TableError;
///
///     fn from_create_params(id: u32, p: TableCreate) -> Result<Self, Self::Error> {
///         Ok(Self { id, venue: p.venue })
///     }
///     fn scope(&self) -> &u32 { &self.venue }
///     async fn on_update(&mut self, _: TableUpdate, _: &()) -> Result<(), Self::Error> { Ok(()) }
///     async fn handle_action(&mut self, _: TableAction, _: &()) -> Result<(), Self::Error> { Ok(()) }
/// }
///
/// struct TableClient {
///     inner: ResourceClient<Table>,
/// }
///
/// #[async_trait]
/// impl ActorClient<Table> for TableClient {
///     type Error = TableError;
///
///     fn inner(&self) -> &ResourceClient<Table> {
///         &self.inner
///     }
///
///     fn map_error(e: FrameworkError) -> Self::Error {
///         TableError(e.to_string())
///     }
/// }
///
/// async fn usage(client: TableClient) {
///     // get() and list() are provided automatically
///     let _ = client.get(1, 7).await;
///     let _ = client.list(1).await;
/// }
/// ```
#[async_trait]
pub trait ActorClient<T: ActorEntity>: Send + Sync {
    /// The resource-specific error type.
    type Error: Send + Sync;

    /// Access the inner generic ResourceClient.
    fn inner(&self) -> &ResourceClient<T>;

    /// Map framework errors to the specific resource error type.
    fn map_error(e: FrameworkError) -> Self::Error;

    /// Fetch an entity by ID within a scope.
    #[tracing::instrument(skip(self))]
    async fn get(&self, scope: T::Scope, id: T::Id) -> Result<Option<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().get(scope, id).await.map_err(Self::map_error)
    }

    /// Fetch every entity of a scope.
    #[tracing::instrument(skip(self))]
    async fn list(&self, scope: T::Scope) -> Result<Vec<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().list(scope).await.map_err(Self::map_error)
    }
}
