//! # Mock Framework & Testing Guide
//!
//! `MockClient<T>` hands out a real `ResourceClient<T>` whose requests are
//! answered from a queue of expectations instead of by an actor. It lets you
//! test code that *uses* a client (typed wrappers, actors that depend on
//! other actors) fast and deterministically.
//!
//! ## When to use Mocks vs Real Actors
//!
//! | Feature | MockClient | Real Actor |
//! |---------|------------|------------|
//! | **Speed** | Instant (in-memory) | Fast (but involves tokio spawn) |
//! | **Determinism** | 100% Deterministic | Subject to scheduler |
//! | **State** | No real state (expectations) | Real state management |
//! | **Use Case** | Unit testing logic *around* the client | Testing the actor itself or full system |
//! | **Error Injection** | Easy (`return_err`) | Hard (requires specific state) |
//!
//! ## Testing Strategies
//!
//! - **Pattern 0, pure mock**: wrap `mock.client()` in the typed client under
//!   test and assert on what it returns.
//! - **Pattern 1, single actor**: spawn one real `ResourceActor` with `()` or
//!   a cheap context.
//! - **Pattern 2, actor with mocked dependencies**: a real actor whose context
//!   holds clients built from mocks (see `tests/order_actor_test.rs` in the
//!   `tableside` crate).
//! - **Pattern 3, full system**: the whole orchestrated system.
//!
//! ## Failure injection
//!
//! ```rust
//! use actor_framework::mock::MockClient;
//! use actor_framework::{ActorEntity, FrameworkError};
//! use async_trait::async_trait;
//!
//! #[derive(Clone, Debug)] struct Seat { id: u32, hall: u32 }
//! #[derive(Debug)] struct SeatCreate;
//! #[derive(Debug)] struct SeatUpdate;
//! #[derive(Debug)] enum SeatAction {}
//! #[derive(Debug, thiserror::Error)] #[error("Err")] struct SeatError;
//!
//! #[async_trait]
//! impl ActorEntity for Seat {
//!     type Id = u32; type Scope = u32; type Create = SeatCreate; type Update = SeatUpdate;
//!     type Action = SeatAction; type ActionResult = (); type Context = (); type Error = SeatError;
//!     fn from_create_params(id: u32, _: SeatCreate) -> Result<Self, Self::Error> { Ok(Self { id, hall: 1 }) }
//!     fn scope(&self) -> &u32 { &self.hall }
//!     async fn on_update(&mut self, _: SeatUpdate, _: &()) -> Result<(), Self::Error> { Ok(()) }
//!     async fn handle_action(&mut self, _: SeatAction, _: &()) -> Result<(), Self::Error> { Ok(()) }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let mut mock = MockClient::<Seat>::new();
//!     let client = mock.client();
//!
//!     mock.expect_get(1).return_err(FrameworkError::ActorClosed);
//!
//!     let result = client.get(1, 1).await;
//!     assert!(matches!(result, Err(FrameworkError::ActorClosed)));
//! }
//! ```
//!
//! Use [`create_mock_client`] plus the `expect_*` helpers when a test needs
//! to inspect the request payload itself.

use crate::client::ResourceClient;
use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use crate::message::{ResourceRequest, Response};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::mpsc;

// =============================================================================
// EXPECTATION BUILDER API
// =============================================================================

/// An expected request and the canned reply for it.
enum Expectation<T: ActorEntity> {
    Create {
        response: Result<T, FrameworkError>,
    },
    Get {
        id: T::Id,
        response: Result<Option<T>, FrameworkError>,
    },
    List {
        response: Result<Vec<T>, FrameworkError>,
    },
    Delete {
        id: T::Id,
        response: Result<Option<T>, FrameworkError>,
    },
    Action {
        id: T::Id,
        response: Result<T::ActionResult, FrameworkError>,
    },
}

type Expectations<T> = Arc<Mutex<VecDeque<Expectation<T>>>>;

/// A mock client with expectation tracking for fluent testing.
///
/// Expectations are consumed in order. A request that does not match the
/// next expectation (wrong kind or wrong id) panics the responder task, which
/// the caller observes as `FrameworkError::ActorDropped`, and leaves the
/// expectation queued so `verify()` fails too.
pub struct MockClient<T: ActorEntity> {
    client: ResourceClient<T>,
    expectations: Expectations<T>,
    _handle: tokio::task::JoinHandle<()>,
}

impl<T: ActorEntity> Default for MockClient<T> {
    fn default() -> Self {
        Self::new()
    }
}

fn answer<R>(respond_to: Response<R>, response: Result<R, FrameworkError>) {
    let _ = respond_to.send(response);
}

impl<T: ActorEntity> MockClient<T> {
    /// Creates a new mock client with no expectations.
    pub fn new() -> Self {
        let (sender, mut receiver) = mpsc::channel::<ResourceRequest<T>>(100);
        let expectations: Expectations<T> = Arc::new(Mutex::new(VecDeque::new()));
        let queue = expectations.clone();

        let handle = tokio::spawn(async move {
            while let Some(request) = receiver.recv().await {
                let expectation = queue.lock().unwrap().pop_front();

                match (request, expectation) {
                    (
                        ResourceRequest::Create { respond_to, .. },
                        Some(Expectation::Create { response }),
                    ) => answer(respond_to, response),
                    (
                        ResourceRequest::Get { id, respond_to, .. },
                        Some(Expectation::Get {
                            id: expected,
                            response,
                        }),
                    ) => {
                        assert_eq!(id, expected, "get called with unexpected id");
                        answer(respond_to, response)
                    }
                    (
                        ResourceRequest::List { respond_to, .. },
                        Some(Expectation::List { response }),
                    ) => answer(respond_to, response),
                    (
                        ResourceRequest::Delete { id, respond_to, .. },
                        Some(Expectation::Delete {
                            id: expected,
                            response,
                        }),
                    ) => {
                        assert_eq!(id, expected, "delete called with unexpected id");
                        answer(respond_to, response)
                    }
                    (
                        ResourceRequest::Action { id, respond_to, .. },
                        Some(Expectation::Action {
                            id: expected,
                            response,
                        }),
                    ) => {
                        assert_eq!(id, expected, "action called with unexpected id");
                        answer(respond_to, response)
                    }
                    (request, expectation) => {
                        if let Some(expectation) = expectation {
                            queue.lock().unwrap().push_front(expectation);
                        }
                        panic!("Unexpected request {request:?}");
                    }
                }
            }
        });

        Self {
            client: ResourceClient::new(sender),
            expectations,
            _handle: handle,
        }
    }

    /// Returns the client for use in tests.
    pub fn client(&self) -> ResourceClient<T> {
        self.client.clone()
    }

    /// Expects a `create` operation.
    pub fn expect_create(&mut self) -> Expect<T, T> {
        Expect::new(self.expectations.clone(), |response| Expectation::Create {
            response,
        })
    }

    /// Expects a `get` operation for `id`.
    pub fn expect_get(&mut self, id: T::Id) -> Expect<T, Option<T>> {
        Expect::new(self.expectations.clone(), move |response| Expectation::Get {
            id,
            response,
        })
    }

    /// Expects a `list` operation.
    pub fn expect_list(&mut self) -> Expect<T, Vec<T>> {
        Expect::new(self.expectations.clone(), |response| Expectation::List {
            response,
        })
    }

    /// Expects a `delete` operation for `id`.
    pub fn expect_delete(&mut self, id: T::Id) -> Expect<T, Option<T>> {
        Expect::new(self.expectations.clone(), move |response| {
            Expectation::Delete { id, response }
        })
    }

    /// Expects an `action` operation on `id`.
    pub fn expect_action(&mut self, id: T::Id) -> Expect<T, T::ActionResult> {
        Expect::new(self.expectations.clone(), move |response| {
            Expectation::Action { id, response }
        })
    }

    /// Verifies that all expectations were met.
    pub fn verify(&self) {
        let remaining = self.expectations.lock().unwrap().len();
        if remaining > 0 {
            panic!("Not all expectations were met. {remaining} remaining");
        }
    }
}

/// Builder returned by the `expect_*` methods; finish it with
/// [`return_ok`](Expect::return_ok) or [`return_err`](Expect::return_err).
pub struct Expect<T: ActorEntity, R> {
    expectations: Expectations<T>,
    build: Box<dyn FnOnce(Result<R, FrameworkError>) -> Expectation<T> + Send>,
}

impl<T: ActorEntity, R> Expect<T, R> {
    fn new(
        expectations: Expectations<T>,
        build: impl FnOnce(Result<R, FrameworkError>) -> Expectation<T> + Send + 'static,
    ) -> Self {
        Self {
            expectations,
            build: Box::new(build),
        }
    }

    /// Sets the expectation to return a successful result.
    pub fn return_ok(self, value: R) {
        let expectation = (self.build)(Ok(value));
        self.expectations.lock().unwrap().push_back(expectation);
    }

    /// Sets the expectation to return an error.
    pub fn return_err(self, error: FrameworkError) {
        let expectation = (self.build)(Err(error));
        self.expectations.lock().unwrap().push_back(expectation);
    }
}

// =============================================================================
// CHANNEL-LEVEL HELPERS
// =============================================================================

/// Creates a client and the receiver its requests arrive on.
///
/// The test plays the actor: it pulls each request off `receiver`, asserts on
/// the payload and answers through the embedded responder.
pub fn create_mock_client<T: ActorEntity>(
    buffer_size: usize,
) -> (ResourceClient<T>, mpsc::Receiver<ResourceRequest<T>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (ResourceClient::new(sender), receiver)
}

/// Helper to verify that the next message is a Create request
pub async fn expect_create<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Create, Response<T>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Create { params, respond_to }) => Some((params, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a Get request
pub async fn expect_get<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Scope, T::Id, Response<Option<T>>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Get {
            scope,
            id,
            respond_to,
        }) => Some((scope, id, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a Delete request
pub async fn expect_delete<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Scope, T::Id, Response<Option<T>>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Delete {
            scope,
            id,
            respond_to,
        }) => Some((scope, id, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is an Action request
pub async fn expect_action<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Scope, T::Id, T::Action, Response<T::ActionResult>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Action {
            scope,
            id,
            action,
            respond_to,
        }) => Some((scope, id, action, respond_to)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    #[derive(Clone, Debug, PartialEq)]
    struct Guest {
        id: u32,
        venue: u32,
        email: String,
    }

    #[derive(Debug)]
    struct GuestCreate {
        venue: u32,
        email: String,
    }

    #[derive(Debug)]
    struct GuestUpdate;

    #[derive(Debug)]
    enum GuestAction {
        CheckIn,
    }

    #[derive(Debug, thiserror::Error)]
    #[error("Guest error")]
    struct GuestError;

    #[async_trait]
    impl ActorEntity for Guest {
        type Id = u32;
        type Scope = u32;
        type Create = GuestCreate;
        type Update = GuestUpdate;
        type Action = GuestAction;
        type ActionResult = bool;
        type Context = ();
        type Error = GuestError;

        fn from_create_params(id: u32, params: GuestCreate) -> Result<Self, Self::Error> {
            Ok(Self {
                id,
                venue: params.venue,
                email: params.email,
            })
        }

        fn scope(&self) -> &u32 {
            &self.venue
        }

        async fn on_update(&mut self, _: GuestUpdate, _: &()) -> Result<(), Self::Error> {
            Ok(())
        }

        async fn handle_action(&mut self, _: GuestAction, _: &()) -> Result<bool, Self::Error> {
            Ok(true)
        }
    }

    fn guest(id: u32) -> Guest {
        Guest {
            id,
            venue: 9,
            email: "guest@example.com".to_string(),
        }
    }

    #[tokio::test]
    async fn channel_helpers_expose_the_request() {
        let (client, mut receiver) = create_mock_client::<Guest>(10);

        let create_task = tokio::spawn(async move {
            client
                .create(GuestCreate {
                    venue: 9,
                    email: "guest@example.com".to_string(),
                })
                .await
        });

        let (payload, responder) = expect_create(&mut receiver)
            .await
            .expect("Expected Create request");
        assert_eq!(payload.venue, 9);
        responder.send(Ok(guest(1))).unwrap();

        let created = create_task.await.unwrap().unwrap();
        assert_eq!(created.id, 1);
    }

    #[tokio::test]
    async fn action_helper_carries_scope_and_id() {
        let (client, mut receiver) = create_mock_client::<Guest>(10);
        let task = tokio::spawn(async move { client.perform_action(9, 4, GuestAction::CheckIn).await });

        let (scope, id, action, responder) = expect_action(&mut receiver).await.unwrap();
        assert_eq!((scope, id), (9, 4));
        assert!(matches!(action, GuestAction::CheckIn));
        responder.send(Ok(false)).unwrap();

        assert!(!task.await.unwrap().unwrap());
    }

    #[tokio::test]
    async fn get_helper_carries_scope_and_id() {
        let (client, mut receiver) = create_mock_client::<Guest>(10);
        let task = tokio::spawn(async move { client.get(9, 3).await });

        let (scope, id, responder) = expect_get(&mut receiver).await.unwrap();
        assert_eq!((scope, id), (9, 3));
        responder.send(Ok(Some(guest(3)))).unwrap();

        assert_eq!(task.await.unwrap().unwrap(), Some(guest(3)));
    }

    #[tokio::test]
    async fn delete_helper_carries_scope_and_id() {
        let (client, mut receiver) = create_mock_client::<Guest>(10);
        let task = tokio::spawn(async move { client.delete(9, 5).await });

        let (scope, id, responder) = expect_delete(&mut receiver).await.unwrap();
        assert_eq!((scope, id), (9, 5));
        responder.send(Ok(None)).unwrap();

        assert_eq!(task.await.unwrap().unwrap(), None);
    }

    #[tokio::test]
    async fn helper_returns_none_for_another_request_kind() {
        let (client, mut receiver) = create_mock_client::<Guest>(10);
        let task = tokio::spawn(async move { client.list(9).await });

        assert!(expect_get(&mut receiver).await.is_none());
        // The unmatched request was consumed; its responder is gone.
        assert!(matches!(task.await.unwrap(), Err(FrameworkError::ActorDropped)));
    }

    #[tokio::test]
    async fn expectations_are_answered_in_order() {
        let mut mock = MockClient::<Guest>::new();
        mock.expect_create().return_ok(guest(1));
        mock.expect_get(1).return_ok(Some(guest(1)));
        mock.expect_list().return_ok(vec![guest(1), guest(2)]);
        mock.expect_delete(2).return_ok(None);

        let client = mock.client();
        let created = client
            .create(GuestCreate {
                venue: 9,
                email: "guest@example.com".to_string(),
            })
            .await
            .unwrap();
        assert_eq!(created, guest(1));
        assert_eq!(client.get(9, 1).await.unwrap(), Some(guest(1)));
        assert_eq!(client.list(9).await.unwrap().len(), 2);
        assert_eq!(client.delete(9, 2).await.unwrap(), None);

        mock.verify();
    }

    #[tokio::test]
    async fn mismatched_request_surfaces_as_dropped_actor() {
        let mut mock = MockClient::<Guest>::new();
        mock.expect_list().return_ok(vec![]);

        let result = mock.client().get(9, 1).await;
        assert!(matches!(result, Err(FrameworkError::ActorDropped)));
    }
}
