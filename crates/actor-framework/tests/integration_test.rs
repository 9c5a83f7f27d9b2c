use actor_framework::{ActorEntity, Commit, FrameworkError, ResourceActor};
use async_trait::async_trait;
use std::sync::{Arc, Mutex};

// --- Test Entity ---

#[derive(Clone, Debug, PartialEq)]
struct Booking {
    id: u32,
    venue: String,
    handle: String,
    seats: u8,
    confirmed: bool,
}

#[derive(Debug)]
struct BookingCreate {
    venue: String,
    handle: String,
    seats: u8,
}

#[derive(Debug)]
struct BookingUpdate {
    seats: Option<u8>,
}

#[derive(Debug)]
enum BookingAction {
    Confirm,
}

#[derive(Debug, PartialEq, thiserror::Error)]
enum BookingError {
    #[error("seats must be between 1 and 12")]
    Seats,
}

/// Records every commit so tests can check what was published and in what order.
type Journal = Arc<Mutex<Vec<String>>>;

#[async_trait]
impl ActorEntity for Booking {
    type Id = u32;
    type Scope = String;
    type Create = BookingCreate;
    type Update = BookingUpdate;
    type Action = BookingAction;
    type ActionResult = bool;
    type Context = Journal;
    type Error = BookingError;

    fn from_create_params(id: u32, params: BookingCreate) -> Result<Self, Self::Error> {
        if !(1..=12).contains(&params.seats) {
            return Err(BookingError::Seats);
        }
        Ok(Self {
            id,
            venue: params.venue,
            handle: params.handle,
            seats: params.seats,
            confirmed: false,
        })
    }

    fn scope(&self) -> &String {
        &self.venue
    }

    fn unique_key(&self) -> Option<String> {
        Some(self.handle.clone())
    }

    async fn on_update(&mut self, update: BookingUpdate, _ctx: &Journal) -> Result<(), Self::Error> {
        if let Some(seats) = update.seats {
            // Mutate first so a rejected update proves the draft was discarded.
            self.seats = seats;
            if !(1..=12).contains(&seats) {
                return Err(BookingError::Seats);
            }
        }
        Ok(())
    }

    async fn handle_action(
        &mut self,
        action: BookingAction,
        _ctx: &Journal,
    ) -> Result<bool, Self::Error> {
        match action {
            BookingAction::Confirm => {
                let changed = !self.confirmed;
                self.confirmed = true;
                Ok(changed)
            }
        }
    }

    fn on_commit(&self, commit: Commit<'_, Self>, journal: &Journal) {
        let entry = match commit {
            Commit::Created => format!("created {}", self.id),
            Commit::Updated => format!("updated {}", self.id),
            Commit::Acted(changed) => format!("acted {} {changed}", self.id),
            Commit::Deleted => format!("deleted {}", self.id),
        };
        journal.lock().unwrap().push(entry);
    }
}

fn spawn_bookings() -> (actor_framework::ResourceClient<Booking>, Journal) {
    let mut next = 0;
    let (actor, client) = ResourceActor::<Booking>::new(10, move || {
        next += 1;
        next
    });
    let journal = Journal::default();
    tokio::spawn(actor.run(journal.clone()));
    (client, journal)
}

fn booking(venue: &str, handle: &str, seats: u8) -> BookingCreate {
    BookingCreate {
        venue: venue.into(),
        handle: handle.into(),
        seats,
    }
}

// --- Tests ---

#[tokio::test]
async fn test_framework_full_lifecycle() {
    let (client, journal) = spawn_bookings();
    let venue = "north".to_string();

    // 1. Create
    let created = client.create(booking("north", "ana", 2)).await.unwrap();
    assert_eq!(created.id, 1);

    // 2. Action changes state the first time only
    assert!(client
        .perform_action(venue.clone(), created.id, BookingAction::Confirm)
        .await
        .unwrap());
    assert!(!client
        .perform_action(venue.clone(), created.id, BookingAction::Confirm)
        .await
        .unwrap());

    // 3. Update
    let updated = client
        .update(venue.clone(), created.id, BookingUpdate { seats: Some(4) })
        .await
        .unwrap();
    assert_eq!(updated.seats, 4);
    assert!(updated.confirmed);

    // 4. Delete twice: second answers None
    let removed = client.delete(venue.clone(), created.id).await.unwrap();
    assert_eq!(removed.map(|b| b.seats), Some(4));
    assert_eq!(client.delete(venue.clone(), created.id).await.unwrap(), None);
    assert!(client.get(venue, created.id).await.unwrap().is_none());

    assert_eq!(
        *journal.lock().unwrap(),
        vec!["created 1", "acted 1 true", "acted 1 false", "updated 1", "deleted 1"]
    );
}

#[tokio::test]
async fn failed_update_leaves_the_store_untouched() {
    let (client, journal) = spawn_bookings();
    let created = client.create(booking("north", "ana", 2)).await.unwrap();

    let err = client
        .update("north".into(), created.id, BookingUpdate { seats: Some(40) })
        .await
        .unwrap_err();
    assert_eq!(err.downcast_entity::<BookingError>().unwrap(), BookingError::Seats);

    let stored = client.get("north".into(), created.id).await.unwrap().unwrap();
    assert_eq!(stored.seats, 2);
    assert_eq!(*journal.lock().unwrap(), vec!["created 1"]);
}

#[tokio::test]
async fn other_scopes_cannot_see_or_touch_an_entity() {
    let (client, _) = spawn_bookings();
    let created = client.create(booking("north", "ana", 2)).await.unwrap();
    client.create(booking("south", "bo", 3)).await.unwrap();

    assert!(client.get("south".into(), created.id).await.unwrap().is_none());
    assert_eq!(client.list("south".into()).await.unwrap().len(), 1);
    assert_eq!(client.delete("south".into(), created.id).await.unwrap(), None);

    let err = client
        .perform_action("south".into(), created.id, BookingAction::Confirm)
        .await
        .unwrap_err();
    assert!(matches!(err, FrameworkError::NotFound(_)));

    // Still there for its own scope.
    assert!(client.get("north".into(), created.id).await.unwrap().is_some());
}

#[tokio::test]
async fn unique_key_is_enforced_across_scopes() {
    let (client, _) = spawn_bookings();
    client.create(booking("north", "ana", 2)).await.unwrap();

    let err = client.create(booking("south", "ana", 2)).await.unwrap_err();
    assert!(matches!(err, FrameworkError::Conflict(key) if key == "ana"));

    let found = client.find(|b: &Booking| b.handle == "ana").await.unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].venue, "north");
}

#[tokio::test]
async fn invalid_create_is_rejected_without_storing() {
    let (client, journal) = spawn_bookings();
    let err = client.create(booking("north", "ana", 0)).await.unwrap_err();
    assert!(matches!(
        err.downcast_entity::<BookingError>(),
        Ok(BookingError::Seats)
    ));
    assert!(client.list("north".into()).await.unwrap().is_empty());
    assert!(journal.lock().unwrap().is_empty());
}

#[tokio::test]
async fn closed_actor_is_reported_as_transient() {
    let (actor, client) = ResourceActor::<Booking>::new(1, || 1);
    drop(actor);

    let err = client.get("north".into(), 1).await.unwrap_err();
    assert!(matches!(err, FrameworkError::ActorClosed));
    assert!(err.is_transient());
}

#[tokio::test]
async fn list_and_find_return_oldest_first() {
    // Ids count down, so id order is the reverse of creation order.
    let mut next = 100;
    let (actor, client) = ResourceActor::<Booking>::new(10, move || {
        next -= 1;
        next
    });
    tokio::spawn(actor.run(Journal::default()));

    for handle in ["ana", "bo", "cy", "di"] {
        client.create(booking("north", handle, 2)).await.unwrap();
    }
    let bo = client.find(|b: &Booking| b.handle == "bo").await.unwrap();
    client.delete("north".into(), bo[0].id).await.unwrap();
    client.create(booking("north", "ed", 2)).await.unwrap();
    client.create(booking("south", "fay", 2)).await.unwrap();

    let listed: Vec<String> = client
        .list("north".into())
        .await
        .unwrap()
        .into_iter()
        .map(|b| b.handle)
        .collect();
    assert_eq!(listed, ["ana", "cy", "di", "ed"]);

    let found: Vec<String> = client
        .find(|b: &Booking| b.seats == 2)
        .await
        .unwrap()
        .into_iter()
        .map(|b| b.handle)
        .collect();
    assert_eq!(found, ["ana", "cy", "di", "ed", "fay"]);
}
