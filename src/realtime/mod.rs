//! Per-tenant realtime propagation of lifecycle events.

pub mod event;
pub mod router;

pub use event::LifecycleEvent;
pub use router::{Router, Subscription, SubscriptionHandle};
