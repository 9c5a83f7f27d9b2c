//! Orchestration: creates the store actors, wires their dependencies and owns
//! shutdown.

pub mod restaurant_system;

pub use restaurant_system::RestaurantSystem;
