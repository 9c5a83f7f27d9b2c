//! Plain data types shared by the stores, the engine and the router.
//!
//! Each entity that lives in a store implements
//! [`ActorEntity`](actor_framework::ActorEntity) in its `*_actor` module; this
//! module only holds the data and the rules that need nothing but the data
//! (validation, totals, the status order).

/// Declares a uuid-backed identifier newtype.
macro_rules! uuid_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub uuid::Uuid);

        impl $name {
            /// A fresh random (v4) identifier.
            pub fn new() -> Self {
                Self(uuid::Uuid::new_v4())
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                self.0.fmt(f)
            }
        }

        impl std::str::FromStr for $name {
            type Err = uuid::Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                uuid::Uuid::parse_str(s).map(Self)
            }
        }
    };
}

pub mod dish;
pub mod money;
pub mod order;
pub mod service_call;
pub mod table;
pub mod tenant;

pub use dish::*;
pub use money::*;
pub use order::*;
pub use service_call::*;
pub use table::*;
pub use tenant::*;
