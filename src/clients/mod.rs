//! Type-safe wrappers around [`ResourceClient`](actor_framework::ResourceClient).
//!
//! Each client maps [`FrameworkError`](actor_framework::FrameworkError) back
//! into its store's own error type, recovering typed entity errors on the way.

pub mod menu_client;
pub mod order_client;
pub mod service_call_client;
pub mod tenant_client;

pub use menu_client::*;
pub use order_client::*;
pub use service_call_client::*;
pub use tenant_client::*;
