//! # Observability & Tracing
//!
//! [`setup_tracing`] installs the global `tracing` subscriber used by
//! binaries built on this framework.
//!
//! ## Configuration
//!
//! - Level and filtering come from `RUST_LOG` (`EnvFilter`).
//! - Compact format with the module target hidden (`with_target(false)`); the
//!   actors log an `entity_type` field instead.
//!
//! ```bash
//! RUST_LOG=info cargo run                    # state changes only
//! RUST_LOG=debug cargo run                   # plus request payloads
//! RUST_LOG=tableside=debug,info cargo run    # one crate verbose
//! ```
//!
//! ## What Gets Traced
//!
//! - **Actor lifecycle**: `Actor started`, `Shutdown` with the final store size
//! - **Store operations**: `Create`, `Get`, `List`, `Find`, `Update`,
//!   `Delete`, `Action` at debug; successful writes at info; rejected ones at
//!   warn with the error
//! - **Client entry points**: spans from `#[instrument]` on typed clients
//!
//! With `RUST_LOG=info` an order passing through the kitchen reads like:
//!
//! ```text
//! INFO place_order: Created entity_type="Order" id=6f1c… scope=2b7e… size=1
//! INFO advance_status: Action ok entity_type="Order" id=6f1c…
//! ```

/// Installs the global subscriber. Call once, at the top of `main`.
///
/// Panics if a global subscriber is already set.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false) // entity_type replaces the module path
        .compact()
        .init();
}
