//! The error taxonomy every caller of the engine, the gate and the menu sees.

use crate::menu_actor::MenuError;
use crate::model::{OrderStatus, Role};
use crate::order_actor::OrderError;
use crate::service_actor::ServiceCallError;
use crate::tenant_actor::TenantError;
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum EngineError {
    /// Malformed request. Nothing was changed.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The tenant reference resolves to nothing.
    #[error("Unknown tenant: {0}")]
    UnknownTenant(String),

    /// Absent, or owned by another tenant; the two are indistinguishable.
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Illegal transition {current} -> {requested}")]
    IllegalTransition {
        current: OrderStatus,
        requested: OrderStatus,
    },

    /// Wrong role for the operation, or a wrong password.
    #[error("Forbidden: {role} may not {operation}")]
    Forbidden {
        role: Role,
        operation: &'static str,
    },

    /// A store or the blocking pool could not be reached. The caller may retry.
    #[error("Temporarily unavailable: {0}")]
    Transient(String),
}

impl From<OrderError> for EngineError {
    fn from(e: OrderError) -> Self {
        match e {
            OrderError::NotFound(id) => EngineError::NotFound(id),
            OrderError::UnknownTenant(id) => EngineError::UnknownTenant(id),
            OrderError::ValidationError(msg) => EngineError::InvalidInput(msg),
            OrderError::IllegalTransition { current, requested } => {
                EngineError::IllegalTransition { current, requested }
            }
            OrderError::ActorCommunicationError(msg) => EngineError::Transient(msg),
        }
    }
}

impl From<ServiceCallError> for EngineError {
    fn from(e: ServiceCallError) -> Self {
        match e {
            ServiceCallError::UnknownTenant(id) => EngineError::UnknownTenant(id),
            ServiceCallError::ValidationError(msg) => EngineError::InvalidInput(msg),
            ServiceCallError::ActorCommunicationError(msg) => EngineError::Transient(msg),
        }
    }
}

impl From<TenantError> for EngineError {
    fn from(e: TenantError) -> Self {
        match e {
            TenantError::NotFound(id) => EngineError::UnknownTenant(id),
            TenantError::InvalidHandle(_)
            | TenantError::HandleTaken(_)
            | TenantError::ValidationError(_) => EngineError::InvalidInput(e.to_string()),
            TenantError::Hashing(msg) | TenantError::ActorCommunicationError(msg) => {
                EngineError::Transient(msg)
            }
        }
    }
}

impl From<MenuError> for EngineError {
    fn from(e: MenuError) -> Self {
        match e {
            MenuError::NotFound(id) => EngineError::NotFound(id),
            MenuError::ValidationError(msg) => EngineError::InvalidInput(msg),
            MenuError::ActorCommunicationError(msg) => EngineError::Transient(msg),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn store_errors_land_in_the_right_bucket() {
        assert_eq!(
            EngineError::from(TenantError::NotFound("spice".into())),
            EngineError::UnknownTenant("spice".into())
        );
        assert!(matches!(
            EngineError::from(TenantError::HandleTaken("spice".into())),
            EngineError::InvalidInput(_)
        ));
        assert!(matches!(
            EngineError::from(OrderError::ActorCommunicationError("closed".into())),
            EngineError::Transient(_)
        ));
        assert!(matches!(
            EngineError::from(ServiceCallError::ValidationError("takeaway".into())),
            EngineError::InvalidInput(_)
        ));
    }

    #[test]
    fn forbidden_names_role_and_operation() {
        let err = EngineError::Forbidden {
            role: Role::Chef,
            operation: "mark orders paid",
        };
        assert_eq!(err.to_string(), "Forbidden: CHEF may not mark orders paid");
    }
}
