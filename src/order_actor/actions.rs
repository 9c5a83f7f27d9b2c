//! Custom actions for the Order actor.
//!
//! These are the only ways an order changes after it is placed. Both run on a
//! draft inside the actor, so two staff members acting on the same order are
//! applied one after the other, never interleaved.

use crate::model::{Order, OrderStatus};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderAction {
    /// Move the kitchen status forward.
    ///
    /// # Errors
    /// `IllegalTransition` unless the move is PLACED→COOKING, COOKING→READY,
    /// READY→SERVED or PLACED→READY.
    Advance(OrderStatus),
    /// Record payment. Idempotent; a READY order is also served.
    MarkPaid,
}

/// The order after the action, and whether the action changed it.
#[derive(Debug, Clone)]
pub struct OrderActionResult {
    pub order: Order,
    pub changed: bool,
}
