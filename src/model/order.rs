//! Orders, line items and the status / payment enums.
//!
//! The order actor ([`crate::order_actor`]) applies these rules inside the
//! store; nothing here touches other components.

use crate::model::{Money, Table, TenantId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

uuid_id! {
    /// Identifier of an [`Order`].
    OrderId
}

/// Kitchen progress of an order.
///
/// Variants are declared in lifecycle order, so `Ord` follows the lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    Placed,
    Cooking,
    Ready,
    Served,
}

impl OrderStatus {
    /// Whether `self -> next` is one of the legal moves:
    /// PLACED→COOKING, COOKING→READY, READY→SERVED and the PLACED→READY
    /// shortcut. Staying put is not a move.
    pub fn can_advance_to(self, next: OrderStatus) -> bool {
        use OrderStatus::*;
        matches!(
            (self, next),
            (Placed, Cooking) | (Cooking, Ready) | (Ready, Served) | (Placed, Ready)
        )
    }

    pub fn is_terminal(self) -> bool {
        self == OrderStatus::Served
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            OrderStatus::Placed => "PLACED",
            OrderStatus::Cooking => "COOKING",
            OrderStatus::Ready => "READY",
            OrderStatus::Served => "SERVED",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentMethod {
    Cash,
    /// UPI deep link; no gateway confirmation is involved.
    Online,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentStatus {
    Pending,
    Paid,
}

impl fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            PaymentStatus::Pending => "PENDING",
            PaymentStatus::Paid => "PAID",
        })
    }
}

/// One ordered dish. Prices are snapshotted at order time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    pub name: String,
    pub unit_price: Money,
    pub quantity: u32,
    #[serde(default)]
    pub customizations: BTreeSet<String>,
}

impl LineItem {
    pub fn new(name: impl Into<String>, unit_price: Money, quantity: u32) -> Self {
        Self {
            name: name.into(),
            unit_price,
            quantity,
            customizations: BTreeSet::new(),
        }
    }

    pub fn with_customization(mut self, note: impl Into<String>) -> Self {
        self.customizations.insert(note.into());
        self
    }

    /// `unit_price × quantity`, `None` on overflow.
    pub fn subtotal(&self) -> Option<Money> {
        self.unit_price.checked_mul(self.quantity)
    }
}

/// Why a set of line items cannot be ordered.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LineItemProblem {
    #[error("an order needs at least one line item")]
    Empty,
    #[error("line item {0} has no name")]
    Unnamed(usize),
    #[error("line item {0} has a negative price")]
    NegativePrice(usize),
    #[error("line item {0} has quantity 0")]
    ZeroQuantity(usize),
    #[error("order total overflows")]
    Overflow,
}

/// Validates `items` and returns their total.
pub fn total_of(items: &[LineItem]) -> Result<Money, LineItemProblem> {
    if items.is_empty() {
        return Err(LineItemProblem::Empty);
    }
    items.iter().enumerate().try_fold(Money::ZERO, |total, (i, item)| {
        if item.name.trim().is_empty() {
            return Err(LineItemProblem::Unnamed(i));
        }
        if item.unit_price.is_negative() {
            return Err(LineItemProblem::NegativePrice(i));
        }
        if item.quantity == 0 {
            return Err(LineItemProblem::ZeroQuantity(i));
        }
        item.subtotal()
            .and_then(|subtotal| total.checked_add(subtotal))
            .ok_or(LineItemProblem::Overflow)
    })
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: OrderId,
    pub tenant_id: TenantId,
    #[serde(rename = "tableNumber")]
    pub table: Table,
    pub customer_name: String,
    pub line_items: Vec<LineItem>,
    pub total_amount: Money,
    pub payment_method: PaymentMethod,
    pub payment_status: PaymentStatus,
    pub status: OrderStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Payload for creating a new order. Carries no total; the store computes it.
#[derive(Debug, Clone)]
pub struct OrderCreate {
    pub tenant_id: TenantId,
    pub table: Table,
    pub customer_name: String,
    pub line_items: Vec<LineItem>,
    pub payment_method: PaymentMethod,
}

impl Order {
    pub fn is_paid(&self) -> bool {
        self.payment_status == PaymentStatus::Paid
    }
}

/// The slice of an order the notification sink needs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderSummary {
    pub order_id: OrderId,
    pub table_number: String,
    pub customer_name: String,
    pub item_count: u32,
    pub total_amount: Money,
}

impl From<&Order> for OrderSummary {
    fn from(order: &Order) -> Self {
        Self {
            order_id: order.id,
            table_number: order.table.to_string(),
            customer_name: order.customer_name.clone(),
            item_count: order
                .line_items
                .iter()
                .fold(0u32, |n, item| n.saturating_add(item.quantity)),
            total_amount: order.total_amount,
        }
    }
}
