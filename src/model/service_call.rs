use crate::model::{Table, TenantId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

uuid_id! {
    /// Identifier of a [`ServiceCall`].
    ServiceCallId
}

/// What the table is asking for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CallKind {
    Help,
    Bill,
    Water,
}

impl fmt::Display for CallKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            CallKind::Help => "HELP",
            CallKind::Bill => "BILL",
            CallKind::Water => "WATER",
        })
    }
}

/// An open request for table service. Resolving a call deletes it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceCall {
    pub id: ServiceCallId,
    pub tenant_id: TenantId,
    /// Always a dine-in table; takeaway is rejected at creation.
    #[serde(rename = "tableNumber")]
    pub table: Table,
    #[serde(rename = "type")]
    pub kind: CallKind,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct ServiceCallCreate {
    pub tenant_id: TenantId,
    pub table: Table,
    pub kind: CallKind,
}

/// Payload of the `ServiceResolved` event: enough for a board to remove the
/// call without having kept it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedCall {
    pub id: ServiceCallId,
    pub table_number: Table,
    #[serde(rename = "type")]
    pub kind: CallKind,
}

impl From<&ServiceCall> for ResolvedCall {
    fn from(call: &ServiceCall) -> Self {
        Self {
            id: call.id,
            table_number: call.table.clone(),
            kind: call.kind,
        }
    }
}
