use crate::model::{Money, TenantId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

uuid_id! {
    /// Identifier of a [`Dish`].
    DishId
}

/// A menu entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dish {
    pub id: DishId,
    pub tenant_id: TenantId,
    pub name: String,
    pub price: Money,
    pub category: String,
    pub available: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct DishCreate {
    pub tenant_id: TenantId,
    pub name: String,
    pub price: Money,
    pub category: String,
}

/// Partial update; `None` leaves a field as it is.
#[derive(Debug, Clone, Default)]
pub struct DishUpdate {
    pub name: Option<String>,
    pub price: Option<Money>,
    pub category: Option<String>,
    pub available: Option<bool>,
}

impl DishUpdate {
    pub fn availability(available: bool) -> Self {
        Self {
            available: Some(available),
            ..Self::default()
        }
    }
}
