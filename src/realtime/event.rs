use crate::model::{Order, ResolvedCall, ServiceCall};
use serde::{Deserialize, Serialize};

/// A change one tenant's staff boards need to see.
///
/// Serialized as `{"type": "NewOrder", "payload": {...}}` for whatever
/// transport carries it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload")]
pub enum LifecycleEvent {
    NewOrder(Order),
    OrderUpdated(Order),
    NewServiceCall(ServiceCall),
    ServiceResolved(ResolvedCall),
}

impl LifecycleEvent {
    pub fn kind(&self) -> &'static str {
        match self {
            LifecycleEvent::NewOrder(_) => "NewOrder",
            LifecycleEvent::OrderUpdated(_) => "OrderUpdated",
            LifecycleEvent::NewServiceCall(_) => "NewServiceCall",
            LifecycleEvent::ServiceResolved(_) => "ServiceResolved",
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
