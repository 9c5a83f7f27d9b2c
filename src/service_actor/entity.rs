use crate::model::{ResolvedCall, ServiceCall, ServiceCallCreate, ServiceCallId, TenantId};
use crate::realtime::LifecycleEvent;
use crate::service_actor::{ServiceCallAction, ServiceCallContext, ServiceCallError};
use actor_framework::{ActorClient, ActorEntity, Commit};
use async_trait::async_trait;
use chrono::Utc;

#[async_trait]
impl ActorEntity for ServiceCall {
    type Id = ServiceCallId;
    type Scope = TenantId;
    type Create = ServiceCallCreate;
    type Update = ();
    type Action = ServiceCallAction;
    type ActionResult = ();
    type Context = ServiceCallContext;
    type Error = ServiceCallError;

    fn from_create_params(id: ServiceCallId, params: ServiceCallCreate) -> Result<Self, Self::Error> {
        if params.table.is_takeaway() {
            return Err(ServiceCallError::ValidationError(
                "takeaway orders cannot call for table service".into(),
            ));
        }
        Ok(Self {
            id,
            tenant_id: params.tenant_id,
            table: params.table,
            kind: params.kind,
            created_at: Utc::now(),
        })
    }

    fn scope(&self) -> &TenantId {
        &self.tenant_id
    }

    async fn on_create(&mut self, ctx: &ServiceCallContext) -> Result<(), Self::Error> {
        let tenant = ctx
            .tenants
            .get(self.tenant_id, self.tenant_id)
            .await
            .map_err(|e| ServiceCallError::ActorCommunicationError(e.to_string()))?;
        match tenant {
            Some(_) => Ok(()),
            None => Err(ServiceCallError::UnknownTenant(self.tenant_id.to_string())),
        }
    }

    async fn on_update(&mut self, _update: (), _ctx: &ServiceCallContext) -> Result<(), Self::Error> {
        Err(ServiceCallError::ValidationError(
            "service calls cannot be edited".into(),
        ))
    }

    async fn handle_action(
        &mut self,
        action: ServiceCallAction,
        _ctx: &ServiceCallContext,
    ) -> Result<(), Self::Error> {
        match action {}
    }

    fn on_commit(&self, commit: Commit<'_, Self>, ctx: &ServiceCallContext) {
        let event = match commit {
            Commit::Created => LifecycleEvent::NewServiceCall(self.clone()),
            Commit::Deleted => LifecycleEvent::ServiceResolved(ResolvedCall::from(self)),
            Commit::Updated | Commit::Acted(_) => return,
        };
        ctx.router.publish(self.tenant_id, event);
    }
}
