//! # Menu Client
use crate::menu_actor::MenuError;
use crate::model::{Dish, DishCreate, DishId, DishUpdate, TenantId};
use actor_framework::{ActorClient, FrameworkError, ResourceClient};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for interacting with the Menu actor.
#[derive(Clone)]
pub struct MenuClient {
    inner: ResourceClient<Dish>,
}

impl MenuClient {
    pub fn new(inner: ResourceClient<Dish>) -> Self {
        Self { inner }
    }

    #[instrument(skip(self))]
    pub async fn add_dish(&self, params: DishCreate) -> Result<Dish, MenuError> {
        debug!("Sending request");
        Ok(self.inner.create(params).await?)
    }

    /// A tenant's menu, grouped by category and then by name.
    #[instrument(skip(self))]
    pub async fn menu(&self, tenant_id: TenantId) -> Result<Vec<Dish>, MenuError> {
        let mut dishes = self.inner.list(tenant_id).await?;
        dishes.sort_by(|a, b| a.category.cmp(&b.category).then_with(|| a.name.cmp(&b.name)));
        Ok(dishes)
    }

    /// Like `get`, but an absent dish is an error.
    #[instrument(skip(self))]
    pub async fn dish(&self, tenant_id: TenantId, id: DishId) -> Result<Dish, MenuError> {
        self.inner
            .get(tenant_id, id)
            .await?
            .ok_or_else(|| MenuError::NotFound(id.to_string()))
    }

    #[instrument(skip(self))]
    pub async fn update_dish(
        &self,
        tenant_id: TenantId,
        id: DishId,
        update: DishUpdate,
    ) -> Result<Dish, MenuError> {
        Ok(self.inner.update(tenant_id, id, update).await?)
    }
}

#[async_trait]
impl ActorClient<Dish> for MenuClient {
    type Error = MenuError;

    fn inner(&self) -> &ResourceClient<Dish> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        MenuError::from(e)
    }
}
