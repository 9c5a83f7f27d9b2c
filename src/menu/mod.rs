//! Menu operations: owners edit the tenant's dishes, anyone may read them.
//!
//! Orders do not check their line items against the menu; prices on an order
//! are whatever the customer's client sent.

use crate::clients::{MenuClient, TenantClient};
use crate::engine::EngineError;
use crate::gate::StaffSession;
use crate::model::{Dish, DishCreate, DishId, DishUpdate, Money, Role};
use tracing::{info, instrument};

#[derive(Clone)]
pub struct MenuService {
    tenants: TenantClient,
    dishes: MenuClient,
}

impl MenuService {
    pub fn new(tenants: TenantClient, dishes: MenuClient) -> Self {
        Self { tenants, dishes }
    }

    #[instrument(skip(self, session), fields(tenant_id = %session.tenant_id()))]
    pub async fn add_dish(
        &self,
        session: &StaffSession,
        name: &str,
        price: Money,
        category: &str,
    ) -> Result<Dish, EngineError> {
        session.require(&[Role::Owner], "edit the menu")?;
        let dish = self
            .dishes
            .add_dish(DishCreate {
                tenant_id: session.tenant_id(),
                name: name.to_string(),
                price,
                category: category.to_string(),
            })
            .await?;
        info!(dish_id = %dish.id, price = %dish.price, "Dish added");
        Ok(dish)
    }

    #[instrument(skip(self))]
    pub async fn get_dish(&self, tenant_ref: &str, dish_id: DishId) -> Result<Dish, EngineError> {
        let tenant = self.tenants.resolve(tenant_ref).await?;
        Ok(self.dishes.dish(tenant.id, dish_id).await?)
    }

    #[instrument(skip(self))]
    pub async fn list_menu(&self, tenant_ref: &str) -> Result<Vec<Dish>, EngineError> {
        let tenant = self.tenants.resolve(tenant_ref).await?;
        Ok(self.dishes.menu(tenant.id).await?)
    }

    pub async fn set_availability(
        &self,
        session: &StaffSession,
        dish_id: DishId,
        available: bool,
    ) -> Result<Dish, EngineError> {
        self.update_dish(session, dish_id, DishUpdate::availability(available))
            .await
    }

    #[instrument(skip(self, session), fields(tenant_id = %session.tenant_id()))]
    pub async fn update_dish(
        &self,
        session: &StaffSession,
        dish_id: DishId,
        update: DishUpdate,
    ) -> Result<Dish, EngineError> {
        session.require(&[Role::Owner], "edit the menu")?;
        Ok(self
            .dishes
            .update_dish(session.tenant_id(), dish_id, update)
            .await?)
    }
}
