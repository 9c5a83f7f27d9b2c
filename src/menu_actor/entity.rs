use crate::menu_actor::{DishAction, MenuError};
use crate::model::{Dish, DishCreate, DishId, DishUpdate, Money, TenantId};
use actor_framework::ActorEntity;
use async_trait::async_trait;
use chrono::Utc;

fn clean_name(raw: &str) -> Result<String, MenuError> {
    let name = raw.trim();
    if name.is_empty() {
        return Err(MenuError::ValidationError("dish name must not be empty".into()));
    }
    Ok(name.to_string())
}

fn check_price(price: Money) -> Result<Money, MenuError> {
    if price.is_negative() {
        return Err(MenuError::ValidationError(format!("negative price {price}")));
    }
    Ok(price)
}

#[async_trait]
impl ActorEntity for Dish {
    type Id = DishId;
    type Scope = TenantId;
    type Create = DishCreate;
    type Update = DishUpdate;
    type Action = DishAction;
    type ActionResult = ();
    type Context = ();
    type Error = MenuError;

    fn from_create_params(id: DishId, params: DishCreate) -> Result<Self, Self::Error> {
        Ok(Self {
            id,
            tenant_id: params.tenant_id,
            name: clean_name(&params.name)?,
            price: check_price(params.price)?,
            category: params.category.trim().to_string(),
            available: true,
            created_at: Utc::now(),
        })
    }

    fn scope(&self) -> &TenantId {
        &self.tenant_id
    }

    async fn on_update(&mut self, update: DishUpdate, _ctx: &()) -> Result<(), Self::Error> {
        if let Some(name) = update.name {
            self.name = clean_name(&name)?;
        }
        if let Some(price) = update.price {
            self.price = check_price(price)?;
        }
        if let Some(category) = update.category {
            self.category = category.trim().to_string();
        }
        if let Some(available) = update.available {
            self.available = available;
        }
        Ok(())
    }

    async fn handle_action(&mut self, action: DishAction, _ctx: &()) -> Result<(), Self::Error> {
        match action {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actor_framework::ResourceActor;

    #[tokio::test]
    async fn rejected_update_keeps_the_old_dish() {
        let (actor, client) = ResourceActor::<Dish>::new(8, DishId::new);
        tokio::spawn(actor.run(()));
        let tenant = TenantId::new();

        let dish = client
            .create(DishCreate {
                tenant_id: tenant,
                name: " Masala Dosa ".into(),
                price: Money(12_000),
                category: "Mains".into(),
            })
            .await
            .unwrap();
        assert_eq!(dish.name, "Masala Dosa");
        assert!(dish.available);

        // valid name, invalid price: neither is applied
        let err = client
            .update(
                tenant,
                dish.id,
                DishUpdate {
                    name: Some("Plain Dosa".into()),
                    price: Some(Money(-5)),
                    ..DishUpdate::default()
                },
            )
            .await
            .unwrap_err();
        assert!(matches!(
            MenuError::from(err),
            MenuError::ValidationError(_)
        ));

        let stored = client.get(tenant, dish.id).await.unwrap().unwrap();
        assert_eq!(stored.name, "Masala Dosa");
        assert_eq!(stored.price, Money(12_000));
    }
}
