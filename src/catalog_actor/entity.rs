//! Entity trait implementations for the Cafeteria and MenuItem domain types.

use crate::catalog_actor::CatalogError;
use crate::framework::{ActorEntity, ResourceClient};
use crate::model::{
    Cafeteria, CafeteriaCreate, CafeteriaId, MenuItem, MenuItemCreate, MenuItemId, MenuItemUpdate,
};
use async_trait::async_trait;
use rust_decimal::Decimal;
use tracing::debug;

fn validate_price(price: Decimal) -> Result<(), CatalogError> {
    if price.is_sign_negative() && !price.is_zero() {
        return Err(CatalogError::ValidationError(format!(
            "Price must not be negative: {price}"
        )));
    }
    Ok(())
}

#[async_trait]
impl ActorEntity for Cafeteria {
    type Id = CafeteriaId;
    type Create = CafeteriaCreate;
    type Update = ();
    type Filter = ();
    type Context = ();
    type Error = CatalogError;

    fn from_create_params(id: CafeteriaId, params: CafeteriaCreate) -> Result<Self, Self::Error> {
        if params.name.trim().is_empty() {
            return Err(CatalogError::ValidationError(
                "Cafeteria name must not be empty".into(),
            ));
        }
        Ok(Self {
            id,
            name: params.name,
            location: params.location,
            is_open: params.is_open,
        })
    }

    async fn on_update(&mut self, _update: (), _ctx: &()) -> Result<(), Self::Error> {
        Ok(())
    }
}

#[async_trait]
impl ActorEntity for MenuItem {
    type Id = MenuItemId;
    type Create = MenuItemCreate;
    type Update = MenuItemUpdate;
    /// Menu of one cafeteria.
    type Filter = CafeteriaId;
    /// Menu items may only be added to cafeterias that exist.
    type Context = ResourceClient<Cafeteria>;
    type Error = CatalogError;

    fn from_create_params(id: MenuItemId, params: MenuItemCreate) -> Result<Self, Self::Error> {
        validate_price(params.price)?;
        Ok(Self {
            id,
            cafeteria_id: params.cafeteria_id,
            name: params.name,
            price: params.price,
            is_available: params.is_available,
        })
    }

    fn matches(&self, cafeteria_id: &CafeteriaId) -> bool {
        self.cafeteria_id == *cafeteria_id
    }

    async fn on_create(&mut self, cafeterias: &ResourceClient<Cafeteria>) -> Result<(), Self::Error> {
        debug!(cafeteria_id = %self.cafeteria_id, "Checking cafeteria");
        let exists = cafeterias
            .exists(self.cafeteria_id)
            .await
            .map_err(|e| CatalogError::ActorCommunicationError(e.to_string()))?;
        if !exists {
            return Err(CatalogError::NotFound(self.cafeteria_id.to_string()));
        }
        Ok(())
    }

    /// # Fields Updated
    /// - `name`
    /// - `price`: must not be negative
    /// - `is_available`
    async fn on_update(
        &mut self,
        update: MenuItemUpdate,
        _ctx: &ResourceClient<Cafeteria>,
    ) -> Result<(), Self::Error> {
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(price) = update.price {
            validate_price(price)?;
            self.price = price;
        }
        if let Some(is_available) = update.is_available {
            self.is_available = is_available;
        }
        Ok(())
    }
}
