//! # Catalog Client
//!
//! Read access to cafeterias and menu items for the order workflow, plus the
//! create and update calls used to seed and maintain the catalog.
use crate::catalog_actor::CatalogError;
use crate::framework::{FrameworkError, ResourceClient};
use crate::model::{
    Cafeteria, CafeteriaCreate, CafeteriaId, MenuItem, MenuItemCreate, MenuItemId, MenuItemUpdate,
};
use tracing::{debug, instrument};

fn map_error(e: FrameworkError) -> CatalogError {
    match e {
        FrameworkError::NotFound(id) => CatalogError::NotFound(id),
        other => other
            .into_entity_error::<CatalogError>()
            .unwrap_or_else(|e| CatalogError::ActorCommunicationError(e.to_string())),
    }
}

/// Client for the Cafeteria and MenuItem actors.
#[derive(Clone)]
pub struct CatalogClient {
    cafeterias: ResourceClient<Cafeteria>,
    menu_items: ResourceClient<MenuItem>,
}

impl CatalogClient {
    pub fn new(cafeterias: ResourceClient<Cafeteria>, menu_items: ResourceClient<MenuItem>) -> Self {
        Self {
            cafeterias,
            menu_items,
        }
    }

    /// The generic cafeteria client, used as the menu item actor's context.
    pub fn cafeterias(&self) -> &ResourceClient<Cafeteria> {
        &self.cafeterias
    }

    #[instrument(skip(self))]
    pub async fn create_cafeteria(&self, params: CafeteriaCreate) -> Result<Cafeteria, CatalogError> {
        debug!("Sending request");
        self.cafeterias.create(params).await.map_err(map_error)
    }

    #[instrument(skip(self))]
    pub async fn cafeteria(&self, id: CafeteriaId) -> Result<Option<Cafeteria>, CatalogError> {
        debug!("Sending request");
        self.cafeterias.get(id).await.map_err(map_error)
    }

    #[instrument(skip(self))]
    pub async fn create_menu_item(&self, params: MenuItemCreate) -> Result<MenuItem, CatalogError> {
        debug!("Sending request");
        self.menu_items.create(params).await.map_err(map_error)
    }

    #[instrument(skip(self))]
    pub async fn menu_item(&self, id: MenuItemId) -> Result<Option<MenuItem>, CatalogError> {
        debug!("Sending request");
        self.menu_items.get(id).await.map_err(map_error)
    }

    /// Changes price or availability. Existing orders keep the price they captured.
    #[instrument(skip(self))]
    pub async fn update_menu_item(
        &self,
        id: MenuItemId,
        update: MenuItemUpdate,
    ) -> Result<MenuItem, CatalogError> {
        debug!("Sending request");
        self.menu_items.update(id, update).await.map_err(map_error)
    }

    /// Every menu item of one cafeteria, in creation order.
    #[instrument(skip(self))]
    pub async fn menu(&self, cafeteria_id: CafeteriaId) -> Result<Vec<MenuItem>, CatalogError> {
        debug!("Sending request");
        self.menu_items.list(cafeteria_id).await.map_err(map_error)
    }
}
