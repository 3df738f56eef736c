use crate::clients::{CatalogClient, OrderClient, UserClient};
use crate::lifecycle::SystemConfig;
use crate::ordering::{OrderService, PickupCodeGenerator};
use tracing::{error, info};

/// The runtime orchestrator for the cafeteria order system.
///
/// # Architecture
///
/// Four actors, each in its own Tokio task:
/// - **User Actor**: users, roles and owner cafeteria assignments
/// - **Cafeteria Actor** and **Menu Item Actor**: the catalog
/// - **Order Actor**: the order repository
///
/// The [`OrderService`] on top runs the order workflow against their clients.
///
/// # Example
///
/// ```ignore
/// let system = OrderSystem::new(SystemConfig::from_env()?);
///
/// let order = system.service.create_order(request).await?;
/// let caller = system.users.principal(order.user_id).await?;
/// system.service.get_order(&caller, order.id).await?;
///
/// system.shutdown().await?;
/// ```
pub struct OrderSystem {
    /// The order workflow.
    pub service: OrderService,

    /// Client for interacting with the User actor
    pub users: UserClient,

    /// Client for the Cafeteria and MenuItem actors
    pub catalog: CatalogClient,

    /// Direct repository access, bypassing access checks
    pub orders: OrderClient,

    config: SystemConfig,

    /// Task handles for all running actors (used for graceful shutdown)
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl OrderSystem {
    /// Creates and initializes a new `OrderSystem` with all actors running.
    ///
    /// Must be called inside a Tokio runtime.
    pub fn new(config: SystemConfig) -> Self {
        info!(?config, "Starting order system");

        // 1. Create actors (no dependencies)
        let (user_actor, users) = crate::user_actor::new(config.channel_buffer);
        let (cafeteria_actor, menu_item_actor, catalog) =
            crate::catalog_actor::new(config.channel_buffer);
        let (order_actor, orders) = crate::order_actor::new(config.channel_buffer);

        // 2. Start actors with injected context
        let user_handle = tokio::spawn(user_actor.run(()));
        let cafeteria_handle = tokio::spawn(cafeteria_actor.run(()));
        let menu_item_handle = tokio::spawn(menu_item_actor.run(catalog.cafeterias().clone()));
        let order_handle = tokio::spawn(order_actor.run(config.transition_mode));

        // 3. The workflow on top
        let service = OrderService::new(
            users.clone(),
            catalog.clone(),
            orders.clone(),
            PickupCodeGenerator::new(config.pickup_code_attempts),
            config.create_retries,
        );

        Self {
            service,
            users,
            catalog,
            orders,
            config,
            handles: vec![user_handle, cafeteria_handle, menu_item_handle, order_handle],
        }
    }

    pub fn config(&self) -> &SystemConfig {
        &self.config
    }

    /// Gracefully shuts down the entire system.
    ///
    /// Drops every client held here, which closes the actors' channels, then
    /// waits for each actor task. Clones of the clients or the service kept
    /// elsewhere keep their actors alive, so drop those first.
    ///
    /// # Returns
    ///
    /// - `Ok(())` if all actors shut down cleanly
    /// - `Err(String)` if any actor task failed or panicked
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down system...");

        drop(self.service);
        drop(self.orders);
        drop(self.catalog);
        drop(self.users);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Actor task failed: {:?}", e);
                return Err(format!("Actor task failed: {:?}", e));
            }
        }

        info!("System shutdown complete.");
        Ok(())
    }
}
