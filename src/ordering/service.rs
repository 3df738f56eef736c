//! # Order Service
//!
//! The operations callers invoke on orders. Every operation except creation takes
//! the acting [`Caller`] explicitly; there is no ambient security context.
//!
//! Checks run in a fixed order: referenced records are resolved first
//! (`NotFound`), then the caller is authorized (`Forbidden`), then the request
//! itself is validated (`InvalidArgument`). Errors are returned as raised.

use crate::clients::{CatalogClient, OrderClient, UserClient};
use crate::framework::ActorClient;
use crate::model::{Caller, Order, OrderId, OrderRequest, PickupCode};
use crate::order_actor::{OrderError, Resource};
use crate::ordering::builder::OrderBuilder;
use crate::ordering::pickup::PickupCodeGenerator;
use crate::ordering::policy::{self, Operation};
use crate::ordering::status;
use tracing::{info, instrument, warn};

#[derive(Clone)]
pub struct OrderService {
    users: UserClient,
    catalog: CatalogClient,
    orders: OrderClient,
    pickup_codes: PickupCodeGenerator,
    create_retries: u32,
}

impl OrderService {
    /// `create_retries` bounds how often an order is re-inserted with a fresh
    /// pickup code after losing a race for its first one.
    pub fn new(
        users: UserClient,
        catalog: CatalogClient,
        orders: OrderClient,
        pickup_codes: PickupCodeGenerator,
        create_retries: u32,
    ) -> Self {
        Self {
            users,
            catalog,
            orders,
            pickup_codes,
            create_retries,
        }
    }

    /// Places an order.
    ///
    /// 1. The cafeteria must exist, then the placing user, then every menu item;
    ///    each line's quantity is checked right after its menu item is found.
    /// 2. The cart must not be empty.
    /// 3. A free pickup code is drawn and the order stored with it in one insert.
    ///
    /// Nothing is stored unless every step succeeds.
    #[instrument(
        skip(self, request),
        fields(cafeteria_id = %request.cafeteria_id, user_id = %request.user_id, lines = request.items.len())
    )]
    pub async fn create_order(&self, request: OrderRequest) -> Result<Order, OrderError> {
        let cafeteria = self
            .catalog
            .cafeteria(request.cafeteria_id)
            .await?
            .ok_or_else(|| OrderError::not_found(Resource::Cafeteria, request.cafeteria_id))?;
        let user = self
            .users
            .get(request.user_id)
            .await?
            .ok_or_else(|| OrderError::not_found(Resource::User, request.user_id))?;

        let mut builder = OrderBuilder::new(&cafeteria, &user);
        for line in &request.items {
            let menu_item = self
                .catalog
                .menu_item(line.menu_item_id)
                .await?
                .ok_or_else(|| OrderError::not_found(Resource::MenuItem, line.menu_item_id))?;
            builder.add_line(&menu_item, line.quantity)?;
        }
        builder.ensure_lines()?;

        let code = self.pickup_codes.generate(&self.orders).await?;
        let mut draft = builder.build(code)?;
        let mut retries = 0;
        loop {
            match self.orders.save(draft.clone()).await {
                Ok(order) => {
                    info!(order_id = %order.id, pickup_code = %order.pickup_code, total = %order.total_amount, "Order placed");
                    return Ok(order);
                }
                Err(OrderError::Conflict(code)) if retries < self.create_retries => {
                    retries += 1;
                    warn!(%code, retries, "Pickup code taken at insert, regenerating");
                    draft.pickup_code = self.pickup_codes.generate(&self.orders).await?;
                }
                Err(e) => return Err(e),
            }
        }
    }

    /// Reads one order.
    #[instrument(skip(self, caller), fields(caller = %caller.user_id))]
    pub async fn get_order(&self, caller: &Caller, id: OrderId) -> Result<Order, OrderError> {
        let order = self.load(id).await?;
        authorize(caller, &order, Operation::Read)?;
        Ok(order)
    }

    /// Finds the order a customer claims at the counter.
    #[instrument(skip(self, caller), fields(caller = %caller.user_id))]
    pub async fn find_by_pickup_code(&self, caller: &Caller, code: &str) -> Result<Order, OrderError> {
        let code: PickupCode = code
            .parse()
            .map_err(|e: crate::model::InvalidPickupCode| OrderError::InvalidArgument(e.to_string()))?;
        let order = self
            .orders
            .find_by_pickup_code(&code)
            .await?
            .ok_or_else(|| OrderError::not_found(Resource::Order, &code))?;
        authorize(caller, &order, Operation::Read)?;
        Ok(order)
    }

    /// The orders the caller may see: everything for an admin, their cafeteria's
    /// orders for an owner (none if no cafeteria is assigned), their own otherwise.
    #[instrument(skip(self, caller), fields(caller = %caller.user_id))]
    pub async fn list_orders(&self, caller: &Caller) -> Result<Vec<Order>, OrderError> {
        let Some(filter) = policy::visible_scope(caller) else {
            info!("Cafeteria owner without a cafeteria, nothing to list");
            return Ok(Vec::new());
        };
        let orders = self.orders.find(filter).await?;
        info!(?filter, count = orders.len(), "Listed orders");
        Ok(orders)
    }

    /// Moves an order to the status named by `label` (matched ignoring case).
    #[instrument(skip(self, caller), fields(caller = %caller.user_id))]
    pub async fn update_status(
        &self,
        caller: &Caller,
        id: OrderId,
        label: &str,
    ) -> Result<Order, OrderError> {
        let order = self.load(id).await?;
        authorize(caller, &order, Operation::UpdateStatus)?;
        let requested = status::parse(label)?;
        // The edge itself is logged by the order actor, which sees the stored status
        let updated = self.orders.update_status(id, requested).await?;
        info!(order_id = %id, to = %updated.status, "Status updated");
        Ok(updated)
    }

    /// Deletes an order and its items.
    #[instrument(skip(self, caller), fields(caller = %caller.user_id))]
    pub async fn delete_order(&self, caller: &Caller, id: OrderId) -> Result<(), OrderError> {
        let order = self.load(id).await?;
        authorize(caller, &order, Operation::Delete)?;
        self.orders.delete_by_id(id).await?;
        info!(order_id = %id, "Order deleted");
        Ok(())
    }

    async fn load(&self, id: OrderId) -> Result<Order, OrderError> {
        self.orders
            .find_by_id(id)
            .await?
            .ok_or_else(|| OrderError::not_found(Resource::Order, id))
    }
}

fn authorize(caller: &Caller, order: &Order, operation: Operation) -> Result<(), OrderError> {
    if policy::can_access(caller, order, operation) {
        info!(caller = %caller.user_id, order_id = %order.id, ?operation, "Access granted");
        Ok(())
    } else {
        warn!(caller = %caller.user_id, order_id = %order.id, ?operation, "Access denied");
        Err(OrderError::Forbidden(format!(
            "{} may not {:?} {}",
            caller.user_id, operation, order.id
        )))
    }
}
