//! Demo: seeds a cafeteria, walks one order from placement to pickup and shows
//! the access policy turning away a stranger.

use campus_orders::lifecycle::{setup_tracing, OrderSystem, SystemConfig};
use campus_orders::ordering::TransitionMode;
use campus_orders::model::{
    CafeteriaCreate, LineItem, MenuItemCreate, MenuItemUpdate, OrderRequest, Role, UserCreate,
};
use rust_decimal::Decimal;
use tracing::{error, info, Instrument};

#[tokio::main]
async fn main() -> Result<(), String> {
    setup_tracing();

    let config = SystemConfig::from_env().map_err(|e| e.to_string())?;
    let system = OrderSystem::new(config);

    // Catalog and people
    let span = tracing::info_span!("seeding");
    let (cafeteria, soup, student, owner, stranger) = async {
        let cafeteria = system
            .catalog
            .create_cafeteria(CafeteriaCreate::new("North Hall", "North campus"))
            .await?;
        let soup = system
            .catalog
            .create_menu_item(MenuItemCreate::new(cafeteria.id, "Tomato soup", Decimal::new(500, 2)))
            .await?;
        let student = system
            .users
            .create_user(UserCreate::new("Alice", "alice@campus.edu", &[Role::Student]))
            .await?;
        let owner = system
            .users
            .create_user(
                UserCreate::new("Olga", "olga@campus.edu", &[Role::CafeteriaOwner]).owning(cafeteria.id),
            )
            .await?;
        let stranger = system
            .users
            .create_user(UserCreate::new("Bob", "bob@campus.edu", &[Role::Student]))
            .await?;
        Ok::<_, Box<dyn std::error::Error>>((cafeteria, soup, student, owner, stranger))
    }
    .instrument(span)
    .await
    .map_err(|e| e.to_string())?;

    info!(cafeteria_id = %cafeteria.id, menu_item_id = %soup.id, "Catalog seeded");

    let span = tracing::info_span!("order_processing");
    let result = async {
        let order = system
            .service
            .create_order(OrderRequest {
                cafeteria_id: cafeteria.id,
                user_id: student.id,
                items: vec![LineItem::new(soup.id, 2), LineItem::new(soup.id, 1)],
            })
            .await?;
        info!(order_id = %order.id, total = %order.total_amount, pickup_code = %order.pickup_code, "Order placed");

        // A later price change does not touch the placed order
        system
            .catalog
            .update_menu_item(
                soup.id,
                MenuItemUpdate {
                    price: Some(Decimal::new(650, 2)),
                    ..Default::default()
                },
            )
            .await?;

        let staff = system.users.principal(owner.id).await?;
        for status in ["preparing", "READY_FOR_PICKUP"] {
            system.service.update_status(&staff, order.id, status).await?;
        }
        if system.config().transition_mode == TransitionMode::Strict {
            if let Err(e) = system.service.update_status(&staff, order.id, "pending").await {
                info!(error = %e, "Move back to PENDING refused");
            }
        }

        let outsider = system.users.principal(stranger.id).await?;
        if let Err(e) = system.service.get_order(&outsider, order.id).await {
            info!(error = %e, "Stranger turned away");
        }

        let claimed = system
            .service
            .find_by_pickup_code(&staff, order.pickup_code.as_str())
            .await?;
        let done = system
            .service
            .update_status(&staff, claimed.id, "completed")
            .await?;
        info!(order_id = %done.id, status = %done.status, total = %done.total_amount, "Order picked up");
        Ok::<_, Box<dyn std::error::Error>>(())
    }
    .instrument(span)
    .await;

    if let Err(e) = result {
        error!(error = %e, "Order processing failed");
    }

    system.shutdown().await?;

    info!("Application completed successfully");
    Ok(())
}
