use campus_orders::catalog_actor::CatalogError;
use campus_orders::lifecycle::{OrderSystem, SystemConfig};
use campus_orders::model::{
    Cafeteria, CafeteriaCreate, CafeteriaId, Caller, LineItem, MenuItem, MenuItemCreate,
    MenuItemId, MenuItemUpdate, Order, OrderId, OrderRequest, OrderStatus, Role, UserCreate,
    UserId, UserUpdate,
};
use campus_orders::order_actor::{OrderError, Resource};
use campus_orders::ordering::TransitionMode;
use campus_orders::user_actor::UserError;
use rust_decimal::Decimal;
use std::collections::HashSet;

/// Two cafeterias, a small menu and one caller of every kind.
struct Campus {
    system: OrderSystem,
    north: Cafeteria,
    south: Cafeteria,
    soup: MenuItem,
    salad: MenuItem,
    noodles: MenuItem,
    admin: Caller,
    north_owner: Caller,
    south_owner: Caller,
    unassigned_owner: Caller,
    alice: Caller,
    bob: Caller,
}

async fn campus_with(config: SystemConfig) -> Campus {
    let system = OrderSystem::new(config);
    let catalog = &system.catalog;
    let users = &system.users;

    let north = catalog
        .create_cafeteria(CafeteriaCreate::new("North Hall", "North campus"))
        .await
        .unwrap();
    let south = catalog
        .create_cafeteria(CafeteriaCreate::new("South Hall", "South campus"))
        .await
        .unwrap();
    let soup = catalog
        .create_menu_item(MenuItemCreate::new(north.id, "Soup", Decimal::new(500, 2)))
        .await
        .unwrap();
    let salad = catalog
        .create_menu_item(MenuItemCreate::new(north.id, "Salad", Decimal::new(725, 2)))
        .await
        .unwrap();
    let noodles = catalog
        .create_menu_item(MenuItemCreate::new(south.id, "Noodles", Decimal::new(600, 2)))
        .await
        .unwrap();

    let mut callers = Vec::new();
    for create in [
        UserCreate::new("Ada", "ada@campus.edu", &[Role::Admin]),
        UserCreate::new("Nina", "nina@campus.edu", &[Role::CafeteriaOwner]).owning(north.id),
        UserCreate::new("Sven", "sven@campus.edu", &[Role::CafeteriaOwner]).owning(south.id),
        UserCreate::new("Uma", "uma@campus.edu", &[Role::CafeteriaOwner]),
        UserCreate::new("Alice", "alice@campus.edu", &[Role::Student]),
        UserCreate::new("Bob", "bob@campus.edu", &[Role::Faculty]),
    ] {
        let user = users.create_user(create).await.unwrap();
        callers.push(users.principal(user.id).await.unwrap());
    }
    let [admin, north_owner, south_owner, unassigned_owner, alice, bob]: [Caller; 6] =
        callers.try_into().unwrap();

    Campus {
        system,
        north,
        south,
        soup,
        salad,
        noodles,
        admin,
        north_owner,
        south_owner,
        unassigned_owner,
        alice,
        bob,
    }
}

async fn campus() -> Campus {
    campus_with(SystemConfig::default()).await
}

fn request(cafeteria: &Cafeteria, caller: &Caller, lines: &[(&MenuItem, i32)]) -> OrderRequest {
    OrderRequest {
        cafeteria_id: cafeteria.id,
        user_id: caller.user_id,
        items: lines
            .iter()
            .map(|(item, quantity)| LineItem::new(item.id, *quantity))
            .collect(),
    }
}

impl Campus {
    async fn place(&self, cafeteria: &Cafeteria, caller: &Caller, lines: &[(&MenuItem, i32)]) -> Order {
        self.system
            .service
            .create_order(request(cafeteria, caller, lines))
            .await
            .expect("Failed to place order")
    }

    async fn stored(&self, id: OrderId) -> Option<Order> {
        self.system.orders.find_by_id(id).await.unwrap()
    }
}

#[tokio::test]
async fn test_two_lines_of_the_same_item_total_fifteen() {
    let campus = campus().await;

    let order = campus
        .place(&campus.north, &campus.alice, &[(&campus.soup, 2), (&campus.soup, 1)])
        .await;

    assert_eq!(order.items.len(), 2);
    assert_eq!(order.items[0].menu_item_id, campus.soup.id);
    assert_eq!(order.items[0].quantity, 2);
    assert_eq!(order.items[1].quantity, 1);
    assert_eq!(order.total_amount, Decimal::new(1500, 2));
    assert_eq!(order.total_amount.to_string(), "15.00");
    assert_eq!(order.status, OrderStatus::Pending);
    assert_eq!(order.cafeteria_id, campus.north.id);
    assert_eq!(order.user_id, campus.alice.user_id);
    assert_eq!(order.pickup_code.as_str().len(), 6);

    assert_eq!(campus.stored(order.id).await, Some(order));
    campus.system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_total_is_exact_across_items() {
    let campus = campus().await;
    let order = campus
        .place(&campus.north, &campus.alice, &[(&campus.salad, 3), (&campus.soup, 1)])
        .await;

    let sum: Decimal = order
        .items
        .iter()
        .map(|item| item.unit_price * Decimal::from(item.quantity))
        .sum();
    assert_eq!(order.total_amount, sum);
    assert_eq!(order.total_amount, Decimal::new(2675, 2));
}

#[tokio::test]
async fn test_access_matrix() {
    let campus = campus().await;
    let service = &campus.system.service;
    let order = campus.place(&campus.north, &campus.alice, &[(&campus.soup, 1)]).await;

    // Read
    for caller in [&campus.alice, &campus.north_owner, &campus.admin] {
        assert!(service.get_order(caller, order.id).await.is_ok());
    }
    for caller in [&campus.bob, &campus.south_owner, &campus.unassigned_owner] {
        assert!(matches!(
            service.get_order(caller, order.id).await,
            Err(OrderError::Forbidden(_))
        ));
    }

    // Update status: the customer who placed it may only read it
    for caller in [&campus.alice, &campus.bob, &campus.south_owner] {
        assert!(matches!(
            service.update_status(caller, order.id, "preparing").await,
            Err(OrderError::Forbidden(_))
        ));
    }
    let updated = service
        .update_status(&campus.north_owner, order.id, "preparing")
        .await
        .unwrap();
    assert_eq!(updated.status, OrderStatus::Preparing);
    let updated = service
        .update_status(&campus.admin, order.id, "ready_for_pickup")
        .await
        .unwrap();
    assert_eq!(updated.status, OrderStatus::ReadyForPickup);

    // Delete
    for caller in [&campus.alice, &campus.bob, &campus.south_owner] {
        assert!(matches!(
            service.delete_order(caller, order.id).await,
            Err(OrderError::Forbidden(_))
        ));
    }
    service.delete_order(&campus.north_owner, order.id).await.unwrap();
    assert!(!campus.system.orders.exists_by_id(order.id).await.unwrap());
}

#[tokio::test]
async fn test_owner_of_other_cafeteria_cannot_delete() {
    let campus = campus().await;
    let order = campus.place(&campus.north, &campus.alice, &[(&campus.soup, 1)]).await;

    let result = campus
        .system
        .service
        .delete_order(&campus.south_owner, order.id)
        .await;

    assert!(matches!(result, Err(OrderError::Forbidden(_))));
    assert!(campus.system.orders.exists_by_id(order.id).await.unwrap());
    assert_eq!(campus.stored(order.id).await, Some(order));
}

#[tokio::test]
async fn test_missing_order_is_not_found_before_access_check() {
    let campus = campus().await;
    let service = &campus.system.service;

    let result = service.delete_order(&campus.bob, OrderId(99)).await;
    assert_eq!(result, Err(OrderError::not_found(Resource::Order, OrderId(99))));
    let result = service.update_status(&campus.bob, OrderId(99), "DONE").await;
    assert!(matches!(
        result,
        Err(OrderError::NotFound {
            resource: Resource::Order,
            ..
        })
    ));
}

#[tokio::test]
async fn test_unknown_status_label_leaves_order_unchanged() {
    let campus = campus().await;
    let order = campus.place(&campus.north, &campus.alice, &[(&campus.soup, 1)]).await;

    let result = campus
        .system
        .service
        .update_status(&campus.north_owner, order.id, "DONE")
        .await;

    assert!(matches!(result, Err(OrderError::InvalidArgument(_))));
    assert_eq!(campus.stored(order.id).await.unwrap().status, OrderStatus::Pending);
}

#[tokio::test]
async fn test_strict_mode_refuses_skipped_and_terminal_transitions() {
    let campus = campus().await;
    let service = &campus.system.service;
    let owner = &campus.north_owner;
    let order = campus.place(&campus.north, &campus.alice, &[(&campus.soup, 1)]).await;

    let skipped = service.update_status(owner, order.id, "COMPLETED").await;
    assert!(matches!(skipped, Err(OrderError::InvalidArgument(_))));
    assert_eq!(campus.stored(order.id).await.unwrap().status, OrderStatus::Pending);

    for label in ["Preparing", "READY_FOR_PICKUP", "completed"] {
        service.update_status(owner, order.id, label).await.unwrap();
    }
    // Re-applying the current status changes nothing
    let same = service.update_status(owner, order.id, "COMPLETED").await.unwrap();
    assert_eq!(same.status, OrderStatus::Completed);

    let cancel = service.update_status(owner, order.id, "CANCELLED").await;
    assert!(matches!(cancel, Err(OrderError::InvalidArgument(_))));
    assert_eq!(campus.stored(order.id).await.unwrap().status, OrderStatus::Completed);
}

#[tokio::test]
async fn test_permissive_mode_allows_any_label() {
    let config = SystemConfig {
        transition_mode: TransitionMode::Permissive,
        ..SystemConfig::default()
    };
    let campus = campus_with(config.clone()).await;
    assert_eq!(campus.system.config(), &config);
    let service = &campus.system.service;
    let order = campus.place(&campus.north, &campus.alice, &[(&campus.soup, 1)]).await;

    service.update_status(&campus.admin, order.id, "completed").await.unwrap();
    let reopened = service.update_status(&campus.admin, order.id, "pending").await.unwrap();
    assert_eq!(reopened.status, OrderStatus::Pending);
}

#[tokio::test]
async fn test_failed_creations_persist_nothing() {
    let campus = campus().await;
    let service = &campus.system.service;
    let alice = &campus.alice;

    // Unknown cafeteria wins over a bad quantity
    let mut unknown_cafeteria = request(&campus.north, alice, &[(&campus.soup, 0)]);
    unknown_cafeteria.cafeteria_id = CafeteriaId(404);
    assert_eq!(
        service.create_order(unknown_cafeteria).await,
        Err(OrderError::not_found(Resource::Cafeteria, CafeteriaId(404)))
    );

    let mut unknown_user = request(&campus.north, alice, &[(&campus.soup, 1)]);
    unknown_user.user_id = UserId(404);
    assert_eq!(
        service.create_order(unknown_user).await,
        Err(OrderError::not_found(Resource::User, UserId(404)))
    );

    let mut unknown_item = request(&campus.north, alice, &[(&campus.soup, 1)]);
    unknown_item.items.push(LineItem::new(MenuItemId(404), 1));
    assert_eq!(
        service.create_order(unknown_item).await,
        Err(OrderError::not_found(Resource::MenuItem, MenuItemId(404)))
    );

    for quantity in [0, -3] {
        let bad = request(&campus.north, alice, &[(&campus.soup, 1), (&campus.salad, quantity)]);
        assert!(matches!(
            service.create_order(bad).await,
            Err(OrderError::InvalidArgument(_))
        ));
    }

    let empty = request(&campus.north, alice, &[]);
    assert!(matches!(
        service.create_order(empty).await,
        Err(OrderError::InvalidArgument(_))
    ));

    assert!(campus.system.orders.find_all().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_concurrent_creations_get_distinct_pickup_codes() {
    let campus = campus().await;
    let count = 64;

    let mut tasks = Vec::new();
    for i in 0..count {
        let service = campus.system.service.clone();
        let order = request(&campus.north, &campus.alice, &[(&campus.soup, 1 + i % 3)]);
        tasks.push(tokio::spawn(async move { service.create_order(order).await }));
    }

    let mut codes = HashSet::new();
    for task in tasks {
        let order = task.await.unwrap().unwrap();
        codes.insert(order.pickup_code);
    }
    assert_eq!(codes.len(), count as usize);

    let stored = campus.system.orders.find_all().await.unwrap();
    assert_eq!(stored.len(), count as usize);
    let stored_codes: HashSet<_> = stored.into_iter().map(|o| o.pickup_code).collect();
    assert_eq!(stored_codes, codes);
}

#[tokio::test]
async fn test_price_change_does_not_alter_placed_orders() {
    let campus = campus().await;
    let order = campus.place(&campus.north, &campus.alice, &[(&campus.soup, 2)]).await;

    let repriced = campus
        .system
        .catalog
        .update_menu_item(
            campus.soup.id,
            MenuItemUpdate {
                price: Some(Decimal::new(900, 2)),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(repriced.price, Decimal::new(900, 2));

    let stored = campus.stored(order.id).await.unwrap();
    assert_eq!(stored.items[0].unit_price, Decimal::new(500, 2));
    assert_eq!(stored.total_amount, Decimal::new(1000, 2));

    let newer = campus.place(&campus.north, &campus.alice, &[(&campus.soup, 2)]).await;
    assert_eq!(newer.total_amount, Decimal::new(1800, 2));
}

#[tokio::test]
async fn test_status_updates_are_last_write_wins() {
    let campus = campus().await;
    let service = &campus.system.service;
    let order = campus.place(&campus.north, &campus.alice, &[(&campus.soup, 1)]).await;

    // Both staff members look at the same PENDING order
    let seen_by_owner = service.get_order(&campus.north_owner, order.id).await.unwrap();
    let seen_by_admin = service.get_order(&campus.admin, order.id).await.unwrap();
    assert_eq!(seen_by_owner.status, seen_by_admin.status);

    service
        .update_status(&campus.north_owner, order.id, "preparing")
        .await
        .unwrap();
    // The admin's view is stale; no version check refuses the write
    service
        .update_status(&campus.admin, order.id, "cancelled")
        .await
        .unwrap();

    assert_eq!(campus.stored(order.id).await.unwrap().status, OrderStatus::Cancelled);
}

#[tokio::test]
async fn test_concurrent_status_updates_all_apply() {
    let config = SystemConfig {
        transition_mode: TransitionMode::Permissive,
        ..SystemConfig::default()
    };
    let campus = campus_with(config).await;
    let order = campus.place(&campus.north, &campus.alice, &[(&campus.soup, 1)]).await;

    let labels = ["PREPARING", "READY_FOR_PICKUP", "CANCELLED", "COMPLETED"];
    let mut tasks = Vec::new();
    for label in labels {
        let service = campus.system.service.clone();
        let admin = campus.admin.clone();
        tasks.push(tokio::spawn(async move {
            service.update_status(&admin, order.id, label).await
        }));
    }
    for task in tasks {
        task.await.unwrap().unwrap();
    }

    let last = campus.stored(order.id).await.unwrap().status;
    assert!(labels.contains(&last.label()));
}

#[tokio::test]
async fn test_pickup_code_lookup() {
    let campus = campus().await;
    let service = &campus.system.service;
    let order = campus.place(&campus.north, &campus.alice, &[(&campus.soup, 1)]).await;
    let code = order.pickup_code.to_string();

    let claimed = service.find_by_pickup_code(&campus.north_owner, &code).await.unwrap();
    assert_eq!(claimed, order);
    assert!(service.find_by_pickup_code(&campus.alice, &code).await.is_ok());
    assert!(matches!(
        service.find_by_pickup_code(&campus.bob, &code).await,
        Err(OrderError::Forbidden(_))
    ));
    assert!(matches!(
        service.find_by_pickup_code(&campus.admin, "12ab").await,
        Err(OrderError::InvalidArgument(_))
    ));

    let unused = if code == "100000" { "100001" } else { "100000" };
    assert!(matches!(
        service.find_by_pickup_code(&campus.admin, unused).await,
        Err(OrderError::NotFound {
            resource: Resource::Order,
            ..
        })
    ));

    // A deleted order frees its code
    service.delete_order(&campus.admin, order.id).await.unwrap();
    assert!(campus
        .system
        .orders
        .find_by_pickup_code(&order.pickup_code)
        .await
        .unwrap()
        .is_none());
}

#[tokio::test]
async fn test_listing_is_scoped_by_role() {
    let campus = campus().await;
    let service = &campus.system.service;
    let first = campus.place(&campus.north, &campus.alice, &[(&campus.soup, 1)]).await;
    let second = campus.place(&campus.south, &campus.alice, &[(&campus.noodles, 2)]).await;
    let third = campus.place(&campus.north, &campus.bob, &[(&campus.salad, 1)]).await;

    let ids = |orders: Vec<Order>| orders.into_iter().map(|o| o.id).collect::<Vec<_>>();

    assert_eq!(
        ids(service.list_orders(&campus.admin).await.unwrap()),
        vec![first.id, second.id, third.id]
    );
    assert_eq!(
        ids(service.list_orders(&campus.north_owner).await.unwrap()),
        vec![first.id, third.id]
    );
    assert_eq!(
        ids(service.list_orders(&campus.south_owner).await.unwrap()),
        vec![second.id]
    );
    assert_eq!(
        ids(service.list_orders(&campus.alice).await.unwrap()),
        vec![first.id, second.id]
    );
    assert_eq!(ids(service.list_orders(&campus.bob).await.unwrap()), vec![third.id]);
    assert!(service
        .list_orders(&campus.unassigned_owner)
        .await
        .unwrap()
        .is_empty());

    let by_cafeteria = campus
        .system
        .orders
        .find_by_cafeteria_id(campus.south.id)
        .await
        .unwrap();
    assert_eq!(ids(by_cafeteria), vec![second.id]);
    let by_user = campus
        .system
        .orders
        .find_by_user_id(campus.bob.user_id)
        .await
        .unwrap();
    assert_eq!(ids(by_user), vec![third.id]);
}

#[tokio::test]
async fn test_assigning_a_cafeteria_to_an_owner() {
    let campus = campus().await;
    let order = campus.place(&campus.south, &campus.alice, &[(&campus.noodles, 1)]).await;

    campus
        .system
        .users
        .update_user(
            campus.unassigned_owner.user_id,
            UserUpdate {
                cafeteria_id: Some(campus.south.id),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    let owner = campus
        .system
        .users
        .principal(campus.unassigned_owner.user_id)
        .await
        .unwrap();

    let listed = campus.system.service.list_orders(&owner).await.unwrap();
    assert_eq!(listed, vec![order]);
}

#[tokio::test]
async fn test_reference_data_constraints() {
    let campus = campus().await;

    let duplicate = campus
        .system
        .users
        .create_user(UserCreate::new("Alice Again", "ALICE@campus.edu", &[Role::Student]))
        .await;
    assert_eq!(
        duplicate,
        Err(UserError::AlreadyExists("alice@campus.edu".into()))
    );
    let found = campus
        .system
        .users
        .find_by_email("Alice@Campus.edu")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(found.id, campus.alice.user_id);

    let orphan = campus
        .system
        .catalog
        .create_menu_item(MenuItemCreate::new(CafeteriaId(404), "Ghost", Decimal::ONE))
        .await;
    assert_eq!(orphan, Err(CatalogError::NotFound("cafeteria_404".into())));

    let menu = campus.system.catalog.menu(campus.north.id).await.unwrap();
    assert_eq!(menu, vec![campus.soup.clone(), campus.salad.clone()]);
}

#[tokio::test]
async fn test_unknown_principal() {
    let campus = campus().await;
    let result = campus.system.users.principal(UserId(404)).await;
    assert_eq!(result, Err(UserError::NotFound("user_404".into())));
}

#[tokio::test]
async fn test_graceful_shutdown() {
    let campus = campus().await;
    campus.place(&campus.north, &campus.alice, &[(&campus.soup, 1)]).await;
    assert_eq!(campus.system.config(), &SystemConfig::default());
    campus.system.shutdown().await.unwrap();
}
