use cafe_order::clients::MenuState;
use cafe_order::lifecycle::{CafeConfig, CafeSystem};
use cafe_order::model::{Order, OrderStatus, UserId, CREATED_AT_FIELD};
use cafe_order::navigation::{NavigationIntent, NavigationState, Screen};
use cafe_order::ordering::{OrderError, SubmissionState};
use cafe_order::store::CollectionClient;
use serde_json::{json, Value};

fn menu() -> Vec<Value> {
    vec![
        json!({"name": "Espresso", "price": 2.5, "sizes": ["Single", "Double"]}),
        json!({"name": "Broken", "price": "free", "sizes": ["Cup"]}),
        json!({
            "name": "Latte",
            "price": 4.99,
            "description": "Espresso with steamed milk",
            "sizes": ["Small", "Medium", "Large"],
            "imageFilename": "latte.png"
        }),
    ]
}

/// Full end-to-end run with the real store and session actors.
#[tokio::test]
async fn test_full_order_flow() {
    let system = CafeSystem::with_seed(CafeConfig::default(), menu()).expect("Failed to seed");
    let mut nav = NavigationState::new(Screen::Menu);

    system
        .auth_client
        .sign_in(UserId::from("u1"))
        .await
        .expect("Failed to sign in");

    // Malformed record is dropped, the rest keep their order
    let items = system
        .catalog_loader()
        .load_items()
        .await
        .expect("Failed to load menu");
    let names: Vec<&str> = items.iter().map(|item| item.name.as_str()).collect();
    assert_eq!(names, vec!["Espresso", "Latte"]);

    let latte = items[1].clone();
    nav.apply(NavigationIntent::OpenProduct(latte.clone()));

    let mut workflow = system.order_workflow(latte);
    workflow.form_mut().increment_quantity();
    workflow.form_mut().set_address("12 Main St");
    assert_eq!(workflow.form().formatted_total(), "$9.98");

    let intent = workflow.submit().await.expect("Failed to place order");
    let NavigationIntent::OrderPlaced { order_id } = intent.clone() else {
        panic!("unexpected intent {:?}", intent);
    };
    assert_eq!(nav.apply(intent), &Screen::ThankYou);
    assert_eq!(workflow.state(), &SubmissionState::Succeeded);

    // Read the order back
    let orders = system.orders_client();
    let stored = orders
        .get(order_id)
        .await
        .expect("Failed to read order")
        .expect("Order not found");
    assert!(stored.str_field(CREATED_AT_FIELD).is_some());

    let order = Order::from_document(&stored).expect("Order did not parse");
    assert_eq!(order.user_id, UserId::from("u1"));
    assert_eq!(order.item_name, "Latte");
    assert_eq!(order.size, "Medium");
    assert_eq!(order.quantity, 2);
    assert_eq!(order.total_price, 9.98);
    assert_eq!(order.delivery_address, "12 Main St");
    assert_eq!(order.status, OrderStatus::Pending);

    // Second submit from the same form writes nothing
    assert_eq!(workflow.submit().await, Err(OrderError::AlreadyPlaced));
    assert_eq!(orders.list().await.unwrap().len(), 1);

    let intent = system.auth_client.sign_out().await.expect("Failed to sign out");
    assert_eq!(nav.apply(intent), &Screen::Login);

    drop(workflow);
    drop(orders);
    system.shutdown().await.expect("Shutdown failed");
}

#[tokio::test]
async fn test_missing_address_writes_nothing() {
    let system = CafeSystem::with_seed(CafeConfig::default(), menu()).unwrap();
    system.auth_client.sign_in(UserId::from("u1")).await.unwrap();

    let items = system.catalog_loader().load_items().await.unwrap();
    let mut workflow = system.order_workflow(items[1].clone());
    workflow.form_mut().increment_quantity();

    let result = workflow.submit().await;
    assert!(matches!(result, Err(OrderError::Validation(_))));
    assert!(matches!(workflow.state(), SubmissionState::Failed(_)));
    assert!(system.orders_client().list().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_signed_out_user_writes_nothing() {
    let system = CafeSystem::with_seed(CafeConfig::default(), menu()).unwrap();

    let items = system.catalog_loader().load_items().await.unwrap();
    let mut workflow = system.order_workflow(items[0].clone());
    workflow.form_mut().set_address("12 Main St");

    assert_eq!(workflow.submit().await, Err(OrderError::AuthRequired));
    assert!(system.orders_client().list().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_empty_menu_is_distinct_from_failure() {
    let system = CafeSystem::new(CafeConfig::default());

    let result = system.catalog_loader().load_items().await;
    assert_eq!(result, Ok(vec![]));

    let state = MenuState::from_result(result);
    assert_eq!(state, MenuState::Empty);
    assert!(!state.can_retry());

    system.shutdown().await.expect("Shutdown failed");
}

#[tokio::test]
async fn test_trim_address_from_config() {
    let config = CafeConfig {
        trim_address: true,
        ..CafeConfig::default()
    };
    let system = CafeSystem::with_seed(config, menu()).unwrap();
    system.auth_client.sign_in(UserId::from("u2")).await.unwrap();

    let items = system.catalog_loader().load_items().await.unwrap();
    let mut workflow = system.order_workflow(items[0].clone());

    workflow.form_mut().set_address("   ");
    assert!(matches!(
        workflow.submit().await,
        Err(OrderError::Validation(_))
    ));

    workflow.form_mut().set_address(" 7 Side Rd ");
    workflow.submit().await.unwrap();

    let orders = system.orders_client().list().await.unwrap();
    assert_eq!(orders.len(), 1);
    assert_eq!(orders[0].str_field("deliveryAddress"), Some("7 Side Rd"));
    assert_eq!(orders[0].str_field("size"), Some("Single"));
}
