//! Demo: one signed-in user orders two lattes.

use cafe_order::clients::MenuState;
use cafe_order::lifecycle::{setup_tracing, CafeConfig, CafeSystem};
use cafe_order::model::UserId;
use cafe_order::navigation::{NavigationIntent, NavigationState, Screen};
use serde_json::json;
use tracing::{error, info, Instrument};

#[tokio::main]
async fn main() -> Result<(), String> {
    setup_tracing();

    let config = CafeConfig::from_env().map_err(|e| e.to_string())?;
    info!("Starting café demo");

    let menu = vec![
        json!({
            "name": "Espresso",
            "price": 2.5,
            "description": "A short, strong shot",
            "sizes": ["Single", "Double"],
            "imageFilename": "espresso.png"
        }),
        json!({
            "name": "Latte",
            "price": 4.99,
            "description": "Espresso with steamed milk",
            "sizes": ["Small", "Medium", "Large"],
            "imageFilename": "latte.png"
        }),
        json!({
            "name": "Mystery Brew",
            "description": "No price, so it never reaches the menu",
            "sizes": ["Cup"]
        }),
    ];
    let system = CafeSystem::with_seed(config, menu).map_err(|e| e.to_string())?;
    let mut nav = NavigationState::default();

    system
        .auth_client
        .sign_in(UserId::from("demo-user"))
        .await
        .map_err(|e| e.to_string())?;
    nav.apply(NavigationIntent::BackToMenu);

    let span = tracing::info_span!("menu");
    let menu_state = async { MenuState::from_result(system.catalog_loader().load_items().await) }
        .instrument(span)
        .await;

    let items = match menu_state {
        MenuState::Loaded(items) => items,
        other => {
            error!(state = ?other, "Menu unavailable");
            return system.shutdown().await;
        }
    };
    for item in &items {
        info!(name = %item.name, price = %item.formatted_price(), "On the menu");
    }

    let Some(latte) = items.into_iter().find(|item| item.name == "Latte") else {
        error!("Latte missing from the menu");
        return system.shutdown().await;
    };
    nav.apply(NavigationIntent::OpenProduct(latte.clone()));

    let mut workflow = system.order_workflow(latte);
    workflow.form_mut().increment_quantity();
    workflow.form_mut().set_address("12 Main St");
    info!(total = %workflow.form().formatted_total(), "Order form ready");

    let span = tracing::info_span!("order_processing");
    match workflow.submit().instrument(span).await {
        Ok(intent) => {
            nav.apply(intent);
            info!(screen = ?nav.current(), "Order processed successfully");
        }
        Err(e) => error!(error = %e, "Order processing failed"),
    }
    drop(workflow);

    if *nav.current() == Screen::ThankYou {
        nav.apply(NavigationIntent::BackToMenu);
    }

    match system.auth_client.sign_out().await {
        Ok(intent) => {
            nav.apply(intent);
        }
        Err(e) => error!(error = %e, "Sign-out failed"),
    }

    system.shutdown().await?;

    info!("Application completed successfully");
    Ok(())
}
