//! Pricing and order placement commands.

use quickcart_checkout::security::RateLimiter;
use quickcart_checkout::stores::{CartStore, CheckoutSelectionStore, CheckoutStepStore, UserStore};
use quickcart_checkout::{CheckoutConfig, CheckoutSession, MockApi, PriceBreakdown, load_catalog};
use quickcart_core::{CityId, DeliveryTier};
use tracing::{info, warn};

use super::{CliError, FormInput, print_json};

/// Everything needed to run one checkout.
#[derive(Debug)]
pub struct CheckoutRequest {
    pub city: CityId,
    pub tier: DeliveryTier,
    pub form: FormInput,
    pub as_demo_user: bool,
}

/// Price the demo cart for a city and tier.
pub async fn quote(
    config: &CheckoutConfig,
    city: CityId,
    tier: DeliveryTier,
    json: bool,
) -> Result<(), CliError> {
    let mut cart = CartStore::new();
    let mut selection = CheckoutSelectionStore::new();
    load_catalog(&MockApi::new(config), &mut cart, &mut selection).await?;

    select(&mut selection, city, tier)?;
    let breakdown = PriceBreakdown::quote(&cart, &selection);
    if json {
        return print_json(&breakdown);
    }
    print_breakdown(&breakdown);
    Ok(())
}

/// Walk every checkout step and place the order against the mock backend.
#[allow(clippy::print_stdout)]
pub async fn place(
    config: &CheckoutConfig,
    request: CheckoutRequest,
    json: bool,
) -> Result<(), CliError> {
    let api = MockApi::new(config);
    let mut cart = CartStore::new();
    let mut selection = CheckoutSelectionStore::new();
    let mut steps = CheckoutStepStore::new();
    load_catalog(&api, &mut cart, &mut selection).await?;

    if selection.city(request.city).is_none() {
        return Err(CliError::UnknownCity(request.city));
    }

    let users = if request.as_demo_user {
        UserStore::with_mock_user()
    } else {
        UserStore::new()
    };
    let limiter = RateLimiter::new(config.rate_limit);

    let mut session = CheckoutSession::new(&mut cart, &mut selection, &mut steps, api)
        .with_user(&users)
        .with_rate_limiter(&limiter)
        .with_navigation(config.step_navigation);

    request.form.apply_to(session.form_mut());

    session.next_step()?;
    info!(step = session.current_step().label(), "Customer information accepted");
    session.select_city(Some(request.city));
    session.select_delivery_tier(Some(request.tier))?;
    session.next_step()?;
    info!(step = session.current_step().label(), "Delivery accepted");

    let mut status = session.subscribe_status();
    let watcher = tokio::spawn(async move {
        while status.changed().await.is_ok() {
            let current = *status.borrow_and_update();
            if current.is_submitting() {
                info!("Submitting order");
            } else {
                info!(status = ?current, "Order status changed");
            }
        }
    });

    let breakdown = session.pricing();
    let placed = session.place_order().await;
    drop(session);
    if let Err(e) = watcher.await {
        warn!(error = %e, "Order status watcher failed");
    }
    let order = placed?;

    if json {
        return print_json(&order);
    }
    println!("Order {} placed", order.id);
    println!(
        "  {} {} <{}>",
        order.customer_info.first_name, order.customer_info.last_name, order.customer_info.email
    );
    println!("  {} item(s), {} delivery", order.items.len(), order.delivery_type);
    print_breakdown(&breakdown);
    Ok(())
}

fn select(
    selection: &mut CheckoutSelectionStore,
    city: CityId,
    tier: DeliveryTier,
) -> Result<(), CliError> {
    if selection.city(city).is_none() {
        return Err(CliError::UnknownCity(city));
    }
    selection.set_selected_city(Some(city));
    selection.set_selected_delivery_type(Some(tier))?;
    Ok(())
}

#[allow(clippy::print_stdout)]
fn print_breakdown(breakdown: &PriceBreakdown) {
    println!("  Subtotal  {:>10}", breakdown.subtotal.to_string());
    println!("  Delivery  {:>10}", breakdown.delivery.to_string());
    println!("  Total     {:>10}", breakdown.total.to_string());
}
