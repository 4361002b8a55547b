//! Catalog listing commands.

use quickcart_checkout::{Catalog, CheckoutConfig, MockApi, delivery_option_views};
use quickcart_core::Price;
use rust_decimal::Decimal;

use super::{CliError, print_json};

/// List every delivery city with its tier prices.
#[allow(clippy::print_stdout)]
pub async fn cities(config: &CheckoutConfig, json: bool) -> Result<(), CliError> {
    let cities = MockApi::new(config).get_cities().await?.into_result()?;
    if json {
        return print_json(&cities);
    }

    for city in &cities {
        let tiers = delivery_option_views(Some(city))
            .into_iter()
            .map(|view| format!("{}: {}", view.tier, view.price))
            .collect::<Vec<_>>()
            .join(", ");
        println!("{:>3}  {:<15} {tiers}", city.id, city.name);
    }
    Ok(())
}

/// List the demo cart and its subtotal.
#[allow(clippy::print_stdout)]
pub async fn items(config: &CheckoutConfig, json: bool) -> Result<(), CliError> {
    let items = MockApi::new(config).get_cart_items().await?.into_result()?;
    if json {
        return print_json(&items);
    }

    for item in &items {
        println!(
            "{:>3}  {:<20} {:<10} {:>10}",
            item.id,
            item.name,
            item.manufacturer,
            Price::usd(item.price).to_string()
        );
    }
    let subtotal: Decimal = items.iter().map(|item| item.price).sum();
    println!("     {:<31} {:>10}", "Subtotal", Price::usd(subtotal).to_string());
    Ok(())
}
