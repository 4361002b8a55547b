//! Order totals and delivery option presentation.

use rust_decimal::Decimal;
use serde::Serialize;

use quickcart_core::{City, DeliveryTier, Price};

use crate::stores::{CartStore, CheckoutSelectionStore};

/// Subtotal, delivery surcharge and total of the current checkout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceBreakdown {
    pub subtotal: Price,
    pub delivery: Price,
    pub total: Price,
}

impl PriceBreakdown {
    #[must_use]
    pub fn new(subtotal: Decimal, delivery: Decimal) -> Self {
        Self {
            subtotal: Price::usd(subtotal),
            delivery: Price::usd(delivery),
            total: Price::usd(subtotal + delivery),
        }
    }

    /// Price the cart against the current selection.
    ///
    /// Delivery is zero until both a known city and a tier are selected.
    #[must_use]
    pub fn quote(cart: &CartStore, selection: &CheckoutSelectionStore) -> Self {
        let delivery = selection
            .selected_city()
            .zip(selection.selected_delivery_type())
            .map_or(Decimal::ZERO, |(city, tier)| {
                CheckoutSelectionStore::delivery_price_for(city, tier)
            });
        Self::new(cart.total(), delivery)
    }
}

/// One row of the delivery tier picker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeliveryOptionView {
    pub tier: DeliveryTier,
    pub label: &'static str,
    pub description: &'static str,
    /// `"$40"` style price, or `"Not available"`.
    pub price: String,
    pub disabled: bool,
}

/// Picker rows for every tier, in fixed order.
///
/// Without a city every row is disabled.
#[must_use]
pub fn delivery_option_views(city: Option<&City>) -> Vec<DeliveryOptionView> {
    DeliveryTier::ALL
        .into_iter()
        .map(|tier| {
            let price = city.and_then(|city| city.delivery.price(tier));
            DeliveryOptionView {
                tier,
                label: tier.label(),
                description: tier.description(),
                price: price.map_or_else(
                    || "Not available".to_string(),
                    |amount| format!("${}", amount.normalize()),
                ),
                disabled: price.is_none(),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use quickcart_core::{CartItem, CartItemId, CityId, DeliveryOptions};

    use super::*;

    fn los_angeles() -> City {
        City {
            id: CityId::new(2),
            name: "Los Angeles".to_string(),
            delivery: DeliveryOptions {
                fast: None,
                regular: Some(Decimal::new(25, 0)),
                slow: Some(Decimal::new(550, 2)),
            },
        }
    }

    #[test]
    fn test_quote_without_selection() {
        let cart = CartStore::with_items(vec![CartItem {
            id: CartItemId::new(1),
            name: "Wireless Headphones".to_string(),
            manufacturer: "SoundMax".to_string(),
            price: Decimal::new(12_900, 2),
            image_url: String::new(),
        }]);
        let quote = PriceBreakdown::quote(&cart, &CheckoutSelectionStore::new());
        assert_eq!(quote.delivery.amount, Decimal::ZERO);
        assert_eq!(quote.total.to_string(), "$129.00");
    }

    #[test]
    fn test_quote_with_selection() {
        let mut selection = CheckoutSelectionStore::with_cities(vec![los_angeles()]);
        selection.set_selected_city(Some(CityId::new(2)));
        assert!(
            selection
                .set_selected_delivery_type(Some(DeliveryTier::Regular))
                .is_ok()
        );
        let quote = PriceBreakdown::quote(&CartStore::new(), &selection);
        assert_eq!(quote.total.amount, Decimal::new(25, 0));
    }

    #[test]
    fn test_delivery_option_views() {
        let city = los_angeles();
        let views = delivery_option_views(Some(&city));
        assert_eq!(views.len(), 3);

        assert_eq!(views[0].label, "Fast Delivery");
        assert_eq!(views[0].price, "Not available");
        assert!(views[0].disabled);

        assert_eq!(views[1].price, "$25");
        assert_eq!(views[1].description, "3-5 business days");
        assert!(!views[1].disabled);

        assert_eq!(views[2].price, "$5.5");
    }

    #[test]
    fn test_delivery_option_views_without_city() {
        assert!(delivery_option_views(None).iter().all(|view| view.disabled));
    }
}
