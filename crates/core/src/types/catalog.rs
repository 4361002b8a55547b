//! Catalog records: cart items and delivery cities.
//!
//! These are immutable reference data seeded by the catalog service.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::id::{CartItemId, CityId};
use super::status::DeliveryTier;

/// A purchasable item as shown in the cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    pub id: CartItemId,
    pub name: String,
    pub manufacturer: String,
    /// Unit price in the store currency. Never negative.
    pub price: Decimal,
    pub image_url: String,
}

/// Delivery surcharge per tier for one city.
///
/// `None` means the tier is not offered in that city. A city with every tier
/// set to `None` is legal, just unusable for checkout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DeliveryOptions {
    pub fast: Option<Decimal>,
    pub regular: Option<Decimal>,
    pub slow: Option<Decimal>,
}

impl DeliveryOptions {
    /// Surcharge for a tier, or `None` when the tier is unavailable.
    #[must_use]
    pub const fn price(&self, tier: DeliveryTier) -> Option<Decimal> {
        match tier {
            DeliveryTier::Fast => self.fast,
            DeliveryTier::Regular => self.regular,
            DeliveryTier::Slow => self.slow,
        }
    }

    /// Whether a tier is offered.
    #[must_use]
    pub const fn is_available(&self, tier: DeliveryTier) -> bool {
        self.price(tier).is_some()
    }

    /// Offered tiers, always in `fast`, `regular`, `slow` order.
    #[must_use]
    pub fn available_tiers(&self) -> Vec<DeliveryTier> {
        DeliveryTier::ALL
            .into_iter()
            .filter(|tier| self.is_available(*tier))
            .collect()
    }
}

/// A delivery destination.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct City {
    pub id: CityId,
    pub name: String,
    pub delivery: DeliveryOptions,
}

impl City {
    /// Surcharge for a tier in this city; zero when the tier is unavailable.
    #[must_use]
    pub fn delivery_price(&self, tier: DeliveryTier) -> Decimal {
        self.delivery.price(tier).unwrap_or(Decimal::ZERO)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn los_angeles() -> City {
        City {
            id: CityId::new(2),
            name: "Los Angeles".to_string(),
            delivery: DeliveryOptions {
                fast: None,
                regular: Some(Decimal::new(25, 0)),
                slow: Some(Decimal::new(5, 0)),
            },
        }
    }

    #[test]
    fn test_available_tiers_keep_fixed_order() {
        let city = los_angeles();
        assert_eq!(
            city.delivery.available_tiers(),
            vec![DeliveryTier::Regular, DeliveryTier::Slow]
        );
    }

    #[test]
    fn test_unavailable_tier_costs_zero() {
        let city = los_angeles();
        assert_eq!(city.delivery_price(DeliveryTier::Fast), Decimal::ZERO);
        assert_eq!(
            city.delivery_price(DeliveryTier::Regular),
            Decimal::new(25, 0)
        );
    }

    #[test]
    fn test_city_without_any_tier_is_representable() {
        let options = DeliveryOptions::default();
        assert!(options.available_tiers().is_empty());
    }
}
