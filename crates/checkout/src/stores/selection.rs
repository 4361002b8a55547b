//! City and delivery tier selection.

use rust_decimal::Decimal;

use quickcart_core::{City, CityId, DeliveryTier};

use crate::error::SelectionError;

/// The buyer's delivery destination and speed.
///
/// Holds the loaded city list so a tier can be checked against the selected
/// city before it is stored.
#[derive(Debug, Clone, Default)]
pub struct CheckoutSelectionStore {
    cities: Vec<City>,
    selected_city_id: Option<CityId>,
    selected_delivery_type: Option<DeliveryTier>,
    delivery_price: Decimal,
}

impl CheckoutSelectionStore {
    /// An empty selection with no cities loaded.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// An empty selection over `cities`.
    #[must_use]
    pub fn with_cities(cities: Vec<City>) -> Self {
        Self {
            cities,
            ..Self::default()
        }
    }

    /// Replace the city list. The current selection is left as is.
    pub fn set_cities(&mut self, cities: Vec<City>) {
        self.cities = cities;
    }

    #[must_use]
    pub fn cities(&self) -> &[City] {
        &self.cities
    }

    #[must_use]
    pub const fn selected_city_id(&self) -> Option<CityId> {
        self.selected_city_id
    }

    #[must_use]
    pub const fn selected_delivery_type(&self) -> Option<DeliveryTier> {
        self.selected_delivery_type
    }

    /// Surcharge of the stored tier; zero when none is stored.
    #[must_use]
    pub const fn delivery_price(&self) -> Decimal {
        self.delivery_price
    }

    /// The selected city, if one is selected and present in the city list.
    #[must_use]
    pub fn selected_city(&self) -> Option<&City> {
        self.selected_city_id.and_then(|id| self.city(id))
    }

    /// Look up a loaded city by id.
    #[must_use]
    pub fn city(&self, id: CityId) -> Option<&City> {
        self.cities.iter().find(|city| city.id == id)
    }

    /// Select a city, or clear the selection with `None`.
    ///
    /// Always clears the delivery tier and its price, even when the city does
    /// not change.
    pub fn set_selected_city(&mut self, id: Option<CityId>) {
        tracing::debug!(city_id = ?id, "Selected city");
        self.selected_city_id = id;
        self.selected_delivery_type = None;
        self.delivery_price = Decimal::ZERO;
    }

    /// Store a delivery tier.
    ///
    /// With no city selected, or with `None`, the value is stored as given and
    /// the price is zero. Otherwise the tier must be offered by the selected
    /// city.
    ///
    /// # Errors
    ///
    /// Returns `SelectionError::UnknownCity` if the selected city is not in the
    /// city list, or `SelectionError::TierUnavailable` if the city does not
    /// offer the tier. The store is unchanged on error.
    pub fn set_selected_delivery_type(
        &mut self,
        tier: Option<DeliveryTier>,
    ) -> Result<(), SelectionError> {
        let (Some(city_id), Some(requested)) = (self.selected_city_id, tier) else {
            self.selected_delivery_type = tier;
            self.delivery_price = Decimal::ZERO;
            return Ok(());
        };

        let city = self
            .city(city_id)
            .ok_or(SelectionError::UnknownCity(city_id))?;
        let price = city
            .delivery
            .price(requested)
            .ok_or_else(|| SelectionError::TierUnavailable {
                city: city.name.clone(),
                tier: requested,
            })?;

        tracing::debug!(%city_id, tier = %requested, %price, "Selected delivery tier");
        self.selected_delivery_type = Some(requested);
        self.delivery_price = price;
        Ok(())
    }

    /// Tiers offered by `city`, in `fast`, `regular`, `slow` order.
    #[must_use]
    pub fn available_delivery_types(city: &City) -> Vec<DeliveryTier> {
        city.delivery.available_tiers()
    }

    /// Surcharge of `tier` in `city`; zero when the tier is unavailable.
    #[must_use]
    pub fn delivery_price_for(city: &City, tier: DeliveryTier) -> Decimal {
        city.delivery_price(tier)
    }

    /// Whether a known city and one of its offered tiers are both selected.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        match (self.selected_city(), self.selected_delivery_type) {
            (Some(city), Some(tier)) => city.delivery.is_available(tier),
            _ => false,
        }
    }

    /// Clear city, tier and price.
    pub fn reset_checkout(&mut self) {
        self.selected_city_id = None;
        self.selected_delivery_type = None;
        self.delivery_price = Decimal::ZERO;
    }
}
