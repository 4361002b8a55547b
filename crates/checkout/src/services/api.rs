//! In-process mock backend.

use std::time::Duration;

use tracing::{debug, info, instrument};

use quickcart_core::{CartItem, City};

use super::{ApiError, ApiResponse, Catalog, OrderPlacement, seed};
use crate::config::CheckoutConfig;
use crate::models::Order;

/// Serves the seed catalog and accepts every order, after a fixed delay that
/// stands in for a network round trip.
#[derive(Debug, Clone, Copy)]
pub struct MockApi {
    catalog_delay: Duration,
    placement_delay: Duration,
}

impl MockApi {
    /// Create a mock using the configured delays.
    #[must_use]
    pub const fn new(config: &CheckoutConfig) -> Self {
        Self {
            catalog_delay: config.catalog_delay,
            placement_delay: config.placement_delay,
        }
    }

    /// A mock that answers immediately.
    #[must_use]
    pub const fn instant() -> Self {
        Self {
            catalog_delay: Duration::ZERO,
            placement_delay: Duration::ZERO,
        }
    }
}

impl Default for MockApi {
    fn default() -> Self {
        Self::new(&CheckoutConfig::default())
    }
}

impl Catalog for MockApi {
    #[instrument(skip(self))]
    async fn get_cart_items(&self) -> Result<ApiResponse<Vec<CartItem>>, ApiError> {
        tokio::time::sleep(self.catalog_delay).await;
        let items = seed::cart_items();
        debug!(count = items.len(), "Loaded cart items");
        Ok(ApiResponse::ok(items, "Cart items retrieved successfully"))
    }

    #[instrument(skip(self))]
    async fn get_cities(&self) -> Result<ApiResponse<Vec<City>>, ApiError> {
        tokio::time::sleep(self.catalog_delay).await;
        let cities = seed::cities();
        debug!(count = cities.len(), "Loaded cities");
        Ok(ApiResponse::ok(cities, "Cities retrieved successfully"))
    }
}

impl OrderPlacement for MockApi {
    #[instrument(skip(self, order), fields(order_id = %order.id))]
    async fn place_order(&self, order: Order) -> Result<ApiResponse<Order>, ApiError> {
        tokio::time::sleep(self.placement_delay).await;
        info!(total = %order.total, items = order.items.len(), "Order accepted");
        Ok(ApiResponse::ok(order, "Order placed successfully"))
    }
}
