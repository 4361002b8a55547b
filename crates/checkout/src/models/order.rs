//! Order record built when the buyer places an order.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use quickcart_core::{CartItem, CityId, DeliveryTier, OrderId, Price};

use super::form::{Address, CustomerInfo};

/// A placed order. Orders are handed to the placement service and returned
/// to the caller; nothing stores them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: OrderId,
    pub items: Vec<CartItem>,
    pub customer_info: CustomerInfo,
    pub address: Address,
    pub city_id: CityId,
    pub delivery_type: DeliveryTier,
    pub delivery_price: Price,
    pub subtotal: Price,
    pub total: Price,
    pub created_at: DateTime<Utc>,
}
