//! Integration tests for `QuickCart`.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p quickcart-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `checkout_flow` - Full checkout sessions over seeded stores
//! - `security` - Sanitization, validation and rate limiting across crates
//!
//! This module holds the shared fixtures.

use std::sync::{Arc, Mutex, PoisonError};

use quickcart_checkout::models::{Address, CustomerInfo, Order};
use quickcart_checkout::services::seed;
use quickcart_checkout::stores::{CartStore, CheckoutSelectionStore, CheckoutStepStore};
use quickcart_checkout::{ApiError, ApiResponse, OrderPlacement};

/// One session's worth of stores, seeded with the demo catalog.
#[derive(Debug, Default)]
pub struct Stores {
    pub cart: CartStore,
    pub selection: CheckoutSelectionStore,
    pub steps: CheckoutStepStore,
}

impl Stores {
    /// Demo cart ($2627.50) and all ten cities.
    #[must_use]
    pub fn seeded() -> Self {
        Self {
            cart: CartStore::with_items(seed::cart_items()),
            selection: CheckoutSelectionStore::with_cities(seed::cities()),
            steps: CheckoutStepStore::new(),
        }
    }
}

/// Valid buyer details.
#[must_use]
pub fn jane_doe() -> CustomerInfo {
    CustomerInfo {
        first_name: "Jane".to_string(),
        last_name: "Doe".to_string(),
        email: "jane@doe.com".to_string(),
        phone: "+1 (555) 010-0100".to_string(),
    }
}

/// Valid delivery address.
#[must_use]
pub fn main_street() -> Address {
    Address {
        street: "1 Main St".to_string(),
        apartment: Some("Apt 4".to_string()),
        zip_code: "10001".to_string(),
    }
}

/// Placement backend that always refuses.
#[derive(Debug, Clone, Copy)]
pub struct FailingPlacement;

impl OrderPlacement for FailingPlacement {
    async fn place_order(&self, _order: Order) -> Result<ApiResponse<Order>, ApiError> {
        Err(ApiError::Unavailable("backend offline".to_string()))
    }
}

/// Placement backend that answers `success: false`.
#[derive(Debug, Clone, Copy)]
pub struct DecliningPlacement;

impl OrderPlacement for DecliningPlacement {
    async fn place_order(&self, order: Order) -> Result<ApiResponse<Order>, ApiError> {
        Ok(ApiResponse {
            data: order,
            success: false,
            message: Some("payment declined".to_string()),
        })
    }
}

/// Placement backend that accepts and keeps every order.
#[derive(Debug, Clone, Default)]
pub struct RecordingPlacement {
    orders: Arc<Mutex<Vec<Order>>>,
}

impl RecordingPlacement {
    /// Orders accepted so far.
    #[must_use]
    pub fn orders(&self) -> Vec<Order> {
        self.orders
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl OrderPlacement for RecordingPlacement {
    async fn place_order(&self, order: Order) -> Result<ApiResponse<Order>, ApiError> {
        self.orders
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(order.clone());
        Ok(ApiResponse::ok(order, "recorded"))
    }
}
