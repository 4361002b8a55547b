//! Catalog and order placement services.
//!
//! # Architecture
//!
//! - Consumers depend on the [`Catalog`] and [`OrderPlacement`] traits, never on
//!   a concrete backend
//! - Every call resolves to an [`ApiResponse`] envelope
//! - [`MockApi`] serves the static seed data after a configurable delay and
//!   never fails

mod api;
pub mod seed;

pub use api::MockApi;

use std::future::Future;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use quickcart_core::{CartItem, City};

use crate::models::Order;

/// Envelope returned by every service call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub data: T,
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl<T> ApiResponse<T> {
    /// A successful response carrying `data`.
    pub fn ok(data: T, message: impl Into<String>) -> Self {
        Self {
            data,
            success: true,
            message: Some(message.into()),
        }
    }

    /// Unwrap the envelope, turning `success: false` into an error.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Rejected` with the response message when the
    /// backend reported failure.
    pub fn into_result(self) -> Result<T, ApiError> {
        if self.success {
            Ok(self.data)
        } else {
            Err(ApiError::Rejected(
                self.message.unwrap_or_else(|| "request failed".to_string()),
            ))
        }
    }
}

/// Errors a service backend can report.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The backend could not be reached.
    #[error("service unavailable: {0}")]
    Unavailable(String),

    /// The backend answered but refused the request.
    #[error("request rejected: {0}")]
    Rejected(String),
}

/// Source of cart items and delivery cities.
pub trait Catalog {
    /// Items to seed the cart with.
    fn get_cart_items(
        &self,
    ) -> impl Future<Output = Result<ApiResponse<Vec<CartItem>>, ApiError>> + Send;

    /// Every city that can be delivered to.
    fn get_cities(&self) -> impl Future<Output = Result<ApiResponse<Vec<City>>, ApiError>> + Send;
}

/// Backend that accepts placed orders.
pub trait OrderPlacement {
    /// Submit an order; the accepted order is echoed back.
    fn place_order(
        &self,
        order: Order,
    ) -> impl Future<Output = Result<ApiResponse<Order>, ApiError>> + Send;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_into_result() {
        assert_eq!(ApiResponse::ok(3, "fine").into_result(), Ok(3));

        let failed = ApiResponse {
            data: (),
            success: false,
            message: Some("out of stock".to_string()),
        };
        assert_eq!(
            failed.into_result(),
            Err(ApiError::Rejected("out of stock".to_string()))
        );
    }

    #[test]
    fn test_envelope_serialization() {
        let json = serde_json::to_value(ApiResponse {
            data: vec![1, 2],
            success: true,
            message: None,
        })
        .unwrap_or_default();
        assert_eq!(json, serde_json::json!({ "data": [1, 2], "success": true }));
    }
}
